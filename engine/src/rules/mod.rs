//! The rule set (C2, spec §4.1): a flat, data-driven registry dispatched
//! by goal discriminant, not a class hierarchy (spec §9).

mod attribute_rules;
mod char_rules;
mod composite_rules;
mod config_rules;
mod eval_rules;
mod import_rules;
mod int_rules;
mod popen_rules;
mod shared;
mod string_rules;

use crate::config::EngineConfig;
use crate::context::Context;
use crate::goal::Goal;
use crate::rule::{sort_by_priority, RuleApplication};

/// All rule alternatives applicable to `goal` under `context`, priority
/// sorted (spec §4.2 step 4). `Literal` is handled directly by the
/// generator core and never reaches this dispatcher.
pub fn applicable(goal: &Goal, context: &Context, config: &EngineConfig) -> Vec<RuleApplication> {
    let rules = match goal {
        Goal::Literal(_) => Vec::new(),
        Goal::UnsignedInt(n) => int_rules::applicable_unsigned(*n, context, config),
        Goal::Int(n) => int_rules::applicable_signed(*n, context, config),
        Goal::PositiveIntIndex(n) => int_rules::applicable_positive_index(*n),
        Goal::Str(s) => string_rules::applicable(s, context),
        Goal::Char(c) => char_rules::applicable(*c, context),
        Goal::PositiveChar => char_rules::applicable_positive(context),
        Goal::Attribute(obj, name) => attribute_rules::applicable_attribute(obj, name),
        Goal::Item(obj, key) => attribute_rules::applicable_item(obj, key),
        Goal::AttrChain(obj, names) => attribute_rules::applicable_attr_chain(obj, names),
        Goal::ClassAttribute(obj) => attribute_rules::applicable_class_attribute(obj),
        Goal::Call(callee, args) => composite_rules::applicable(callee, args),
        Goal::Import(module) => import_rules::applicable(module),
        Goal::EvalFunc => {
            if config.enable_eval_goals {
                eval_rules::applicable_eval_func()
            } else {
                Vec::new()
            }
        }
        Goal::Eval(expr) => {
            if config.enable_eval_goals {
                eval_rules::applicable_eval(expr)
            } else {
                Vec::new()
            }
        }
        Goal::Config => {
            if config.enable_config_goals {
                config_rules::applicable()
            } else {
                Vec::new()
            }
        }
        Goal::ModuleOsPopenRead(cmd) => {
            if config.enable_popen_goals {
                popen_rules::applicable_module(cmd)
            } else {
                Vec::new()
            }
        }
        Goal::OsPopenRead(cmd) => {
            if config.enable_popen_goals {
                popen_rules::applicable_direct(cmd)
            } else {
                Vec::new()
            }
        }
    };

    sort_by_priority(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_has_no_rules() {
        let ctx = Context::new();
        let config = EngineConfig::default();
        assert!(applicable(&Goal::Literal("x".to_string()), &ctx, &config).is_empty());
    }

    #[test]
    fn test_disabled_popen_goals_yield_no_rules() {
        let ctx = Context::new();
        let mut config = EngineConfig::default();
        config.enable_popen_goals = false;
        assert!(applicable(&Goal::OsPopenRead("id".to_string()), &ctx, &config).is_empty());
    }

    #[test]
    fn test_rules_are_sorted_ascending() {
        let ctx = Context::new();
        let config = EngineConfig::default();
        let rules = applicable(&Goal::UnsignedInt(12), &ctx, &config);
        for w in rules.windows(2) {
            assert!(w[0].priority <= w[1].priority);
        }
    }
}
