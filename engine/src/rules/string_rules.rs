//! `Str` rule family (spec §4.1, §13's canonical literals).

use crate::canonical::{PERCENT_EXPR, UNDERSCORE_EXPR};
use crate::context::Context;
use crate::goal::Goal;
use crate::rule::RuleApplication;

pub fn applicable(s: &str, context: &Context) -> Vec<RuleApplication> {
    let mut rules = Vec::new();

    if let Some(name) = context.name_for_value(s) {
        rules.push(RuleApplication::terminal("str_context_var", 0, name));
    }

    if s == "_" {
        rules.push(RuleApplication::terminal(
            "str_underscore_canonical",
            5,
            UNDERSCORE_EXPR,
        ));
    }
    if s == "%" {
        rules.push(RuleApplication::terminal(
            "str_percent_canonical",
            5,
            PERCENT_EXPR,
        ));
    }

    if s.is_empty() {
        // Nothing to compose: an empty string is either a quoted literal
        // or it isn't representable without quotes at all.
        rules.push(RuleApplication::terminal("str_empty_quoted", 5, "''"));
    } else {
        let chars: Vec<Goal> = s.chars().map(Goal::Char).collect();
        rules.push(RuleApplication {
            name: "str_char_concat",
            priority: 20,
            subgoals: chars,
            weave: Box::new(|subs| format!("({})", subs.join("~"))),
        });
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore_has_canonical_and_fallback() {
        let ctx = Context::new();
        let rules = applicable("_", &ctx);
        assert!(rules.iter().any(|r| r.name == "str_underscore_canonical"));
        assert!(rules.iter().any(|r| r.name == "str_char_concat"));
    }

    #[test]
    fn test_empty_string_has_no_char_concat_rule() {
        let ctx = Context::new();
        let rules = applicable("", &ctx);
        assert!(!rules.iter().any(|r| r.name == "str_char_concat"));
    }

    #[test]
    fn test_general_string_composes_per_char() {
        let ctx = Context::new();
        let rules = applicable("id", &ctx);
        let concat = rules.iter().find(|r| r.name == "str_char_concat").unwrap();
        assert_eq!(concat.subgoals.len(), 2);
        assert_eq!(concat.subgoals[0], Goal::Char('i'));
        assert_eq!(concat.subgoals[1], Goal::Char('d'));
    }
}
