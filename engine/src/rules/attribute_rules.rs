//! `Attribute`/`Item`/`AttrChain`/`ClassAttribute` rule family (spec §4.1).

use crate::goal::Goal;
use crate::rule::RuleApplication;

/// Identifiers that read safely as a bare `.name` accessor without
/// needing escaping; every name the rule set ever attaches is ASCII and
/// underscore-based, so this is really just documentation of the
/// assumption, not a real filter.
fn is_plain_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn applicable_attribute(obj: &Goal, name: &str) -> Vec<RuleApplication> {
    let mut rules = Vec::new();

    if is_plain_identifier(name) {
        let name = name.to_string();
        rules.push(RuleApplication {
            name: "attr_dot",
            priority: 0,
            subgoals: vec![obj.clone()],
            weave: Box::new(move |subs| format!("{}.{}", subs[0], name)),
        });
    }

    rules.push(RuleApplication {
        name: "attr_filter",
        priority: 10,
        subgoals: vec![obj.clone(), Goal::Str(name.to_string())],
        weave: Box::new(|subs| format!("{}|attr({})", subs[0], subs[1])),
    });

    rules
}

pub fn applicable_item(obj: &Goal, key: &Goal) -> Vec<RuleApplication> {
    vec![RuleApplication {
        name: "item_subscript",
        priority: 0,
        subgoals: vec![obj.clone(), key.clone()],
        weave: Box::new(|subs| format!("{}[{}]", subs[0], subs[1])),
    }]
}

/// Desugar a chain of attribute names into nested `Attribute` goals, so
/// the generator only ever has to dispatch `Attribute` itself.
pub fn desugar_attr_chain(obj: &Goal, names: &[String]) -> Goal {
    names
        .iter()
        .fold(obj.clone(), |acc, name| Goal::attribute(acc, name.clone()))
}

pub fn applicable_attr_chain(obj: &Goal, names: &[String]) -> Vec<RuleApplication> {
    vec![RuleApplication::passthrough(
        "attr_chain_desugar",
        0,
        desugar_attr_chain(obj, names),
    )]
}

pub fn applicable_class_attribute(obj: &Goal) -> Vec<RuleApplication> {
    vec![RuleApplication::passthrough(
        "class_attribute",
        0,
        Goal::attribute(obj.clone(), "__class__"),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_has_dot_and_filter_alternatives() {
        let rules = applicable_attribute(&Goal::Config, "foo");
        assert_eq!(rules.len(), 2);
        assert_eq!((rules[0].weave)(&["config".to_string()]), "config.foo");
        assert_eq!(
            (rules[1].weave)(&["config".to_string(), "'foo'".to_string()]),
            "config|attr('foo')"
        );
    }

    #[test]
    fn test_desugar_chain_nests_left_to_right() {
        let chain = desugar_attr_chain(
            &Goal::Config,
            &["__class__".to_string(), "__init__".to_string()],
        );
        match chain {
            Goal::Attribute(obj, name) => {
                assert_eq!(name, "__init__");
                assert_eq!(*obj, Goal::attribute(Goal::Config, "__class__"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
