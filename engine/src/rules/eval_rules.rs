//! `EvalFunc`/`Eval` rule family.

use super::shared::{eval_func_from, globals_via_lipsum, globals_via_subclass_walk};
use crate::goal::Goal;
use crate::rule::RuleApplication;

pub fn applicable_eval_func() -> Vec<RuleApplication> {
    vec![
        RuleApplication::passthrough(
            "eval_func_via_lipsum_globals",
            0,
            eval_func_from(globals_via_lipsum()),
        ),
        RuleApplication::passthrough(
            "eval_func_via_subclass_walk",
            10,
            eval_func_from(globals_via_subclass_walk()),
        ),
    ]
}

pub fn applicable_eval(expr: &str) -> Vec<RuleApplication> {
    vec![RuleApplication {
        name: "eval_call",
        priority: 0,
        subgoals: vec![Goal::EvalFunc, Goal::Str(expr.to_string())],
        weave: Box::new(|subs| format!("{}({})", subs[0], subs[1])),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_func_has_two_alternatives() {
        assert_eq!(applicable_eval_func().len(), 2);
    }

    #[test]
    fn test_eval_call_weave() {
        let rules = applicable_eval("1+1");
        let subs = vec!["eval".to_string(), "'1+1'".to_string()];
        assert_eq!((rules[0].weave)(&subs), "eval('1+1')");
    }
}
