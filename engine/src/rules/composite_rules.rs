//! Internal `Call` composite — function-call syntax over an arbitrary
//! callee goal and argument goals. Not part of the public generation-type
//! surface; the rule set uses it wherever a real call (`os.popen(cmd)`,
//! `object.__subclasses__()`, `eval(expr)`) is needed.

use crate::goal::Goal;
use crate::rule::RuleApplication;

pub fn applicable(callee: &Goal, args: &[Goal]) -> Vec<RuleApplication> {
    let mut subgoals = Vec::with_capacity(1 + args.len());
    subgoals.push(callee.clone());
    subgoals.extend(args.iter().cloned());
    let arg_count = args.len();

    vec![RuleApplication {
        name: "call_expr",
        priority: 0,
        subgoals,
        weave: Box::new(move |subs| format!("{}({})", subs[0], subs[1..1 + arg_count].join(","))),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_with_no_args() {
        let rules = applicable(&Goal::EvalFunc, &[]);
        assert_eq!((rules[0].weave)(&["eval".to_string()]), "eval()");
    }

    #[test]
    fn test_call_with_args() {
        let rules = applicable(&Goal::EvalFunc, &[Goal::Str("1".to_string())]);
        let subs = vec!["eval".to_string(), "'1'".to_string()];
        assert_eq!((rules[0].weave)(&subs), "eval('1')");
    }
}
