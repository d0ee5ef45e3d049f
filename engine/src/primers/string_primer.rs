//! String-variable primer (C5, spec §4.4). Two fixed useful strings,
//! `"_"` and `"%"`, with canonical wire-exact expressions reproduced from
//! `original_source/fenjing/full_payload_gen.py::get_str_context` (spec
//! §13). Ordering matters: `"_"` is probed first because `"%"`'s
//! canonical expression is textually self-contained but conceptually
//! builds on the same `lipsum`/`batch`/`escape` trick chain.
use crate::canonical::{PERCENT_EXPR, UNDERSCORE_EXPR};
use crate::context::Context;
use crate::oracle::Oracle;

struct StrVar {
    name: &'static str,
    value: &'static str,
    expr: &'static str,
}

pub fn prime(oracle: &dyn Oracle) -> (String, Context) {
    let candidates = [
        StrVar {
            name: "un",
            value: "_",
            expr: UNDERSCORE_EXPR,
        },
        StrVar {
            name: "perc",
            value: "%",
            expr: PERCENT_EXPR,
        },
    ];

    let mut prefix = String::new();
    let mut context = Context::new();

    for var in candidates {
        let set_stmt = format!("{{%set {}={}%}}", var.name, var.expr);
        if oracle.check(&set_stmt) {
            prefix.push_str(&set_stmt);
            context.bind(var.name, var.value);
        }
    }

    (prefix, context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_true_oracle_binds_both() {
        let (prefix, context) = prime(&(|_: &str| true));
        assert_eq!(context.name_for_value("_"), Some("un"));
        assert_eq!(context.name_for_value("%"), Some("perc"));
        assert!(prefix.contains(UNDERSCORE_EXPR));
        assert!(prefix.contains(PERCENT_EXPR));
    }

    #[test]
    fn test_rejecting_everything_binds_nothing() {
        let (prefix, context) = prime(&(|_: &str| false));
        assert!(context.is_empty());
        assert!(prefix.is_empty());
    }

    #[test]
    fn test_underscore_probed_before_percent() {
        let mut seen = Vec::new();
        let oracle = |s: &str| {
            seen.push(s.to_string());
            true
        };
        let _ = prime(&oracle);
        assert!(seen[0].contains(UNDERSCORE_EXPR));
    }
}
