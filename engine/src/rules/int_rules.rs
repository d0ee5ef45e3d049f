//! `UnsignedInt`/`Int`/`PositiveIntIndex` rule family (spec §4.1).

use crate::config::EngineConfig;
use crate::context::Context;
use crate::goal::Goal;
use crate::rule::RuleApplication;

/// Smallest non-trivial factor pair `(a, b)` with `a * b == n`, `a <= b`,
/// `a > 1`, preferring the pair closest to sqrt(n) so both factors stay
/// small (spec §4.1: "multiplication of two smaller factors").
fn smallest_factor_pair(n: u64) -> Option<(u64, u64)> {
    // Search downward from floor(sqrt(n)): the first divisor found this
    // way is at most sqrt(n), so `b = n / a` is at least sqrt(n) and the
    // `a <= b` invariant holds without needing to swap anything.
    let mut a = (n as f64).sqrt() as u64;
    while a > 1 {
        if n % a == 0 {
            return Some((a, n / a));
        }
        a -= 1;
    }
    None
}

pub fn applicable_unsigned(n: u64, context: &Context, config: &EngineConfig) -> Vec<RuleApplication> {
    let mut rules = Vec::new();

    if let Some(name) = context.name_for_value(&n.to_string()) {
        rules.push(RuleApplication::terminal("int_context_var", 0, name));
    }

    if n == 0 {
        rules.push(RuleApplication::terminal("int_zero", 5, "({}|length)"));
    }
    if n == 1 {
        rules.push(RuleApplication::terminal(
            "int_one",
            5,
            "({}|length|length)",
        ));
    }

    if (2..=9).contains(&n) {
        let ones = vec![Goal::UnsignedInt(1); n as usize];
        rules.push(RuleApplication {
            name: "int_addition_chain",
            priority: 10,
            subgoals: ones,
            weave: Box::new(|subs| format!("({})", subs.join("+"))),
        });
    }

    if n >= config.int_primer_upper_bound as u64 {
        if let Some((a, b)) = smallest_factor_pair(n) {
            if a > 1 && b > 1 {
                rules.push(RuleApplication {
                    name: "int_factor_product",
                    priority: 15,
                    subgoals: vec![Goal::UnsignedInt(a), Goal::UnsignedInt(b)],
                    weave: Box::new(|subs| format!("({}*{})", subs[0], subs[1])),
                });
            }
        }
    }

    // Digit composition: any non-negative integer can be spelled as its
    // decimal digit string coerced with the `int` filter. Restricted to
    // n >= 10: a single digit's `Str` goal bottoms out in exactly one
    // `Char`, and `Char`'s own digit rule (`char_rules::applicable`)
    // produces that digit via `UnsignedInt` — composing a one-digit
    // integer this way would just recurse back into itself. Multi-digit
    // n doesn't have this problem because each digit's `Char` goal only
    // ever needs a single-digit `UnsignedInt`, which has non-recursive
    // terminals (`int_zero`/`int_one`/`int_addition_chain`) available
    // before digit composition is even considered.
    if n >= 10 {
        rules.push(RuleApplication {
            name: "int_digit_composition",
            priority: 20,
            subgoals: vec![Goal::Str(n.to_string())],
            weave: Box::new(|subs| format!("({}|int)", subs[0])),
        });
    }

    rules
}

pub fn applicable_signed(n: i64, _context: &Context, _config: &EngineConfig) -> Vec<RuleApplication> {
    if n >= 0 {
        vec![RuleApplication::passthrough(
            "int_signed_nonneg",
            0,
            Goal::UnsignedInt(n as u64),
        )]
    } else {
        vec![RuleApplication {
            name: "int_signed_negation",
            priority: 0,
            subgoals: vec![Goal::UnsignedInt(n.unsigned_abs())],
            weave: Box::new(|subs| format!("(-{})", subs[0])),
        }]
    }
}

pub fn applicable_positive_index(n: u64) -> Vec<RuleApplication> {
    vec![RuleApplication::passthrough(
        "positive_int_index",
        0,
        Goal::UnsignedInt(n),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_pair_for_composite() {
        assert_eq!(smallest_factor_pair(12), Some((3, 4)));
    }

    #[test]
    fn test_factor_pair_none_for_prime() {
        assert_eq!(smallest_factor_pair(13), None);
    }

    #[test]
    fn test_zero_has_dedicated_terminal_and_fallback() {
        let ctx = Context::new();
        let config = EngineConfig::default();
        let rules = applicable_unsigned(0, &ctx, &config);
        assert!(rules.iter().any(|r| r.name == "int_zero"));
        assert!(rules.iter().any(|r| r.name == "int_digit_composition"));
    }

    #[test]
    fn test_context_var_is_highest_priority() {
        let mut ctx = Context::new();
        ctx.bind("a", "5");
        let config = EngineConfig::default();
        let rules = applicable_unsigned(5, &ctx, &config);
        assert_eq!(rules[0].name, "int_context_var");
    }

    #[test]
    fn test_negative_int_wraps_unsigned() {
        let ctx = Context::new();
        let config = EngineConfig::default();
        let rules = applicable_signed(-7, &ctx, &config);
        assert_eq!((rules[0].weave)(&["7".to_string()]), "(-7)");
    }
}
