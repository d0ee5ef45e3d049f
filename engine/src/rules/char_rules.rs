//! `Char`/`PositiveChar` rule family.

use crate::context::Context;
use crate::goal::Goal;
use crate::rule::RuleApplication;

fn escape_for_single_quotes(c: char) -> String {
    match c {
        '\'' => "\\'".to_string(),
        '\\' => "\\\\".to_string(),
        other => other.to_string(),
    }
}

pub fn applicable(c: char, context: &Context) -> Vec<RuleApplication> {
    let mut rules = Vec::new();
    let as_str = c.to_string();

    if let Some(name) = context.name_for_value(&as_str) {
        rules.push(RuleApplication::terminal("char_context_var", 0, name));
    }

    if c.is_ascii_digit() {
        let digit = c.to_digit(10).unwrap() as u64;
        rules.push(RuleApplication {
            name: "char_from_digit",
            priority: 5,
            subgoals: vec![Goal::UnsignedInt(digit)],
            weave: Box::new(|subs| format!("({}|string)", subs[0])),
        });
    }

    rules.push(RuleApplication::terminal(
        "char_quoted_literal",
        10,
        format!("'{}'", escape_for_single_quotes(c)),
    ));

    // The `"%c"|format(ord)` trick: works even when the WAF rejects quoted
    // single characters directly, as long as a lone '%' is reachable
    // (bound by the string primer, spec §4.4) and `format` survives.
    rules.push(RuleApplication {
        name: "char_format_ord",
        priority: 15,
        subgoals: vec![Goal::Str("%c".to_string()), Goal::UnsignedInt(c as u32 as u64)],
        weave: Box::new(|subs| format!("({}|format({}))", subs[0], subs[1])),
    });

    rules
}

pub fn applicable_positive(_context: &Context) -> Vec<RuleApplication> {
    vec![
        RuleApplication::passthrough("positive_char_digit", 0, Goal::Char('1')),
        RuleApplication::passthrough("positive_char_letter", 10, Goal::Char('a')),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_char_prefers_digit_rule() {
        let ctx = Context::new();
        let rules = applicable('7', &ctx);
        assert_eq!(rules[0].name, "char_from_digit");
    }

    #[test]
    fn test_quote_escaping() {
        assert_eq!(escape_for_single_quotes('\''), "\\'");
        assert_eq!(escape_for_single_quotes('a'), "a");
    }

    #[test]
    fn test_positive_char_has_two_alternatives() {
        let ctx = Context::new();
        let rules = applicable_positive(&ctx);
        assert_eq!(rules.len(), 2);
    }
}
