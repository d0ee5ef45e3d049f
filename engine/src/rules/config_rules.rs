//! `Config` rule family: reach the `config` global directly — Jinja2's
//! template context in this target dialect exposes it unqualified.

use crate::rule::RuleApplication;

pub fn applicable() -> Vec<RuleApplication> {
    vec![RuleApplication::terminal("config_global", 0, "config")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_is_bare_literal() {
        let rules = applicable();
        assert_eq!((rules[0].weave)(&[]), "config");
    }
}
