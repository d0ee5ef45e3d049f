//! Integer-variable primer (C4, spec §4.3).

use tracing::warn;

use crate::cache::GenerationCache;
use crate::config::EngineConfig;
use crate::context::Context;
use crate::generator;
use crate::goal::Goal;
use crate::oracle::Oracle;

/// Find short expressions evaluating to `0..=config.int_primer_upper_bound`
/// and bind each one the oracle accepts as a `set` statement to a fresh
/// single-letter variable name.
///
/// Best-effort: if nothing survives, returns an empty prefix and context
/// and logs a warning (spec §4.3); deeper int rules then fall back to
/// re-deriving each value from scratch.
pub fn prime(oracle: &dyn Oracle, config: &EngineConfig) -> (String, Context) {
    let mut prefix = String::new();
    let mut context = Context::new();
    // A scratch cache local to priming: the values primed here become
    // part of the context itself, so they must not leak into the
    // generation cache the assembler uses afterward (spec §3's cache
    // fingerprint changes as soon as a name is bound).
    let scratch_cache = GenerationCache::new();
    let scratch_context = Context::new();

    let mut names = (b'a'..=b'z').map(|b| (b as char).to_string());

    for n in 0..=config.int_primer_upper_bound as u64 {
        let Some(expr) = generator::generate(
            &Goal::UnsignedInt(n),
            &scratch_context,
            config,
            oracle,
            &scratch_cache,
        ) else {
            continue;
        };

        let Some(name) = names.next() else {
            break;
        };

        let set_stmt = format!("{{%set {}={}%}}", name, expr);
        if oracle.check(&set_stmt) {
            prefix.push_str(&set_stmt);
            context.bind(name, n.to_string());
        }
    }

    if context.is_empty() {
        warn!("integer primer bound no context variables; deeper int rules will re-derive from scratch");
    }

    (prefix, context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_true_oracle_binds_several_ints() {
        let config = EngineConfig::default();
        let (prefix, context) = prime(&(|_: &str| true), &config);
        assert!(!context.is_empty());
        assert!(prefix.contains("{%set"));
    }

    #[test]
    fn test_rejecting_everything_binds_nothing() {
        let config = EngineConfig::default();
        let (prefix, context) = prime(&(|_: &str| false), &config);
        assert!(context.is_empty());
        assert!(prefix.is_empty());
    }

    #[test]
    fn test_bound_values_match_claimed_integers() {
        let config = EngineConfig::default();
        let (_, context) = prime(&(|_: &str| true), &config);
        for (name, value) in context.iter() {
            assert!(context.name_for_value(value) == Some(name));
            assert!(value.parse::<u64>().is_ok());
        }
    }
}
