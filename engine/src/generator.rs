//! The generator core (C3, spec §4.2): recursive, rule-driven search for a
//! fragment satisfying one goal under one oracle and context.

use tracing::{debug, instrument, warn};

use crate::cache::GenerationCache;
use crate::config::EngineConfig;
use crate::context::Context;
use crate::goal::Goal;
use crate::oracle::Oracle;
use crate::rules;

/// Recursively synthesize a fragment for `goal`.
///
/// Implements spec §4.2's algorithm step-for-step:
/// 1. `Literal` short-circuits straight to the oracle.
/// 2/3. Cache lookups.
/// 4. Candidate rules in priority order.
/// 5/6. Recurse into subgoals left-to-right, short-circuiting on failure;
///    weave; probe the oracle.
/// 7. Exhaustion records a failure and returns `None`.
#[instrument(skip(oracle, cache), fields(goal = ?goal))]
pub fn generate(
    goal: &Goal,
    context: &Context,
    config: &EngineConfig,
    oracle: &dyn Oracle,
    cache: &GenerationCache,
) -> Option<String> {
    generate_with_events(goal, context, config, oracle, cache, None)
}

/// Same as [`generate`], additionally invoking `on_inner(goal, fragment)`
/// for every goal (at any recursion depth) that is successfully
/// synthesized — the source of spec §6's `GENERATE_INNER` callback.
pub fn generate_with_events(
    goal: &Goal,
    context: &Context,
    config: &EngineConfig,
    oracle: &dyn Oracle,
    cache: &GenerationCache,
    on_inner: Option<&dyn Fn(&Goal, &str)>,
) -> Option<String> {
    generate_at_depth(goal, context, config, oracle, cache, on_inner, 0)
}

fn generate_at_depth(
    goal: &Goal,
    context: &Context,
    config: &EngineConfig,
    oracle: &dyn Oracle,
    cache: &GenerationCache,
    on_inner: Option<&dyn Fn(&Goal, &str)>,
    depth: u32,
) -> Option<String> {
    if depth > config.max_recursion_depth {
        warn!(depth, limit = config.max_recursion_depth, "recursion limit exceeded");
        return None;
    }

    if let Goal::Literal(s) = goal {
        return if oracle.check(s) {
            if let Some(cb) = on_inner {
                cb(goal, s);
            }
            Some(s.clone())
        } else {
            None
        };
    }

    let fp = context.fingerprint();

    if let Some(hit) = cache.get_success(goal, &fp) {
        debug!(goal = ?goal, "success cache hit");
        if let Some(cb) = on_inner {
            cb(goal, &hit);
        }
        return Some(hit);
    }
    if cache.is_known_failure(goal, &fp) {
        debug!(goal = ?goal, "failure cache hit");
        return None;
    }

    let candidates = rules::applicable(goal, context, config);

    for rule in &candidates {
        let mut sub_fragments = Vec::with_capacity(rule.subgoals.len());
        let mut all_subs_ok = true;

        for sub in &rule.subgoals {
            match generate_at_depth(sub, context, config, oracle, cache, on_inner, depth + 1) {
                Some(frag) => sub_fragments.push(frag),
                None => {
                    all_subs_ok = false;
                    break;
                }
            }
        }

        if !all_subs_ok {
            continue;
        }

        let candidate = (rule.weave)(&sub_fragments);
        debug!(
            rule = rule.name,
            candidate_len = candidate.len(),
            "probing candidate"
        );

        if oracle.check(&candidate) {
            cache.record_success(goal.clone(), fp.clone(), candidate.clone());
            if let Some(cb) = on_inner {
                cb(goal, &candidate);
            }
            return Some(candidate);
        }
    }

    cache.record_failure(goal.clone(), fp);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always_true(_: &str) -> bool {
        true
    }

    fn reject_dots(s: &str) -> bool {
        !s.contains('.')
    }

    #[test]
    fn test_literal_accepted() {
        let cache = GenerationCache::new();
        let ctx = Context::new();
        let config = EngineConfig::default();
        let got = generate(
            &Goal::Literal("abc".to_string()),
            &ctx,
            &config,
            &always_true,
            &cache,
        );
        assert_eq!(got, Some("abc".to_string()));
    }

    #[test]
    fn test_literal_rejected() {
        let cache = GenerationCache::new();
        let ctx = Context::new();
        let config = EngineConfig::default();
        let got = generate(
            &Goal::Literal("abc".to_string()),
            &ctx,
            &config,
            &(|_: &str| false),
            &cache,
        );
        assert_eq!(got, None);
    }

    #[test]
    fn test_unsigned_int_small_value_with_always_true_oracle() {
        let cache = GenerationCache::new();
        let ctx = Context::new();
        let config = EngineConfig::default();
        let got = generate(&Goal::UnsignedInt(3), &ctx, &config, &always_true, &cache);
        assert!(got.is_some());
    }

    #[test]
    fn test_attribute_falls_back_to_attr_filter_when_dots_blocked() {
        let cache = GenerationCache::new();
        let ctx = Context::new();
        let config = EngineConfig::default();
        let goal = Goal::attribute(Goal::Config, "foo");
        let got = generate(&goal, &ctx, &config, &reject_dots, &cache).unwrap();
        assert!(!got.contains('.'));
        assert!(got.contains("attr("));
    }

    #[test]
    fn test_success_cache_short_circuits_second_call() {
        let cache = GenerationCache::new();
        let ctx = Context::new();
        let config = EngineConfig::default();
        let goal = Goal::UnsignedInt(5);
        let first = generate(&goal, &ctx, &config, &always_true, &cache);
        let second = generate(&goal, &ctx, &config, &(|_: &str| panic!("should not probe")), &cache);
        assert_eq!(first, second);
    }

    #[test]
    fn test_everything_rejected_yields_none() {
        let cache = GenerationCache::new();
        let ctx = Context::new();
        let config = EngineConfig::default();
        let got = generate(
            &Goal::OsPopenRead("id".to_string()),
            &ctx,
            &config,
            &(|_: &str| false),
            &cache,
        );
        assert_eq!(got, None);
    }

    #[test]
    fn test_determinism() {
        let config = EngineConfig::default();
        let ctx = Context::new();
        let cache_a = GenerationCache::new();
        let cache_b = GenerationCache::new();
        let goal = Goal::Str("hi".to_string());
        let a = generate(&goal, &ctx, &config, &always_true, &cache_a);
        let b = generate(&goal, &ctx, &config, &always_true, &cache_b);
        assert_eq!(a, b);
    }
}
