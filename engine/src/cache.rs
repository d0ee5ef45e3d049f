use std::collections::HashMap;
use std::sync::Mutex;

use crate::context::ContextFingerprint;
use crate::goal::Goal;

type CacheKey = (Goal, ContextFingerprint);

/// Success/failure memoization for the generator core (spec §3's Cache).
///
/// Guarded by a plain [`std::sync::Mutex`] rather than an async lock: per
/// spec §5 the engine is single-threaded cooperative and oracle calls are
/// synchronous, so there is no `.await` point while the lock is held.
#[derive(Debug, Default)]
pub struct GenerationCache {
    success: Mutex<HashMap<CacheKey, String>>,
    failure: Mutex<HashMap<CacheKey, ()>>,
}

impl GenerationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_success(&self, goal: &Goal, fp: &ContextFingerprint) -> Option<String> {
        self.success
            .lock()
            .unwrap()
            .get(&(goal.clone(), fp.clone()))
            .cloned()
    }

    pub fn is_known_failure(&self, goal: &Goal, fp: &ContextFingerprint) -> bool {
        self.failure
            .lock()
            .unwrap()
            .contains_key(&(goal.clone(), fp.clone()))
    }

    /// Record a success. Per spec §3 invariant 3, the success cache is
    /// monotonic within a session: entries are never removed, only added.
    pub fn record_success(&self, goal: Goal, fp: ContextFingerprint, fragment: String) {
        self.success.lock().unwrap().insert((goal, fp), fragment);
    }

    pub fn record_failure(&self, goal: Goal, fp: ContextFingerprint) {
        self.failure.lock().unwrap().insert((goal, fp), ());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;

    #[test]
    fn test_success_cache_roundtrip() {
        let cache = GenerationCache::new();
        let ctx = Context::new();
        let fp = ctx.fingerprint();
        let goal = Goal::UnsignedInt(3);

        assert_eq!(cache.get_success(&goal, &fp), None);
        cache.record_success(goal.clone(), fp.clone(), "(a+a+a)".to_string());
        assert_eq!(cache.get_success(&goal, &fp), Some("(a+a+a)".to_string()));
    }

    #[test]
    fn test_failure_cache() {
        let cache = GenerationCache::new();
        let ctx = Context::new();
        let fp = ctx.fingerprint();
        let goal = Goal::UnsignedInt(3);

        assert!(!cache.is_known_failure(&goal, &fp));
        cache.record_failure(goal.clone(), fp.clone());
        assert!(cache.is_known_failure(&goal, &fp));
    }

    #[test]
    fn test_growing_context_invalidates_failure_lookup() {
        let cache = GenerationCache::new();
        let goal = Goal::UnsignedInt(3);

        let empty_ctx = Context::new();
        let empty_fp = empty_ctx.fingerprint();
        cache.record_failure(goal.clone(), empty_fp);

        let mut grown = Context::new();
        grown.bind("a", "1");
        let grown_fp = grown.fingerprint();

        assert!(!cache.is_known_failure(&goal, &grown_fp));
    }
}
