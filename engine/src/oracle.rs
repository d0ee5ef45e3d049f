use std::collections::HashMap;
use std::sync::Mutex;

use tracing::trace;

/// The black-box WAF predicate (spec §6's `waf: string → bool`).
///
/// Required property: `check` is pure for the lifetime of one engine
/// instance — the engine memoizes every probe it issues and never
/// re-submits a fragment it has already seen. If the real oracle is flaky,
/// the caller must wrap it with retry-and-vote before constructing an
/// [`crate::assembler::PayloadEngine`]; the engine will not compensate
/// (spec §9, "Oracle memoization").
pub trait Oracle: Send + Sync {
    /// Probe a candidate template fragment. Returns `true` if the target
    /// application would accept it.
    fn check(&self, fragment: &str) -> bool;
}

impl<F> Oracle for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn check(&self, fragment: &str) -> bool {
        self(fragment)
    }
}

/// Wraps any [`Oracle`] with a probe-memoization cache, so a caller never
/// pays for the same fragment's round-trip twice within one engine
/// instance. Separate from [`crate::cache::GenerationCache`]: that cache is
/// keyed by `(Goal, ContextFingerprint)` and stores *results of a search*;
/// this one is keyed by raw fragment text and stores *oracle answers*,
/// which is the narrower and more reusable of the two memoizations (the
/// same literal fragment can appear as a candidate for unrelated goals).
pub struct MemoizingOracle<O: Oracle> {
    inner: O,
    memo: Mutex<HashMap<String, bool>>,
}

impl<O: Oracle> MemoizingOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            memo: Mutex::new(HashMap::new()),
        }
    }

    pub fn probe_count(&self) -> usize {
        self.memo.lock().unwrap().len()
    }
}

impl<O: Oracle> Oracle for MemoizingOracle<O> {
    fn check(&self, fragment: &str) -> bool {
        if let Some(&cached) = self.memo.lock().unwrap().get(fragment) {
            trace!(fragment_len = fragment.len(), cached, "oracle memo hit");
            return cached;
        }
        let result = self.inner.check(fragment);
        self.memo
            .lock()
            .unwrap()
            .insert(fragment.to_string(), result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_closure_is_oracle() {
        let oracle = |s: &str| !s.contains('.');
        assert!(oracle.check("abc"));
        assert!(!oracle.check("a.b"));
    }

    #[test]
    fn test_memoizing_oracle_dedupes_calls() {
        let calls = AtomicUsize::new(0);
        let counting = move |s: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            s == "ok"
        };
        let memo = MemoizingOracle::new(counting);
        assert!(memo.check("ok"));
        assert!(memo.check("ok"));
        assert!(!memo.check("no"));
        assert_eq!(memo.probe_count(), 2);
    }
}
