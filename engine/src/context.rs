use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Read-only mapping of primed variable name to the runtime value it is
/// bound to, populated once by the primers (C4, C5) before any user goal is
/// generated (spec §3).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    vars: BTreeMap<String, String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value` in the context.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Merge another context's bindings into this one.
    pub fn extend(&mut self, other: Context) {
        self.vars.extend(other.vars);
    }

    /// Find the variable name bound to the exact runtime `value`, if any.
    /// Used by rules that prefer a variable reference over re-deriving a
    /// value already available in the primed context.
    pub fn name_for_value(&self, value: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(_, v)| v.as_str() == value)
            .map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The cache fingerprint: the set of bound variable *names* (spec §3 —
    /// "values that would be tried are implicit in the names").
    pub fn fingerprint(&self) -> ContextFingerprint {
        ContextFingerprint(self.vars.keys().cloned().collect())
    }
}

/// Cache key component capturing which variables were in scope. Per spec §3
/// invariant 4, growing the context (adding a name) always yields a distinct
/// fingerprint, so stale failure-cache entries from a smaller context are
/// never consulted for a larger one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextFingerprint(BTreeSet<String>);
