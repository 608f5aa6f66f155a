//! Insertion-ordered result map produced by a parse pass.

use indexmap::IndexMap;

/// Parsed argument map: canonical name to optional attached value.
///
/// Keys appear in the order they were resolved during the parse pass.
/// Re-inserting an existing key updates its value in place without moving
/// the key (last write wins, position preserved). An absent value (`None`)
/// is distinct from an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgvMap {
    entries: IndexMap<String, Option<String>>,
}

impl ArgvMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: String, value: Option<String>) {
        self.entries.insert(name, value);
    }

    /// Whether `name` was resolved during the parse.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The entry for `name`: `None` if the name was never resolved,
    /// `Some(None)` if it was resolved without a value.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries.get(name).map(|v| v.as_deref())
    }

    /// The attached value for `name`, if the name resolved with one.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(|v| v.as_deref())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every name in `names` is present.
    pub fn has_all(&self, names: &[&str]) -> bool {
        names.iter().all(|n| self.contains(n))
    }

    /// True when at least one name in `names` is ABSENT.
    ///
    /// Note the inversion: despite the name, this does not test for the
    /// presence of any key. It answers "is something still missing?".
    pub fn has_any(&self, names: &[&str]) -> bool {
        names.iter().any(|n| !self.contains(n))
    }
}
