//! The validated, in-memory code → name mapping.

use std::collections::BTreeMap;

use crate::UNREGISTERED;

/// A registered name and the registry line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredName {
    pub name: String,
    pub line_number: usize,
}

/// Validated mapping from 16-bit code to display name.
///
/// Also tracks `max_code`, the largest code ever inserted, which bounds the dense range the emitter walks.
/// An empty registry has `max_code() == 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<u16, RegisteredName>,
    max_code: u16,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the name registered for `code`.
    ///
    /// Returns the previous registration, if any.
    pub fn upsert(&mut self, code: u16, name: impl Into<String>, line_number: usize) -> Option<RegisteredName> {
        self.max_code = self.max_code.max(code);
        self.entries.insert(
            code,
            RegisteredName {
                name: name.into(),
                line_number,
            },
        )
    }

    /// The registration for `code`, if any.
    pub fn get(&self, code: u16) -> Option<&RegisteredName> {
        self.entries.get(&code)
    }

    /// Resolve `code` the way the generated lookup function does.
    pub fn lookup(&self, code: u16) -> &str {
        self.get(code).map_or(UNREGISTERED, |r| r.name.as_str())
    }

    pub fn max_code(&self) -> u16 {
        self.max_code
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &RegisteredName)> {
        self.entries.iter().map(|(code, name)| (*code, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.max_code(), 0);
        assert_eq!(registry.lookup(0), UNREGISTERED);
    }

    #[test]
    fn test_upsert_last_wins() {
        let mut registry = Registry::new();
        assert!(registry.upsert(5, "first", 1).is_none());
        let previous = registry.upsert(5, "second", 2).unwrap();
        assert_eq!(previous.name, "first");
        assert_eq!(previous.line_number, 1);
        assert_eq!(registry.lookup(5), "second");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_max_code_tracks_largest() {
        let mut registry = Registry::new();
        registry.upsert(9, "nine", 1);
        registry.upsert(3, "three", 2);
        assert_eq!(registry.max_code(), 9);
    }

    #[test]
    fn test_iter_is_ascending() {
        let mut registry = Registry::new();
        registry.upsert(300, "c", 1);
        registry.upsert(1, "a", 2);
        registry.upsert(20, "b", 3);
        let codes: Vec<u16> = registry.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec![1, 20, 300]);
    }

    #[test]
    fn test_lookup_above_max_is_unregistered() {
        let mut registry = Registry::new();
        registry.upsert(7, "seven", 1);
        assert_eq!(registry.lookup(8), UNREGISTERED);
        assert_eq!(registry.lookup(u16::MAX), UNREGISTERED);
    }
}
