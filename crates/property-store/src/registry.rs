//! Insertion-ordered keyed collection

use serde::Serialize;
use shared_types::{DomainError, DomainResult, Keyed};

/// Records of one kind, unique by key, iterated in insertion order.
///
/// Collections here hold a handful of records, so lookups scan linearly.
/// Records are never removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Registry<T> {
    records: Vec<T>,
}

impl<T: Keyed> Registry<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a registry, rejecting the first duplicate key
    pub fn from_records(records: impl IntoIterator<Item = T>) -> DomainResult<Self> {
        let mut registry = Self::new();
        for record in records {
            registry.insert(record)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, record: T) -> DomainResult<()> {
        if self.contains(record.key()) {
            return Err(DomainError::DuplicateKey {
                kind: T::KIND,
                key: record.key().to_string(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.records.iter().position(|r| r.key() == key)
    }

    pub fn get(&self, key: &str) -> DomainResult<&T> {
        self.records
            .iter()
            .find(|r| r.key() == key)
            .ok_or_else(|| DomainError::not_found(T::KIND, key))
    }

    pub fn get_mut(&mut self, key: &str) -> DomainResult<&mut T> {
        self.records
            .iter_mut()
            .find(|r| r.key() == key)
            .ok_or_else(|| DomainError::not_found(T::KIND, key))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.records.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Keyed> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Unit(&'static str, u32);

    impl Keyed for Unit {
        const KIND: &'static str = "unit";

        fn key(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let registry = Registry::from_records([Unit("U-3", 1), Unit("U-1", 2), Unit("U-2", 3)]).unwrap();
        let keys: Vec<_> = registry.iter().map(|u| u.0).collect();
        assert_eq!(keys, vec!["U-3", "U-1", "U-2"]);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = Registry::from_records([Unit("U-1", 1), Unit("U-1", 2)]).unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateKey {
                kind: "unit",
                key: "U-1".to_string()
            }
        );
    }

    #[test]
    fn test_missing_key_is_not_found() {
        let registry: Registry<Unit> = Registry::new();
        assert_eq!(
            registry.get("U-9").unwrap_err(),
            DomainError::not_found("unit", "U-9")
        );
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut registry = Registry::from_records([Unit("U-1", 1)]).unwrap();
        registry.get_mut("U-1").unwrap().1 = 42;
        assert_eq!(registry.get("U-1").unwrap().1, 42);
        assert_eq!(registry.len(), 1);
    }
}
