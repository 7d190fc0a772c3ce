//! Partial Match Module
//!
//! A wildcard-tolerant comparison between keys, kept apart from `Key`'s
//! structural equality.

use crate::cache::Key;

// == Partial Match Key ==
/// Borrowed view of a [`Key`] compared with wildcard tolerance.
///
/// Two keys partially match when they have the same slot names and no
/// slot holds two different concrete values. An unspecified slot on either
/// side never conflicts.
///
/// This relation is not transitive: `{a=*}` matches both `{a=1}` and
/// `{a=2}`, which do not match each other. It therefore cannot back a hash
/// map and deliberately implements neither `PartialEq` nor `Hash`. The
/// fallback search never uses it; it only serves diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct PartialMatchKey<'a> {
    key: &'a Key,
}

impl<'a> PartialMatchKey<'a> {
    pub fn new(key: &'a Key) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &'a Key {
        self.key
    }

    /// Symmetric wildcard-tolerant comparison.
    pub fn matches(&self, other: &PartialMatchKey<'_>) -> bool {
        let ours = self.key.as_map();
        let theirs = other.key.as_map();

        if ours.len() != theirs.len() {
            return false;
        }

        ours.iter().all(|(name, slot)| match theirs.get(name) {
            None => false,
            Some(other_slot) => match (slot.value(), other_slot.value()) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            },
        })
    }
}

impl<'a> From<&'a Key> for PartialMatchKey<'a> {
    fn from(key: &'a Key) -> Self {
        Self::new(key)
    }
}
