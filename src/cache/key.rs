//! Key Module
//!
//! Composite lookup keys made of named attribute slots.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

// == Scalar ==
/// A concrete attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

// == Slot ==
/// An attribute slot: either a concrete value or a wildcard.
///
/// On the wire an unspecified slot is JSON `null`. A key that has no slot
/// for a name at all is a different thing from a key whose slot is
/// `Unspecified`; only the latter acts as a wildcard during lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Option<Scalar>", into = "Option<Scalar>")]
pub enum Slot {
    Concrete(Scalar),
    Unspecified,
}

impl Slot {
    /// Returns the concrete value, if any.
    pub fn value(&self) -> Option<&Scalar> {
        match self {
            Slot::Concrete(v) => Some(v),
            Slot::Unspecified => None,
        }
    }

    pub fn is_concrete(&self) -> bool {
        matches!(self, Slot::Concrete(_))
    }
}

impl From<Option<Scalar>> for Slot {
    fn from(value: Option<Scalar>) -> Self {
        value.map_or(Slot::Unspecified, Slot::Concrete)
    }
}

impl From<Slot> for Option<Scalar> {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Concrete(v) => Some(v),
            Slot::Unspecified => None,
        }
    }
}

impl From<&str> for Slot {
    fn from(value: &str) -> Self {
        Slot::Concrete(value.into())
    }
}

impl From<i64> for Slot {
    fn from(value: i64) -> Self {
        Slot::Concrete(value.into())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Concrete(v) => v.fmt(f),
            Slot::Unspecified => f.write_str("*"),
        }
    }
}

// == Key ==
/// Immutable set of attribute slots, at most one per name.
///
/// Equality and hashing are structural: two keys are equal iff they have
/// the same slot names and every slot is either unspecified on both sides
/// or holds equal concrete values. This is the contract the storage map
/// relies on. For the looser comparison that lets a wildcard meet any value,
/// see [`PartialMatchKey`](crate::cache::PartialMatchKey).
///
/// The derived `Ord` is structural too and only serves as a deterministic
/// tie-break when listing entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key {
    slots: BTreeMap<String, Slot>,
}

impl Key {
    // == Constructor ==
    /// Builds a key from `(name, slot)` pairs. A repeated name keeps its last slot.
    pub fn new<I, N>(slots: I) -> Self
    where
        I: IntoIterator<Item = (N, Slot)>,
        N: Into<String>,
    {
        Self {
            slots: slots.into_iter().map(|(n, s)| (n.into(), s)).collect(),
        }
    }

    /// True iff a slot named `name` exists, concrete or not.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// True iff every name in `names` has a slot.
    pub fn has_all<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().all(|n| self.has_attribute(n.as_ref()))
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }

    /// Read-only view of the underlying slots.
    pub fn as_map(&self) -> &BTreeMap<String, Slot> {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // == Relax ==
    /// Returns a copy of this key with the slot `name` set to unspecified.
    ///
    /// Fails with `InvalidKey` if the key has no such slot.
    pub fn with_unspecified(&self, name: &str) -> Result<Key> {
        if !self.has_attribute(name) {
            return Err(CacheError::InvalidKey(format!(
                "cannot relax '{}': key {} has no such slot",
                name, self
            )));
        }
        let mut slots = self.slots.clone();
        slots.insert(name.to_string(), Slot::Unspecified);
        Ok(Key { slots })
    }
}

impl<N: Into<String>> FromIterator<(N, Slot)> for Key {
    fn from_iter<I: IntoIterator<Item = (N, Slot)>>(iter: I) -> Self {
        Key::new(iter)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, slot)) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, slot)?;
        }
        f.write_str("}")
    }
}
