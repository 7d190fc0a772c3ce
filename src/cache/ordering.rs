//! Display Ordering Module
//!
//! Configurable ordering used when listing stored entries.

use std::cmp::Ordering;

use crate::cache::{Key, Scalar};

// == Display Order ==
/// Orders keys by a configured list of attribute names.
///
/// Names are compared in list order. For each name a concrete value sorts
/// before an unspecified one, and two concrete values compare naturally.
/// This ordering is presentation only; lookups never consult it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOrder {
    attributes: Vec<String>,
}

impl DisplayOrder {
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Compares two keys.
    ///
    /// Returns `None` when `a` does not carry every slot name `b` carries,
    /// in which case the keys are not comparable under this ordering.
    pub fn compare(&self, a: &Key, b: &Key) -> Option<Ordering> {
        if !b.as_map().keys().all(|name| a.has_attribute(name)) {
            return None;
        }
        Some(self.rank(a).cmp(&self.rank(b)))
    }

    /// Total ordering used for listings: configured attributes first, then
    /// structural order as a tie-break. Missing slots rank with unspecified ones.
    pub fn sort_cmp(&self, a: &Key, b: &Key) -> Ordering {
        self.rank(a).cmp(&self.rank(b)).then_with(|| a.cmp(b))
    }

    fn rank<'k>(&self, key: &'k Key) -> Vec<(bool, Option<&'k Scalar>)> {
        self.attributes
            .iter()
            .map(|name| {
                let value = key.slot(name).and_then(|slot| slot.value());
                (value.is_none(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Slot;

    fn order() -> DisplayOrder {
        DisplayOrder::new(["id", "salesRef", "country", "underlying"])
    }

    fn key(id: &str, sales_ref: Option<&str>) -> Key {
        Key::new([
            ("id", Slot::from(id)),
            ("salesRef", sales_ref.map_or(Slot::Unspecified, Slot::from)),
        ])
    }

    #[test]
    fn test_concrete_before_unspecified() {
        let concrete = key("1", Some("A"));
        let wildcard = key("1", None);
        assert_eq!(order().compare(&concrete, &wildcard), Some(Ordering::Less));
        assert_eq!(order().compare(&wildcard, &concrete), Some(Ordering::Greater));
    }

    #[test]
    fn test_earlier_attribute_dominates() {
        let a = key("1", None);
        let b = key("2", Some("A"));
        assert_eq!(order().compare(&a, &b), Some(Ordering::Less));
    }

    #[test]
    fn test_equal_keys() {
        let a = key("1", Some("A"));
        assert_eq!(order().compare(&a, &a.clone()), Some(Ordering::Equal));
    }

    #[test]
    fn test_incomparable_when_slots_missing() {
        let small = Key::new([("id", Slot::from("1"))]);
        let large = key("1", Some("A"));
        assert_eq!(order().compare(&small, &large), None);
        assert!(order().compare(&large, &small).is_some());
    }

    #[test]
    fn test_sort_cmp_breaks_ties_structurally() {
        let a = Key::new([("id", Slot::from("1")), ("extra", Slot::from("x"))]);
        let b = Key::new([("id", Slot::from("1")), ("extra", Slot::from("y"))]);
        assert_eq!(order().compare(&a, &b), Some(Ordering::Equal));
        assert_eq!(order().sort_cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_empty_order_falls_back_to_structure() {
        let a = key("2", None);
        let b = key("1", None);
        assert_eq!(DisplayOrder::default().sort_cmp(&a, &b), a.cmp(&b));
    }
}
