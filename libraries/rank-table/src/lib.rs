//! Keyed counting store with dense frequency-rank identifiers.
//!
//! A `RankTable` collapses repeated entities into one canonical instance per
//! string key, counting how often each key is registered. Once the whole
//! collection has been walked, `finalize_ids` assigns each distinct entry a
//! dense integer id ordered by descending registration count, so the most
//! common entries get the smallest ids. That keeps cross-references in the
//! serialized output compact.
//!
//! # Example
//!
//! ```
//! use rank_table::{Merge, RankTable};
//!
//! #[derive(Debug, PartialEq)]
//! struct Word(String);
//!
//! impl Merge for Word {
//!     fn merge(&mut self, _other: Self) {}
//! }
//!
//! let mut table = RankTable::new();
//! table.add("the", Word("the".to_string()));
//! table.add("the", Word("the".to_string()));
//! table.add("a", Word("a".to_string()));
//! table.finalize_ids();
//!
//! assert_eq!(table.id_of("the"), Some(0));
//! assert_eq!(table.id_of("a"), Some(1));
//! ```

use indexmap::IndexMap;

/// How an entry absorbs a duplicate registered under the same key.
///
/// The first value registered for a key stays canonical; later values are
/// merged into it. Types with no mergeable state implement this as a no-op.
pub trait Merge {
    fn merge(&mut self, other: Self);
}

struct Slot<T> {
    value: T,
    count: u64,
    id: Option<u32>,
}

/// Ordered mapping from string key to (canonical instance, count).
///
/// Insertion order is preserved until `finalize_ids`, which stable-sorts by
/// count so that ties keep their first-registration order.
pub struct RankTable<T> {
    slots: IndexMap<String, Slot<T>>,
    finalized: bool,
}

impl<T: Merge> RankTable<T> {
    pub fn new() -> Self {
        Self {
            slots: IndexMap::new(),
            finalized: false,
        }
    }

    /// Returns the canonical instance for `key`, if one has been registered.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.slots.get(key).map(|slot| &slot.value)
    }

    /// Returns the canonical instance for `key`, or `fallback` if the key is
    /// unseen. Does not register anything.
    pub fn get_or<'a>(&'a self, key: &str, fallback: &'a T) -> &'a T {
        self.get(key).unwrap_or(fallback)
    }

    /// Registers one occurrence of `key`. The first value registered for a
    /// key becomes canonical; later values are merged into it. Returns the
    /// canonical instance.
    ///
    /// Panics if called after `finalize_ids` — the table is immutable once
    /// ids are assigned.
    pub fn add(&mut self, key: impl Into<String>, value: T) -> &T {
        assert!(
            !self.finalized,
            "RankTable: cannot register entries after finalize_ids"
        );
        match self.slots.entry(key.into()) {
            indexmap::map::Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                slot.value.merge(value);
                slot.count += 1;
                &slot.value
            }
            indexmap::map::Entry::Vacant(entry) => {
                let slot = entry.insert(Slot {
                    value,
                    count: 1,
                    id: None,
                });
                &slot.value
            }
        }
    }

    /// Occurrence count for `key`, if registered.
    pub fn count_of(&self, key: &str) -> Option<u64> {
        self.slots.get(key).map(|slot| slot.count)
    }

    /// Final dense rank id for `key`. `None` before `finalize_ids` or for an
    /// unseen key.
    pub fn id_of(&self, key: &str) -> Option<u32> {
        self.slots.get(key).and_then(|slot| slot.id)
    }

    /// Assigns dense 0..n−1 ids ordered by descending count, ties broken by
    /// first-registration order. Irreversible: `add` panics afterwards.
    pub fn finalize_ids(&mut self) {
        self.slots
            .sort_by(|_, a, _, b| b.count.cmp(&a.count));
        for (i, slot) in self.slots.values_mut().enumerate() {
            slot.id = Some(i as u32);
        }
        self.finalized = true;
    }

    /// Values in final id order. Only meaningful after `finalize_ids`.
    pub fn iter_ranked(&self) -> impl Iterator<Item = &T> {
        self.slots.values().map(|slot| &slot.value)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T: Merge> Default for RankTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
