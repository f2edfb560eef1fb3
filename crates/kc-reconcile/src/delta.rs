//! Set reconciliation.
//!
//! Relationship sets (group members, composite roles) have set semantics:
//! duplicates collapse and enumeration order never matters. Deltas are
//! computed by membership, so a reordering alone produces no work.

use std::collections::BTreeSet;

/// Minimal changes turning a current set into a desired one.
///
/// `to_add` never overlaps the current set and `to_remove` is always a
/// subset of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDelta<K> {
    /// Keys to add.
    pub to_add: BTreeSet<K>,
    /// Keys to remove.
    pub to_remove: BTreeSet<K>,
}

impl<K> Default for SetDelta<K> {
    fn default() -> Self {
        Self {
            to_add: BTreeSet::new(),
            to_remove: BTreeSet::new(),
        }
    }
}

impl<K: Ord + Clone> SetDelta<K> {
    /// Whether there is nothing to do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Applies the delta to `current`.
    #[must_use]
    pub fn apply(&self, current: &BTreeSet<K>) -> BTreeSet<K> {
        current
            .difference(&self.to_remove)
            .chain(self.to_add.iter())
            .cloned()
            .collect()
    }
}

/// Computes `desired \ current` and `current \ desired`.
///
/// Both inputs may be in any order and may repeat keys.
pub fn reconcile<K, C, D>(current: C, desired: D) -> SetDelta<K>
where
    K: Ord + Clone,
    C: IntoIterator<Item = K>,
    D: IntoIterator<Item = K>,
{
    let current: BTreeSet<K> = current.into_iter().collect();
    let desired: BTreeSet<K> = desired.into_iter().collect();

    SetDelta {
        to_add: desired.difference(&current).cloned().collect(),
        to_remove: current.difference(&desired).cloned().collect(),
    }
}

/// Whether two sequences hold the same keys, ignoring order and repeats.
pub fn same_members<'a, K, A, B>(a: A, b: B) -> bool
where
    K: Ord + 'a,
    A: IntoIterator<Item = &'a K>,
    B: IntoIterator<Item = &'a K>,
{
    a.into_iter().collect::<BTreeSet<_>>() == b.into_iter().collect::<BTreeSet<_>>()
}

/// Picks the sequence a host should store after observing `observed`.
///
/// The server may answer with its own ordering; when only the order changed,
/// keeping `stored` avoids a perpetual diff on the next comparison.
#[must_use]
pub fn prefer_stored_order<K: Ord + Clone>(stored: &[K], observed: &[K]) -> Vec<K> {
    if same_members(stored, observed) {
        stored.to_vec()
    } else {
        observed.to_vec()
    }
}
