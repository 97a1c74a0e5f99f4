//! Deferred keyed container ("lazy bitset").
//!
//! [`LazyMap`] keeps a *reconciled* vector of entries sorted by key, plus a
//! *pending* batch of buffered additions or removals. Mutations are O(1)
//! amortized pushes onto the batch; [`LazyMap::reconcile`] sorts the batch
//! and merges it into the reconciled entries in one linear pass.
//!
//! Enumeration (`iter`, `keys`, `values`, `len`) and [`LazyMap::contains_key`]
//! observe only the reconciled entries. [`LazyMap::get`] also consults the
//! pending batch so a writer can read back its own buffered writes.

use std::fmt::Debug;

use super::pending::{Pending, PendingMode};
use crate::algs::set_ops::{dedup_keep_last, merge_difference, merge_union, sort_by_key, sort_keys};
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;

/// Sorted associative container with buffered, batch-reconciled mutation.
///
/// # Type Parameters
/// - `K`: key type; small dense integers in the graph store. Must be `Ord + Copy`.
/// - `V`: stored value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyMap<K, V> {
    /// Reconciled entries, strictly ascending by key.
    entries: Vec<(K, V)>,
    /// Buffered mutations not yet visible to enumeration.
    pending: Pending<K, V>,
}

impl<K, V> Default for LazyMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            pending: Pending::Idle,
        }
    }
}

#[inline]
fn find_reconciled<K: Ord + Copy, V>(entries: &[(K, V)], key: K) -> Option<usize> {
    entries.binary_search_by(|e| e.0.cmp(&key)).ok()
}

impl<K: Ord + Copy, V> LazyMap<K, V> {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty container with room for `capacity` reconciled entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            pending: Pending::Idle,
        }
    }

    /// Number of reconciled entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of buffered (not yet reconciled) mutations.
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.len() > 0
    }

    #[inline]
    pub fn pending_mode(&self) -> PendingMode {
        self.pending.mode()
    }

    /// Looks `key` up across both the pending batch and the reconciled
    /// entries.
    ///
    /// A buffered addition shadows the reconciled value (latest write wins);
    /// a buffered removal makes the key read as absent.
    ///
    /// # Example
    /// ```rust
    /// use lazy_graph::container::LazyMap;
    /// let mut m = LazyMap::<u32, &str>::new();
    /// m.add(3, "x");
    /// assert_eq!(m.get(3), Some(&"x"));
    /// assert_eq!(m.len(), 0);
    /// m.reconcile();
    /// assert_eq!(m.len(), 1);
    /// ```
    pub fn get(&self, key: K) -> Option<&V> {
        match &self.pending {
            Pending::Additions(batch) => {
                if let Some((_, v)) = batch.iter().rev().find(|(k, _)| *k == key) {
                    return Some(v);
                }
            }
            Pending::Removals(keys) => {
                if keys.contains(&key) {
                    return None;
                }
            }
            Pending::Idle => {}
        }
        self.get_reconciled(key)
    }

    /// Like [`get`](Self::get), falling back to `default` when absent.
    pub fn get_or(&self, key: K, default: V) -> V
    where
        V: Clone,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Mutable variant of [`get`](Self::get), with the same shadowing rules.
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        let entries = &mut self.entries;
        match &mut self.pending {
            Pending::Additions(batch) => {
                if let Some(slot) = batch.iter_mut().rev().find(|(k, _)| *k == key) {
                    return Some(&mut slot.1);
                }
            }
            Pending::Removals(keys) => {
                if keys.contains(&key) {
                    return None;
                }
            }
            Pending::Idle => {}
        }
        find_reconciled(entries.as_slice(), key).map(|i| &mut entries[i].1)
    }

    /// Binary search over the reconciled entries only.
    #[inline]
    pub fn get_reconciled(&self, key: K) -> Option<&V> {
        find_reconciled(&self.entries, key).map(|i| &self.entries[i].1)
    }

    #[inline]
    pub fn get_reconciled_mut(&mut self, key: K) -> Option<&mut V> {
        find_reconciled(&self.entries, key).map(|i| &mut self.entries[i].1)
    }

    /// `true` if `key` is present in the reconciled entries.
    #[inline]
    pub fn contains_key(&self, key: K) -> bool {
        find_reconciled(&self.entries, key).is_some()
    }

    /// Overwrites the value for `key` in place wherever it is visible,
    /// otherwise buffers it as an addition.
    pub fn set(&mut self, key: K, value: V) {
        match self.get_mut(key) {
            Some(slot) => *slot = value,
            None => self.add(key, value),
        }
    }

    /// Buffers an insertion. Pending removals are flushed first.
    pub fn add(&mut self, key: K, value: V) {
        if let Pending::Removals(_) = self.pending {
            self.reconcile();
        }
        if let Pending::Additions(batch) = &mut self.pending {
            batch.push((key, value));
            return;
        }
        self.pending = Pending::Additions(vec![(key, value)]);
    }

    /// Buffers a removal marker. Pending additions are flushed first.
    ///
    /// Removing an absent key is a no-op once reconciled.
    pub fn remove(&mut self, key: K) {
        if let Pending::Additions(_) = self.pending {
            self.reconcile();
        }
        if let Pending::Removals(keys) = &mut self.pending {
            keys.push(key);
            return;
        }
        self.pending = Pending::Removals(vec![key]);
    }

    /// Merges the pending batch into the reconciled entries.
    ///
    /// Returns `false` when nothing was pending. Cost is `O(k log k + n)`
    /// for a batch of `k` over `n` reconciled entries.
    pub fn reconcile(&mut self) -> bool {
        match std::mem::take(&mut self.pending) {
            Pending::Idle => false,
            Pending::Additions(mut batch) => {
                let buffered = batch.len();
                sort_by_key(&mut batch);
                dedup_keep_last(&mut batch);
                let n = merge_union(&mut self.entries, batch);
                log::trace!("lazy map: merged {buffered} additions, {n} entries");
                true
            }
            Pending::Removals(mut keys) => {
                let buffered = keys.len();
                sort_keys(&mut keys);
                let n = merge_difference(&mut self.entries, &keys);
                log::trace!("lazy map: merged {buffered} removals, {n} entries");
                true
            }
        }
    }

    /// Drops all reconciled and pending state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.pending = Pending::Idle;
    }

    /// Preallocates room for `additional` reconciled entries.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Reconciled entries as a sorted slice.
    #[inline]
    pub fn as_slice(&self) -> &[(K, V)] {
        &self.entries
    }

    /// Reconciled `(key, &value)` pairs in ascending key order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Reconciled keys in ascending order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = K> + ExactSizeIterator + Clone + '_ {
        self.entries.iter().map(|e| e.0)
    }

    /// Reconciled values in ascending key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + Clone + '_ {
        self.entries.iter().map(|e| &e.1)
    }

    /// Every key that may be present after the next reconcile: reconciled
    /// keys followed by keys of buffered additions. May repeat keys.
    pub fn touched_keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries
            .iter()
            .chain(self.pending.additions().iter())
            .map(|e| e.0)
    }
}

/// Borrowing iterator over reconciled entries.
#[derive(Clone, Debug)]
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<K, V> Default for Iter<'_, K, V> {
    fn default() -> Self {
        Iter {
            inner: Default::default(),
        }
    }
}

impl<'a, K: Copy, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (*k, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Copy, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (*k, v))
    }
}

impl<K: Copy, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K: Ord + Copy, V> IntoIterator for &'a LazyMap<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Buffers every pair as a pending addition.
impl<K: Ord + Copy, V> Extend<(K, V)> for LazyMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.add(k, v);
        }
    }
}

/// Collects and reconciles; for repeated keys the last value wins.
impl<K: Ord + Copy, V> FromIterator<(K, V)> for LazyMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map.reconcile();
        map
    }
}

impl<K: Ord + Copy + Debug, V> DebugInvariants for LazyMap<K, V> {
    fn validate_invariants(&self) -> Result<(), GraphError> {
        for (position, w) in self.entries.windows(2).enumerate() {
            match w[0].0.cmp(&w[1].0) {
                std::cmp::Ordering::Less => {}
                std::cmp::Ordering::Equal => return Err(GraphError::DuplicateKey { position }),
                std::cmp::Ordering::Greater => {
                    return Err(GraphError::UnsortedEntries { position });
                }
            }
        }
        Ok(())
    }
}
