//! Pending-mutation buffer for [`LazyMap`](super::LazyMap).
//!
//! A batch is tagged with its sign, so a buffer that mixes additions and
//! removals cannot be constructed.

/// Sign of the batch currently buffered by a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingMode {
    /// Nothing buffered; the container is fully reconciled.
    Idle,
    /// Buffering insertions/overwrites.
    Adding,
    /// Buffering removal markers.
    Removing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Pending<K, V> {
    Idle,
    /// Insertions in arrival order; the last entry per key wins.
    Additions(Vec<(K, V)>),
    /// Keys to drop, in arrival order.
    Removals(Vec<K>),
}

// Manual impl: no `K: Default` / `V: Default` bounds.
impl<K, V> Default for Pending<K, V> {
    fn default() -> Self {
        Pending::Idle
    }
}

impl<K, V> Pending<K, V> {
    #[inline]
    pub(crate) fn mode(&self) -> PendingMode {
        match self {
            Pending::Idle => PendingMode::Idle,
            Pending::Additions(_) => PendingMode::Adding,
            Pending::Removals(_) => PendingMode::Removing,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            Pending::Idle => 0,
            Pending::Additions(batch) => batch.len(),
            Pending::Removals(keys) => keys.len(),
        }
    }

    /// Buffered additions, or an empty slice.
    #[inline]
    pub(crate) fn additions(&self) -> &[(K, V)] {
        match self {
            Pending::Additions(batch) => batch,
            _ => &[],
        }
    }
}
