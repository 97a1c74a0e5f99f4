//! Read-only adjacency view shared by the live store and frozen snapshots.
//!
//! Traversals in [`crate::algs::traversal`] are written against this trait, so
//! they run unchanged on a [`LazyGraph`](super::LazyGraph) (reconciled state)
//! or a [`FrozenGraph`](super::FrozenGraph).

use super::vertex::VertexId;

pub trait DirectedGraph {
    /// Per-edge payload.
    type Edge;

    /// Iterator over `(target, &payload)` for a vertex's outgoing edges.
    type OutIter<'a>: DoubleEndedIterator<Item = (VertexId, &'a Self::Edge)>
    where
        Self: 'a;

    /// Iterator over `(source, &payload)` for a vertex's incoming edges.
    type InIter<'a>: DoubleEndedIterator<Item = (VertexId, &'a Self::Edge)>
    where
        Self: 'a;

    /// Exclusive upper bound on vertex ids.
    fn span(&self) -> usize;

    fn has_vertex(&self, v: VertexId) -> bool;

    /// Outgoing edges of `v` in ascending target order; empty if absent.
    fn out_edges<'a>(&'a self, v: VertexId) -> Self::OutIter<'a>;

    /// Incoming edges of `v` in ascending source order; empty if absent.
    fn in_edges<'a>(&'a self, v: VertexId) -> Self::InIter<'a>;

    /// Number of outgoing edges. Default implementation counts by iteration.
    fn degree(&self, v: VertexId) -> usize {
        self.out_edges(v).count()
    }

    /// Number of incoming edges. Default implementation counts by iteration.
    fn in_degree(&self, v: VertexId) -> usize {
        self.in_edges(v).count()
    }

    /// Point-only adapters (never touch payloads).
    #[inline]
    fn neighbors<'a>(&'a self, v: VertexId) -> impl Iterator<Item = VertexId> + 'a {
        self.out_edges(v).map(|(q, _)| q)
    }

    #[inline]
    fn in_neighbors<'a>(&'a self, v: VertexId) -> impl Iterator<Item = VertexId> + 'a {
        self.in_edges(v).map(|(q, _)| q)
    }
}
