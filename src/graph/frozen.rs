//! Frozen CSR (Compressed Sparse Row) snapshot of a [`LazyGraph`].
//!
//! Immutable, cache-friendly adjacency with deterministic iteration order.
//! Built from the *reconciled* state only: pending mutations of the source
//! graph are not captured. Neighbour lists are contiguous sorted slices, so
//! degrees are O(1) and edge lookup is a binary search.

use std::iter::{Copied, Zip};
use std::slice;
use std::sync::Arc;

use bitvec::vec::BitVec;

use super::store::LazyGraph;
use super::vertex::VertexId;
use super::view::DirectedGraph;

/// `(neighbor, &payload)` pairs over one CSR row.
pub type CsrIter<'a, E> = Zip<Copied<slice::Iter<'a, VertexId>>, slice::Iter<'a, E>>;

/// Immutable graph backed by a pair of CSR adjacency arrays.
#[derive(Clone, Debug)]
pub struct FrozenGraph<E> {
    present: BitVec,

    /// CSR arrays for outgoing edges.
    out_offsets: Arc<[usize]>,
    out_targets: Arc<[VertexId]>,
    out_pay: Arc<[E]>,

    /// CSR arrays for incoming edges (mirrors).
    in_offsets: Arc<[usize]>,
    in_sources: Arc<[VertexId]>,
    in_pay: Arc<[E]>,
}

impl<E: Clone> FrozenGraph<E> {
    /// Snapshot the reconciled state of `g`.
    pub fn from_graph<V: Clone>(g: &LazyGraph<V, E>) -> Self {
        let span = g.span();
        let present: BitVec = (0..span)
            .map(|i| g.has_vertex(VertexId::from_index(i)))
            .collect();

        let mut out_offsets = Vec::with_capacity(span + 1);
        let mut in_offsets = Vec::with_capacity(span + 1);
        let mut out_targets = Vec::with_capacity(g.size());
        let mut out_pay = Vec::with_capacity(g.size());
        let mut in_sources = Vec::with_capacity(g.size());
        let mut in_pay = Vec::with_capacity(g.size());
        out_offsets.push(0);
        in_offsets.push(0);

        for i in 0..span {
            let v = VertexId::from_index(i);
            for (q, w) in g.out_edges(v) {
                out_targets.push(q);
                out_pay.push(w.clone());
            }
            out_offsets.push(out_targets.len());
            for (q, w) in g.in_edges(v) {
                in_sources.push(q);
                in_pay.push(w.clone());
            }
            in_offsets.push(in_sources.len());
        }

        Self {
            present,
            out_offsets: out_offsets.into(),
            out_targets: out_targets.into(),
            out_pay: out_pay.into(),
            in_offsets: in_offsets.into(),
            in_sources: in_sources.into(),
            in_pay: in_pay.into(),
        }
    }
}

impl<E> FrozenGraph<E> {
    #[inline]
    pub fn span(&self) -> usize {
        self.present.len()
    }

    /// Number of present vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.present.count_ones()
    }

    /// Number of edges.
    #[inline]
    pub fn size(&self) -> usize {
        self.out_targets.len()
    }

    #[inline]
    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.present.get(v.index()).is_some_and(|bit| *bit)
    }

    #[inline]
    fn row(offsets: &[usize], v: VertexId) -> (usize, usize) {
        let i = v.index();
        if i + 1 < offsets.len() {
            (offsets[i], offsets[i + 1])
        } else {
            (0, 0)
        }
    }

    pub fn get_edge(&self, u: VertexId, v: VertexId) -> Option<&E> {
        let (lo, hi) = Self::row(&self.out_offsets, u);
        self.out_targets[lo..hi]
            .binary_search(&v)
            .ok()
            .map(|k| &self.out_pay[lo + k])
    }

    #[inline]
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.get_edge(u, v).is_some()
    }

    pub fn out_edges(&self, v: VertexId) -> CsrIter<'_, E> {
        let (lo, hi) = Self::row(&self.out_offsets, v);
        self.out_targets[lo..hi]
            .iter()
            .copied()
            .zip(self.out_pay[lo..hi].iter())
    }

    pub fn in_edges(&self, v: VertexId) -> CsrIter<'_, E> {
        let (lo, hi) = Self::row(&self.in_offsets, v);
        self.in_sources[lo..hi]
            .iter()
            .copied()
            .zip(self.in_pay[lo..hi].iter())
    }

    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        let (lo, hi) = Self::row(&self.out_offsets, v);
        hi - lo
    }

    #[inline]
    pub fn in_degree(&self, v: VertexId) -> usize {
        let (lo, hi) = Self::row(&self.in_offsets, v);
        hi - lo
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.present.iter_ones().map(VertexId::from_index)
    }
}

impl<E> DirectedGraph for FrozenGraph<E> {
    type Edge = E;
    type OutIter<'a>
        = CsrIter<'a, E>
    where
        Self: 'a;
    type InIter<'a>
        = CsrIter<'a, E>
    where
        Self: 'a;

    fn span(&self) -> usize {
        FrozenGraph::span(self)
    }

    fn has_vertex(&self, v: VertexId) -> bool {
        FrozenGraph::has_vertex(self, v)
    }

    fn out_edges<'a>(&'a self, v: VertexId) -> Self::OutIter<'a> {
        FrozenGraph::out_edges(self, v)
    }

    fn in_edges<'a>(&'a self, v: VertexId) -> Self::InIter<'a> {
        FrozenGraph::in_edges(self, v)
    }

    #[inline]
    fn degree(&self, v: VertexId) -> usize {
        FrozenGraph::degree(self, v)
    }

    #[inline]
    fn in_degree(&self, v: VertexId) -> usize {
        FrozenGraph::in_degree(self, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vid(raw: u32) -> VertexId {
        VertexId::new(raw)
    }

    #[test]
    fn snapshot_matches_reconciled_state() {
        let mut g = LazyGraph::new((), 0u32);
        g.add_edge(vid(0), vid(2), 2);
        g.add_edge(vid(0), vid(1), 1);
        g.add_edge(vid(3), vid(0), 30);
        g.reconcile();
        g.add_edge(vid(1), vid(3), 99); // pending: not captured

        let f = g.freeze();
        assert_eq!(f.span(), 4);
        assert_eq!(f.order(), 4);
        assert_eq!(f.size(), 3);
        assert_eq!(
            f.out_edges(vid(0)).map(|(q, w)| (q, *w)).collect::<Vec<_>>(),
            vec![(vid(1), 1), (vid(2), 2)]
        );
        assert_eq!(f.in_degree(vid(0)), 1);
        assert_eq!(f.get_edge(vid(3), vid(0)), Some(&30));
        assert!(!f.has_edge(vid(1), vid(3)));
        assert_eq!(f.degree(vid(42)), 0);
        assert!(f.out_edges(vid(42)).next().is_none());
    }

    #[test]
    fn holes_are_absent() {
        let mut g = LazyGraph::new((), ());
        g.add_vertex(vid(1), ());
        g.add_vertex(vid(3), ());
        g.remove_vertex(vid(1));
        g.reconcile();
        let f = g.freeze();
        assert_eq!(f.vertices().collect::<Vec<_>>(), vec![vid(3)]);
        assert!(!f.has_vertex(vid(1)));
    }
}
