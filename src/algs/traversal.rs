//! Reachability iterators over any [`DirectedGraph`].
//!
//! Stack + seen-bitmap depth-first traversal without dynamic dispatch, with
//! deterministic "first seen wins" order: seeds are visited in the order
//! given and neighbours in ascending id order. Only reconciled edges are
//! followed, so on a [`LazyGraph`](crate::graph::LazyGraph) the result
//! reflects the last `reconcile()`.

use bitvec::vec::BitVec;

use crate::graph::{DirectedGraph, VertexId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dir {
    /// Follow outgoing edges.
    Forward,
    /// Follow incoming edges.
    Backward,
    /// Follow both, ignoring edge direction.
    Both,
}

/// Depth-first traversal iterator.
pub struct Reachable<'a, G: DirectedGraph> {
    graph: &'a G,
    stack: Vec<VertexId>,
    seen: BitVec,
    dir: Dir,
}

impl<'a, G: DirectedGraph> Reachable<'a, G> {
    /// Starts a traversal from `seeds`. Seeds that are not present vertices
    /// are skipped; duplicates are visited once.
    pub fn new<I>(graph: &'a G, seeds: I, dir: Dir) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut seen = BitVec::repeat(false, graph.span());
        let mut stack = Vec::new();
        for s in seeds {
            if graph.has_vertex(s) && !seen[s.index()] {
                seen.set(s.index(), true);
                stack.push(s);
            }
        }
        // pop order must follow seed order
        stack.reverse();
        Self {
            graph,
            stack,
            seen,
            dir,
        }
    }

    #[inline]
    fn push_all(&mut self, next: impl DoubleEndedIterator<Item = VertexId>) {
        // reversed so the smallest neighbour is popped first
        for q in next.rev() {
            let i = q.index();
            if i < self.seen.len() && !self.seen[i] {
                self.seen.set(i, true);
                self.stack.push(q);
            }
        }
    }
}

impl<G: DirectedGraph> Iterator for Reachable<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let p = self.stack.pop()?;
        let graph = self.graph;
        match self.dir {
            Dir::Forward => self.push_all(graph.out_edges(p).map(|(q, _)| q)),
            Dir::Backward => self.push_all(graph.in_edges(p).map(|(q, _)| q)),
            Dir::Both => {
                self.push_all(graph.in_edges(p).map(|(q, _)| q));
                self.push_all(graph.out_edges(p).map(|(q, _)| q));
            }
        }
        Some(p)
    }
}

/// Vertices reachable from `seeds` along outgoing edges (seeds included).
pub fn reachable<G, I>(graph: &G, seeds: I) -> Reachable<'_, G>
where
    G: DirectedGraph,
    I: IntoIterator<Item = VertexId>,
{
    Reachable::new(graph, seeds, Dir::Forward)
}

/// Vertices that can reach `seeds` along outgoing edges (seeds included).
pub fn co_reachable<G, I>(graph: &G, seeds: I) -> Reachable<'_, G>
where
    G: DirectedGraph,
    I: IntoIterator<Item = VertexId>,
{
    Reachable::new(graph, seeds, Dir::Backward)
}

/// Weakly connected component(s) containing `seeds`.
pub fn connected_component<G, I>(graph: &G, seeds: I) -> Reachable<'_, G>
where
    G: DirectedGraph,
    I: IntoIterator<Item = VertexId>,
{
    Reachable::new(graph, seeds, Dir::Both)
}

/// Traversal result in ascending id order.
pub fn reachable_set<G, I>(graph: &G, seeds: I, dir: Dir) -> Vec<VertexId>
where
    G: DirectedGraph,
    I: IntoIterator<Item = VertexId>,
{
    let mut out: Vec<_> = Reachable::new(graph, seeds, dir).collect();
    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::LazyGraph;

    fn vid(raw: u32) -> VertexId {
        VertexId::new(raw)
    }

    fn chain() -> LazyGraph<(), ()> {
        // 0 -> 1 -> 2, 3 -> 1, 4 isolated
        let mut g = LazyGraph::new((), ());
        g.add_edge(vid(0), vid(1), ());
        g.add_edge(vid(1), vid(2), ());
        g.add_edge(vid(3), vid(1), ());
        g.add_vertex(vid(4), ());
        g.reconcile();
        g
    }

    #[test]
    fn forward_and_backward() {
        let g = chain();
        assert_eq!(
            reachable(&g, [vid(0)]).collect::<Vec<_>>(),
            vec![vid(0), vid(1), vid(2)]
        );
        assert_eq!(
            reachable_set(&g, [vid(2)], Dir::Backward),
            vec![vid(0), vid(1), vid(2), vid(3)]
        );
        assert_eq!(co_reachable(&g, [vid(4)]).count(), 1);
    }

    #[test]
    fn both_directions_and_absent_seeds() {
        let g = chain();
        assert_eq!(
            reachable_set(&g, [vid(2), vid(9)], Dir::Both),
            vec![vid(0), vid(1), vid(2), vid(3)]
        );
        assert_eq!(connected_component(&g, [vid(9)]).count(), 0);
    }

    #[test]
    fn pending_edges_are_not_followed() {
        let mut g = chain();
        g.add_edge(vid(2), vid(4), ());
        assert_eq!(reachable(&g, [vid(0)]).count(), 3);
        g.reconcile();
        assert_eq!(reachable(&g, [vid(0)]).count(), 4);
    }

    #[test]
    fn runs_on_frozen_snapshots() {
        let g = chain();
        let f = g.freeze();
        assert_eq!(
            reachable(&f, [vid(3)]).collect::<Vec<_>>(),
            reachable(&g, [vid(3)]).collect::<Vec<_>>()
        );
    }
}
