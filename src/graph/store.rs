//! Directed graph store over deferred adjacency containers.
//!
//! [`LazyGraph`] addresses vertices by dense [`VertexId`] in an index arena: a
//! vector of slots plus an existence bitmap. Each present vertex owns two
//! [`LazyMap`]s, one for outgoing edges keyed by target and one for incoming
//! edges keyed by source, so every edge is stored twice.
//!
//! Edge mutations are buffered in both containers and only become visible to
//! queries after [`LazyGraph::reconcile`]. `order()` and `size()` are cached by
//! that same pass.

use bitvec::vec::BitVec;
use itertools::Itertools;

use super::frozen::FrozenGraph;
use super::options::{GraphOptions, ShrinkPolicy};
use super::vertex::VertexId;
use super::view::DirectedGraph;
use crate::container::{Iter, LazyMap};
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::{Direction, GraphError};

/// Iterator over `(neighbor, &payload)` pairs of one adjacency container.
pub type EdgeIter<'a, E> = Iter<'a, VertexId, E>;

/// Storage for one vertex id.
#[derive(Clone, Debug)]
struct VertexSlot<V, E> {
    value: V,
    outgoing: LazyMap<VertexId, E>,
    incoming: LazyMap<VertexId, E>,
}

impl<V, E> VertexSlot<V, E> {
    fn vacant(value: V) -> Self {
        Self {
            value,
            outgoing: LazyMap::new(),
            incoming: LazyMap::new(),
        }
    }
}

/// In-memory directed graph with batch-reconciled adjacency.
///
/// # Type Parameters
/// - `V`: per-vertex value; absent vertices read as the default sentinel.
/// - `E`: per-edge payload; absent edges read as the default sentinel.
///
/// # Example
/// ```rust
/// use lazy_graph::graph::{LazyGraph, VertexId};
/// let (a, b) = (VertexId::new(0), VertexId::new(1));
/// let mut g = LazyGraph::new("", 0u32);
/// g.add_vertex(a, "A");
/// g.add_vertex(b, "B");
/// g.add_edge(a, b, 5);
/// assert_eq!(g.degree(a), 0); // still pending
/// g.reconcile();
/// assert_eq!((g.order(), g.size()), (2, 1));
/// assert_eq!(*g.edge_value(a, b), 5);
/// ```
#[derive(Clone, Debug)]
pub struct LazyGraph<V, E> {
    slots: Vec<VertexSlot<V, E>>,
    present: BitVec,
    default_vertex: V,
    default_edge: E,
    options: GraphOptions,
    order: usize,
    size: usize,
}

impl<V: Clone, E: Clone> LazyGraph<V, E> {
    /// Creates an empty graph with the given sentinels for absent vertices and edges.
    pub fn new(default_vertex: V, default_edge: E) -> Self {
        Self::with_options(default_vertex, default_edge, GraphOptions::default())
    }

    /// Creates an empty graph sized and tuned by `options`.
    ///
    /// Options are taken as given; use [`try_with_options`](Self::try_with_options)
    /// to validate them first.
    pub fn with_options(default_vertex: V, default_edge: E, options: GraphOptions) -> Self {
        let mut g = Self {
            slots: Vec::new(),
            present: BitVec::new(),
            default_vertex,
            default_edge,
            options,
            order: 0,
            size: 0,
        };
        g.grow_span(options.initial_span.min(GraphOptions::MAX_SPAN));
        g
    }

    /// Validating variant of [`with_options`](Self::with_options).
    pub fn try_with_options(
        default_vertex: V,
        default_edge: E,
        options: GraphOptions,
    ) -> Result<Self, GraphError> {
        options.validate()?;
        Ok(Self::with_options(default_vertex, default_edge, options))
    }

    /// Builds a graph from `(source, target, payload)` triples and reconciles it.
    /// For repeated `(source, target)` pairs the last payload wins.
    pub fn from_edges<I>(default_vertex: V, default_edge: E, edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, E)>,
    {
        let mut g = Self::new(default_vertex, default_edge);
        for (u, v, w) in edges {
            g.add_edge(u, v, w);
        }
        g.reconcile();
        g
    }

    // ---------- sizing ----------

    /// Exclusive upper bound on vertex ids.
    #[inline]
    pub fn span(&self) -> usize {
        self.slots.len()
    }

    /// Number of present vertices as of the last [`reconcile`](Self::reconcile).
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of reconciled edges as of the last [`reconcile`](Self::reconcile).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    #[inline]
    pub fn default_vertex_value(&self) -> &V {
        &self.default_vertex
    }

    #[inline]
    pub fn default_edge_value(&self) -> &E {
        &self.default_edge
    }

    /// Highest present vertex id, if any.
    pub fn highest_vertex(&self) -> Option<VertexId> {
        self.present.last_one().map(VertexId::from_index)
    }

    fn grow_span(&mut self, span: usize) {
        if span <= self.slots.len() {
            return;
        }
        let default_vertex = &self.default_vertex;
        self.slots
            .resize_with(span, || VertexSlot::vacant(default_vertex.clone()));
        self.present.resize(span, false);
    }

    /// Sets the span to `span`.
    ///
    /// Growing never disturbs existing ids. Shrinking below a present vertex
    /// follows [`GraphOptions::shrink_policy`]: with [`ShrinkPolicy::Discard`]
    /// those vertices and all their edges are **silently lost**; with
    /// [`ShrinkPolicy::Reject`] the span is left unchanged. Either way a
    /// warning is logged.
    pub fn resize(&mut self, span: usize) {
        let span = span.min(GraphOptions::MAX_SPAN);
        if span >= self.span() {
            self.grow_span(span);
            return;
        }
        let doomed: Vec<VertexId> = self
            .present
            .iter_ones()
            .filter(|&i| i >= span)
            .map(VertexId::from_index)
            .collect();
        if !doomed.is_empty() {
            match self.options.shrink_policy {
                ShrinkPolicy::Reject => {
                    log::warn!(
                        "refusing to shrink span {} -> {span}: {} live vertices would be dropped",
                        self.span(),
                        doomed.len()
                    );
                    return;
                }
                ShrinkPolicy::Discard => {
                    log::warn!(
                        "shrinking span {} -> {span} discards {} live vertices",
                        self.span(),
                        doomed.len()
                    );
                    for v in doomed {
                        self.remove_vertex(v);
                    }
                }
            }
        }
        self.slots.truncate(span);
        self.present.truncate(span);
    }

    /// Strict [`resize`](Self::resize): refuses any shrink that would drop a
    /// present vertex, regardless of the configured policy.
    pub fn try_resize(&mut self, span: usize) -> Result<(), GraphError> {
        match self.highest_vertex() {
            Some(vertex) if vertex.index() >= span => {
                Err(GraphError::ShrinkBelowLiveVertex { span, vertex })
            }
            _ => {
                self.resize(span);
                Ok(())
            }
        }
    }

    /// Preallocates room for `additional` more vertex slots.
    pub fn reserve_vertices(&mut self, additional: usize) {
        self.slots.reserve(additional);
        self.present.reserve(additional);
    }

    // ---------- vertices ----------

    #[inline]
    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.present.get(v.index()).is_some_and(|bit| *bit)
    }

    /// Makes `v` present with `value`, growing the span if needed.
    ///
    /// A new vertex starts with empty adjacency; re-adding a present vertex
    /// only replaces its value.
    pub fn add_vertex(&mut self, v: VertexId, value: V) {
        let i = v.index();
        self.grow_span(i + 1);
        let slot = &mut self.slots[i];
        slot.value = value;
        if !self.present[i] {
            slot.outgoing.reserve(self.options.degree_hint);
            slot.incoming.reserve(self.options.degree_hint);
            self.present.set(i, true);
        }
    }

    /// Makes `v` absent: clears both containers, resets its value to the
    /// sentinel and buffers removal of the mirror copies held by neighbours.
    ///
    /// Returns `false` if `v` was not present.
    pub fn remove_vertex(&mut self, v: VertexId) -> bool {
        if !self.has_vertex(v) {
            return false;
        }
        let i = v.index();
        let targets: Vec<VertexId> = self.slots[i]
            .outgoing
            .touched_keys()
            .filter(|&t| t != v)
            .unique()
            .collect();
        let sources: Vec<VertexId> = self.slots[i]
            .incoming
            .touched_keys()
            .filter(|&s| s != v)
            .unique()
            .collect();
        for t in targets {
            if self.has_vertex(t) {
                self.slots[t.index()].incoming.remove(v);
            }
        }
        for s in sources {
            if self.has_vertex(s) {
                self.slots[s.index()].outgoing.remove(v);
            }
        }

        let slot = &mut self.slots[i];
        slot.outgoing.clear();
        slot.incoming.clear();
        slot.value = self.default_vertex.clone();
        self.present.set(i, false);
        true
    }

    /// Replaces the value of a present vertex. No-op (returns `false`) if absent.
    pub fn set_vertex_value(&mut self, v: VertexId, value: V) -> bool {
        if !self.has_vertex(v) {
            return false;
        }
        self.slots[v.index()].value = value;
        true
    }

    /// Value of `v`, or the vertex sentinel if absent.
    #[inline]
    pub fn vertex_value(&self, v: VertexId) -> &V {
        self.get_vertex(v).unwrap_or(&self.default_vertex)
    }

    #[inline]
    pub fn get_vertex(&self, v: VertexId) -> Option<&V> {
        self.has_vertex(v).then(|| &self.slots[v.index()].value)
    }

    /// Present vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.present.iter_ones().map(VertexId::from_index)
    }

    /// Eager form of [`vertices`](Self::vertices).
    pub fn vertex_list(&self) -> Vec<VertexId> {
        self.vertices().collect()
    }

    // ---------- edges: mutation ----------

    /// Buffers the edge `u -> v` with payload `w` in both containers.
    ///
    /// Absent endpoints are made present with the default vertex value. The
    /// edge is invisible to queries until [`reconcile`](Self::reconcile);
    /// re-adding an existing edge overwrites its payload at that point.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, w: E) {
        if !self.has_vertex(u) {
            self.add_vertex(u, self.default_vertex.clone());
        }
        if !self.has_vertex(v) {
            self.add_vertex(v, self.default_vertex.clone());
        }
        self.slots[u.index()].outgoing.add(v, w.clone());
        self.slots[v.index()].incoming.add(u, w);
    }

    /// Buffers removal of the edge `u -> v` from both containers.
    ///
    /// Removing an edge that does not exist is absorbed at reconciliation.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) {
        if !self.has_vertex(u) || !self.has_vertex(v) {
            return;
        }
        self.slots[u.index()].outgoing.remove(v);
        self.slots[v.index()].incoming.remove(u);
    }

    /// Overwrites the payload of a reconciled edge in both copies, bypassing
    /// the pending batches. No-op (returns `false`) unless `has_edge(u, v)`.
    pub fn set_edge_value(&mut self, u: VertexId, v: VertexId, w: E) -> bool {
        if !self.has_edge(u, v) {
            return false;
        }
        if let Some(slot) = self.slots[u.index()].outgoing.get_reconciled_mut(v) {
            *slot = w.clone();
        }
        match self.slots[v.index()].incoming.get_reconciled_mut(u) {
            Some(slot) => *slot = w,
            None => log::warn!("edge ({u} -> {v}) has no incoming copy; graph needs reconcile"),
        }
        true
    }

    // ---------- edges: queries (reconciled state only) ----------

    #[inline]
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.has_vertex(u) && self.slots[u.index()].outgoing.contains_key(v)
    }

    /// Payload of `u -> v`, or the edge sentinel if absent.
    #[inline]
    pub fn edge_value(&self, u: VertexId, v: VertexId) -> &E {
        self.get_edge(u, v).unwrap_or(&self.default_edge)
    }

    #[inline]
    pub fn get_edge(&self, u: VertexId, v: VertexId) -> Option<&E> {
        if !self.has_vertex(u) {
            return None;
        }
        self.slots[u.index()].outgoing.get_reconciled(v)
    }

    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        if self.has_vertex(v) {
            self.slots[v.index()].outgoing.len()
        } else {
            0
        }
    }

    #[inline]
    pub fn in_degree(&self, v: VertexId) -> usize {
        if self.has_vertex(v) {
            self.slots[v.index()].incoming.len()
        } else {
            0
        }
    }

    /// Outgoing `(target, &payload)` pairs in ascending target order.
    #[inline]
    pub fn out_edges(&self, v: VertexId) -> EdgeIter<'_, E> {
        if self.has_vertex(v) {
            self.slots[v.index()].outgoing.iter()
        } else {
            EdgeIter::default()
        }
    }

    /// Incoming `(source, &payload)` pairs in ascending source order.
    #[inline]
    pub fn in_edges(&self, v: VertexId) -> EdgeIter<'_, E> {
        if self.has_vertex(v) {
            self.slots[v.index()].incoming.iter()
        } else {
            EdgeIter::default()
        }
    }

    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.out_edges(v).map(|(q, _)| q)
    }

    pub fn in_neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.in_edges(v).map(|(q, _)| q)
    }

    /// Eager form of [`out_edges`](Self::out_edges).
    pub fn edge_list(&self, v: VertexId) -> Vec<(VertexId, E)> {
        self.out_edges(v).map(|(q, w)| (q, w.clone())).collect()
    }

    /// Eager form of [`in_edges`](Self::in_edges).
    pub fn in_edge_list(&self, v: VertexId) -> Vec<(VertexId, E)> {
        self.in_edges(v).map(|(q, w)| (q, w.clone())).collect()
    }

    /// Every reconciled edge as `(source, target, &payload)`, ordered by
    /// source then target.
    pub fn all_edges(&self) -> impl Iterator<Item = (VertexId, VertexId, &E)> + '_ {
        self.vertices()
            .flat_map(move |u| self.out_edges(u).map(move |(v, w)| (u, v, w)))
    }

    /// Eager form of [`all_edges`](Self::all_edges).
    pub fn all_edge_list(&self) -> Vec<(VertexId, VertexId, E)> {
        self.all_edges().map(|(u, v, w)| (u, v, w.clone())).collect()
    }

    // ---------- reconciliation ----------

    /// `true` if any present vertex has buffered edge mutations.
    pub fn has_pending(&self) -> bool {
        self.present.iter_ones().any(|i| {
            let slot = &self.slots[i];
            slot.outgoing.has_pending() || slot.incoming.has_pending()
        })
    }

    /// Reconciles every present vertex's containers and recomputes the cached
    /// `order()` and `size()`.
    ///
    /// One pass over all vertices and edges; calling it twice in a row is a
    /// no-op the second time.
    pub fn reconcile(&mut self) {
        let mut order = 0;
        let mut size = 0;
        let mut merged = 0usize;
        for i in self.present.iter_ones() {
            let slot = &mut self.slots[i];
            merged += slot.outgoing.reconcile() as usize;
            merged += slot.incoming.reconcile() as usize;
            order += 1;
            size += slot.outgoing.len();
        }
        self.order = order;
        self.size = size;
        log::debug!(
            "lazy graph reconciled: {merged} containers merged, order={order}, size={size}"
        );
        crate::debug_invariants!(self.validate_structure(), "LazyGraph::reconcile");
    }

    /// Makes every vertex absent. The span is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.outgoing.clear();
            slot.incoming.clear();
            slot.value = self.default_vertex.clone();
        }
        self.present.fill(false);
        self.order = 0;
        self.size = 0;
    }

    /// Immutable CSR snapshot of the reconciled state.
    pub fn freeze(&self) -> FrozenGraph<E> {
        FrozenGraph::from_graph(self)
    }

    // ---------- invariants ----------

    /// Checks the reconciled state with `same` deciding payload equality of
    /// the two copies of an edge.
    fn validate_with(&self, same: impl Fn(&E, &E) -> bool) -> Result<(), GraphError> {
        for i in self.present.iter_ones() {
            let u = VertexId::from_index(i);
            let slot = &self.slots[i];
            slot.outgoing
                .validate_invariants()
                .map_err(|e| GraphError::InvalidAdjacency {
                    vertex: u,
                    direction: Direction::Outgoing,
                    reason: Box::new(e),
                })?;
            slot.incoming
                .validate_invariants()
                .map_err(|e| GraphError::InvalidAdjacency {
                    vertex: u,
                    direction: Direction::Incoming,
                    reason: Box::new(e),
                })?;

            for (v, w) in slot.outgoing.iter() {
                if !self.has_vertex(v) {
                    return Err(GraphError::DanglingEdge { from: u, to: v });
                }
                match self.slots[v.index()].incoming.get_reconciled(u) {
                    None => {
                        return Err(GraphError::MissingMirror {
                            from: u,
                            to: v,
                            missing: Direction::Incoming,
                        });
                    }
                    Some(mirror) if !same(w, mirror) => {
                        return Err(GraphError::MirrorValueMismatch { from: u, to: v });
                    }
                    Some(_) => {}
                }
            }
            for (s, _) in slot.incoming.iter() {
                if !self.has_vertex(s) {
                    return Err(GraphError::DanglingEdge { from: s, to: u });
                }
                if !self.slots[s.index()].outgoing.contains_key(u) {
                    return Err(GraphError::MissingMirror {
                        from: s,
                        to: u,
                        missing: Direction::Outgoing,
                    });
                }
            }
        }
        Ok(())
    }

    /// Structural checks only (ordering, mirror presence, no dangling ids).
    pub fn validate_structure(&self) -> Result<(), GraphError> {
        self.validate_with(|_, _| true)
    }
}

/// Meaningful on reconciled state: call after [`LazyGraph::reconcile`].
impl<V: Clone, E: Clone + PartialEq> DebugInvariants for LazyGraph<V, E> {
    fn validate_invariants(&self) -> Result<(), GraphError> {
        self.validate_with(|a, b| a == b)
    }
}

impl<V: Clone, E: Clone> DirectedGraph for LazyGraph<V, E> {
    type Edge = E;
    type OutIter<'a>
        = EdgeIter<'a, E>
    where
        Self: 'a;
    type InIter<'a>
        = EdgeIter<'a, E>
    where
        Self: 'a;

    #[inline]
    fn span(&self) -> usize {
        LazyGraph::span(self)
    }

    #[inline]
    fn has_vertex(&self, v: VertexId) -> bool {
        LazyGraph::has_vertex(self, v)
    }

    #[inline]
    fn out_edges<'a>(&'a self, v: VertexId) -> Self::OutIter<'a> {
        LazyGraph::out_edges(self, v)
    }

    #[inline]
    fn in_edges<'a>(&'a self, v: VertexId) -> Self::InIter<'a> {
        LazyGraph::in_edges(self, v)
    }

    #[inline]
    fn degree(&self, v: VertexId) -> usize {
        LazyGraph::degree(self, v)
    }

    #[inline]
    fn in_degree(&self, v: VertexId) -> usize {
        LazyGraph::in_degree(self, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vid(raw: u32) -> VertexId {
        VertexId::new(raw)
    }

    #[test]
    fn add_vertex_grows_span() {
        let mut g = LazyGraph::new(String::new(), 0i32);
        g.add_vertex(vid(4), "x".to_string());
        assert_eq!(g.span(), 5);
        assert!(g.has_vertex(vid(4)));
        assert!(!g.has_vertex(vid(3)));
        assert!(!g.has_vertex(vid(99)));
        assert_eq!(g.vertex_value(vid(3)), "");
    }

    #[test]
    fn readding_present_vertex_keeps_edges() {
        let mut g = LazyGraph::new(0u8, ());
        g.add_edge(vid(0), vid(1), ());
        g.reconcile();
        g.add_vertex(vid(0), 9);
        assert_eq!(*g.vertex_value(vid(0)), 9);
        assert!(g.has_edge(vid(0), vid(1)));
    }

    #[test]
    fn add_edge_promotes_endpoints_with_default_value() {
        let mut g = LazyGraph::new(-1i32, 0u32);
        g.add_edge(vid(2), vid(5), 7);
        assert!(g.has_vertex(vid(2)));
        assert!(g.has_vertex(vid(5)));
        assert_eq!(*g.vertex_value(vid(5)), -1);
        assert!(!g.has_edge(vid(2), vid(5)));
        assert!(g.has_pending());
        g.reconcile();
        assert!(!g.has_pending());
        assert!(g.has_edge(vid(2), vid(5)));
        assert_eq!(g.in_edge_list(vid(5)), vec![(vid(2), 7)]);
    }

    #[test]
    fn set_edge_value_requires_reconciled_edge() {
        let mut g = LazyGraph::new((), 0u32);
        g.add_edge(vid(0), vid(1), 1);
        assert!(!g.set_edge_value(vid(0), vid(1), 2));
        g.reconcile();
        assert!(g.set_edge_value(vid(0), vid(1), 3));
        assert_eq!(*g.edge_value(vid(0), vid(1)), 3);
        assert_eq!(g.in_edge_list(vid(1)), vec![(vid(0), 3)]);
        assert!(g.validate_invariants().is_ok());
    }

    #[test]
    fn remove_vertex_drops_mirrors() {
        let mut g = LazyGraph::new((), 1u32);
        g.add_edge(vid(0), vid(1), 10);
        g.add_edge(vid(2), vid(0), 20);
        g.add_edge(vid(1), vid(2), 30);
        g.reconcile();
        assert_eq!(g.size(), 3);

        assert!(g.remove_vertex(vid(0)));
        assert!(!g.remove_vertex(vid(0)));
        g.reconcile();
        assert_eq!(g.order(), 2);
        assert_eq!(g.size(), 1);
        assert_eq!(g.in_degree(vid(1)), 0);
        assert_eq!(g.degree(vid(2)), 0);
        assert!(g.validate_invariants().is_ok());
    }

    #[test]
    fn remove_vertex_cancels_pending_edges() {
        let mut g = LazyGraph::new((), ());
        g.add_edge(vid(0), vid(1), ());
        g.remove_vertex(vid(1));
        g.reconcile();
        assert_eq!(g.size(), 0);
        assert_eq!(g.degree(vid(0)), 0);
        assert!(g.validate_invariants().is_ok());
    }

    #[test]
    fn self_loop_is_stored_once_per_direction() {
        let mut g = LazyGraph::new((), 'w');
        g.add_edge(vid(3), vid(3), 'l');
        g.reconcile();
        assert_eq!(g.size(), 1);
        assert_eq!(g.degree(vid(3)), 1);
        assert_eq!(g.in_degree(vid(3)), 1);
        g.remove_vertex(vid(3));
        g.reconcile();
        assert_eq!(g.size(), 0);
    }

    #[test]
    fn shrink_policies() {
        let mut g = LazyGraph::new((), ());
        g.add_edge(vid(1), vid(8), ());
        g.reconcile();

        assert_eq!(
            g.try_resize(5),
            Err(GraphError::ShrinkBelowLiveVertex {
                span: 5,
                vertex: vid(8)
            })
        );
        assert_eq!(g.span(), 9);

        g.resize(5);
        g.reconcile();
        assert_eq!(g.span(), 5);
        assert!(!g.has_vertex(vid(8)));
        assert_eq!(g.degree(vid(1)), 0);
        assert!(g.validate_invariants().is_ok());

        let opts = GraphOptions {
            shrink_policy: ShrinkPolicy::Reject,
            ..Default::default()
        };
        let mut strict = LazyGraph::with_options((), (), opts);
        strict.add_vertex(vid(6), ());
        strict.resize(2);
        assert_eq!(strict.span(), 7);
        assert!(strict.try_resize(7).is_ok());
    }

    #[test]
    fn clear_keeps_span() {
        let mut g = LazyGraph::new(0, 0);
        g.add_edge(vid(0), vid(3), 1);
        g.reconcile();
        g.clear();
        assert_eq!(g.span(), 4);
        assert_eq!((g.order(), g.size()), (0, 0));
        assert!(g.vertices().next().is_none());
        assert_eq!(*g.vertex_value(vid(0)), 0);
    }

    #[test]
    fn options_preallocate_span() {
        let opts = GraphOptions {
            initial_span: 32,
            degree_hint: 4,
            ..Default::default()
        };
        let g = LazyGraph::<(), ()>::try_with_options((), (), opts).unwrap();
        assert_eq!(g.span(), 32);
        assert_eq!(g.order(), 0);
        let bad = GraphOptions {
            initial_span: 2,
            degree_hint: 4,
            ..Default::default()
        };
        assert!(LazyGraph::<(), ()>::try_with_options((), (), bad).is_err());
    }
}
