//! # lazy-graph
//!
//! lazy-graph is an in-memory directed graph store built on deferred-mutation
//! adjacency containers. Edge insertions and removals are buffered per vertex
//! and only merged into a sorted, query-consistent representation when
//! `reconcile()` runs, so the cost of many incremental edits (streaming
//! construction, incremental algorithms) is paid once per batch.
//!
//! ## Visibility contract
//!
//! `reconcile()` is an explicit commit barrier. Queries (`has_edge`, `degree`,
//! `out_edges`, `order`, `size`, ...) observe only the state as of the last
//! reconcile; buffered mutations are invisible to them until then. Stale reads
//! are always safe, never corrupt.
//!
//! ## Errors
//!
//! The core API is total: absent vertices and edges read back as the
//! caller-supplied sentinel and update-only operations on absent targets are
//! no-ops. [`graph_error::GraphError`] is returned only by opt-in strict entry
//! points and by invariant validation.
//!
//! ## Threading
//!
//! Not thread-safe by design; wrap the store in your own lock if several
//! threads mutate it.

pub mod algs;
pub mod container;
pub mod debug_invariants;
pub mod graph;
pub mod graph_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::traversal::{co_reachable, connected_component, reachable, Dir};
    pub use crate::container::{LazyMap, PendingMode};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph::{
        DirectedGraph, FrozenGraph, GraphOptions, LazyGraph, ShrinkPolicy, VertexId,
    };
    pub use crate::graph_error::GraphError;
}
