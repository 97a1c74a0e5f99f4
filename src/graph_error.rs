//! GraphError: error type for the opt-in fallible lazy-graph APIs
//!
//! The core mutation and query surface is total: absent vertices and edges
//! read back as the configured sentinel and update-only operations on absent
//! targets are silent no-ops. This type is only produced by the strict entry
//! points (`try_resize`, `try_with_options`) and by invariant validation.

use thiserror::Error;

use crate::graph::vertex::VertexId;

/// Which of the two per-vertex adjacency containers an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Outgoing,
    Incoming,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Outgoing => f.write_str("outgoing"),
            Direction::Incoming => f.write_str("incoming"),
        }
    }
}

/// Unified error type for lazy-graph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A shrinking resize would discard a live vertex.
    #[error("cannot shrink span to {span}: vertex {vertex} is still present")]
    ShrinkBelowLiveVertex { span: usize, vertex: VertexId },
    /// Construction options are inconsistent.
    #[error("invalid graph options: {0}")]
    InvalidOptions(String),
    /// A reconciled range is not sorted ascending by key.
    #[error("reconciled entries out of order at position {position}")]
    UnsortedEntries { position: usize },
    /// A reconciled range holds the same key twice.
    #[error("duplicate key in reconciled entries at position {position}")]
    DuplicateKey { position: usize },
    /// An adjacency container of `vertex` failed its own validation.
    #[error("{direction} adjacency of vertex {vertex} is not canonical: {reason}")]
    InvalidAdjacency {
        vertex: VertexId,
        direction: Direction,
        #[source]
        reason: Box<GraphError>,
    },
    /// An edge references a vertex that is not present.
    #[error("edge ({from} -> {to}) references an absent vertex")]
    DanglingEdge { from: VertexId, to: VertexId },
    /// An edge copy has no counterpart in the opposite container.
    #[error("edge ({from} -> {to}) has no {missing} copy")]
    MissingMirror {
        from: VertexId,
        to: VertexId,
        missing: Direction,
    },
    /// The outgoing and incoming copies of an edge carry different weights.
    #[error("edge ({from} -> {to}) copies carry different values")]
    MirrorValueMismatch { from: VertexId, to: VertexId },
}
