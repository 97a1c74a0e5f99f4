//! Directed graph store over deferred adjacency containers.
//!
//! - [`VertexId`]: dense index into the vertex arena
//! - [`LazyGraph`]: the mutable store with an explicit `reconcile()` barrier
//! - [`FrozenGraph`]: immutable CSR snapshot of a reconciled store
//! - [`DirectedGraph`]: read-only view implemented by both

pub mod frozen;
pub mod options;
pub mod store;
pub mod vertex;
pub mod view;

pub use frozen::FrozenGraph;
pub use options::{GraphOptions, ShrinkPolicy};
pub use store::{EdgeIter, LazyGraph};
pub use vertex::VertexId;
pub use view::DirectedGraph;
