//! Deferred keyed containers.
//!
//! [`LazyMap`] is the single reconciling container used both on its own and
//! as the per-vertex adjacency of [`LazyGraph`](crate::graph::LazyGraph).

pub mod lazy_map;
pub mod pending;

pub use lazy_map::{Iter, LazyMap};
pub use pending::PendingMode;
