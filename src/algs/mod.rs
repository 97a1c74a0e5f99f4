//! Algorithms over sorted arrays and graph views.

pub mod set_ops;
pub mod traversal;
