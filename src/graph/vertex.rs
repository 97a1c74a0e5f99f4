//! `VertexId`: a strong, zero-cost index into the vertex arena
//!
//! Vertex ids are small dense non-negative integers used directly as storage
//! indices. Unlike a hash key, an id is meaningful only relative to the
//! graph's current span; ids may have holes after removal.
//!
//! This module provides:
//! - A transparent `VertexId` newtype around `u32`.
//! - Conversions to and from raw integers and `usize` indices.
//! - `Debug`/`Display`, ordering and hashing so ids work as container keys.

use std::fmt;

/// Index of a vertex slot.
///
/// # Memory layout
/// `repr(transparent)` over `u32`: a `Vec<(VertexId, E)>` adjacency packs the
/// same as one keyed by raw integers.
#[derive(
    Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a `VertexId` from a raw integer.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use lazy_graph::graph::VertexId;
    /// let v = VertexId::new(7);
    /// assert_eq!(v.get(), 7);
    /// assert_eq!(v.index(), 7usize);
    /// ```
    #[inline]
    pub const fn new(raw: u32) -> Self {
        VertexId(raw)
    }

    /// Raw integer value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Storage index of this id.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Id for a storage index. Indices come from spans, which never exceed
    /// the `u32` id space.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "vertex index {index} overflows u32");
        VertexId(index as u32)
    }
}

impl From<u32> for VertexId {
    #[inline]
    fn from(raw: u32) -> Self {
        VertexId(raw)
    }
}

impl From<VertexId> for u32 {
    #[inline]
    fn from(v: VertexId) -> Self {
        v.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VertexId").field(&self.0).finish()
    }
}

/// Prints only the raw integer.
impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static_assertions::assert_eq_size!(VertexId, u32);
static_assertions::assert_eq_align!(VertexId, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display() {
        let v = VertexId::new(7);
        assert_eq!(format!("{:?}", v), "VertexId(7)");
        assert_eq!(format!("{}", v), "7");
    }

    #[test]
    fn ordering_follows_raw_value() {
        let mut ids = vec![VertexId::new(4), VertexId::from(1), VertexId::new(3)];
        ids.sort();
        assert_eq!(ids.iter().map(|v| v.get()).collect::<Vec<_>>(), vec![1, 3, 4]);
        assert_eq!(u32::from(ids[2]), 4);
    }

    #[test]
    fn json_is_a_bare_integer() {
        let v = VertexId::new(123);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "123");
        let back: VertexId = serde_json::from_str(&s).unwrap();
        assert_eq!(back, v);
    }
}
