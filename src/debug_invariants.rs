//! Structural self-checks for reconciled containers and graphs.
//!
//! Checks are always callable through [`DebugInvariants::validate_invariants`].
//! The panicking forms only do work in debug builds or with the
//! `strict-invariants` feature.

use crate::graph_error::GraphError;

pub trait DebugInvariants {
    /// First violated invariant of the reconciled state, if any.
    fn validate_invariants(&self) -> Result<(), GraphError>;

    /// Panics on a violation when invariant checking is compiled in.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), core::any::type_name::<Self>());
    }
}

/// Runs `$check` (a `Result<_, GraphError>`) and panics with `$what` and the
/// error when invariant checking is compiled in. Expands to nothing otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($check:expr, $what:expr) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants"))]
        {
            if let Err(err) = $check {
                panic!("[invariants] {}: {}", $what, err);
            }
        }
    };
}
