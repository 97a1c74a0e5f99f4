//! Construction options for [`LazyGraph`](super::LazyGraph).

use serde::{Deserialize, Serialize};

use crate::graph_error::GraphError;

/// What `resize` does when the new span would cut off live vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShrinkPolicy {
    /// Drop every vertex at or above the new span, together with its edges.
    /// This is silent data loss by contract; a warning is logged.
    #[default]
    Discard,
    /// Leave the span unchanged and log the refusal.
    Reject,
}

/// Tunables for a [`LazyGraph`](super::LazyGraph).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Number of vertex slots allocated up front.
    pub initial_span: usize,
    /// Capacity reserved in each adjacency container of a new vertex.
    pub degree_hint: usize,
    pub shrink_policy: ShrinkPolicy,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            initial_span: 0,
            degree_hint: 0,
            shrink_policy: ShrinkPolicy::Discard,
        }
    }
}

impl GraphOptions {
    /// Largest span addressable by a `u32` vertex id.
    pub const MAX_SPAN: usize = u32::MAX as usize + 1;

    /// Checks that the options describe an addressable graph.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.initial_span > Self::MAX_SPAN {
            return Err(GraphError::InvalidOptions(format!(
                "initial_span {} exceeds the vertex id space ({})",
                self.initial_span,
                Self::MAX_SPAN
            )));
        }
        if self.initial_span > 0 && self.degree_hint > self.initial_span {
            return Err(GraphError::InvalidOptions(format!(
                "degree_hint {} exceeds initial_span {}",
                self.degree_hint, self.initial_span
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(GraphOptions::default().validate().is_ok());
    }

    #[test]
    fn oversized_span_is_rejected() {
        let opts = GraphOptions {
            initial_span: GraphOptions::MAX_SPAN + 1,
            ..Default::default()
        };
        assert!(matches!(opts.validate(), Err(GraphError::InvalidOptions(_))));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let opts: GraphOptions =
            serde_json::from_str(r#"{"initial_span": 16, "shrink_policy": "reject"}"#).unwrap();
        assert_eq!(opts.initial_span, 16);
        assert_eq!(opts.degree_hint, 0);
        assert_eq!(opts.shrink_policy, ShrinkPolicy::Reject);
    }
}
