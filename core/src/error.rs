use thiserror::Error;

use crate::graph::VertexId;

/// Recoverable failures of the graph algorithms.
///
/// Out-of-range vertex indices are not reported here: they are caller bugs
/// and panic at the offending call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Bellman-Ford found an edge that still relaxes after `n - 1` passes,
    /// so a negative-weight cycle is reachable from `start`.
    #[error("negative-weight cycle reachable from vertex {start}")]
    NegativeCycle { start: VertexId },
}
