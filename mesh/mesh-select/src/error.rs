//! Error types for selection operations.

use thiserror::Error;

/// Result type for selection operations.
pub type SelectResult<T> = Result<T, SelectError>;

/// Errors that can occur during selection operations.
///
/// An empty mesh or an empty selection is never an error; every
/// operation treats those as valid no-op inputs.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectError {
    /// A border-dependent operation ran under the fail-fast topology
    /// policy with no valid cached topology.
    #[error("face topology required but not available (cache empty or invalidated)")]
    TopologyMissing,

    /// A live face references a vertex index outside the vertex array.
    #[error("invalid vertex index {index} (mesh has {vertex_count} vertices)")]
    InvalidVertexIndex {
        /// The out-of-range index.
        index: u32,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },
}
