//! Error types for quad data rebuild operations.

use thiserror::Error;

/// Errors that can occur while rebuilding quad wireframe data.
///
/// Every variant is a precondition violation on the input mesh. The rebuild
/// has no recoverable-error taxonomy and no partial-failure mode: malformed
/// input is rejected before any buffer is touched.
#[derive(Debug, Error)]
pub enum RebuildError {
    /// Mesh has no vertices.
    #[error("Mesh has no vertices")]
    EmptyMesh,

    /// Mesh has no triangle indices.
    #[error("Mesh has no triangle indices")]
    NoIndices,

    /// Index buffer length is not a multiple of 3.
    #[error("Index count {count} is not a multiple of 3")]
    IndexCountNotTriangles {
        /// Length of the index buffer.
        count: usize,
    },

    /// A triangle index references a vertex past the end of the buffer.
    #[error("Index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending index value.
        index: u32,
        /// Length of the vertex buffer.
        vertex_count: usize,
    },

    /// A submesh range extends past the end of the index buffer.
    #[error(
        "Submesh {submesh} range ({start}..{start}+{index_count}) exceeds index buffer of length {buffer_len}"
    )]
    SubmeshOutOfBounds {
        /// Position of the submesh in the table.
        submesh: usize,
        /// First index owned by the submesh.
        start: usize,
        /// Number of indices owned.
        index_count: usize,
        /// Length of the index buffer.
        buffer_len: usize,
    },

    /// A submesh owns an index count that is not a multiple of 3.
    #[error("Submesh {submesh} owns {count} indices, not a multiple of 3")]
    SubmeshNotTriangles {
        /// Position of the submesh in the table.
        submesh: usize,
        /// Number of indices owned.
        count: usize,
    },

    /// The submesh ranges do not tile the index buffer exactly once each,
    /// in order, with no gaps or overlaps.
    #[error("Submesh ranges cover {covered} of {index_count} indices (must tile exactly)")]
    SubmeshesDoNotTile {
        /// Indices covered when the mismatch was detected.
        covered: usize,
        /// Length of the index buffer.
        index_count: usize,
    },

    /// The mesh still shares vertices between corners; encoding requires an
    /// unshared mesh so each corner can carry its own code.
    #[error(
        "Mesh has {vertex_count} vertices for {corner_count} corners; unshare before encoding"
    )]
    SharedVertices {
        /// Length of the vertex buffer.
        vertex_count: usize,
        /// Length of the index buffer.
        corner_count: usize,
    },
}

/// Result type for rebuild operations.
pub type RebuildResult<T> = std::result::Result<T, RebuildError>;
