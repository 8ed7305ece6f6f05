//! Result types for quad data rebuild operations.

// Buffer counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

/// Statistics from a quad data rebuild.
///
/// The mesh itself is mutated in place by
/// [`rebuild_quad_data`](crate::rebuild_quad_data); this struct only reports
/// what the rebuild did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildStats {
    /// Number of vertices before unsharing.
    pub original_vertices: usize,

    /// Number of vertices after unsharing (equals the corner count).
    pub final_vertices: usize,

    /// Number of triangles processed.
    pub triangles: usize,

    /// Number of submeshes processed.
    pub submeshes: usize,
}

impl RebuildStats {
    /// Vertex buffer growth factor from unsharing.
    #[must_use]
    pub fn vertex_growth(&self) -> f64 {
        if self.original_vertices == 0 {
            1.0
        } else {
            self.final_vertices as f64 / self.original_vertices as f64
        }
    }

    /// Check if unsharing duplicated any vertices.
    #[must_use]
    pub const fn duplicated_vertices(&self) -> bool {
        self.final_vertices > self.original_vertices
    }
}

impl std::fmt::Display for RebuildStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Quad rebuild: {} → {} vertices ({:.1}x), {} triangles in {} submeshes",
            self.original_vertices,
            self.final_vertices,
            self.vertex_growth(),
            self.triangles,
            self.submeshes
        )
    }
}
