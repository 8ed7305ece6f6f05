//! Full rebuild pipeline.

use tracing::debug;

use crate::encode::encode_quad_coords;
use crate::error::RebuildResult;
use crate::mesh::WireframeMesh;
use crate::result::RebuildStats;
use crate::unshare::unshare_vertices;

/// Rebuild a mesh's quad wireframe data in place.
///
/// The explicit rebuild entry point the host calls whenever it decides
/// geometry changed. Runs the two stages in strict sequence (the encoder
/// depends on the unshared vertex layout): unshare the vertex buffer, then
/// assign every corner its quad-coordinate code. There is no incremental
/// path; the attribute is recomputed in full every time.
///
/// Rebuilding an already-rebuilt mesh is the identity on every buffer, so
/// the call is idempotent and safe to trigger redundantly.
///
/// # Errors
///
/// Returns a [`RebuildError`](crate::RebuildError) if the mesh fails
/// validation; the mesh is untouched on error. Validation happens before the
/// first buffer write, so there is no partial-failure state: either every
/// buffer is rebuilt and mutually consistent, or none is.
///
/// # Examples
///
/// ```
/// use mesh_wireframe::{rebuild_quad_data, unit_quad};
///
/// let mesh = &mut unit_quad();
/// let stats = rebuild_quad_data(mesh)?;
///
/// assert_eq!(stats.original_vertices, 4);
/// assert_eq!(stats.final_vertices, 6);
/// assert!(mesh.is_unshared());
/// assert_eq!(mesh.colors.len(), 6);
/// # Ok::<(), mesh_wireframe::RebuildError>(())
/// ```
pub fn rebuild_quad_data(mesh: &mut WireframeMesh) -> RebuildResult<RebuildStats> {
    let original_vertices = mesh.positions.len();

    unshare_vertices(mesh)?;
    encode_quad_coords(mesh)?;

    let stats = RebuildStats {
        original_vertices,
        final_vertices: mesh.positions.len(),
        triangles: mesh.triangle_count(),
        submeshes: mesh.submeshes.len(),
    };

    debug!("{stats}");

    Ok(stats)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::mesh::unit_quad;

    #[test]
    fn rebuild_runs_both_stages() {
        let mesh = &mut unit_quad();
        let stats = rebuild_quad_data(mesh).unwrap();

        assert!(mesh.is_unshared());
        assert_eq!(mesh.colors.len(), mesh.vertex_count());
        assert_eq!(stats.triangles, 2);
        assert_eq!(stats.submeshes, 1);
        assert!(stats.duplicated_vertices());
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mesh = &mut unit_quad();
        rebuild_quad_data(mesh).unwrap();
        let once = mesh.clone();

        let stats = rebuild_quad_data(mesh).unwrap();
        assert_eq!(mesh.positions, once.positions);
        assert_eq!(mesh.indices, once.indices);
        assert_eq!(mesh.colors, once.colors);
        assert!(!stats.duplicated_vertices());
    }

    #[test]
    fn rebuild_rejects_malformed_mesh() {
        let mesh = &mut WireframeMesh::new();
        assert!(rebuild_quad_data(mesh).is_err());
    }
}
