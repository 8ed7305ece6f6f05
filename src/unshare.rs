//! Vertex unsharing.

// Corner positions fit in u32 by the same convention as the index buffer
#![allow(clippy::cast_possible_truncation)]

use tracing::debug;

use crate::error::RebuildResult;
use crate::mesh::WireframeMesh;

/// Rewrite the vertex buffer so no vertex is referenced by more than one
/// triangle corner.
///
/// Produces a new vertex buffer with `V'[i] = V[T[i]]` for every corner
/// position `i`, then replaces the index buffer with the identity sequence.
/// Triangle order is preserved, so submesh membership (defined over triangle
/// positions) is unaffected. Any stale color attribute is cleared; colors
/// written against the old vertex layout no longer correspond.
///
/// This grows the vertex buffer from the unique-vertex count to the corner
/// count. That is the point: sharing is what prevents per-corner attributes
/// from varying between triangles.
///
/// Applying this to an already-unshared mesh is the identity.
///
/// # Errors
///
/// Returns a [`RebuildError`](crate::RebuildError) if the mesh fails
/// [`validate`](WireframeMesh::validate); the mesh is untouched on error.
///
/// # Example
///
/// ```
/// use mesh_wireframe::{unit_quad, unshare_vertices};
///
/// let mesh = &mut unit_quad();
/// unshare_vertices(mesh)?;
///
/// assert!(mesh.is_unshared());
/// assert_eq!(mesh.vertex_count(), 6);
/// # Ok::<(), mesh_wireframe::RebuildError>(())
/// ```
pub fn unshare_vertices(mesh: &mut WireframeMesh) -> RebuildResult<()> {
    mesh.validate()?;

    let shared_count = mesh.positions.len();

    let unshared: Vec<_> = mesh
        .indices
        .iter()
        .map(|&index| mesh.positions[index as usize])
        .collect();
    mesh.positions = unshared;

    for (slot, index) in mesh.indices.iter_mut().enumerate() {
        *index = slot as u32;
    }

    mesh.colors.clear();

    debug!(
        "Unshared mesh: {} vertices -> {} corners across {} submeshes",
        shared_count,
        mesh.positions.len(),
        mesh.submeshes.len()
    );

    Ok(())
}
