//! Quad-coordinate color encoding.

use nalgebra::distance;
use tracing::debug;

use crate::collect::collect_corner_ranges;
use crate::error::{RebuildError, RebuildResult};
use crate::mesh::{QuadCoord, WireframeMesh};

/// Per-corner base vectors, in corner order within a triangle.
const CORNER_BASES: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]];

/// Which edge of a triangle is its longest.
///
/// For a right-triangle half of a rectangle the longest edge is the
/// hypotenuse, which is the quad's internal diagonal; the classification
/// picks the triangle-wide offset added to every corner's base vector so the
/// shader can tell the diagonal apart from the perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongestEdge {
    /// The edge between corners 0 and 1.
    Edge01,
    /// The edge between corners 1 and 2.
    Edge12,
    /// The edge between corners 2 and 0. Also the catch-all when no edge is
    /// strictly longest.
    Edge20,
}

impl LongestEdge {
    /// Classify a triangle by its edge lengths.
    ///
    /// The branch structure is deliberate and must not be reordered: an edge
    /// wins only by being *strictly* longer than both others, and every tie
    /// falls through to [`Edge20`](Self::Edge20). This bias is inherited
    /// behavior that downstream shaders depend on, not a principled tie
    /// rule.
    #[must_use]
    pub fn classify(d1: f64, d2: f64, d3: f64) -> Self {
        if d1 > d2 && d1 > d3 {
            Self::Edge01
        } else if d2 > d3 && d2 > d1 {
            Self::Edge12
        } else {
            Self::Edge20
        }
    }

    /// The triangle-wide offset added to every corner's base vector.
    #[must_use]
    pub const fn offset(self) -> [f32; 3] {
        match self {
            Self::Edge01 => [0.0, 1.0, 0.0],
            Self::Edge12 => [1.0, 0.0, 0.0],
            Self::Edge20 => [0.0, 0.0, 1.0],
        }
    }

    /// The quad-coordinate code for one corner (0, 1, or 2) of a triangle
    /// with this classification.
    ///
    /// # Panics
    ///
    /// Panics if `corner` is greater than 2.
    #[must_use]
    pub fn corner_code(self, corner: usize) -> QuadCoord {
        let base = CORNER_BASES[corner];
        let offset = self.offset();
        QuadCoord::new(base[0] + offset[0], base[1] + offset[1], base[2] + offset[2])
    }
}

/// Assign every vertex its quad-coordinate code.
///
/// Walks triangles submesh by submesh, classifies each triangle's longest
/// edge, and writes the three corner codes at the corners' *absolute*
/// positions in the unshared buffer. Each submesh is classified from its own
/// edge lengths, independent of every other submesh, and no corner is ever
/// written twice. The resulting color buffer covers the vertex buffer
/// exactly.
///
/// Each triangle's computation is independent of every other triangle's, so
/// the loop could be sharded across threads with workers writing disjoint
/// ranges; meshes of ordinary size don't warrant it and the implementation
/// stays single-threaded.
///
/// # Errors
///
/// Returns [`RebuildError::SharedVertices`] if the mesh has not been
/// unshared (per-corner codes need exclusive vertex slots), or a validation
/// error if the mesh or its submesh table is malformed. The mesh is
/// untouched on error.
///
/// # Example
///
/// ```
/// use mesh_wireframe::{encode_quad_coords, unit_quad, unshare_vertices};
///
/// let mesh = &mut unit_quad();
/// unshare_vertices(mesh)?;
/// encode_quad_coords(mesh)?;
///
/// assert_eq!(mesh.colors.len(), mesh.vertex_count());
/// # Ok::<(), mesh_wireframe::RebuildError>(())
/// ```
pub fn encode_quad_coords(mesh: &mut WireframeMesh) -> RebuildResult<()> {
    mesh.validate()?;
    if !mesh.is_unshared() {
        return Err(RebuildError::SharedVertices {
            vertex_count: mesh.positions.len(),
            corner_count: mesh.indices.len(),
        });
    }

    let ranges = collect_corner_ranges(&mesh.submeshes, mesh.indices.len())?;
    let mut colors = vec![QuadCoord::default(); mesh.positions.len()];

    for range in &ranges {
        for [c0, c1, c2] in range.triangles() {
            let p0 = &mesh.positions[c0];
            let p1 = &mesh.positions[c1];
            let p2 = &mesh.positions[c2];

            let d1 = distance(p0, p1);
            let d2 = distance(p1, p2);
            let d3 = distance(p2, p0);

            let longest = LongestEdge::classify(d1, d2, d3);
            colors[c0] = longest.corner_code(0);
            colors[c1] = longest.corner_code(1);
            colors[c2] = longest.corner_code(2);
        }
    }

    mesh.colors = colors;

    debug!(
        "Encoded quad coordinates for {} corners across {} submeshes",
        mesh.colors.len(),
        ranges.len()
    );

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::mesh::unit_quad;
    use crate::unshare::unshare_vertices;

    #[test]
    fn classify_strictly_longest_edges() {
        assert_eq!(LongestEdge::classify(2.0, 1.0, 1.0), LongestEdge::Edge01);
        assert_eq!(LongestEdge::classify(1.0, 2.0, 1.0), LongestEdge::Edge12);
        assert_eq!(LongestEdge::classify(1.0, 1.0, 2.0), LongestEdge::Edge20);
    }

    #[test]
    fn classify_ties_fall_to_third_branch() {
        // Equilateral: all edges tie
        assert_eq!(LongestEdge::classify(1.0, 1.0, 1.0), LongestEdge::Edge20);
        // Two-way ties involving the would-be winner
        assert_eq!(LongestEdge::classify(2.0, 2.0, 1.0), LongestEdge::Edge20);
        assert_eq!(LongestEdge::classify(2.0, 1.0, 2.0), LongestEdge::Edge20);
        assert_eq!(LongestEdge::classify(1.0, 2.0, 2.0), LongestEdge::Edge20);
    }

    #[test]
    fn corner_codes_shift_bases_by_offset() {
        let longest = LongestEdge::Edge12; // offset (1,0,0)
        assert_eq!(longest.corner_code(0), QuadCoord::new(2.0, 0.0, 0.0));
        assert_eq!(longest.corner_code(1), QuadCoord::new(1.0, 0.0, 1.0));
        assert_eq!(longest.corner_code(2), QuadCoord::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn encode_requires_unshared_mesh() {
        let mesh = &mut unit_quad();
        let result = encode_quad_coords(mesh);
        assert!(matches!(
            result,
            Err(RebuildError::SharedVertices {
                vertex_count: 4,
                corner_count: 6
            })
        ));
        assert!(mesh.colors.is_empty());
    }

    #[test]
    fn encode_covers_every_corner() {
        let mesh = &mut unit_quad();
        unshare_vertices(mesh).unwrap();
        encode_quad_coords(mesh).unwrap();

        assert_eq!(mesh.colors.len(), 6);
        for code in &mesh.colors {
            // A default (unwritten) code has zero channel sum; every written
            // code sums to exactly 2
            let sum = code.r + code.g + code.b;
            assert_eq!(sum, 2.0);
        }
    }

    #[test]
    fn encode_unit_quad_diagonal() {
        let mesh = &mut unit_quad();
        unshare_vertices(mesh).unwrap();
        encode_quad_coords(mesh).unwrap();

        // First triangle (0,0)-(1,0)-(1,1): the 2-0 edge is the diagonal
        assert_eq!(mesh.colors[0], QuadCoord::new(1.0, 0.0, 1.0));
        assert_eq!(mesh.colors[1], QuadCoord::new(0.0, 0.0, 2.0));
        assert_eq!(mesh.colors[2], QuadCoord::new(0.0, 1.0, 1.0));

        // Second triangle (0,0)-(1,1)-(0,1): the 0-1 edge is the diagonal
        assert_eq!(mesh.colors[3], QuadCoord::new(1.0, 1.0, 0.0));
        assert_eq!(mesh.colors[4], QuadCoord::new(0.0, 1.0, 1.0));
        assert_eq!(mesh.colors[5], QuadCoord::new(0.0, 2.0, 0.0));
    }
}
