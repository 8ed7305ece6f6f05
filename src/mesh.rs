//! Mesh buffers and per-vertex quad-coordinate attribute.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collect::collect_corner_ranges;
use crate::error::{RebuildError, RebuildResult};

/// A 3-channel quad-coordinate code assigned per vertex.
///
/// Each code is one of the base vectors (1,0,0), (0,0,1), (0,1,0) shifted by
/// a triangle-wide offset chosen from the longest-edge classification.
/// Channel values are therefore drawn from {0, 1, 2} and must reach the
/// shader unclamped, which is why this is floating point rather than the
/// usual 8-bit color. Opacity is implicit (fully opaque).
///
/// # Example
///
/// ```
/// use mesh_wireframe::QuadCoord;
///
/// let code = QuadCoord::new(2.0, 0.0, 0.0);
/// assert_eq!(code.to_array(), [2.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadCoord {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl QuadCoord {
    /// Create a code from raw channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// The three channels as an array, in RGB order.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Number of nonzero channels in this code.
    ///
    /// A well-formed quad-coordinate code has exactly two nonzero channels,
    /// or one channel equal to 2 when the base vector and the triangle
    /// offset coincide.
    #[must_use]
    pub fn nonzero_channels(self) -> usize {
        self.to_array().iter().filter(|c| **c != 0.0).count()
    }
}

impl From<[f32; 3]> for QuadCoord {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// A contiguous sub-range of the triangle-index buffer.
///
/// Submeshes partition the index buffer: in declaration order their ranges
/// must tile it exactly, each starting where the previous one ended, and
/// each covering a whole number of triangles. Membership is defined over
/// triangle positions, not vertex identity, so unsharing never changes which
/// submesh a triangle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Submesh {
    /// Offset of the first index owned by this submesh.
    pub start: usize,

    /// Number of indices owned (a multiple of 3).
    pub index_count: usize,
}

impl Submesh {
    /// Create a submesh range.
    #[inline]
    #[must_use]
    pub const fn new(start: usize, index_count: usize) -> Self {
        Self { start, index_count }
    }

    /// Number of triangles in this submesh.
    #[inline]
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.index_count / 3
    }
}

/// A triangle mesh laid out for quad wireframe shading.
///
/// Stores plain buffers: vertex positions, a flat triangle-index list (each
/// consecutive triple is one triangle), a submesh partition of that list,
/// and a per-vertex quad-coordinate attribute. The host collaborator is
/// responsible for marshaling these buffers to and from its own rendering
/// representation.
///
/// The `colors` buffer is empty until [`encode_quad_coords`] (or the full
/// [`rebuild_quad_data`] pipeline) runs; afterwards it covers the vertex
/// buffer exactly.
///
/// [`encode_quad_coords`]: crate::encode_quad_coords
/// [`rebuild_quad_data`]: crate::rebuild_quad_data
///
/// # Example
///
/// ```
/// use mesh_wireframe::{Submesh, WireframeMesh};
/// use nalgebra::Point3;
///
/// let mut mesh = WireframeMesh::new();
/// mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.indices.extend([0, 1, 2]);
/// mesh.submeshes.push(Submesh::new(0, 3));
///
/// assert_eq!(mesh.triangle_count(), 1);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WireframeMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,

    /// Flat triangle indices into `positions`. Length is a multiple of 3.
    pub indices: Vec<u32>,

    /// Partition of `indices` into contiguous submesh ranges.
    pub submeshes: Vec<Submesh>,

    /// Per-vertex quad-coordinate attribute. Empty until encoded, then
    /// exactly one entry per vertex.
    pub colors: Vec<QuadCoord>,
}

impl WireframeMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            indices: Vec::new(),
            submeshes: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated buffer capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
            submeshes: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Create a mesh from buffers and a submesh table.
    #[inline]
    #[must_use]
    pub const fn from_parts(
        positions: Vec<Point3<f64>>,
        indices: Vec<u32>,
        submeshes: Vec<Submesh>,
    ) -> Self {
        Self {
            positions,
            indices,
            submeshes,
            colors: Vec::new(),
        }
    }

    /// Create a mesh from raw coordinate and index data, with a single
    /// submesh covering every triangle.
    ///
    /// Returns an empty mesh if `positions.len()` or `indices.len()` is not
    /// divisible by 3.
    ///
    /// # Arguments
    ///
    /// * `positions` - Flat vertex positions `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `indices` - Flat triangle indices `[v0a, v1a, v2a, v0b, ...]`
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_wireframe::WireframeMesh;
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let mesh = WireframeMesh::from_raw(&positions, &[0, 1, 2]);
    ///
    /// assert_eq!(mesh.vertex_count(), 3);
    /// assert_eq!(mesh.submeshes.len(), 1);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let positions = positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();

        Self {
            positions,
            indices: indices.to_vec(),
            submeshes: vec![Submesh::new(0, indices.len())],
            colors: Vec::new(),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangle corners (the index-buffer length).
    #[inline]
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if the mesh has no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Check if the mesh is unshared: one vertex per corner, identity
    /// triangle indices.
    #[must_use]
    pub fn is_unshared(&self) -> bool {
        self.positions.len() == self.indices.len()
            && self
                .indices
                .iter()
                .enumerate()
                .all(|(slot, index)| *index as usize == slot)
    }

    /// Validate the mesh invariants.
    ///
    /// Checks that the buffers are non-empty, the index count is a multiple
    /// of 3, every index is in range of the vertex buffer, and the submesh
    /// table tiles the index buffer exactly with triangle-aligned ranges.
    ///
    /// Malformed input is a contract violation on the caller's side; nothing
    /// in this crate patches it up or guesses at intent.
    ///
    /// # Errors
    ///
    /// Returns the first [`RebuildError`] precondition violation found.
    pub fn validate(&self) -> RebuildResult<()> {
        if self.positions.is_empty() {
            return Err(RebuildError::EmptyMesh);
        }
        if self.indices.is_empty() {
            return Err(RebuildError::NoIndices);
        }
        if self.indices.len() % 3 != 0 {
            return Err(RebuildError::IndexCountNotTriangles {
                count: self.indices.len(),
            });
        }

        let vertex_count = self.positions.len();
        for &index in &self.indices {
            if index as usize >= vertex_count {
                return Err(RebuildError::IndexOutOfRange {
                    index,
                    vertex_count,
                });
            }
        }

        collect_corner_ranges(&self.submeshes, self.indices.len()).map(|_| ())
    }
}

/// Create a unit quad mesh: one submesh, two triangles sharing a diagonal.
///
/// The quad spans (0,0,0) to (1,1,0) and is the smallest mesh exercising
/// both shared-vertex elimination and diagonal classification.
///
/// # Example
///
/// ```
/// use mesh_wireframe::unit_quad;
///
/// let quad = unit_quad();
/// assert_eq!(quad.vertex_count(), 4);
/// assert_eq!(quad.triangle_count(), 2);
/// ```
#[must_use]
pub fn unit_quad() -> WireframeMesh {
    let positions = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    // Diagonal runs between vertices 0 and 2
    let indices = vec![0, 1, 2, 0, 2, 3];
    let submeshes = vec![Submesh::new(0, 6)];

    WireframeMesh::from_parts(positions, indices, submeshes)
}
