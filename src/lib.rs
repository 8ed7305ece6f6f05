//! Quad wireframe preprocessing for triangle meshes.
//!
//! This crate prepares a triangulated surface for flat and wireframe shading
//! techniques in which geometry is conceptually composed of quads, each quad
//! split into two triangles. Two stages run in strict sequence over one mesh:
//!
//! - **Vertex unsharing**: duplicates vertex data so every triangle corner
//!   owns its own vertex slot. Shared vertices cannot carry per-corner
//!   attributes, so this trades memory for attribute independence.
//! - **Quad-coordinate encoding**: classifies each triangle's longest edge
//!   (the likely internal diagonal of the originating quad) and writes a
//!   3-channel directional code per corner. A downstream shader uses the
//!   code to draw quad perimeters while suppressing the diagonal seam.
//!
//! The mesh is mutated in place; the crate keeps no state between calls.
//!
//! # Examples
//!
//! ```
//! use mesh_wireframe::{rebuild_quad_data, QuadCoord, WireframeMesh};
//!
//! // A single right triangle; the hypotenuse runs between corners 1 and 2.
//! let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
//! let mesh = &mut WireframeMesh::from_raw(&positions, &[0, 1, 2]);
//!
//! let stats = rebuild_quad_data(mesh)?;
//!
//! assert_eq!(stats.final_vertices, 3);
//! assert_eq!(mesh.colors[0], QuadCoord::new(2.0, 0.0, 0.0));
//! assert_eq!(mesh.colors[1], QuadCoord::new(1.0, 0.0, 1.0));
//! assert_eq!(mesh.colors[2], QuadCoord::new(1.0, 1.0, 0.0));
//! # Ok::<(), mesh_wireframe::RebuildError>(())
//! ```
//!
//! The stages are also exposed individually for callers that only need one:
//!
//! ```
//! use mesh_wireframe::{unit_quad, unshare_vertices};
//!
//! let mesh = &mut unit_quad();
//! assert_eq!(mesh.positions.len(), 4);
//!
//! unshare_vertices(mesh)?;
//!
//! // Two triangles, six corners, six exclusive vertices.
//! assert_eq!(mesh.positions.len(), 6);
//! assert_eq!(mesh.indices, [0, 1, 2, 3, 4, 5]);
//! # Ok::<(), mesh_wireframe::RebuildError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod collect;
mod encode;
mod error;
mod mesh;
mod rebuild;
mod result;
mod unshare;

pub use collect::{collect_corner_ranges, CornerRange};
pub use encode::{encode_quad_coords, LongestEdge};
pub use error::{RebuildError, RebuildResult};
pub use mesh::{unit_quad, QuadCoord, Submesh, WireframeMesh};
pub use rebuild::rebuild_quad_data;
pub use result::RebuildStats;
pub use unshare::unshare_vertices;

// Re-export nalgebra's point type for convenience
pub use nalgebra::Point3;
