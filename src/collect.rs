//! Submesh corner collection.
//!
//! After unsharing, the triangle-index buffer is the identity, so a corner's
//! absolute position in the vertex buffer equals its position in the index
//! buffer. Collecting a submesh's corners therefore reduces to resolving its
//! range over the index buffer — and validating that the submesh table tiles
//! the buffer exactly. The absolute positions produced here are what the
//! encoder uses as color write indices, so triangles in later submeshes can
//! never clobber codes written for earlier ones.

use crate::error::{RebuildError, RebuildResult};
use crate::mesh::Submesh;

/// The absolute corner positions owned by one submesh.
///
/// Covers `start..start + len` in the unshared vertex buffer, preserving the
/// original triangle order. `len` is always a multiple of 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerRange {
    /// Absolute position of the submesh's first corner.
    pub start: usize,

    /// Number of corners owned.
    pub len: usize,
}

impl CornerRange {
    /// Iterate over the submesh's triangles as absolute corner triples.
    pub fn triangles(self) -> impl Iterator<Item = [usize; 3]> {
        (self.start..self.start + self.len)
            .step_by(3)
            .map(|base| [base, base + 1, base + 2])
    }
}

/// Resolve each submesh to its absolute corner range, validating that the
/// ranges tile the index buffer exactly.
///
/// Ranges must appear in buffer order, each starting where the previous one
/// ended, each triangle-aligned, and together covering every index exactly
/// once.
///
/// # Errors
///
/// Returns [`RebuildError::SubmeshesDoNotTile`] on a gap, overlap, or
/// missing coverage, [`RebuildError::SubmeshOutOfBounds`] when a range
/// extends past the buffer, and [`RebuildError::SubmeshNotTriangles`] when a
/// range length is not a multiple of 3.
pub fn collect_corner_ranges(
    submeshes: &[Submesh],
    index_count: usize,
) -> RebuildResult<Vec<CornerRange>> {
    let mut ranges = Vec::with_capacity(submeshes.len());
    let mut cursor = 0usize;

    for (position, submesh) in submeshes.iter().enumerate() {
        if submesh.start != cursor {
            return Err(RebuildError::SubmeshesDoNotTile {
                covered: cursor,
                index_count,
            });
        }
        if submesh.index_count % 3 != 0 {
            return Err(RebuildError::SubmeshNotTriangles {
                submesh: position,
                count: submesh.index_count,
            });
        }
        let end = submesh.start + submesh.index_count;
        if end > index_count {
            return Err(RebuildError::SubmeshOutOfBounds {
                submesh: position,
                start: submesh.start,
                index_count: submesh.index_count,
                buffer_len: index_count,
            });
        }

        ranges.push(CornerRange {
            start: submesh.start,
            len: submesh.index_count,
        });
        cursor = end;
    }

    if cursor != index_count {
        return Err(RebuildError::SubmeshesDoNotTile {
            covered: cursor,
            index_count,
        });
    }

    Ok(ranges)
}
