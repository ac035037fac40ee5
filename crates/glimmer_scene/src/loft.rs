//! Lofted mesh generation.
//!
//! Builds a triangulated surface by stacking transformed copies of a closed
//! profile polygon (one copy per row) and stitching adjacent rows together
//! with a wrap-around quad strip. A circle profile with per-row scales and
//! translations gives a surface of revolution such as a vase.

use glimmer_math::{Mat4, Vec3};
use thiserror::Error;

/// Errors from lofted mesh generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoftError {
    #[error("row count mismatch: {scales} scale factors vs {offsets} offsets")]
    RowMismatch { scales: usize, offsets: usize },
    #[error("profile curve needs at least 3 points, got {0}")]
    DegenerateProfile(usize),
}

/// A generated triangle mesh: vertex positions plus triangle index triples.
///
/// Purely derived data - consumed once to build triangle primitives, never
/// mutated after generation.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions, row-major (row index outer, profile index inner)
    pub positions: Vec<Vec3>,
    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Extract triangle vertices as [v0, v1, v2] triplets.
    ///
    /// Index triples that fall outside the vertex list are logged and
    /// skipped, so a malformed mesh yields fewer triangles rather than a
    /// panic.
    pub fn triangles(&self) -> Vec<[Vec3; 3]> {
        let mut triangles = Vec::with_capacity(self.triangle_count());

        for chunk in self.indices.chunks(3) {
            if chunk.len() < 3 {
                continue;
            }

            let i0 = chunk[0] as usize;
            let i1 = chunk[1] as usize;
            let i2 = chunk[2] as usize;

            if i0 >= self.positions.len()
                || i1 >= self.positions.len()
                || i2 >= self.positions.len()
            {
                log::warn!(
                    "Invalid triangle indices: [{}, {}, {}], vertex count: {}",
                    i0,
                    i1,
                    i2,
                    self.positions.len()
                );
                continue;
            }

            triangles.push([self.positions[i0], self.positions[i1], self.positions[i2]]);
        }

        triangles
    }
}

/// Loft a closed profile polygon into a triangle mesh.
///
/// Row `i` is the profile transformed by `translate(offsets[i]) *
/// scale(scales[i])`. Adjacent rows are connected by two triangles per
/// profile edge, with wrap-around on the profile index to close the loop.
/// The loft is open-ended at both extremes; callers wanting closed caps
/// supply degenerate end rows (scale 0).
///
/// For `ns` rows and `cols` profile points the output has `ns * cols`
/// vertices and `2 * (ns - 1) * cols` triangles.
pub fn loft(profile: &[Vec3], scales: &[f32], offsets: &[Vec3]) -> Result<Mesh, LoftError> {
    if profile.len() < 3 {
        return Err(LoftError::DegenerateProfile(profile.len()));
    }
    if scales.len() != offsets.len() {
        return Err(LoftError::RowMismatch {
            scales: scales.len(),
            offsets: offsets.len(),
        });
    }

    let rows = scales.len();
    let cols = profile.len();

    let mut positions = Vec::with_capacity(rows * cols);
    for (scale, offset) in scales.iter().zip(offsets) {
        let transform = Mat4::from_translation(*offset) * Mat4::from_scale(Vec3::splat(*scale));
        for point in profile {
            positions.push(transform.transform_point3(*point));
        }
    }

    let mut indices = Vec::new();
    if rows > 0 {
        indices.reserve(2 * 3 * (rows - 1) * cols);
    }
    for i in 0..rows.saturating_sub(1) {
        for j in 0..cols {
            let a = (i * cols + j) as u32;
            let b = (i * cols + (j + 1) % cols) as u32;
            let c = ((i + 1) * cols + j) as u32;
            let d = ((i + 1) * cols + (j + 1) % cols) as u32;

            indices.extend_from_slice(&[a, b, d]);
            indices.extend_from_slice(&[a, d, c]);
        }
    }

    Ok(Mesh { positions, indices })
}

/// A regular `cols`-sided polygon of unit radius in the XZ plane.
///
/// The usual profile for surfaces of revolution around the Y axis.
pub fn circle_profile(cols: usize) -> Vec<Vec3> {
    (0..cols)
        .map(|j| {
            let angle = std::f32::consts::TAU * j as f32 / cols as f32;
            Vec3::new(angle.cos(), 0.0, angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loft_counts() {
        let profile = circle_profile(8);
        let scales = [1.0, 0.6, 1.2, 0.9];
        let offsets = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
        ];

        let mesh = loft(&profile, &scales, &offsets).unwrap();

        assert_eq!(mesh.vertex_count(), 4 * 8);
        assert_eq!(mesh.triangle_count(), 2 * 3 * 8);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < 4 * 8));
    }

    #[test]
    fn test_loft_applies_row_transforms() {
        let profile = circle_profile(4);
        let scales = [2.0];
        let offsets = [Vec3::new(0.0, 5.0, 0.0)];

        let mesh = loft(&profile, &scales, &offsets).unwrap();

        // First profile point (1, 0, 0) scaled by 2 then lifted to y=5
        assert!((mesh.positions[0] - Vec3::new(2.0, 5.0, 0.0)).length() < 0.001);
        // Single row: no triangles
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_loft_wraps_profile() {
        let profile = circle_profile(3);
        let scales = [1.0, 1.0];
        let offsets = [Vec3::ZERO, Vec3::Y];

        let mesh = loft(&profile, &scales, &offsets).unwrap();

        // Last profile edge (j = 2) wraps back to j = 0
        let last_quad = &mesh.indices[mesh.indices.len() - 6..];
        assert_eq!(last_quad, &[2, 0, 3, 2, 3, 5]);
    }

    #[test]
    fn test_loft_row_mismatch() {
        let profile = circle_profile(4);
        let err = loft(&profile, &[1.0, 1.0], &[Vec3::ZERO]).unwrap_err();
        assert_eq!(
            err,
            LoftError::RowMismatch {
                scales: 2,
                offsets: 1
            }
        );
    }

    #[test]
    fn test_loft_degenerate_profile() {
        let profile = [Vec3::ZERO, Vec3::X];
        let err = loft(&profile, &[1.0], &[Vec3::ZERO]).unwrap_err();
        assert_eq!(err, LoftError::DegenerateProfile(2));
    }

    #[test]
    fn test_triangles_skips_out_of_range_indices() {
        let mesh = Mesh {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            indices: vec![0, 1, 2, 0, 1, 99],
        };

        let triangles = mesh.triangles();
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0], [Vec3::ZERO, Vec3::X, Vec3::Y]);
    }
}
