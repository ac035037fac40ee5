//! Hit record for ray-object intersection.

use crate::Material;
use glimmer_math::Vec3;

/// Record of a ray-object intersection.
///
/// Created fresh per intersection test and discarded after one shading
/// evaluation. `material` borrows from the primitive that produced the hit,
/// which is how shading reads surface properties back after the closest hit
/// has been selected.
#[derive(Clone, Copy)]
pub struct HitInfo<'a> {
    /// Ray parameter where the intersection occurs, in direction-vector units
    pub t: f32,
    /// Point of intersection in world space
    pub point: Vec3,
    /// Surface normal at the intersection point
    pub normal: Vec3,
    /// Surface reflectance at the intersection point
    pub color: Vec3,
    /// Material of the primitive that was hit
    pub material: &'a Material,
}
