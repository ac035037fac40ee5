//! Triangle primitive for ray tracing.
//!
//! Plane intersection followed by a barycentric inside test. The returned
//! normal is always oriented against the incoming ray so shading sees a
//! front-facing surface.

use crate::{HitInfo, Material};
use glimmer_math::{Mat4, Ray, Vec3};

/// A ray whose direction is closer than this to the triangle plane is
/// treated as parallel (no hit).
pub const RAY_PARALLEL_EPS: f32 = 1e-6;

/// Barycentric denominators below this magnitude mark a degenerate
/// (zero-area) triangle.
pub const BARY_DENOM_EPS: f32 = 1e-10;

/// Near clip for the plane parameter. Rejecting hits closer than this keeps
/// shadow, reflection and refraction rays from re-hitting their own surface.
pub const HIT_T_MIN: f32 = 0.001;

/// A triangle primitive defined by three local-space vertices.
///
/// Counter-clockwise winding defines the geometric front side, but the
/// reported normal is flipped as needed to face the incoming ray.
pub struct Triangle {
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        Self {
            v0,
            v1,
            v2,
            material,
        }
    }

    /// Get the material of this triangle.
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersect a world-space ray against this triangle.
    pub fn intersect(&self, ray: &Ray, world: Mat4) -> Option<HitInfo<'_>> {
        let v0 = world.transform_point3(self.v0);
        let v1 = world.transform_point3(self.v1);
        let v2 = world.transform_point3(self.v2);

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let normal = edge1.cross(edge2).normalize();

        // Ray parallel to the triangle plane
        let n_dot_dir = normal.dot(ray.direction());
        if n_dot_dir.abs() < RAY_PARALLEL_EPS {
            return None;
        }

        // Plane equation: N . (X - v0) = 0
        let s = normal.dot(v0 - ray.origin()) / n_dot_dir;
        if s < HIT_T_MIN {
            return None;
        }

        let point = ray.at(s);

        // Barycentric coordinates of the hit point relative to (v0, v1, v2)
        let p = point - v0;
        let d00 = edge1.dot(edge1);
        let d01 = edge1.dot(edge2);
        let d11 = edge2.dot(edge2);
        let d20 = p.dot(edge1);
        let d21 = p.dot(edge2);

        let denom = d00 * d11 - d01 * d01;
        if denom.abs() < BARY_DENOM_EPS {
            return None;
        }

        let beta = (d11 * d20 - d01 * d21) / denom;
        let gamma = (d00 * d21 - d01 * d20) / denom;
        let alpha = 1.0 - beta - gamma;

        if alpha < 0.0 || beta < 0.0 || gamma < 0.0 {
            return None;
        }

        // Orient the normal against the incoming ray
        let normal = if n_dot_dir > 0.0 { -normal } else { normal };

        Some(HitInfo {
            t: s,
            point,
            normal,
            color: self.material.color,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Material::diffuse(Color::splat(0.5)),
        )
    }

    #[test]
    fn test_triangle_hit_inside() {
        let tri = unit_triangle();

        let ray = Ray::new(Vec3::new(0.25, 0.25, -1.0), Vec3::Z);
        let hit = tri.intersect(&ray, Mat4::IDENTITY).expect("should hit");

        assert!((hit.t - 1.0).abs() < 0.001);
        assert!((hit.point - Vec3::new(0.25, 0.25, 0.0)).length() < 0.001);
    }

    #[test]
    fn test_triangle_miss_outside() {
        let tri = unit_triangle();

        // Hit point (2, 2, 0) lies outside the triangle
        let ray = Ray::new(Vec3::new(2.0, 2.0, -1.0), Vec3::Z);
        assert!(tri.intersect(&ray, Mat4::IDENTITY).is_none());
    }

    #[test]
    fn test_triangle_miss_parallel() {
        let tri = unit_triangle();

        // Direction lies in the triangle plane
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::X);
        assert!(tri.intersect(&ray, Mat4::IDENTITY).is_none());
    }

    #[test]
    fn test_triangle_miss_behind() {
        let tri = unit_triangle();

        // Triangle behind the ray origin
        let ray = Ray::new(Vec3::new(0.25, 0.25, 1.0), Vec3::Z);
        assert!(tri.intersect(&ray, Mat4::IDENTITY).is_none());
    }

    #[test]
    fn test_triangle_degenerate_is_miss() {
        // Zero-area triangle: all vertices collinear
        let tri = Triangle::new(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Material::default(),
        );

        let ray = Ray::new(Vec3::new(0.5, 0.0, -1.0), Vec3::Z);
        assert!(tri.intersect(&ray, Mat4::IDENTITY).is_none());
    }

    #[test]
    fn test_triangle_normal_faces_ray() {
        let tri = unit_triangle();

        // Approach from both sides; the reported normal must always point
        // against the ray direction
        for dir in [Vec3::Z, -Vec3::Z] {
            let ray = Ray::new(Vec3::new(0.25, 0.25, 0.0) - dir, dir);
            let hit = tri.intersect(&ray, Mat4::IDENTITY).expect("should hit");
            assert!(hit.normal.dot(dir) <= 0.0);
        }
    }

    #[test]
    fn test_triangle_world_transform() {
        let tri = unit_triangle();
        let world = Mat4::from_translation(Vec3::new(0.0, 0.0, 5.0));

        let ray = Ray::new(Vec3::new(0.25, 0.25, 0.0), Vec3::Z);
        let hit = tri.intersect(&ray, world).expect("should hit");

        assert!((hit.t - 5.0).abs() < 0.001);
    }
}
