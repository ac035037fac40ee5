//! Sphere primitive for ray tracing.

use crate::{HitInfo, Material};
use glimmer_math::{Mat4, Ray, Vec3};

/// A sphere primitive defined in local space.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        let radius = radius.max(0.0);
        Self {
            center,
            radius,
            material,
        }
    }

    /// Get the material of this sphere.
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersect a world-space ray against this sphere.
    ///
    /// The local center is moved into world space through `world`; the
    /// radius is not scaled. Solves the quadratic for the ray/sphere
    /// intersection and keeps only the nearer root - a sphere behind the
    /// ray origin (t < 0) is a miss, with no fallback to the far root.
    pub fn intersect(&self, ray: &Ray, world: Mat4) -> Option<HitInfo<'_>> {
        let center = world.transform_point3(self.center);

        let oc = ray.origin() - center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if t < 0.0 {
            return None;
        }

        let point = ray.at(t);
        let normal = (point - center) / self.radius;

        Some(HitInfo {
            t,
            point,
            normal,
            color: self.material.color,
            material: &self.material,
        })
    }
}
