//! Whitted-style recursive shading.
//!
//! Local shading with a single point light and a binary shadow test, plus
//! recursive reflection and refraction contributions bounded by a fixed
//! depth. The depth bound is the only termination guarantee, so every
//! recursive call must decrement it.

use crate::renderer::RenderConfig;
use glimmer_math::{Mat4, Ray, Vec3};
use glimmer_scene::{Color, Group};

/// Offset along the surface normal (or refracted direction) applied to
/// secondary ray origins so they do not immediately re-hit their surface.
pub const SURFACE_BIAS: f32 = 0.01;

/// Flat factor applied to the surface color when the point is in shadow.
pub const SHADOW_AMBIENT: f32 = 0.2;

/// Ambient floor of the lit diffuse term.
pub const AMBIENT_FLOOR: f32 = 0.3;

/// Weight of the Lambertian diffuse term on top of the ambient floor.
pub const DIFFUSE_SCALE: f32 = 0.7;

/// Mirror-reflect `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract `incident` through a surface with the given refraction index.
///
/// The sign of `incident . normal` decides whether the ray is entering or
/// exiting the medium; on exit the normal is negated and the index pair
/// swapped. Returns `None` on total internal reflection - not an error,
/// just no transmitted ray.
pub fn refract(incident: Vec3, normal: Vec3, refraction_index: f32) -> Option<Vec3> {
    let l = incident.normalize();
    let mut n = normal.normalize();

    let mut cosi = l.dot(n);
    let (ni, nr);
    if cosi < 0.0 {
        // Entering the medium
        ni = 1.0;
        nr = refraction_index;
        cosi = -cosi;
    } else {
        // Exiting the medium
        ni = refraction_index;
        nr = 1.0;
        n = -n;
    }

    let eta = ni / nr;
    let cos2r = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if cos2r < 0.0 {
        // Total internal reflection
        return None;
    }

    let cosr = cos2r.sqrt();
    Some((l * eta + n * (eta * cosi - cosr)).normalize())
}

/// Compute the color seen by a ray.
///
/// Intersects the scene from the identity root transform, shades the
/// closest hit against the configured point light, then recurses for the
/// reflection and refraction contributions with `depth - 1`. Returns black
/// when the depth counter runs out or nothing is hit.
///
/// Both recursive contributions are blended additively the way the
/// reference renderer does: reflection adds `reflectivity * reflected` on
/// top of the local color, and refraction adds `color * (1 - k) +
/// refracted * k` on top of the already-assigned color. Channels can
/// exceed 1.0; conversion to bytes saturates.
pub fn trace_ray(ray: &Ray, root: &Group, config: &RenderConfig, depth: u32) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(hit) = root.intersect(ray, Mat4::IDENTITY) else {
        return Color::ZERO;
    };

    // Hard shadow test: anything strictly between the point and the light
    // drops the surface to flat ambient
    let to_light = config.light - hit.point;
    let light_distance = to_light.length();
    let light_dir = to_light / light_distance;

    let shadow_ray = Ray::new(hit.point + hit.normal * SURFACE_BIAS, light_dir);
    let occluded = root
        .intersect(&shadow_ray, Mat4::IDENTITY)
        .is_some_and(|occluder| occluder.t < light_distance);

    let mut color = if occluded {
        hit.color * SHADOW_AMBIENT
    } else {
        let diffuse = hit.normal.dot(light_dir).max(0.0);
        hit.color * (AMBIENT_FLOOR + DIFFUSE_SCALE * diffuse)
    };

    if hit.material.reflectivity > 0.0 {
        let reflected_dir = reflect(ray.direction(), hit.normal);
        let reflected_ray = Ray::new(hit.point + hit.normal * SURFACE_BIAS, reflected_dir);
        let reflected = trace_ray(&reflected_ray, root, config, depth - 1);
        color += reflected * hit.material.reflectivity;
    }

    if hit.material.transparency > 0.0 {
        if let Some(refracted_dir) = refract(ray.direction(), hit.normal, hit.material.refraction_index) {
            let refracted_ray = Ray::new(hit.point + refracted_dir * SURFACE_BIAS, refracted_dir);
            let refracted = trace_ray(&refracted_ray, root, config, depth - 1);

            let k = hit.material.transparency;
            color += color * (1.0 - k) + refracted * k;
        }
        // Total internal reflection: the local/reflected color stands
    }

    color
}
