//! Flat surface materials.

use glimmer_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Surface properties read back after an intersection.
///
/// `color` is the diffuse reflectance, `reflectivity` and `transparency`
/// weight the recursive mirror and refraction contributions, and
/// `refraction_index` is the relative index used by Snell's law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    /// Mirror reflection weight, 0.0 = matte, 1.0 = perfect mirror
    pub reflectivity: f32,
    /// Refraction weight, 0.0 = opaque, 1.0 = fully transmissive
    pub transparency: f32,
    /// Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub refraction_index: f32,
}

impl Material {
    /// Create a matte diffuse material.
    pub fn diffuse(color: Color) -> Self {
        Self {
            color,
            reflectivity: 0.0,
            transparency: 0.0,
            refraction_index: 1.0,
        }
    }

    /// Create a mirror-like material.
    pub fn reflective(color: Color, reflectivity: f32) -> Self {
        Self {
            color,
            reflectivity: reflectivity.clamp(0.0, 1.0),
            transparency: 0.0,
            refraction_index: 1.0,
        }
    }

    /// Create a transparent refracting material.
    pub fn transparent(color: Color, transparency: f32, refraction_index: f32) -> Self {
        Self {
            color,
            reflectivity: 0.0,
            transparency: transparency.clamp(0.0, 1.0),
            refraction_index: refraction_index.max(f32::MIN_POSITIVE),
        }
    }

    /// Set the mirror reflection weight.
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity.clamp(0.0, 1.0);
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::new(0.5, 0.5, 0.5)) // Grey default
    }
}
