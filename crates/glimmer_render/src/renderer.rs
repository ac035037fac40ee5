//! Core render loop.
//!
//! Per-pixel stratified supersampling over the recursive tracer, an image
//! buffer for the results, and RGBA8 conversion.

use crate::{trace_ray, Camera};
use glimmer_math::Vec3;
use glimmer_scene::{Color, Group};

/// Render configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Side length of the stratified sub-pixel grid; samples per pixel is
    /// the square of this
    pub sample_grid: u32,
    /// Maximum ray recursion depth
    pub max_depth: u32,
    /// World-space position of the single point light
    pub light: Vec3,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_grid: 2,
            max_depth: 3,
            light: glimmer_scene::cornell::LIGHT_POSITION,
        }
    }
}

/// Render a single pixel by averaging its stratified sub-samples.
pub fn render_pixel(
    camera: &Camera,
    root: &Group,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let grid = config.sample_grid.max(1);
    let mut pixel_color = Color::ZERO;

    for sy in 0..grid {
        for sx in 0..grid {
            let ray = camera.get_ray(x, y, sx, sy, grid);
            pixel_color += trace_ray(&ray, root, config, config.max_depth);
        }
    }

    pixel_color / (grid * grid) as f32
}

/// Convert a color to 8-bit RGBA, alpha always 255.
///
/// Accumulated colors can exceed 1.0 per channel; the float-to-u8 cast
/// saturates, so out-of-range channels clip to 255 (and negatives to 0).
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * color.x) as u8;
    let g = (255.0 * color.y) as u8;
    let b = (255.0 * color.z) as u8;
    [r, g, b, 255]
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer, single threaded.
///
/// For multi-core rendering see [`crate::render_parallel`]; the two produce
/// identical pixels.
pub fn render(camera: &Camera, root: &Group, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    log::debug!(
        "rendering {}x{} @ {} spp, depth {}",
        camera.image_width,
        camera.image_height,
        config.sample_grid * config.sample_grid,
        config.max_depth
    );

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, root, x, y, config);
            image.set(x, y, color);
        }
    }

    image
}
