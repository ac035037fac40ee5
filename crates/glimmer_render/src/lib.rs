//! Glimmer renderer - Whitted-style CPU ray tracing
//!
//! Recursive ray tracing with hard shadows, mirror reflection and
//! refraction over the glimmer_scene graph. Deterministic by construction:
//! the same scene and settings always produce the same pixels.

mod bucket;
mod camera;
mod renderer;
mod tracer;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::Camera;
pub use renderer::{color_to_rgba, render, render_pixel, ImageBuffer, RenderConfig};
pub use tracer::{
    reflect, refract, trace_ray, AMBIENT_FLOOR, DIFFUSE_SCALE, SHADOW_AMBIENT, SURFACE_BIAS,
};

/// Re-export common scene and math types
pub use glimmer_math::{Mat4, Ray, Vec3};
pub use glimmer_scene::{Color, Group, Material};
