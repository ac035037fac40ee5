//! Scene representation for the glimmer ray tracer.
//!
//! Primitives (sphere, triangle), the transform-composing scene graph,
//! flat-color materials, and the lofted-mesh generator. The scene graph is
//! built once and is immutable during rendering, so it can be shared
//! read-only across render workers.

mod group;
mod hit;
mod loft;
mod material;
mod sphere;
mod triangle;

pub mod cornell;

pub use group::{Group, Node};
pub use hit::HitInfo;
pub use loft::{circle_profile, loft, LoftError, Mesh};
pub use material::{Color, Material};
pub use sphere::Sphere;
pub use triangle::{Triangle, BARY_DENOM_EPS, HIT_T_MIN, RAY_PARALLEL_EPS};

/// Re-export common math types from glimmer_math
pub use glimmer_math::{Mat4, Ray, Vec3};
