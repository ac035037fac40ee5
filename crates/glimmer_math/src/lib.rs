// Re-export glam for convenience
pub use glam::*;

// Glimmer math types
mod ray;
pub use ray::Ray;
