//! Render the reference Cornell-room scene to a PNG.

use glimmer_render::{render_parallel, Camera, RenderConfig};
use glimmer_scene::cornell;

fn main() {
    env_logger::init();

    let scene = cornell::reference_scene();

    let camera = Camera::new(cornell::EYE_POSITION, cornell::VIEWPORT_WIDTH, 640, 480);
    let config = RenderConfig::default();

    println!(
        "Rendering {}x{} @ {} spp, depth {}...",
        camera.image_width,
        camera.image_height,
        config.sample_grid * config.sample_grid,
        config.max_depth
    );

    let start = std::time::Instant::now();
    let frame = render_parallel(&camera, &scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "cornell.png";
    image::save_buffer(
        filename,
        &frame.to_rgba(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
    )
    .expect("Failed to save image");
    println!("Saved to {}", filename);
}
