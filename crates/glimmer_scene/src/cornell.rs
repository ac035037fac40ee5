//! Reference Cornell-room scene.
//!
//! A five-walled enclosure (the front stays open toward the camera) holding
//! a mirror sphere, a glass box, and a lofted vase. Scene authoring is not
//! part of the traced core, but the reference scene makes the repo runnable
//! and anchors the end-to-end tests.

use crate::{circle_profile, loft, Color, Group, Material, Sphere, Triangle, Vec3};
use glimmer_math::Mat4;

/// World-space position of the single point light.
pub const LIGHT_POSITION: Vec3 = Vec3::new(0.0, 2.8, 0.0);

/// Fixed eye position; the camera always looks down +Z.
pub const EYE_POSITION: Vec3 = Vec3::new(0.0, 0.0, -4.0);

/// View-plane width in world units for the reference framing.
pub const VIEWPORT_WIDTH: f32 = 1.4;

/// Half extent of the room in x and y; the room spans z in [-1, 8].
const ROOM_HALF: f32 = 3.0;
const ROOM_NEAR: f32 = -1.0;
const ROOM_FAR: f32 = 8.0;

/// Add a quad as two triangles spanning (a, b, c, d) in winding order.
fn add_quad(group: &mut Group, a: Vec3, b: Vec3, c: Vec3, d: Vec3, material: Material) {
    group.add(Triangle::new(a, b, c, material));
    group.add(Triangle::new(a, c, d, material));
}

/// Build the five walls of the room, with no interior objects.
///
/// Used on its own by the deterministic low-resolution render test.
pub fn reference_room() -> Group {
    let mut room = Group::default();

    let white = Material::diffuse(Color::new(0.9, 0.9, 0.9));
    let red = Material::diffuse(Color::new(0.9, 0.2, 0.2));
    let green = Material::diffuse(Color::new(0.2, 0.9, 0.2));

    let h = ROOM_HALF;

    // Floor
    add_quad(
        &mut room,
        Vec3::new(-h, -h, ROOM_NEAR),
        Vec3::new(h, -h, ROOM_NEAR),
        Vec3::new(h, -h, ROOM_FAR),
        Vec3::new(-h, -h, ROOM_FAR),
        white,
    );
    // Ceiling
    add_quad(
        &mut room,
        Vec3::new(-h, h, ROOM_NEAR),
        Vec3::new(-h, h, ROOM_FAR),
        Vec3::new(h, h, ROOM_FAR),
        Vec3::new(h, h, ROOM_NEAR),
        white,
    );
    // Back wall
    add_quad(
        &mut room,
        Vec3::new(-h, -h, ROOM_FAR),
        Vec3::new(h, -h, ROOM_FAR),
        Vec3::new(h, h, ROOM_FAR),
        Vec3::new(-h, h, ROOM_FAR),
        white,
    );
    // Left wall (red)
    add_quad(
        &mut room,
        Vec3::new(-h, -h, ROOM_NEAR),
        Vec3::new(-h, -h, ROOM_FAR),
        Vec3::new(-h, h, ROOM_FAR),
        Vec3::new(-h, h, ROOM_NEAR),
        red,
    );
    // Right wall (green)
    add_quad(
        &mut room,
        Vec3::new(h, -h, ROOM_NEAR),
        Vec3::new(h, h, ROOM_NEAR),
        Vec3::new(h, h, ROOM_FAR),
        Vec3::new(h, -h, ROOM_FAR),
        green,
    );

    room
}

/// Build a unit cube centered at the origin out of twelve triangles.
fn cube(material: Material) -> Group {
    let mut solid = Group::default();
    let h = 0.5;

    let corners = |z: f32| {
        [
            Vec3::new(-h, -h, z),
            Vec3::new(h, -h, z),
            Vec3::new(h, h, z),
            Vec3::new(-h, h, z),
        ]
    };
    let [a0, b0, c0, d0] = corners(-h);
    let [a1, b1, c1, d1] = corners(h);

    add_quad(&mut solid, a0, b0, c0, d0, material); // front
    add_quad(&mut solid, b1, a1, d1, c1, material); // back
    add_quad(&mut solid, a1, a0, d0, d1, material); // left
    add_quad(&mut solid, b0, b1, c1, c0, material); // right
    add_quad(&mut solid, d0, c0, c1, d1, material); // top
    add_quad(&mut solid, a1, b1, b0, a0, material); // bottom

    solid
}

/// Build a lofted vase mesh as a group of triangles.
fn vase(material: Material) -> Group {
    let profile = circle_profile(12);
    let scales = [0.0, 0.5, 0.7, 0.5, 0.3, 0.45, 0.0];
    let offsets: Vec<Vec3> = [0.0, 0.0, 0.5, 1.0, 1.3, 1.6, 1.6]
        .iter()
        .map(|&y| Vec3::new(0.0, y, 0.0))
        .collect();

    let mut group = Group::default();
    match loft(&profile, &scales, &offsets) {
        Ok(mesh) => group.add_mesh(&mesh, material),
        // The reference rows are well-formed; an error here means the
        // constants above were edited inconsistently.
        Err(err) => log::warn!("vase loft failed, leaving it out: {err}"),
    }
    group
}

/// Build the full reference scene: room, mirror sphere, glass box, vase.
pub fn reference_scene() -> Group {
    let mut root = Group::default();

    root.add(reference_room());

    root.add(Sphere::new(
        Vec3::new(-1.4, -2.0, 5.5),
        1.0,
        Material::diffuse(Color::new(0.9, 0.9, 0.2)).with_reflectivity(0.8),
    ));

    let glass_box = cube(Material::transparent(Color::new(0.7, 0.8, 0.9), 0.8, 1.5));
    let mut box_holder = Group::new(
        Mat4::from_translation(Vec3::new(1.5, -2.4, 4.0))
            * Mat4::from_rotation_y(0.5)
            * Mat4::from_scale(Vec3::splat(1.2)),
    );
    box_holder.add(glass_box);
    root.add(box_holder);

    let mut vase_holder = Group::new(Mat4::from_translation(Vec3::new(0.0, -3.0, 6.0)));
    vase_holder.add(vase(Material::diffuse(Color::new(0.3, 0.4, 0.85))));
    root.add(vase_holder);

    root
}
