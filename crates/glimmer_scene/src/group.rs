//! Scene graph composition.
//!
//! A `Group` owns an ordered list of child nodes under a local transform.
//! Children are a closed set of variants (sphere, triangle, nested group),
//! so the graph is a strictly owned tree with no shared sub-trees and no
//! possibility of cycles.

use crate::{HitInfo, Material, Mesh, Sphere, Triangle};
use glimmer_math::{Mat4, Ray};

/// A node in the scene graph.
pub enum Node {
    Sphere(Sphere),
    Triangle(Triangle),
    Group(Group),
}

impl Node {
    /// Intersect a world-space ray against this node.
    ///
    /// `world` is the resolved world transform of the parent group.
    pub fn intersect(&self, ray: &Ray, world: Mat4) -> Option<HitInfo<'_>> {
        match self {
            Node::Sphere(sphere) => sphere.intersect(ray, world),
            Node::Triangle(triangle) => triangle.intersect(ray, world),
            Node::Group(group) => group.intersect(ray, world),
        }
    }
}

impl From<Sphere> for Node {
    fn from(sphere: Sphere) -> Self {
        Node::Sphere(sphere)
    }
}

impl From<Triangle> for Node {
    fn from(triangle: Triangle) -> Self {
        Node::Triangle(triangle)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

/// A group of scene nodes under a shared local transform.
///
/// World transform of a node = parent world transform * local transform,
/// composed root-to-leaf at intersection time. Intersection cost is linear
/// in the total primitive count; there is no acceleration structure.
pub struct Group {
    transform: Mat4,
    children: Vec<Node>,
}

impl Group {
    /// Create an empty group with the given local transform.
    pub fn new(transform: Mat4) -> Self {
        Self {
            transform,
            children: Vec::new(),
        }
    }

    /// Get the local transform of this group.
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Add a child node and return it, for chaining during scene construction.
    pub fn add(&mut self, child: impl Into<Node>) -> &mut Node {
        self.children.push(child.into());
        self.children.last_mut().unwrap()
    }

    /// Add one triangle child per face of a generated mesh.
    ///
    /// Faces with out-of-range indices are skipped by `Mesh::triangles`, so
    /// a malformed mesh degrades to fewer triangles instead of failing the
    /// whole scene.
    pub fn add_mesh(&mut self, mesh: &Mesh, material: Material) {
        for [v0, v1, v2] in mesh.triangles() {
            self.add(Triangle::new(v0, v1, v2, material));
        }
    }

    /// Get the number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Find the closest intersection along `ray` across all children.
    ///
    /// `parent_world` is the resolved world transform of the parent
    /// (identity at the root). When two children report exactly equal `t`,
    /// the first one in insertion order wins.
    pub fn intersect(&self, ray: &Ray, parent_world: Mat4) -> Option<HitInfo<'_>> {
        let world = parent_world * self.transform;

        let mut closest: Option<HitInfo<'_>> = None;
        for child in &self.children {
            if let Some(hit) = child.intersect(ray, world) {
                if closest.as_ref().map_or(true, |best| hit.t < best.t) {
                    closest = Some(hit);
                }
            }
        }

        closest
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}
