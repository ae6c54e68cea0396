use anyhow::{ensure, Result};
use glam::{EulerRot, Mat4, Vec3};

use crate::material::Material;
use crate::math::{Color, Ray};

/// Linear distance fog: fragments fade to `color` between `near` and `far`
/// view-space depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

impl Fog {
    pub fn new(color: Color, near: f32, far: f32) -> Result<Self> {
        ensure!(
            near < far,
            "fog near plane {near} must be closer than far plane {far}"
        );
        Ok(Self { color, near, far })
    }
}

/// Cube centered at the local origin.
#[derive(Debug, Clone, Copy)]
pub struct CubeGeometry {
    side: f32,
}

impl CubeGeometry {
    pub fn new(side: f32) -> Result<Self> {
        ensure!(side > 0.0, "cube side length must be positive, got {side}");
        Ok(Self { side })
    }

    pub fn side(&self) -> f32 {
        self.side
    }

    pub fn local_min(&self) -> Vec3 {
        Vec3::splat(-self.side * 0.5)
    }

    pub fn local_max(&self) -> Vec3 {
        Vec3::splat(self.side * 0.5)
    }
}

/// One renderable object: geometry, material, and pose. The node owns both
/// exclusively; during a tick only the animation scheduler writes the pose.
#[derive(Debug)]
pub struct SceneNode {
    pub position: Vec3,
    /// Euler XYZ angles in radians.
    pub rotation: Vec3,
    geometry: CubeGeometry,
    material: Material,
}

impl SceneNode {
    pub fn new(geometry: CubeGeometry, material: Material) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            geometry,
            material,
        }
    }

    pub fn geometry(&self) -> &CubeGeometry {
        &self.geometry
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }

    /// Nearest hit distance of a world-space ray against the node's oriented
    /// bounds. The ray is mapped into local space so the test stays a cheap
    /// axis-aligned slab check.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let local = ray.transformed(&self.model_matrix().inverse());
        local.intersect_aabb(self.geometry.local_min(), self.geometry.local_max())
    }
}

/// Background color, optional fog, and the node list.
#[derive(Debug)]
pub struct Scene {
    pub background: Color,
    pub fog: Option<Fog>,
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new(background: Color, fog: Option<Fog>) -> Self {
        Self {
            background,
            fog,
            nodes: Vec::new(),
        }
    }

    pub fn add_node(&mut self, node: SceneNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn remove_node(&mut self, index: usize) -> Option<SceneNode> {
        (index < self.nodes.len()).then(|| self.nodes.remove(index))
    }

    pub fn node(&self, index: usize) -> Option<&SceneNode> {
        self.nodes.get(index)
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut SceneNode> {
        self.nodes.get_mut(index)
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
