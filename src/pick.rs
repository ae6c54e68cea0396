use std::f32::consts::PI;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::anim::{Axis, Spin};
use crate::camera::Camera;
use crate::scene::SceneNode;

/// Maps a window-space pointer position to normalized device coordinates.
/// Pixel y grows downward, NDC y grows upward, so the y axis flips.
pub fn pointer_to_ndc(pointer: Vec2, width: u32, height: u32) -> Vec2 {
    let width = width.max(1) as f32;
    let height = height.max(1) as f32;
    Vec2::new(
        pointer.x / width * 2.0 - 1.0,
        1.0 - pointer.y / height * 2.0,
    )
}

/// Turns pointer clicks into spins. A click is raycast against the node;
/// a hit draws a random axis and target angle, a miss does nothing.
#[derive(Debug)]
pub struct PickDispatcher {
    rng: StdRng,
}

impl PickDispatcher {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic dispatcher for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Raycasts `ndc` through the camera at the node. Returns the spin to
    /// start on a hit, `None` on a miss. The random stream only advances on
    /// hits, so misses never perturb later draws.
    pub fn click(&mut self, ndc: Vec2, camera: &Camera, node: &SceneNode) -> Option<Spin> {
        let ray = camera.screen_ray(ndc);
        node.intersect_ray(&ray)?;
        Some(self.random_spin())
    }

    /// Draws a uniform axis and a uniform angle in [-pi, pi].
    pub fn random_spin(&mut self) -> Spin {
        let axis = Axis::ALL[self.rng.random_range(0..Axis::ALL.len())];
        let angle = self.rng.random_range(-PI..=PI);
        Spin { axis, angle }
    }
}

impl Default for PickDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::math::Color;
    use crate::scene::CubeGeometry;
    use crate::shading::ShadingModel;
    use glam::Vec3;

    fn test_scene() -> (Camera, SceneNode) {
        let camera = Camera::new(Vec3::new(10.0, 10.0, 10.0), Vec3::ZERO, 75.0, 1.0, 0.1, 1000.0);
        let material = Material::new(
            ShadingModel::Blend,
            Color::new(1.0, 1.0, 0.0),
            Color::new(1.0, 0.412, 0.706),
            false,
        )
        .unwrap();
        let node = SceneNode::new(CubeGeometry::new(1.0).unwrap(), material);
        (camera, node)
    }

    #[test]
    fn pointer_maps_to_ndc_with_y_flip() {
        let ndc = pointer_to_ndc(Vec2::new(0.0, 0.0), 800, 600);
        assert_eq!(ndc, Vec2::new(-1.0, 1.0), "top-left is (-1, 1)");

        let ndc = pointer_to_ndc(Vec2::new(800.0, 600.0), 800, 600);
        assert_eq!(ndc, Vec2::new(1.0, -1.0), "bottom-right is (1, -1)");

        let ndc = pointer_to_ndc(Vec2::new(400.0, 300.0), 800, 600);
        assert!(ndc.length() < 1e-6, "center is the origin, got {ndc:?}");
    }

    #[test]
    fn center_click_hits_cube_at_origin() {
        let (camera, node) = test_scene();
        let mut dispatcher = PickDispatcher::with_seed(7);

        let spin = dispatcher.click(Vec2::ZERO, &camera, &node);
        assert!(spin.is_some(), "camera looks at the cube, center must hit");
    }

    #[test]
    fn off_screen_click_misses() {
        let (camera, node) = test_scene();
        let mut dispatcher = PickDispatcher::with_seed(7);

        let spin = dispatcher.click(Vec2::new(0.95, 0.95), &camera, &node);
        assert!(spin.is_none(), "corner ray passes far from the unit cube");
    }

    #[test]
    fn angles_stay_in_signed_pi_range() {
        let mut dispatcher = PickDispatcher::with_seed(42);
        for _ in 0..200 {
            let spin = dispatcher.random_spin();
            assert!(
                (-PI..=PI).contains(&spin.angle),
                "angle {} out of range",
                spin.angle
            );
        }
    }

    #[test]
    fn seeded_dispatchers_agree() {
        let mut a = PickDispatcher::with_seed(99);
        let mut b = PickDispatcher::with_seed(99);
        for _ in 0..20 {
            let sa = a.random_spin();
            let sb = b.random_spin();
            assert_eq!(sa.axis, sb.axis);
            assert_eq!(sa.angle, sb.angle);
        }
    }
}
