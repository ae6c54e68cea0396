use anyhow::{Context, Result};
use glam::{Vec2, Vec3};

use crate::anim::{Animator, Easing, Spin, Timeline};
use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::lifecycle::{FrameScheduler, ResourceRegistry, ResourceTag};
use crate::material::Material;
use crate::pick::{pointer_to_ndc, PickDispatcher};
use crate::scene::{CubeGeometry, Scene, SceneNode};

/// Owns the scene graph, the animator, and the pick dispatcher, and tracks
/// every acquired resource. Mount builds in dependency order; unmount
/// releases in reverse and is safe to call any number of times.
pub struct SceneHost {
    scene: Scene,
    camera: Camera,
    animator: Animator,
    dispatcher: PickDispatcher,
    registry: ResourceRegistry,
    frames: FrameScheduler,
    node_index: usize,
    elapsed: f32,
    disposed: bool,
}

impl SceneHost {
    pub fn mount(config: &SceneConfig) -> Result<Self> {
        Self::mount_with_dispatcher(config, PickDispatcher::new())
    }

    /// Deterministic variant for tests.
    pub fn mount_seeded(config: &SceneConfig, seed: u64) -> Result<Self> {
        Self::mount_with_dispatcher(config, PickDispatcher::with_seed(seed))
    }

    fn mount_with_dispatcher(config: &SceneConfig, dispatcher: PickDispatcher) -> Result<Self> {
        let mut registry = ResourceRegistry::new();

        let mut scene = Scene::new(config.background_color()?, config.fog_settings()?);
        registry.acquire(ResourceTag::Scene);

        let camera = Camera::new(
            Vec3::from(config.camera.position),
            Vec3::from(config.camera.target),
            config.camera.fov_y_degrees,
            1.0,
            config.camera.near,
            config.camera.far,
        );
        registry.acquire(ResourceTag::Camera);

        let material = Material::new(
            config.shading,
            config.color_a()?,
            config.color_b()?,
            scene.fog.is_some(),
        )
        .context("assembling the node material")?;
        registry.acquire(ResourceTag::Material);

        let geometry = CubeGeometry::new(config.cube_side)?;
        registry.acquire(ResourceTag::Geometry);

        let node_index = scene.add_node(SceneNode::new(geometry, material));
        registry.acquire(ResourceTag::Node);

        registry.acquire(ResourceTag::ClickListener);

        let timeline = Timeline::looping_path(
            Vec3::ZERO,
            &config.path.corners,
            config.path.cycle_seconds,
            Easing::Linear,
        );
        let animator = Animator::new(timeline, config.spin_seconds);
        registry.acquire(ResourceTag::Timeline);

        registry.acquire(ResourceTag::RenderLoop);

        Ok(Self {
            scene,
            camera,
            animator,
            dispatcher,
            registry,
            frames: FrameScheduler::new(),
            node_index,
            elapsed: 0.0,
            disposed: false,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The animated node, while mounted.
    pub fn node(&self) -> Option<&SceneNode> {
        self.scene.node(self.node_index)
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Asks for one tick. Requests while one is already pending coalesce;
    /// requests after unmount are refused.
    pub fn schedule_frame(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        if self.frames.request() {
            self.registry.acquire(ResourceTag::FrameRequest);
            true
        } else {
            false
        }
    }

    /// Consumes the pending frame request. False means no work this tick,
    /// which is how a request cancelled by unmount falls through.
    pub fn begin_tick(&mut self) -> bool {
        if self.frames.begin_tick() {
            self.registry.release(ResourceTag::FrameRequest);
            true
        } else {
            false
        }
    }

    /// Advances animation time by `delta` seconds and refreshes the
    /// material's time uniform when its shader actually reads it.
    pub fn advance(&mut self, delta: f32) {
        if self.disposed {
            return;
        }
        self.elapsed += delta;
        if let Some(node) = self.scene.node_mut(self.node_index) {
            self.animator.advance(delta, node);
            if node.material().declares("time") {
                node.material_mut().set_time(self.elapsed);
            }
        }
    }

    /// Routes a click at `pointer` (window pixels) through the pick
    /// dispatcher. Returns the spin that was started, if the cube was hit.
    pub fn pointer_click(&mut self, pointer: Vec2, width: u32, height: u32) -> Option<Spin> {
        if self.disposed || !self.registry.is_live(ResourceTag::ClickListener) {
            return None;
        }
        let ndc = pointer_to_ndc(pointer, width, height);
        let node = self.scene.node(self.node_index)?;
        let rotation = node.rotation;
        let spin = self.dispatcher.click(ndc, &self.camera, node)?;
        self.animator.start_spin(spin, rotation);
        Some(spin)
    }

    /// Tears everything down in reverse acquisition order. Idempotent.
    pub fn unmount(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        self.frames.cancel();
        self.registry.release(ResourceTag::FrameRequest);

        self.registry.release(ResourceTag::RenderLoop);

        self.animator.dispose();
        self.registry.release(ResourceTag::Timeline);

        self.registry.release(ResourceTag::ClickListener);

        self.scene.remove_node(self.node_index);
        self.registry.release(ResourceTag::Node);
        self.registry.release(ResourceTag::Geometry);
        self.registry.release(ResourceTag::Material);

        self.registry.release(ResourceTag::Camera);
        self.registry.release(ResourceTag::Scene);
    }
}

impl Drop for SceneHost {
    fn drop(&mut self) {
        self.unmount();
    }
}
