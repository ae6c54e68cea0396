use glam::{Vec2, Vec3};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::camera::Camera;

const ORBIT_SENSITIVITY: f32 = 0.008;
const ZOOM_STEP: f32 = 0.9;
const MIN_RADIUS: f32 = 2.0;
const MAX_RADIUS: f32 = 80.0;
// Just shy of straight up/down
const MAX_PITCH: f32 = 1.54;

/// Left-drag orbits the camera around its target, the wheel dollies in and
/// out. Angles accumulate here and are written back to the camera once per
/// tick via `apply`.
#[derive(Debug)]
pub struct OrbitController {
    yaw: f32,
    pitch: f32,
    radius: f32,
    dragging: bool,
    last_cursor: Option<Vec2>,
    disposed: bool,
}

impl OrbitController {
    /// Picks up the camera's current pose so the first drag does not jump.
    pub fn from_camera(camera: &Camera) -> Self {
        let offset = camera.position - camera.target;
        let radius = offset.length().clamp(MIN_RADIUS, MAX_RADIUS);
        Self {
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / offset.length()).asin(),
            radius,
            dragging: false,
            last_cursor: None,
            disposed: false,
        }
    }

    pub fn process_event(&mut self, event: &WindowEvent) {
        if self.disposed {
            return;
        }
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.begin_drag(),
                ElementState::Released => self.end_drag(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.drag_to(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
                };
                self.zoom(steps);
            }
            _ => {}
        }
    }

    fn begin_drag(&mut self) {
        self.dragging = true;
        self.last_cursor = None;
    }

    fn end_drag(&mut self) {
        self.dragging = false;
        self.last_cursor = None;
    }

    fn drag_to(&mut self, cursor: Vec2) {
        if !self.dragging {
            return;
        }
        if let Some(last) = self.last_cursor {
            let delta = cursor - last;
            self.yaw -= delta.x * ORBIT_SENSITIVITY;
            self.pitch = (self.pitch + delta.y * ORBIT_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
        }
        self.last_cursor = Some(cursor);
    }

    fn zoom(&mut self, steps: f32) {
        self.radius = (self.radius * ZOOM_STEP.powf(steps)).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    /// Writes the orbit pose back into the camera.
    pub fn apply(&self, camera: &mut Camera) {
        if self.disposed {
            return;
        }
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        camera.position = camera.target
            + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.radius;
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
        self.dragging = false;
        self.last_cursor = None;
    }
}
