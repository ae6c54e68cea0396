mod easing;
mod timeline;
mod tween;

pub use easing::Easing;
pub use timeline::{Timeline, TimelineState};
pub use tween::{Axis, Lerp, Spin, Tween};

use glam::Vec3;

use crate::scene::SceneNode;

/// A spin in flight: a scalar rotation tween bound to one axis.
#[derive(Debug, Clone, Copy)]
struct ActiveSpin {
    axis: Axis,
    tween: Tween<f32>,
    elapsed: f32,
}

/// The single authority for pose writes. The looping timeline drives the
/// node's position; one-shot spins drive rotation axes. Starting a spin on
/// an axis cancels the one already in flight there, so every pose field has
/// exactly one writer per tick.
#[derive(Debug)]
pub struct Animator {
    timeline: Timeline,
    spins: Vec<ActiveSpin>,
    spin_duration: f32,
    spin_easing: Easing,
    disposed: bool,
}

impl Animator {
    pub fn new(timeline: Timeline, spin_duration: f32) -> Self {
        Self {
            timeline,
            spins: Vec::new(),
            spin_duration,
            spin_easing: Easing::QuadOut,
            disposed: false,
        }
    }

    /// Begins a one-shot rotation toward `spin.angle` from the current
    /// rotation, replacing any active spin on the same axis. Last write wins.
    pub fn start_spin(&mut self, spin: Spin, current_rotation: Vec3) {
        if self.disposed {
            return;
        }
        self.spins.retain(|active| active.axis != spin.axis);
        self.spins.push(ActiveSpin {
            axis: spin.axis,
            tween: Tween::new(
                spin.axis.component(current_rotation),
                spin.angle,
                self.spin_duration,
                self.spin_easing,
            ),
            elapsed: 0.0,
        });
    }

    /// Advances every animation by `delta` and commits the resulting pose to
    /// the node. No-op once disposed.
    pub fn advance(&mut self, delta: f32, node: &mut SceneNode) {
        if self.disposed {
            return;
        }

        node.position = self.timeline.advance(delta);

        for spin in &mut self.spins {
            spin.elapsed += delta;
            spin.axis
                .set_component(&mut node.rotation, spin.tween.value_at(spin.elapsed));
        }
        // Finished spins have already committed their final angle this tick
        self.spins.retain(|spin| spin.elapsed < spin.tween.duration);
    }

    pub fn active_spin_count(&self) -> usize {
        self.spins.len()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Cancels the timeline and every spin. Idempotent.
    pub fn dispose(&mut self) {
        self.timeline.dispose();
        self.spins.clear();
        self.disposed = true;
    }
}
