use glam::Vec3;

use super::easing::Easing;

/// Values a tween can drive.
pub trait Lerp: Copy {
    fn lerp_between(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp_between(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec3 {
    fn lerp_between(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

/// One interpolation leg: value(t) = from + (to - from) * ease(t / duration).
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Lerp> {
    pub from: T,
    pub to: T,
    pub duration: f32,
    pub easing: Easing,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
        }
    }

    /// Value at `elapsed` seconds into the tween, resting at the endpoints.
    pub fn value_at(&self, elapsed: f32) -> T {
        if self.duration <= 0.0 {
            return self.to;
        }
        T::lerp_between(self.from, self.to, self.easing.apply(elapsed / self.duration))
    }
}

/// Rotation axes a spin can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Reads this component of an Euler rotation.
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Writes this component of an Euler rotation.
    pub fn set_component(self, v: &mut Vec3, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
    }
}

/// A one-shot rotation request: target angle on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub axis: Axis,
    pub angle: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_tween_interpolates() {
        let tween = Tween::new(0.0_f32, 10.0, 2.0, Easing::Linear);
        assert_eq!(tween.value_at(0.0), 0.0);
        assert_eq!(tween.value_at(1.0), 5.0);
        assert_eq!(tween.value_at(2.0), 10.0);
    }

    #[test]
    fn tween_rests_at_endpoints_when_overrun() {
        let tween = Tween::new(0.0_f32, 10.0, 2.0, Easing::Linear);
        assert_eq!(tween.value_at(5.0), 10.0);
        assert_eq!(tween.value_at(-1.0), 0.0);
    }

    #[test]
    fn zero_duration_tween_snaps_to_target() {
        let tween = Tween::new(0.0_f32, 3.0, 0.0, Easing::Linear);
        assert_eq!(tween.value_at(0.0), 3.0);
    }

    #[test]
    fn vec3_tween_moves_along_segment() {
        let tween = Tween::new(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), 1.0, Easing::Linear);
        let mid = tween.value_at(0.5);
        assert!((mid - Vec3::new(2.5, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn axis_component_round_trip() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        for axis in Axis::ALL {
            let read = axis.component(v);
            axis.set_component(&mut v, read + 1.0);
            assert_eq!(axis.component(v), read + 1.0);
        }
    }
}
