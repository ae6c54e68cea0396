use glam::Vec3;

use super::easing::Easing;
use super::tween::Tween;

/// Timeline scheduling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineState {
    /// Built but not yet advanced.
    Idle,
    /// Advancing and looping.
    Running,
    /// Torn down; advances are no-ops.
    Disposed,
}

/// Looping positional timeline: consecutive segments traversed in order,
/// wrapping modulo the total duration for an infinite repeat.
#[derive(Debug, Clone)]
pub struct Timeline {
    segments: Vec<Tween<Vec3>>,
    elapsed: f32,
    state: TimelineState,
}

impl Timeline {
    pub fn new(segments: Vec<Tween<Vec3>>) -> Self {
        Self {
            segments,
            elapsed: 0.0,
            state: TimelineState::Idle,
        }
    }

    /// Closed circuit from `start` through `corners` in the XZ plane (y is
    /// held). All legs share `total_duration` equally.
    pub fn looping_path(
        start: Vec3,
        corners: &[[f32; 2]],
        total_duration: f32,
        easing: Easing,
    ) -> Self {
        let leg_duration = total_duration / corners.len().max(1) as f32;
        let mut segments = Vec::with_capacity(corners.len());
        let mut from = start;
        for corner in corners {
            let to = Vec3::new(corner[0], start.y, corner[1]);
            segments.push(Tween::new(from, to, leg_duration, easing));
            from = to;
        }
        Self::new(segments)
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    pub fn total_duration(&self) -> f32 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Advances by `delta` and returns the position on the path. The first
    /// advance moves Idle to Running; a disposed timeline stays put.
    pub fn advance(&mut self, delta: f32) -> Vec3 {
        match self.state {
            TimelineState::Disposed => return self.position_at(self.elapsed),
            TimelineState::Idle => self.state = TimelineState::Running,
            TimelineState::Running => {}
        }

        let total = self.total_duration();
        if total <= 0.0 {
            return self.position_at(0.0);
        }
        self.elapsed = (self.elapsed + delta) % total;
        self.position_at(self.elapsed)
    }

    /// Position at an absolute offset into the cycle.
    pub fn position_at(&self, offset: f32) -> Vec3 {
        let mut remaining = offset;
        for segment in &self.segments {
            if remaining <= segment.duration {
                return segment.value_at(remaining);
            }
            remaining -= segment.duration;
        }
        self.segments.last().map_or(Vec3::ZERO, |s| s.to)
    }

    /// Cancels all pending advancement. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        self.state = TimelineState::Disposed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_corner_timeline() -> Timeline {
        Timeline::looping_path(
            Vec3::ZERO,
            &[[5.0, 0.0], [5.0, 5.0], [0.0, 5.0], [0.0, 0.0]],
            4.0,
            Easing::Linear,
        )
    }

    #[test]
    fn legs_share_the_cycle_equally() {
        let timeline = four_corner_timeline();
        assert!((timeline.total_duration() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn first_advance_starts_the_timeline() {
        let mut timeline = four_corner_timeline();
        assert_eq!(timeline.state(), TimelineState::Idle);
        timeline.advance(0.1);
        assert_eq!(timeline.state(), TimelineState::Running);
    }

    #[test]
    fn one_frame_moves_a_fraction_of_the_leg() {
        let mut timeline = four_corner_timeline();
        let position = timeline.advance(0.016);
        // 16ms of a 1s leg covering 5 units
        assert!((position.x - 0.08).abs() < 1e-5, "got {}", position.x);
        assert_eq!(position.y, 0.0);
        assert_eq!(position.z, 0.0);
    }

    #[test]
    fn corners_are_reached_at_leg_boundaries() {
        let mut timeline = four_corner_timeline();
        assert!((timeline.advance(1.0) - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-5);
        assert!((timeline.advance(1.0) - Vec3::new(5.0, 0.0, 5.0)).length() < 1e-5);
        assert!((timeline.advance(1.0) - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut timeline = four_corner_timeline();
        let position = timeline.advance(4.0);
        assert!(position.length() < 1e-6, "expected origin, got {:?}", position);
    }

    #[test]
    fn cycle_wraps_rather_than_stopping() {
        let mut timeline = four_corner_timeline();
        let position = timeline.advance(4.5);
        // Half a second into the first leg of the second lap
        assert!((position.x - 2.5).abs() < 1e-5);
    }

    #[test]
    fn stepped_cycle_closes_within_tolerance() {
        let mut timeline = four_corner_timeline();
        let mut position = Vec3::ZERO;
        for _ in 0..250 {
            position = timeline.advance(0.016);
        }
        assert!(position.length() < 1e-3, "drifted to {:?}", position);
    }

    #[test]
    fn dispose_freezes_the_timeline() {
        let mut timeline = four_corner_timeline();
        let before = timeline.advance(0.5);
        timeline.dispose();
        let after = timeline.advance(1.0);
        assert_eq!(before, after, "disposed timeline must not move");

        timeline.dispose();
        assert_eq!(timeline.state(), TimelineState::Disposed, "dispose is idempotent");
    }

    #[test]
    fn empty_timeline_rests_at_origin() {
        let mut timeline = Timeline::new(Vec::new());
        assert_eq!(timeline.advance(1.0), Vec3::ZERO);
    }
}
