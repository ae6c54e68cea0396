/// Easing curves for tween interpolation. Timeline legs default to Linear;
/// spins use QuadOut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    SineInOut,
}

impl Easing {
    /// Remaps normalized progress through the curve. Input clamps to [0, 1]
    /// so overshooting deltas rest at the endpoint.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::SineInOut => 0.5 - 0.5 * (std::f32::consts::PI * t).cos(),
        }
    }
}
