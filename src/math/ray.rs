use glam::{Mat4, Vec3};

/// A ray in world or local space.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Maps the ray through `transform`. Rigid transforms keep `t` values
    /// comparable because the direction is not renormalized.
    pub fn transformed(&self, transform: &Mat4) -> Self {
        Self {
            origin: transform.transform_point3(self.origin),
            dir: transform.transform_vector3(self.dir),
        }
    }

    /// Slab test against an axis-aligned box. Returns the nearest positive
    /// hit distance, or the exit distance when the origin is inside.
    pub fn intersect_aabb(&self, box_min: Vec3, box_max: Vec3) -> Option<f32> {
        const EPSILON: f32 = 1e-8;

        // Inverse direction with near-zero components clamped so the slab
        // division never produces NaN
        let inv_dir = Vec3::new(
            if self.dir.x.abs() < EPSILON { 1.0 / EPSILON.copysign(self.dir.x) } else { 1.0 / self.dir.x },
            if self.dir.y.abs() < EPSILON { 1.0 / EPSILON.copysign(self.dir.y) } else { 1.0 / self.dir.y },
            if self.dir.z.abs() < EPSILON { 1.0 / EPSILON.copysign(self.dir.z) } else { 1.0 / self.dir.z },
        );

        let t_min = (box_min - self.origin) * inv_dir;
        let t_max = (box_max - self.origin) * inv_dir;

        let t1 = t_min.min(t_max);
        let t2 = t_min.max(t_max);

        let t_near = t1.x.max(t1.y).max(t1.z);
        let t_far = t2.x.min(t2.y).min(t2.z);

        if t_near > t_far || t_far < 0.0 {
            return None;
        }

        if t_near < 0.0 {
            (t_far > 1e-3).then_some(t_far)
        } else {
            Some(t_near)
        }
    }
}
