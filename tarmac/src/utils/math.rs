use glam::Vec2;

pub trait F32MathUtils {
    /// Unit vector for a screen heading in radians: 0 points up, positive angles turn clockwise.
    fn to_heading_vector(&self) -> Vec2;
}

pub trait Vec2MathUtils {
    fn half_diagonal(&self) -> f32;
    fn heading_to(&self, target: Vec2) -> f32;
}

impl F32MathUtils for f32 {
    fn to_heading_vector(&self) -> Vec2 {
        Vec2::new(self.sin(), -self.cos())
    }
}

impl Vec2MathUtils for Vec2 {
    fn half_diagonal(&self) -> f32 {
        self.x.hypot(self.y) / 2.0
    }

    /// Heading towards `target` computed as `atan2(dx, dy)`. The argument order is kept as is, the
    /// value is used both for moving and for drawing so the two always agree.
    fn heading_to(&self, target: Vec2) -> f32 {
        (target.x - self.x).atan2(target.y - self.y)
    }
}
