use anyhow::bail;
use anyhow::Result;
use glam::Vec2;

/// Camera following a target with exponential smoothing. The position is the world point shown in
/// the middle of the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    pub size: Vec2,

    smoothing: f32,
}

impl Camera {
    pub fn new(position: Vec2, size: Vec2, smoothing: f32) -> Result<Self> {
        if !(smoothing > 0.0 && smoothing < 1.0) {
            bail!("Camera smoothing factor {} is outside of (0, 1)", smoothing);
        }

        Ok(Self { position, size, smoothing })
    }

    /// Moves the camera a `smoothing` fraction of the way to `target`.
    pub fn follow(&mut self, target: Vec2) {
        self.position += (target - self.position) * self.smoothing;
    }

    pub fn from_world_to_screen_coordinates(&self, position: Vec2) -> Vec2 {
        position - self.position + self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_log::test;

    #[test]
    fn rejects_smoothing_outside_open_interval() {
        for smoothing in [0.0, 1.0, -0.5, 1.5, f32::NAN] {
            assert!(Camera::new(Vec2::ZERO, Vec2::ZERO, smoothing).is_err(), "{} accepted", smoothing);
        }

        assert!(Camera::new(Vec2::ZERO, Vec2::ZERO, 0.05).is_ok());
    }

    #[test]
    fn follow_blends_towards_target() {
        let mut camera = Camera::new(Vec2::new(10.0, -20.0), Vec2::new(800.0, 600.0), 0.25).unwrap();
        camera.follow(Vec2::new(50.0, 20.0));

        assert_relative_eq!(camera.position.x, 20.0);
        assert_relative_eq!(camera.position.y, -10.0);
    }

    #[test]
    fn follow_never_overshoots_and_converges() {
        let target = Vec2::new(-300.0, 450.0);
        let mut camera = Camera::new(Vec2::ZERO, Vec2::new(800.0, 600.0), 0.05).unwrap();
        let mut last_distance = camera.position.distance(target);

        for _ in 0..1000 {
            camera.follow(target);

            let distance = camera.position.distance(target);
            assert!(distance <= last_distance);
            assert!(camera.position.x >= target.x && camera.position.y <= target.y);

            last_distance = distance;
        }

        assert!(last_distance < 0.01);
    }

    #[test]
    fn world_to_screen_is_viewport_centered() {
        let camera = Camera::new(Vec2::new(100.0, 100.0), Vec2::new(800.0, 600.0), 0.05).unwrap();
        let screen = camera.from_world_to_screen_coordinates(Vec2::new(150.0, 50.0));

        assert_eq!(screen, Vec2::new(450.0, 250.0));
        assert_eq!(camera.from_world_to_screen_coordinates(camera.position), Vec2::new(400.0, 300.0));
    }
}
