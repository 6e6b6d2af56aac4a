use crate::config::VehicleConfig;
use std::f32::consts;
use tarmac::fastrand::Rng;
use tarmac::glam::Vec2;
use tarmac::glam::Vec4;
use tarmac::utils::math::F32MathUtils;
use tarmac::utils::math::Vec2MathUtils;

/// Police vehicle homing straight at the player's current position.
#[derive(Clone, Debug, PartialEq)]
pub struct Pursuer {
    pub position: Vec2,
    pub speed: f32,
    pub size: Vec2,
    pub color: Vec4,
}

impl Pursuer {
    /// Places a pursuer on the circle of radius `distance` around `origin`, at a uniformly random angle.
    pub fn spawn(origin: Vec2, distance: f32, config: &VehicleConfig, rng: &mut Rng) -> Self {
        Self::new_at_angle(origin, distance, rng.f32() * consts::TAU, config)
    }

    pub fn new_at_angle(origin: Vec2, distance: f32, angle: f32, config: &VehicleConfig) -> Self {
        let offset = Vec2::new(angle.cos(), angle.sin()) * distance;
        Self { position: origin + offset, speed: config.speed, size: config.size, color: config.color }
    }

    pub fn heading(&self, target: Vec2) -> f32 {
        self.position.heading_to(target)
    }

    pub fn update(&mut self, target: Vec2) {
        self.position += self.heading(target).to_heading_vector() * self.speed;
    }

    pub fn collision_radius(&self) -> f32 {
        self.size.half_diagonal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use approx::assert_relative_eq;
    use test_log::test;

    #[test]
    fn spawns_at_angle_on_circle() {
        let config = GameConfig::default();
        let origin = Vec2::new(100.0, 100.0);

        let east = Pursuer::new_at_angle(origin, 800.0, 0.0, &config.pursuer);
        assert_eq!(east.position, Vec2::new(900.0, 100.0));

        let south = Pursuer::new_at_angle(origin, 800.0, consts::FRAC_PI_2, &config.pursuer);
        assert_relative_eq!(south.position.x, 100.0, epsilon = 1e-3);
        assert_relative_eq!(south.position.y, 900.0);
    }

    #[test]
    fn random_spawns_stay_on_circle() {
        let config = GameConfig::default();
        let origin = Vec2::new(-50.0, 25.0);
        let mut rng = Rng::with_seed(7);

        for _ in 0..100 {
            let pursuer = Pursuer::spawn(origin, 800.0, &config.pursuer, &mut rng);

            assert_relative_eq!(pursuer.position.distance(origin), 800.0, epsilon = 1e-2);
            assert_eq!(pursuer.speed, 5.0);
            assert_eq!(pursuer.color, config.pursuer.color);
        }
    }

    #[test]
    fn moves_speed_units_along_heading() {
        let config = GameConfig::default();
        let target = Vec2::new(300.0, -120.0);
        let mut pursuer = Pursuer::new_at_angle(Vec2::ZERO, 0.0, 0.0, &config.pursuer);

        let heading = pursuer.heading(target);
        pursuer.update(target);

        assert_relative_eq!(pursuer.position.length(), 5.0, epsilon = 1e-4);
        assert_relative_eq!(pursuer.position.x, 5.0 * heading.sin(), epsilon = 1e-4);
        assert_relative_eq!(pursuer.position.y, -5.0 * heading.cos(), epsilon = 1e-4);
    }

    #[test]
    fn closes_in_on_level_target() {
        let config = GameConfig::default();
        let target = Vec2::new(500.0, 0.0);
        let mut pursuer = Pursuer::new_at_angle(Vec2::ZERO, 0.0, 0.0, &config.pursuer);

        for _ in 0..10 {
            pursuer.update(target);
        }

        assert_relative_eq!(pursuer.position.x, 50.0, epsilon = 1e-3);
        assert_relative_eq!(pursuer.position.y, 0.0, epsilon = 1e-3);
    }
}
