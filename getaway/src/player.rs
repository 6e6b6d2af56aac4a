use crate::config::GameConfig;
use crate::input::SteerIntent;
use tarmac::glam::Vec2;
use tarmac::utils::math::F32MathUtils;
use tarmac::utils::math::Vec2MathUtils;

/// The thief. Always moves forward, the heading (in degrees) accumulates without wrapping.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub heading: f32,
    pub speed: f32,
    pub turn_rate: f32,
    pub size: Vec2,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self { position: Vec2::ZERO, heading: 0.0, speed: config.player.speed, turn_rate: config.player_turn_rate, size: config.player.size }
    }

    pub fn update(&mut self, intent: SteerIntent) {
        self.heading += self.turn_rate * intent.turn_direction();
        self.position += self.heading_radians().to_heading_vector() * self.speed;
    }

    pub fn heading_radians(&self) -> f32 {
        self.heading.to_radians()
    }

    pub fn collision_radius(&self) -> f32 {
        self.size.half_diagonal()
    }
}
