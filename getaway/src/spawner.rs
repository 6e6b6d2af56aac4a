use crate::config::GameConfig;
use crate::config::VehicleConfig;
use crate::pursuer::Pursuer;
use tarmac::fastrand::Rng;
use tarmac::glam::Vec2;
use tarmac::instant::Instant;
use tarmac::utils::timer::Interval;

pub struct Spawner {
    pub interval: Interval,
    pub spawn_distance: f32,
    pub cull_distance: f32,
    pub template: VehicleConfig,
}

impl Spawner {
    pub fn new(config: &GameConfig, now: Instant) -> Self {
        Self {
            interval: Interval::new(config.spawn_interval, now),
            spawn_distance: config.spawn_distance,
            cull_distance: config.cull_distance,
            template: config.pursuer.clone(),
        }
    }

    /// Creates one pursuer around `origin` for every spawn period elapsed since the last poll.
    pub fn poll(&mut self, now: Instant, origin: Vec2, rng: &mut Rng) -> Vec<Pursuer> {
        let due = self.interval.poll(now);
        (0..due).map(|_| Pursuer::spawn(origin, self.spawn_distance, &self.template, rng)).collect()
    }

    pub fn is_out_of_range(&self, pursuer: &Pursuer, origin: Vec2) -> bool {
        pursuer.position.distance(origin) > self.cull_distance
    }

    pub fn cancel(&mut self) {
        self.interval.cancel();
    }
}
