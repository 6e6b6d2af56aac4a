use crate::collision;
use crate::config::GameConfig;
use crate::input::SteerIntent;
use crate::player::Player;
use crate::pursuer::Pursuer;
use crate::render;
use crate::render::VehicleSprite;
use crate::spawner::Spawner;
use tarmac::anyhow::Result;
use tarmac::fastrand::Rng;
use tarmac::glam::Vec2;
use tarmac::glam::Vec4;
use tarmac::instant::Instant;
use tarmac::log::debug;
use tarmac::log::info;
use tarmac::renderer::camera::Camera;
use tarmac::renderer::Canvas;
use tarmac::window::InputEvent;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// Returned by the single tick which ended the session.
    Caught { pursuers: usize },
    Stopped,
}

/// Everything a single chase needs. Once stopped, a session never changes again.
pub struct Session {
    pub player: Player,
    pub pursuers: Vec<Pursuer>,
    pub camera: Camera,
    pub intent: SteerIntent,
    pub spawner: Spawner,

    player_color: Vec4,
    window_color: Vec4,
    state: LoopState,
    rng: Rng,
    ticks: u64,
}

impl Session {
    pub fn new(config: &GameConfig, viewport: Vec2, now: Instant, rng: Rng) -> Result<Self> {
        let player = Player::new(config);
        let camera = Camera::new(player.position, viewport, config.camera_smoothing)?;

        Ok(Self {
            player,
            pursuers: Vec::new(),
            camera,
            intent: SteerIntent::default(),
            spawner: Spawner::new(config, now),

            player_color: config.player.color,
            window_color: config.window_color,
            state: LoopState::Running,
            rng,
            ticks: 0,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn set_viewport(&mut self, size: Vec2) {
        self.camera.size = size;
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        self.intent.apply(event, self.camera.size);
    }

    /// Runs one frame: spawn what is due, move and draw everything, drop distant pursuers and check
    /// for a catch.
    pub fn tick<C>(&mut self, canvas: &mut C, now: Instant) -> TickOutcome
    where
        C: Canvas + ?Sized,
    {
        if self.state == LoopState::Stopped {
            return TickOutcome::Stopped;
        }

        let spawned = self.spawner.poll(now, self.player.position, &mut self.rng);
        for pursuer in spawned {
            debug!("Pursuer spawned at {}", pursuer.position);
            self.pursuers.push(pursuer);
        }

        canvas.clear();

        self.player.update(self.intent);
        self.camera.follow(self.player.position);

        let player_sprite = VehicleSprite {
            position: self.player.position,
            rotation: self.player.heading_radians(),
            size: self.player.size,
            color: self.player_color,
            window_color: self.window_color,
        };
        render::draw_vehicle(canvas, &self.camera, &player_sprite);

        let target = self.player.position;
        let mut active = Vec::with_capacity(self.pursuers.len());

        for mut pursuer in self.pursuers.drain(..) {
            pursuer.update(target);

            let sprite = VehicleSprite {
                position: pursuer.position,
                rotation: pursuer.heading(target),
                size: pursuer.size,
                color: pursuer.color,
                window_color: self.window_color,
            };
            render::draw_vehicle(canvas, &self.camera, &sprite);

            if self.spawner.is_out_of_range(&pursuer, target) {
                debug!("Pursuer culled at {}", pursuer.position);
                continue;
            }

            active.push(pursuer);
        }

        self.pursuers = active;
        self.ticks += 1;

        let catches = collision::count_catches(&self.player, &self.pursuers);
        if catches > 0 {
            info!("Player caught by {} pursuer(s) after {} ticks at {}", catches, self.ticks, self.player.position);
            self.stop();

            return TickOutcome::Caught { pursuers: catches };
        }

        TickOutcome::Running
    }

    fn stop(&mut self) {
        self.state = LoopState::Stopped;
        self.spawner.cancel();
    }
}
