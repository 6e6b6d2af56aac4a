use std::time::Duration;
use tarmac::anyhow::bail;
use tarmac::anyhow::Result;
use tarmac::glam::Vec2;
use tarmac::glam::Vec4;
use tarmac::log::info;
use tarmac::utils::color::Vec4Color;
use tarmac::utils::settings::SettingsStorage;

pub const SETTINGS_PATH: &str = "getaway.cfg";

pub const SETTINGS_PLAYER_SPEED: &str = "player_speed";
pub const SETTINGS_PLAYER_TURN_RATE: &str = "player_turn_rate";
pub const SETTINGS_PLAYER_WIDTH: &str = "player_width";
pub const SETTINGS_PLAYER_HEIGHT: &str = "player_height";
pub const SETTINGS_PLAYER_COLOR: &str = "player_color";
pub const SETTINGS_PURSUER_SPEED: &str = "pursuer_speed";
pub const SETTINGS_PURSUER_WIDTH: &str = "pursuer_width";
pub const SETTINGS_PURSUER_HEIGHT: &str = "pursuer_height";
pub const SETTINGS_PURSUER_COLOR: &str = "pursuer_color";
pub const SETTINGS_WINDOW_COLOR: &str = "window_color";
pub const SETTINGS_SPAWN_INTERVAL: &str = "spawn_interval_ms";
pub const SETTINGS_SPAWN_DISTANCE: &str = "spawn_distance";
pub const SETTINGS_CULL_DISTANCE: &str = "cull_distance";
pub const SETTINGS_CAMERA_SMOOTHING: &str = "camera_smoothing";

const PLAYER_COLOR: &str = "#0000ff";
const PURSUER_COLOR: &str = "#ff0000";
const WINDOW_COLOR: &str = "#000000";

#[derive(Clone, Debug, PartialEq)]
pub struct VehicleConfig {
    pub speed: f32,
    pub size: Vec2,
    pub color: Vec4,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub player: VehicleConfig,
    pub player_turn_rate: f32,
    pub pursuer: VehicleConfig,
    pub window_color: Vec4,
    pub spawn_interval: Duration,
    pub spawn_distance: f32,
    pub cull_distance: f32,
    pub camera_smoothing: f32,
}

impl GameConfig {
    /// Reads the configuration from `settings`, storing the defaults of every missing key first.
    pub fn load(settings: &mut SettingsStorage) -> Result<Self> {
        let defaults = Self::default();
        let spawn_interval = settings.set(SETTINGS_SPAWN_INTERVAL, defaults.spawn_interval.as_millis() as u64, false)?;

        let config = Self {
            player: VehicleConfig {
                speed: settings.set(SETTINGS_PLAYER_SPEED, defaults.player.speed, false)?,
                size: Vec2::new(
                    settings.set(SETTINGS_PLAYER_WIDTH, defaults.player.size.x, false)?,
                    settings.set(SETTINGS_PLAYER_HEIGHT, defaults.player.size.y, false)?,
                ),
                color: Vec4::from_hex(&settings.set(SETTINGS_PLAYER_COLOR, PLAYER_COLOR.to_string(), false)?)?,
            },
            player_turn_rate: settings.set(SETTINGS_PLAYER_TURN_RATE, defaults.player_turn_rate, false)?,
            pursuer: VehicleConfig {
                speed: settings.set(SETTINGS_PURSUER_SPEED, defaults.pursuer.speed, false)?,
                size: Vec2::new(
                    settings.set(SETTINGS_PURSUER_WIDTH, defaults.pursuer.size.x, false)?,
                    settings.set(SETTINGS_PURSUER_HEIGHT, defaults.pursuer.size.y, false)?,
                ),
                color: Vec4::from_hex(&settings.set(SETTINGS_PURSUER_COLOR, PURSUER_COLOR.to_string(), false)?)?,
            },
            window_color: Vec4::from_hex(&settings.set(SETTINGS_WINDOW_COLOR, WINDOW_COLOR.to_string(), false)?)?,
            spawn_interval: Duration::from_millis(spawn_interval),
            spawn_distance: settings.set(SETTINGS_SPAWN_DISTANCE, defaults.spawn_distance, false)?,
            cull_distance: settings.set(SETTINGS_CULL_DISTANCE, defaults.cull_distance, false)?,
            camera_smoothing: settings.set(SETTINGS_CAMERA_SMOOTHING, defaults.camera_smoothing, false)?,
        };

        config.validate()?;
        info!("Configuration loaded ({} settings)", settings.keys()?.len());

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, vehicle) in [("player", &self.player), ("pursuer", &self.pursuer)] {
            if !vehicle.speed.is_finite() || vehicle.speed < 0.0 {
                bail!("Invalid {} speed {}", name, vehicle.speed);
            }

            if !(vehicle.size.x > 0.0 && vehicle.size.y > 0.0 && vehicle.size.is_finite()) {
                bail!("Invalid {} size {}", name, vehicle.size);
            }
        }

        if !self.player_turn_rate.is_finite() {
            bail!("Invalid player turn rate {}", self.player_turn_rate);
        }

        if self.spawn_interval.is_zero() {
            bail!("Spawn interval must be positive");
        }

        if !(self.spawn_distance > 0.0 && self.spawn_distance.is_finite()) {
            bail!("Invalid spawn distance {}", self.spawn_distance);
        }

        // Pursuers spawned beyond the cull distance would be removed in the same frame
        if !(self.cull_distance >= self.spawn_distance && self.cull_distance.is_finite()) {
            bail!("Cull distance {} is smaller than spawn distance {}", self.cull_distance, self.spawn_distance);
        }

        if !(self.camera_smoothing > 0.0 && self.camera_smoothing < 1.0) {
            bail!("Camera smoothing {} is outside of (0, 1)", self.camera_smoothing);
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: VehicleConfig { speed: 4.0, size: Vec2::new(50.0, 100.0), color: Vec4::new_rgb(0, 0, 255, 255) },
            player_turn_rate: 3.0,
            pursuer: VehicleConfig { speed: 5.0, size: Vec2::new(50.0, 100.0), color: Vec4::new_rgb(255, 0, 0, 255) },
            window_color: Vec4::new_rgb(0, 0, 0, 255),
            spawn_interval: Duration::from_millis(2000),
            spawn_distance: 800.0,
            cull_distance: 1000.0,
            camera_smoothing: 0.05,
        }
    }
}
