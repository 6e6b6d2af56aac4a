use crate::config::GameConfig;

pub mod game;

#[derive(Default)]
pub struct GlobalData {
    pub config: GameConfig,
}
