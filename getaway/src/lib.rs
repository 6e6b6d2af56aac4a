pub mod collision;
pub mod config;
pub mod input;
pub mod player;
pub mod pursuer;
pub mod render;
pub mod scenes;
pub mod session;
pub mod spawner;
