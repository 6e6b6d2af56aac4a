#![allow(clippy::new_without_default)]

pub mod app;
pub mod filesystem;
pub mod renderer;
pub mod scene;
pub mod utils;
pub mod window;

pub use anyhow;
pub use colors_transform;
pub use fastrand;
pub use glam;
pub use instant;
pub use log;
pub use rustc_hash;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_export]
macro_rules! error_return {
    ($($arg:tt)+) => { { $crate::log::error!($($arg)+); return; } };
}

#[macro_export]
macro_rules! error_continue {
    ($($arg:tt)+) => { { $crate::log::error!($($arg)+); continue; } };
}
