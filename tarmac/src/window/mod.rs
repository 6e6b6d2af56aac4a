use glam::IVec2;
use glam::Vec2;

#[cfg(native)]
pub mod headless;
#[cfg(native)]
pub type WindowContext = headless::WindowContextHeadless;

#[cfg(web)]
pub mod web;
#[cfg(web)]
pub type WindowContext = web::WindowContextWeb;

pub type Coordinates = IVec2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WindowStyle {
    Window { size: Coordinates },
    Fullscreen,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    WindowSizeChange { size: Coordinates },
    KeyPress { key: Key, repeat: bool },
    KeyRelease { key: Key },
    TouchStart { id: u64, position: Coordinates },
    TouchEnd { id: u64, position: Coordinates },
    WindowClose,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,

    KeyA,
    KeyD,

    #[default]
    Unknown,
}

/// Arrows are matched by their physical `code`, letters by the typed `key` so that the bindings
/// follow the keyboard layout.
pub fn map_key(key: &str, code: &str) -> Key {
    match code {
        "ArrowLeft" => return Key::ArrowLeft,
        "ArrowRight" => return Key::ArrowRight,
        _ => {}
    }

    match key.to_lowercase().as_str() {
        "arrowleft" => Key::ArrowLeft,
        "arrowright" => Key::ArrowRight,
        "a" => Key::KeyA,
        "d" => Key::KeyD,
        _ => Key::Unknown,
    }
}

/// Translates a position measured from the page viewport into an element whose top-left corner is
/// at `origin`.
pub fn to_local_coordinates(position: Coordinates, origin: Vec2) -> Coordinates {
    position - origin.round().as_ivec2()
}
