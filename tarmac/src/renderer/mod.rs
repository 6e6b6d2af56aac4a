use glam::Vec2;
use glam::Vec4;

pub mod camera;

#[cfg(native)]
pub mod headless;
#[cfg(native)]
pub type RendererContext = headless::RendererContextHeadless;

#[cfg(web)]
pub mod web;
#[cfg(web)]
pub type RendererContext = web::RendererContextWeb;

/// Immediate mode 2D drawing surface. Transformations accumulate until the matching `restore`.
pub trait Canvas {
    fn viewport(&self) -> Vec2;

    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);
    fn fill_rect(&mut self, position: Vec2, size: Vec2, color: Vec4);
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Save,
    Restore,
    Translate { offset: Vec2 },
    Rotate { angle: f32 },
    FillRect { position: Vec2, size: Vec2, color: Vec4 },
}
