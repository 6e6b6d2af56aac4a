use super::*;
use crate::window::Coordinates;
use anyhow::Result;

/// Canvas which keeps the commands of the last frame instead of rasterizing them.
pub struct RendererContextHeadless {
    pub commands: Vec<DrawCommand>,
    pub frames: u64,

    viewport: Vec2,
    depth: usize,
}

impl RendererContextHeadless {
    pub fn new(surface: Coordinates) -> Result<Self> {
        Ok(Self { commands: Vec::new(), frames: 0, viewport: surface.as_vec2(), depth: 0 })
    }

    pub fn set_viewport(&mut self, size: Vec2) {
        self.viewport = size;
    }

    pub fn fill_count(&self) -> usize {
        self.commands.iter().filter(|p| matches!(p, DrawCommand::FillRect { .. })).count()
    }
}

impl Canvas for RendererContextHeadless {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // Unbalanced restore is ignored, same as on a browser canvas
        if self.depth > 0 {
            self.depth -= 1;
            self.commands.push(DrawCommand::Restore);
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate { offset });
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate { angle });
    }

    fn fill_rect(&mut self, position: Vec2, size: Vec2, color: Vec4) {
        self.commands.push(DrawCommand::FillRect { position, size, color });
    }
}
