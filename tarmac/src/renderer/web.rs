use super::*;
use crate::utils::color::Vec4Color;
use anyhow::anyhow;
use anyhow::Result;
use log::error;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub struct RendererContextWeb {
    pub context: CanvasRenderingContext2d,

    viewport: Vec2,
}

impl RendererContextWeb {
    pub fn new(context: CanvasRenderingContext2d) -> Result<Self> {
        let canvas = context.canvas().ok_or_else(|| anyhow!("Canvas context is detached"))?;
        let viewport = Vec2::new(canvas.width() as f32, canvas.height() as f32);

        Ok(Self { context, viewport })
    }

    pub fn set_viewport(&mut self, size: Vec2) {
        self.viewport = size;
    }
}

impl Canvas for RendererContextWeb {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.viewport.x as f64, self.viewport.y as f64);
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        if self.context.translate(offset.x as f64, offset.y as f64).is_err() {
            error!("Failed to translate canvas by {}", offset);
        }
    }

    fn rotate(&mut self, angle: f32) {
        if self.context.rotate(angle as f64).is_err() {
            error!("Failed to rotate canvas by {}", angle);
        }
    }

    fn fill_rect(&mut self, position: Vec2, size: Vec2, color: Vec4) {
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.fill_rect(position.x as f64, position.y as f64, size.x as f64, size.y as f64);
    }
}
