use tarmac::glam::Vec2;
use tarmac::glam::Vec4;
use tarmac::renderer::camera::Camera;
use tarmac::renderer::Canvas;

pub const WINDOW_OFFSET: Vec2 = Vec2::new(10.0, 20.0);
pub const WINDOW_SIZE: Vec2 = Vec2::new(30.0, 20.0);

pub struct VehicleSprite {
    pub position: Vec2,
    pub rotation: f32,
    pub size: Vec2,
    pub color: Vec4,
    pub window_color: Vec4,
}

/// Draws the body centered on the vehicle position, rotated by `rotation` radians, with the window
/// inset near its front.
pub fn draw_vehicle<C>(canvas: &mut C, camera: &Camera, sprite: &VehicleSprite)
where
    C: Canvas + ?Sized,
{
    let corner = -sprite.size / 2.0;

    canvas.save();
    canvas.translate(camera.from_world_to_screen_coordinates(sprite.position));
    canvas.rotate(sprite.rotation);
    canvas.fill_rect(corner, sprite.size, sprite.color);
    canvas.fill_rect(corner + WINDOW_OFFSET, WINDOW_SIZE, sprite.window_color);
    canvas.restore();
}
