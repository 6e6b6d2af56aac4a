use tarmac::glam::Vec2;
use tarmac::window::InputEvent;
use tarmac::window::Key;

/// Steering wishes mirrored from the current keyboard and touch state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SteerIntent {
    pub left: bool,
    pub right: bool,
}

impl SteerIntent {
    pub fn apply(&mut self, event: InputEvent, viewport: Vec2) {
        match event {
            InputEvent::KeyPress { key, .. } => self.set_key(key, true),
            InputEvent::KeyRelease { key } => self.set_key(key, false),
            InputEvent::TouchStart { position, .. } => {
                if (position.x as f32) < viewport.x / 2.0 {
                    self.left = true;
                } else {
                    self.right = true;
                }
            }
            // Any lifted finger releases both sides
            InputEvent::TouchEnd { .. } => {
                self.left = false;
                self.right = false;
            }
            _ => {}
        }
    }

    /// -1 when turning left, 1 when turning right, 0 when idle or when both sides are held.
    pub fn turn_direction(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    fn set_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::ArrowLeft | Key::KeyA => self.left = pressed,
            Key::ArrowRight | Key::KeyD => self.right = pressed,
            Key::Unknown => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarmac::window::Coordinates;
    use test_log::test;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn keys_mirror_held_state() {
        let mut intent = SteerIntent::default();

        intent.apply(InputEvent::KeyPress { key: Key::ArrowLeft, repeat: false }, VIEWPORT);
        assert_eq!(intent, SteerIntent { left: true, right: false });

        intent.apply(InputEvent::KeyPress { key: Key::KeyD, repeat: false }, VIEWPORT);
        assert_eq!(intent, SteerIntent { left: true, right: true });
        assert_eq!(intent.turn_direction(), 0.0);

        intent.apply(InputEvent::KeyRelease { key: Key::KeyA }, VIEWPORT);
        assert_eq!(intent, SteerIntent { left: false, right: true });
        assert_eq!(intent.turn_direction(), 1.0);

        intent.apply(InputEvent::KeyRelease { key: Key::ArrowRight }, VIEWPORT);
        assert_eq!(intent, SteerIntent::default());
    }

    #[test]
    fn other_events_are_ignored() {
        let mut intent = SteerIntent { left: true, right: false };

        intent.apply(InputEvent::KeyPress { key: Key::Unknown, repeat: false }, VIEWPORT);
        intent.apply(InputEvent::KeyRelease { key: Key::Unknown }, VIEWPORT);
        intent.apply(InputEvent::WindowClose, VIEWPORT);
        intent.apply(InputEvent::WindowSizeChange { size: Coordinates::new(10, 10) }, VIEWPORT);

        assert_eq!(intent, SteerIntent { left: true, right: false });
        assert_eq!(intent.turn_direction(), -1.0);
    }

    #[test]
    fn touch_halves_select_side() {
        let mut intent = SteerIntent::default();

        intent.apply(InputEvent::TouchStart { id: 0, position: Coordinates::new(399, 300) }, VIEWPORT);
        assert_eq!(intent, SteerIntent { left: true, right: false });

        intent.apply(InputEvent::TouchStart { id: 1, position: Coordinates::new(400, 10) }, VIEWPORT);
        assert_eq!(intent, SteerIntent { left: true, right: true });
    }

    #[test]
    fn touch_end_clears_both_sides() {
        let mut intent = SteerIntent { left: true, right: true };

        intent.apply(InputEvent::TouchEnd { id: 1, position: Coordinates::new(700, 10) }, VIEWPORT);
        assert_eq!(intent, SteerIntent::default());
    }
}
