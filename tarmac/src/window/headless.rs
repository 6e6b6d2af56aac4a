use super::*;
use crate::VERSION;
use anyhow::Result;
use instant::Instant;
use log::info;
use log::warn;
use log::Level;
use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

const DEFAULT_SIZE: Coordinates = Coordinates::new(1280, 720);

/// Native host without a display connection. Frames are paced to the configured refresh rate and
/// input only arrives through [`WindowContextHeadless::push_event`].
pub struct WindowContextHeadless {
    pub size: Coordinates,
    pub alerts: Vec<String>,

    frame_interval: Option<Duration>,
    frame_start: Option<Instant>,
    event_queue: VecDeque<InputEvent>,
}

impl WindowContextHeadless {
    pub fn new(title: &str, style: WindowStyle) -> Result<Box<Self>> {
        #[cfg(debug_assertions)]
        simple_logger::init_with_level(Level::Debug)?;

        #[cfg(not(debug_assertions))]
        simple_logger::init_with_level(Level::Info)?;

        info!("Tarmac {}", VERSION);
        info!("Headless window initialization ({})", title);

        Ok(Box::new(Self::new_detached(style)))
    }

    /// Creates the context without touching the global logger.
    pub fn new_detached(style: WindowStyle) -> Self {
        let size = match style {
            WindowStyle::Window { size } => size,
            WindowStyle::Fullscreen => DEFAULT_SIZE,
        };

        let mut event_queue = VecDeque::new();
        event_queue.push_back(InputEvent::WindowSizeChange { size });

        Self { size, alerts: Vec::new(), frame_interval: None, frame_start: None, event_queue }
    }

    pub fn create_surface(&self) -> Result<Coordinates> {
        Ok(self.size)
    }

    pub fn push_event(&mut self, event: InputEvent) {
        if let InputEvent::WindowSizeChange { size } = event {
            self.size = size;
        }

        self.event_queue.push_back(event);
    }

    pub fn poll_event(&mut self) -> Option<InputEvent> {
        self.event_queue.pop_front()
    }

    pub fn alert(&mut self, message: &str) {
        warn!("{}", message);
        println!("{}", message);

        self.alerts.push(message.to_string());
    }

    pub fn set_swap_interval(&mut self, interval: u32) {
        self.frame_interval = match interval {
            0 => None,
            _ => Some(Duration::from_secs_f64(interval as f64 / 60.0)),
        };
    }

    /// Sleeps for whatever is left of the frame budget since the previous swap.
    pub fn swap_buffers(&mut self) {
        let now = Instant::now();

        if let Some(frame_start) = self.frame_start {
            let remaining = self.remaining_frame_time(now - frame_start);
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
        }

        self.frame_start = Some(Instant::now());
    }

    pub fn remaining_frame_time(&self, elapsed: Duration) -> Duration {
        match self.frame_interval {
            Some(frame_interval) => frame_interval.saturating_sub(elapsed),
            None => Duration::ZERO,
        }
    }
}
