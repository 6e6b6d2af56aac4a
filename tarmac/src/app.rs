use crate::error_continue;
use crate::error_return;
use crate::renderer::RendererContext;
use crate::scene::FrameCommand;
use crate::scene::Scene;
use crate::window::InputEvent;
use crate::window::WindowContext;
use crate::window::WindowStyle;
use anyhow::Result;
use glam::Vec2;
use instant::Instant;
use log::error;
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

pub struct ApplicationContext<G>
where
    G: Default + 'static,
{
    pub window: Box<WindowContext>,
    pub renderer: RendererContext,
    pub scene: Option<Box<dyn Scene<G>>>,
    pub global: G,

    activated: bool,
    running: bool,
}

pub struct ApplicationState<'a, G> {
    pub window: &'a mut Box<WindowContext>,
    pub renderer: &'a mut RendererContext,
    pub global: &'a mut G,
}

macro_rules! state {
    ($self:ident) => {
        ApplicationState { window: &mut $self.window, renderer: &mut $self.renderer, global: &mut $self.global }
    };
}

impl<G> ApplicationContext<G>
where
    G: Default + 'static,
{
    pub fn new(title: &str, style: WindowStyle) -> Result<Self> {
        Self::with_window(WindowContext::new(title, style)?)
    }

    /// Builds the application on top of an already initialized window.
    pub fn with_window(window: Box<WindowContext>) -> Result<Self> {
        let renderer = RendererContext::new(window.create_surface()?)?;

        Ok(Self { window, renderer, scene: None, global: Default::default(), activated: false, running: true })
    }

    pub fn with_scene(mut self, scene: Box<dyn Scene<G>>) -> Self {
        self.scene = Some(scene);
        self
    }

    pub fn with_global(mut self, global: G) -> Self {
        self.global = global;
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn run(self) {
        let app = Rc::new(RefCell::new(self));
        let mut app_borrow = app.borrow_mut();

        #[cfg(web)]
        {
            app_borrow.window.init_closures(app.clone());
        }

        app_borrow.window.set_swap_interval(1);
        app_borrow.run_internal();
    }

    pub fn run_internal(&mut self) {
        while self.running {
            let scene = match self.scene.as_mut() {
                Some(scene) => scene,
                None => error_return!("Scene not set"),
            };

            if !self.activated {
                if let Err(err) = scene.activation(state!(self)) {
                    error_return!("Failed to activate scene ({})", err);
                }

                self.activated = true;
            }

            while let Some(event) = self.window.poll_event() {
                match event {
                    InputEvent::WindowSizeChange { size } => self.renderer.set_viewport(Vec2::new(size.x as f32, size.y as f32)),
                    InputEvent::WindowClose => {
                        self.running = false;
                        break;
                    }
                    _ => {}
                }

                if let Err(err) = scene.input(state!(self), event) {
                    error_continue!("Failed to process input event {:?} ({})", event, err);
                }
            }

            if self.running {
                match scene.frame(state!(self), Instant::now()) {
                    Ok(Some(FrameCommand::Exit)) => self.running = false,
                    Ok(None) => {}
                    Err(err) => error!("Failed to process frame ({})", err),
                }
            }

            if !self.running {
                info!("Application loop stopped");

                if let Err(err) = scene.deactivation(state!(self)) {
                    error_return!("Failed to deactivate scene ({})", err);
                }

                return;
            }

            self.window.swap_buffers();

            #[cfg(web)]
            break;
        }
    }
}
