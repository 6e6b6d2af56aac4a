use super::*;
use crate::app::ApplicationContext;
use crate::VERSION;
use glam::Vec2;
use anyhow::anyhow;
use anyhow::Result;
use log::error;
use log::info;
use log::Level;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;
use web_sys::Document;
use web_sys::HtmlCanvasElement;
use web_sys::KeyboardEvent;
use web_sys::TouchEvent;
use web_sys::Window;

pub struct WindowContextWeb {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,

    pub size: Coordinates,
    pub keyboard_state: Vec<bool>,

    frame_callback: Closure<dyn FnMut()>,
    resize_callback: Closure<dyn FnMut()>,
    keydown_callback: Closure<dyn FnMut(KeyboardEvent)>,
    keyup_callback: Closure<dyn FnMut(KeyboardEvent)>,
    touchstart_callback: Closure<dyn FnMut(TouchEvent)>,
    touchend_callback: Closure<dyn FnMut(TouchEvent)>,

    event_queue: VecDeque<InputEvent>,
}

impl WindowContextWeb {
    pub fn new(_: &str, _: WindowStyle) -> Result<Box<Self>> {
        #[cfg(debug_assertions)]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        #[cfg(debug_assertions)]
        console_log::init_with_level(Level::Debug).map_err(|_| anyhow!("Logger initialization failed"))?;

        #[cfg(not(debug_assertions))]
        console_log::init_with_level(Level::Error).map_err(|_| anyhow!("Logger initialization failed"))?;

        info!("Tarmac {}", VERSION);
        info!("Window initialization");

        let window = web_sys::window().ok_or_else(|| anyhow!("Window not found"))?;
        let document = window.document().ok_or_else(|| anyhow!("Document not found"))?;
        let canvas = document.get_element_by_id("canvas").ok_or_else(|| anyhow!("Canvas not found"))?;
        let canvas = canvas.dyn_into::<HtmlCanvasElement>().map_err(|_| anyhow!("HtmlCanvasElement not found"))?;
        let size = Coordinates::new(canvas.scroll_width(), canvas.scroll_height());

        canvas.set_width(size.x as u32);
        canvas.set_height(size.y as u32);

        Ok(Box::new(Self {
            window,
            document,
            canvas,

            size,
            keyboard_state: vec![false; Key::Unknown as usize],

            frame_callback: Closure::<dyn FnMut()>::new(|| {}),
            resize_callback: Closure::<dyn FnMut()>::new(|| {}),
            keydown_callback: Closure::<dyn FnMut(_)>::new(|_| {}),
            keyup_callback: Closure::<dyn FnMut(_)>::new(|_| {}),
            touchstart_callback: Closure::<dyn FnMut(_)>::new(|_| {}),
            touchend_callback: Closure::<dyn FnMut(_)>::new(|_| {}),

            event_queue: Default::default(),
        }))
    }

    pub fn create_surface(&self) -> Result<CanvasRenderingContext2d> {
        info!("Canvas context initialization");

        let context = self
            .canvas
            .get_context("2d")
            .map_err(|_| anyhow!("Failed to initialize canvas context"))?
            .ok_or_else(|| anyhow!("Failed to initialize canvas context"))?;

        context.dyn_into::<CanvasRenderingContext2d>().map_err(|_| anyhow!("Failed to initialize CanvasRenderingContext2d"))
    }

    #[allow(clippy::redundant_clone)]
    pub fn init_closures<G>(&mut self, app: Rc<RefCell<ApplicationContext<G>>>)
    where
        G: Default + 'static,
    {
        self.init_frame_callback(app.clone());
        self.init_resize_callback(app.clone()).map_or_else(|_| error!("Failed to initialize resize callback"), |_| ());
        self.init_keydown_callback(app.clone()).map_or_else(|_| error!("Failed to initialize keydown callback"), |_| ());
        self.init_keyup_callback(app.clone()).map_or_else(|_| error!("Failed to initialize keyup callback"), |_| ());
        self.init_touchstart_callback(app.clone()).map_or_else(|_| error!("Failed to initialize touchstart callback"), |_| ());
        self.init_touchend_callback(app.clone()).map_or_else(|_| error!("Failed to initialize touchend callback"), |_| ());
    }

    fn init_frame_callback<G>(&mut self, app: Rc<RefCell<ApplicationContext<G>>>)
    where
        G: Default + 'static,
    {
        self.frame_callback = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().run_internal();
        });
    }

    fn init_resize_callback<G>(&mut self, app: Rc<RefCell<ApplicationContext<G>>>) -> core::result::Result<(), JsValue>
    where
        G: Default + 'static,
    {
        self.resize_callback = Closure::<dyn FnMut()>::new(move || {
            let mut app = app.borrow_mut();
            let canvas = &app.window.canvas;
            let size = Coordinates::new(canvas.scroll_width(), canvas.scroll_height());

            canvas.set_width(size.x as u32);
            canvas.set_height(size.y as u32);

            app.window.event_queue.push_back(InputEvent::WindowSizeChange { size });
            app.window.size = size;
        });

        let resize_callback = self.resize_callback.as_ref().unchecked_ref();
        self.window.add_event_listener_with_callback("resize", resize_callback)?;
        self.window.set_timeout_with_callback_and_timeout_and_arguments_0(resize_callback, 0)?;

        Ok(())
    }

    fn init_keydown_callback<G>(&mut self, app: Rc<RefCell<ApplicationContext<G>>>) -> core::result::Result<(), JsValue>
    where
        G: Default + 'static,
    {
        self.keydown_callback = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut app = app.borrow_mut();
            let key = map_key(&event.key(), &event.code());

            if key != Key::Unknown {
                let repeat = app.window.keyboard_state[key as usize];

                app.window.event_queue.push_back(InputEvent::KeyPress { key, repeat });
                app.window.keyboard_state[key as usize] = true;
            }
        });

        let keydown_callback = self.keydown_callback.as_ref().unchecked_ref();
        self.document.add_event_listener_with_callback("keydown", keydown_callback)?;

        Ok(())
    }

    fn init_keyup_callback<G>(&mut self, app: Rc<RefCell<ApplicationContext<G>>>) -> core::result::Result<(), JsValue>
    where
        G: Default + 'static,
    {
        self.keyup_callback = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut app = app.borrow_mut();
            let key = map_key(&event.key(), &event.code());

            if key != Key::Unknown {
                app.window.event_queue.push_back(InputEvent::KeyRelease { key });
                app.window.keyboard_state[key as usize] = false;
            }
        });

        let keyup_callback = self.keyup_callback.as_ref().unchecked_ref();
        self.document.add_event_listener_with_callback("keyup", keyup_callback)?;

        Ok(())
    }

    fn init_touchstart_callback<G>(&mut self, app: Rc<RefCell<ApplicationContext<G>>>) -> core::result::Result<(), JsValue>
    where
        G: Default + 'static,
    {
        self.touchstart_callback = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            let mut app = app.borrow_mut();

            // Only the first active touch is taken into account
            if let Some(touch) = event.touches().get(0) {
                let id = touch.identifier() as u64;
                let position = app.window.to_canvas_coordinates(touch.client_x(), touch.client_y());

                app.window.event_queue.push_back(InputEvent::TouchStart { id, position });
            }
        });

        let touchstart_callback = self.touchstart_callback.as_ref().unchecked_ref();
        self.document.add_event_listener_with_callback("touchstart", touchstart_callback)?;

        Ok(())
    }

    fn init_touchend_callback<G>(&mut self, app: Rc<RefCell<ApplicationContext<G>>>) -> core::result::Result<(), JsValue>
    where
        G: Default + 'static,
    {
        self.touchend_callback = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            let mut app = app.borrow_mut();
            let (id, position) = match event.changed_touches().get(0) {
                Some(touch) => (touch.identifier() as u64, app.window.to_canvas_coordinates(touch.client_x(), touch.client_y())),
                None => (0, Coordinates::ZERO),
            };

            app.window.event_queue.push_back(InputEvent::TouchEnd { id, position });
        });

        let touchend_callback = self.touchend_callback.as_ref().unchecked_ref();
        self.document.add_event_listener_with_callback("touchend", touchend_callback)?;

        Ok(())
    }

    /// Converts a position relative to the browser viewport into canvas space.
    fn to_canvas_coordinates(&self, x: i32, y: i32) -> Coordinates {
        let bounds = self.canvas.get_bounding_client_rect();
        to_local_coordinates(Coordinates::new(x, y), Vec2::new(bounds.left() as f32, bounds.top() as f32))
    }

    pub fn poll_event(&mut self) -> Option<InputEvent> {
        self.event_queue.pop_front()
    }

    pub fn alert(&self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            error!("Failed to show alert \"{}\"", message);
        }
    }

    pub fn set_swap_interval(&self, _: u32) {
        // Swap interval is not supported by browsers
    }

    pub fn swap_buffers(&self) {
        if self.window.request_animation_frame(self.frame_callback.as_ref().unchecked_ref()).is_err() {
            error!("Failed to request a new animation frame");
        }
    }
}
