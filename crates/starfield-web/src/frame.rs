use crate::canvas::CanvasSurface;
use crate::constants::FPS_LOG_INTERVAL_FRAMES;
use instant::Instant;
use starfield_core::{Starfield, Surface};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub starfield: Rc<RefCell<Starfield>>,
    pub surface: CanvasSurface,
    frames: u32,
    last_report: Instant,
}

impl FrameContext {
    pub fn new(starfield: Rc<RefCell<Starfield>>, surface: CanvasSurface) -> Self {
        Self {
            starfield,
            surface,
            frames: 0,
            last_report: Instant::now(),
        }
    }

    /// One simulation step and redraw for the animation-frame timestamp.
    pub fn frame(&mut self, timestamp: f64) {
        self.starfield
            .borrow_mut()
            .tick(timestamp, &mut self.surface);

        self.frames = self.frames.wrapping_add(1);
        if self.frames % FPS_LOG_INTERVAL_FRAMES == 0 {
            let now = Instant::now();
            let secs = (now - self.last_report).as_secs_f32();
            if secs > 0.0 {
                log::debug!(
                    "[frame] {:.1} fps, {} shooting stars",
                    FPS_LOG_INTERVAL_FRAMES as f32 / secs,
                    self.starfield.borrow().shooting_stars().len()
                );
            }
            self.last_report = now;
        }
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Handle to the self-rescheduling animation-frame callback.
pub struct AnimationLoop {
    callback: Rc<RefCell<Option<FrameCallback>>>,
    handle: Rc<Cell<Option<i32>>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
}

impl AnimationLoop {
    /// Cancel the pending frame, drop the callback and blank the canvas.
    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
        self.frame_ctx.borrow_mut().surface.clear();
        log::info!("[frame] animation loop stopped");
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));

    let callback_next = callback.clone();
    let handle_next = handle.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        frame_ctx_tick.borrow_mut().frame(timestamp);
        handle_next.set(request_frame(&callback_next));
    }) as Box<dyn FnMut(f64)>));

    handle.set(request_frame(&callback));
    AnimationLoop {
        callback,
        handle,
        frame_ctx,
    }
}

fn request_frame(callback: &Rc<RefCell<Option<FrameCallback>>>) -> Option<i32> {
    let window = web::window()?;
    let callback = callback.borrow();
    let closure = callback.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
