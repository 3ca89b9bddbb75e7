#![cfg(target_arch = "wasm32")]
use starfield_core::Starfield;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod style;

use constants::{BACKGROUND_LAYER_ID, CANVAS_ID};

thread_local! {
    static ANIMATION: RefCell<Option<frame::AnimationLoop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the animation loop and blank the star canvas.
#[wasm_bindgen]
pub fn dispose() {
    ANIMATION.with(|slot| {
        if let Some(animation) = slot.borrow_mut().take() {
            animation.stop();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let surface = canvas::CanvasSurface::new(canvas.clone())?;

    let starfield = Rc::new(RefCell::new(Starfield::from_entropy()));
    events::resize_starfield(&canvas, &starfield);
    events::wire_resize(&canvas, &starfield);

    match dom::element_by_id::<web::HtmlElement>(&document, BACKGROUND_LAYER_ID) {
        Ok(background) => events::wire_parallax(background, canvas.clone().into()),
        Err(e) => log::warn!("[parallax] disabled: {}", e),
    }

    // The starfield keeps running even when the player markup is absent.
    if let Err(e) = audio::wire_player(&document) {
        log::warn!("[audio] player disabled: {}", e);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        starfield.clone(),
        surface,
    )));
    let animation = frame::start_loop(frame_ctx);
    ANIMATION.with(|slot| *slot.borrow_mut() = Some(animation));

    log::info!(
        "starfield-web ready: {} stars",
        starfield.borrow().stars().len()
    );
    Ok(())
}
