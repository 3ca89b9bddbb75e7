use crate::dom;
use crate::style;
use glam::Vec2;
use starfield_core::{ParallaxOffset, Starfield};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Resize the canvas to the window and regenerate the star batch for the new
/// size, all inside the resize callback so no tick sees a stale batch.
pub fn resize_starfield(canvas: &web::HtmlCanvasElement, starfield: &RefCell<Starfield>) {
    let viewport = dom::window_viewport();
    dom::sync_canvas_backing_size(canvas, viewport);
    starfield.borrow_mut().initialize(viewport);
}

pub fn wire_resize(canvas: &web::HtmlCanvasElement, starfield: &Rc<RefCell<Starfield>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let starfield = starfield.clone();
    dom::on_event(&window, "resize", move |_: web::Event| {
        resize_starfield(&canvas, &starfield);
    });
}

/// Two-plane depth effect: the background follows the pointer at full
/// strength, the star canvas at half.
pub fn wire_parallax(background: web::HtmlElement, canvas: web::HtmlElement) {
    let Some(window) = web::window() else {
        return;
    };
    dom::on_event(&window, "mousemove", move |ev: web::MouseEvent| {
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let offset = ParallaxOffset::from_pointer(pointer, dom::window_viewport());
        dom::set_transform(&background, &style::translate_px(offset.background));
        dom::set_transform(&canvas, &style::translate_px(offset.foreground));
    });
    log::debug!("[parallax] pointer tracking enabled");
}
