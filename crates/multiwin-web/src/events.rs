use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store in step with CSS size; the GPU surface
/// follows per frame via `resize_if_needed`.
pub fn wire_resize(canvas: &web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let canvas_resize = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Project clicks into the scene and highlight whatever proxy they hit.
pub fn wire_click(ctx: Rc<RefCell<FrameContext>>, canvas: &web::HtmlCanvasElement) {
    let canvas_click = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let rect = canvas_click.get_bounding_client_rect();
        let x = ev.client_x() as f32 - rect.left() as f32;
        let y = ev.client_y() as f32 - rect.top() as f32;
        let mut ctx = ctx.borrow_mut();
        match ctx.scene.click(rect.width() as f32, rect.height() as f32, x, y) {
            Some(i) => log::info!("[click] highlighted proxy {}", i),
            None => log::info!("[click] no hit"),
        }
    }) as Box<dyn FnMut(_)>);
    let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Closing the window removes its registry entry so siblings drop its cube.
pub fn wire_beforeunload(ctx: Rc<RefCell<FrameContext>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || {
            if let Err(e) = ctx.borrow().manager.deregister() {
                log::warn!("[registry] deregister failed: {}", e);
            }
        }) as Box<dyn FnMut()>);
        let _ = window
            .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
