use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Keep the canvas backing store sized to CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Window inner size in CSS pixels; this is the world coordinate space.
pub fn inner_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    Vec2::new(js_f32(w.inner_width()), js_f32(w.inner_height()))
}

#[inline]
pub(crate) fn js_f32(value: Result<JsValue, JsValue>) -> f32 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
}

/// Seconds already elapsed since local midnight, from the JS clock.
pub fn seconds_since_local_midnight() -> f64 {
    let now = js_sys::Date::new_0();
    f64::from(now.get_hours()) * 3600.0
        + f64::from(now.get_minutes()) * 60.0
        + f64::from(now.get_seconds())
        + f64::from(now.get_milliseconds()) / 1000.0
}

/// One-shot deferred callback.
pub fn set_timeout(f: impl FnOnce() + 'static, millis: i32) {
    if let Some(window) = web::window() {
        let closure = Closure::once(f);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis,
        );
        closure.forget();
    }
}
