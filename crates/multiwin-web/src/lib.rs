#![cfg(target_arch = "wasm32")]
//! Browser entry point: lifecycle gating, setup sequencing, and wiring.
//!
//! Each window runs the same module; the shared-storage registry is what
//! makes the scenes line up across windows.

pub mod dom;
pub mod events;
pub mod frame;
pub mod render;
pub mod win_manager;

use multiwin_core::{SceneConfig, SceneState};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;
use win_manager::{SharedEvents, WindowManager};

/// Settle delay before setup reads window geometry; freshly opened windows
/// report stale screen coordinates for a few frames.
const STARTUP_DELAY_MS: i32 = 500;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("multiwin-web starting");

    if clear_requested() {
        clear_registry_state();
        log::info!("[init] cleared shared registry state; not starting");
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.visibility_state() != web::VisibilityState::Hidden {
        schedule_init();
    }
    // A window opened in the background initializes on first reveal.
    {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            if doc.visibility_state() != web::VisibilityState::Hidden {
                schedule_init();
            }
        }) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn clear_requested() -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let search = window.location().search().unwrap_or_default();
    web::UrlSearchParams::new_with_str(&search)
        .map(|params| params.get("clear").is_some())
        .unwrap_or(false)
}

fn clear_registry_state() {
    if let Some(storage) = web::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.clear();
    }
}

fn schedule_init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }
    dom::set_timeout(
        || {
            spawn_local(async {
                if let Err(e) = init().await {
                    log::error!("init error: {:?}", e);
                }
            });
        },
        STARTUP_DELAY_MS,
    );
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("scene")
        .ok_or_else(|| anyhow::anyhow!("missing #scene canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let gpu = frame::init_gpu(&canvas)
        .await
        .ok_or_else(|| anyhow::anyhow!("WebGPU init failed"))?;

    let registry_events: SharedEvents = Rc::new(RefCell::new(VecDeque::new()));
    let mut manager = WindowManager::new(registry_events.clone())?;
    manager.init(serde_json::json!({ "app": "multiwin" }))?;

    let viewport = dom::inner_size();
    let config = SceneConfig {
        click_boosts_speed: true,
        seed: js_sys::Date::now() as u64,
    };
    let mut scene = SceneState::new(config, dom::seconds_since_local_midnight(), viewport);

    // Populate from every currently-known window, our own included, then
    // snap the offset so the first frame doesn't slide in.
    let wins = manager.get_windows().unwrap_or_default();
    scene.on_peer_set_changed(&wins, viewport);
    let shape = manager.shape();
    scene.on_shape_changed(shape.x, shape.y, false);

    log::info!(
        "[init] window {} running with {} window(s)",
        manager.id(),
        wins.len()
    );

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        manager,
        gpu,
        canvas: canvas.clone(),
        registry_events,
    }));
    events::wire_resize(&canvas);
    events::wire_click(ctx.clone(), &canvas);
    events::wire_beforeunload(ctx.clone());
    frame::start_loop(ctx);
    Ok(())
}
