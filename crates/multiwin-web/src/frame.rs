use crate::dom;
use crate::render;
use crate::win_manager::{SharedEvents, WindowManager};
use multiwin_core::{RegistryEvent, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: SceneState,
    pub manager: WindowManager,
    pub gpu: render::GpuState<'static>,
    pub canvas: web::HtmlCanvasElement,
    pub registry_events: SharedEvents,
}

impl FrameContext {
    /// One display-refresh cycle: registry pull, queued notifications,
    /// simulation step, draw.
    pub fn frame(&mut self) {
        if let Err(e) = self.manager.update() {
            log::warn!("[registry] update failed: {}", e);
        }

        let viewport = dom::inner_size();
        let pending: Vec<RegistryEvent> = self.registry_events.borrow_mut().drain(..).collect();
        for ev in pending {
            match ev {
                RegistryEvent::ShapeChanged { easing } => {
                    let shape = self.manager.shape();
                    self.scene.on_shape_changed(shape.x, shape.y, easing);
                }
                RegistryEvent::PeerSetChanged => {
                    let wins = self.manager.get_windows().unwrap_or_default();
                    log::info!("[registry] peer set changed, {} window(s)", wins.len());
                    self.scene.on_peer_set_changed(&wins, viewport);
                }
            }
        }

        let wins = match self.manager.get_windows() {
            Ok(wins) => wins,
            Err(e) => {
                log::warn!("[registry] read failed: {}", e);
                Vec::new()
            }
        };
        let output = self.scene.advance(&wins);

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(&output) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
