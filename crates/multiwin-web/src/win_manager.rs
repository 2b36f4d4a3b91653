//! localStorage-backed peer-window registry.
//!
//! Every open same-origin window appends itself to a shared `"windows"`
//! entry and rewrites its own shape whenever it moves or resizes. Sibling
//! writes arrive through the `storage` event; listeners only queue registry
//! events and the frame loop drains them, so all simulation mutation happens
//! on the frame callback.

use crate::dom::js_f32;
use fnv::FnvHashSet;
use multiwin_core::{PeerWindow, RegistryError, RegistryEvent, WindowShape};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const WINDOWS_KEY: &str = "windows";
const COUNT_KEY: &str = "count";

/// Registry notifications queued by listeners and drained once per frame.
pub type SharedEvents = Rc<RefCell<VecDeque<RegistryEvent>>>;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredShape {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredWindow {
    id: u32,
    shape: StoredShape,
    #[serde(default)]
    metadata: serde_json::Value,
}

pub struct WindowManager {
    storage: web::Storage,
    id: u32,
    shape: WindowShape,
    events: SharedEvents,
}

impl WindowManager {
    pub fn new(events: SharedEvents) -> Result<Self, RegistryError> {
        let storage = web::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(RegistryError::StorageUnavailable)?;
        Ok(Self {
            storage,
            id: 0,
            shape: own_shape(),
            events,
        })
    }

    /// Register this window in the shared list and start listening for
    /// sibling writes.
    pub fn init(&mut self, metadata: serde_json::Value) -> Result<(), RegistryError> {
        let count: u32 = self
            .storage
            .get_item(COUNT_KEY)
            .map_err(read_err)?
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        self.id = count + 1;
        self.storage
            .set_item(COUNT_KEY, &self.id.to_string())
            .map_err(write_err)?;

        self.shape = own_shape();
        let mut wins = self.read_windows()?;
        wins.push(StoredWindow {
            id: self.id,
            shape: to_stored(self.shape),
            metadata,
        });
        self.write_windows(&wins)?;
        self.listen_for_sibling_writes();
        Ok(())
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// This window's most recently observed shape.
    pub fn shape(&self) -> WindowShape {
        self.shape
    }

    /// Once per frame: re-read our own shape and republish on change.
    pub fn update(&mut self) -> Result<(), RegistryError> {
        let current = own_shape();
        if current == self.shape {
            return Ok(());
        }
        self.shape = current;
        let mut wins = self.read_windows()?;
        if let Some(win) = wins.iter_mut().find(|w| w.id == self.id) {
            win.shape = to_stored(current);
        }
        self.write_windows(&wins)?;
        self.events
            .borrow_mut()
            .push_back(RegistryEvent::ShapeChanged { easing: true });
        Ok(())
    }

    /// Ordered list of all participating windows, our own included.
    pub fn get_windows(&self) -> Result<Vec<PeerWindow>, RegistryError> {
        Ok(self
            .read_windows()?
            .into_iter()
            .map(|w| PeerWindow {
                id: w.id,
                shape: WindowShape::new(w.shape.x, w.shape.y, w.shape.w, w.shape.h),
            })
            .collect())
    }

    /// Drop our entry from the shared list; wired to `beforeunload`.
    pub fn deregister(&self) -> Result<(), RegistryError> {
        let mut wins = self.read_windows()?;
        wins.retain(|w| w.id != self.id);
        self.write_windows(&wins)
    }

    /// `storage` events only fire in sibling windows, never the writer, so
    /// anything arriving here is a peer change. Shape-only sibling writes
    /// need no notification; proxy targets refresh from `get_windows()`
    /// every frame.
    fn listen_for_sibling_writes(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let events = self.events.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::StorageEvent| {
            if ev.key().as_deref() != Some(WINDOWS_KEY) {
                return;
            }
            let before = id_set(ev.old_value().as_deref());
            let after = id_set(ev.new_value().as_deref());
            if before != after {
                events.borrow_mut().push_back(RegistryEvent::PeerSetChanged);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn read_windows(&self) -> Result<Vec<StoredWindow>, RegistryError> {
        match self.storage.get_item(WINDOWS_KEY).map_err(read_err)? {
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| RegistryError::Read(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    fn write_windows(&self, wins: &[StoredWindow]) -> Result<(), RegistryError> {
        let json = serde_json::to_string(wins).map_err(|e| RegistryError::Write(e.to_string()))?;
        self.storage.set_item(WINDOWS_KEY, &json).map_err(write_err)
    }
}

fn id_set(raw: Option<&str>) -> FnvHashSet<u32> {
    raw.and_then(|json| serde_json::from_str::<Vec<StoredWindow>>(json).ok())
        .map(|wins| wins.iter().map(|w| w.id).collect())
        .unwrap_or_default()
}

fn own_shape() -> WindowShape {
    let Some(window) = web::window() else {
        return WindowShape::default();
    };
    WindowShape::new(
        js_f32(window.screen_x()),
        js_f32(window.screen_y()),
        js_f32(window.inner_width()),
        js_f32(window.inner_height()),
    )
}

fn to_stored(shape: WindowShape) -> StoredShape {
    StoredShape {
        x: shape.x,
        y: shape.y,
        w: shape.w,
        h: shape.h,
    }
}

fn read_err(e: wasm_bindgen::JsValue) -> RegistryError {
    RegistryError::Read(format!("{:?}", e))
}

fn write_err(e: wasm_bindgen::JsValue) -> RegistryError {
    RegistryError::Write(format!("{:?}", e))
}
