//! Data model for the peer-window registry.
//!
//! The registry itself is platform code (the web crate backs it with shared
//! browser storage); the core only fixes the types it hands over and the
//! notification vocabulary it speaks.

use glam::Vec2;

/// Screen-space rectangle of a window, in pixels.
///
/// Owned by the operating environment; the simulation only ever reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowShape {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl WindowShape {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w >= 0.0 && h >= 0.0);
        Self { x, y, w, h }
    }

    /// Center of the rectangle; cube proxies chase this point.
    pub fn centroid(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

/// One participating sibling window.
///
/// Identity is `id`, not shape: the shape may change every frame, the id is
/// stable for the window's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeerWindow {
    pub id: u32,
    pub shape: WindowShape,
}

/// Notifications a registry delivers between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryEvent {
    /// This window's own shape moved or resized.
    ShapeChanged { easing: bool },
    /// A sibling window joined or left.
    PeerSetChanged,
}
