use crate::constants::OFFSET_FALLOFF;
use glam::Vec2;

/// Smoothed scene offset chasing the negated window origin.
///
/// Shape notifications set the target discontinuously; `tick` closes the gap
/// with a fixed per-frame falloff so move/resize events arriving at high,
/// irregular frequency never cause a visible jump.
#[derive(Clone, Copy, Debug, Default)]
pub struct OffsetTracker {
    current: Vec2,
    target: Vec2,
}

impl OffsetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retarget to the negated window origin. With `easing` off the current
    /// value snaps to the target, used once at startup to avoid a visible
    /// slide-in.
    pub fn retarget(&mut self, screen_x: f32, screen_y: f32, easing: bool) {
        self.target = Vec2::new(-screen_x, -screen_y);
        if !easing {
            self.current = self.target;
        }
    }

    /// One first-order smoothing step, independent per axis.
    pub fn tick(&mut self) {
        self.current += (self.target - self.current) * OFFSET_FALLOFF;
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }
}
