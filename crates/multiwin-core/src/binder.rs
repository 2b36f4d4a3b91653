use crate::constants::{
    CUBE_BASE_SIZE, CUBE_HUE_STEP, CUBE_ROT_RATE_X, CUBE_ROT_RATE_Y, CUBE_SIZE_STEP,
    OFFSET_FALLOFF,
};
use crate::registry::PeerWindow;
use glam::Vec2;

/// Rendered stand-in for one peer window.
#[derive(Clone, Debug)]
pub struct CubeProxy {
    pub position: Vec2,
    /// Accumulated x/y rotation in radians; advances every frame and never
    /// settles, decoupled from position convergence.
    pub rotation: Vec2,
    pub size: f32,
    pub color: [f32; 3],
}

/// Maps the registry's peer list to a parallel list of cube proxies.
#[derive(Clone, Debug, Default)]
pub struct CubeBinder {
    proxies: Vec<CubeProxy>,
}

impl CubeBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroy-all/create-all on any peer-set change. Color hue and size are
    /// functions of the index alone, so peer ordering stays visually legible.
    pub fn rebuild(&mut self, peers: &[PeerWindow]) {
        self.proxies.clear();
        for (i, win) in peers.iter().enumerate() {
            let hue = (i as f32 * CUBE_HUE_STEP).fract();
            self.proxies.push(CubeProxy {
                position: win.shape.centroid(),
                rotation: Vec2::ZERO,
                size: CUBE_BASE_SIZE + CUBE_SIZE_STEP * i as f32,
                color: hsl_to_rgb(hue, 1.0, 0.5),
            });
        }
        log::debug!("[binder] rebuilt {} proxies", self.proxies.len());
    }

    /// Chase each peer's centroid and advance the rotation.
    ///
    /// The proxy list must be index-parallel to `peers`; `rebuild` restores
    /// that before any peer-set change reaches this point.
    pub fn tick(&mut self, peers: &[PeerWindow], animation_speed: f32) {
        debug_assert_eq!(self.proxies.len(), peers.len());
        for (proxy, win) in self.proxies.iter_mut().zip(peers) {
            let target = win.shape.centroid();
            proxy.position += (target - proxy.position) * OFFSET_FALLOFF;
            proxy.rotation.x += CUBE_ROT_RATE_X * animation_speed;
            proxy.rotation.y += CUBE_ROT_RATE_Y * animation_speed;
        }
    }

    pub fn proxies(&self) -> &[CubeProxy] {
        &self.proxies
    }

    pub fn proxies_mut(&mut self) -> &mut [CubeProxy] {
        &mut self.proxies
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }
}

/// Hue-wheel conversion with the full-saturation/half-lightness semantics the
/// proxy palette is defined in. All of `h`, `s`, `l` are in `[0, 1]`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    fn hue_channel(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}
