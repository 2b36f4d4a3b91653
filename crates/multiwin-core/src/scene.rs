//! Per-frame composition: clock, scene offset, cube binder, and the
//! micro-simulation, flattened into a draw list the renderer consumes.

use crate::binder::CubeBinder;
use crate::clock::DayClock;
use crate::constants::{
    CLICK_SPEED_BOOST, HIGHLIGHT_COLOR, PARTICLE_COLOR, PARTICLE_RADIUS, SPHERE_COLOR,
    SPHERE_OPACITY, SPHERE_RADIUS,
};
use crate::offset::OffsetTracker;
use crate::picking::{pick, screen_to_world_ray};
use crate::registry::PeerWindow;
use crate::sim::MicroSim;
use glam::{Vec2, Vec3};

/// Front-end variant switches.
#[derive(Clone, Copy, Debug)]
pub struct SceneConfig {
    /// Whether a successful click also bumps the shared animation speed.
    pub click_boosts_speed: bool,
    /// Seed for the micro-simulation RNG.
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            click_boosts_speed: true,
            seed: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstanceKind {
    Cube,
    Sphere,
    Particle,
}

/// One renderable object for the current frame.
#[derive(Clone, Copy, Debug)]
pub struct SceneInstance {
    pub kind: InstanceKind,
    pub position: Vec3,
    pub rotation: Vec2,
    pub half_extent: f32,
    pub color: [f32; 3],
    pub opacity: f32,
}

/// Draw list plus the world translation for this frame.
#[derive(Clone, Debug, Default)]
pub struct FrameOutput {
    pub world_offset: Vec2,
    pub instances: Vec<SceneInstance>,
}

/// All mutable simulation state for one window, advanced once per frame.
pub struct SceneState {
    pub config: SceneConfig,
    pub offset: OffsetTracker,
    pub binder: CubeBinder,
    pub sim: MicroSim,
    clock: DayClock,
    animation_speed: f32,
    last_t: f64,
}

impl SceneState {
    pub fn new(config: SceneConfig, seconds_since_midnight: f64, viewport: Vec2) -> Self {
        let mut sim = MicroSim::new(config.seed);
        sim.reset(viewport.x, viewport.y);
        Self {
            config,
            offset: OffsetTracker::new(),
            binder: CubeBinder::new(),
            sim,
            clock: DayClock::new(seconds_since_midnight),
            animation_speed: 1.0,
            last_t: seconds_since_midnight,
        }
    }

    /// The registry reported this window's own shape changed.
    pub fn on_shape_changed(&mut self, screen_x: f32, screen_y: f32, easing: bool) {
        self.offset.retarget(screen_x, screen_y, easing);
    }

    /// The registry reported a peer joined or left: rebuild proxies and
    /// respawn the sphere population.
    pub fn on_peer_set_changed(&mut self, peers: &[PeerWindow], viewport: Vec2) {
        self.binder.rebuild(peers);
        self.sim.reset(viewport.x, viewport.y);
    }

    /// One update step driven by the real clock; returns the frame's draw
    /// list.
    pub fn advance(&mut self, peers: &[PeerWindow]) -> FrameOutput {
        let t = self.clock.now();
        let dt = (t - self.last_t).max(0.0) as f32;
        self.last_t = t;
        self.step(t, dt, peers);
        self.draw_list()
    }

    /// Deterministic update used by `advance` and by host tests that drive
    /// the clock by hand.
    pub fn step(&mut self, t: f64, dt: f32, peers: &[PeerWindow]) {
        // A missed peer-set notification must never reach the binder as a
        // length mismatch.
        if self.binder.len() != peers.len() {
            self.binder.rebuild(peers);
        }
        self.offset.tick();
        self.binder.tick(peers, self.animation_speed);
        self.sim.tick(t, dt);
    }

    /// Project a click through the camera and highlight the nearest cube
    /// proxy it hits. Returns the hit index for callers that care.
    pub fn click(&mut self, canvas_w: f32, canvas_h: f32, sx: f32, sy: f32) -> Option<usize> {
        let (ro, rd) = screen_to_world_ray(canvas_w, canvas_h, sx, sy);
        let hit = pick(ro, rd, self.binder.proxies(), self.offset.current())?;
        self.binder.proxies_mut()[hit].color = HIGHLIGHT_COLOR;
        if self.config.click_boosts_speed {
            self.animation_speed += CLICK_SPEED_BOOST;
        }
        Some(hit)
    }

    pub fn animation_speed(&self) -> f32 {
        self.animation_speed
    }

    fn draw_list(&self) -> FrameOutput {
        let mut instances = Vec::with_capacity(
            self.binder.len() + self.sim.bodies.len() + self.sim.particles.len(),
        );
        for proxy in self.binder.proxies() {
            instances.push(SceneInstance {
                kind: InstanceKind::Cube,
                position: Vec3::new(proxy.position.x, proxy.position.y, 0.0),
                rotation: proxy.rotation,
                half_extent: proxy.size * 0.5,
                color: proxy.color,
                opacity: 1.0,
            });
        }
        for body in &self.sim.bodies {
            instances.push(SceneInstance {
                kind: InstanceKind::Sphere,
                position: body.position,
                rotation: Vec2::ZERO,
                half_extent: SPHERE_RADIUS * body.scale,
                color: SPHERE_COLOR,
                opacity: SPHERE_OPACITY,
            });
        }
        for particle in &self.sim.particles {
            instances.push(SceneInstance {
                kind: InstanceKind::Particle,
                position: particle.position,
                rotation: Vec2::ZERO,
                half_extent: PARTICLE_RADIUS,
                color: PARTICLE_COLOR,
                opacity: particle.opacity,
            });
        }
        FrameOutput {
            world_offset: self.offset.current(),
            instances,
        }
    }
}
