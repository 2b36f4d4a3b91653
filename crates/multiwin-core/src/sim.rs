//! Sphere/particle micro-simulation.
//!
//! A small population of spheres wiggles on a shared clock phase, collides
//! pairwise, and a designated suction target pulls colliding bodies in and
//! absorbs them on near-contact. Collisions and absorptions emit short-lived
//! particle bursts that fade out over a fixed number of frames.

use crate::constants::{
    ABSORB_DISTANCE, ABSORB_GROWTH, COLLISION_DISTANCE, OOZE_REVERT_SECS, OOZE_SCALE,
    PARTICLE_BURST, PARTICLE_FADE_STEP, PARTICLE_SPEED_RANGE, SPHERE_COUNT, SPHERE_DEPTH_RANGE,
    SUCTION_SPEED, WIGGLE_INTENSITY,
};
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;

/// Mobile spherical body.
#[derive(Clone, Debug)]
pub struct SphereBody {
    pub position: Vec3,
    pub scale: f32,
    pub is_suction_target: bool,
    /// Remaining seconds until an ooze pulse reverts; `None` while idle.
    /// Re-triggering overwrites the countdown, last write wins.
    pub ooze_timer: Option<f32>,
    absorbed: bool,
}

impl SphereBody {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            scale: 1.0,
            is_suction_target: false,
            ooze_timer: None,
            absorbed: false,
        }
    }
}

/// Short-lived emission particle. Velocity is distance per frame, not per
/// second, so visual speed tracks the display refresh rate.
#[derive(Clone, Debug)]
pub struct ParticleBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub opacity: f32,
}

/// The body/particle population plus the RNG that seeds placement, suction
/// target choice, and burst velocities.
pub struct MicroSim {
    pub bodies: Vec<SphereBody>,
    pub particles: Vec<ParticleBody>,
    rng: StdRng,
}

impl MicroSim {
    pub fn new(seed: u64) -> Self {
        Self {
            bodies: Vec::new(),
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Respawn the sphere population: random placement across the viewport,
    /// one uniformly-chosen suction target. Live particles are left to decay
    /// naturally.
    pub fn reset(&mut self, viewport_w: f32, viewport_h: f32) {
        self.bodies.clear();
        for _ in 0..SPHERE_COUNT {
            let position = Vec3::new(
                self.rng.gen::<f32>() * viewport_w,
                self.rng.gen::<f32>() * viewport_h,
                self.rng.gen::<f32>() * SPHERE_DEPTH_RANGE,
            );
            self.bodies.push(SphereBody::at(position));
        }
        let chosen = self.rng.gen_range(0..self.bodies.len());
        self.bodies[chosen].is_suction_target = true;
    }

    /// Advance one frame. `t` is the global clock in seconds (the shared
    /// jitter phase); `dt` is elapsed seconds since the previous frame and
    /// drives only the ooze revert countdown.
    pub fn tick(&mut self, t: f64, dt: f32) {
        self.jitter(t);
        self.revert_oozing(dt);
        self.resolve_collisions();
        self.advance_particles();
    }

    /// Shared-phase sinusoidal wiggle: every body shifts by the same delta,
    /// so the population moves in lockstep rather than as per-body noise.
    fn jitter(&mut self, t: f64) {
        let dx = t.sin() as f32 * WIGGLE_INTENSITY;
        let dy = t.cos() as f32 * WIGGLE_INTENSITY;
        for body in &mut self.bodies {
            body.position.x += dx;
            body.position.y += dy;
        }
    }

    /// Pairwise collision scan, exactly once per unordered pair per frame.
    ///
    /// Absorptions are flagged during the scan and compacted afterwards so
    /// removal can never skip a pair or revisit a dead body; bursts are
    /// collected at trigger-time positions and emitted after the scan.
    fn resolve_collisions(&mut self) {
        let mut bursts: SmallVec<[Vec3; 8]> = SmallVec::new();
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                if self.bodies[i].absorbed || self.bodies[j].absorbed {
                    continue;
                }
                let distance = self.bodies[i].position.distance(self.bodies[j].position);
                if distance >= COLLISION_DISTANCE {
                    continue;
                }
                self.trigger_ooze(i, &mut bursts);
                self.trigger_ooze(j, &mut bursts);
                if self.bodies[i].is_suction_target || self.bodies[j].is_suction_target {
                    let (target, prey) = if self.bodies[i].is_suction_target {
                        (i, j)
                    } else {
                        (j, i)
                    };
                    self.resolve_suction(target, prey, distance, &mut bursts);
                }
            }
        }
        if self.bodies.iter().any(|b| b.absorbed) {
            self.bodies.retain(|b| !b.absorbed);
            log::debug!("[sim] absorption, {} bodies remain", self.bodies.len());
        }
        for origin in bursts {
            self.emit_burst(origin);
        }
    }

    /// Ooze pulse: fixed scale bump with a countdown back to 1.0. The burst
    /// origin is the body's position at trigger time, before any suction pull
    /// this frame.
    fn trigger_ooze(&mut self, index: usize, bursts: &mut SmallVec<[Vec3; 8]>) {
        let body = &mut self.bodies[index];
        body.scale = OOZE_SCALE;
        body.ooze_timer = Some(OOZE_REVERT_SECS);
        bursts.push(body.position);
    }

    /// Pull the non-target body toward the target, or absorb it on
    /// near-contact: removal, compounding growth of the absorber, one extra
    /// burst at the absorber's position.
    fn resolve_suction(
        &mut self,
        target: usize,
        prey: usize,
        distance: f32,
        bursts: &mut SmallVec<[Vec3; 8]>,
    ) {
        if distance > ABSORB_DISTANCE {
            let target_pos = self.bodies[target].position;
            let prey = &mut self.bodies[prey];
            prey.position = prey.position.lerp(target_pos, SUCTION_SPEED);
        } else {
            self.bodies[prey].absorbed = true;
            self.bodies[prey].is_suction_target = false;
            let absorber = &mut self.bodies[target];
            absorber.scale *= ABSORB_GROWTH;
            bursts.push(absorber.position);
        }
    }

    /// Count oozing pulses down and revert expired ones. Runs before the
    /// collision scan so a pulse triggered this frame keeps its full
    /// countdown.
    fn revert_oozing(&mut self, dt: f32) {
        for body in &mut self.bodies {
            if let Some(timer) = &mut body.ooze_timer {
                *timer -= dt;
                if *timer <= 0.0 {
                    body.ooze_timer = None;
                    body.scale = 1.0;
                }
            }
        }
    }

    /// Fixed batch of particles at `origin`, uniform random velocity per axis.
    pub fn emit_burst(&mut self, origin: Vec3) {
        for _ in 0..PARTICLE_BURST {
            let velocity = Vec3::new(
                (self.rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_RANGE,
                (self.rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_RANGE,
                (self.rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_RANGE,
            );
            self.particles.push(ParticleBody {
                position: origin,
                velocity,
                opacity: 1.0,
            });
        }
    }

    /// Advance and cull particles. Retain compacts in place without skipping
    /// the element after a removal.
    fn advance_particles(&mut self) {
        for p in &mut self.particles {
            p.position += p.velocity;
            p.opacity -= PARTICLE_FADE_STEP;
        }
        self.particles.retain(|p| p.opacity > 0.0);
    }
}
