use glam::Vec3;
use multiwin_core::*;

const DT: f32 = 1.0 / 60.0;

/// Fresh population with every body parked far apart and no suction target,
/// so each test only gets the interactions it sets up.
fn isolated_sim() -> MicroSim {
    let mut sim = MicroSim::new(7);
    sim.reset(800.0, 600.0);
    for (i, body) in sim.bodies.iter_mut().enumerate() {
        body.position = Vec3::new(i as f32 * 10_000.0, 0.0, 0.0);
        body.is_suction_target = false;
    }
    sim
}

#[test]
fn reset_spawns_population_with_one_suction_target() {
    let mut sim = MicroSim::new(42);
    sim.reset(800.0, 600.0);
    assert_eq!(sim.bodies.len(), SPHERE_COUNT);
    let targets = sim.bodies.iter().filter(|b| b.is_suction_target).count();
    assert_eq!(targets, 1);
    for body in &sim.bodies {
        assert!(body.position.x >= 0.0 && body.position.x <= 800.0);
        assert!(body.position.y >= 0.0 && body.position.y <= 600.0);
        assert!(body.position.z >= 0.0 && body.position.z <= SPHERE_DEPTH_RANGE);
        assert_eq!(body.scale, 1.0);
        assert!(body.ooze_timer.is_none());
    }
}

#[test]
fn jitter_moves_bodies_in_lockstep() {
    let mut sim = isolated_sim();
    let before: Vec<Vec3> = sim.bodies.iter().map(|b| b.position).collect();
    sim.tick(1.25, DT);
    let deltas: Vec<Vec3> = sim
        .bodies
        .iter()
        .zip(&before)
        .map(|(b, prev)| b.position - *prev)
        .collect();
    for delta in &deltas {
        assert!((delta.x - deltas[0].x).abs() < 1e-6);
        assert!((delta.y - deltas[0].y).abs() < 1e-6);
        assert_eq!(delta.z, 0.0);
    }
    assert!((deltas[0].x - (1.25f64.sin() as f32) * WIGGLE_INTENSITY).abs() < 1e-6);
    assert!((deltas[0].y - (1.25f64.cos() as f32) * WIGGLE_INTENSITY).abs() < 1e-6);
}

#[test]
fn collision_triggers_ooze_and_two_bursts() {
    let mut sim = isolated_sim();
    sim.bodies[0].position = Vec3::ZERO;
    sim.bodies[1].position = Vec3::new(50.0, 0.0, 0.0);
    sim.tick(0.0, DT);

    assert_eq!(sim.bodies.len(), SPHERE_COUNT, "no removal without suction");
    for i in [0, 1] {
        assert_eq!(sim.bodies[i].scale, OOZE_SCALE);
        assert!(sim.bodies[i].ooze_timer.is_some());
    }
    // Exactly one collision path per pair: two bursts, no more.
    assert_eq!(sim.particles.len(), 2 * PARTICLE_BURST);
}

#[test]
fn each_close_pair_fires_exactly_once() {
    let mut sim = isolated_sim();
    // Three mutually colliding bodies form three pairs, six ooze bursts.
    sim.bodies[0].position = Vec3::ZERO;
    sim.bodies[1].position = Vec3::new(50.0, 0.0, 0.0);
    sim.bodies[2].position = Vec3::new(0.0, 50.0, 0.0);
    sim.tick(0.0, DT);
    assert_eq!(sim.particles.len(), 6 * PARTICLE_BURST);
}

#[test]
fn suction_pulls_before_absorbing() {
    let mut sim = isolated_sim();
    sim.bodies[0].position = Vec3::ZERO;
    sim.bodies[0].is_suction_target = true;
    sim.bodies[1].position = Vec3::new(50.0, 0.0, 0.0);
    sim.tick(0.0, DT);

    assert_eq!(sim.bodies.len(), SPHERE_COUNT, "no absorption above the contact distance");
    let gap = sim.bodies[0].position.distance(sim.bodies[1].position);
    assert!(
        (gap - 50.0 * (1.0 - SUCTION_SPEED)).abs() < 1e-3,
        "expected one lerp step toward the target, gap {gap}"
    );
}

#[test]
fn absorption_scenario() {
    let mut sim = isolated_sim();
    sim.bodies[0].position = Vec3::ZERO;
    sim.bodies[0].is_suction_target = true;
    sim.bodies[1].position = Vec3::new(5.0, 0.0, 0.0);
    let marker = sim.bodies[1].position;
    sim.tick(0.0, DT);

    assert_eq!(sim.bodies.len(), SPHERE_COUNT - 1);
    assert!(
        sim.bodies.iter().all(|b| b.position.distance(marker) > 1.0),
        "absorbed body must leave the population"
    );
    // Ooze sets 1.1 first, absorption compounds on top of it.
    let absorber = &sim.bodies[0];
    assert!(absorber.is_suction_target);
    assert!((absorber.scale - OOZE_SCALE * ABSORB_GROWTH).abs() < 1e-6);
    // Two ooze bursts plus one absorption burst.
    assert_eq!(sim.particles.len(), 3 * PARTICLE_BURST);
}

#[test]
fn absorption_is_idempotent() {
    let mut sim = isolated_sim();
    sim.bodies[0].position = Vec3::ZERO;
    sim.bodies[0].is_suction_target = true;
    sim.bodies[1].position = Vec3::new(5.0, 0.0, 0.0);
    sim.tick(0.0, DT);
    assert_eq!(sim.bodies.len(), SPHERE_COUNT - 1);

    // Nothing else is close enough to interact; the population is stable.
    for _ in 0..100 {
        sim.tick(0.0, DT);
        assert_eq!(sim.bodies.len(), SPHERE_COUNT - 1);
        assert_eq!(
            sim.bodies.iter().filter(|b| b.is_suction_target).count(),
            1
        );
    }
}

#[test]
fn compounding_growth_across_absorptions() {
    let mut sim = isolated_sim();
    sim.bodies[0].position = Vec3::ZERO;
    sim.bodies[0].is_suction_target = true;
    sim.bodies[1].position = Vec3::new(5.0, 0.0, 0.0);
    sim.tick(0.0, DT);
    assert!((sim.bodies[0].scale - OOZE_SCALE * ABSORB_GROWTH).abs() < 1e-6);

    // Feed it a second body; the growth multiplies again on the oozed scale.
    sim.bodies[1].position = sim.bodies[0].position + Vec3::new(5.0, 0.0, 0.0);
    sim.tick(0.0, DT);
    assert_eq!(sim.bodies.len(), SPHERE_COUNT - 2);
    assert!((sim.bodies[0].scale - OOZE_SCALE * ABSORB_GROWTH).abs() < 1e-6);
}

#[test]
fn particles_fade_by_exactly_one_step_per_frame() {
    let mut sim = isolated_sim();
    sim.emit_burst(Vec3::ZERO);
    assert_eq!(sim.particles.len(), PARTICLE_BURST);
    for p in &sim.particles {
        assert_eq!(p.opacity, 1.0);
        assert!(p.velocity.x.abs() <= PARTICLE_SPEED_RANGE / 2.0);
        assert!(p.velocity.y.abs() <= PARTICLE_SPEED_RANGE / 2.0);
        assert!(p.velocity.z.abs() <= PARTICLE_SPEED_RANGE / 2.0);
    }

    let mut expected = 1.0f32;
    let mut frames = 0;
    while !sim.particles.is_empty() {
        sim.tick(0.0, DT);
        frames += 1;
        expected -= PARTICLE_FADE_STEP;
        for p in &sim.particles {
            assert!((p.opacity - expected).abs() < 1e-4);
            assert!(p.opacity > 0.0, "no particle survives past zero opacity");
        }
        assert!(frames < 100, "particles must die out");
    }
    let lifetime = (1.0 / PARTICLE_FADE_STEP) as i32;
    assert!((frames - lifetime).abs() <= 1, "lifetime {frames} frames");
}

#[test]
fn particles_advance_by_velocity_each_frame() {
    let mut sim = isolated_sim();
    sim.emit_burst(Vec3::new(10.0, 20.0, 30.0));
    let velocities: Vec<Vec3> = sim.particles.iter().map(|p| p.velocity).collect();
    sim.tick(0.0, DT);
    for (p, v) in sim.particles.iter().zip(&velocities) {
        let expected = Vec3::new(10.0, 20.0, 30.0) + *v;
        assert!((p.position - expected).length() < 1e-4);
    }
}

#[test]
fn ooze_countdown_reverts_after_the_delay() {
    let mut sim = isolated_sim();
    sim.bodies[0].position = Vec3::ZERO;
    sim.bodies[1].position = Vec3::new(50.0, 0.0, 0.0);
    sim.tick(0.0, DT);
    assert_eq!(sim.bodies[0].scale, OOZE_SCALE);

    // Separate the pair, then let the countdown run out.
    sim.bodies[1].position = Vec3::new(10_000.0, 5_000.0, 0.0);
    sim.tick(0.0, OOZE_REVERT_SECS * 0.6);
    assert_eq!(sim.bodies[0].scale, OOZE_SCALE, "countdown still running");
    sim.tick(0.0, OOZE_REVERT_SECS * 0.6);
    assert_eq!(sim.bodies[0].scale, 1.0);
    assert!(sim.bodies[0].ooze_timer.is_none());
}

#[test]
fn retrigger_resets_the_countdown() {
    let mut sim = isolated_sim();
    sim.bodies[0].position = Vec3::ZERO;
    sim.bodies[1].position = Vec3::new(50.0, 0.0, 0.0);
    sim.tick(0.0, DT);

    // Still colliding: the next tick re-triggers and restores the full
    // countdown even though most of it had elapsed.
    sim.tick(0.0, OOZE_REVERT_SECS * 0.8);
    assert_eq!(sim.bodies[0].scale, OOZE_SCALE);

    sim.bodies[1].position = Vec3::new(10_000.0, 5_000.0, 0.0);
    sim.tick(0.0, OOZE_REVERT_SECS * 0.8);
    assert_eq!(sim.bodies[0].scale, OOZE_SCALE, "reset countdown not yet expired");
    sim.tick(0.0, OOZE_REVERT_SECS * 0.4);
    assert_eq!(sim.bodies[0].scale, 1.0);
}
