use multiwin_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_valid_lerp_weights() {
    assert!(OFFSET_FALLOFF > 0.0 && OFFSET_FALLOFF < 1.0);
    assert!(SUCTION_SPEED > 0.0 && SUCTION_SPEED < 1.0);
    assert!(PARTICLE_FADE_STEP > 0.0 && PARTICLE_FADE_STEP < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_distances_are_ordered() {
    assert!(COLLISION_DISTANCE > ABSORB_DISTANCE);
    assert!(ABSORB_DISTANCE > 0.0);
    assert!(SPHERE_RADIUS < COLLISION_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_and_growth_factors_enlarge() {
    assert!(OOZE_SCALE > 1.0);
    assert!(ABSORB_GROWTH > 1.0);
    assert!(OOZE_REVERT_SECS > 0.0);
    assert!(WIGGLE_INTENSITY > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_lifetime_is_a_whole_number_of_frames() {
    let frames = 1.0 / PARTICLE_FADE_STEP;
    assert!((frames - frames.round()).abs() < 1e-3);
    assert!(PARTICLE_BURST > 0);
    assert!(PARTICLE_SPEED_RANGE > 0.0);
    assert!(PARTICLE_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_planes_are_ordered() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_Z < CAMERA_ZFAR);
    assert!(CAMERA_FOVY > 0.0 && CAMERA_FOVY < std::f32::consts::PI);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn proxy_sizing_grows_with_index() {
    assert!(CUBE_BASE_SIZE > 0.0);
    assert!(CUBE_SIZE_STEP > 0.0);
    assert!(CUBE_HUE_STEP > 0.0 && CUBE_HUE_STEP <= 1.0);
    assert!(CUBE_ROT_RATE_X > 0.0 && CUBE_ROT_RATE_Y > 0.0);
    assert!(CLICK_SPEED_BOOST > 0.0);
}
