// Shared simulation/visual tuning constants used by the web frontend.

// Scene offset smoothing
pub const OFFSET_FALLOFF: f32 = 0.05; // per-frame low-pass toward the shape target

// Cube proxies (one per peer window)
pub const CUBE_BASE_SIZE: f32 = 100.0; // edge length of the first proxy
pub const CUBE_SIZE_STEP: f32 = 50.0; // growth per peer index
pub const CUBE_HUE_STEP: f32 = 0.1; // hue wheel step per peer index
pub const CUBE_ROT_RATE_X: f32 = 0.005; // radians per frame at animation speed 1.0
pub const CUBE_ROT_RATE_Y: f32 = 0.01;

// Sphere bodies
pub const SPHERE_COUNT: usize = 5;
pub const SPHERE_RADIUS: f32 = 50.0;
pub const SPHERE_DEPTH_RANGE: f32 = 100.0; // initial z placed in [0, range]
pub const WIGGLE_INTENSITY: f32 = 0.05; // shared-phase jitter amplitude
pub const COLLISION_DISTANCE: f32 = 100.0;
pub const ABSORB_DISTANCE: f32 = 10.0; // at or under this, suction absorbs
pub const SUCTION_SPEED: f32 = 0.05; // lerp factor per frame toward the target
pub const OOZE_SCALE: f32 = 1.1;
pub const OOZE_REVERT_SECS: f32 = 0.5;
pub const ABSORB_GROWTH: f32 = 1.2; // absorber scale multiplier, compounds

// Particles
pub const PARTICLE_BURST: usize = 20; // particles per emission
pub const PARTICLE_RADIUS: f32 = 5.0;
pub const PARTICLE_SPEED_RANGE: f32 = 20.0; // per-axis velocity in [-range/2, range/2]
pub const PARTICLE_FADE_STEP: f32 = 0.02; // opacity lost per frame

// Camera
pub const CAMERA_Z: f32 = 1000.0;
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4; // 45 degrees
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 10000.0;

// Interaction
pub const CLICK_SPEED_BOOST: f32 = 0.25; // added to animation speed per hit
pub const HIGHLIGHT_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

// Fixed palette for the micro-simulation
pub const SPHERE_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
pub const SPHERE_OPACITY: f32 = 0.9;
pub const PARTICLE_COLOR: [f32; 3] = [1.0, 1.0, 0.0];
