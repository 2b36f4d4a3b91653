use crate::binder::CubeProxy;
use crate::constants::{CAMERA_FOVY, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Compute a world-space ray from canvas pixel coordinates through the fixed
/// scene camera (eye on the +Z axis looking at the origin).
///
/// Returns `(ray_origin, ray_direction)`.
pub fn screen_to_world_ray(width: f32, height: f32, sx: f32, sy: f32) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let aspect = width / height.max(1.0);
    let proj = Mat4::perspective_rh(CAMERA_FOVY, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
    let inv = (proj * view).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = Vec3::new(0.0, 0.0, CAMERA_Z);
    let rd = (p1 - ro).normalize();
    (ro, rd)
}

/// Slab-method ray vs axis-aligned cube. Returns the entry distance, or the
/// exit distance when the origin is inside the box.
pub fn ray_box(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, half_extent: f32) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = ray_origin[axis];
        let d = ray_dir[axis];
        let lo = center[axis] - half_extent;
        let hi = center[axis] + half_extent;
        if d.abs() < 1e-8 {
            // Parallel to this slab; inside it or no hit at all.
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let (t0, t1) = {
            let a = (lo - o) * inv;
            let b = (hi - o) * inv;
            if a < b {
                (a, b)
            } else {
                (b, a)
            }
        };
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    if t_max < 0.0 {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

/// Nearest cube proxy hit by the ray, if any. `world_offset` is the scene
/// translation applied before drawing, so hit testing happens where the
/// proxies actually render.
pub fn pick(
    ray_origin: Vec3,
    ray_dir: Vec3,
    proxies: &[CubeProxy],
    world_offset: Vec2,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, proxy) in proxies.iter().enumerate() {
        let center = Vec3::new(
            proxy.position.x + world_offset.x,
            proxy.position.y + world_offset.y,
            0.0,
        );
        if let Some(t) = ray_box(ray_origin, ray_dir, center, proxy.size * 0.5) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
