// Host-side tests for the orbit camera.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod orbit {
    include!("../src/core/orbit.rs");
}

use glam::Vec3;
use orbit::*;
use std::f32::consts::FRAC_PI_2;

fn make_camera() -> OrbitCamera {
    OrbitCamera::new(
        Vec3::new(10.0, 8.0, 15.0),
        Vec3::ZERO,
        45.0,
        OrbitLimits {
            min_distance: 6.0,
            max_distance: 25.0,
            max_polar: FRAC_PI_2,
        },
    )
}

#[test]
fn starts_at_given_eye() {
    let cam = make_camera();
    let eye = cam.eye();
    assert!((eye - Vec3::new(10.0, 8.0, 15.0)).length() < 1e-3, "{eye:?}");
    assert!((cam.distance() - 389f32.sqrt()).abs() < 1e-3);
}

#[test]
fn zoom_is_clamped_to_limits() {
    let mut cam = make_camera();
    for _ in 0..200 {
        cam.zoom(100.0);
    }
    assert!((cam.distance() - 25.0).abs() < 1e-3);
    for _ in 0..200 {
        cam.zoom(-100.0);
    }
    assert!((cam.distance() - 6.0).abs() < 1e-3);
}

#[test]
fn zoom_steps_are_multiplicative() {
    let mut cam = make_camera();
    let before = cam.radius;
    cam.zoom(-1.0);
    assert!((cam.radius - before * 0.95).abs() < 1e-4);
    cam.zoom(1.0);
    assert!((cam.radius - before).abs() < 1e-4);
    cam.zoom(0.0);
    assert!((cam.radius - before).abs() < 1e-4);
}

#[test]
fn camera_never_goes_below_ground() {
    let mut cam = make_camera();
    // dragging up pushes the eye down toward the horizon
    cam.rotate_by_pixels(0.0, -5000.0, 800.0);
    assert!(cam.polar <= FRAC_PI_2 + 1e-6);
    assert!(cam.eye().y >= -1e-4);
}

#[test]
fn camera_stops_short_of_the_pole() {
    let mut cam = make_camera();
    cam.rotate_by_pixels(0.0, 5000.0, 800.0);
    assert!(cam.polar > 0.0);
    let eye = cam.eye();
    assert!(eye.x.is_finite() && eye.z.is_finite());
    assert!(cam.view_proj(1.5).is_finite());
}

#[test]
fn full_height_drag_is_one_revolution() {
    let mut cam = make_camera();
    let before = cam.eye();
    cam.rotate_by_pixels(800.0, 0.0, 800.0);
    assert!((cam.eye() - before).length() < 1e-3);
}

#[test]
fn rotation_keeps_distance() {
    let mut cam = make_camera();
    let d = cam.distance();
    cam.rotate_by_pixels(123.0, 45.0, 700.0);
    assert!((cam.distance() - d).abs() < 1e-3);
}

#[test]
fn zero_height_viewport_ignores_drag() {
    let mut cam = make_camera();
    let before = (cam.azimuth, cam.polar);
    cam.rotate_by_pixels(50.0, 50.0, 0.0);
    assert_eq!(before, (cam.azimuth, cam.polar));
}

#[test]
fn initial_eye_outside_limits_is_clamped() {
    let cam = OrbitCamera::new(
        Vec3::new(0.0, 1.0, 100.0),
        Vec3::ZERO,
        45.0,
        OrbitLimits {
            min_distance: 6.0,
            max_distance: 25.0,
            max_polar: FRAC_PI_2,
        },
    );
    assert!((cam.distance() - 25.0).abs() < 1e-3);
}

#[test]
fn damped_drag_eases_toward_the_undamped_pose() {
    let mut instant = make_camera();
    let mut damped = make_camera().with_damping(0.05);
    instant.rotate_by_pixels(120.0, 40.0, 800.0);
    damped.rotate_by_pixels(120.0, 40.0, 800.0);

    // nothing moves until the frame loop ticks
    assert_eq!(damped.azimuth, make_camera().azimuth);

    let start_az = make_camera().azimuth;
    assert!(damped.update());
    let first_step = damped.azimuth - start_az;
    let full = instant.azimuth - start_az;
    assert!((first_step - full * 0.05).abs() < 1e-5);

    let mut frames = 1;
    while damped.update() {
        frames += 1;
        assert!(frames < 1000, "damping never settled");
    }
    assert!((damped.eye() - instant.eye()).length() < 1e-3);
    assert!(!damped.update());
}

#[test]
fn damped_rotation_respects_polar_limit() {
    let mut cam = make_camera().with_damping(0.05);
    cam.rotate_by_pixels(0.0, -5000.0, 800.0);
    while cam.update() {
        assert!(cam.polar <= FRAC_PI_2 + 1e-6);
    }
    assert!(cam.eye().y >= -1e-4);
}

#[test]
fn undamped_camera_update_is_idle() {
    let mut cam = make_camera();
    cam.rotate_by_pixels(10.0, 0.0, 800.0);
    let az = cam.azimuth;
    assert!(!cam.update());
    assert_eq!(cam.azimuth, az);
}
