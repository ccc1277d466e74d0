// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_limits_are_consistent() {
    assert!(ORBIT_MIN_DISTANCE > 0.0);
    assert!(ORBIT_MIN_DISTANCE < ORBIT_MAX_DISTANCE);
    assert!(ORBIT_MAX_POLAR > 0.0 && ORBIT_MAX_POLAR <= std::f32::consts::FRAC_PI_2);
    let start = glam::Vec3::from_array(CAMERA_START).length();
    assert!(start >= ORBIT_MIN_DISTANCE && start <= ORBIT_MAX_DISTANCE);
    assert!(CAMERA_START[1] > 0.0);
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn material_weights_are_normalised() {
    assert!(BOX_OPACITY > 0.0 && BOX_OPACITY < 1.0);
    assert!(AMBIENT_INTENSITY >= 0.0 && AMBIENT_INTENSITY <= 1.0);
    assert!(DIRECTIONAL_INTENSITY >= 0.0 && DIRECTIONAL_INTENSITY <= 1.0);
    assert!(BLOOM_THRESHOLD >= 0.0 && BLOOM_THRESHOLD < 1.0);
    assert!(BLOOM_SMOOTHING > 0.0 && BLOOM_SMOOTHING <= 1.0);
    assert!(FOG_DENSITY > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_sections_contain_whole_cells() {
    assert!(GRID_CELL_SIZE > 0.0);
    let cells = GRID_SECTION_SIZE / GRID_CELL_SIZE;
    assert!((cells - cells.round()).abs() < 1e-6);
    assert!(GRID_FADE_DISTANCE > ORBIT_MAX_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_layout() {
    assert!(WORLD_SCALE > 0.0);
    assert!(SCALE_BAR_TARGET_PX > 0.0);
    // longest trailer stays inside the zoom-out range
    assert!(1360.0 * WORLD_SCALE < ORBIT_MAX_DISTANCE);
    assert!(TRUCK_SCALE > 0.0);
}

#[test]
fn asset_paths_and_credits() {
    assert!(TRUCK_MODEL_PATH.starts_with('/'));
    assert!(TRUCK_MODEL_PATH.ends_with(".glb"));
    assert!(CREDITS_MODEL_URL.starts_with("https://"));
    assert!(!CREDITS_MODEL_NAME.is_empty());
}
