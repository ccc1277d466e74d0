// Host-side tests for colour helpers and the page colour mode.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod color {
    include!("../src/core/color.rs");
}
mod theme {
    include!("../src/core/theme.rs");
}

use color::*;
use theme::*;

fn close(a: [f32; 3], b: [f32; 3]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
}

#[test]
fn hsl_primaries() {
    assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
    assert!(close(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
    assert!(close(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0.0, 0.0, 1.0]));
    assert!(close(hsl_to_rgb(0.25, 0.0, 0.3), [0.3, 0.3, 0.3]));
}

#[test]
fn hue_cycles_every_seventy_two_seconds() {
    // 5 degrees per second wraps after 72 s
    assert!(close(cycling_hue_rgb(0.0, 5.0), cycling_hue_rgb(72.0, 5.0)));
    assert!(close(cycling_hue_rgb(24.0, 5.0), [0.0, 1.0, 0.0]));
}

#[test]
fn srgb_conversion_endpoints() {
    assert!(srgb_to_linear(0.0).abs() < 1e-6);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-4);
    assert!((srgb_to_linear(0.5) - 0.214).abs() < 1e-3);
    assert!(close(hex_to_linear(0xffffff), [1.0, 1.0, 1.0]));
    assert!(close(hex_to_linear(0x000000), [0.0, 0.0, 0.0]));
    let bg = hex_to_linear(0x292828);
    assert!(bg[0] > bg[2]);
}

#[test]
fn theme_toggles_back_and_forth() {
    assert_eq!(ColorMode::default(), ColorMode::Light);
    assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
    assert_eq!(ColorMode::Light.toggled().toggled(), ColorMode::Light);
    assert_eq!(ColorMode::Dark.as_str(), "dark");
    assert_ne!(ColorMode::Light.palette(), ColorMode::Dark.palette());
}
