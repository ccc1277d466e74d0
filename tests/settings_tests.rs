// Host-side tests for the canvas settings provider and its handles.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod catalog {
    include!("../src/core/catalog.rs");
}
mod settings {
    include!("../src/core/settings.rs");
}

use catalog::TrailerKey;
use settings::*;

#[test]
fn provider_starts_on_requested_trailer() {
    let provider = CanvasSettingsProvider::new(TrailerKey::Mega);
    let s = provider.handle().get();
    assert_eq!(s.trailer, TrailerKey::Mega);
    assert_eq!(s.dimensions, TrailerKey::Mega.dimensions());
    assert_eq!(s.revision, 0);
    assert_eq!(CanvasSettingsProvider::default().handle().get().trailer, TrailerKey::Standard);
}

#[test]
fn handle_writes_are_visible_to_other_handles() {
    let provider = CanvasSettingsProvider::default();
    let writer = provider.handle();
    let reader = provider.handle();

    assert_eq!(writer.set_trailer(TrailerKey::ShipContainer20), Ok(true));
    let s = reader.get();
    assert_eq!(s.trailer, TrailerKey::ShipContainer20);
    assert_eq!(s.dimensions.length, 590.0);
    assert_eq!(provider.handle().get(), s);
    assert_eq!(s.revision, 1);
}

#[test]
fn reselecting_same_trailer_is_a_no_op() {
    let provider = CanvasSettingsProvider::default();
    let handle = provider.handle();
    assert_eq!(handle.set_trailer(TrailerKey::Standard), Ok(false));
    assert_eq!(handle.get().revision, 0);

    assert_eq!(handle.set_trailer(TrailerKey::Bus8Ep), Ok(true));
    assert_eq!(handle.set_trailer(TrailerKey::Bus8Ep), Ok(false));
    assert_eq!(handle.get().revision, 1);
}

#[test]
fn handle_outliving_provider_fails() {
    let handle = {
        let provider = CanvasSettingsProvider::default();
        provider.handle()
    };
    assert_eq!(handle.try_get(), Err(SettingsError::OutsideProvider));
    assert_eq!(
        handle.set_trailer(TrailerKey::Mega),
        Err(SettingsError::OutsideProvider)
    );
}

#[test]
#[should_panic(expected = "outside of their provider")]
fn reading_after_provider_dropped_panics() {
    let handle = CanvasSettingsProvider::new(TrailerKey::Bus10Ep).handle();
    handle.get();
}

#[test]
fn frame_reader_follows_sidebar_writes() {
    // one handle per consumer, as the page wires them
    let provider = CanvasSettingsProvider::default();
    let frame_reader = provider.handle();
    let sidebar = provider.handle();
    let mut seen = vec![frame_reader.get().trailer];
    for key in [TrailerKey::Bus8Ep, TrailerKey::Bus8Ep, TrailerKey::Mega] {
        sidebar.set_trailer(key).unwrap();
        let s = frame_reader.get();
        if seen.last() != Some(&s.trailer) {
            seen.push(s.trailer);
        }
    }
    assert_eq!(seen, [TrailerKey::Standard, TrailerKey::Bus8Ep, TrailerKey::Mega]);
    assert_eq!(frame_reader.get().revision, 2);
}
