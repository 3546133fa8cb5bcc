// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn css_point_maps_to_backing_pixels() {
    // 2x device pixel ratio
    let p = css_to_canvas_px(
        Vec2::new(100.0, 50.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(p, Vec2::new(200.0, 100.0));
}

#[test]
fn css_point_identity_when_sizes_match() {
    let size = Vec2::new(1280.0, 720.0);
    let p = css_to_canvas_px(Vec2::new(12.5, 700.0), size, size);
    assert_eq!(p, Vec2::new(12.5, 700.0));
}

#[test]
fn degenerate_box_maps_to_origin() {
    let p = css_to_canvas_px(Vec2::new(10.0, 10.0), Vec2::new(0.0, 300.0), Vec2::new(800.0, 600.0));
    assert_eq!(p, Vec2::ZERO);
}

#[test]
fn pointer_state_tracks_enter_and_leave() {
    let mut state = PointerState::default();
    assert_eq!(state.position, None);
    state.moved_to(Vec2::new(3.0, 4.0));
    assert_eq!(state.position, Some(Vec2::new(3.0, 4.0)));
    state.left();
    assert_eq!(state.position, None);
}
