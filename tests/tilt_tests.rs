// Host-side tests for pointer-relative tilt.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod tilt {
    include!("../src/core/tilt.rs");
}

use glam::Vec2;
use tilt::*;

const BOX: BoundingBox = BoundingBox {
    left: 100.0,
    top: 50.0,
    width: 200.0,
    height: 100.0,
};

#[test]
fn center_is_neutral() {
    let mut t = TiltState::new(TiltParams::default());
    assert_eq!(t.on_pointer_move(BOX, 200.0, 100.0), Vec2::ZERO);
}

#[test]
fn right_edge_mid_height_is_half_sensitivity() {
    let mut t = TiltState::new(TiltParams::default());
    let tilt = t.on_pointer_move(BOX, 300.0, 100.0);
    assert!((tilt.x - DEFAULT_TILT_SENSITIVITY / 2.0).abs() < 1e-6);
    assert!(tilt.y.abs() < 1e-6);
}

#[test]
fn offset_is_normalized_by_box_size() {
    let o = pointer_offset(BOX, 100.0, 50.0);
    assert!((o.x + 0.5).abs() < 1e-6);
    assert!((o.y + 0.5).abs() < 1e-6);
    let o = pointer_offset(BOX, 250.0, 125.0);
    assert!((o.x - 0.25).abs() < 1e-6);
    assert!((o.y - 0.25).abs() < 1e-6);
}

#[test]
fn empty_box_yields_zero() {
    let empty = BoundingBox {
        left: 10.0,
        top: 10.0,
        width: 0.0,
        height: 40.0,
    };
    assert_eq!(pointer_offset(empty, 15.0, 20.0), Vec2::ZERO);
}

#[test]
fn leave_keeps_last_tilt_by_default() {
    let mut t = TiltState::new(TiltParams::default());
    let last = t.on_pointer_move(BOX, 280.0, 60.0);
    assert!(!t.on_pointer_leave());
    assert_eq!(t.tilt(), last);
}

#[test]
fn leave_resets_when_enabled() {
    let mut t = TiltState::new(TiltParams {
        reset_on_leave: true,
        ..TiltParams::default()
    });
    t.on_pointer_move(BOX, 280.0, 60.0);
    assert!(t.on_pointer_leave());
    assert_eq!(t.tilt(), Vec2::ZERO);
    // Already neutral
    assert!(!t.on_pointer_leave());
}

#[test]
fn transform_negates_vertical_rotation() {
    let mut t = TiltState::new(TiltParams {
        sensitivity: 10.0,
        ..TiltParams::default()
    });
    // nx = 0.5, ny = 0.5
    t.on_pointer_move(BOX, 300.0, 150.0);
    assert_eq!(
        t.transform(),
        "perspective(1000px) rotateY(5.000deg) rotateX(-5.000deg)"
    );
}

#[test]
fn repeated_position_keeps_tilt() {
    let mut t = TiltState::new(TiltParams::default());
    let first = t.on_pointer_move(BOX, 260.0, 80.0);
    assert_eq!(t.tilt(), first);
    assert_eq!(t.on_pointer_move(BOX, 260.0, 80.0), first);
    assert_ne!(t.on_pointer_move(BOX, 140.0, 80.0), first);
}
