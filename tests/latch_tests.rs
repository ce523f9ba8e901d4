// Host-side tests for the one-shot visibility latch.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod latch {
    include!("../src/core/latch.rs");
}

use latch::*;

#[test]
fn starts_hidden() {
    let l = VisibilityLatch::new(0.2);
    assert!(!l.is_revealed());
    assert_eq!(l.threshold(), 0.2);
}

#[test]
fn below_threshold_does_not_reveal() {
    let mut l = VisibilityLatch::new(0.2);
    assert_eq!(
        l.observe(IntersectionSample::new(0.1, true)),
        LatchTransition::Unchanged
    );
    assert!(!l.is_revealed());
}

#[test]
fn crossing_threshold_reveals_once() {
    let mut l = VisibilityLatch::new(0.2);
    assert_eq!(
        l.observe(IntersectionSample::new(0.25, true)),
        LatchTransition::Revealed
    );
    assert_eq!(
        l.observe(IntersectionSample::new(0.9, true)),
        LatchTransition::Unchanged
    );
    assert!(l.is_revealed());
}

#[test]
fn stays_revealed_after_scrolling_out() {
    let mut l = VisibilityLatch::new(0.2);
    let events = [
        IntersectionSample::new(0.0, false),
        IntersectionSample::new(0.3, true),
        IntersectionSample::new(0.1, true),
        IntersectionSample::new(0.0, false),
        IntersectionSample::new(0.0, false),
    ];
    let mut revealed = Vec::new();
    for ev in events {
        l.observe(ev);
        revealed.push(l.is_revealed());
    }
    assert_eq!(revealed, vec![false, true, true, true, true]);
}

#[test]
fn ratio_without_intersection_is_ignored() {
    let mut l = VisibilityLatch::new(0.0);
    assert_eq!(
        l.observe(IntersectionSample::new(0.0, false)),
        LatchTransition::Unchanged
    );
    assert_eq!(
        l.observe(IntersectionSample::new(0.0, true)),
        LatchTransition::Revealed
    );
}

#[test]
fn threshold_is_clamped() {
    assert_eq!(VisibilityLatch::new(1.7).threshold(), 1.0);
    assert_eq!(VisibilityLatch::new(-0.5).threshold(), 0.0);
    assert_eq!(VisibilityLatch::new(f64::NAN).threshold(), 0.0);
}

#[test]
fn force_reveal_is_one_shot() {
    let mut l = VisibilityLatch::default();
    assert_eq!(l.force_reveal(), LatchTransition::Revealed);
    assert_eq!(l.force_reveal(), LatchTransition::Unchanged);
    assert_eq!(
        l.observe(IntersectionSample::new(1.0, true)),
        LatchTransition::Unchanged
    );
}

#[test]
fn section_taller_than_the_root_still_reveals() {
    // 6000px section inside a 900px root can show at most 0.15 of itself
    let max = max_visible_ratio(6000.0, 900.0);
    assert!((max - 0.15).abs() < 1e-12);

    let mut l = VisibilityLatch::new(0.2);
    let mut transitions = Vec::new();
    for ratio in [0.0, 0.01, 0.02, 0.05, 0.1, 0.15] {
        let sample = IntersectionSample::new(ratio, ratio > 0.0).with_max_ratio(max);
        transitions.push(l.observe(sample));
    }
    assert!(l.is_revealed());
    // 0.2 of the showable 0.15 is 0.03, first reached at 0.05
    assert_eq!(transitions[3], LatchTransition::Revealed);
    assert!(transitions[..3].iter().all(|t| *t == LatchTransition::Unchanged));
}

#[test]
fn short_sections_keep_the_plain_threshold() {
    assert_eq!(max_visible_ratio(400.0, 900.0), 1.0);
    let mut l = VisibilityLatch::new(0.2);
    let sample =
        IntersectionSample::new(0.15, true).with_max_ratio(max_visible_ratio(400.0, 900.0));
    assert_eq!(l.observe(sample), LatchTransition::Unchanged);
}

#[test]
fn unknown_geometry_counts_as_fully_showable() {
    assert_eq!(max_visible_ratio(0.0, 900.0), 1.0);
    assert_eq!(max_visible_ratio(500.0, 0.0), 1.0);
    assert_eq!(max_visible_ratio(f64::INFINITY, 900.0), 1.0);
    assert_eq!(VisibilityLatch::new(0.2).required_ratio(f64::NAN), 0.2);
}

#[test]
fn observer_steps_cover_entry_and_both_thresholds() {
    let l = VisibilityLatch::new(0.2);
    let steps = l.observer_thresholds(0.15);
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0], 0.0);
    assert!((steps[1] - 0.03).abs() < 1e-12);
    assert_eq!(steps[2], 0.2);
    assert_eq!(l.observer_thresholds(1.0), vec![0.0, 0.2]);
}

#[test]
fn unobservable_section_reveals_through_fallback() {
    // Sections whose observer cannot be created are revealed on the spot
    let mut l = VisibilityLatch::new(0.2);
    assert_eq!(l.force_reveal(), LatchTransition::Revealed);
    assert!(l.is_revealed());
    assert_eq!(
        l.observe(IntersectionSample::new(0.0, false)),
        LatchTransition::Unchanged
    );
    assert!(l.is_revealed());
}
