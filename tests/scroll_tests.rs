// Host-side tests for the page scroll tracker.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::*;

#[test]
fn progress_is_offset_over_total_clamped() {
    let cases: [(f64, f64); 5] = [
        (0.0, 2000.0),
        (500.0, 2000.0),
        (2000.0, 2000.0),
        (3500.0, 2000.0),
        (-40.0, 2000.0),
    ];
    for (offset, total) in cases {
        let expected = (offset / total).clamp(0.0, 1.0);
        assert!((scroll_progress(offset, total) - expected).abs() < 1e-12);
    }
}

#[test]
fn progress_with_nothing_to_scroll_is_zero() {
    assert_eq!(scroll_progress(0.0, 0.0), 0.0);
    assert_eq!(scroll_progress(250.0, 0.0), 0.0);
    // Content shorter than the viewport gives a negative scrollable height
    assert_eq!(scroll_progress(10.0, -300.0), 0.0);
}

#[test]
fn scroll_top_flag_is_strictly_past_one_viewport() {
    assert!(!show_scroll_top(0.0, 1000.0));
    assert!(!show_scroll_top(1000.0, 1000.0));
    assert!(show_scroll_top(1000.5, 1000.0));
}

#[test]
fn scroll_top_flag_reverts_when_scrolling_back() {
    let vh = 800.0;
    let seq = [0.0, 600.0, 900.0, 1200.0, 700.0, 100.0];
    let flags: Vec<bool> = seq.iter().map(|&o| show_scroll_top(o, vh)).collect();
    assert_eq!(flags, vec![false, false, true, true, false, false]);
}

#[test]
fn three_viewport_page_scrolled_to_1500() {
    let metrics = ScrollMetrics {
        offset: 1500.0,
        document_height: 3000.0,
        viewport_height: 1000.0,
    };
    assert_eq!(metrics.scrollable_height(), 2000.0);
    let snap = metrics.snapshot();
    // 1500 / (3000 - 1000)
    assert!((snap.progress - 0.75).abs() < 1e-12);
    assert!(snap.show_scroll_top);
    // Halfway is at 1000 for the same page
    let half = ScrollMetrics {
        offset: 1000.0,
        ..metrics
    };
    assert!((half.snapshot().progress - 0.5).abs() < 1e-12);
}

#[test]
fn short_page_snapshot_is_at_rest() {
    let metrics = ScrollMetrics {
        offset: 0.0,
        document_height: 700.0,
        viewport_height: 900.0,
    };
    assert_eq!(metrics.snapshot(), ScrollSnapshot::default());
}

#[test]
fn display_strings_track_progress() {
    let snap = ScrollSnapshot {
        progress: 0.25,
        show_scroll_top: false,
    };
    assert_eq!(snap.bar_width(), "25.000%");
    assert!(snap.glow_background().contains("50% 25.000%"));
}

fn metrics_at(offset: f64) -> ScrollMetrics {
    ScrollMetrics {
        offset,
        document_height: 3000.0,
        viewport_height: 1000.0,
    }
}

#[test]
fn tracker_reports_what_moved() {
    let mut tracker = ScrollTracker::default();
    assert_eq!(tracker.update(metrics_at(0.0)), ScrollChange::default());

    let change = tracker.update(metrics_at(500.0));
    assert!(change.progress);
    assert!(!change.show_scroll_top);

    let change = tracker.update(metrics_at(1500.0));
    assert!(change.progress && change.show_scroll_top);
    assert!(tracker.current().show_scroll_top);

    let change = tracker.update(metrics_at(200.0));
    assert!(change.show_scroll_top);
    assert!(!tracker.current().show_scroll_top);
}

#[test]
fn tracker_skips_repeated_signals() {
    let mut tracker = ScrollTracker::default();
    assert!(tracker.update(metrics_at(700.0)).any());
    assert!(!tracker.update(metrics_at(700.0)).any());
    // Past the end the clamped progress no longer moves
    assert!(tracker.update(metrics_at(2500.0)).any());
    assert!(!tracker.update(metrics_at(2600.0)).any());
}
