// Page-level scroll tracking.
//
// Maps the window scroll offset onto a normalized progress value for the
// top progress bar and a flag for the "scroll to top" button.

/// Raw host measurements taken once per scroll signal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset (`window.scrollY`).
    pub offset: f64,
    /// Full document height (`documentElement.scrollHeight`).
    pub document_height: f64,
    /// Viewport height (`window.innerHeight`).
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Distance the document can actually scroll.
    #[inline]
    pub fn scrollable_height(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            progress: scroll_progress(self.offset, self.scrollable_height()),
            show_scroll_top: show_scroll_top(self.offset, self.viewport_height),
        }
    }
}

/// Fraction of the scrollable height already scrolled, in [0, 1].
///
/// Content no taller than the viewport has nothing to scroll and reports 0.
#[inline]
pub fn scroll_progress(offset: f64, total: f64) -> f64 {
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }
    (offset / total).clamp(0.0, 1.0)
}

/// True once the user has scrolled strictly past one viewport height.
#[inline]
pub fn show_scroll_top(offset: f64, viewport_height: f64) -> bool {
    offset > viewport_height
}

/// Derived scroll state. Recomputed on every signal, never latched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub progress: f64,
    pub show_scroll_top: bool,
}

impl ScrollSnapshot {
    /// Progress as a CSS percentage (bar width, glow anchor).
    #[inline]
    pub fn progress_percent(&self) -> f64 {
        self.progress * 100.0
    }

    pub fn bar_width(&self) -> String {
        format!("{:.3}%", self.progress_percent())
    }

    pub fn glow_background(&self) -> String {
        format!(
            "radial-gradient(ellipse at 50% {:.3}%, rgba(255, 107, 0, 0.05) 0%, transparent 50%)",
            self.progress_percent()
        )
    }
}

/// Which parts of the snapshot moved on the last update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollChange {
    pub progress: bool,
    pub show_scroll_top: bool,
}

impl ScrollChange {
    #[inline]
    pub fn any(&self) -> bool {
        self.progress || self.show_scroll_top
    }
}

/// Latest snapshot plus change detection, so unchanged signals skip the
/// style writes entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    current: ScrollSnapshot,
}

impl ScrollTracker {
    #[inline]
    pub fn current(&self) -> ScrollSnapshot {
        self.current
    }

    pub fn update(&mut self, metrics: ScrollMetrics) -> ScrollChange {
        let next = metrics.snapshot();
        let change = ScrollChange {
            progress: next.progress != self.current.progress,
            show_scroll_top: next.show_scroll_top != self.current.show_scroll_top,
        };
        self.current = next;
        change
    }
}
