// One-shot visibility latch.
//
// A section starts hidden and becomes revealed the first time enough of it
// intersects the viewport. Once revealed it stays revealed: later samples,
// including a ratio back at zero, are ignored.
//
// The threshold is a fraction of the largest area the target can ever show.
// A target taller than the root never exceeds `root / target` of its own
// area, so its required ratio shrinks by the same factor.

/// One intersection observation delivered by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntersectionSample {
    /// Visible fraction of the target's area, in [0, 1].
    pub ratio: f64,
    /// Host-reported intersection state.
    pub is_intersecting: bool,
    /// Largest ratio the target can reach inside the root, in [0, 1].
    pub max_ratio: f64,
}

impl IntersectionSample {
    pub fn new(ratio: f64, is_intersecting: bool) -> Self {
        Self {
            ratio,
            is_intersecting,
            max_ratio: 1.0,
        }
    }

    pub fn with_max_ratio(mut self, max_ratio: f64) -> Self {
        self.max_ratio = max_ratio;
        self
    }
}

/// Largest visible fraction of a target of `target_height` inside a root of
/// `root_height`. Unknown or empty geometry counts as fully showable.
#[inline]
pub fn max_visible_ratio(target_height: f64, root_height: f64) -> f64 {
    if target_height <= 0.0 || root_height <= 0.0 || !target_height.is_finite() {
        return 1.0;
    }
    (root_height / target_height).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchTransition {
    /// This sample flipped the latch from hidden to revealed.
    Revealed,
    /// Nothing changed (still hidden, or already revealed).
    Unchanged,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    revealed: bool,
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            threshold,
            revealed: false,
        }
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Ratio a target with the given `max_ratio` must reach to reveal.
    #[inline]
    pub fn required_ratio(&self, max_ratio: f64) -> f64 {
        let max_ratio = if max_ratio.is_finite() {
            max_ratio.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.threshold * max_ratio
    }

    /// Ratios the host observer should report on: entry plus both the plain
    /// and the height-scaled threshold.
    pub fn observer_thresholds(&self, max_ratio: f64) -> Vec<f64> {
        let mut steps = vec![0.0, self.required_ratio(max_ratio), self.threshold];
        steps.sort_by(f64::total_cmp);
        steps.dedup();
        steps
    }

    /// Feed one observation. Returns `Revealed` at most once per latch.
    pub fn observe(&mut self, sample: IntersectionSample) -> LatchTransition {
        if self.revealed {
            return LatchTransition::Unchanged;
        }
        if sample.is_intersecting && sample.ratio >= self.required_ratio(sample.max_ratio) {
            self.revealed = true;
            return LatchTransition::Revealed;
        }
        LatchTransition::Unchanged
    }

    /// Reveal without an intersection sample (timed entrances).
    pub fn force_reveal(&mut self) -> LatchTransition {
        if self.revealed {
            LatchTransition::Unchanged
        } else {
            self.revealed = true;
            LatchTransition::Revealed
        }
    }
}
