// Per-section parallax progress.
//
// Unlike the visibility latch this value is continuous and reversible: it
// follows the section up and down the viewport as the user scrolls.

use std::f64::consts::PI;

pub const DEFAULT_IMAGE_TRAVEL: f64 = 100.0; // px of background shift across the transit
pub const DEFAULT_CONTENT_TRAVEL: f64 = 30.0; // px of opposite foreground shift
pub const DEFAULT_SCALE_BUMP: f64 = 0.05; // extra scale at mid-transit

/// Section position relative to the viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionGeometry {
    /// Distance from the viewport's top edge to the section's top edge.
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

/// 0 while the section is entirely below the viewport, 1 once it has fully
/// passed above it, linear in between.
///
/// Independent of the document height, so it is valid for any section on a
/// long page.
#[inline]
pub fn section_progress(geometry: SectionGeometry) -> f64 {
    let span = geometry.viewport_height + geometry.height;
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }
    let raw = (geometry.viewport_height - geometry.top) / span;
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxParams {
    pub image_travel: f64,
    pub content_travel: f64,
    pub scale_bump: f64,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            image_travel: DEFAULT_IMAGE_TRAVEL,
            content_travel: DEFAULT_CONTENT_TRAVEL,
            scale_bump: DEFAULT_SCALE_BUMP,
        }
    }
}

impl ParallaxParams {
    /// Display values for a given progress. Pure; never stored.
    pub fn frame(&self, progress: f64) -> ParallaxFrame {
        ParallaxFrame {
            image_offset: (progress - 0.5) * self.image_travel,
            content_offset: (progress - 0.5) * -self.content_travel,
            scale: 1.0 + (progress * PI).sin() * self.scale_bump,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxFrame {
    pub image_offset: f64,
    pub content_offset: f64,
    pub scale: f64,
}

impl ParallaxFrame {
    pub fn image_transform(&self) -> String {
        format!(
            "translateY({:.3}px) scale({:.5})",
            self.image_offset, self.scale
        )
    }

    pub fn content_transform(&self) -> String {
        format!("translateY({:.3}px)", self.content_offset)
    }
}

/// Last computed progress for one section.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionProgress {
    progress: f64,
}

impl SectionProgress {
    #[inline]
    pub fn get(&self) -> f64 {
        self.progress
    }

    /// Recompute from fresh geometry; returns true when the value moved.
    pub fn update(&mut self, geometry: SectionGeometry) -> bool {
        let next = section_progress(geometry);
        let changed = next != self.progress;
        self.progress = next;
        changed
    }
}
