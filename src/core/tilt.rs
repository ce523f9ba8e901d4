// Pointer-relative tilt for the hero image.

use glam::Vec2;

pub const DEFAULT_TILT_SENSITIVITY: f32 = 15.0; // degrees per unit of normalized offset
pub const DEFAULT_PERSPECTIVE_PX: f32 = 1000.0;

/// Client-space bounding box of the reference region.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position relative to the box center, normalized by box size.
///
/// The center maps to (0, 0) and the edges to +-0.5. A box without area
/// yields zero rather than dividing by it.
#[inline]
pub fn pointer_offset(rect: BoundingBox, px: f64, py: f64) -> Vec2 {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Vec2::ZERO;
    }
    let nx = (px - rect.left - rect.width / 2.0) / rect.width;
    let ny = (py - rect.top - rect.height / 2.0) / rect.height;
    Vec2::new(nx as f32, ny as f32)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltParams {
    pub sensitivity: f32,
    pub perspective_px: f32,
    /// Return to neutral when the pointer leaves the region. Off by default:
    /// the last tilt persists.
    pub reset_on_leave: bool,
}

impl Default for TiltParams {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_TILT_SENSITIVITY,
            perspective_px: DEFAULT_PERSPECTIVE_PX,
            reset_on_leave: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltState {
    params: TiltParams,
    tilt: Vec2,
}

impl TiltState {
    pub fn new(params: TiltParams) -> Self {
        Self {
            params,
            tilt: Vec2::ZERO,
        }
    }

    /// Current tilt in degrees: x drives rotateY, y drives rotateX.
    #[inline]
    pub fn tilt(&self) -> Vec2 {
        self.tilt
    }

    pub fn on_pointer_move(&mut self, rect: BoundingBox, px: f64, py: f64) -> Vec2 {
        self.tilt = pointer_offset(rect, px, py) * self.params.sensitivity;
        self.tilt
    }

    /// Returns true when the tilt was reset.
    pub fn on_pointer_leave(&mut self) -> bool {
        if self.params.reset_on_leave && self.tilt != Vec2::ZERO {
            self.tilt = Vec2::ZERO;
            return true;
        }
        false
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective({:.0}px) rotateY({:.3}deg) rotateX({:.3}deg)",
            self.params.perspective_px, self.tilt.x, -self.tilt.y
        )
    }
}
