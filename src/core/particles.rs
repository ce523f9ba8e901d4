// Decorative particle layouts: the page-wide floating field and the lotus
// petal ring around the aarti diya.

use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f32,
    pub top_pct: f32,
    pub size_px: f32,
    pub delay_s: f32,
    pub duration_s: f32,
    pub opacity: f32,
}

impl Particle {
    /// Inline style for an absolutely positioned particle element.
    pub fn style(&self) -> String {
        format!(
            "left:{:.2}%;top:{:.2}%;width:{:.1}px;height:{:.1}px;opacity:{:.2};animation-delay:{:.2}s;animation-duration:{:.2}s",
            self.left_pct,
            self.top_pct,
            self.size_px,
            self.size_px,
            self.opacity,
            self.delay_s,
            self.duration_s
        )
    }
}

pub const PETAL_SIZE_PX: f32 = 30.0;
pub const PETAL_OPACITY: f32 = 1.0;

/// Fixed ring of petals spread across three rows.
pub fn petal_ring(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let f = i as f32;
            Particle {
                left_pct: 15.0 + f * 15.0,
                top_pct: 20.0 + (i % 3) as f32 * 25.0,
                size_px: PETAL_SIZE_PX,
                delay_s: f * 1.5,
                duration_s: 8.0 + f * 2.0,
                opacity: PETAL_OPACITY,
            }
        })
        .collect()
}

// Field particle ranges
const FIELD_SIZE_PX: (f32, f32) = (2.0, 6.0);
const FIELD_DELAY_S: (f32, f32) = (0.0, 10.0);
const FIELD_DURATION_S: (f32, f32) = (10.0, 25.0);
const FIELD_OPACITY: (f32, f32) = (0.2, 0.7);

/// Pseudo-random but reproducible field: the same seed lays out the same
/// particles.
pub fn particle_field(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Particle {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            size_px: rng.gen_range(FIELD_SIZE_PX.0..FIELD_SIZE_PX.1),
            delay_s: rng.gen_range(FIELD_DELAY_S.0..FIELD_DELAY_S.1),
            duration_s: rng.gen_range(FIELD_DURATION_S.0..FIELD_DURATION_S.1),
            opacity: rng.gen_range(FIELD_OPACITY.0..FIELD_OPACITY.1),
        })
        .collect()
}
