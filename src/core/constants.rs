// Visual tuning constants shared by the page sections.

// Reveal latches
pub const VERSE_REVEAL_THRESHOLD: f64 = 0.2; // fraction of the section that must be visible
pub const VERSE_ROOT_MARGIN: &str = "-50px"; // shrink the viewport so reveals start a bit later
pub const AARTI_REVEAL_THRESHOLD: f64 = 0.2;
pub const AARTI_ROOT_MARGIN: &str = "0px";

// Hero entrance fires on a timer instead of on intersection
pub const HERO_ENTRANCE_DELAY_MS: i32 = 100;

// Decorations
pub const PARTICLE_FIELD_COUNT: usize = 24;
pub const PARTICLE_FIELD_SEED: u64 = 108;
pub const AARTI_PETAL_COUNT: usize = 6;

// Reveal markers written on revealed elements
pub const REVEAL_ATTR: &str = "data-visible";
pub const HIDDEN_CLASS: &str = "hidden";
