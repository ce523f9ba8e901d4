pub mod constants;
pub mod latch;
pub mod parallax;
pub mod particles;
pub mod scroll;
pub mod tilt;

pub use latch::*;
pub use parallax::*;
pub use particles::*;
pub use scroll::*;
pub use tilt::*;
