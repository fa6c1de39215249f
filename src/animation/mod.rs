//! Animation module for the scatter <-> tree morph
//!
//! Holds the progress state machine, the easing curves that reshape it, and
//! the frame driver that ties progress to the scene's transform buffers.

mod easing;
mod progress;
pub mod driver;

pub use easing::{Easing, ease};
pub use progress::{Mode, ProgressController};
pub use driver::{FrameDriver, FrameView};
