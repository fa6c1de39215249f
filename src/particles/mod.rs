//! Element datasets and their per-frame transform evaluators
//!
//! Each element carries a fixed scattered position, a fixed tree position and
//! a phase seed. Every frame the owning set rewrites its transform buffer from
//! the current progress and time alone.

pub mod element;
pub mod motion;
pub mod foliage;
pub mod ornaments;

pub use element::DualPosition;
pub use foliage::{FoliageField, ParticleTransform, PARTICLE_STRIDE};
pub use ornaments::{Ornament, OrnamentKind, OrnamentLayout, OrnamentSet, OrnamentTransform, INSTANCE_STRIDE};
