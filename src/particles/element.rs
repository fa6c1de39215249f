use rand::Rng;
use crate::geometry::{ConeShape, SphereShape};
use crate::math::Vec3;

/// Fixed pair of positions an element morphs between, plus its phase seed.
///
/// The two positions are sampled independently; an element's spot in the
/// cloud says nothing about where it lands on the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualPosition {
    /// Position in the scattered cloud (progress 0)
    pub scatter: Vec3,
    /// Position on the assembled tree (progress 1)
    pub target: Vec3,
    /// Uniform in [0, 1), offsets the phase of drift and pulsing
    pub seed: f32,
}

impl DualPosition {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, scatter: &SphereShape, target: &ConeShape) -> Self {
        let target = target.sample(rng);
        let scatter = scatter.sample(rng);
        let seed = rng.gen::<f32>();
        Self { scatter, target, seed }
    }

    /// Base position for an already-eased progress value
    pub fn position_at(&self, eased: f32) -> Vec3 {
        self.scatter.lerp(&self.target, eased)
    }
}
