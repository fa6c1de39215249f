//! Foliage point cloud
//!
//! Thousands of small glowing points that fill the cone's volume when
//! assembled and drift through a wide sphere when scattered.

use rand::Rng;
use crate::animation::{Easing, ease};
use crate::geometry::{ConeShape, SphereShape};
use crate::math::Vec3;
use super::element::DualPosition;
use super::motion::{foliage_alpha, foliage_offset, foliage_size};

/// Floats per particle in `get_particle_data`
pub const PARTICLE_STRIDE: usize = 8;

/// Per-frame output for one foliage particle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParticleTransform {
    pub position: Vec3,
    pub size: f32,
    pub alpha: f32,
}

/// Evaluate one particle for an already-eased progress value
pub fn evaluate_particle(element: &DualPosition, eased: f32, time: f32) -> ParticleTransform {
    ParticleTransform {
        position: element.position_at(eased) + foliage_offset(time, element.seed, eased),
        size: foliage_size(eased),
        alpha: foliage_alpha(time, element.seed),
    }
}

/// Static foliage dataset plus the transform buffer it rewrites every frame
pub struct FoliageField {
    elements: Vec<DualPosition>,
    transforms: Vec<ParticleTransform>,
    easing: Easing,
    color: Vec3,
    /// Core highlight; a shader uniform rather than a per-particle attribute
    tip_color: Vec3,
}

impl FoliageField {
    /// Sample `count` particles: targets inside `cone`, scatter points inside `cloud`
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        cone: &ConeShape,
        cloud: &SphereShape,
        easing: Easing,
    ) -> Self {
        let elements: Vec<DualPosition> = (0..count)
            .map(|_| DualPosition::sample(rng, cloud, cone))
            .collect();

        let mut field = Self {
            transforms: vec![ParticleTransform::default(); elements.len()],
            elements,
            easing,
            color: Vec3::ONE,
            tip_color: Vec3::ONE,
        };
        field.evaluate(0.0, 0.0);
        field
    }

    pub fn with_colors(mut self, color: Vec3, tip_color: Vec3) -> Self {
        self.color = color;
        self.tip_color = tip_color;
        self
    }

    /// Recompute every particle's transform, overwriting the previous frame
    pub fn evaluate(&mut self, progress: f32, time: f32) {
        let eased = ease(progress, self.easing);
        for (slot, element) in self.transforms.iter_mut().zip(&self.elements) {
            *slot = evaluate_particle(element, eased, time);
        }
    }

    pub fn transforms(&self) -> &[ParticleTransform] {
        &self.transforms
    }

    pub fn elements(&self) -> &[DualPosition] {
        &self.elements
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn tip_color(&self) -> Vec3 {
        self.tip_color
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get particle data for GPU upload
    /// Format: position(3) + size(1) + alpha(1) + color(3) = 8 floats per particle
    pub fn get_particle_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.transforms.len() * PARTICLE_STRIDE);

        for t in &self.transforms {
            data.extend_from_slice(&t.position.to_array());
            data.push(t.size);
            data.push(t.alpha);
            data.extend_from_slice(&self.color.to_array());
        }

        data
    }
}
