//! Instanced ornaments: gold baubles and red gift boxes
//!
//! Heavier than foliage, so they use a steeper ease-out by default. Targets
//! come from a slightly smaller cone and are pushed outward so the ornaments
//! hang on the tree's surface rather than inside it.

use std::f32::consts::PI;
use rand::Rng;
use crate::animation::{Easing, ease};
use crate::geometry::{ConeShape, SphereShape};
use crate::math::Vec3;
use super::element::DualPosition;
use super::motion::{ornament_float, ornament_pulse, ornament_spin};

/// Floats per instance in `get_instance_data`
pub const INSTANCE_STRIDE: usize = 11;

/// Visual category of an ornament
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnamentKind {
    /// Gold sphere
    Bauble,
    /// Red box
    Gift,
}

impl OrnamentKind {
    /// Numeric tag written into instance data
    pub fn index(&self) -> u32 {
        match self {
            OrnamentKind::Bauble => 0,
            OrnamentKind::Gift => 1,
        }
    }
}

/// Static data for one ornament
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ornament {
    pub placement: DualPosition,
    /// Euler angles (radians) the spin is added to
    pub base_rotation: Vec3,
    pub scale: f32,
    pub kind: OrnamentKind,
}

/// How ornaments are sampled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrnamentLayout {
    pub cone: ConeShape,
    pub cloud: SphereShape,
    /// Horizontal multiplier applied to every target (>= 1)
    pub push_out_factor: f32,
    /// Probability that an ornament is a bauble
    pub bauble_fraction: f32,
}

impl Ornament {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, layout: &OrnamentLayout) -> Self {
        let kind = if rng.gen::<f32>() < layout.bauble_fraction {
            OrnamentKind::Bauble
        } else {
            OrnamentKind::Gift
        };

        let mut placement = DualPosition::sample(rng, &layout.cloud, &layout.cone);
        if placement.target.horizontal_length() > 0.0 {
            placement.target = placement.target.scale_horizontal(layout.push_out_factor);
        }

        let base_rotation = Vec3::new(rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, 0.0);
        let scale = rng.gen::<f32>() * 0.5 + 0.3;

        Self {
            placement,
            base_rotation,
            scale,
            kind,
        }
    }
}

/// Per-frame output for one ornament
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrnamentTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub kind: OrnamentKind,
}

/// Evaluate one ornament for an already-eased progress value
pub fn evaluate_ornament(ornament: &Ornament, eased: f32, time: f32) -> OrnamentTransform {
    let seed = ornament.placement.seed;
    OrnamentTransform {
        position: ornament.placement.position_at(eased) + ornament_float(time, seed, eased),
        rotation: ornament_spin(ornament.base_rotation, time, eased),
        scale: ornament.scale * ornament_pulse(time, seed),
        kind: ornament.kind,
    }
}

/// Static ornament dataset plus its per-frame instance buffer
pub struct OrnamentSet {
    ornaments: Vec<Ornament>,
    transforms: Vec<OrnamentTransform>,
    easing: Easing,
    bauble_color: Vec3,
    gift_color: Vec3,
}

impl OrnamentSet {
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        layout: &OrnamentLayout,
        easing: Easing,
    ) -> Self {
        let ornaments: Vec<Ornament> = (0..count)
            .map(|_| Ornament::sample(rng, layout))
            .collect();
        let transforms = ornaments
            .iter()
            .map(|o| evaluate_ornament(o, 0.0, 0.0))
            .collect();

        Self {
            ornaments,
            transforms,
            easing,
            bauble_color: Vec3::ONE,
            gift_color: Vec3::ONE,
        }
    }

    pub fn with_colors(mut self, bauble: Vec3, gift: Vec3) -> Self {
        self.bauble_color = bauble;
        self.gift_color = gift;
        self
    }

    /// Recompute every instance transform, overwriting the previous frame
    pub fn evaluate(&mut self, progress: f32, time: f32) {
        let eased = ease(progress, self.easing);
        for (slot, ornament) in self.transforms.iter_mut().zip(&self.ornaments) {
            *slot = evaluate_ornament(ornament, eased, time);
        }
    }

    pub fn transforms(&self) -> &[OrnamentTransform] {
        &self.transforms
    }

    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn count_of(&self, kind: OrnamentKind) -> usize {
        self.ornaments.iter().filter(|o| o.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.ornaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ornaments.is_empty()
    }

    fn color_of(&self, kind: OrnamentKind) -> Vec3 {
        match kind {
            OrnamentKind::Bauble => self.bauble_color,
            OrnamentKind::Gift => self.gift_color,
        }
    }

    /// Get instance data for GPU upload
    /// Format: position(3) + rotation(3) + scale(1) + color(3) + kind(1) = 11 floats per instance
    pub fn get_instance_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.transforms.len() * INSTANCE_STRIDE);

        for t in &self.transforms {
            data.extend_from_slice(&t.position.to_array());
            data.extend_from_slice(&t.rotation.to_array());
            data.push(t.scale);
            data.extend_from_slice(&self.color_of(t.kind).to_array());
            data.push(t.kind.index() as f32);
        }

        data
    }
}
