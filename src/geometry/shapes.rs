use rand::Rng;
use crate::math::Vec3;
use super::sampling::{sample_cone_volume, sample_sphere_volume, cone_radius_at};

/// Sphere centered at the origin, the volume particles scatter into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereShape {
    radius: f32,
}

impl SphereShape {
    pub fn new(radius: f32) -> Result<Self, String> {
        check_dimension("sphere radius", radius)?;
        Ok(Self { radius })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        sample_sphere_volume(rng, self.radius)
    }

    pub fn contains(&self, point: Vec3, epsilon: f32) -> bool {
        point.length() <= self.radius + epsilon
    }
}

/// Upright cone with its base at `-height/2` and apex at `height/2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeShape {
    height: f32,
    base_radius: f32,
}

impl ConeShape {
    pub fn new(height: f32, base_radius: f32) -> Result<Self, String> {
        check_dimension("cone height", height)?;
        check_dimension("cone base radius", base_radius)?;
        Ok(Self { height, base_radius })
    }

    /// Cross-section radius at height `y`
    pub fn radius_at(&self, y: f32) -> f32 {
        cone_radius_at(y, self.height, self.base_radius)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        sample_cone_volume(rng, self.height, self.base_radius)
    }

    pub fn contains(&self, point: Vec3, epsilon: f32) -> bool {
        let half = self.height / 2.0;
        if point.y < -half - epsilon || point.y > half + epsilon {
            return false;
        }
        point.horizontal_length() <= self.radius_at(point.y) + epsilon
    }
}

fn check_dimension(name: &str, value: f32) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{} must be a positive finite number, got {}", name, value));
    }
    Ok(())
}
