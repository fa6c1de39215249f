//! Random point samplers for the scattered cloud and the tree cone.
//!
//! Both samplers draw every random number from the caller's generator, so a
//! seeded `SmallRng` reproduces the same point set on every run.

use std::f32::consts::TAU;
use rand::Rng;
use crate::math::Vec3;

/// Point uniformly distributed by volume inside a sphere centered at the origin.
///
/// The polar angle comes from `acos(2v - 1)` so directions do not bunch up at
/// the poles, and the radius from `cbrt(u)` so density is constant through
/// the volume instead of piling up near the center.
pub fn sample_sphere_volume<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = TAU * rng.gen::<f32>();
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let r = rng.gen::<f32>().cbrt() * radius;

    let sin_phi = phi.sin();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * phi.cos(),
    )
}

/// Point inside a cone standing on its base, with height centered on `y = 0`.
///
/// Height is uniform over `[-height/2, height/2]`; within the horizontal disc
/// at that height the radius is `sqrt(u)` scaled, giving uniform areal density.
/// The apex is at `y = height/2`.
pub fn sample_cone_volume<R: Rng + ?Sized>(rng: &mut R, height: f32, base_radius: f32) -> Vec3 {
    let y = (rng.gen::<f32>() - 0.5) * height;
    let current_radius = cone_radius_at(y, height, base_radius);

    let angle = rng.gen::<f32>() * TAU;
    let r = rng.gen::<f32>().sqrt() * current_radius;

    Vec3::new(r * angle.cos(), y, r * angle.sin())
}

/// Radius of the cone's horizontal cross-section at height `y`
pub fn cone_radius_at(y: f32, height: f32, base_radius: f32) -> f32 {
    let rel_y = ((y + height / 2.0) / height).clamp(0.0, 1.0);
    base_radius * (1.0 - rel_y)
}
