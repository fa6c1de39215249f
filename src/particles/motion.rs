//! Deterministic secondary motion layered on top of the morph.
//!
//! Every function here depends only on elapsed time, the element's own seed
//! and the eased progress, never on other elements, so a frame can be
//! recomputed from scratch at any time.

use crate::math::Vec3;

/// Phase spread for the slow breathing drift
const BREATH_PHASE_SPREAD: f32 = 10.0;
/// Phase spread for the chaotic drift of scattered particles and for twinkle
const SCATTER_PHASE_SPREAD: f32 = 20.0;
const BREATH_AMPLITUDE: f32 = 0.2;
const SCATTER_DRIFT_AMPLITUDE: f32 = 0.5;

const ORNAMENT_PHASE_SPREAD: f32 = 20.0;
const ORNAMENT_FLOAT_AMPLITUDE: f32 = 0.5;
const ORNAMENT_PULSE_AMPLITUDE: f32 = 0.05;

/// Offset added to a foliage particle's interpolated position.
///
/// A gentle breathing drift is always present; a larger drift fades out as
/// the tree assembles. Vertical motion only gets half of the breathing.
pub fn foliage_offset(time: f32, seed: f32, eased: f32) -> Vec3 {
    let drift = (time * 0.5 + seed * BREATH_PHASE_SPREAD).sin() * BREATH_AMPLITUDE;
    let scatter_drift =
        (1.0 - eased) * (time + seed * SCATTER_PHASE_SPREAD).sin() * SCATTER_DRIFT_AMPLITUDE;

    Vec3::new(drift + scatter_drift, drift * 0.5, drift + scatter_drift)
}

/// Point size before perspective attenuation; particles swell as they assemble
pub fn foliage_size(eased: f32) -> f32 {
    4.0 * (1.0 + eased * 0.5)
}

/// Twinkle alpha in [0.2, 1.0]
pub fn foliage_alpha(time: f32, seed: f32) -> f32 {
    0.6 + 0.4 * (time * 2.0 + seed * SCATTER_PHASE_SPREAD).sin()
}

/// Floating wobble for ornaments, gone once fully assembled
pub fn ornament_float(time: f32, seed: f32, eased: f32) -> Vec3 {
    let amplitude = (1.0 - eased) * ORNAMENT_FLOAT_AMPLITUDE;
    let phase = seed * ORNAMENT_PHASE_SPREAD;
    Vec3::new(
        (time + phase).sin() * amplitude,
        (time * 0.8 + phase).cos() * amplitude,
        0.0,
    )
}

/// Euler rotation for an ornament: tumbles about X while scattered, turns
/// slowly about Y at all times
pub fn ornament_spin(base_rotation: Vec3, time: f32, eased: f32) -> Vec3 {
    Vec3::new(
        base_rotation.x + time * 0.2 * (1.0 - eased),
        base_rotation.y + time * 0.3,
        base_rotation.z,
    )
}

/// Multiplier for an ornament's base scale
pub fn ornament_pulse(time: f32, seed: f32) -> f32 {
    1.0 + (time * 2.0 + seed * ORNAMENT_PHASE_SPREAD).sin() * ORNAMENT_PULSE_AMPLITUDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_drift_vanishes_when_assembled() {
        // At eased = 1 only the breathing drift remains
        for i in 0..50 {
            let t = i as f32 * 0.37;
            let offset = foliage_offset(t, 0.3, 1.0);
            let drift = (t * 0.5 + 3.0).sin() * 0.2;
            assert!((offset.x - drift).abs() < 1e-5);
            assert!((offset.z - drift).abs() < 1e-5);
            assert!((offset.y - drift * 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_foliage_offset_bounded() {
        for i in 0..200 {
            let t = i as f32 * 0.1;
            let o = foliage_offset(t, (i % 10) as f32 / 10.0, 0.0);
            assert!(o.x.abs() <= 0.7 + 1e-5);
            assert!(o.y.abs() <= 0.1 + 1e-5);
        }
    }

    #[test]
    fn test_foliage_size_and_alpha_ranges() {
        assert_eq!(foliage_size(0.0), 4.0);
        assert_eq!(foliage_size(1.0), 6.0);
        for i in 0..100 {
            let a = foliage_alpha(i as f32 * 0.13, 0.7);
            assert!((0.2 - 1e-5..=1.0 + 1e-5).contains(&a));
        }
    }

    #[test]
    fn test_ornament_float_stops_when_assembled() {
        assert_eq!(ornament_float(12.3, 0.4, 1.0), Vec3::ZERO);
        let moving = ornament_float(12.3, 0.4, 0.0);
        assert!(moving.x != 0.0 || moving.y != 0.0);
    }

    #[test]
    fn test_ornament_spins_faster_while_scattered() {
        let base = Vec3::new(0.5, 1.0, 0.0);
        let scattered = ornament_spin(base, 10.0, 0.0);
        let assembled = ornament_spin(base, 10.0, 1.0);

        assert!((scattered.x - 2.5).abs() < 1e-5);
        assert_eq!(assembled.x, 0.5);
        assert_eq!(scattered.y, assembled.y);
        assert_eq!(scattered.z, base.z);
    }

    #[test]
    fn test_ornament_pulse_range() {
        for i in 0..100 {
            let p = ornament_pulse(i as f32 * 0.21, 0.9);
            assert!((0.95 - 1e-5..=1.05 + 1e-5).contains(&p));
        }
    }
}
