//! Easing functions that shape how the morph accelerates and settles

use serde::{Deserialize, Serialize};

/// Easing function types.
///
/// Every variant is monotonic on [0, 1] with `ease(0) = 0` and `ease(1) = 1`,
/// so an eased progress value can drive a lerp without overshooting either
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation
    Linear,
    /// `1 - (1 - t)^2`
    EaseOutQuad,
    /// `1 - (1 - t)^3`, light particles that snap into place
    #[default]
    EaseOutCubic,
    /// `1 - (1 - t)^4`, heavier objects that glide in
    EaseOutQuart,
    /// Smooth ease-in-out
    EaseInOut,
}

impl Easing {
    /// Exponent of the ease-out curve, if this is one
    pub fn ease_out_exponent(&self) -> Option<i32> {
        match self {
            Easing::EaseOutQuad => Some(2),
            Easing::EaseOutCubic => Some(3),
            Easing::EaseOutQuart => Some(4),
            Easing::Linear | Easing::EaseInOut => None,
        }
    }
}

/// Apply easing function to a value t in range [0, 1]
pub fn ease(t: f32, easing: Easing) -> f32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    match easing {
        Easing::Linear => t,
        Easing::EaseOutQuad | Easing::EaseOutCubic | Easing::EaseOutQuart => {
            let exponent = easing.ease_out_exponent().unwrap_or(1);
            1.0 - (1.0 - t).powi(exponent)
        }
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
    }
}
