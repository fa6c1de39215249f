use serde::{Deserialize, Serialize};
use crate::animation::Easing;
use crate::geometry::{ConeShape, SphereShape};
use super::palette::{Palette, PaletteColors};

/// Upper bound on `particle_count` and `ornament_count`
pub const MAX_ELEMENT_COUNT: usize = 1_000_000;

/// Startup configuration for the morphing tree scene.
///
/// Every field has a default, so a YAML document only needs to list the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for every random draw made while building the scene
    pub seed: u64,
    /// Number of foliage particles
    pub particle_count: usize,
    /// Number of instanced ornaments
    pub ornament_count: usize,
    /// Height of the assembled tree cone
    pub tree_height: f32,
    /// Base radius of the assembled tree cone
    pub tree_radius: f32,
    /// Radius of the scattered cloud
    pub scatter_radius: f32,
    /// Seconds for a full 0 -> 1 sweep of the progress value
    pub transition_duration: f32,
    /// Frame gaps longer than this snap progress straight to its target
    pub max_frame_seconds: f32,
    pub foliage_easing: Easing,
    pub ornament_easing: Easing,
    /// Probability that an ornament is a bauble rather than a gift box
    pub bauble_fraction: f32,
    /// Horizontal push applied to ornament targets so they sit on the surface
    pub push_out_factor: f32,
    /// Ornament cone is this much shorter than the foliage cone
    pub ornament_height_inset: f32,
    /// Ornament cone base is this much narrower than the foliage cone
    pub ornament_radius_inset: f32,
    /// Ornaments scatter into a sphere this many times the scatter radius
    pub ornament_scatter_factor: f32,
    /// Height of the star topper above the tree's center
    pub star_height: f32,
    pub palette: Palette,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 2024,
            particle_count: 4500,
            ornament_count: 180,
            tree_height: 14.0,
            tree_radius: 5.5,
            scatter_radius: 25.0,
            transition_duration: 1.5,
            max_frame_seconds: 1.0,
            foliage_easing: Easing::EaseOutCubic,
            ornament_easing: Easing::EaseOutQuart,
            bauble_fraction: 0.6,
            push_out_factor: 1.2,
            ornament_height_inset: 2.0,
            ornament_radius_inset: 0.5,
            ornament_scatter_factor: 1.2,
            star_height: 7.5,
            palette: Palette::default(),
        }
    }
}

impl SceneConfig {
    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let config: SceneConfig = serde_yaml::from_str(yaml)
            .map_err(|e| format!("YAML parse error: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would produce degenerate or non-finite geometry
    pub fn validate(&self) -> Result<(), String> {
        self.foliage_cone()?;
        self.foliage_scatter()?;
        self.ornament_cone()?;
        self.ornament_scatter()?;

        for (name, count) in [
            ("particle_count", self.particle_count),
            ("ornament_count", self.ornament_count),
        ] {
            if count > MAX_ELEMENT_COUNT {
                return Err(format!(
                    "{} must be at most {}, got {}",
                    name, MAX_ELEMENT_COUNT, count
                ));
            }
        }

        if !self.transition_duration.is_finite() || self.transition_duration <= 0.0 {
            return Err(format!(
                "transition_duration must be positive, got {}",
                self.transition_duration
            ));
        }
        if !self.max_frame_seconds.is_finite() || self.max_frame_seconds <= 0.0 {
            return Err(format!(
                "max_frame_seconds must be positive, got {}",
                self.max_frame_seconds
            ));
        }
        if !(0.0..=1.0).contains(&self.bauble_fraction) {
            return Err(format!(
                "bauble_fraction must be within [0, 1], got {}",
                self.bauble_fraction
            ));
        }
        if !self.push_out_factor.is_finite() || self.push_out_factor < 1.0 {
            return Err(format!(
                "push_out_factor must be at least 1, got {}",
                self.push_out_factor
            ));
        }
        if !self.star_height.is_finite() {
            return Err("star_height must be finite".to_string());
        }

        self.palette.resolve()?;
        Ok(())
    }

    pub fn foliage_cone(&self) -> Result<ConeShape, String> {
        ConeShape::new(self.tree_height, self.tree_radius)
            .map_err(|e| format!("Foliage {}", e))
    }

    pub fn foliage_scatter(&self) -> Result<SphereShape, String> {
        SphereShape::new(self.scatter_radius)
            .map_err(|e| format!("Foliage {}", e))
    }

    pub fn ornament_cone(&self) -> Result<ConeShape, String> {
        if self.ornament_height_inset < 0.0 || self.ornament_radius_inset < 0.0 {
            return Err("Ornament insets must not be negative".to_string());
        }
        ConeShape::new(
            self.tree_height - self.ornament_height_inset,
            self.tree_radius - self.ornament_radius_inset,
        )
        .map_err(|e| format!("Ornament {}", e))
    }

    pub fn ornament_scatter(&self) -> Result<SphereShape, String> {
        SphereShape::new(self.scatter_radius * self.ornament_scatter_factor)
            .map_err(|e| format!("Ornament {}", e))
    }

    pub fn colors(&self) -> Result<PaletteColors, String> {
        self.palette.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.particle_count, 4500);
        assert_eq!(config.ornament_count, 180);
        assert_eq!(config.transition_duration, 1.5);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r##"
particle_count: 1200
tree_height: 10.0
foliage_easing: ease_out_quad
palette:
  gift: "#AA0000"
"##;
        let config = SceneConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.particle_count, 1200);
        assert_eq!(config.tree_height, 10.0);
        assert_eq!(config.foliage_easing, Easing::EaseOutQuad);
        assert_eq!(config.ornament_easing, Easing::EaseOutQuart);
        assert_eq!(config.palette.gift, "#AA0000");
        assert_eq!(config.palette.bauble, "#D4AF37");
        assert_eq!(config.tree_radius, 5.5);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = SceneConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn test_malformed_yaml() {
        let result = SceneConfig::from_yaml("particle_count: [oops");
        assert!(result.unwrap_err().contains("YAML parse error"));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let result = SceneConfig::from_yaml("tree_radius: 0.0");
        assert!(result.is_err());

        let result = SceneConfig::from_yaml("scatter_radius: -3.0");
        assert!(result.unwrap_err().contains("radius"));
    }

    #[test]
    fn test_rejects_collapsed_ornament_cone() {
        let config = SceneConfig {
            tree_height: 2.0,
            ornament_height_inset: 2.0,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("Ornament"));
    }

    #[test]
    fn test_rejects_bad_timing_and_probabilities() {
        let bad = [
            SceneConfig { transition_duration: 0.0, ..Default::default() },
            SceneConfig { max_frame_seconds: f32::NAN, ..Default::default() },
            SceneConfig { bauble_fraction: 1.5, ..Default::default() },
            SceneConfig { push_out_factor: 0.8, ..Default::default() },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{:?} should be rejected", config);
        }
    }

    #[test]
    fn test_rejects_oversized_counts() {
        let config = SceneConfig { particle_count: usize::MAX, ..Default::default() };
        assert!(config.validate().unwrap_err().contains("particle_count"));

        let config = SceneConfig { ornament_count: MAX_ELEMENT_COUNT + 1, ..Default::default() };
        assert!(config.validate().unwrap_err().contains("ornament_count"));

        let config = SceneConfig { particle_count: MAX_ELEMENT_COUNT, ..Default::default() };
        assert!(config.validate().is_ok());

        assert!(SceneConfig::from_yaml("particle_count: 18446744073709551615").is_err());
    }

    #[test]
    fn test_rejects_bad_palette() {
        let result = SceneConfig::from_yaml("palette:\n  star: \"not-a-color\"");
        assert!(result.unwrap_err().contains("Invalid color"));
    }
}
