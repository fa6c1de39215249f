//! The full morphing scene: foliage, ornaments, and the star topper.
//!
//! Built once from a validated `SceneConfig`; afterwards only the transform
//! buffers change, and only through `evaluate`.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use crate::data::SceneConfig;
use crate::math::Vec3;
use crate::particles::{FoliageField, OrnamentLayout, OrnamentSet};

/// Angular speed (radians per second) of the slow presentation turn
const RIG_SPEED: f32 = 0.05;

/// Star on top of the tree; grows in with progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarTopper {
    pub position: Vec3,
    pub scale: f32,
    pub color: Vec3,
}

pub struct MorphScene {
    foliage: FoliageField,
    ornaments: OrnamentSet,
    star: StarTopper,
}

impl MorphScene {
    /// Validate the configuration and sample every element.
    ///
    /// All randomness comes from one generator seeded with `config.seed`, so
    /// the same configuration always yields the same scene.
    pub fn build(config: &SceneConfig) -> Result<Self, String> {
        config.validate()?;
        let colors = config.colors()?;
        let mut rng = SmallRng::seed_from_u64(config.seed);

        let foliage = FoliageField::generate(
            &mut rng,
            config.particle_count,
            &config.foliage_cone()?,
            &config.foliage_scatter()?,
            config.foliage_easing,
        )
        .with_colors(colors.foliage, colors.foliage_tip);

        let layout = OrnamentLayout {
            cone: config.ornament_cone()?,
            cloud: config.ornament_scatter()?,
            push_out_factor: config.push_out_factor,
            bauble_fraction: config.bauble_fraction,
        };
        let ornaments = OrnamentSet::generate(
            &mut rng,
            config.ornament_count,
            &layout,
            config.ornament_easing,
        )
        .with_colors(colors.bauble, colors.gift);

        Ok(Self {
            foliage,
            ornaments,
            star: StarTopper {
                position: Vec3::new(0.0, config.star_height, 0.0),
                scale: 0.0,
                color: colors.star,
            },
        })
    }

    /// Rewrite every transform buffer for this progress and time
    pub fn evaluate(&mut self, progress: f32, time: f32) {
        self.foliage.evaluate(progress, time);
        self.ornaments.evaluate(progress, time);
        self.star.scale = progress;
    }

    pub fn foliage(&self) -> &FoliageField {
        &self.foliage
    }

    pub fn ornaments(&self) -> &OrnamentSet {
        &self.ornaments
    }

    pub fn star(&self) -> StarTopper {
        self.star
    }
}

/// Y rotation of the whole presentation group at time `t`
pub fn rig_rotation(time: f32) -> f32 {
    time * RIG_SPEED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::OrnamentKind;

    fn small_config() -> SceneConfig {
        SceneConfig {
            particle_count: 400,
            ornament_count: 60,
            ..Default::default()
        }
    }

    #[test]
    fn test_build_counts() {
        let scene = MorphScene::build(&small_config()).unwrap();
        assert_eq!(scene.foliage().len(), 400);
        assert_eq!(scene.ornaments().len(), 60);
        assert_eq!(scene.star().position, Vec3::new(0.0, 7.5, 0.0));
        assert_eq!(scene.star().scale, 0.0);
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let config = SceneConfig {
            scatter_radius: 0.0,
            ..small_config()
        };
        assert!(MorphScene::build(&config).is_err());
    }

    #[test]
    fn test_same_seed_same_scene() {
        let a = MorphScene::build(&small_config()).unwrap();
        let b = MorphScene::build(&small_config()).unwrap();
        assert_eq!(a.foliage().elements(), b.foliage().elements());
        assert_eq!(a.ornaments().ornaments(), b.ornaments().ornaments());

        let other = MorphScene::build(&SceneConfig { seed: 9, ..small_config() }).unwrap();
        assert_ne!(a.foliage().elements(), other.foliage().elements());
    }

    #[test]
    fn test_uses_configured_easings() {
        let scene = MorphScene::build(&small_config()).unwrap();
        assert_eq!(scene.foliage().easing(), crate::animation::Easing::EaseOutCubic);
        assert_eq!(scene.ornaments().easing(), crate::animation::Easing::EaseOutQuart);
    }

    #[test]
    fn test_star_scales_with_progress() {
        let mut scene = MorphScene::build(&small_config()).unwrap();
        scene.evaluate(0.25, 1.0);
        assert_eq!(scene.star().scale, 0.25);
        scene.evaluate(1.0, 2.0);
        assert_eq!(scene.star().scale, 1.0);
    }

    #[test]
    fn test_palette_reaches_ornament_data() {
        let scene = MorphScene::build(&small_config()).unwrap();
        let colors = small_config().colors().unwrap();
        let data = scene.ornaments().get_instance_data();
        let kinds = scene.ornaments().transforms();
        for (chunk, t) in data.chunks(crate::particles::INSTANCE_STRIDE).zip(kinds) {
            if t.kind == OrnamentKind::Gift {
                assert_eq!(&chunk[7..10], &colors.gift.to_array());
            }
        }
    }

    #[test]
    fn test_highlight_and_star_colors_come_from_palette() {
        let scene = MorphScene::build(&small_config()).unwrap();
        let colors = small_config().colors().unwrap();
        assert_eq!(scene.foliage().tip_color(), colors.foliage_tip);
        assert_eq!(scene.star().color, colors.star);
    }

    #[test]
    fn test_build_rejects_oversized_counts() {
        let config = SceneConfig {
            particle_count: usize::MAX,
            ..small_config()
        };
        assert!(MorphScene::build(&config).is_err());
    }

    #[test]
    fn test_rig_rotation() {
        assert_eq!(rig_rotation(0.0), 0.0);
        assert!((rig_rotation(20.0) - 1.0).abs() < 1e-6);
    }
}
