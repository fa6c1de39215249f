use serde::{Deserialize, Serialize};
use crate::math::Vec3;

/// Scene colors as CSS hex strings, resolved to sRGB components in [0, 1] at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Deep emerald base of the foliage particles
    pub foliage: String,
    /// Metallic gold highlight the point shader mixes into foliage particle cores
    pub foliage_tip: String,
    /// Gold baubles (ornament class A)
    pub bauble: String,
    /// Red velvet gift boxes (ornament class B)
    pub gift: String,
    /// Star topper
    pub star: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foliage: "#00241B".to_string(),
            foliage_tip: "#D4AF37".to_string(),
            bauble: "#D4AF37".to_string(),
            gift: "#580816".to_string(),
            star: "#F9E29C".to_string(),
        }
    }
}

/// Palette with every color parsed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteColors {
    pub foliage: Vec3,
    pub foliage_tip: Vec3,
    pub bauble: Vec3,
    pub gift: Vec3,
    pub star: Vec3,
}

impl Palette {
    pub fn resolve(&self) -> Result<PaletteColors, String> {
        Ok(PaletteColors {
            foliage: parse_hex_color(&self.foliage)?,
            foliage_tip: parse_hex_color(&self.foliage_tip)?,
            bauble: parse_hex_color(&self.bauble)?,
            gift: parse_hex_color(&self.gift)?,
            star: parse_hex_color(&self.star)?,
        })
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into components in [0, 1]
pub fn parse_hex_color(hex: &str) -> Result<Vec3, String> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid color '{}': expected #RRGGBB", hex));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|e| format!("Invalid color '{}': {}", hex, e))
    };

    Ok(Vec3::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let white = parse_hex_color("#FFFFFF").unwrap();
        assert_eq!(white, Vec3::ONE);

        let gold = parse_hex_color("D4AF37").unwrap();
        assert!((gold.x - 212.0 / 255.0).abs() < 1e-6);
        assert!((gold.y - 175.0 / 255.0).abs() < 1e-6);
        assert!((gold.z - 55.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert!(parse_hex_color("#FFF").is_err());
        assert!(parse_hex_color("#GG0000").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn test_parse_hex_color_rejects_signs() {
        assert!(parse_hex_color("#+F+F+F").is_err());
        assert!(parse_hex_color("-FFFFF").is_err());
        assert!(parse_hex_color("#FF FF0").is_err());
    }

    #[test]
    fn test_default_palette_resolves() {
        let colors = Palette::default().resolve().unwrap();
        assert!(colors.gift.x > colors.gift.z);
        assert_eq!(colors.bauble, colors.foliage_tip);
    }
}
