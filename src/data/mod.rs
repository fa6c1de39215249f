pub mod config;
pub mod palette;

pub use config::SceneConfig;
pub use palette::{Palette, PaletteColors, parse_hex_color};
