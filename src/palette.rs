//! Named color table
//!
//! Colors in the config file are given by name (`"orange"`, `"forest"`) or as
//! `#rrggbb` hex strings. The table is immutable; anything that needs a color
//! resolves it through [`color`] once and keeps the `Color` value.

use crate::error::ConfigError;
use sdl2::pixels::Color;

const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("dark_red", (128, 0, 0)),
    ("red", (255, 0, 0)),
    ("dark_green", (0, 128, 0)),
    ("green", (0, 255, 0)),
    ("dark_blue", (0, 0, 128)),
    ("blue", (0, 0, 255)),
    ("dark_yellow", (128, 128, 0)),
    ("yellow", (255, 255, 0)),
    ("light_yellow", (255, 255, 128)),
    ("dark_pink", (128, 0, 128)),
    ("pink", (255, 0, 255)),
    ("light_pink", (255, 128, 255)),
    ("dark_cyan", (0, 128, 128)),
    ("cyan", (0, 255, 255)),
    ("light_cyan", (128, 255, 255)),
    ("grey", (128, 128, 128)),
    ("white", (255, 255, 255)),
    ("orange", (255, 128, 0)),
    ("magenta", (255, 0, 128)),
    ("neon", (128, 255, 0)),
    ("spring", (0, 255, 128)),
    ("purple", (128, 0, 255)),
    ("royalblue", (0, 128, 255)),
    ("light_purple", (128, 128, 255)),
    ("light_neon", (128, 255, 128)),
    ("peach", (255, 128, 128)),
    ("beige", (245, 245, 220)),
    ("blueviolet", (138, 43, 226)),
    ("brown", (180, 80, 40)),
    ("crimson", (220, 20, 60)),
    ("darkolive", (85, 107, 47)),
    ("darkorchid", (153, 50, 204)),
    ("darkviolet", (148, 0, 211)),
    ("deeppink", (255, 20, 147)),
    ("skyblue", (0, 191, 255)),
    ("forest", (34, 139, 34)),
    ("indigo", (75, 0, 130)),
];

/// Looks up a named color without allocating an error
pub fn named(name: &str) -> Option<Color> {
    let wanted = name.trim().to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == wanted)
        .map(|&(_, (r, g, b))| Color::RGB(r, g, b))
}

/// Resolves a color name or `#rrggbb` string
pub fn color(value: &str) -> Result<Color, ConfigError> {
    if let Some(hex) = value.trim().strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ConfigError::UnknownColor(value.to_string()));
    }
    named(value).ok_or_else(|| ConfigError::UnknownColor(value.to_string()))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::RGB(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
