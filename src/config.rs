//! Game configuration
//!
//! Everything tunable lives in one JSON document. Every field has a default,
//! so a config file only needs the values it wants to change, and the game
//! runs with no config file at all.
//!
//! Search order:
//! 1. `./bunny_hop.json`
//! 2. `<config dir>/bunny_hop/config.json` (e.g. `~/.config/bunny_hop/config.json`)

use crate::error::ConfigError;
use crate::input::KeyBindings;
use crate::palette;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = "bunny_hop.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub assets: AssetConfig,
    pub menus: MenusConfig,
    pub keys: KeyConfig,
    pub actor: ActorConfig,
    pub obstacles: Vec<RectConfig>,
    pub sounds: SoundConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Window icon, relative to the images directory
    pub icon: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Bunny hop".to_string(),
            width: 640,
            height: 360,
            fps: 60,
            icon: Some("bunny_256.png".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub root: PathBuf,
    pub fonts_dir: String,
    pub images_dir: String,
    pub sounds_dir: String,
    pub default_font: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            root: PathBuf::from("."),
            fonts_dir: "fonts".to_string(),
            images_dir: "images".to_string(),
            sounds_dir: "sounds".to_string(),
            default_font: "fff_tusj.ttf".to_string(),
        }
    }
}

/// Appearance of one menu scene
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuStyleConfig {
    /// Font file inside the fonts directory; `None` uses the default font
    pub font: Option<String>,
    pub header_size: u16,
    pub item_size: u16,
    pub text_color: String,
    pub background: String,
    pub highlight: String,
    /// Spacing unit is `window height / spacing_ratio`
    pub spacing_ratio: u32,
}

impl Default for MenuStyleConfig {
    fn default() -> Self {
        MenuStyleConfig {
            font: None,
            header_size: 72,
            item_size: 50,
            text_color: "black".to_string(),
            background: "orange".to_string(),
            highlight: "dark_green".to_string(),
            spacing_ratio: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenusConfig {
    pub title: MenuStyleConfig,
    pub options: MenuStyleConfig,
    pub quit: MenuStyleConfig,
}

impl Default for MenusConfig {
    fn default() -> Self {
        MenusConfig {
            title: MenuStyleConfig::default(),
            options: MenuStyleConfig {
                item_size: 36,
                text_color: "grey".to_string(),
                background: "forest".to_string(),
                highlight: "light_yellow".to_string(),
                ..MenuStyleConfig::default()
            },
            quit: MenuStyleConfig {
                header_size: 40,
                spacing_ratio: 25,
                background: "peach".to_string(),
                ..MenuStyleConfig::default()
            },
        }
    }
}

/// SDL key names (as accepted by `Keycode::from_name`) for each direction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        KeyConfig {
            left: "Left".to_string(),
            right: "Right".to_string(),
            up: "Up".to_string(),
            down: "Down".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    pub width: u32,
    pub height: u32,
    /// Per-frame step is `window width / step_divisor`
    pub step_divisor: u32,
    /// Sprite image inside the images directory; `None` draws a plain box
    pub image: Option<String>,
    pub color: String,
}

impl Default for ActorConfig {
    fn default() -> Self {
        ActorConfig {
            width: 48,
            height: 48,
            step_divisor: 160,
            image: Some("bunny_256.png".to_string()),
            color: "white".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectConfig {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Effect played on every scene switch, inside the sounds directory
    pub transition: Option<String>,
    /// Background music looped from startup, inside the sounds directory
    pub music: Option<String>,
}

impl GameConfig {
    /// Parses a config document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Loads the first config file found on the search path
    ///
    /// Returns the config and the file it came from (`None` for defaults).
    pub fn locate_and_load() -> Result<(Self, Option<PathBuf>), ConfigError> {
        for candidate in Self::search_path() {
            if candidate.is_file() {
                let config = Self::load_from_file(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }
        let config = GameConfig::default();
        config.validate()?;
        Ok((config, None))
    }

    fn search_path() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("bunny_hop").join("config.json"));
        }
        paths
    }

    /// Resolves every color and key name so later lookups cannot fail
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "window",
                reason: "width and height must be non-zero".to_string(),
            });
        }
        if self.window.fps == 0 {
            return Err(ConfigError::InvalidValue {
                field: "window.fps",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.actor.step_divisor == 0 {
            return Err(ConfigError::InvalidValue {
                field: "actor.step_divisor",
                reason: "must be at least 1".to_string(),
            });
        }

        for style in [&self.menus.title, &self.menus.options, &self.menus.quit] {
            palette::color(&style.text_color)?;
            palette::color(&style.background)?;
            palette::color(&style.highlight)?;
            if style.spacing_ratio == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "menus.spacing_ratio",
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        palette::color(&self.actor.color)?;

        KeyBindings::from_config(&self.keys)?;
        Ok(())
    }
}
