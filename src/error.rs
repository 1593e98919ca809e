//! Error types for Bunny Hop
//!
//! Asset and configuration errors are fatal: `main` logs them and exits.
//! Font problems never show up here because the asset layer falls back to
//! the built-in bitmap font instead.

use crate::scene::SceneId;
use std::fmt;
use thiserror::Error;

/// Which kind of media a failed load was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Sound,
    Music,
    Text,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AssetKind::Image => "image",
            AssetKind::Sound => "sound",
            AssetKind::Music => "music",
            AssetKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// Errors raised while loading media files
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot load {kind} '{path}': {message}")]
    Load {
        kind: AssetKind,
        path: String,
        message: String,
    },
}

impl AssetError {
    pub fn load(kind: AssetKind, path: impl Into<String>, message: impl fmt::Display) -> Self {
        AssetError::Load {
            kind,
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Errors raised while reading or validating the game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Unknown key name: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Top-level error for everything the game loop can fail with
#[derive(Debug, Error)]
pub enum GameError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid cursor bitmap: {0}")]
    Cursor(String),

    #[error("No scene registered for {0}")]
    UnregisteredScene(SceneId),
}

// SDL reports almost every failure as a plain String
impl From<String> for GameError {
    fn from(message: String) -> Self {
        GameError::Sdl(message)
    }
}
