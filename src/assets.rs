//! Asset loading and caching
//!
//! Every loaded font, rendered text, image, sound and music track is kept in
//! a [`ResourceCache`] for the lifetime of the game. Asking for the same key
//! twice returns the object produced the first time; the loader only runs on
//! a miss. Rendering text is the expensive part, so menus can re-request
//! their labels every frame for free.
//!
//! Path keys are normalised (lowercase, `/` separators) so `Images\Bunny.PNG`
//! and `images/bunny.png` share one entry. Files are still opened with the
//! spelling the caller gave.

use crate::config::AssetConfig;
use crate::error::{AssetError, AssetKind};
use crate::text;
use log::{debug, warn};
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::render::{Texture, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[cfg(feature = "sound")]
use sdl2::mixer::{Channel, Chunk, Music};

/// Normalised lookup key for a cached asset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey(String);

impl AssetKey {
    /// Key for a file: lowercase with `/` as the only separator
    pub fn path(path: impl AsRef<Path>) -> Self {
        AssetKey(normalize_path(path.as_ref()))
    }

    /// Key for a font file opened at a point size
    pub fn font(path: impl AsRef<Path>, size: u16) -> Self {
        AssetKey(format!("{}|{}", normalize_path(path.as_ref()), size))
    }

    /// Composite key for rendered text; the label keeps its case
    pub fn text(font_path: impl AsRef<Path>, key: &TextKey) -> Self {
        AssetKey(format!(
            "{}|{}|{},{},{}|{}",
            normalize_path(font_path.as_ref()),
            key.size,
            key.color.r,
            key.color.g,
            key.color.b,
            key.label
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().to_lowercase().replace('\\', "/")
}

/// Memoization table from asset key to a loaded object
///
/// Entries are never evicted.
pub struct ResourceCache<V> {
    entries: HashMap<AssetKey, V>,
}

impl<V> ResourceCache<V> {
    pub fn new() -> Self {
        ResourceCache {
            entries: HashMap::new(),
        }
    }

    /// Returns the cached value, running `loader` only on the first request
    ///
    /// A failed load stores nothing, so the error reaches the caller.
    pub fn get_or_load<E>(
        &mut self,
        key: &AssetKey,
        loader: impl FnOnce() -> Result<V, E>,
    ) -> Result<&V, E> {
        match self.entries.entry(key.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                debug!("Cache miss for {}", key.as_str());
                let value = loader()?;
                Ok(entry.insert(value))
            }
        }
    }

    /// Infallible variant of [`get_or_load`](Self::get_or_load)
    pub fn get_or_insert_with(&mut self, key: &AssetKey, loader: impl FnOnce() -> V) -> &V {
        self.entries.entry(key.clone()).or_insert_with(loader)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<V> Default for ResourceCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything that determines how a piece of text looks
#[derive(Debug, Clone, PartialEq)]
pub struct TextKey {
    /// Font file name inside the fonts directory
    pub font: String,
    pub size: u16,
    pub color: Color,
    pub label: String,
}

impl TextKey {
    pub fn new(font: impl Into<String>, size: u16, color: Color, label: impl Into<String>) -> Self {
        TextKey {
            font: font.into(),
            size,
            color,
            label: label.into(),
        }
    }
}

/// A font ready to render, or the built-in bitmap face when the file failed
pub enum FontFace<'t> {
    Ttf(Font<'t, 'static>),
    Builtin,
}

/// Text rendered once and reused on every frame
pub enum RenderedText<'t> {
    Texture {
        texture: Texture<'t>,
        width: u32,
        height: u32,
    },
    Bitmap {
        label: String,
        color: Color,
        scale: u32,
        width: u32,
        height: u32,
    },
}

impl RenderedText<'_> {
    pub fn size(&self) -> (u32, u32) {
        match *self {
            RenderedText::Texture { width, height, .. } => (width, height),
            RenderedText::Bitmap { width, height, .. } => (width, height),
        }
    }
}

/// SDL-backed asset store
///
/// Owns one cache per media kind. Textures and fonts borrow the renderer's
/// `TextureCreator` and the TTF context, hence the `'t` lifetime.
pub struct Assets<'t> {
    config: AssetConfig,
    texture_creator: &'t TextureCreator<WindowContext>,
    ttf: &'t Sdl2TtfContext,
    fonts: ResourceCache<FontFace<'t>>,
    texts: ResourceCache<RenderedText<'t>>,
    images: ResourceCache<Texture<'t>>,
    #[cfg(feature = "sound")]
    sounds: ResourceCache<Chunk>,
    #[cfg(feature = "sound")]
    music: ResourceCache<Music<'static>>,
    audio_enabled: bool,
}

impl<'t> Assets<'t> {
    pub fn new(
        config: AssetConfig,
        texture_creator: &'t TextureCreator<WindowContext>,
        ttf: &'t Sdl2TtfContext,
    ) -> Self {
        Assets {
            config,
            texture_creator,
            ttf,
            fonts: ResourceCache::new(),
            texts: ResourceCache::new(),
            images: ResourceCache::new(),
            #[cfg(feature = "sound")]
            sounds: ResourceCache::new(),
            #[cfg(feature = "sound")]
            music: ResourceCache::new(),
            audio_enabled: false,
        }
    }

    /// Turns sound playback on once the audio device is open
    pub fn set_audio_enabled(&mut self, enabled: bool) {
        self.audio_enabled = enabled;
    }

    fn resolve(&self, dir: &str, name: &str) -> PathBuf {
        self.config.root.join(dir).join(name)
    }

    /// Renders (or fetches) a piece of text
    pub fn text(&mut self, key: &TextKey) -> Result<&RenderedText<'t>, AssetError> {
        let font_path = self.resolve(&self.config.fonts_dir, &key.font);
        let cache_key = AssetKey::text(&font_path, key);
        let fonts = &mut self.fonts;
        let ttf = self.ttf;
        let creator = self.texture_creator;

        self.texts.get_or_load(&cache_key, || {
            debug!("Rendering text '{}' ({} pt)", key.label, key.size);
            let face = load_font(fonts, &font_path, key.size, |path, size| {
                ttf.load_font(path, size)
            });
            render_text(face, creator, key)
        })
    }

    /// Loads (or fetches) an image from the images directory
    pub fn image(&mut self, name: &str) -> Result<&Texture<'t>, AssetError> {
        let path = self.resolve(&self.config.images_dir, name);
        let creator = self.texture_creator;

        self.images.get_or_load(&AssetKey::path(&path), || {
            debug!("Loading image {}", path.display());
            creator
                .load_texture(&path)
                .map_err(|e| AssetError::load(AssetKind::Image, path.display().to_string(), e))
        })
    }

    /// Plays a sound effect from the sounds directory once
    #[cfg(feature = "sound")]
    pub fn play_sound(&mut self, name: &str) -> Result<(), AssetError> {
        if !self.audio_enabled {
            debug!("Audio disabled, not playing {}", name);
            return Ok(());
        }
        let path = self.resolve(&self.config.sounds_dir, name);
        let chunk = self.sounds.get_or_load(&AssetKey::path(&path), || {
            debug!("Loading sound {}", path.display());
            Chunk::from_file(&path)
                .map_err(|e| AssetError::load(AssetKind::Sound, path.display().to_string(), e))
        })?;

        // Running out of free channels just drops the effect
        if let Err(e) = Channel::all().play(chunk, 0) {
            debug!("Could not play {}: {}", name, e);
        }
        Ok(())
    }

    /// Starts looping a music track from the sounds directory
    #[cfg(feature = "sound")]
    pub fn play_music(&mut self, name: &str) -> Result<(), AssetError> {
        if !self.audio_enabled {
            debug!("Audio disabled, not playing {}", name);
            return Ok(());
        }
        let path = self.resolve(&self.config.sounds_dir, name);
        let music = self.music.get_or_load(&AssetKey::path(&path), || {
            debug!("Loading music {}", path.display());
            Music::from_file(&path)
                .map_err(|e| AssetError::load(AssetKind::Music, path.display().to_string(), e))
        })?;

        music
            .play(-1)
            .map_err(|e| AssetError::load(AssetKind::Music, path.display().to_string(), e))
    }

    #[cfg(not(feature = "sound"))]
    pub fn play_sound(&mut self, name: &str) -> Result<(), AssetError> {
        debug!("Built without sound support, not playing {}", name);
        Ok(())
    }

    #[cfg(not(feature = "sound"))]
    pub fn play_music(&mut self, name: &str) -> Result<(), AssetError> {
        debug!("Built without sound support, not playing {}", name);
        Ok(())
    }

    /// Number of cached `(fonts, texts, images)`, for diagnostics
    pub fn cache_sizes(&self) -> (usize, usize, usize) {
        (self.fonts.len(), self.texts.len(), self.images.len())
    }
}

/// Opens a font through `open`, falling back to the built-in face
///
/// The fallback is cached under the same key, so a missing font is reported
/// once per size rather than once per label.
fn load_font<'c, 't>(
    fonts: &'c mut ResourceCache<FontFace<'t>>,
    path: &Path,
    size: u16,
    open: impl FnOnce(&Path, u16) -> Result<Font<'t, 'static>, String>,
) -> &'c FontFace<'t> {
    fonts.get_or_insert_with(&AssetKey::font(path, size), || {
        match open(path, size) {
            Ok(font) => {
                debug!("Loaded font {} at {} pt", path.display(), size);
                FontFace::Ttf(font)
            }
            Err(e) => {
                warn!(
                    "Font {} not usable ({}), using the built-in font",
                    path.display(),
                    e
                );
                FontFace::Builtin
            }
        }
    })
}

fn render_text<'t>(
    face: &FontFace<'t>,
    creator: &'t TextureCreator<WindowContext>,
    key: &TextKey,
) -> Result<RenderedText<'t>, AssetError> {
    match face {
        // SDL_ttf refuses zero-width strings; the bitmap path handles them
        FontFace::Ttf(font) if !key.label.is_empty() => {
            let fail = |e: String| AssetError::load(AssetKind::Text, key.label.clone(), e);
            let surface = font
                .render(&key.label)
                .blended(key.color)
                .map_err(|e| fail(e.to_string()))?;
            let texture = creator
                .create_texture_from_surface(&surface)
                .map_err(|e| fail(e.to_string()))?;
            let query = texture.query();
            Ok(RenderedText::Texture {
                texture,
                width: query.width,
                height: query.height,
            })
        }
        _ => Ok(builtin_text(key)),
    }
}

/// Lays out `key` in the built-in bitmap font
fn builtin_text<'t>(key: &TextKey) -> RenderedText<'t> {
    let scale = text::scale_for_size(key.size);
    let (width, height) = text::text_size(&key.label, scale);
    RenderedText::Bitmap {
        label: key.label.clone(),
        color: key.color,
        scale,
        width,
        height,
    }
}
