//! Drawing surface abstraction
//!
//! Menus and scenes draw through [`Surface`] instead of a raw SDL canvas.
//! The SDL implementation renders through the asset caches; tests use the
//! recording fakes in [`fake`] so layout and rendering can be checked
//! without a window.

use crate::assets::{Assets, RenderedText, TextKey};
use crate::error::{AssetError, GameError};
use crate::text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Measures text as it will appear on screen
pub trait TextMetrics {
    /// Rendered `(width, height)` of `key` in pixels
    fn text_size(&mut self, key: &TextKey) -> Result<(u32, u32), AssetError>;
}

pub trait Surface: TextMetrics {
    /// Fills `rect`, or the whole surface when `None`
    fn fill_rect(&mut self, color: Color, rect: Option<Rect>) -> Result<(), GameError>;

    /// One-pixel outline
    fn draw_rect(&mut self, color: Color, rect: Rect) -> Result<(), GameError>;

    /// Draws text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, key: &TextKey, x: i32, y: i32) -> Result<(), GameError>;

    /// Draws an image from the images directory stretched into `dest`
    fn draw_image(&mut self, name: &str, dest: Rect, flip_horizontal: bool)
        -> Result<(), GameError>;
}

/// Surface backed by the SDL window canvas
pub struct SdlSurface<'t> {
    canvas: Canvas<Window>,
    assets: Assets<'t>,
}

impl<'t> SdlSurface<'t> {
    pub fn new(canvas: Canvas<Window>, assets: Assets<'t>) -> Self {
        SdlSurface { canvas, assets }
    }

    /// Shows everything drawn since the last present
    pub fn present(&mut self) {
        self.canvas.present();
    }

    pub fn assets_mut(&mut self) -> &mut Assets<'t> {
        &mut self.assets
    }
}

impl TextMetrics for SdlSurface<'_> {
    fn text_size(&mut self, key: &TextKey) -> Result<(u32, u32), AssetError> {
        Ok(self.assets.text(key)?.size())
    }
}

impl Surface for SdlSurface<'_> {
    fn fill_rect(&mut self, color: Color, rect: Option<Rect>) -> Result<(), GameError> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect)?;
        Ok(())
    }

    fn draw_rect(&mut self, color: Color, rect: Rect) -> Result<(), GameError> {
        self.canvas.set_draw_color(color);
        self.canvas.draw_rect(rect)?;
        Ok(())
    }

    fn draw_text(&mut self, key: &TextKey, x: i32, y: i32) -> Result<(), GameError> {
        match self.assets.text(key)? {
            RenderedText::Texture {
                texture,
                width,
                height,
            } => {
                self.canvas
                    .copy(texture, None, Rect::new(x, y, *width, *height))?;
            }
            RenderedText::Bitmap {
                label,
                color,
                scale,
                ..
            } => {
                text::draw_text(&mut self.canvas, label, x, y, *color, *scale)?;
            }
        }
        Ok(())
    }

    fn draw_image(
        &mut self,
        name: &str,
        dest: Rect,
        flip_horizontal: bool,
    ) -> Result<(), GameError> {
        let texture = self.assets.image(name)?;
        self.canvas
            .copy_ex(texture, None, Some(dest), 0.0, None, flip_horizontal, false)?;
        Ok(())
    }
}
