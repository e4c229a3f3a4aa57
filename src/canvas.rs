use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use image::RgbaImage;

use crate::color::PaintColor;
use crate::primitive::Primitive;
use crate::raster;

/// The painting surface: a retained RGBA raster mirrored into an egui texture.
///
/// Stamps accumulate on the raster; the texture is re-uploaded at most once
/// per frame, and only when something was drawn.
pub struct Canvas {
    pixels: RgbaImage,
    background: PaintColor,
    texture: Option<TextureHandle>,
    texture_needs_update: bool,
    texture_version: u64,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("size", &self.size())
            .field("background", &self.background)
            .field("texture_needs_update", &self.texture_needs_update)
            .field("texture_version", &self.texture_version)
            .finish()
    }
}

impl Canvas {
    /// An empty canvas; it gets its size on the first [`Canvas::reset`].
    pub fn new(background: PaintColor) -> Self {
        Self {
            pixels: RgbaImage::new(0, 0),
            background,
            texture: None,
            texture_needs_update: true,
            texture_version: 0,
        }
    }

    pub fn size(&self) -> [usize; 2] {
        [self.pixels.width() as usize, self.pixels.height() as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.width() == 0 || self.pixels.height() == 0
    }

    pub fn background(&self) -> PaintColor {
        self.background
    }

    pub fn set_background(&mut self, background: PaintColor) {
        self.background = background;
    }

    /// Resize to `size` and wipe everything to the background color.
    pub fn reset(&mut self, size: [usize; 2]) {
        let [w, h] = size;
        log::debug!("Resetting canvas to {}x{}", w, h);
        self.pixels = RgbaImage::new(w as u32, h as u32);
        raster::fill(&mut self.pixels, self.background);
        self.invalidate_texture();
    }

    /// Rasterize primitives onto the canvas.
    pub fn paint(&mut self, primitives: &[Primitive]) {
        if primitives.is_empty() || self.is_empty() {
            return;
        }
        raster::draw_all(&mut self.pixels, primitives);
        self.invalidate_texture();
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn texture_version(&self) -> u64 {
        self.texture_version
    }

    fn invalidate_texture(&mut self) {
        self.texture_needs_update = true;
        self.texture_version += 1;
    }

    /// The texture showing the current pixels, uploading them first if stale.
    ///
    /// Returns `None` while the canvas has no size.
    pub fn texture(&mut self, ctx: &Context) -> Option<&TextureHandle> {
        if self.is_empty() {
            return None;
        }
        if self.texture_needs_update || self.texture.is_none() {
            let image = ColorImage::from_rgba_unmultiplied(self.size(), self.pixels.as_raw());
            if let Some(handle) = self.texture.as_mut() {
                handle.set(image, TextureOptions::LINEAR);
            } else {
                self.texture = Some(ctx.load_texture("stamp_paint_canvas", image, TextureOptions::LINEAR));
            }
            self.texture_needs_update = false;
        }
        self.texture.as_ref()
    }
}
