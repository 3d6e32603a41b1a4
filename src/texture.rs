//! Texture holder: one GPU texture plus its pixel size
//!
//! The holder owns its `Texture2D` outright. Loading again or calling `free`
//! drops the old texture first; dropping the holder releases it for good.

use std::path::Path;

use image::{Rgba, RgbaImage};
use log::info;
use macroquad::prelude::*;

use crate::error::AssetError;
use crate::geometry::Rect as IRect;

/// Pixels of this color become fully transparent on load
pub const COLOR_KEY: [u8; 3] = [0x00, 0xFF, 0xFF];

/// Mirror applied when drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flip {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Optional draw parameters for [`TextureHolder::render`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Part of the texture to draw; the drawn size becomes the clip size
    pub clip: Option<IRect>,
    /// Clockwise rotation in degrees
    pub angle: f32,
    /// Rotation pivot relative to the draw position; defaults to the center
    pub center: Option<(i32, i32)>,
    pub flip: Flip,
}

impl RenderOptions {
    pub fn clipped(clip: IRect) -> Self {
        Self {
            clip: Some(clip),
            ..Default::default()
        }
    }

    pub fn flipped(mut self, flip: Flip) -> Self {
        self.flip = flip;
        self
    }
}

pub struct TextureHolder {
    texture: Option<Texture2D>,
    width: u32,
    height: u32,
    tint: Color,
}

impl TextureHolder {
    pub fn new() -> Self {
        Self {
            texture: None,
            width: 0,
            height: 0,
            tint: WHITE,
        }
    }

    /// Load the image at `path`, replacing whatever was held before
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), AssetError> {
        self.free();

        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pixels = decode_color_keyed(&bytes, path)?;
        let (w, h) = pixels.dimensions();
        let (tw, th) = match (u16::try_from(w), u16::try_from(h)) {
            (Ok(tw), Ok(th)) => (tw, th),
            _ => {
                return Err(AssetError::TooLarge {
                    path: path.to_path_buf(),
                    width: w,
                    height: h,
                })
            }
        };

        let texture = Texture2D::from_rgba8(tw, th, pixels.as_raw());
        texture.set_filter(FilterMode::Linear);

        info!("Loaded texture: {} ({}x{})", path.display(), w, h);
        self.texture = Some(texture);
        self.width = w;
        self.height = h;
        Ok(())
    }

    /// Release the texture, if any
    pub fn free(&mut self) {
        if self.texture.take().is_some() {
            self.width = 0;
            self.height = 0;
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color modulation
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.tint = Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, self.tint.a);
    }

    /// Alpha modulation
    pub fn set_alpha(&mut self, alpha: u8) {
        self.tint.a = alpha as f32 / 255.0;
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Draw at screen position (x, y). Does nothing while empty.
    pub fn render(&self, x: i32, y: i32, opts: &RenderOptions) {
        let Some(texture) = &self.texture else {
            return;
        };

        let (w, h) = match opts.clip {
            Some(clip) => (clip.w as f32, clip.h as f32),
            None => (self.width as f32, self.height as f32),
        };
        let (x, y) = (x as f32, y as f32);

        draw_texture_ex(
            texture,
            x,
            y,
            self.tint,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                source: opts.clip.map(IRect::to_mq),
                rotation: opts.angle.to_radians(),
                flip_x: opts.flip == Flip::Horizontal,
                flip_y: opts.flip == Flip::Vertical,
                pivot: opts.center.map(|(cx, cy)| vec2(x + cx as f32, y + cy as f32)),
            },
        );
    }
}

impl Default for TextureHolder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode image bytes and key out [`COLOR_KEY`]
pub fn decode_color_keyed(bytes: &[u8], path: &Path) -> Result<RgbaImage, AssetError> {
    let img = image::load_from_memory(bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rgba = img.to_rgba8();
    apply_color_key(&mut rgba, COLOR_KEY);
    Ok(rgba)
}

/// Make every pixel matching `key` fully transparent
pub fn apply_color_key(img: &mut RgbaImage, key: [u8; 3]) {
    for Rgba(p) in img.pixels_mut() {
        if p[..3] == key {
            p[3] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_image() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(4, 2, Rgba([10, 20, 30, 255]));
        img.put_pixel(1, 0, Rgba([0x00, 0xFF, 0xFF, 255]));
        img.put_pixel(3, 1, Rgba([0x00, 0xFF, 0xFE, 255]));
        img
    }

    #[test]
    fn test_color_key_only_exact_match() {
        let mut img = sample_image();
        apply_color_key(&mut img, COLOR_KEY);
        assert_eq!(img.get_pixel(1, 0)[3], 0);
        assert_eq!(img.get_pixel(3, 1)[3], 255);
        assert_eq!(img.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_decode_png_bytes() {
        let mut png = Vec::new();
        sample_image()
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        let decoded = decode_color_keyed(&png, Path::new("sample.png")).unwrap();
        assert_eq!(decoded.dimensions(), (4, 2));
        assert_eq!(decoded.get_pixel(1, 0)[3], 0);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_color_keyed(b"not an image", Path::new("junk.png")).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
        assert!(err.to_string().contains("junk.png"));
    }

    #[test]
    fn test_missing_file_reports_io() {
        let mut holder = TextureHolder::new();
        let err = holder.load_from_file("definitely/missing/cards.png").unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
        assert!(!holder.is_loaded());
        assert_eq!((holder.width(), holder.height()), (0, 0));
    }

    #[test]
    fn test_tint_modulation() {
        let mut holder = TextureHolder::new();
        holder.set_alpha(0);
        holder.set_color(255, 0, 0);
        let tint = holder.tint();
        assert_eq!(tint.r, 1.0);
        assert_eq!(tint.g, 0.0);
        assert_eq!(tint.a, 0.0);
    }
}
