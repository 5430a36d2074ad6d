use image::{imageops, imageops::FilterType, ImageFormat, RgbaImage};
use std::io::Cursor;

/// Bytes per pixel (RGBA8)
pub const CHANNELS: usize = 4;

/// Decoded image, always normalized to 8-bit RGBA
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes. Returns None if the length doesn't match the dimensions.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(CHANNELS)?;
        if rgba.len() != expected {
            return None;
        }
        Some(PixelBuffer { width, height, rgba })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// RGBA value at (x, y), or None when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.rgba[i..i + CHANNELS]);
        Some(px)
    }
}

/// The three imaging steps the converter needs.
///
/// Keeping them behind a trait lets the conversion logic run against an
/// in-memory fake in tests.
pub trait ImageCodec {
    /// Parse encoded image bytes into RGBA pixels
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, String>;

    /// Nearest-neighbor resize to `size` x `size`
    fn resize(&self, pixels: &PixelBuffer, size: u32) -> Result<PixelBuffer, String>;

    /// Serialize pixels to the output file format
    fn encode(&self, pixels: &PixelBuffer) -> Result<Vec<u8>, String>;
}

/// Codec backed by the `image` crate; writes PNG
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl PngCodec {
    fn to_rgba_image(pixels: &PixelBuffer) -> Result<RgbaImage, String> {
        RgbaImage::from_raw(pixels.width, pixels.height, pixels.rgba.clone())
            .ok_or_else(|| format!("pixel buffer does not fit {}x{}", pixels.width, pixels.height))
    }

    fn from_rgba_image(img: RgbaImage) -> Result<PixelBuffer, String> {
        let (width, height) = img.dimensions();
        PixelBuffer::new(width, height, img.into_raw())
            .ok_or_else(|| format!("unexpected buffer size for {}x{}", width, height))
    }
}

impl ImageCodec for PngCodec {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, String> {
        // Format is sniffed from the content, not the extension
        let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
        Self::from_rgba_image(img.to_rgba8())
    }

    fn resize(&self, pixels: &PixelBuffer, size: u32) -> Result<PixelBuffer, String> {
        let img = Self::to_rgba_image(pixels)?;
        // Nearest keeps hard pixel-art edges
        let resized = imageops::resize(&img, size, size, FilterType::Nearest);
        Self::from_rgba_image(resized)
    }

    fn encode(&self, pixels: &PixelBuffer) -> Result<Vec<u8>, String> {
        let img = Self::to_rgba_image(pixels)?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)
            .map_err(|e| e.to_string())?;
        Ok(out.into_inner())
    }
}
