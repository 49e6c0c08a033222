//! Raw raster image buffers produced by extraction.
//!
//! The pipeline returns raw pixel data plus metadata; encoding to a file
//! format is the caller's responsibility. The PNG/JPEG conveniences here
//! exist for callers that want files directly.

use std::path::Path;

use md5::{Digest, Md5};

use crate::error::{Error, Result};

/// Pixel layout of a raw image buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PixelFormat {
    /// 8-bit RGB, 3 bytes per pixel
    Rgb8,
    /// 8-bit grayscale, 1 byte per pixel
    Gray8,
}

impl PixelFormat {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Gray8 => 1,
        }
    }
}

/// An owned raw pixel buffer with its dimensions and layout.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    format: PixelFormat,
}

impl RasterImage {
    /// Create a raster image from a raw pixel buffer.
    ///
    /// The buffer length must equal `width * height * bytes_per_pixel`.
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if pixels.len() != expected {
            return Err(Error::Image(format!(
                "Pixel buffer length {} does not match {}x{} {:?} (expected {})",
                pixels.len(),
                width,
                height,
                format,
                expected
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
            format,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel layout.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Raw pixel bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// MD5 digest of the raw pixel bytes.
    ///
    /// Used by the duplicate filter: two images with equal dimensions and
    /// equal digests are treated as the same image.
    pub fn content_digest(&self) -> [u8; 16] {
        let mut hasher = Md5::new();
        hasher.update(&self.pixels);
        hasher.finalize().into()
    }

    /// Encode the image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        use image::codecs::png::PngEncoder;
        use image::ImageEncoder;

        let mut out = Vec::new();
        let encoder = PngEncoder::new(&mut out);
        encoder
            .write_image(&self.pixels, self.width, self.height, self.color_type())
            .map_err(|e| Error::Image(format!("PNG encoding failed: {}", e)))?;
        Ok(out)
    }

    /// Save the image as a PNG file.
    pub fn save_as_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        std::fs::write(path.as_ref(), bytes)?;
        Ok(())
    }

    /// Save the image as a JPEG file with the given quality (1-100).
    pub fn save_as_jpeg(&self, path: impl AsRef<Path>, quality: u8) -> Result<()> {
        use image::codecs::jpeg::JpegEncoder;
        use image::ImageEncoder;

        let mut out = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100));
        encoder
            .write_image(&self.pixels, self.width, self.height, self.color_type())
            .map_err(|e| Error::Image(format!("JPEG encoding failed: {}", e)))?;
        std::fs::write(path.as_ref(), out)?;
        Ok(())
    }

    fn color_type(&self) -> image::ColorType {
        match self.format {
            PixelFormat::Rgb8 => image::ColorType::Rgb8,
            PixelFormat::Gray8 => image::ColorType::L8,
        }
    }
}
