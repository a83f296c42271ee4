use std::path::{Path, PathBuf};

use super::errors::LookupError;

/// Interleaved 8-bit RGB pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, rgb: Vec<u8>) -> Result<Self, LookupError> {
        if width == 0 || height == 0 {
            return Err(LookupError::ImageEmpty);
        }
        if rgb.len() != width as usize * height as usize * 3 {
            return Err(LookupError::DimensionsMismatch);
        }
        Ok(Self { width, height, rgb })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_rgb(&self) -> &[u8] {
        &self.rgb
    }

    /// Converts to single-channel intensity using the BT.601 weights.
    pub fn to_luma(&self) -> LumaBuffer {
        let luma = self
            .rgb
            .chunks_exact(3)
            .map(|px| {
                let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
                ((299 * r + 587 * g + 114 * b + 500) / 1000) as u8
            })
            .collect();

        LumaBuffer {
            width: self.width,
            height: self.height,
            luma,
        }
    }
}

/// Single-channel intensity image fed to the barcode decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaBuffer {
    width: u32,
    height: u32,
    luma: Vec<u8>,
}

impl LumaBuffer {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.luma
    }
}

/// An uploaded photo: decoded pixels for barcode scanning plus the encoded
/// file on disk, which the annotation service reads as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pixels: PixelBuffer,
    path: PathBuf,
}

impl ProductImage {
    pub fn new(pixels: PixelBuffer, path: impl Into<PathBuf>) -> Self {
        Self {
            pixels,
            path: path.into(),
        }
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
