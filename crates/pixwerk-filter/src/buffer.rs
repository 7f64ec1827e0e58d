// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel buffer: an owned width x height grid of 8-bit RGB pixels, loaded and
// encoded through the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use imageproc::map::map_colors;
use pixwerk_core::error::{PixwerkError, Result};
use tracing::{debug, info, instrument};

/// One pixel as `[red, green, blue]`.
pub type Channels = [u8; 3];

/// An owned RGB image.
///
/// `Clone` is a deep copy: the clone owns its own pixel storage, so writing
/// to it never changes the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: RgbImage,
}

impl PixelBuffer {
    // -- Construction ---------------------------------------------------------

    /// Load and decode an image file. Alpha is dropped.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let img = image::open(path.as_ref()).map_err(|err| {
            PixwerkError::ImageLoad(format!("{}: {}", path.as_ref().display(), err))
        })?;
        info!(width = img.width(), height = img.height(), "Image loaded");
        Ok(Self::from_dynamic(img))
    }

    /// Decode an in-memory encoded image (PNG, JPEG, ...).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data).map_err(|err| {
            PixwerkError::ImageLoad(format!("failed to decode image: {}", err))
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Ok(Self::from_dynamic(img))
    }

    /// Convert an already-decoded image to 8-bit RGB.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            pixels: image.to_rgb8(),
        }
    }

    pub fn from_rgb(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    /// A `width` x `height` buffer where every pixel is `channels`.
    pub fn filled(width: u32, height: u32, channels: Channels) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, Rgb(channels)),
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Total pixel count.
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Channels at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `(x, y)` is outside the buffer.
    pub fn get_pixel(&self, x: u32, y: u32) -> Channels {
        self.pixels.get_pixel(x, y).0
    }

    /// Channels at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Channels> {
        self.pixels.get_pixel_checked(x, y).map(|px| px.0)
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `(x, y)` is outside the buffer.
    pub fn set_pixel(&mut self, x: u32, y: u32, channels: Channels) {
        self.pixels.put_pixel(x, y, Rgb(channels));
    }

    /// Explicit deep copy; same as `clone()`.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    // -- Transformation -------------------------------------------------------

    /// A new buffer of the same size with `f` applied to every pixel.
    pub fn map_pixels<F>(&self, f: F) -> Self
    where
        F: Fn(Channels) -> Channels,
    {
        Self {
            pixels: map_colors(&self.pixels, |Rgb(channels)| Rgb(f(channels))),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .map_err(|err| {
                PixwerkError::ImageEncode(format!("PNG encoding failed: {}", err))
            })?;
        Ok(buffer)
    }

    /// Write to a file. The format is inferred from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.pixels.save(path.as_ref()).map_err(|err| {
            PixwerkError::ImageEncode(format!(
                "failed to save image to {}: {}",
                path.as_ref().display(),
                err
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_is_isolated_from_source() {
        let source = PixelBuffer::filled(3, 2, [10, 20, 30]);
        let mut copy = source.deep_copy();
        copy.set_pixel(1, 1, [255, 0, 0]);

        assert_eq!(copy.get_pixel(1, 1), [255, 0, 0]);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(source.get_pixel(x, y), [10, 20, 30]);
            }
        }
    }

    #[test]
    fn checked_access_outside_bounds_is_none() {
        let buf = PixelBuffer::filled(2, 2, [1, 2, 3]);
        assert_eq!(buf.pixel(1, 1), Some([1, 2, 3]));
        assert_eq!(buf.pixel(2, 0), None);
        assert_eq!(buf.pixel(0, 2), None);
    }

    #[test]
    fn map_pixels_leaves_source_untouched() {
        let source = PixelBuffer::filled(2, 2, [1, 2, 3]);
        let mapped = source.map_pixels(|[r, g, b]| [b, g, r]);
        assert_eq!(mapped.get_pixel(0, 0), [3, 2, 1]);
        assert_eq!(source.get_pixel(0, 0), [1, 2, 3]);
        assert_eq!(mapped.dimensions(), (2, 2));
    }

    #[test]
    fn area_is_width_times_height() {
        assert_eq!(PixelBuffer::filled(4, 5, [0, 0, 0]).area(), 20);
        assert_eq!(PixelBuffer::filled(0, 5, [0, 0, 0]).area(), 0);
    }

    #[test]
    fn png_bytes_decode_back() {
        let mut buf = PixelBuffer::filled(4, 3, [9, 8, 7]);
        buf.set_pixel(3, 2, [200, 100, 50]);
        let bytes = buf.to_png_bytes().unwrap();
        let decoded = PixelBuffer::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, buf);
    }

    #[test]
    fn garbage_bytes_are_a_load_error() {
        let err = PixelBuffer::from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, PixwerkError::ImageLoad(_)));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PixelBuffer::open(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, PixwerkError::ImageLoad(ref msg) if msg.contains("nope.png")));
    }

    #[test]
    fn alpha_is_dropped_on_conversion() {
        let rgba = image::RgbaImage::from_pixel(1, 1, image::Rgba([5, 6, 7, 0]));
        let buf = PixelBuffer::from_dynamic(DynamicImage::ImageRgba8(rgba));
        assert_eq!(buf.get_pixel(0, 0), [5, 6, 7]);
    }
}
