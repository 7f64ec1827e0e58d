// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor: a named image plus its current working buffer. Each
// filter derives a fresh buffer from the current one, stores it as the new
// current buffer and hands back a reference to it.

use std::path::Path;

use pixwerk_core::error::Result;
use pixwerk_core::types::{FilterKind, WatermarkBounds};
use tracing::{debug, info, instrument};

use crate::buffer::PixelBuffer;
use crate::filter;

/// A named image whose filters compose.
///
/// Filters never work on the originally loaded pixels unless the processor is
/// [`reset`](Self::reset) first: calling `invert()` twice inverts the result of
/// the first call, giving the original back.
///
/// ```ignore
/// let mut photo = ImageProcessor::open("photo.png")?;
/// photo.greyscale().save("grey.png")?;
/// photo.invert().save("grey-inverted.png")?;
/// ```
#[derive(Debug, Clone)]
pub struct ImageProcessor {
    /// Identifier the image was loaded from.
    name: String,
    /// The pixels as loaded; never filtered.
    original: PixelBuffer,
    /// Result of the most recent filter.
    current: PixelBuffer,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image file. The path doubles as the processor's name.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let name = path.as_ref().display().to_string();
        let buffer = PixelBuffer::open(path)?;
        Ok(Self::from_buffer(name, buffer))
    }

    /// Decode an in-memory encoded image.
    pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> Result<Self> {
        let buffer = PixelBuffer::from_bytes(data)?;
        Ok(Self::from_buffer(name, buffer))
    }

    pub fn from_buffer(name: impl Into<String>, buffer: PixelBuffer) -> Self {
        Self {
            name: name.into(),
            current: buffer.deep_copy(),
            original: buffer,
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current working buffer.
    pub fn picture(&self) -> &PixelBuffer {
        &self.current
    }

    /// The buffer as it was loaded.
    pub fn original(&self) -> &PixelBuffer {
        &self.original
    }

    /// Consume the processor, keeping only the current buffer.
    pub fn into_picture(self) -> PixelBuffer {
        self.current
    }

    /// Discard all filtering and go back to the loaded pixels.
    pub fn reset(&mut self) {
        debug!(name = %self.name, "Resetting to original");
        self.current = self.original.deep_copy();
    }

    // -- Filters --------------------------------------------------------------

    /// Run `kind` on the current buffer and make the result current.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn apply(&mut self, kind: FilterKind) -> &PixelBuffer {
        info!(filter = %kind, "Applying filter");
        let next = filter::apply(kind, &self.current);
        self.replace(next)
    }

    pub fn greyscale(&mut self) -> &PixelBuffer {
        self.apply(FilterKind::Greyscale)
    }

    pub fn invert(&mut self) -> &PixelBuffer {
        self.apply(FilterKind::Invert)
    }

    pub fn only_red(&mut self) -> &PixelBuffer {
        self.apply(FilterKind::OnlyRed)
    }

    pub fn only_blue(&mut self) -> &PixelBuffer {
        self.apply(FilterKind::OnlyBlue)
    }

    pub fn only_green(&mut self) -> &PixelBuffer {
        self.apply(FilterKind::OnlyGreen)
    }

    pub fn posterize(&mut self) -> &PixelBuffer {
        self.apply(FilterKind::Posterize)
    }

    /// Blend `other`'s current buffer over this one.
    ///
    /// `other` is only read. On error the current buffer is unchanged.
    #[instrument(skip_all, fields(name = %self.name, other = %other.name, bounds = %bounds))]
    pub fn watermark(
        &mut self,
        other: &ImageProcessor,
        bounds: WatermarkBounds,
    ) -> Result<&PixelBuffer> {
        self.watermark_buffer(&other.current, bounds)
    }

    /// Blend an arbitrary buffer over this one; see [`watermark`](Self::watermark).
    pub fn watermark_buffer(
        &mut self,
        overlay: &PixelBuffer,
        bounds: WatermarkBounds,
    ) -> Result<&PixelBuffer> {
        let next = filter::watermark(&self.current, overlay, bounds)?;
        Ok(self.replace(next))
    }

    fn replace(&mut self, next: PixelBuffer) -> &PixelBuffer {
        self.current = next;
        &self.current
    }
}
