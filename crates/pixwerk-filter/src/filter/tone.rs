// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tone filters: channel averaging (greyscale) and inversion.

use tracing::{debug, instrument};

use crate::buffer::{Channels, PixelBuffer};

/// Every channel becomes the truncated mean `(r + g + b) / 3`.
pub fn greyscale_pixel([r, g, b]: Channels) -> Channels {
    let sum = u16::from(r) + u16::from(g) + u16::from(b);
    // sum <= 765, so the mean fits in a u8.
    let mean = (sum / 3) as u8;
    [mean, mean, mean]
}

/// Each channel `c` becomes `|c - 255|`.
pub fn invert_pixel([r, g, b]: Channels) -> Channels {
    [u8::MAX - r, u8::MAX - g, u8::MAX - b]
}

/// Greyscale copy of `src`.
#[instrument(skip_all, fields(width = src.width(), height = src.height()))]
pub fn greyscale(src: &PixelBuffer) -> PixelBuffer {
    debug!("Averaging channels");
    src.map_pixels(greyscale_pixel)
}

/// Inverted copy of `src`.
#[instrument(skip_all, fields(width = src.width(), height = src.height()))]
pub fn invert(src: &PixelBuffer) -> PixelBuffer {
    debug!("Inverting channels");
    src.map_pixels(invert_pixel)
}
