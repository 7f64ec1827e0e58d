// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Channel isolation: keep one channel, or keep only the dominant one.

use tracing::{debug, instrument};

use crate::buffer::{Channels, PixelBuffer};

pub fn only_red_pixel([r, _, _]: Channels) -> Channels {
    [r, 0, 0]
}

pub fn only_green_pixel([_, g, _]: Channels) -> Channels {
    [0, g, 0]
}

pub fn only_blue_pixel([_, _, b]: Channels) -> Channels {
    [0, 0, b]
}

/// Zero every channel except the one strictly greater than both others.
///
/// The three checks are independent, not a max reduction: when the top value
/// is shared by two or three channels none of them passes, and the pixel is
/// returned unchanged.
pub fn posterize_pixel(channels: Channels) -> Channels {
    let [r, g, b] = channels;
    let mut out = channels;
    if r > g && r > b {
        out[1] = 0;
        out[2] = 0;
    }
    if b > r && b > g {
        out[0] = 0;
        out[1] = 0;
    }
    if g > r && g > b {
        out[0] = 0;
        out[2] = 0;
    }
    out
}

#[instrument(skip_all, fields(width = src.width(), height = src.height()))]
pub fn only_red(src: &PixelBuffer) -> PixelBuffer {
    debug!("Isolating red");
    src.map_pixels(only_red_pixel)
}

#[instrument(skip_all, fields(width = src.width(), height = src.height()))]
pub fn only_green(src: &PixelBuffer) -> PixelBuffer {
    debug!("Isolating green");
    src.map_pixels(only_green_pixel)
}

#[instrument(skip_all, fields(width = src.width(), height = src.height()))]
pub fn only_blue(src: &PixelBuffer) -> PixelBuffer {
    debug!("Isolating blue");
    src.map_pixels(only_blue_pixel)
}

#[instrument(skip_all, fields(width = src.width(), height = src.height()))]
pub fn posterize(src: &PixelBuffer) -> PixelBuffer {
    debug!("Posterizing");
    src.map_pixels(posterize_pixel)
}
