// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Watermark: average-blend a second image over the first inside a region
// chosen by a `WatermarkBounds` policy.

use pixwerk_core::error::{PixwerkError, Result};
use pixwerk_core::types::WatermarkBounds;
use tracing::{debug, info, instrument};

use crate::buffer::{Channels, PixelBuffer};

/// Per-channel truncated mean of two pixels.
pub fn average_pixel(a: Channels, b: Channels) -> Channels {
    let avg = |x: u8, y: u8| ((u16::from(x) + u16::from(y)) / 2) as u8;
    [avg(a[0], b[0]), avg(a[1], b[1]), avg(a[2], b[2])]
}

/// The `(width, height)` region the blend iterates over, starting at `(0, 0)`.
///
/// With [`WatermarkBounds::AreaBranch`] the region is the second image's size
/// when the first image has strictly more pixels, and the first image's size
/// otherwise. If that region doesn't fit inside both images the blend would
/// read or write past an edge, so it is rejected. A region with no width or
/// no height visits no pixel and is always accepted.
pub fn blend_region(
    first: (u32, u32),
    second: (u32, u32),
    bounds: WatermarkBounds,
) -> Result<(u32, u32)> {
    let region = match bounds {
        WatermarkBounds::AreaBranch => {
            let first_area = u64::from(first.0) * u64::from(first.1);
            let second_area = u64::from(second.0) * u64::from(second.1);
            if first_area > second_area {
                second
            } else {
                first
            }
        }
        WatermarkBounds::Overlap => (first.0.min(second.0), first.1.min(second.1)),
    };

    if region.0 == 0 || region.1 == 0 {
        return Ok(region);
    }

    let fits = |dims: (u32, u32)| region.0 <= dims.0 && region.1 <= dims.1;
    if fits(first) && fits(second) {
        Ok(region)
    } else {
        Err(PixwerkError::WatermarkOutOfBounds {
            bounds: region,
            first,
            second,
        })
    }
}

/// Blend `overlay` over a copy of `base`.
///
/// Pixels inside the region become the average of the two images; everything
/// else keeps `base`'s values. Neither input is modified.
#[instrument(skip_all, fields(
    base = ?base.dimensions(),
    overlay = ?overlay.dimensions(),
    bounds = %bounds,
))]
pub fn watermark(
    base: &PixelBuffer,
    overlay: &PixelBuffer,
    bounds: WatermarkBounds,
) -> Result<PixelBuffer> {
    let (width, height) = blend_region(base.dimensions(), overlay.dimensions(), bounds)?;
    info!(width, height, "Blending watermark");

    let mut out = base.deep_copy();
    for x in 0..width {
        for y in 0..height {
            let blended = average_pixel(out.get_pixel(x, y), overlay.get_pixel(x, y));
            out.set_pixel(x, y, blended);
        }
    }

    debug!("Watermark complete");
    Ok(out)
}
