// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filters: pure functions from a pixel buffer to a new pixel buffer.

pub mod channels;
pub mod tone;
pub mod watermark;

use pixwerk_core::types::FilterKind;

use crate::buffer::PixelBuffer;

pub use channels::{only_blue, only_green, only_red, posterize};
pub use tone::{greyscale, invert};
pub use watermark::{blend_region, watermark};

/// Run the single-image filter named by `kind` on `src`.
pub fn apply(kind: FilterKind, src: &PixelBuffer) -> PixelBuffer {
    match kind {
        FilterKind::Greyscale => greyscale(src),
        FilterKind::Invert => invert(src),
        FilterKind::OnlyRed => only_red(src),
        FilterKind::OnlyBlue => only_blue(src),
        FilterKind::OnlyGreen => only_green(src),
        FilterKind::Posterize => posterize(src),
    }
}
