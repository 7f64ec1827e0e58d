// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pixwerk-filter: Per-pixel image filters for Pixwerk.
//
// Provides an owned RGB pixel buffer, pure filter functions (greyscale,
// invert, channel isolation, posterize, watermark blend), an `ImageProcessor`
// that keeps a named image's current result, and sinks that "show" results.

pub mod buffer;
pub mod filter;
pub mod output;
pub mod processor;

// Re-export the primary structs so callers can use `pixwerk_filter::ImageProcessor` etc.
pub use buffer::{Channels, PixelBuffer};
pub use output::{DirectorySink, MemorySink, PictureSink};
pub use processor::ImageProcessor;
