// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Pixwerk.

use thiserror::Error;

/// Top-level error type for all Pixwerk operations.
#[derive(Debug, Error)]
pub enum PixwerkError {
    // -- Image I/O --
    #[error("failed to load image: {0}")]
    ImageLoad(String),

    #[error("failed to encode image: {0}")]
    ImageEncode(String),

    // -- Filters --
    #[error("watermark bounds {bounds:?} exceed the images (first {first:?}, second {second:?})")]
    WatermarkOutOfBounds {
        /// Region the blend would have iterated over (width, height).
        bounds: (u32, u32),
        /// Dimensions of the image being watermarked.
        first: (u32, u32),
        /// Dimensions of the watermark image.
        second: (u32, u32),
    },

    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    #[error("unknown watermark bounds policy: {0}")]
    UnknownBounds(String),

    // -- Configuration / persistence --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PixwerkError>;
