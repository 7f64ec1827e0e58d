// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output: where filter results are "shown".

pub mod directory;
pub mod memory;

use pixwerk_core::error::Result;

use crate::buffer::PixelBuffer;

pub use directory::DirectorySink;
pub use memory::MemorySink;

/// Receives each filter result as it is produced.
pub trait PictureSink {
    /// Present `picture` under `label` (e.g. `"posterize"`).
    fn show(&mut self, label: &str, picture: &PixelBuffer) -> Result<()>;
}
