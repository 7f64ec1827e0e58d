// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use pixwerk_core::error::Result;

use super::PictureSink;
use crate::buffer::PixelBuffer;

/// Keeps every shown picture in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    shown: Vec<(String, PixelBuffer)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> &[(String, PixelBuffer)] {
        &self.shown
    }

    /// Labels in the order they were shown.
    pub fn labels(&self) -> Vec<&str> {
        self.shown.iter().map(|(label, _)| label.as_str()).collect()
    }
}

impl PictureSink for MemorySink {
    fn show(&mut self, label: &str, picture: &PixelBuffer) -> Result<()> {
        self.shown.push((label.to_string(), picture.deep_copy()));
        Ok(())
    }
}
