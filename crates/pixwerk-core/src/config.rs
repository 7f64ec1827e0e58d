// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PixwerkError, Result};
use crate::types::{FilterKind, WatermarkBounds};

/// Settings for a filter run. Every field has a default, so a config file
/// only needs the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the shown results are written into.
    pub output_dir: PathBuf,
    /// Region selection for the watermark blend.
    pub watermark_bounds: WatermarkBounds,
    /// Whether each filter works on the previous filter's result (`true`)
    /// or on the originally loaded image (`false`).
    pub compose: bool,
    /// Single-image filters to run, in order.
    pub filters: Vec<FilterKind>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("pixwerk-out"),
            watermark_bounds: WatermarkBounds::AreaBranch,
            compose: true,
            filters: FilterKind::all().to_vec(),
        }
    }
}

impl AppConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|err| {
            PixwerkError::Config(format!("cannot read {}: {}", path.display(), err))
        })?;
        let config: Self = serde_json::from_str(&data).map_err(|err| {
            PixwerkError::Config(format!("invalid config {}: {}", path.display(), err))
        })?;
        debug!(path = %path.display(), ?config, "Config loaded");
        Ok(config)
    }

    /// Write this config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
