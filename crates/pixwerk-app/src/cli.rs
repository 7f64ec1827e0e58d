// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments and how they override the config file.

use std::path::PathBuf;

use clap::Parser;
use pixwerk_core::error::Result;
use pixwerk_core::{AppConfig, FilterKind, WatermarkBounds};

#[derive(Debug, Parser)]
#[command(name = "pixwerk")]
#[command(about = "Apply per-pixel filters to an image, optionally watermarking it")]
pub struct Cli {
    /// Image to filter
    pub first: PathBuf,

    /// Image to blend over the first as a watermark
    pub second: Option<PathBuf>,

    /// Directory results are written into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Watermark region policy: "area-branch" or "overlap"
    #[arg(short, long)]
    pub bounds: Option<WatermarkBounds>,

    /// Comma-separated filters to run, in order (default: from config, else all)
    #[arg(short, long)]
    pub filters: Option<String>,

    /// Run every filter on the original image instead of on the previous result
    #[arg(long)]
    pub independent: bool,
}

impl Cli {
    /// Start from the config file (or defaults) and apply flag overrides.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(bounds) = self.bounds {
            config.watermark_bounds = bounds;
        }
        if self.independent {
            config.compose = false;
        }
        if let Some(list) = &self.filters {
            config.filters = FilterKind::parse_list(list)?;
        }
        Ok(config)
    }
}
