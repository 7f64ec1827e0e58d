// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The filter run: apply each filter to the first image and show it, then
// show the watermark of the first image over the second when one is given.

use pixwerk_core::error::Result;
use pixwerk_core::{AppConfig, FilterKind};
use pixwerk_filter::{ImageProcessor, PictureSink};
use tracing::{info, instrument};

/// Label the watermark result is shown under.
pub const WATERMARK_LABEL: &str = "watermark";

/// Run `chain` on `first`, showing each result, then the watermark.
///
/// With `config.compose` each filter works on the previous filter's output;
/// otherwise the processor is reset to the loaded image before every filter.
/// The watermark always blends over whatever the chain left current.
#[instrument(skip_all, fields(first = %first.name(), filters = chain.len()))]
pub fn run(
    first: &mut ImageProcessor,
    second: Option<&ImageProcessor>,
    chain: &[FilterKind],
    config: &AppConfig,
    sink: &mut dyn PictureSink,
) -> Result<()> {
    for kind in chain {
        if !config.compose {
            first.reset();
        }
        let result = first.apply(*kind);
        sink.show(kind.label(), result)?;
    }

    if let Some(second) = second {
        info!(second = %second.name(), bounds = %config.watermark_bounds, "Watermarking");
        let result = first.watermark(second, config.watermark_bounds)?;
        sink.show(WATERMARK_LABEL, result)?;
    }

    Ok(())
}
