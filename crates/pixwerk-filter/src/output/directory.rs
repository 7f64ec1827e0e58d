// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Directory sink: writes each shown picture as a numbered PNG.

use std::path::{Path, PathBuf};

use pixwerk_core::error::Result;
use tracing::{info, instrument};

use super::PictureSink;
use crate::buffer::PixelBuffer;

/// Saves results as `<stem>-<NN>-<label>.png` inside one directory.
///
/// `NN` counts from 01 so a directory listing follows the order the filters
/// ran in.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    stem: String,
    count: usize,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    /// Create `dir` (and parents) if needed.
    pub fn new(dir: impl Into<PathBuf>, stem: impl Into<String>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            stem: stem.into(),
            count: 0,
            written: Vec::new(),
        })
    }

    /// Stem derived from an input path's file name, e.g. `photo` for `a/photo.jpg`.
    pub fn stem_for(path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every file written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl PictureSink for DirectorySink {
    #[instrument(skip(self, picture), fields(dir = %self.dir.display()))]
    fn show(&mut self, label: &str, picture: &PixelBuffer) -> Result<()> {
        self.count += 1;
        let path = self
            .dir
            .join(format!("{}-{:02}-{}.png", self.stem, self.count, label));
        picture.save(&path)?;
        info!(
            path = %path.display(),
            width = picture.width(),
            height = picture.height(),
            "Result written"
        );
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_numbered_decodable_pngs() {
        let tmp = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(tmp.path().join("nested/out"), "photo").unwrap();

        let grey = PixelBuffer::filled(3, 2, [116, 116, 116]);
        let red = PixelBuffer::filled(3, 2, [200, 0, 0]);
        sink.show("greyscale", &grey).unwrap();
        sink.show("only-red", &red).unwrap();

        let names: Vec<_> = sink
            .written()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["photo-01-greyscale.png", "photo-02-only-red.png"]);

        let reread = PixelBuffer::open(&sink.written()[1]).unwrap();
        assert_eq!(reread, red);
    }

    #[test]
    fn stem_comes_from_the_file_name() {
        assert_eq!(DirectorySink::stem_for(Path::new("pics/cat.jpeg")), "cat");
        assert_eq!(DirectorySink::stem_for(Path::new("")), "image");
    }
}
