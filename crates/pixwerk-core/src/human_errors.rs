// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain-language error messages for the command line.
//
// Every technical error is mapped to a short sentence with a suggestion.

use crate::error::PixwerkError;

const FILTER_NAMES: &str = "greyscale, invert, only-red, only-blue, only-green or posterize";

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user can fix it (wrong path, bad flag, unreadable config).
    ActionRequired,
    /// Retrying with the same inputs will fail the same way.
    Permanent,
}

/// A human-readable error with a message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    pub severity: Severity,
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.message, self.suggestion)
    }
}

/// Convert a `PixwerkError` into a `HumanError`.
pub fn humanize_error(err: &PixwerkError) -> HumanError {
    match err {
        PixwerkError::ImageLoad(detail) => HumanError {
            message: "The image could not be opened.".into(),
            suggestion: format!(
                "Check the path and that the file is a PNG, JPEG or similar. ({detail})"
            ),
            severity: Severity::ActionRequired,
        },

        PixwerkError::ImageEncode(detail) => HumanError {
            message: "A result could not be written.".into(),
            suggestion: format!("Make sure the output directory is writable. ({detail})"),
            severity: Severity::ActionRequired,
        },

        PixwerkError::WatermarkOutOfBounds { first, second, .. } => HumanError {
            message: "The two images don't overlap the way the watermark expects.".into(),
            suggestion: format!(
                "A {}x{} image can't be blended with a {}x{} one by area. Try --bounds overlap.",
                first.0, first.1, second.0, second.1
            ),
            severity: Severity::Permanent,
        },

        PixwerkError::UnknownFilter(name) => HumanError {
            message: format!("There is no filter called \"{name}\"."),
            suggestion: format!("Use {FILTER_NAMES}."),
            severity: Severity::ActionRequired,
        },

        PixwerkError::UnknownBounds(name) => HumanError {
            message: format!("\"{name}\" is not a watermark bounds policy."),
            suggestion: "Use area-branch or overlap.".into(),
            severity: Severity::ActionRequired,
        },

        PixwerkError::Config(detail) => HumanError {
            message: "The configuration file could not be used.".into(),
            suggestion: format!("Fix or remove the file. ({detail})"),
            severity: Severity::ActionRequired,
        },

        PixwerkError::Io(io) => HumanError {
            message: "A file operation failed.".into(),
            suggestion: format!("Check paths and permissions. ({io})"),
            severity: Severity::ActionRequired,
        },

        PixwerkError::Serialization(detail) => HumanError {
            message: "Settings could not be encoded.".into(),
            suggestion: format!("This is a bug; please report it. ({detail})"),
            severity: Severity::Permanent,
        },
    }
}
