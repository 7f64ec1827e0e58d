// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types shared by the filter crate and the binary.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PixwerkError;

/// The single-image filters, in the order the program applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    /// Average the three channels.
    #[serde(alias = "grayscale")]
    Greyscale,
    /// Replace each channel `c` with `|c - 255|`.
    Invert,
    /// Keep red, zero green and blue.
    OnlyRed,
    /// Keep blue, zero red and green.
    OnlyBlue,
    /// Keep green, zero red and blue.
    OnlyGreen,
    /// Keep only the strictly dominant channel.
    Posterize,
}

impl FilterKind {
    /// Stable lowercase label, used for file names and log fields.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Greyscale => "greyscale",
            Self::Invert => "invert",
            Self::OnlyRed => "only-red",
            Self::OnlyBlue => "only-blue",
            Self::OnlyGreen => "only-green",
            Self::Posterize => "posterize",
        }
    }

    /// Every filter in application order.
    pub fn all() -> &'static [Self] {
        const ALL: [FilterKind; 6] = [
            FilterKind::Greyscale,
            FilterKind::Invert,
            FilterKind::OnlyRed,
            FilterKind::OnlyBlue,
            FilterKind::OnlyGreen,
            FilterKind::Posterize,
        ];
        &ALL
    }

    /// Parse a comma-separated list such as `"invert,posterize"`.
    pub fn parse_list(list: &str) -> Result<Vec<Self>, PixwerkError> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterKind {
    type Err = PixwerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "greyscale" | "grayscale" => Ok(Self::Greyscale),
            "invert" => Ok(Self::Invert),
            "only-red" | "red" => Ok(Self::OnlyRed),
            "only-blue" | "blue" => Ok(Self::OnlyBlue),
            "only-green" | "green" => Ok(Self::OnlyGreen),
            "posterize" | "posterise" => Ok(Self::Posterize),
            _ => Err(PixwerkError::UnknownFilter(s.to_string())),
        }
    }
}

/// How the watermark blend decides which region to iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WatermarkBounds {
    /// Compare total pixel areas. When the first image is strictly larger,
    /// iterate over the second image's width and height; otherwise over the
    /// first image's. Shapes that don't nest fail with
    /// [`PixwerkError::WatermarkOutOfBounds`].
    #[default]
    AreaBranch,
    /// Iterate over `min(w1, w2) x min(h1, h2)`. Never fails.
    Overlap,
}

impl WatermarkBounds {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AreaBranch => "area-branch",
            Self::Overlap => "overlap",
        }
    }
}

impl std::fmt::Display for WatermarkBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WatermarkBounds {
    type Err = PixwerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "area-branch" | "area" => Ok(Self::AreaBranch),
            "overlap" => Ok(Self::Overlap),
            _ => Err(PixwerkError::UnknownBounds(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for kind in FilterKind::all() {
            assert_eq!(kind.label().parse::<FilterKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn american_spelling_is_accepted() {
        assert_eq!(
            "Grayscale".parse::<FilterKind>().unwrap(),
            FilterKind::Greyscale
        );
        assert_eq!(
            "only_red".parse::<FilterKind>().unwrap(),
            FilterKind::OnlyRed
        );
    }

    #[test]
    fn unknown_filter_is_rejected() {
        let err = "sepia".parse::<FilterKind>().unwrap_err();
        assert!(matches!(err, PixwerkError::UnknownFilter(ref name) if name == "sepia"));
    }

    #[test]
    fn parse_list_keeps_order_and_skips_blanks() {
        let kinds = FilterKind::parse_list("posterize, invert,,greyscale").unwrap();
        assert_eq!(
            kinds,
            vec![FilterKind::Posterize, FilterKind::Invert, FilterKind::Greyscale]
        );
    }

    #[test]
    fn application_order_matches_program_chain() {
        let labels: Vec<_> = FilterKind::all().iter().map(FilterKind::label).collect();
        assert_eq!(
            labels,
            [
                "greyscale",
                "invert",
                "only-red",
                "only-blue",
                "only-green",
                "posterize"
            ]
        );
    }

    #[test]
    fn bounds_default_is_area_branch() {
        assert_eq!(WatermarkBounds::default(), WatermarkBounds::AreaBranch);
        assert_eq!(
            "overlap".parse::<WatermarkBounds>().unwrap(),
            WatermarkBounds::Overlap
        );
        assert!("nearest".parse::<WatermarkBounds>().is_err());
    }

    #[test]
    fn bounds_serialize_kebab_case() {
        let json = serde_json::to_string(&WatermarkBounds::AreaBranch).unwrap();
        assert_eq!(json, "\"area-branch\"");
    }

    #[test]
    fn filter_kinds_use_their_labels_in_json() {
        let json = serde_json::to_string(&[FilterKind::OnlyRed, FilterKind::Posterize]).unwrap();
        assert_eq!(json, r#"["only-red","posterize"]"#);

        let kinds: Vec<FilterKind> = serde_json::from_str(r#"["grayscale", "invert"]"#).unwrap();
        assert_eq!(kinds, [FilterKind::Greyscale, FilterKind::Invert]);
    }
}
