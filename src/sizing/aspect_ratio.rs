//! Aspect ratio strings of the form `"16x9"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AspectRatioError {
    #[error("malformed aspect ratio \"{0}\" (expected <width>x<height>, e.g. 16x9)")]
    Malformed(String),
}

/// A declared width:height ratio, or no ratio at all.
///
/// `Free` means the image is not cropped: the natural (or overridden)
/// height is kept. Serializes to and from its compact string form, with
/// `Free` as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AspectRatioSpec {
    #[default]
    Free,
    Fixed { width: u32, height: u32 },
}

/// Ratios offered as choices for images and carousels, landscape first.
/// Their portrait reversals are accepted as well.
pub const ASPECT_RATIOS: [(u32, u32); 6] = [(1, 1), (4, 3), (16, 9), (16, 10), (21, 9), (3, 2)];

impl AspectRatioSpec {
    /// Parse `""` or `"<digits>x<digits>"`, both sides strictly positive.
    pub fn parse(text: &str) -> Result<Self, AspectRatioError> {
        if text.is_empty() {
            return Ok(AspectRatioSpec::Free);
        }
        let malformed = || AspectRatioError::Malformed(text.to_string());

        let mut parts = text.split('x');
        let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let width = parse_component(w).ok_or_else(malformed)?;
        let height = parse_component(h).ok_or_else(malformed)?;
        Ok(AspectRatioSpec::Fixed { width, height })
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, AspectRatioSpec::Fixed { .. })
    }

    /// `(width, height)` when a ratio is declared.
    pub fn components(&self) -> Option<(u32, u32)> {
        match *self {
            AspectRatioSpec::Free => None,
            AspectRatioSpec::Fixed { width, height } => Some((width, height)),
        }
    }

    /// Swap width and height (landscape ↔ portrait).
    pub fn reversed(self) -> Self {
        match self {
            AspectRatioSpec::Free => AspectRatioSpec::Free,
            AspectRatioSpec::Fixed { width, height } => AspectRatioSpec::Fixed {
                width: height,
                height: width,
            },
        }
    }

    /// Whether this ratio is one of the offered choices (or free).
    pub fn is_choice(&self) -> bool {
        match self.components() {
            None => true,
            Some((w, h)) => ASPECT_RATIOS.contains(&(w, h)) || ASPECT_RATIOS.contains(&(h, w)),
        }
    }
}

/// Offered choices as strings, landscape ratios followed by their reversals.
pub fn aspect_ratio_choices() -> Vec<String> {
    let landscape = ASPECT_RATIOS.iter().copied();
    let portrait = ASPECT_RATIOS
        .iter()
        .filter(|(w, h)| w != h)
        .map(|&(w, h)| (h, w));
    landscape
        .chain(portrait)
        .map(|(w, h)| format!("{w}x{h}"))
        .collect()
}

fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|&n| n > 0)
}

impl FromStr for AspectRatioSpec {
    type Err = AspectRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AspectRatioSpec::parse(s)
    }
}

impl TryFrom<String> for AspectRatioSpec {
    type Error = AspectRatioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AspectRatioSpec::parse(&value)
    }
}

impl From<AspectRatioSpec> for String {
    fn from(value: AspectRatioSpec) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AspectRatioSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectRatioSpec::Free => Ok(()),
            AspectRatioSpec::Fixed { width, height } => write!(f, "{width}x{height}"),
        }
    }
}
