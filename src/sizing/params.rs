//! Value types produced and consumed by the size-set calculator.
//!
//! ## Types
//!
//! - [`ResponsiveImageTarget`]: target dimensions and crop/upscale directives for one breakpoint.
//! - [`SizeSet`]: breakpoint identifier → target, in breakpoint table order.
//! - [`SizeRequest`]: the per-image inputs for a batch computation.

use super::aspect_ratio::AspectRatioSpec;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// What to ask the thumbnailer for at one breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsiveImageTarget {
    pub width: i64,
    /// 0 means natural height.
    pub height: i64,
    pub crop: bool,
    pub upscale: bool,
    /// `srcset` width descriptor, e.g. `800w`.
    pub width_descriptor: String,
    /// Thumbnail size string, e.g. `800x450`.
    pub size_descriptor: String,
}

impl ResponsiveImageTarget {
    /// `(width, height)` pair.
    pub fn size(&self) -> (i64, i64) {
        (self.width, self.height)
    }
}

/// Ordered breakpoint → target mapping.
///
/// Keeps insertion order, which is always the breakpoint table order.
/// Serializes as a JSON object whose keys appear in that order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SizeSet {
    entries: Vec<(String, ResponsiveImageTarget)>,
}

impl SizeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, identifier: String, target: ResponsiveImageTarget) {
        self.entries.push((identifier, target));
    }

    pub fn get(&self, identifier: &str) -> Option<&ResponsiveImageTarget> {
        self.entries
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, target)| target)
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResponsiveImageTarget)> {
        self.entries.iter().map(|(id, target)| (id.as_str(), target))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The target with the widest width, used as the `src` fallback.
    pub fn largest(&self) -> Option<&ResponsiveImageTarget> {
        self.entries
            .iter()
            .map(|(_, target)| target)
            .max_by_key(|target| target.width)
    }

    /// Build an HTML `srcset` value: `"<url> <width>w, ..."`.
    ///
    /// Targets sharing a width descriptor are listed once, as browsers reject
    /// duplicate descriptors.
    pub fn srcset(&self, mut url: impl FnMut(&ResponsiveImageTarget) -> String) -> String {
        let mut seen: Vec<&str> = Vec::new();
        let mut candidates = Vec::new();
        for (_, target) in &self.entries {
            if seen.contains(&target.width_descriptor.as_str()) {
                continue;
            }
            seen.push(&target.width_descriptor);
            candidates.push(format!("{} {}", url(target), target.width_descriptor));
        }
        candidates.join(", ")
    }
}

impl Serialize for SizeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, target) in &self.entries {
            map.serialize_entry(id, target)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a SizeSet {
    type Item = (&'a str, &'a ResponsiveImageTarget);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Inputs for one size-set computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeRequest {
    pub ratio: AspectRatioSpec,
    pub override_width: Option<i64>,
    pub override_height: Option<i64>,
}
