//! Value structs shared by several block types.
//!
//! Blocks assemble the fields they need from these by composition:
//! a button holds a [`LinkTarget`], an image a [`FileRef`], and almost
//! every block carries [`ClassTokens`] and [`Attributes`].

use super::BlockError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Extra CSS classes entered by the editor, whitespace separated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassTokens(String);

impl ClassTokens {
    pub fn new(classes: impl Into<String>) -> Self {
        Self(classes.into())
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens().next().is_none()
    }

    /// Tokens normalized to single spaces.
    pub fn as_string(&self) -> String {
        self.tokens().collect::<Vec<_>>().join(" ")
    }
}

/// Merge class lists, dropping empties and repeated tokens.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out: Vec<&str> = Vec::new();
    for token in parts.into_iter().flat_map(str::split_whitespace) {
        if !out.contains(&token) {
            out.push(token);
        }
    }
    out.join(" ")
}

/// Free-form HTML attributes entered by the editor.
///
/// Some blocks manage certain attributes themselves (`class`, `alt`,
/// `href`); those keys are rejected on validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check keys are well-formed and none of `excluded` is used.
    pub fn validate(&self, excluded: &[&str]) -> Result<(), BlockError> {
        for key in self.0.keys() {
            if excluded.contains(&key.as_str()) {
                return Err(BlockError::ExcludedAttribute(key.clone()));
            }
            if !is_attribute_name(key) {
                return Err(BlockError::InvalidAttribute(key.clone()));
            }
        }
        Ok(())
    }
}

pub(crate) fn is_attribute_name(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("only one of {0} may be set")]
    Ambiguous(String),
    #[error("link target \"{0}\" is not a valid window target")]
    Target(String),
}

/// Where a button or slide links to.
///
/// Page and file destinations are given as already resolved URLs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkTarget {
    pub url: Option<String>,
    pub page: Option<String>,
    pub file: Option<String>,
    pub mailto: Option<String>,
    pub phone: Option<String>,
    /// Fragment appended to whichever destination is set.
    pub anchor: String,
    /// Browsing context: empty, `_blank`, `_self`, `_parent` or `_top`.
    pub target: String,
    pub attributes: Attributes,
}

const LINK_TARGETS: [&str; 5] = ["", "_blank", "_self", "_parent", "_top"];

impl LinkTarget {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    fn destinations(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("phone", self.phone.as_deref()),
            ("mailto", self.mailto.as_deref()),
            ("url", self.url.as_deref()),
            ("page", self.page.as_deref()),
            ("file", self.file.as_deref()),
        ]
    }

    /// Resolved `href`, or an empty string when nothing is set.
    ///
    /// Priority: phone, mailto, url, page, file. The anchor is appended.
    pub fn href(&self) -> String {
        let mut link = match self
            .destinations()
            .into_iter()
            .find_map(|(kind, value)| value.filter(|v| !v.is_empty()).map(|v| (kind, v)))
        {
            Some(("phone", phone)) => format!("tel:{}", phone.replace(' ', "")),
            Some(("mailto", mail)) => format!("mailto:{mail}"),
            Some((_, other)) => other.to_string(),
            None => String::new(),
        };
        if !self.anchor.is_empty() {
            link.push('#');
            link.push_str(&self.anchor);
        }
        link
    }

    pub fn is_set(&self) -> bool {
        !self.href().is_empty()
    }

    pub fn validate(&self) -> Result<(), LinkError> {
        let set: Vec<&str> = self
            .destinations()
            .into_iter()
            .filter(|(_, value)| value.is_some_and(|v| !v.is_empty()))
            .map(|(kind, _)| kind)
            .collect();
        if set.len() > 1 {
            return Err(LinkError::Ambiguous(set.join(", ")));
        }
        if !LINK_TARGETS.contains(&self.target.as_str()) {
            return Err(LinkError::Target(self.target.clone()));
        }
        Ok(())
    }
}

/// A file held by the external file store, already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileRef {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_filename: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    /// Point of interest kept in frame when a thumbnail is cropped.
    #[serde(default)]
    pub subject_location: Option<FocalPoint>,
}

/// Pixel position within the original image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FocalPoint {
    pub x: u32,
    pub y: u32,
}

impl FileRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Display label: the explicit name, else the original file's basename.
    /// Empty when neither is known.
    pub fn label(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        self.original_filename
            .as_deref()
            .and_then(|f| f.rsplit(['/', '\\']).next())
            .unwrap_or_default()
            .to_string()
    }
}

/// A folder held by the external file store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolderRef {
    /// Path shown to editors, e.g. `Gallery / 2024 / Summer`.
    pub path: String,
    /// Images inside the folder, in display order.
    #[serde(default)]
    pub images: Vec<FileRef>,
}

/// Human readable byte count, e.g. `1.5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return if bytes == 1 {
            "1 byte".to_string()
        } else {
            format!("{bytes} bytes")
        };
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Strip HTML tags from a string (simple angle-bracket stripping).
pub fn strip_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Truncate to `max` characters, appending `...` if truncated.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
