//! Enumerated choices for block fields.
//!
//! Bootstrap reuses the same contextual names (`primary`, `danger`, ...)
//! across components, but each component only supports a subset. [`Context`]
//! holds the union; the `*_CONTEXTS` lists say which ones each field accepts.

use super::BlockError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contextual color class suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    Default,
    Primary,
    Success,
    Info,
    Warning,
    Danger,
    Muted,
    Link,
}

impl Context {
    pub fn name(self) -> &'static str {
        match self {
            Context::Default => "default",
            Context::Primary => "primary",
            Context::Success => "success",
            Context::Info => "info",
            Context::Warning => "warning",
            Context::Danger => "danger",
            Context::Muted => "muted",
            Context::Link => "link",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Alerts and other plain contextual components.
pub const CONTEXTS: &[Context] = &[
    Context::Success,
    Context::Info,
    Context::Warning,
    Context::Danger,
];

pub const LABEL_CONTEXTS: &[Context] = &[
    Context::Default,
    Context::Primary,
    Context::Success,
    Context::Info,
    Context::Warning,
    Context::Danger,
];

pub const BUTTON_CONTEXTS: &[Context] = &[
    Context::Default,
    Context::Primary,
    Context::Success,
    Context::Info,
    Context::Warning,
    Context::Danger,
    Context::Link,
];

pub const TEXT_LINK_CONTEXTS: &[Context] = &[
    Context::Primary,
    Context::Success,
    Context::Info,
    Context::Warning,
    Context::Danger,
    Context::Muted,
];

/// Panels and accordion items.
pub const PANEL_CONTEXTS: &[Context] = LABEL_CONTEXTS;

pub const LIST_GROUP_ITEM_CONTEXTS: &[Context] = CONTEXTS;

/// Check `value` is one of `allowed`.
pub fn check_context(
    field: &'static str,
    value: Context,
    allowed: &[Context],
) -> Result<(), BlockError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(BlockError::InvalidChoice {
            field,
            value: value.to_string(),
        })
    }
}

/// Component size. `Default` renders no size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "lg")]
    Large,
    #[default]
    #[serde(rename = "")]
    Default,
    #[serde(rename = "sm")]
    Small,
    #[serde(rename = "xs")]
    ExtraSmall,
}

impl Size {
    /// Class suffix, empty for the default size.
    pub fn suffix(self) -> &'static str {
        match self {
            Size::Large => "lg",
            Size::Default => "",
            Size::Small => "sm",
            Size::ExtraSmall => "xs",
        }
    }

    /// `{prefix}-{suffix}`, or `None` for the default size.
    pub fn class(self, prefix: &str) -> Option<String> {
        match self {
            Size::Default => None,
            other => Some(format!("{prefix}-{}", other.suffix())),
        }
    }
}

/// Whether a button block renders as a text link or a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkOrButton {
    #[default]
    Link,
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageShape {
    Rounded,
    Circle,
}

impl ImageShape {
    pub fn class(self) -> &'static str {
        match self {
            ImageShape::Rounded => "img-rounded",
            ImageShape::Circle => "img-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListGroupItemState {
    Active,
    Disabled,
}

impl ListGroupItemState {
    pub fn name(self) -> &'static str {
        match self {
            ListGroupItemState::Active => "active",
            ListGroupItemState::Disabled => "disabled",
        }
    }
}

/// Carousel slide transition. Only sliding is supported by Bootstrap 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionEffect {
    Slide,
}
