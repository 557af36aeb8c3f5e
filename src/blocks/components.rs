//! Buttons, icons, labels, alerts, wells, spacers and file downloads.

use super::choices::{
    BUTTON_CONTEXTS, CONTEXTS, Context, LABEL_CONTEXTS, LinkOrButton, Size, TEXT_LINK_CONTEXTS,
    check_context,
};
use super::shared::{Attributes, ClassTokens, FileRef, LinkTarget, join_classes};
use super::{BlockContext, BlockError, ContentNode, check_length};
use serde::{Deserialize, Serialize};

const MAX_ICON_LENGTH: usize = 255;

fn check_icons(left: &str, right: &str) -> Result<(), BlockError> {
    check_length("icon_left", left, MAX_ICON_LENGTH)?;
    check_length("icon_right", right, MAX_ICON_LENGTH)
}

// ============================================================================
// Button
// ============================================================================

/// A link rendered either as a Bootstrap button or as a text link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Button {
    pub label: String,
    pub link_type: LinkOrButton,
    pub btn_context: Context,
    pub btn_size: Size,
    pub btn_block: bool,
    pub txt_context: Option<Context>,
    pub icon_left: String,
    pub icon_right: String,
    pub classes: ClassTokens,
    pub link: LinkTarget,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            label: String::new(),
            link_type: LinkOrButton::default(),
            btn_context: Context::Default,
            btn_size: Size::default(),
            btn_block: false,
            txt_context: None,
            icon_left: String::new(),
            icon_right: String::new(),
            classes: ClassTokens::default(),
            link: LinkTarget::default(),
        }
    }
}

impl ContentNode for Button {
    fn kind(&self) -> &'static str {
        "button"
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn class_list(&self) -> String {
        let extra = self.classes.as_string();
        match self.link_type {
            LinkOrButton::Button => {
                let context = format!("btn-{}", self.btn_context);
                let size = self.btn_size.class("btn").unwrap_or_default();
                let block = if self.btn_block { "btn-block" } else { "" };
                join_classes(["btn", context.as_str(), size.as_str(), block, extra.as_str()])
            }
            LinkOrButton::Link => {
                let context = self
                    .txt_context
                    .map(|c| format!("text-{c}"))
                    .unwrap_or_default();
                join_classes([context.as_str(), extra.as_str()])
            }
        }
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        check_length("label", &self.label, 255)?;
        check_context("btn_context", self.btn_context, BUTTON_CONTEXTS)?;
        if let Some(txt) = self.txt_context {
            check_context("txt_context", txt, TEXT_LINK_CONTEXTS)?;
        }
        check_icons(&self.icon_left, &self.icon_right)?;
        self.link.validate()?;
        self.link.attributes.validate(&["class", "href", "target"])
    }
}

// ============================================================================
// Icon
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Icon {
    /// Icon classes, e.g. `glyphicon glyphicon-star` or `fa fa-star`.
    pub icon: String,
    pub classes: ClassTokens,
    pub attributes: Attributes,
}

impl ContentNode for Icon {
    fn kind(&self) -> &'static str {
        "icon"
    }

    fn label(&self) -> String {
        self.icon.clone()
    }

    fn class_list(&self) -> String {
        join_classes([self.icon.as_str(), self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        if self.icon.trim().is_empty() {
            return Err(BlockError::Required { field: "icon" });
        }
        check_length("icon", &self.icon, MAX_ICON_LENGTH)?;
        self.attributes.validate(&["class"])
    }
}

// ============================================================================
// Label
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Label {
    pub label: String,
    pub context: Context,
    pub classes: ClassTokens,
    pub attributes: Attributes,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            label: String::new(),
            context: Context::Default,
            classes: ClassTokens::default(),
            attributes: Attributes::default(),
        }
    }
}

impl ContentNode for Label {
    fn kind(&self) -> &'static str {
        "label"
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn class_list(&self) -> String {
        let context = format!("label-{}", self.context);
        join_classes(["label", context.as_str(), self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        check_length("label", &self.label, 256)?;
        check_context("context", self.context, LABEL_CONTEXTS)?;
        self.attributes.validate(&["class"])
    }
}

// ============================================================================
// Alert
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Alert {
    pub context: Context,
    /// Icon shown before the alert title.
    pub icon: String,
    pub classes: ClassTokens,
    pub attributes: Attributes,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            context: Context::Info,
            icon: String::new(),
            classes: ClassTokens::default(),
            attributes: Attributes::default(),
        }
    }
}

impl ContentNode for Alert {
    fn kind(&self) -> &'static str {
        "alert"
    }

    fn label(&self) -> String {
        self.classes.as_string()
    }

    fn class_list(&self) -> String {
        let context = format!("alert-{}", self.context);
        join_classes(["alert", context.as_str(), self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        check_context("context", self.context, CONTEXTS)?;
        check_length("icon", &self.icon, MAX_ICON_LENGTH)?;
        self.attributes.validate(&["class"])
    }
}

// ============================================================================
// Well / Spacer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Well {
    pub size: Size,
    pub classes: ClassTokens,
}

impl ContentNode for Well {
    fn kind(&self) -> &'static str {
        "well"
    }

    fn label(&self) -> String {
        self.classes.as_string()
    }

    fn class_list(&self) -> String {
        let size = self.size.class("well").unwrap_or_default();
        join_classes(["well", size.as_str(), self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        // Wells only come in large and small.
        if self.size == Size::ExtraSmall {
            return Err(BlockError::InvalidChoice {
                field: "size",
                value: self.size.suffix().to_string(),
            });
        }
        Ok(())
    }
}

/// Vertical whitespace between blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Spacer {
    pub size: Size,
    pub classes: ClassTokens,
}

impl ContentNode for Spacer {
    fn kind(&self) -> &'static str {
        "spacer"
    }

    fn label(&self) -> String {
        format!("size-{} {}", self.size.suffix(), self.classes.as_string())
            .trim_end()
            .to_string()
    }

    fn class_list(&self) -> String {
        let size = self.size.class("spacer").unwrap_or_default();
        join_classes(["spacer", size.as_str(), self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        Ok(())
    }
}

// ============================================================================
// File
// ============================================================================

/// A download link to a file in the file store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct File {
    pub file: Option<FileRef>,
    /// Link text; falls back to the file's label.
    pub name: String,
    pub open_new_window: bool,
    pub show_file_size: bool,
    pub icon_left: String,
    pub icon_right: String,
    pub classes: ClassTokens,
}

impl File {
    /// Text for the download link.
    pub fn link_text(&self) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        self.file
            .as_ref()
            .map(FileRef::label)
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "File".to_string())
    }
}

impl ContentNode for File {
    fn kind(&self) -> &'static str {
        "file"
    }

    fn label(&self) -> String {
        self.link_text()
    }

    fn class_list(&self) -> String {
        self.classes.as_string()
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        if self.file.is_none() {
            return Err(BlockError::Required { field: "file" });
        }
        check_icons(&self.icon_left, &self.icon_right)
    }
}
