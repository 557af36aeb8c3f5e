//! Blockquotes and their citations.

use super::shared::{Attributes, ClassTokens, join_classes};
use super::{BlockContext, BlockError, ContentNode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Blockquote {
    /// Right-align the quote with `blockquote-reverse`.
    pub reverse: bool,
    pub classes: ClassTokens,
    pub attributes: Attributes,
}

impl ContentNode for Blockquote {
    fn kind(&self) -> &'static str {
        "blockquote"
    }

    fn label(&self) -> String {
        if self.reverse {
            ".blockquote-reverse".to_string()
        } else {
            String::new()
        }
    }

    fn class_list(&self) -> String {
        let reverse = if self.reverse { "blockquote-reverse" } else { "" };
        join_classes([reverse, self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        self.attributes.validate(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Cite {
    pub classes: ClassTokens,
    pub attributes: Attributes,
}

impl ContentNode for Cite {
    fn kind(&self) -> &'static str {
        "cite"
    }

    fn label(&self) -> String {
        String::new()
    }

    fn class_list(&self) -> String {
        self.classes.as_string()
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        self.attributes.validate(&[])
    }
}
