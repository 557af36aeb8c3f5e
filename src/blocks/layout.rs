//! Grid system blocks: rows and the columns inside them.

use super::shared::{Attributes, ClassTokens, join_classes};
use super::{BlockContext, BlockError, ContentNode, check_length, count_label};
use crate::grid::{GRID_SIZE, GridColumnSpec, GridError, GridValues};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Row {
    pub classes: ClassTokens,
    pub attributes: Attributes,
}

impl ContentNode for Row {
    fn kind(&self) -> &'static str {
        "row"
    }

    fn label(&self) -> String {
        self.classes.as_string()
    }

    fn describe(&self, child_count: usize) -> String {
        let columns = count_label(child_count, "column", "columns");
        if self.classes.is_empty() {
            columns
        } else {
            format!("{} ({columns})", self.classes.as_string())
        }
    }

    fn class_list(&self) -> String {
        join_classes(["row", self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        self.attributes.validate(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Column {
    pub classes: ClassTokens,
    pub attributes: Attributes,
    /// Element name for the column wrapper.
    pub tag: String,
    /// Grid directives as written; checked against the grid size in use.
    pub grid: GridValues,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            classes: ClassTokens::default(),
            attributes: Attributes::default(),
            tag: "div".to_string(),
            grid: GridValues::default(),
        }
    }
}

const MAX_TAG_LENGTH: usize = 50;

impl Column {
    /// The checked grid for a `grid_size`-column layout.
    pub fn grid_spec(&self, grid_size: u8) -> Result<GridColumnSpec, GridError> {
        self.grid.check(grid_size)
    }

    /// Classes for a `grid_size`-column layout. A grid with any out-of-range
    /// value contributes no classes at all.
    pub fn classes_for(&self, grid_size: u8) -> String {
        let grid = self
            .grid_spec(grid_size)
            .map(|spec| spec.class_string())
            .unwrap_or_default();
        join_classes([grid.as_str(), self.classes.as_string().as_str()])
    }
}

fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl ContentNode for Column {
    fn kind(&self) -> &'static str {
        "column"
    }

    fn label(&self) -> String {
        let grid = self.grid.describe();
        let text = join_classes([grid.as_str(), self.classes.as_string().as_str()]);
        if self.tag == "div" {
            text
        } else {
            format!("{text} ({})", self.tag).trim_start().to_string()
        }
    }

    fn class_list(&self) -> String {
        self.classes_for(GRID_SIZE)
    }

    fn validate(&self, ctx: &BlockContext) -> Result<(), BlockError> {
        if !is_slug(&self.tag) {
            return Err(BlockError::InvalidTag(self.tag.clone()));
        }
        check_length("tag", &self.tag, MAX_TAG_LENGTH)?;
        self.grid_spec(ctx.grid_size)?;
        self.attributes.validate(&[])
    }
}
