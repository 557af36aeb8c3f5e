//! Panels, accordions and list groups.
//!
//! Each is a container block whose children are its own item blocks
//! (heading/body/footer, accordion items, list group items).

use super::choices::{
    Context, LIST_GROUP_ITEM_CONTEXTS, ListGroupItemState, PANEL_CONTEXTS, check_context,
};
use super::shared::{ClassTokens, join_classes};
use super::{BlockContext, BlockError, ContentNode, count_label};
use serde::{Deserialize, Serialize};

// ============================================================================
// Panel
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Panel {
    pub context: Context,
    pub classes: ClassTokens,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            context: Context::Default,
            classes: ClassTokens::default(),
        }
    }
}

impl ContentNode for Panel {
    fn kind(&self) -> &'static str {
        "panel"
    }

    fn label(&self) -> String {
        self.context.to_string()
    }

    fn class_list(&self) -> String {
        let context = format!("panel-{}", self.context);
        join_classes(["panel", context.as_str(), self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        check_context("context", self.context, PANEL_CONTEXTS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelHeading {
    /// Heading text; child blocks may be used instead.
    pub title: String,
    pub classes: ClassTokens,
}

impl ContentNode for PanelHeading {
    fn kind(&self) -> &'static str {
        "panel_heading"
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn class_list(&self) -> String {
        join_classes(["panel-heading", self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelBody {
    pub classes: ClassTokens,
}

impl ContentNode for PanelBody {
    fn kind(&self) -> &'static str {
        "panel_body"
    }

    fn label(&self) -> String {
        self.classes.as_string()
    }

    fn class_list(&self) -> String {
        join_classes(["panel-body", self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelFooter {
    pub classes: ClassTokens,
}

impl ContentNode for PanelFooter {
    fn kind(&self) -> &'static str {
        "panel_footer"
    }

    fn label(&self) -> String {
        self.classes.as_string()
    }

    fn class_list(&self) -> String {
        join_classes(["panel-footer", self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        Ok(())
    }
}

// ============================================================================
// Accordion
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Accordion {
    /// Zero-based item expanded on page load; none stay open when unset.
    pub index: Option<u32>,
    pub classes: ClassTokens,
}

impl ContentNode for Accordion {
    fn kind(&self) -> &'static str {
        "accordion"
    }

    fn label(&self) -> String {
        self.classes.as_string()
    }

    fn describe(&self, child_count: usize) -> String {
        count_label(child_count, "item", "items")
    }

    fn class_list(&self) -> String {
        join_classes(["panel-group", self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionItem {
    pub title: String,
    pub context: Context,
    pub classes: ClassTokens,
}

impl Default for AccordionItem {
    fn default() -> Self {
        Self {
            title: String::new(),
            context: Context::Default,
            classes: ClassTokens::default(),
        }
    }
}

impl ContentNode for AccordionItem {
    fn kind(&self) -> &'static str {
        "accordion_item"
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn class_list(&self) -> String {
        let context = format!("panel-{}", self.context);
        join_classes(["panel", context.as_str(), self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        check_context("context", self.context, PANEL_CONTEXTS)
    }
}

// ============================================================================
// List group
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListGroup {
    pub classes: ClassTokens,
    /// Emit `list-group` here and `list-group-item` on the items.
    pub add_list_group_class: bool,
}

impl Default for ListGroup {
    fn default() -> Self {
        Self {
            classes: ClassTokens::default(),
            add_list_group_class: true,
        }
    }
}

impl ContentNode for ListGroup {
    fn kind(&self) -> &'static str {
        "list_group"
    }

    fn label(&self) -> String {
        self.classes.as_string()
    }

    fn describe(&self, child_count: usize) -> String {
        count_label(child_count, "item", "items")
    }

    fn class_list(&self) -> String {
        let base = if self.add_list_group_class { "list-group" } else { "" };
        join_classes([base, self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListGroupItem {
    pub title: String,
    pub context: Option<Context>,
    pub state: Option<ListGroupItemState>,
    pub classes: ClassTokens,
}

impl ListGroupItem {
    /// Classes for an item, with the `list-group-item` base class when the
    /// parent list group asks for it.
    pub fn item_classes(&self, with_base: bool) -> String {
        let base = if with_base { "list-group-item" } else { "" };
        let context = self
            .context
            .map(|c| format!("list-group-item-{c}"))
            .unwrap_or_default();
        let state = self.state.map(ListGroupItemState::name).unwrap_or_default();
        join_classes([
            base,
            context.as_str(),
            state,
            self.classes.as_string().as_str(),
        ])
    }
}

impl ContentNode for ListGroupItem {
    fn kind(&self) -> &'static str {
        "list_group_item"
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn class_list(&self) -> String {
        self.item_classes(true)
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        if let Some(context) = self.context {
            check_context("context", context, LIST_GROUP_ITEM_CONTEXTS)?;
        }
        Ok(())
    }
}
