//! Content block schemas for Bootstrap 3 components.
//!
//! Every block type is a plain struct assembled from the shared value
//! structs in [`shared`] and implements [`ContentNode`]. [`Block`] is the
//! closed set of block types, serialized with a `type` tag:
//!
//! ```json
//! { "type": "column", "grid": { "sm": { "col": 6 } }, "classes": "lead" }
//! ```
//!
//! | Module | Blocks |
//! |--------|--------|
//! | [`layout`] | `row`, `column` |
//! | [`typography`] | `blockquote`, `cite` |
//! | [`components`] | `button`, `icon`, `label`, `alert`, `well`, `spacer`, `file` |
//! | [`image`] | `image` |
//! | [`panels`] | `panel*`, `accordion*`, `list_group*` |
//! | [`carousel`] | `carousel`, `carousel_slide`, `carousel_slide_folder` |

pub mod carousel;
pub mod choices;
pub mod components;
pub mod image;
pub mod layout;
pub mod panels;
pub mod shared;
pub mod typography;

use crate::config::BlocksConfig;
use crate::grid::{GRID_SIZE, GridError};
use crate::sizing::{AspectRatioError, BreakpointTable};
use serde::{Deserialize, Serialize};
use shared::LinkError;
use thiserror::Error;

pub use carousel::{Carousel, CarouselSlide, CarouselSlideFolder, STYLE_STANDARD};
pub use components::{Alert, Button, File, Icon, Label, Spacer, Well};
pub use image::Image;
pub use layout::{Column, Row};
pub use panels::{
    Accordion, AccordionItem, ListGroup, ListGroupItem, Panel, PanelBody, PanelFooter,
    PanelHeading,
};
pub use shared::{Attributes, ClassTokens, FileRef, FocalPoint, FolderRef, LinkTarget};
pub use typography::{Blockquote, Cite};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("aspect_ratio: {0}")]
    AspectRatio(#[from] AspectRatioError),
    #[error("grid: {0}")]
    Grid(#[from] GridError),
    #[error("link: {0}")]
    Link(#[from] LinkError),
    #[error("{field}: \"{value}\" is not a valid choice")]
    InvalidChoice { field: &'static str, value: String },
    #[error("{field}: at most {max} characters allowed (got {len})")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },
    #[error("{field}: this field is required")]
    Required { field: &'static str },
    #[error("{field}: must be a positive number (got {value})")]
    NotPositive { field: &'static str, value: i64 },
    #[error("attributes: \"{0}\" is managed by the block and cannot be set")]
    ExcludedAttribute(String),
    #[error("attributes: \"{0}\" is not a valid attribute name")]
    InvalidAttribute(String),
    #[error("tag: \"{0}\" is not a valid slug")]
    InvalidTag(String),
}

/// What a block needs to know about the site to validate and size itself.
///
/// Built once from configuration and passed down explicitly; carousel
/// styles beyond the built-in one come from here rather than from any
/// global registry.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockContext {
    pub grid_size: u8,
    pub breakpoints: BreakpointTable,
    pub carousel_styles: Vec<String>,
}

impl BlockContext {
    pub fn from_config(config: &BlocksConfig) -> Self {
        Self {
            grid_size: config.grid.size,
            breakpoints: config.breakpoints.clone(),
            carousel_styles: config.carousel.additional_styles.clone(),
        }
    }

    /// Carousel styles editors may pick, built-in first.
    pub fn carousel_style_choices(&self) -> Vec<&str> {
        std::iter::once(STYLE_STANDARD)
            .chain(self.carousel_styles.iter().map(String::as_str))
            .collect()
    }
}

impl Default for BlockContext {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            breakpoints: BreakpointTable::bootstrap3(),
            carousel_styles: Vec::new(),
        }
    }
}

/// Common behavior of every block type.
pub trait ContentNode {
    /// Block type name as used in documents, e.g. `"column"`.
    fn kind(&self) -> &'static str;

    /// Short description shown in editor trees.
    fn label(&self) -> String;

    /// Like [`label`](Self::label), for containers that mention their
    /// children (e.g. `"3 columns"`).
    fn describe(&self, child_count: usize) -> String {
        let _ = child_count;
        self.label()
    }

    /// Space-separated classes for the block's outer element.
    fn class_list(&self) -> String;

    fn validate(&self, ctx: &BlockContext) -> Result<(), BlockError>;
}

/// Any block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Row(Row),
    Column(Column),
    Blockquote(Blockquote),
    Cite(Cite),
    Button(Button),
    Image(Image),
    Icon(Icon),
    Label(Label),
    Alert(Alert),
    Well(Well),
    Spacer(Spacer),
    File(File),
    Panel(Panel),
    PanelHeading(PanelHeading),
    PanelBody(PanelBody),
    PanelFooter(PanelFooter),
    Accordion(Accordion),
    AccordionItem(AccordionItem),
    ListGroup(ListGroup),
    ListGroupItem(ListGroupItem),
    Carousel(Carousel),
    CarouselSlide(CarouselSlide),
    CarouselSlideFolder(CarouselSlideFolder),
}

impl Block {
    pub fn node(&self) -> &dyn ContentNode {
        match self {
            Block::Row(b) => b,
            Block::Column(b) => b,
            Block::Blockquote(b) => b,
            Block::Cite(b) => b,
            Block::Button(b) => b,
            Block::Image(b) => b,
            Block::Icon(b) => b,
            Block::Label(b) => b,
            Block::Alert(b) => b,
            Block::Well(b) => b,
            Block::Spacer(b) => b,
            Block::File(b) => b,
            Block::Panel(b) => b,
            Block::PanelHeading(b) => b,
            Block::PanelBody(b) => b,
            Block::PanelFooter(b) => b,
            Block::Accordion(b) => b,
            Block::AccordionItem(b) => b,
            Block::ListGroup(b) => b,
            Block::ListGroupItem(b) => b,
            Block::Carousel(b) => b,
            Block::CarouselSlide(b) => b,
            Block::CarouselSlideFolder(b) => b,
        }
    }
}

impl ContentNode for Block {
    fn kind(&self) -> &'static str {
        self.node().kind()
    }

    fn label(&self) -> String {
        self.node().label()
    }

    fn describe(&self, child_count: usize) -> String {
        self.node().describe(child_count)
    }

    fn class_list(&self) -> String {
        self.node().class_list()
    }

    fn validate(&self, ctx: &BlockContext) -> Result<(), BlockError> {
        self.node().validate(ctx)
    }
}

/// Reject values longer than `max` characters.
pub(crate) fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), BlockError> {
    let len = value.chars().count();
    if len > max {
        return Err(BlockError::TooLong { field, max, len });
    }
    Ok(())
}

/// Reject non-positive values when present.
pub(crate) fn check_positive(field: &'static str, value: Option<i64>) -> Result<(), BlockError> {
    match value {
        Some(v) if v <= 0 => Err(BlockError::NotPositive { field, value: v }),
        _ => Ok(()),
    }
}

/// `"1 item"` / `"N items"`.
pub(crate) fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}
