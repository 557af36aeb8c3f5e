//! Responsive images.

use super::choices::ImageShape;
use super::shared::{Attributes, ClassTokens, FileRef, join_classes};
use super::{BlockContext, BlockError, ContentNode, check_positive};
use crate::sizing::{AspectRatioSpec, DeviceBreakpoint, SizeRequest, SizeSet, compute_targets};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Image {
    pub file: Option<FileRef>,
    pub alt: String,
    pub title: String,
    /// Output the source file as is, without a size set.
    pub use_original_image: bool,
    /// Width in pixels, replacing the breakpoint widths.
    pub override_width: Option<i64>,
    /// Height in pixels, used when no aspect ratio is set.
    pub override_height: Option<i64>,
    pub aspect_ratio: AspectRatioSpec,
    pub shape: Option<ImageShape>,
    /// Adds `img-thumbnail`.
    pub thumbnail: bool,
    /// Adds `img-responsive` (100% of the parent's width).
    pub img_responsive: bool,
    pub attributes: Attributes,
    pub classes: ClassTokens,
}

impl Default for Image {
    fn default() -> Self {
        Self {
            file: None,
            alt: String::new(),
            title: String::new(),
            use_original_image: false,
            override_width: None,
            override_height: None,
            aspect_ratio: AspectRatioSpec::Free,
            shape: None,
            thumbnail: false,
            img_responsive: true,
            attributes: Attributes::default(),
            classes: ClassTokens::default(),
        }
    }
}

impl Image {
    pub fn size_request(&self) -> SizeRequest {
        SizeRequest {
            ratio: self.aspect_ratio,
            override_width: self.override_width,
            override_height: self.override_height,
        }
    }

    /// Targets per breakpoint. Empty when no file is attached.
    pub fn srcset(&self, breakpoints: &[DeviceBreakpoint]) -> SizeSet {
        if self.file.is_none() {
            return SizeSet::new();
        }
        compute_targets(
            breakpoints,
            self.aspect_ratio,
            self.override_width,
            self.override_height,
        )
    }
}

impl ContentNode for Image {
    fn kind(&self) -> &'static str {
        "image"
    }

    fn label(&self) -> String {
        self.file.as_ref().map(FileRef::label).unwrap_or_default()
    }

    fn class_list(&self) -> String {
        let responsive = if self.img_responsive { "img-responsive" } else { "" };
        let shape = self.shape.map(ImageShape::class).unwrap_or_default();
        let thumbnail = if self.thumbnail { "img-thumbnail" } else { "" };
        join_classes([
            responsive,
            shape,
            thumbnail,
            self.classes.as_string().as_str(),
        ])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        if self.file.is_none() {
            return Err(BlockError::Required { field: "file" });
        }
        check_positive("override_width", self.override_width)?;
        check_positive("override_height", self.override_height)?;
        if !self.aspect_ratio.is_choice() {
            return Err(BlockError::InvalidChoice {
                field: "aspect_ratio",
                value: self.aspect_ratio.to_string(),
            });
        }
        self.attributes.validate(&["alt", "class"])
    }
}
