//! Carousels and their slides.
//!
//! A carousel's children are slides, or folders whose images each become a
//! slide. Slides are sized from the carousel's aspect ratio at every
//! breakpoint; there are no per-slide size overrides.

use super::choices::TransitionEffect;
use super::shared::{
    Attributes, ClassTokens, FileRef, FolderRef, LinkTarget, join_classes, strip_tags,
    truncate_chars,
};
use super::{BlockContext, BlockError, ContentNode, check_length};
use crate::sizing::{AspectRatioSpec, DeviceBreakpoint, SizeRequest, SizeSet, compute_targets};
use serde::{Deserialize, Serialize};

/// The built-in carousel style, always available.
pub const STYLE_STANDARD: &str = "standard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Carousel {
    /// One of [`BlockContext::carousel_style_choices`].
    pub style: String,
    pub aspect_ratio: AspectRatioSpec,
    pub transition_effect: Option<TransitionEffect>,
    /// Start cycling on page load.
    pub ride: bool,
    /// Delay between slides, in milliseconds.
    pub interval: i64,
    /// Cycle continuously instead of stopping at the ends.
    pub wrap: bool,
    /// Pause on mouse enter, resume on mouse leave.
    pub pause: bool,
    pub classes: ClassTokens,
}

impl Default for Carousel {
    fn default() -> Self {
        Self {
            style: STYLE_STANDARD.to_string(),
            aspect_ratio: AspectRatioSpec::Free,
            transition_effect: None,
            ride: true,
            interval: 5000,
            wrap: true,
            pause: true,
            classes: ClassTokens::default(),
        }
    }
}

impl Carousel {
    pub fn size_request(&self) -> SizeRequest {
        SizeRequest {
            ratio: self.aspect_ratio,
            ..SizeRequest::default()
        }
    }

    /// Slide targets per breakpoint, from the carousel's aspect ratio only.
    pub fn srcset(&self, breakpoints: &[DeviceBreakpoint]) -> SizeSet {
        compute_targets(breakpoints, self.aspect_ratio, None, None)
    }
}

impl ContentNode for Carousel {
    fn kind(&self) -> &'static str {
        "carousel"
    }

    fn label(&self) -> String {
        let transition = match self.transition_effect {
            Some(TransitionEffect::Slide) => "slide",
            None => "",
        };
        let mut parts = vec![
            format!("Style: {}", self.style),
            format!("Transition Effect: {transition}"),
            format!("Ride: {}", self.ride),
        ];
        if self.ride {
            parts.push(format!("Interval: {}", self.interval));
        }
        parts.push(format!("Aspect Ratio: {}", self.aspect_ratio));
        parts.join(", ")
    }

    fn class_list(&self) -> String {
        let style = format!("carousel-{}", self.style);
        let transition = if self.transition_effect.is_some() { "slide" } else { "" };
        join_classes([
            "carousel",
            transition,
            style.as_str(),
            self.classes.as_string().as_str(),
        ])
    }

    fn validate(&self, ctx: &BlockContext) -> Result<(), BlockError> {
        if !ctx.carousel_style_choices().contains(&self.style.as_str()) {
            return Err(BlockError::InvalidChoice {
                field: "style",
                value: self.style.clone(),
            });
        }
        if !self.aspect_ratio.is_choice() {
            return Err(BlockError::InvalidChoice {
                field: "aspect_ratio",
                value: self.aspect_ratio.to_string(),
            });
        }
        if self.interval < 0 {
            return Err(BlockError::NotPositive {
                field: "interval",
                value: self.interval,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Slides
// ============================================================================

const MAX_CONTENT_PREVIEW: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselSlide {
    pub image: Option<FileRef>,
    pub link_text: String,
    /// Caption HTML from the rich text editor.
    pub content: String,
    pub link: LinkTarget,
    pub classes: ClassTokens,
    pub attributes: Attributes,
}

impl CarouselSlide {
    fn image_text(&self) -> String {
        match &self.image {
            None => String::new(),
            Some(image) => {
                let label = image.label();
                if label.is_empty() {
                    "Image".to_string()
                } else {
                    label
                }
            }
        }
    }

    fn content_text(&self) -> String {
        let text = strip_tags(&self.content);
        truncate_chars(text.trim(), MAX_CONTENT_PREVIEW)
    }
}

impl ContentNode for CarouselSlide {
    fn kind(&self) -> &'static str {
        "carousel_slide"
    }

    fn label(&self) -> String {
        let image = self.image_text();
        let content = self.content_text();
        match (image.is_empty(), content.is_empty()) {
            (false, false) => format!("{image} ({content})"),
            (false, true) => image,
            _ => content,
        }
    }

    fn class_list(&self) -> String {
        join_classes(["item", self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        if self.image.is_none() {
            return Err(BlockError::Required { field: "image" });
        }
        check_length("link_text", &self.link_text, 200)?;
        self.link.validate()?;
        self.attributes.validate(&["class", "href", "target"])
    }
}

/// Every image in a folder becomes a slide.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselSlideFolder {
    pub folder: Option<FolderRef>,
    pub classes: ClassTokens,
}

impl CarouselSlideFolder {
    pub fn images(&self) -> &[FileRef] {
        self.folder.as_ref().map(|f| f.images.as_slice()).unwrap_or_default()
    }
}

impl ContentNode for CarouselSlideFolder {
    fn kind(&self) -> &'static str {
        "carousel_slide_folder"
    }

    fn label(&self) -> String {
        match &self.folder {
            Some(folder) => folder.path.clone(),
            None => "not selected yet".to_string(),
        }
    }

    fn class_list(&self) -> String {
        join_classes(["item", self.classes.as_string().as_str()])
    }

    fn validate(&self, _ctx: &BlockContext) -> Result<(), BlockError> {
        if self.folder.is_none() {
            return Err(BlockError::Required { field: "folder" });
        }
        Ok(())
    }
}
