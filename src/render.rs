//! Bootstrap 3 markup for block trees.
//!
//! Uses [maud](https://maud.lambda.xyz/) for templating: every interpolated
//! value is escaped. Two things maud can't express are written by hand:
//! column tags chosen by the editor, and the free-form attributes blocks
//! carry. Both go through [`element`], which still escapes every value.
//!
//! ## Images
//!
//! Images and carousel slides are emitted as `<img src srcset sizes>`. The
//! size set comes from the block's aspect ratio and the configured
//! breakpoints; a [`Thumbnailer`] turns each target into a URL.
//!
//! ## Ids
//!
//! Carousels and accordions need element ids for their controls. They are
//! derived from the node's index path, so the same tree always renders the
//! same ids: `carousel-1`, `accordion-0-2`, `accordion-item-0-2-1-collapse`.
//!
//! Rendering assumes a validated tree. Unvalidated input still renders
//! escaped, but invalid tags fall back to `div` and malformed attribute
//! names are dropped.

use crate::blocks::choices::LinkOrButton;
use crate::blocks::shared::{format_file_size, is_attribute_name, join_classes};
use crate::blocks::{
    Accordion, AccordionItem, Alert, Attributes, Block, BlockContext, Button, Carousel,
    CarouselSlide, CarouselSlideFolder, ContentNode, File, FileRef, Image, LinkTarget, ListGroup,
    ListGroupItem, PanelHeading,
};
use crate::device::Device;
use crate::document::{BlockTree, Node};
use crate::sizing::{ResponsiveImageTarget, SizeSet};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const BOOTSTRAP_CSS: &str = "https://stackpath.bootstrapcdn.com/bootstrap/3.4.1/css/bootstrap.min.css";

/// Produces the URL of a resized copy of a file.
pub trait Thumbnailer {
    fn thumbnail_url(&self, file: &FileRef, target: &ResponsiveImageTarget) -> String;
}

/// Names thumbnails after their source file:
/// `photo.jpg` at 800x450, cropped and upscaled, becomes
/// `photo.jpg__800x450_crop_upscale.jpg`. A cropped thumbnail of a file with
/// a subject location also carries it, e.g. `_crop_at120-45`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixThumbnailer;

impl Thumbnailer for SuffixThumbnailer {
    fn thumbnail_url(&self, file: &FileRef, target: &ResponsiveImageTarget) -> String {
        let ext = file
            .url
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && !ext.contains('/'))
            .unwrap_or("jpg");
        let mut name = format!("{}__{}", file.url, target.size_descriptor);
        if target.crop {
            name.push_str("_crop");
            // No comma: srcset separates candidates with commas.
            if let Some(at) = file.subject_location {
                name.push_str(&format!("_at{}-{}", at.x, at.y));
            }
        }
        if target.upscale {
            name.push_str("_upscale");
        }
        format!("{name}.{ext}")
    }
}

/// Render a whole tree with the given context and thumbnailer.
pub fn render_tree(tree: &BlockTree, ctx: &BlockContext, thumbnailer: &dyn Thumbnailer) -> Markup {
    Renderer::new(ctx, thumbnailer).render(tree)
}

/// Wrap rendered blocks in a standalone Bootstrap 3 page.
pub fn render_page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
            }
            body {
                div.container { (body) }
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

fn non_empty(text: &str) -> Option<&str> {
    (!text.is_empty()).then_some(text)
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn is_tag_name(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

/// An element with a runtime tag name and editor supplied attributes.
///
/// `class` comes first, then `fixed` attributes in order, then `extra` ones
/// by name. A `class` in `extra` is merged into the class list; other
/// `extra` keys already in `fixed` are skipped. `body: None` writes a void
/// element.
fn element(
    tag: &str,
    classes: &str,
    fixed: &[(&str, String)],
    extra: &Attributes,
    body: Option<Markup>,
) -> Markup {
    let tag = if is_tag_name(tag) { tag } else { "div" };
    let mut out = format!("<{tag}");

    let class = join_classes([classes, extra.get("class").unwrap_or_default()]);
    if !class.is_empty() {
        push_attr(&mut out, "class", &class);
    }
    for (name, value) in fixed {
        push_attr(&mut out, name, value);
    }
    for (name, value) in extra.iter() {
        if name == "class" || fixed.iter().any(|(n, _)| *n == name) || !is_attribute_name(name) {
            continue;
        }
        push_attr(&mut out, name, value);
    }
    out.push('>');

    if let Some(body) = body {
        out.push_str(&body.into_string());
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
    PreEscaped(out)
}

/// `href` and `target` for a link, skipping empty ones.
fn link_attrs(link: &LinkTarget) -> Vec<(&'static str, String)> {
    let mut attrs = Vec::new();
    let href = link.href();
    if !href.is_empty() {
        attrs.push(("href", href));
    }
    if !link.target.is_empty() {
        attrs.push(("target", link.target.clone()));
    }
    attrs
}

fn dom_id(prefix: &str, path: &[usize]) -> String {
    let mut id = prefix.to_string();
    for index in path {
        id.push('-');
        id.push_str(&index.to_string());
    }
    id
}

fn icon(classes: &str) -> Markup {
    html! { span class=(classes) aria-hidden="true" {} }
}

/// `sizes` attribute for a size set, largest breakpoint first.
///
/// Only breakpoints named after a Bootstrap device have a known viewport
/// threshold; others fall through to `100vw`.
pub fn sizes_attribute(set: &SizeSet) -> Option<String> {
    if set.is_empty() {
        return None;
    }
    let entries: Vec<(&str, &ResponsiveImageTarget)> = set.iter().collect();
    let mut parts: Vec<String> = entries
        .iter()
        .rev()
        .filter_map(|(id, target)| {
            let device: Device = id.parse().ok()?;
            (device != Device::Xs)
                .then(|| format!("(min-width: {}px) {}px", device.width(), target.width))
        })
        .collect();
    parts.push("100vw".to_string());
    Some(parts.join(", "))
}

// ============================================================================
// Renderer
// ============================================================================

/// Renders blocks against one configuration.
pub struct Renderer<'a> {
    ctx: &'a BlockContext,
    thumbnailer: &'a dyn Thumbnailer,
}

impl<'a> Renderer<'a> {
    pub fn new(ctx: &'a BlockContext, thumbnailer: &'a dyn Thumbnailer) -> Self {
        Self { ctx, thumbnailer }
    }

    /// Markup for every top-level block, in order.
    pub fn render(&self, tree: &BlockTree) -> Markup {
        let mut path = Vec::new();
        self.nodes(&tree.blocks, &mut path)
    }

    fn nodes(&self, nodes: &[Node], path: &mut Vec<usize>) -> Markup {
        let mut rendered = Vec::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            path.push(i);
            rendered.push(self.node(node, path));
            path.pop();
        }
        html! { @for markup in rendered { (markup) } }
    }

    fn children(&self, node: &Node, path: &mut Vec<usize>) -> Markup {
        self.nodes(&node.children, path)
    }

    /// Render children, letting `special` handle child kinds the parent
    /// lays out itself.
    fn children_with(
        &self,
        node: &Node,
        path: &mut Vec<usize>,
        mut special: impl FnMut(usize, &Node, &mut Vec<usize>) -> Option<Markup>,
    ) -> Markup {
        let mut rendered = Vec::with_capacity(node.children.len());
        for (i, child) in node.children.iter().enumerate() {
            path.push(i);
            let markup = match special(i, child, path) {
                Some(markup) => markup,
                None => self.node(child, path),
            };
            rendered.push(markup);
            path.pop();
        }
        html! { @for markup in rendered { (markup) } }
    }

    fn node(&self, node: &Node, path: &mut Vec<usize>) -> Markup {
        let classes = node.block.class_list();
        match &node.block {
            Block::Row(row) => {
                let body = self.children(node, path);
                element("div", &classes, &[], &row.attributes, Some(body))
            }
            Block::Column(column) => {
                let classes = column.classes_for(self.ctx.grid_size);
                let body = self.children(node, path);
                element(&column.tag, &classes, &[], &column.attributes, Some(body))
            }
            Block::Blockquote(quote) => {
                let body = self.children(node, path);
                element("blockquote", &classes, &[], &quote.attributes, Some(body))
            }
            Block::Cite(cite) => {
                let body = self.children(node, path);
                element("cite", &classes, &[], &cite.attributes, Some(body))
            }
            Block::Button(button) => self.button(button, &classes, node, path),
            Block::Image(image) => self.image(image, &classes),
            Block::Icon(block) => {
                let fixed = [("aria-hidden", "true".to_string())];
                element("span", &classes, &fixed, &block.attributes, Some(html! {}))
            }
            Block::Label(label) => {
                let body = html! { (label.label) (self.children(node, path)) };
                element("span", &classes, &[], &label.attributes, Some(body))
            }
            Block::Alert(alert) => self.alert(alert, &classes, node, path),
            Block::Well(_) | Block::Panel(_) | Block::PanelBody(_) | Block::PanelFooter(_) => {
                html! { div class=[non_empty(&classes)] { (self.children(node, path)) } }
            }
            Block::Spacer(_) => html! { div class=(classes) {} },
            Block::File(file) => self.file(file, &classes),
            Block::PanelHeading(heading) => self.panel_heading(heading, &classes, node, path),
            Block::Accordion(accordion) => self.accordion(accordion, &classes, node, path),
            Block::AccordionItem(item) => self.accordion_item(item, node, None, false, path),
            Block::ListGroup(group) => self.list_group(group, &classes, node, path),
            Block::ListGroupItem(item) => self.list_group_item(item, true, node, path),
            Block::Carousel(carousel) => self.carousel(carousel, &classes, node, path),
            Block::CarouselSlide(slide) => {
                let sizes = SizeSet::new();
                self.carousel_slide(slide, &sizes, false, node, path)
            }
            Block::CarouselSlideFolder(folder) => {
                let sizes = SizeSet::new();
                html! {
                    @for file in folder.images() {
                        (self.folder_slide(folder, file, &sizes, false))
                    }
                }
            }
        }
    }

    // ------------------------------------------------------------------------
    // Components
    // ------------------------------------------------------------------------

    fn button(&self, button: &Button, classes: &str, node: &Node, path: &mut Vec<usize>) -> Markup {
        let mut fixed = link_attrs(&button.link);
        if button.link_type == LinkOrButton::Button {
            fixed.push(("role", "button".to_string()));
        }
        let body = html! {
            @if !button.icon_left.is_empty() { (icon(&button.icon_left)) " " }
            (button.label)
            @if !button.icon_right.is_empty() { " " (icon(&button.icon_right)) }
            (self.children(node, path))
        };
        element("a", classes, &fixed, &button.link.attributes, Some(body))
    }

    fn alert(&self, alert: &Alert, classes: &str, node: &Node, path: &mut Vec<usize>) -> Markup {
        let body = html! {
            @if !alert.icon.is_empty() { (icon(&alert.icon)) " " }
            (self.children(node, path))
        };
        let fixed = [("role", "alert".to_string())];
        element("div", classes, &fixed, &alert.attributes, Some(body))
    }

    fn file(&self, block: &File, classes: &str) -> Markup {
        let Some(file) = &block.file else {
            return html! {};
        };
        let size = if block.show_file_size {
            file.size.map(format_file_size)
        } else {
            None
        };
        html! {
            a href=(file.url) class=[non_empty(classes)] target=[block.open_new_window.then_some("_blank")] {
                @if !block.icon_left.is_empty() { (icon(&block.icon_left)) " " }
                (block.link_text())
                @if let Some(size) = size { " " small { "(" (size) ")" } }
                @if !block.icon_right.is_empty() { " " (icon(&block.icon_right)) }
            }
        }
    }

    // ------------------------------------------------------------------------
    // Images
    // ------------------------------------------------------------------------

    /// `src`, `srcset` and `sizes` for a file at a size set. An empty set
    /// yields the original file as `src`.
    fn image_sources(&self, file: &FileRef, set: &SizeSet) -> Vec<(&'static str, String)> {
        let Some(largest) = set.largest() else {
            return vec![("src", file.url.clone())];
        };
        let mut attrs = vec![
            ("src", self.thumbnailer.thumbnail_url(file, largest)),
            (
                "srcset",
                set.srcset(|target| self.thumbnailer.thumbnail_url(file, target)),
            ),
        ];
        if let Some(sizes) = sizes_attribute(set) {
            attrs.push(("sizes", sizes));
        }
        attrs
    }

    fn image(&self, image: &Image, classes: &str) -> Markup {
        let Some(file) = &image.file else {
            return html! {};
        };
        let mut fixed = if image.use_original_image {
            vec![("src", file.url.clone())]
        } else {
            self.image_sources(file, &image.srcset(&self.ctx.breakpoints))
        };
        fixed.push(("alt", image.alt.clone()));
        if !image.title.is_empty() {
            fixed.push(("title", image.title.clone()));
        }
        element("img", classes, &fixed, &image.attributes, None)
    }

    // ------------------------------------------------------------------------
    // Panels, accordions, list groups
    // ------------------------------------------------------------------------

    fn panel_heading(
        &self,
        heading: &PanelHeading,
        classes: &str,
        node: &Node,
        path: &mut Vec<usize>,
    ) -> Markup {
        html! {
            div class=(classes) {
                @if !heading.title.is_empty() {
                    h3.panel-title { (heading.title) }
                }
                (self.children(node, path))
            }
        }
    }

    fn accordion(
        &self,
        accordion: &Accordion,
        classes: &str,
        node: &Node,
        path: &mut Vec<usize>,
    ) -> Markup {
        let id = dom_id("accordion", path);
        let items = self.children_with(node, path, |i, child, path| match &child.block {
            Block::AccordionItem(item) => {
                let open = accordion.index.is_some_and(|index| index as usize == i);
                Some(self.accordion_item(item, child, Some(&id), open, path))
            }
            _ => None,
        });
        html! {
            div id=(id) class=(classes) role="tablist" aria-multiselectable="true" {
                (items)
            }
        }
    }

    fn accordion_item(
        &self,
        item: &AccordionItem,
        node: &Node,
        parent: Option<&str>,
        open: bool,
        path: &mut Vec<usize>,
    ) -> Markup {
        let base = dom_id("accordion-item", path);
        let heading_id = format!("{base}-heading");
        let collapse_id = format!("{base}-collapse");
        let collapse_class = if open {
            "panel-collapse collapse in"
        } else {
            "panel-collapse collapse"
        };
        html! {
            div class=(item.class_list()) {
                div.panel-heading role="tab" id=(heading_id) {
                    h4.panel-title {
                        a role="button" data-toggle="collapse"
                            data-parent=[parent.map(|p| format!("#{p}"))]
                            href=(format!("#{collapse_id}"))
                            aria-expanded=(bool_str(open))
                            aria-controls=(collapse_id) {
                            (item.title)
                        }
                    }
                }
                div id=(collapse_id) class=(collapse_class) role="tabpanel" aria-labelledby=(heading_id) {
                    div.panel-body { (self.children(node, path)) }
                }
            }
        }
    }

    fn list_group(
        &self,
        group: &ListGroup,
        classes: &str,
        node: &Node,
        path: &mut Vec<usize>,
    ) -> Markup {
        let items = self.children_with(node, path, |_, child, path| match &child.block {
            Block::ListGroupItem(item) => {
                Some(self.list_group_item(item, group.add_list_group_class, child, path))
            }
            _ => None,
        });
        html! { div class=[non_empty(classes)] { (items) } }
    }

    fn list_group_item(
        &self,
        item: &ListGroupItem,
        with_base: bool,
        node: &Node,
        path: &mut Vec<usize>,
    ) -> Markup {
        let classes = item.item_classes(with_base);
        html! {
            div class=[non_empty(&classes)] {
                (item.title)
                (self.children(node, path))
            }
        }
    }

    // ------------------------------------------------------------------------
    // Carousel
    // ------------------------------------------------------------------------

    fn carousel(
        &self,
        carousel: &Carousel,
        classes: &str,
        node: &Node,
        path: &mut Vec<usize>,
    ) -> Markup {
        let id = dom_id("carousel", path);
        let target = format!("#{id}");
        let sizes = carousel.srcset(&self.ctx.breakpoints);

        let mut slides: Vec<Markup> = Vec::new();
        for (i, child) in node.children.iter().enumerate() {
            path.push(i);
            match &child.block {
                Block::CarouselSlide(slide) => {
                    let active = slides.is_empty();
                    slides.push(self.carousel_slide(slide, &sizes, active, child, path));
                }
                Block::CarouselSlideFolder(folder) => {
                    for file in folder.images() {
                        let active = slides.is_empty();
                        slides.push(self.folder_slide(folder, file, &sizes, active));
                    }
                }
                _ => {}
            }
            path.pop();
        }
        let count = slides.len();

        let interval = if carousel.ride {
            carousel.interval.to_string()
        } else {
            "false".to_string()
        };
        let pause = if carousel.pause { "hover" } else { "false" };

        html! {
            div id=(id) class=(classes)
                data-ride=[carousel.ride.then_some("carousel")]
                data-interval=(interval)
                data-wrap=(bool_str(carousel.wrap))
                data-pause=(pause) {
                @if count > 1 {
                    ol.carousel-indicators {
                        @for i in 0..count {
                            li data-target=(target) data-slide-to=(i) class=[(i == 0).then_some("active")] {}
                        }
                    }
                }
                div.carousel-inner role="listbox" {
                    @for slide in slides { (slide) }
                }
                @if count > 1 {
                    a.left.carousel-control href=(target) role="button" data-slide="prev" {
                        span.glyphicon.glyphicon-chevron-left aria-hidden="true" {}
                        span.sr-only { "Previous" }
                    }
                    a.right.carousel-control href=(target) role="button" data-slide="next" {
                        span.glyphicon.glyphicon-chevron-right aria-hidden="true" {}
                        span.sr-only { "Next" }
                    }
                }
            }
        }
    }

    fn slide_image(&self, file: &FileRef, alt: &str, sizes: &SizeSet) -> Markup {
        let mut fixed = self.image_sources(file, sizes);
        fixed.push(("alt", alt.to_string()));
        element("img", "", &fixed, &Attributes::default(), None)
    }

    fn carousel_slide(
        &self,
        slide: &CarouselSlide,
        sizes: &SizeSet,
        active: bool,
        node: &Node,
        path: &mut Vec<usize>,
    ) -> Markup {
        let classes = join_classes([slide.class_list().as_str(), if active { "active" } else { "" }]);
        let link = link_attrs(&slide.link);
        let has_link = link.iter().any(|(name, _)| *name == "href");
        let link_text = if slide.link_text.is_empty() {
            slide.link.href()
        } else {
            slide.link_text.clone()
        };
        let has_caption = !slide.content.is_empty() || has_link || !node.children.is_empty();
        let alt = slide.image.as_ref().map(FileRef::label).unwrap_or_default();

        html! {
            div class=(classes) {
                @if let Some(file) = &slide.image {
                    (self.slide_image(file, &alt, sizes))
                }
                @if has_caption {
                    div.carousel-caption {
                        // Caption HTML comes from the rich text editor.
                        (PreEscaped(&slide.content))
                        @if has_link {
                            (element("a", "", &link, &slide.attributes, Some(html! { (link_text) })))
                        }
                        (self.children(node, path))
                    }
                }
            }
        }
    }

    fn folder_slide(
        &self,
        folder: &CarouselSlideFolder,
        file: &FileRef,
        sizes: &SizeSet,
        active: bool,
    ) -> Markup {
        let classes = join_classes([folder.class_list().as_str(), if active { "active" } else { "" }]);
        html! {
            div class=(classes) {
                (self.slide_image(file, &file.label(), sizes))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::choices::{Context, ImageShape};
    use crate::blocks::{ClassTokens, Column, FocalPoint, FolderRef, Label, Row};
    use crate::sizing::{AspectRatioSpec, BreakpointTable, DeviceBreakpoint, compute_targets};
    use crate::test_helpers::*;

    fn render(tree: &BlockTree) -> String {
        render_tree(tree, &BlockContext::default(), &SuffixThumbnailer).into_string()
    }

    fn render_one(block: Block) -> String {
        render(&BlockTree::new(vec![Node::new(block)]))
    }

    // =========================================================================
    // Thumbnails and sizes
    // =========================================================================

    #[test]
    fn thumbnail_names_encode_size_and_flags() {
        let table = [DeviceBreakpoint::new("xs", 800)];
        let file = FileRef::new("/media/photo.jpg");

        let cropped = compute_targets(&table, AspectRatioSpec::parse("16x9").unwrap(), None, None);
        assert_eq!(
            SuffixThumbnailer.thumbnail_url(&file, cropped.get("xs").unwrap()),
            "/media/photo.jpg__800x450_crop_upscale.jpg"
        );

        let free = compute_targets(&table, AspectRatioSpec::Free, None, None);
        assert_eq!(
            SuffixThumbnailer.thumbnail_url(&file, free.get("xs").unwrap()),
            "/media/photo.jpg__800x0_upscale.jpg"
        );
    }

    #[test]
    fn subject_location_follows_crop() {
        let table = [DeviceBreakpoint::new("xs", 800)];
        let file = FileRef {
            subject_location: Some(FocalPoint { x: 120, y: 45 }),
            ..FileRef::new("/media/photo.jpg")
        };

        let cropped = compute_targets(&table, AspectRatioSpec::parse("16x9").unwrap(), None, None);
        assert_eq!(
            SuffixThumbnailer.thumbnail_url(&file, cropped.get("xs").unwrap()),
            "/media/photo.jpg__800x450_crop_at120-45_upscale.jpg"
        );

        let free = compute_targets(&table, AspectRatioSpec::Free, None, None);
        assert_eq!(
            SuffixThumbnailer.thumbnail_url(&file, free.get("xs").unwrap()),
            "/media/photo.jpg__800x0_upscale.jpg"
        );
    }

    #[test]
    fn focused_image_srcset_stays_comma_separated() {
        let html = render_one(Block::Image(Image {
            file: Some(FileRef {
                subject_location: Some(FocalPoint { x: 10, y: 20 }),
                ..FileRef::new("/media/harbour.jpg")
            }),
            aspect_ratio: AspectRatioSpec::parse("16x9").unwrap(),
            ..Image::default()
        }));
        assert!(html.contains(
            "srcset=\"/media/harbour.jpg__750x421_crop_at10-20_upscale.jpg 750w, \
             /media/harbour.jpg__970x545_crop_at10-20_upscale.jpg 970w, \
             /media/harbour.jpg__1170x658_crop_at10-20_upscale.jpg 1170w\""
        ));
    }

    #[test]
    fn thumbnail_without_extension_defaults_to_jpg() {
        let table = [DeviceBreakpoint::new("xs", 100)];
        let set = compute_targets(&table, AspectRatioSpec::Free, None, None);
        let file = FileRef::new("/media.v2/photo");
        assert_eq!(
            SuffixThumbnailer.thumbnail_url(&file, set.get("xs").unwrap()),
            "/media.v2/photo__100x0_upscale.jpg"
        );
    }

    #[test]
    fn sizes_for_bootstrap_breakpoints() {
        let set = compute_targets(&BreakpointTable::bootstrap3(), AspectRatioSpec::Free, None, None);
        assert_eq!(
            sizes_attribute(&set).unwrap(),
            "(min-width: 1200px) 1170px, (min-width: 992px) 970px, (min-width: 768px) 750px, 100vw"
        );
        assert_eq!(sizes_attribute(&SizeSet::new()), None);
    }

    #[test]
    fn sizes_for_custom_breakpoints() {
        let table = [DeviceBreakpoint::new("phone", 400)];
        let set = compute_targets(&table, AspectRatioSpec::Free, None, None);
        assert_eq!(sizes_attribute(&set).unwrap(), "100vw");
    }

    // =========================================================================
    // Element helper
    // =========================================================================

    #[test]
    fn element_escapes_and_orders_attributes() {
        let extra = Attributes::new()
            .with("data-note", "a \"quoted\" <value>")
            .with("class", "lead")
            .with("role", "ignored");
        let html = element(
            "section",
            "col-sm-6",
            &[("role", "region".to_string())],
            &extra,
            Some(html! { "x" }),
        )
        .into_string();
        assert_eq!(
            html,
            r#"<section class="col-sm-6 lead" role="region" data-note="a &quot;quoted&quot; &lt;value&gt;">x</section>"#
        );
    }

    #[test]
    fn element_rejects_bad_tag_and_attribute_names() {
        let extra = Attributes::new().with("on click", "x");
        let html = element("not a tag", "", &[], &extra, Some(html! {})).into_string();
        assert_eq!(html, "<div></div>");
    }

    // =========================================================================
    // Layout
    // =========================================================================

    #[test]
    fn row_and_columns() {
        let tree = BlockTree::new(vec![Node::with_children(
            Block::Row(Row::default()),
            vec![column_node(&[("sm", "col", 6), ("md", "offset", 2)])],
        )]);
        assert_eq!(
            render(&tree),
            r#"<div class="row"><div class="col-sm-6 col-md-offset-2"></div></div>"#
        );
    }

    #[test]
    fn column_with_custom_tag() {
        let html = render_one(Block::Column(Column {
            tag: "section".into(),
            attributes: Attributes::new().with("id", "intro"),
            ..Column::default()
        }));
        assert_eq!(html, r#"<section id="intro"></section>"#);
    }

    #[test]
    fn column_classes_follow_context_grid_size() {
        let tree = BlockTree::new(vec![column_node(&[("md", "col", 16)])]);
        assert_eq!(render(&tree), "<div></div>");

        let wide = BlockContext {
            grid_size: 16,
            ..BlockContext::default()
        };
        let html = render_tree(&tree, &wide, &SuffixThumbnailer).into_string();
        assert_eq!(html, r#"<div class="col-md-16"></div>"#);
    }

    // =========================================================================
    // Images
    // =========================================================================

    #[test]
    fn image_srcset_and_sizes() {
        let html = render(&BlockTree::new(vec![image_node("/media/harbour.jpg", "16x9")]));
        assert!(html.starts_with(r#"<img class="img-responsive" src="/media/harbour.jpg__1170x658_crop_upscale.jpg""#));
        assert!(html.contains(
            "srcset=\"/media/harbour.jpg__750x421_crop_upscale.jpg 750w, \
             /media/harbour.jpg__970x545_crop_upscale.jpg 970w, \
             /media/harbour.jpg__1170x658_crop_upscale.jpg 1170w\""
        ));
        assert!(html.contains(r#"sizes="(min-width: 1200px) 1170px"#));
        assert!(html.ends_with(r#"alt="">"#));
    }

    #[test]
    fn image_original_skips_srcset() {
        let html = render_one(Block::Image(Image {
            file: Some(FileRef::new("/media/a.png")),
            use_original_image: true,
            alt: "A & B".into(),
            shape: Some(ImageShape::Rounded),
            ..Image::default()
        }));
        assert_eq!(
            html,
            r#"<img class="img-responsive img-rounded" src="/media/a.png" alt="A &amp; B">"#
        );
    }

    #[test]
    fn image_without_file_renders_nothing() {
        assert_eq!(render_one(Block::Image(Image::default())), "");
    }

    // =========================================================================
    // Components
    // =========================================================================

    #[test]
    fn button_as_bootstrap_button() {
        let html = render_one(Block::Button(Button {
            label: "Sign up".into(),
            link_type: LinkOrButton::Button,
            btn_context: Context::Primary,
            icon_left: "glyphicon glyphicon-user".into(),
            link: LinkTarget {
                url: Some("/signup".into()),
                target: "_blank".into(),
                ..LinkTarget::default()
            },
            ..Button::default()
        }));
        assert_eq!(
            html,
            r#"<a class="btn btn-primary" href="/signup" target="_blank" role="button"><span class="glyphicon glyphicon-user" aria-hidden="true"></span> Sign up</a>"#
        );
    }

    #[test]
    fn label_text_is_escaped() {
        let html = render_one(Block::Label(Label {
            label: "<b>new</b>".into(),
            context: Context::Success,
            ..Label::default()
        }));
        assert_eq!(
            html,
            r#"<span class="label label-success">&lt;b&gt;new&lt;/b&gt;</span>"#
        );
    }

    #[test]
    fn alert_has_role() {
        let html = render_one(Block::Alert(Alert::default()));
        assert_eq!(html, r#"<div class="alert alert-info" role="alert"></div>"#);
    }

    #[test]
    fn file_link_with_size() {
        let html = render_one(Block::File(File {
            file: Some(FileRef {
                name: Some("Brochure".into()),
                size: Some(1536),
                ..FileRef::new("/media/brochure.pdf")
            }),
            open_new_window: true,
            show_file_size: true,
            ..File::default()
        }));
        assert_eq!(
            html,
            r#"<a href="/media/brochure.pdf" target="_blank">Brochure <small>(1.5 KB)</small></a>"#
        );
    }

    // =========================================================================
    // Panels, accordions, list groups
    // =========================================================================

    #[test]
    fn accordion_opens_selected_item() {
        let items = vec![
            Node::new(Block::AccordionItem(AccordionItem {
                title: "First".into(),
                ..AccordionItem::default()
            })),
            Node::new(Block::AccordionItem(AccordionItem {
                title: "Second".into(),
                ..AccordionItem::default()
            })),
        ];
        let tree = BlockTree::new(vec![Node::with_children(
            Block::Accordion(Accordion {
                index: Some(1),
                ..Accordion::default()
            }),
            items,
        )]);
        let html = render(&tree);
        assert!(html.starts_with(r##"<div id="accordion-0" class="panel-group" role="tablist""##));
        assert!(html.contains(r##"data-parent="#accordion-0""##));
        assert!(html.contains(
            r#"<div id="accordion-item-0-0-collapse" class="panel-collapse collapse" "#
        ));
        assert!(html.contains(
            r#"<div id="accordion-item-0-1-collapse" class="panel-collapse collapse in" "#
        ));
        assert!(html.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn list_group_passes_base_class_to_items() {
        let item = Node::new(Block::ListGroupItem(ListGroupItem {
            title: "Inbox".into(),
            ..ListGroupItem::default()
        }));
        let with_base = BlockTree::new(vec![Node::with_children(
            Block::ListGroup(ListGroup::default()),
            vec![item.clone()],
        )]);
        assert_eq!(
            render(&with_base),
            r#"<div class="list-group"><div class="list-group-item">Inbox</div></div>"#
        );

        let bare = BlockTree::new(vec![Node::with_children(
            Block::ListGroup(ListGroup {
                add_list_group_class: false,
                classes: ClassTokens::new("nav"),
            }),
            vec![item],
        )]);
        assert_eq!(render(&bare), r#"<div class="nav"><div>Inbox</div></div>"#);
    }

    #[test]
    fn panel_heading_title() {
        let html = render_one(Block::PanelHeading(PanelHeading {
            title: "Details".into(),
            ..PanelHeading::default()
        }));
        assert_eq!(
            html,
            r#"<div class="panel-heading"><h3 class="panel-title">Details</h3></div>"#
        );
    }

    // =========================================================================
    // Carousel
    // =========================================================================

    fn carousel_tree(carousel: Carousel) -> BlockTree {
        let folder = Node::new(Block::CarouselSlideFolder(CarouselSlideFolder {
            folder: Some(FolderRef {
                path: "Gallery".into(),
                images: vec![FileRef::new("/media/b.jpg"), FileRef::new("/media/c.jpg")],
            }),
            ..CarouselSlideFolder::default()
        }));
        BlockTree::new(vec![Node::with_children(
            Block::Carousel(carousel),
            vec![slide_node("/media/a.jpg"), folder],
        )])
    }

    #[test]
    fn carousel_expands_folders_into_slides() {
        let html = render(&carousel_tree(Carousel {
            aspect_ratio: AspectRatioSpec::parse("4x3").unwrap(),
            ..Carousel::default()
        }));
        assert!(html.starts_with(
            r#"<div id="carousel-0" class="carousel carousel-standard" data-ride="carousel" data-interval="5000" data-wrap="true" data-pause="hover">"#
        ));
        assert_eq!(html.matches("data-slide-to=").count(), 3);
        assert_eq!(html.matches(r#"<div class="item"#).count(), 3);
        assert_eq!(html.matches(r#"<div class="item active">"#).count(), 1);
        assert!(html.contains(r#"src="/media/b.jpg__1170x877_crop_upscale.jpg""#));
        assert!(html.contains(r#"data-slide="next""#));
    }

    #[test]
    fn carousel_without_ride() {
        let html = render(&carousel_tree(Carousel {
            ride: false,
            pause: false,
            ..Carousel::default()
        }));
        assert!(!html.contains("data-ride"));
        assert!(html.contains(r#"data-interval="false""#));
        assert!(html.contains(r#"data-pause="false""#));
    }

    #[test]
    fn slide_caption_and_link() {
        let slide = Node::new(Block::CarouselSlide(CarouselSlide {
            image: Some(FileRef::new("/media/a.jpg")),
            content: "<p>Summer</p>".into(),
            link_text: "More".into(),
            link: LinkTarget::url("/summer/"),
            ..CarouselSlide::default()
        }));
        let tree = BlockTree::new(vec![Node::with_children(
            Block::Carousel(Carousel::default()),
            vec![slide],
        )]);
        let html = render(&tree);
        assert!(html.contains(
            r#"<div class="carousel-caption"><p>Summer</p><a href="/summer/">More</a></div>"#
        ));
        // A single slide needs no controls.
        assert!(!html.contains("carousel-indicators"));
    }

    // =========================================================================
    // Page
    // =========================================================================

    #[test]
    fn page_wraps_body() {
        let page = render_page("Demo", html! { p { "hi" } }).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Demo</title>"));
        assert!(page.contains(r#"<div class="container"><p>hi</p></div>"#));
        assert!(page.contains("bootstrap.min.css"));
    }

    #[test]
    fn sample_tree_renders() {
        let html = render(&sample_tree());
        assert!(html.starts_with(r#"<div class="row"><div class="col-sm-6"><img "#));
        assert!(html.contains(r#"id="carousel-1""#));
    }
}
