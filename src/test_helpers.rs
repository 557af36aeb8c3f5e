//! Shared test utilities for the bootstrap-blocks test suite.
//!
//! Provides tree builders, node lookups and tree shape assertions for
//! [`BlockTree`] documents.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tree = sample_tree();
//! let image = find_node(&tree, "0.0.0");
//! assert_eq!(image.block.kind(), "image");
//!
//! assert_tree_shape(&tree, &[
//!     ("row", 0),
//!     ("column", 1),
//!     ("image", 2),
//!     ("column", 1),
//!     ("carousel", 0),
//! ]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::blocks::{Block, Carousel, CarouselSlide, Column, ContentNode, FileRef, Image, Row};
use crate::document::{BlockTree, Node};
use crate::grid::{GridValues, parse_directive};
use crate::sizing::AspectRatioSpec;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/documents/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/documents");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

// =========================================================================
// Builders
// =========================================================================

/// A column node from `(device, element, value)` directives. Values are
/// stored unchecked so tests can build columns for any grid size.
pub fn column_node(grid: &[(&str, &str, i64)]) -> Node {
    let mut values = GridValues::new();
    for (device, element, value) in grid {
        let (device, element, value) =
            parse_directive(&format!("{device}:{element}={value}")).unwrap();
        values.insert(device, element, value);
    }
    Node::new(Block::Column(Column {
        grid: values,
        ..Column::default()
    }))
}

/// An image node with a file attached.
pub fn image_node(url: &str, ratio: &str) -> Node {
    Node::new(Block::Image(Image {
        file: Some(FileRef::new(url)),
        aspect_ratio: AspectRatioSpec::parse(ratio).unwrap(),
        ..Image::default()
    }))
}

/// A small valid tree: a two-column row with a 16x9 image in the first
/// column, followed by an empty square carousel.
///
/// ```text
/// 0       row
/// 0.0     column (sm 6)
/// 0.0.0   image 16x9
/// 0.1     column (sm 6)
/// 1       carousel 1x1
/// ```
pub fn sample_tree() -> BlockTree {
    let mut first = column_node(&[("sm", "col", 6)]);
    first.children.push(image_node("/media/harbour.jpg", "16x9"));

    let carousel = Node::new(Block::Carousel(Carousel {
        aspect_ratio: AspectRatioSpec::parse("1x1").unwrap(),
        ..Carousel::default()
    }));

    BlockTree::new(vec![
        Node::with_children(
            Block::Row(Row::default()),
            vec![first, column_node(&[("sm", "col", 6)])],
        ),
        carousel,
    ])
}

/// A slide node showing the given image.
pub fn slide_node(url: &str) -> Node {
    Node::new(Block::CarouselSlide(CarouselSlide {
        image: Some(FileRef::new(url)),
        ..CarouselSlide::default()
    }))
}

// =========================================================================
// Lookups (panic with a clear message on miss)
// =========================================================================

/// Find a node by its dotted index path. Panics if not found.
pub fn find_node<'a>(tree: &'a BlockTree, path: &str) -> &'a Node {
    let mut nodes = &tree.blocks;
    let mut found = None;
    for part in path.split('.') {
        let index: usize = part
            .parse()
            .unwrap_or_else(|_| panic!("bad path segment '{part}' in '{path}'"));
        let node = nodes.get(index).unwrap_or_else(|| {
            panic!("node '{path}' not found: no index {index} among {} siblings", nodes.len())
        });
        nodes = &node.children;
        found = Some(node);
    }
    found.unwrap_or_else(|| panic!("empty node path"))
}

/// Block kinds in walk order.
pub fn kinds(tree: &BlockTree) -> Vec<&'static str> {
    let mut out = Vec::new();
    tree.walk(|visit| out.push(visit.node.block.kind()));
    out
}

/// Assert that the tree's walk order matches `(kind, depth)` pairs.
pub fn assert_tree_shape(tree: &BlockTree, expected: &[(&str, usize)]) {
    let mut actual = Vec::new();
    tree.walk(|visit| actual.push((visit.node.block.kind(), visit.depth())));
    let expected: Vec<(&str, usize)> = expected.to_vec();
    assert_eq!(actual, expected, "tree shape mismatch");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_tree_shape() {
        let tree = sample_tree();
        assert_tree_shape(
            &tree,
            &[
                ("row", 0),
                ("column", 1),
                ("image", 2),
                ("column", 1),
                ("carousel", 0),
            ],
        );
        assert_eq!(find_node(&tree, "0.0.0").block.kind(), "image");
        assert_eq!(kinds(&tree).len(), 5);
    }

    #[test]
    fn fixtures_are_copied() {
        let tmp = setup_fixtures();
        assert!(tmp.path().join("page.json").exists());
    }

    #[test]
    fn slide_builder() {
        let node = slide_node("/media/a.jpg");
        assert_eq!(node.block.label(), "Image");
    }
}
