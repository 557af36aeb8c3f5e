//! Block tree documents.
//!
//! A document is a JSON file holding a list of top-level blocks. Each block
//! carries its own fields plus an optional `children` list:
//!
//! ```json
//! {
//!   "blocks": [
//!     { "type": "row", "children": [
//!       { "type": "column", "grid": { "sm": { "col": 6 } }, "children": [
//!         { "type": "image", "file": { "url": "/media/a.jpg" }, "aspect_ratio": "16x9" }
//!       ]}
//!     ]}
//!   ]
//! }
//! ```
//!
//! Nodes are addressed by their index path from the root, e.g. `0.1.2` is
//! the third child of the second child of the first top-level block.

use crate::blocks::{Block, BlockContext, BlockError, ContentNode};
use crate::sizing::{SizeRequest, SizeSet, compute_batch};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("block {path} ({kind}): {source}")]
    Block {
        path: String,
        kind: &'static str,
        source: BlockError,
    },
}

/// One block and its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(flatten)]
    pub block: Block,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(block: Block) -> Self {
        Self {
            block,
            children: Vec::new(),
        }
    }

    pub fn with_children(block: Block, children: Vec<Node>) -> Self {
        Self { block, children }
    }

    /// Editor tree description, e.g. `"3 columns"` for a row.
    pub fn describe(&self) -> String {
        self.block.describe(self.children.len())
    }
}

/// A node reached while walking a tree, with its index path.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'p, 'a> {
    pub path: &'p [usize],
    pub node: &'a Node,
}

impl Visit<'_, '_> {
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn path_string(&self) -> String {
        format_path(self.path)
    }
}

/// `[0, 1, 2]` → `"0.1.2"`.
pub fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Size set computed for one image or carousel in a tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSizes {
    pub path: String,
    pub kind: &'static str,
    pub label: String,
    pub sizes: SizeSet,
}

/// A whole document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockTree {
    #[serde(default)]
    pub blocks: Vec<Node>,
}

impl BlockTree {
    pub fn new(blocks: Vec<Node>) -> Self {
        Self { blocks }
    }

    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a document from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Depth-first walk, parents before children.
    pub fn walk<'a>(&'a self, mut f: impl FnMut(Visit<'_, 'a>)) {
        fn go<'a, F: FnMut(Visit<'_, 'a>)>(nodes: &'a [Node], path: &mut Vec<usize>, f: &mut F) {
            for (i, node) in nodes.iter().enumerate() {
                path.push(i);
                f(Visit {
                    path: path.as_slice(),
                    node,
                });
                go(&node.children, path, f);
                path.pop();
            }
        }
        go(&self.blocks, &mut Vec::new(), &mut f);
    }

    /// Number of nodes at every depth.
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.walk(|_| count += 1);
        count
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Validate every node, stopping at the first failure.
    pub fn validate(&self, ctx: &BlockContext) -> Result<(), DocumentError> {
        let mut first_error = None;
        self.walk(|visit| {
            if first_error.is_some() {
                return;
            }
            if let Err(source) = visit.node.block.validate(ctx) {
                first_error = Some(DocumentError::Block {
                    path: visit.path_string(),
                    kind: visit.node.block.kind(),
                    source,
                });
            }
        });
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Compute the size set of every image and carousel in the tree.
    ///
    /// Images without a file are skipped. The calculations run in parallel;
    /// results are in document order.
    pub fn size_sets(&self, ctx: &BlockContext) -> Vec<NodeSizes> {
        let mut pending: Vec<(String, &'static str, String)> = Vec::new();
        let mut requests: Vec<SizeRequest> = Vec::new();

        self.walk(|visit| {
            let request = match &visit.node.block {
                Block::Image(image) if image.file.is_some() => image.size_request(),
                Block::Carousel(carousel) => carousel.size_request(),
                _ => return,
            };
            pending.push((
                visit.path_string(),
                visit.node.block.kind(),
                visit.node.describe(),
            ));
            requests.push(request);
        });

        let sets = compute_batch(&ctx.breakpoints, &requests);
        pending
            .into_iter()
            .zip(sets)
            .map(|((path, kind, label), sizes)| NodeSizes {
                path,
                kind,
                label,
                sizes,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{Carousel, Column, Image, Row};
    use crate::test_helpers::*;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn parse_nested_document() {
        let tree = BlockTree::from_json(
            r#"{"blocks": [
                {"type": "row", "children": [
                    {"type": "column", "grid": {"sm": {"col": 6}}},
                    {"type": "column", "grid": {"sm": {"col": 6}}, "tag": "section"}
                ]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(tree.blocks.len(), 1);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.blocks[0].describe(), "2 columns");
        match &tree.blocks[0].children[1].block {
            Block::Column(col) => assert_eq!(col.tag, "section"),
            other => panic!("expected column, got {other:?}"),
        }
    }

    #[test]
    fn unknown_type_is_json_error() {
        let result = BlockTree::from_json(r#"{"blocks": [{"type": "marquee"}]}"#);
        assert!(matches!(result, Err(DocumentError::Json(_))));
    }

    #[test]
    fn malformed_ratio_is_json_error() {
        let result =
            BlockTree::from_json(r#"{"blocks": [{"type": "image", "aspect_ratio": "wide"}]}"#);
        assert!(matches!(result, Err(DocumentError::Json(_))));
    }

    #[test]
    fn misspelled_block_field_is_json_error() {
        let result = BlockTree::from_json(
            r#"{"blocks": [{"type": "image", "file": {"url": "/media/a.jpg"},
                "aspectratio": "16x9", "overide_width": 720}]}"#,
        );
        assert!(matches!(result, Err(DocumentError::Json(_))));
    }

    #[test]
    fn misspelled_field_in_nested_block_is_json_error() {
        let result = BlockTree::from_json(
            r#"{"blocks": [{"type": "row", "children": [
                {"type": "column", "grid": {"sm": {"col": 6}}, "clases": "lead"}
            ]}]}"#,
        );
        assert!(matches!(result, Err(DocumentError::Json(_))));
    }

    #[test]
    fn json_roundtrip_keeps_structure() {
        let tree = sample_tree();
        let json = tree.to_json().unwrap();
        let back = BlockTree::from_json(&json).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = BlockTree::load(&tmp.path().join("missing.json"));
        assert!(matches!(result, Err(DocumentError::Io(_))));
    }

    #[test]
    fn load_fixture_page() {
        let tmp = setup_fixtures();
        let tree = BlockTree::load(&tmp.path().join("page.json")).unwrap();
        assert_eq!(kinds(&tree).len(), 26);
        assert_eq!(find_node(&tree, "0.0.0").describe(), "Harbour");
        assert_eq!(find_node(&tree, "1.1").block.kind(), "carousel_slide_folder");
        assert_eq!(find_node(&tree, "2.0.0").block.kind(), "label");
    }

    #[test]
    fn load_edited_fixture_reports_json_error() {
        let tmp = setup_fixtures();
        let path = tmp.path().join("page.json");
        let edited = fs::read_to_string(&path)
            .unwrap()
            .replace("\"type\": \"well\"", "\"type\": \"jumbotron\"");
        fs::write(&path, edited).unwrap();
        assert!(matches!(BlockTree::load(&path), Err(DocumentError::Json(_))));
    }

    // =========================================================================
    // Walking
    // =========================================================================

    #[test]
    fn walk_visits_parents_first_with_paths() {
        let tree = sample_tree();
        let mut seen = Vec::new();
        tree.walk(|visit| seen.push((visit.path_string(), visit.depth())));
        assert_eq!(
            seen,
            [
                ("0".to_string(), 0),
                ("0.0".to_string(), 1),
                ("0.0.0".to_string(), 2),
                ("0.1".to_string(), 1),
                ("1".to_string(), 0),
            ]
        );
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
    }

    #[test]
    fn carousel_children_keep_order() {
        let tree = BlockTree::new(vec![Node::with_children(
            Block::Carousel(Carousel::default()),
            vec![slide_node("/media/a.jpg"), slide_node("/media/b.jpg")],
        )]);
        assert_tree_shape(
            &tree,
            &[("carousel", 0), ("carousel_slide", 1), ("carousel_slide", 1)],
        );
        assert_eq!(find_node(&tree, "0.1").describe(), "Image");
        assert!(tree.validate(&BlockContext::default()).is_ok());
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn valid_tree_passes() {
        assert!(sample_tree().validate(&BlockContext::default()).is_ok());
    }

    #[test]
    fn validation_reports_node_path() {
        let tree = BlockTree::new(vec![Node::with_children(
            Block::Row(Row::default()),
            vec![
                column_node(&[("sm", "col", 6)]),
                Node::new(Block::Image(Image::default())),
            ],
        )]);
        let err = tree.validate(&BlockContext::default()).unwrap_err();
        match err {
            DocumentError::Block { path, kind, source } => {
                assert_eq!(path, "0.1");
                assert_eq!(kind, "image");
                assert_eq!(source, BlockError::Required { field: "file" });
            }
            other => panic!("expected block error, got {other}"),
        }
    }

    #[test]
    fn validation_uses_context_grid_size() {
        let tree = BlockTree::new(vec![column_node(&[("md", "col", 16)])]);
        assert!(tree.validate(&BlockContext::default()).is_err());

        let ctx = BlockContext {
            grid_size: 16,
            ..BlockContext::default()
        };
        assert!(tree.validate(&ctx).is_ok());
    }

    #[test]
    fn error_message_names_path_and_kind() {
        let tree = BlockTree::new(vec![Node::new(Block::Column(Column {
            tag: "not a slug".into(),
            ..Column::default()
        }))]);
        let err = tree.validate(&BlockContext::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "block 0 (column): tag: \"not a slug\" is not a valid slug"
        );
    }

    // =========================================================================
    // Size sets
    // =========================================================================

    #[test]
    fn size_sets_in_document_order() {
        let tree = sample_tree();
        let sets = tree.size_sets(&BlockContext::default());
        let paths: Vec<&str> = sets.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, ["0.0.0", "1"]);

        let image = &sets[0];
        assert_eq!(image.kind, "image");
        assert_eq!(image.sizes.get("xs").unwrap().size(), (750, 421));

        let carousel = &sets[1];
        assert_eq!(carousel.kind, "carousel");
        assert_eq!(carousel.sizes.get("lg").unwrap().size(), (1170, 1170));
    }

    #[test]
    fn size_sets_skip_images_without_file() {
        let tree = BlockTree::new(vec![Node::new(Block::Image(Image::default()))]);
        assert!(tree.size_sets(&BlockContext::default()).is_empty());
    }

    #[test]
    fn size_sets_follow_configured_breakpoints() {
        let tree = BlockTree::new(vec![Node::new(Block::Carousel(Carousel::default()))]);
        let ctx = BlockContext {
            breakpoints: crate::sizing::BreakpointTable::new(vec![
                crate::sizing::DeviceBreakpoint::new("phone", 400),
            ])
            .unwrap(),
            ..BlockContext::default()
        };
        let sets = tree.size_sets(&ctx);
        assert_eq!(sets[0].sizes.identifiers().collect::<Vec<_>>(), ["phone"]);
        assert_eq!(sets[0].sizes.get("phone").unwrap().size(), (400, 0));
    }
}
