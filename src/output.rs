//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every block is shown by what an editor would recognize: its positional
//! index among siblings, its type, and its short label. Children are indented
//! under their parent, so a document reads as an outline.
//!
//! # Output Format
//!
//! ## Tree
//!
//! ```text
//! Blocks
//! 001 row: 2 columns
//!     001 column: col-sm-6
//!         001 image: harbour.jpg
//!     002 column: col-sm-6
//! 002 carousel: Style: standard, Transition Effect: , Ride: true, ...
//! ```
//!
//! ## Size sets
//!
//! ```text
//! 0.0.0 image: harbour.jpg
//!     xs     750x421     750w  crop upscale
//!     sm     750x421     750w  crop upscale
//!     md     970x545     970w  crop upscale
//!     lg     1170x658    1170w crop upscale
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::blocks::ContentNode;
use crate::blocks::shared::truncate_chars;
use crate::document::{BlockTree, NodeSizes};
use crate::sizing::{ResponsiveImageTarget, SizeSet};

const MAX_LABEL: usize = 60;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `kind: label`, or just `kind` when the label is empty.
fn block_line(kind: &str, label: &str) -> String {
    let label = truncate_chars(label.trim(), MAX_LABEL);
    if label.is_empty() {
        kind.to_string()
    } else {
        format!("{}: {}", kind, label)
    }
}

/// One size set row: identifier, size, descriptor, flags.
fn target_line(identifier: &str, target: &ResponsiveImageTarget) -> String {
    let mut flags = Vec::new();
    if target.crop {
        flags.push("crop");
    }
    if target.upscale {
        flags.push("upscale");
    }
    format!(
        "{:<6} {:<11} {:<5} {}",
        identifier,
        target.size_descriptor,
        target.width_descriptor,
        flags.join(" ")
    )
    .trim_end()
    .to_string()
}

// ============================================================================
// Tree
// ============================================================================

/// Format a document as an indented outline of its blocks.
pub fn format_tree(tree: &BlockTree) -> Vec<String> {
    let mut lines = vec!["Blocks".to_string()];
    if tree.is_empty() {
        lines.push("    (empty)".to_string());
        return lines;
    }
    tree.walk(|visit| {
        let position = visit.path.last().map_or(1, |i| i + 1);
        lines.push(format!(
            "{}{} {}",
            indent(visit.depth()),
            format_index(position),
            block_line(visit.node.block.kind(), &visit.node.describe())
        ));
    });
    lines
}

pub fn print_tree(tree: &BlockTree) {
    for line in format_tree(tree) {
        println!("{}", line);
    }
}

/// Summary line after a successful check.
pub fn format_check_summary(tree: &BlockTree) -> Vec<String> {
    let count = tree.len();
    let noun = if count == 1 { "block" } else { "blocks" };
    vec![format!("Checked {} {}: valid", count, noun)]
}

pub fn print_check_summary(tree: &BlockTree) {
    for line in format_check_summary(tree) {
        println!("{}", line);
    }
}

// ============================================================================
// Size sets
// ============================================================================

/// Format a single size set, one breakpoint per line.
pub fn format_size_set(set: &SizeSet) -> Vec<String> {
    if set.is_empty() {
        return vec!["(no breakpoints)".to_string()];
    }
    set.iter()
        .map(|(identifier, target)| target_line(identifier, target))
        .collect()
}

pub fn print_size_set(set: &SizeSet) {
    for line in format_size_set(set) {
        println!("{}", line);
    }
}

/// Format the size sets of every image and carousel in a document.
pub fn format_node_sizes(sets: &[NodeSizes]) -> Vec<String> {
    let mut lines = Vec::new();
    for node in sets {
        lines.push(format!("{} {}", node.path, block_line(node.kind, &node.label)));
        for line in format_size_set(&node.sizes) {
            lines.push(format!("{}{}", indent(1), line));
        }
    }
    lines
}

pub fn print_node_sizes(sets: &[NodeSizes]) {
    for line in format_node_sizes(sets) {
        println!("{}", line);
    }
}

// ============================================================================
// Grid classes
// ============================================================================

/// Format grid classes on a single line.
pub fn format_classes(classes: &[String]) -> Vec<String> {
    if classes.is_empty() {
        vec!["(no classes)".to_string()]
    } else {
        vec![classes.join(" ")]
    }
}

pub fn print_classes(classes: &[String]) {
    for line in format_classes(classes) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockContext;
    use crate::sizing::{AspectRatioSpec, BreakpointTable, compute_targets};
    use crate::test_helpers::*;

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_padding() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn block_line_with_and_without_label() {
        assert_eq!(block_line("row", "2 columns"), "row: 2 columns");
        assert_eq!(block_line("cite", ""), "cite");
        assert_eq!(block_line("cite", "   "), "cite");
    }

    #[test]
    fn block_line_truncates_long_labels() {
        let label = "a".repeat(80);
        assert_eq!(
            block_line("label", &label),
            format!("label: {}...", "a".repeat(60))
        );
    }

    // =========================================================================
    // Tree
    // =========================================================================

    #[test]
    fn tree_outline() {
        let lines = format_tree(&sample_tree());
        assert_eq!(
            lines,
            [
                "Blocks",
                "001 row: 2 columns",
                "    001 column: col-sm-6",
                "        001 image",
                "    002 column: col-sm-6",
                "002 carousel: Style: standard, Transition Effect: , Ride: true, Interval: ...",
            ]
        );
    }

    #[test]
    fn empty_tree() {
        assert_eq!(format_tree(&BlockTree::default()), ["Blocks", "    (empty)"]);
    }

    #[test]
    fn check_summary_counts_all_nodes() {
        assert_eq!(
            format_check_summary(&sample_tree()),
            ["Checked 5 blocks: valid"]
        );
    }

    // =========================================================================
    // Size sets
    // =========================================================================

    #[test]
    fn size_set_rows() {
        let set = compute_targets(
            &BreakpointTable::bootstrap3(),
            AspectRatioSpec::parse("16x9").unwrap(),
            None,
            None,
        );
        let lines = format_size_set(&set);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "xs     750x421     750w  crop upscale");
        assert_eq!(lines[3], "lg     1170x658    1170w crop upscale");
    }

    #[test]
    fn size_set_without_ratio_has_no_crop() {
        let set = compute_targets(
            &BreakpointTable::bootstrap3(),
            AspectRatioSpec::Free,
            None,
            Some(200),
        );
        assert_eq!(format_size_set(&set)[2], "md     970x200     970w  upscale");
    }

    #[test]
    fn node_sizes_are_grouped() {
        let sets = sample_tree().size_sets(&BlockContext::default());
        let lines = format_node_sizes(&sets);
        assert_eq!(lines[0], "0.0.0 image");
        assert_eq!(lines[1], "    xs     750x421     750w  crop upscale");
        assert!(lines[5].starts_with("1 carousel: Style: standard"));
        assert_eq!(lines.len(), 10);
    }

    // =========================================================================
    // Classes
    // =========================================================================

    #[test]
    fn classes_on_one_line() {
        let classes = vec!["col-sm-6".to_string(), "col-sm-offset-3".to_string()];
        assert_eq!(format_classes(&classes), ["col-sm-6 col-sm-offset-3"]);
        assert_eq!(format_classes(&[]), ["(no classes)"]);
    }
}
