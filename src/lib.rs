//! # Bootstrap Blocks
//!
//! Content-block schemas for Bootstrap 3 pages. A page is a tree of typed
//! blocks (rows, columns, images, carousels, panels, ...) stored as JSON.
//! Each block validates its own fields and knows the CSS classes of its
//! outer element; images and carousels also know what size to request from
//! a thumbnailer at every breakpoint.
//!
//! # Core Calculations
//!
//! Three small pure functions carry the Bootstrap-specific logic:
//!
//! ```text
//! "16x9"                         →  AspectRatioSpec::Fixed(16, 9)
//! breakpoints + ratio            →  SizeSet { xs: 750x421 crop, sm: ..., ... }
//! { sm: { col: 6, offset: 3 } }  →  ["col-sm-6", "col-sm-offset-3"]
//! ```
//!
//! Everything else (documents, validation, rendering, the CLI) is built on
//! top of these.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`device`] | The four Bootstrap 3 devices and their container widths |
//! | [`sizing`] | Aspect ratios, breakpoint tables, size-set calculations |
//! | [`grid`] | Per-device column specs and `col-*` class assembly |
//! | [`blocks`] | Block schemas, choice sets, labels and validation |
//! | [`document`] | JSON block trees: loading, walking, validation with node paths |
//! | [`render`] | Bootstrap 3 markup for block trees using Maud |
//! | [`config`] | `config.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting: tree display, size tables, class lists |
//!
//! # Design Decisions
//!
//! ## Devices Are Fixed, Breakpoints Are Configurable
//!
//! Grid classes only exist for `xs`, `sm`, `md` and `lg`, so [`device::Device`]
//! is a closed enum and a column spec holds exactly one slot per device and
//! element. Size sets are different: a site may serve images at any set of
//! widths, so [`sizing::BreakpointTable`] is plain configuration.
//!
//! ## Validation Is Explicit
//!
//! Deserializing a document only checks shape (known block types and
//! fields, well-formed ratios). Range and choice checks depend on
//! configuration (grid size, extra carousel styles), so they run in
//! [`document::BlockTree::validate`] against a [`blocks::BlockContext`].
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a build error and every interpolated value is escaped.

pub mod blocks;
pub mod config;
pub mod device;
pub mod document;
pub mod grid;
pub mod output;
pub mod render;
pub mod sizing;

#[cfg(test)]
pub(crate) mod test_helpers;
