//! Block configuration: grid size, breakpoints, carousel styles, workers.
//!
//! Read from `config.toml`. Stock defaults are the base layer; a user
//! `config.toml` in the config directory overrides any subset of keys.
//!
//! ## Configuration Options
//!
//! ```toml
//! # Every key is optional; these are the stock values
//!
//! [grid]
//! size = 12                 # Columns in the Bootstrap grid
//!
//! # Breakpoints, smallest first. Replaces the whole table when given.
//! [[breakpoints]]
//! identifier = "xs"
//! width_gutter = 750        # Render width at this breakpoint
//!
//! [[breakpoints]]
//! identifier = "sm"
//! width_gutter = 750
//!
//! [[breakpoints]]
//! identifier = "md"
//! width_gutter = 970
//!
//! [[breakpoints]]
//! identifier = "lg"
//! width_gutter = 1170
//!
//! [carousel]
//! additional_styles = []    # Styles offered besides "standard"
//!
//! [processing]
//! max_processes = 4         # Size-set workers; omitted means one per core
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse; override just the values you want:
//!
//! ```toml
//! [carousel]
//! additional_styles = ["fullscreen"]
//! ```
//!
//! A misspelled key is an error, not a silently ignored setting.

use crate::blocks::STYLE_STANDARD;
use crate::grid::GRID_SIZE;
use crate::sizing::BreakpointTable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything `config.toml` can set. Missing sections take their stock
/// values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlocksConfig {
    /// Grid settings (column count).
    pub grid: GridConfig,
    /// Carousel settings (extra styles).
    pub carousel: CarouselConfig,
    /// Worker pool size for batch size-set computation.
    pub processing: ProcessingConfig,
    /// Breakpoint table used for size sets.
    pub breakpoints: BreakpointTable,
}

impl BlocksConfig {
    /// Checks that serde alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.size == 0 {
            return Err(ConfigError::Validation("grid.size must be 1-255".into()));
        }
        if self.breakpoints.is_empty() {
            return Err(ConfigError::Validation(
                "breakpoints must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for style in &self.carousel.additional_styles {
            if style.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "carousel.additional_styles entries must not be empty".into(),
                ));
            }
            if style == STYLE_STANDARD {
                return Err(ConfigError::Validation(format!(
                    "carousel.additional_styles must not repeat the built-in \"{STYLE_STANDARD}\""
                )));
            }
            if !seen.insert(style.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "carousel.additional_styles lists \"{style}\" twice"
                )));
            }
        }
        Ok(())
    }
}

/// Grid settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Number of columns a row is divided into.
    pub size: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { size: GRID_SIZE }
    }
}

/// Carousel settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Style identifiers offered to editors after the built-in one.
    pub additional_styles: Vec<String>,
}

/// Worker pool size for batch size-set computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Upper bound on workers; clamped to the core count. `None` uses
    /// every core.
    pub max_processes: Option<usize>,
}

/// Worker count for the rayon pool: `max_processes` clamped to
/// `1..=cores`, or `cores` when unset.
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Loading and layering
// =============================================================================

/// Name of the file looked up in a config directory.
pub const CONFIG_FILE: &str = "config.toml";

impl BlocksConfig {
    /// Stock defaults with each layer merged on top, lowest first, then
    /// deserialized and validated.
    pub fn from_layers<I>(layers: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = toml::Value>,
    {
        let mut value = toml::Value::try_from(Self::default())?;
        for layer in layers {
            merge_into(&mut value, layer);
        }
        let config: Self = value.try_into()?;
        config.validate()?;
        Ok(config)
    }
}

/// Merge `layer` into `target` in place.
///
/// Tables merge key by key. Any other value in `layer` replaces what
/// `target` holds, so a `[[breakpoints]]` list swaps out the whole table.
pub fn merge_into(target: &mut toml::Value, layer: toml::Value) {
    match (target, layer) {
        (toml::Value::Table(into), toml::Value::Table(from)) => {
            for (key, value) in from {
                match into.entry(key) {
                    toml::map::Entry::Occupied(mut slot) => merge_into(slot.get_mut(), value),
                    toml::map::Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                }
            }
        }
        (target, layer) => *target = layer,
    }
}

/// The [`CONFIG_FILE`] layer of `dir`, parsed but not interpreted.
/// `Ok(None)` when the directory has no such file.
pub fn read_overlay(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    match fs::read_to_string(dir.join(CONFIG_FILE)) {
        Ok(text) => Ok(Some(toml::Value::Table(toml::from_str(&text)?))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// The effective configuration for `dir`.
pub fn load_config(dir: &Path) -> Result<BlocksConfig, ConfigError> {
    BlocksConfig::from_layers(read_overlay(dir)?)
}

/// The stock configuration as a commented `config.toml`, printed by
/// `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Bootstrap Blocks Configuration
# ==============================
# Every key is optional and every value below is the stock default.
# Delete what you do not change. Misspelled keys are rejected.

# ---------------------------------------------------------------------------
# Grid
# ---------------------------------------------------------------------------
[grid]
# Number of columns a row is divided into. Column widths must lie in
# 1..=size, offsets, pushes and pulls in 0..=size.
size = 12

# ---------------------------------------------------------------------------
# Carousel
# ---------------------------------------------------------------------------
[carousel]
# Extra carousel styles offered besides the built-in "standard".
# Each style is rendered as a `carousel-<style>` class.
additional_styles = []

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel workers for size set computation.
# Leave unset to use one worker per CPU core.
# max_processes = 4

# ---------------------------------------------------------------------------
# Breakpoints
# ---------------------------------------------------------------------------
# Ordered smallest first. `width_gutter` is the width images are rendered
# at for that breakpoint when no override width is given. Listing any
# breakpoint here replaces the whole table.

[[breakpoints]]
# Extra small devices (mobile phones)
identifier = "xs"
width_gutter = 750

[[breakpoints]]
# Small devices (tablets)
identifier = "sm"
width_gutter = 750

[[breakpoints]]
# Medium devices (laptops)
identifier = "md"
width_gutter = 970

[[breakpoints]]
# Large devices (large desktops)
identifier = "lg"
width_gutter = 1170
"##
}
