//! Bootstrap 3 grid column specs and their CSS classes.
//!
//! A column carries, per device, up to four sizing directives:
//!
//! | Element | Range | Class |
//! |---------|-------|-------|
//! | `col` | 1..=grid size | `col-md-6` |
//! | `offset` | 0..=grid size | `col-md-offset-3` |
//! | `push` | 0..=grid size | `col-md-push-1` |
//! | `pull` | 0..=grid size | `col-md-pull-1` |
//!
//! Classes are emitted devices-first (xs, sm, md, lg) and, within a device,
//! in element order (col, offset, push, pull). Rendered markup and snapshot
//! tests depend on that exact order.
//!
//! Documents store [`GridValues`], the directives as written. Only a
//! [`GridColumnSpec`] produces classes, and every way of building one checks
//! each value against a grid size.

use crate::device::{Device, UnknownDevice};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of columns in a standard Bootstrap 3 grid.
pub const GRID_SIZE: u8 = 12;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("{device}-{element}: {value} is out of range ({min}..={max})")]
    OutOfRange {
        device: Device,
        element: ColumnElement,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("invalid grid directive \"{0}\" (expected <device>:<element>=<value>, e.g. sm:col=6)")]
    Directive(String),
    #[error(transparent)]
    Device(#[from] UnknownDevice),
}

/// The four per-device sizing directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnElement {
    Col,
    Offset,
    Push,
    Pull,
}

impl ColumnElement {
    pub const ALL: [ColumnElement; 4] = [
        ColumnElement::Col,
        ColumnElement::Offset,
        ColumnElement::Push,
        ColumnElement::Pull,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColumnElement::Col => "col",
            ColumnElement::Offset => "offset",
            ColumnElement::Push => "push",
            ColumnElement::Pull => "pull",
        }
    }

    /// Smallest accepted value; a column cannot span zero units.
    pub fn min(self) -> i64 {
        match self {
            ColumnElement::Col => 1,
            _ => 0,
        }
    }

    /// The CSS class for this element at `device` with `value`.
    pub fn class(self, device: Device, value: impl fmt::Display) -> String {
        match self {
            ColumnElement::Col => format!("col-{device}-{value}"),
            other => format!("col-{device}-{}-{value}", other.name()),
        }
    }
}

impl fmt::Display for ColumnElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnElement {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnElement::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| GridError::Directive(s.to_string()))
    }
}

/// Directives for a single device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnSizes {
    pub col: Option<u8>,
    pub offset: Option<u8>,
    pub push: Option<u8>,
    pub pull: Option<u8>,
}

impl ColumnSizes {
    pub fn get(&self, element: ColumnElement) -> Option<u8> {
        match element {
            ColumnElement::Col => self.col,
            ColumnElement::Offset => self.offset,
            ColumnElement::Push => self.push,
            ColumnElement::Pull => self.pull,
        }
    }

    fn slot(&mut self, element: ColumnElement) -> &mut Option<u8> {
        match element {
            ColumnElement::Col => &mut self.col,
            ColumnElement::Offset => &mut self.offset,
            ColumnElement::Push => &mut self.push,
            ColumnElement::Pull => &mut self.pull,
        }
    }

    pub fn is_empty(&self) -> bool {
        ColumnElement::ALL.iter().all(|&e| self.get(e).is_none())
    }
}

/// Per-device column directives for one grid column.
///
/// Values are range-checked when they are set. Deserializing checks against
/// the standard 12-column grid; for other grid sizes go through
/// [`GridValues::check`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawGridSpec", into = "RawGridSpec")]
pub struct GridColumnSpec {
    sizes: [ColumnSizes; 4],
}

type RawGridSpec = BTreeMap<Device, BTreeMap<ColumnElement, i64>>;

/// Grid directives as stored in a document, not yet range-checked.
///
/// ```json
/// { "sm": { "col": 6, "offset": 3 }, "xs": { "col": 12 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridValues(RawGridSpec);

impl GridValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value as given; nothing is checked until [`check`](Self::check).
    pub fn insert(&mut self, device: Device, element: ColumnElement, value: i64) {
        self.0.entry(device).or_default().insert(element, value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }

    /// Every stored value, in canonical device/element order.
    pub fn iter(&self) -> impl Iterator<Item = (Device, ColumnElement, i64)> + '_ {
        self.0.iter().flat_map(|(&device, elements)| {
            elements
                .iter()
                .map(move |(&element, &value)| (device, element, value))
        })
    }

    /// Build the checked spec for a grid of `grid_size` columns. The first
    /// out-of-range value in canonical order is reported.
    pub fn check(&self, grid_size: u8) -> Result<GridColumnSpec, GridError> {
        let mut spec = GridColumnSpec::new();
        for (device, element, value) in self.iter() {
            spec.set(device, element, value, grid_size)?;
        }
        Ok(spec)
    }

    /// Class-style text for every stored value, checked or not.
    pub fn describe(&self) -> String {
        self.iter()
            .map(|(device, element, value)| element.class(device, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<&GridColumnSpec> for GridValues {
    fn from(spec: &GridColumnSpec) -> Self {
        let mut values = GridValues::new();
        for (device, element, value) in spec.values() {
            values.insert(device, element, i64::from(value));
        }
        values
    }
}

/// Range-check a single value against a grid of `grid_size` columns.
pub fn check_value(
    device: Device,
    element: ColumnElement,
    value: i64,
    grid_size: u8,
) -> Result<u8, GridError> {
    let max = i64::from(grid_size);
    let out_of_range = || GridError::OutOfRange {
        device,
        element,
        value,
        min: element.min(),
        max,
    };
    if value < element.min() || value > max {
        return Err(out_of_range());
    }
    u8::try_from(value).map_err(|_| out_of_range())
}

impl GridColumnSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set) on a standard 12-column grid.
    pub fn with(mut self, device: Device, element: ColumnElement, value: i64) -> Result<Self, GridError> {
        self.set(device, element, value, GRID_SIZE)?;
        Ok(self)
    }

    /// Set a value after checking it against a grid of `grid_size` columns.
    pub fn set(
        &mut self,
        device: Device,
        element: ColumnElement,
        value: i64,
        grid_size: u8,
    ) -> Result<(), GridError> {
        let checked = check_value(device, element, value, grid_size)?;
        *self.sizes[device.index()].slot(element) = Some(checked);
        Ok(())
    }

    pub fn clear(&mut self, device: Device, element: ColumnElement) {
        *self.sizes[device.index()].slot(element) = None;
    }

    pub fn get(&self, device: Device, element: ColumnElement) -> Option<u8> {
        self.sizes[device.index()].get(element)
    }

    pub fn device(&self, device: Device) -> &ColumnSizes {
        &self.sizes[device.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.iter().all(ColumnSizes::is_empty)
    }

    /// Every set value, in canonical device/element order.
    pub fn values(&self) -> impl Iterator<Item = (Device, ColumnElement, u8)> + '_ {
        Device::ALL.into_iter().flat_map(move |device| {
            ColumnElement::ALL
                .into_iter()
                .filter_map(move |element| self.get(device, element).map(|v| (device, element, v)))
        })
    }

    /// Re-check every value against a grid of `grid_size` columns.
    pub fn validate(&self, grid_size: u8) -> Result<(), GridError> {
        for (device, element, value) in self.values() {
            check_value(device, element, i64::from(value), grid_size)?;
        }
        Ok(())
    }

    /// CSS class tokens in canonical order.
    pub fn classes(&self) -> Vec<String> {
        build_column_classes(self)
    }

    /// Space-separated class string.
    pub fn class_string(&self) -> String {
        self.classes().join(" ")
    }
}

/// Assemble `col-*` class tokens: devices outer, elements inner.
pub fn build_column_classes(spec: &GridColumnSpec) -> Vec<String> {
    spec.values()
        .map(|(device, element, value)| element.class(device, value))
        .collect()
}

/// Parse a `device:element=value` directive such as `sm:offset=3`.
///
/// The value is returned unchecked so callers can report range errors
/// against their own grid size.
pub fn parse_directive(text: &str) -> Result<(Device, ColumnElement, i64), GridError> {
    let bad = || GridError::Directive(text.to_string());
    let (target, value) = text.split_once('=').ok_or_else(bad)?;
    let (device, element) = target.split_once(':').ok_or_else(bad)?;
    let device: Device = device.parse()?;
    let element: ColumnElement = element.parse().map_err(|_| bad())?;
    let value: i64 = value.trim().parse().map_err(|_| bad())?;
    Ok((device, element, value))
}

impl TryFrom<RawGridSpec> for GridColumnSpec {
    type Error = GridError;

    fn try_from(raw: RawGridSpec) -> Result<Self, Self::Error> {
        GridValues(raw).check(GRID_SIZE)
    }
}

impl From<GridColumnSpec> for RawGridSpec {
    fn from(spec: GridColumnSpec) -> Self {
        GridValues::from(&spec).0
    }
}
