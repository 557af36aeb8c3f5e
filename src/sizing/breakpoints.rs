//! Ordered breakpoint tables.

use crate::device::Device;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Deref;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BreakpointError {
    #[error("duplicate breakpoint identifier \"{0}\"")]
    Duplicate(String),
    #[error("breakpoint identifier must not be empty")]
    EmptyIdentifier,
    #[error("breakpoint \"{0}\" must have a positive width_gutter")]
    ZeroWidth(String),
}

/// A named breakpoint and the default render width used at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceBreakpoint {
    pub identifier: String,
    pub width_gutter: u32,
}

impl DeviceBreakpoint {
    pub fn new(identifier: impl Into<String>, width_gutter: u32) -> Self {
        Self {
            identifier: identifier.into(),
            width_gutter,
        }
    }
}

impl From<Device> for DeviceBreakpoint {
    fn from(device: Device) -> Self {
        Self::new(device.identifier(), device.width_gutter())
    }
}

/// Breakpoints iterated smallest to largest, identifiers unique.
///
/// Dereferences to a slice so it can be passed wherever
/// `&[DeviceBreakpoint]` is expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DeviceBreakpoint>", into = "Vec<DeviceBreakpoint>")]
pub struct BreakpointTable(Vec<DeviceBreakpoint>);

impl BreakpointTable {
    pub fn new(breakpoints: Vec<DeviceBreakpoint>) -> Result<Self, BreakpointError> {
        let mut seen = HashSet::new();
        for bp in &breakpoints {
            if bp.identifier.is_empty() {
                return Err(BreakpointError::EmptyIdentifier);
            }
            if bp.width_gutter == 0 {
                return Err(BreakpointError::ZeroWidth(bp.identifier.clone()));
            }
            if !seen.insert(bp.identifier.as_str()) {
                return Err(BreakpointError::Duplicate(bp.identifier.clone()));
            }
        }
        Ok(Self(breakpoints))
    }

    /// The stock Bootstrap 3 table: xs, sm, md, lg with container widths.
    pub fn bootstrap3() -> Self {
        Self(Device::ALL.into_iter().map(DeviceBreakpoint::from).collect())
    }

    pub fn get(&self, identifier: &str) -> Option<&DeviceBreakpoint> {
        self.0.iter().find(|bp| bp.identifier == identifier)
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::bootstrap3()
    }
}

impl Deref for BreakpointTable {
    type Target = [DeviceBreakpoint];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<DeviceBreakpoint>> for BreakpointTable {
    type Error = BreakpointError;

    fn try_from(value: Vec<DeviceBreakpoint>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BreakpointTable> for Vec<DeviceBreakpoint> {
    fn from(value: BreakpointTable) -> Self {
        value.0
    }
}
