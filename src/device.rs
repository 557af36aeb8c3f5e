//! The fixed Bootstrap 3 device enumeration.
//!
//! Devices are ordered smallest to largest. That order is the canonical
//! iteration order for grid classes and for the stock breakpoint table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown device \"{0}\" (expected one of xs, sm, md, lg)")]
pub struct UnknownDevice(pub String);

/// A Bootstrap 3 responsive device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Xs,
    Sm,
    Md,
    Lg,
}

impl Device {
    /// All devices in canonical order.
    pub const ALL: [Device; 4] = [Device::Xs, Device::Sm, Device::Md, Device::Lg];

    pub fn identifier(self) -> &'static str {
        match self {
            Device::Xs => "xs",
            Device::Sm => "sm",
            Device::Md => "md",
            Device::Lg => "lg",
        }
    }

    /// Human readable device name.
    pub fn name(self) -> &'static str {
        match self {
            Device::Xs => "mobile phones",
            Device::Sm => "tablets",
            Device::Md => "laptops",
            Device::Lg => "large desktops",
        }
    }

    /// Viewport width at which the device class starts (xs has no lower
    /// bound, so it reports the `sm` threshold it stays below).
    pub fn width(self) -> u32 {
        match self {
            Device::Xs | Device::Sm => 768,
            Device::Md => 992,
            Device::Lg => 1200,
        }
    }

    /// Container width after subtracting the grid gutter.
    pub fn width_gutter(self) -> u32 {
        match self {
            Device::Xs | Device::Sm => 750,
            Device::Md => 970,
            Device::Lg => 1170,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Device {
    type Err = UnknownDevice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Device::ALL
            .into_iter()
            .find(|d| d.identifier() == s)
            .ok_or_else(|| UnknownDevice(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_smallest_first() {
        let ids: Vec<&str> = Device::ALL.iter().map(|d| d.identifier()).collect();
        assert_eq!(ids, ["xs", "sm", "md", "lg"]);
        assert!(Device::Xs < Device::Lg);
    }

    #[test]
    fn index_matches_position() {
        for (i, device) in Device::ALL.into_iter().enumerate() {
            assert_eq!(device.index(), i);
        }
    }

    #[test]
    fn parse_known_identifiers() {
        assert_eq!("md".parse::<Device>(), Ok(Device::Md));
        assert_eq!(Device::Lg.to_string(), "lg");
    }

    #[test]
    fn parse_unknown_identifier_fails() {
        let err = "xl".parse::<Device>().unwrap_err();
        assert_eq!(err, UnknownDevice("xl".into()));
        assert!(err.to_string().contains("xl"));
    }

    #[test]
    fn gutter_widths_grow_with_device() {
        assert_eq!(Device::Sm.width_gutter(), 750);
        assert_eq!(Device::Md.width_gutter(), 970);
        assert_eq!(Device::Lg.width_gutter(), 1170);
        assert!(Device::Lg.width() > Device::Md.width());
    }
}
