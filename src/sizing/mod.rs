//! Responsive size sets: pure geometry, no pixels.
//!
//! Given an aspect ratio and a breakpoint table, work out what size the
//! thumbnailer should produce at every breakpoint and whether it should crop.
//!
//! The module is split into:
//! - **Aspect ratio**: [`AspectRatioSpec`] parsing (`"16x9"`, or empty for none)
//! - **Breakpoints**: [`BreakpointTable`], ordered and unique
//! - **Parameters**: [`ResponsiveImageTarget`], [`SizeSet`], [`SizeRequest`]
//! - **Calculations**: [`compute_targets`] and its parallel [`compute_batch`]

mod aspect_ratio;
mod breakpoints;
mod calculations;
mod params;

pub use aspect_ratio::{ASPECT_RATIOS, AspectRatioError, AspectRatioSpec, aspect_ratio_choices};
pub use breakpoints::{BreakpointError, BreakpointTable, DeviceBreakpoint};
pub use calculations::{compute_batch, compute_targets};
pub use params::{ResponsiveImageTarget, SizeRequest, SizeSet};
