//! Pure size-set calculations.
//!
//! All functions here are pure and testable without any I/O or images.

use super::aspect_ratio::AspectRatioSpec;
use super::breakpoints::DeviceBreakpoint;
use super::params::{ResponsiveImageTarget, SizeRequest, SizeSet};
use rayon::prelude::*;

/// Compute the responsive target for every breakpoint, in table order.
///
/// # Arguments
/// * `breakpoints` - Breakpoints, smallest first
/// * `ratio` - Declared aspect ratio; a fixed ratio forces height and crop
/// * `override_width` - Used instead of the gutter width when positive
/// * `override_height` - Used as height when no ratio is declared
///
/// Widths and heights are not range-checked: a non-positive override height
/// is passed through as given.
///
/// # Examples
/// ```
/// # use bootstrap_blocks::sizing::{AspectRatioSpec, DeviceBreakpoint, compute_targets};
/// let table = [DeviceBreakpoint::new("xs", 320), DeviceBreakpoint::new("sm", 480)];
/// let ratio = AspectRatioSpec::parse("16x9").unwrap();
/// let set = compute_targets(&table, ratio, None, None);
/// assert_eq!(set.get("xs").unwrap().size(), (320, 180));
/// assert_eq!(set.get("sm").unwrap().size(), (480, 270));
/// ```
pub fn compute_targets(
    breakpoints: &[DeviceBreakpoint],
    ratio: AspectRatioSpec,
    override_width: Option<i64>,
    override_height: Option<i64>,
) -> SizeSet {
    let mut set = SizeSet::new();

    for bp in breakpoints {
        let width = override_width
            .filter(|&w| w > 0)
            .unwrap_or(i64::from(bp.width_gutter));

        let (height, crop) = match ratio.components() {
            Some((ratio_w, ratio_h)) => (ratio_height(width, ratio_w, ratio_h), true),
            None => (override_height.unwrap_or(0), false),
        };

        set.push(
            bp.identifier.clone(),
            ResponsiveImageTarget {
                width,
                height,
                crop,
                // Never refuse to enlarge: consistent layout beats fidelity.
                upscale: true,
                width_descriptor: format!("{width}w"),
                size_descriptor: format!("{width}x{height}"),
            },
        );
    }

    set
}

/// Height for `width` at `ratio_w:ratio_h`, truncated toward zero.
fn ratio_height(width: i64, ratio_w: u32, ratio_h: u32) -> i64 {
    (width as f64 * f64::from(ratio_h) / f64::from(ratio_w)) as i64
}

/// Compute size sets for many requests in parallel.
///
/// Results line up with `requests` by index.
pub fn compute_batch(breakpoints: &[DeviceBreakpoint], requests: &[SizeRequest]) -> Vec<SizeSet> {
    requests
        .par_iter()
        .map(|req| {
            compute_targets(
                breakpoints,
                req.ratio,
                req.override_width,
                req.override_height,
            )
        })
        .collect()
}
