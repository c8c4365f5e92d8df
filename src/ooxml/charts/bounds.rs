//! Inclusive bounds for clamped chart settings.
//!
//! Every numeric chart setting is stored already clamped. Setters accept any
//! value of the field's type and silently pull it into range; there is no
//! error path.

use std::fmt::Debug;
use std::ops::RangeInclusive;

/// Gap between bar clusters or up/down bars, as a percentage of bar width.
pub const GAP_WIDTH: RangeInclusive<u16> = 0..=500;
/// Depth gap for 3D bar and area charts, as a percentage of bar width.
pub const GAP_DEPTH: RangeInclusive<u16> = 0..=500;
/// Bar overlap within a cluster, in percent.
pub const OVERLAP: RangeInclusive<i16> = -100..=100;
/// Bubble size scale, as a percentage of the default size.
pub const BUBBLE_SCALE: RangeInclusive<u16> = 0..=300;
/// Marker size in points.
pub const MARKER_SIZE: RangeInclusive<u8> = 2..=72;
/// 1-based worksheet row index.
pub const ROW_INDEX: RangeInclusive<u32> = 1..=1_048_576;
/// 1-based worksheet column index.
pub const COLUMN_INDEX: RangeInclusive<u32> = 1..=16_384;

/// Gap width of a new bar chart or up/down bars.
pub const DEFAULT_GAP_WIDTH: u16 = 150;
/// Gap depth of a new 3D bar or area chart.
pub const DEFAULT_GAP_DEPTH: u16 = 150;
/// Bars in a new cluster touch without overlapping.
pub const DEFAULT_OVERLAP: i16 = 0;
/// Bubbles are drawn at full size.
pub const DEFAULT_BUBBLE_SCALE: u16 = 100;
/// Size reported for a marker whose size was never set.
pub const DEFAULT_MARKER_SIZE: u8 = 5;

/// Clamp `value` into `range`, tracing when the input had to be adjusted.
#[inline]
pub(crate) fn clamp_to<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> T
where
    T: PartialOrd + Copy + Debug,
{
    let clamped = if value < *range.start() {
        *range.start()
    } else if value > *range.end() {
        *range.end()
    } else {
        value
    };

    if clamped != value {
        tracing::trace!(field, requested = ?value, stored = ?clamped, "clamped chart setting");
    }

    clamped
}
