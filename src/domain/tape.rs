//! Offset/value mapping along the ruler tape
//!
//! The tape places one tick every [`LINE_SPACING`] pixels. The scroll offset is
//! the distance (in pixels) between the first tick and the middle marker.

use super::range::ValueRange;

/// Distance between two adjacent ticks, in logical pixels
pub const LINE_SPACING: f32 = 20.0;

/// Direction the tape scrolls on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TapeOrientation {
    /// Horizontal tick lines, dragged up and down
    Vertical,
    /// Vertical tick lines, dragged left and right, with a kg/lb toggle
    #[default]
    Horizontal,
}

impl TapeOrientation {
    pub fn from_horizontal_lines(horizontal_lines: bool) -> Self {
        if horizontal_lines {
            TapeOrientation::Vertical
        } else {
            TapeOrientation::Horizontal
        }
    }

    /// Only the horizontal tape offers the kg/lb toggle
    pub fn has_unit_toggle(self) -> bool {
        self == TapeOrientation::Horizontal
    }
}

/// Largest valid offset for a range: the last tick sits under the middle marker
pub fn total_extent(range: &ValueRange) -> f32 {
    range.tick_count().saturating_sub(1) as f32 * LINE_SPACING
}

/// Clamp an offset into `[0, extent]`
///
/// NaN input collapses to 0 so a bogus gesture cannot poison the state.
pub fn clamp_offset(offset: f32, extent: f32) -> f32 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(0.0, extent.max(0.0))
}

/// Value of the tick nearest to the middle marker for a given offset
pub fn value_at_offset(range: &ValueRange, offset: f32) -> i32 {
    let last_index = range.tick_count().saturating_sub(1) as f32;
    let index = clamp_offset(offset / LINE_SPACING, last_index).round() as i32;
    range.clamp(range.min.saturating_add(index))
}

/// Offset that puts `value` under the middle marker
pub fn offset_for_value(range: &ValueRange, value: i32) -> f32 {
    let index = range.clamp(value) as f32 - range.min as f32;
    clamp_offset(index * LINE_SPACING, total_extent(range))
}

/// Position of tick `index` along the scroll axis of a viewport `axis_len` long
pub fn tick_position(index: usize, offset: f32, axis_len: f32) -> f32 {
    index as f32 * LINE_SPACING - offset + axis_len / 2.0
}
