//! Picker state and its event handlers
//!
//! The state is the single source of truth for the widget. Everything the
//! renderer needs (visible range, adjusted offset, selected value) is derived
//! from it on demand, and it only changes through [`PickerState::on_drag`] and
//! [`PickerState::on_unit_selected`].

use crate::domain::{
    TapeOrientation, Unit, ValueRange, clamp_offset, offset_for_value, total_extent,
    value_at_offset,
};

use super::messages::Msg;

/// What the renderer needs to draw one frame of the tape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapeView {
    pub orientation: TapeOrientation,
    /// Range of the ticks currently on the tape
    pub range: ValueRange,
    /// Offset of the tape in tick space
    pub offset: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PickerState {
    pub orientation: TapeOrientation,
    /// Range as configured, always in the primary unit
    pub base_range: ValueRange,
    pub unit: Unit,
    /// Raw offset accumulated from drag deltas, in pixels of the active unit
    pub offset: f32,
}

impl PickerState {
    pub fn new(base_range: ValueRange, orientation: TapeOrientation) -> Self {
        Self {
            orientation,
            base_range,
            unit: Unit::Kg,
            offset: 0.0,
        }
    }

    /// Pixels of tape moved per pixel of drag
    pub fn scale(&self) -> f32 {
        if self.orientation.has_unit_toggle() {
            self.unit.factor() as f32
        } else {
            1.0
        }
    }

    /// Range of the ticks shown for the active unit
    pub fn display_range(&self) -> ValueRange {
        if self.orientation.has_unit_toggle() && self.unit != Unit::Kg {
            self.base_range.scaled(self.unit.factor())
        } else {
            self.base_range
        }
    }

    /// Upper bound of the raw offset
    pub fn max_offset(&self) -> f32 {
        total_extent(&self.display_range()) / self.scale()
    }

    /// Raw offset expressed in tick space of the active unit
    pub fn adjusted_offset(&self) -> f32 {
        self.offset * self.scale()
    }

    pub fn selected_value(&self) -> i32 {
        value_at_offset(&self.display_range(), self.adjusted_offset())
    }

    pub fn tape(&self) -> TapeView {
        TapeView {
            orientation: self.orientation,
            range: self.display_range(),
            offset: self.adjusted_offset(),
        }
    }

    /// Dispatch a picker message to its handler
    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::Drag(delta) => self.on_drag(delta),
            Msg::SelectUnit(unit) => self.on_unit_selected(unit),
        }
    }

    /// Move the tape with the pointer: dragging forward scrolls back toward `min`
    pub fn on_drag(&mut self, delta: f32) {
        self.offset = clamp_offset(self.offset - delta, self.max_offset());
        log::trace!(
            "drag {delta:+.1}px -> offset {:.1}, value {}",
            self.offset,
            self.selected_value()
        );
    }

    /// Switch the unit, converting the selected value and rebasing the offset
    pub fn on_unit_selected(&mut self, unit: Unit) {
        if !self.orientation.has_unit_toggle() || unit == self.unit {
            return;
        }

        let previous = self.unit;
        let converted = unit.convert(self.selected_value(), previous);
        self.unit = unit;

        let range = self.display_range();
        let target = range.clamp(converted);
        self.offset = clamp_offset(
            offset_for_value(&range, target) / self.scale(),
            self.max_offset(),
        );

        log::debug!(
            "unit {previous:?} -> {unit:?}: value {converted} (clamped {target}), offset {:.1}",
            self.offset
        );
    }
}
