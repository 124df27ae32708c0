//! Message types for the picker session

use crate::domain::Unit;

/// Picker interactions, produced by the tape canvas and the unit toggle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    /// Signed drag delta along the scroll axis, in logical pixels
    ///
    /// Positive when the pointer moves down (vertical tape) or right
    /// (horizontal tape).
    Drag(f32),
    /// One of the unit segments was pressed
    SelectUnit(Unit),
}
