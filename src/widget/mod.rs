//! Picker widgets
//!
//! This module contains:
//! - The ruler tape canvas (gesture capture and tape drawing)
//! - The picker views composing prompt, readout, unit toggle and tape

pub mod picker;
pub mod ruler_canvas;
