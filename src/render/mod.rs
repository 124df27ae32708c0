//! Tape rendering module
//!
//! This module contains:
//! - Pure layout of ticks, labels, the middle marker and edge fades
//!
//! The canvas widget in `widget::ruler_canvas` turns a layout into iced geometry.

pub mod geometry;
