//! Picker session management module
//!
//! This module contains:
//! - The explicit picker state object and its event handlers
//! - Message types emitted by the picker widgets

pub mod messages;
pub mod state;
