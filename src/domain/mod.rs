//! Pure domain types with minimal dependencies
//!
//! This module contains the value/offset math behind the ruler picker.
//! Types here should have no framework dependencies (cosmic, iced, etc.)
//! so they can be shared by the session state and the renderer.

pub mod range;
pub mod tape;
pub mod unit;

pub use range::*;
pub use tape::*;
pub use unit::*;
