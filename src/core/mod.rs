//! Core application module
//!
//! This module contains:
//! - Command-line flags
//! - Application entry point and Cosmic Application implementation

pub mod app;
