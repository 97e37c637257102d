//! Foundation types for the radioface display head.
//!
//! This crate contains the platform-agnostic types shared by every radioface
//! crate: colors and the RGB565 wire format, inclusive pixel regions, pointer
//! samples, error types, and runtime configuration.

pub mod color;
pub mod config;
pub mod error;
pub mod geom;
pub mod input;
