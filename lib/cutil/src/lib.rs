//! # CUtil - Common Utilities Library
//!
//! Small helpers shared by the asset pipeline crates.
//!
//! ## Features
//!
//! - `fs`: File size helpers and per-extension directory statistics
//! - `time`: Local time formatting

#[cfg(feature = "fs")]
pub mod fs;

#[cfg(feature = "time")]
pub mod time;
