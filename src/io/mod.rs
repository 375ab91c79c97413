//! Input/output operations, configuration and error handling
//!
//! This module contains:
//! - The comma-separated grid codec and per-kind layouts
//! - Level and scene directory conventions
//! - The command-line front end with progress reporting

/// Command-line interface and batch processing
pub mod cli;
/// Comma-separated integer grid files
pub mod codec;
/// Engine constants and save canvas bounds
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Per-kind layout grids and their locations
pub mod layout;
/// Batch progress display
pub mod progress;
