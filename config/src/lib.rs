//! # Config Crate
//!
//! Centralized configuration constants for the scadgen pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{VECTOR_DISPLAY_PRECISION, INDENT_WIDTH};
//!
//! // Vector display is fixed at two decimal places everywhere.
//! let shown = format!("{:.prec$}", 1.2345_f64, prec = VECTOR_DISPLAY_PRECISION);
//! assert_eq!(shown, "1.23");
//!
//! // Block bodies are shifted by one indent level per nesting depth.
//! assert_eq!(INDENT_WIDTH, 4);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **OpenSCAD Compatible**: Defaults match what OpenSCAD tooling expects
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
