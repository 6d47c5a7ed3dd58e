//! # Scadgen Export Crate
//!
//! Takes a rendered modeling tree to persistent storage: header, a named
//! module wrapping the body, an optional trailing invocation, and a handle
//! that can launch an external viewer on the result.
//!
//! ## Usage
//!
//! ```no_run
//! use config::constants::OutputSettings;
//! use scadgen_ast::{ScadObject, Vector3};
//! use scadgen_export::ScriptFile;
//!
//! let part = ScadObject::sphere(4.0, None)
//!     .translate(Vector3::new(0.0, 0.0, 4.0));
//!
//! // "part" becomes "part.scad"; the default settings wrap the body in
//! // `module model() { ... }` and invoke it.
//! let file = ScriptFile::write(&part, "part", &OutputSettings::default())?;
//! println!("written to {}", file.path().display());
//! # Ok::<(), scadgen_export::ExportError>(())
//! ```

pub mod error;
pub mod writer;

pub use error::{ExportError, ExportResult};
pub use writer::ScriptFile;
