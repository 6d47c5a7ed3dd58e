//! Knobs for the generated script output: numeric display precision, block
//! indentation, extrusion resolution, and the file-level defaults (header
//! comment, module name, extension) the writer falls back on.
//!
//! The render and export crates read everything here and never define their
//! own literals, so changing a value in this module changes it everywhere.

use std::fmt;

/// Number of decimal places used when vectors are formatted for display or
/// embedded in transform calls.
///
/// # Examples
/// ```
/// use config::constants::VECTOR_DISPLAY_PRECISION;
/// assert_eq!(VECTOR_DISPLAY_PRECISION, 2);
/// ```
pub const VECTOR_DISPLAY_PRECISION: usize = 2;

/// Spaces added per nesting level inside rendered block statements.
///
/// # Examples
/// ```
/// use config::constants::INDENT_WIDTH;
/// assert!(INDENT_WIDTH >= 2);
/// ```
pub const INDENT_WIDTH: usize = 4;

/// Default angular resolution (`$fn`) applied to extrusion calls when the
/// caller does not override it.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RESOLUTION;
/// assert_eq!(DEFAULT_RESOLUTION, 10);
/// ```
pub const DEFAULT_RESOLUTION: u32 = 10;

/// File extension appended to script paths that are given without one.
///
/// # Examples
/// ```
/// use config::constants::SCAD_FILE_EXTENSION;
/// assert_eq!(SCAD_FILE_EXTENSION, "scad");
/// ```
pub const SCAD_FILE_EXTENSION: &str = "scad";

/// Name of the generated wrapper module when no override is configured.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MODULE_NAME;
/// assert!(!DEFAULT_MODULE_NAME.is_empty());
/// ```
pub const DEFAULT_MODULE_NAME: &str = "model";

/// Preamble comment written at the top of every generated script file.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_HEADER;
/// assert!(DEFAULT_HEADER.starts_with("//"));
/// ```
pub const DEFAULT_HEADER: &str = "// Generated by scadgen - do not edit by hand";

/// Immutable snapshot of the output configuration consumed by the script
/// writer. Read-only for the render and export paths.
///
/// # Examples
/// ```
/// use config::constants::OutputSettings;
/// let settings = OutputSettings::default();
/// assert!(settings.auto_invoke);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    /// Header comment emitted before the generated module.
    pub header: String,
    /// Name given to the generated wrapper module.
    pub module_name: String,
    /// Whether the generated module is invoked at the end of the file.
    pub auto_invoke: bool,
}

impl OutputSettings {
    /// Builds settings enforcing that the module name is a plain identifier
    /// (OpenSCAD module names may not be empty and may not contain spaces or
    /// punctuation beyond `_`).
    ///
    /// # Examples
    /// ```
    /// use config::constants::OutputSettings;
    /// let settings = OutputSettings::new("// header", "my_part", false).expect("valid");
    /// assert_eq!(settings.module_name, "my_part");
    /// ```
    pub fn new(
        header: impl Into<String>,
        module_name: impl Into<String>,
        auto_invoke: bool,
    ) -> Result<Self, SettingsError> {
        let module_name = module_name.into();
        if module_name.is_empty()
            || !module_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
            || module_name
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit())
        {
            return Err(SettingsError::InvalidModuleName(module_name));
        }
        Ok(Self {
            header: header.into(),
            module_name,
            auto_invoke,
        })
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            module_name: DEFAULT_MODULE_NAME.to_string(),
            auto_invoke: true,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum SettingsError {
    /// Raised when the module name is empty or not a plain identifier.
    InvalidModuleName(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidModuleName(name) => {
                write!(f, "module name must be a non-empty identifier: {name:?}")
            }
        }
    }
}

impl std::error::Error for SettingsError {}
