//! Script-file writing.
//!
//! The writer composes the configured header, the rendered tree wrapped in a
//! named module, and the optional trailing invocation, then writes the lot
//! through a buffered writer. Writing and viewer launching are the only I/O
//! in the workspace; tree construction and rendering stay pure.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use config::constants::{OutputSettings, SCAD_FILE_EXTENSION};
use log::{debug, info};
use scadgen_ast::render::{module_invocation, named_module};
use scadgen_ast::ScadObject;

use crate::error::{ExportError, ExportResult};

/// Handle to a script file written by [`ScriptFile::write`].
///
/// # Examples
/// ```no_run
/// use config::constants::OutputSettings;
/// use scadgen_ast::ScadObject;
/// use scadgen_export::ScriptFile;
///
/// let part = ScadObject::cube_uniform(5.0, true);
/// let file = ScriptFile::write(&part, "part", &OutputSettings::default())?;
/// file.launch_viewer("openscad")?;
/// # Ok::<(), scadgen_export::ExportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScriptFile {
    path: PathBuf,
}

impl ScriptFile {
    /// Renders `object` and writes it to `path`.
    ///
    /// A path given without an extension gets the default script extension
    /// appended. The file layout is: header, blank line, the rendered
    /// subtree wrapped as `module <name>() { ... }`, and (when the settings
    /// ask for it) a trailing `<name>();` invocation.
    pub fn write(
        object: &ScadObject,
        path: impl Into<PathBuf>,
        settings: &OutputSettings,
    ) -> ExportResult<ScriptFile> {
        let mut path = path.into();
        if path.extension().is_none() {
            path.set_extension(SCAD_FILE_EXTENSION);
        }

        let body = object.render();
        debug!("rendered {} bytes of script", body.len());

        let mut out = BufWriter::new(File::create(&path)?);
        writeln!(out, "{}", settings.header)?;
        writeln!(out)?;
        out.write_all(named_module(&settings.module_name, &body).as_bytes())?;
        if settings.auto_invoke {
            out.write_all(module_invocation(&settings.module_name).as_bytes())?;
        }
        out.flush()?;

        info!("wrote script file {}", path.display());
        Ok(ScriptFile { path })
    }

    /// The path the script was written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Launches an external viewer/renderer on the written file.
    ///
    /// The child process is returned to the caller; waiting on it (or not)
    /// is the caller's choice.
    pub fn launch_viewer(&self, program: &str) -> ExportResult<Child> {
        info!("launching {} {}", program, self.path.display());
        Command::new(program)
            .arg(&self.path)
            .spawn()
            .map_err(|source| ExportError::Spawn {
                program: program.to_string(),
                source,
            })
    }
}
