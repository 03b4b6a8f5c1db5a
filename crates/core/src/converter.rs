//! OpenSCAD converter adapter.
//!
//! Resolves the OpenSCAD executable once at construction and runs it as a
//! blocking child process to turn a `.scad` source into a mesh file.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::command::CommandLine;
use crate::config::ConverterConfig;
use crate::error::ConverterError;
use crate::overrides::OverrideSet;
use crate::platform::{self, OsFamily};

/// Runs OpenSCAD to generate meshes from parametric sources.
///
/// Holds nothing but the executable location, so a single instance can be
/// shared freely between threads. Concurrent calls spawn independent
/// children and are not coordinated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenScadConverter {
    executable: PathBuf,
}

impl Default for OpenScadConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenScadConverter {
    /// Resolve the executable for the current OS and environment.
    pub fn new() -> Self {
        Self::for_platform(OsFamily::current(), |key| std::env::var(key).ok())
    }

    /// Resolve the executable for an explicit OS identity and environment.
    pub fn for_platform<F>(os: OsFamily, env_lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::with_executable(platform::resolve_executable(os, env_lookup))
    }

    /// Use `executable` as-is, skipping platform resolution.
    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Use the configured executable if present, otherwise resolve it.
    pub fn from_config(config: &ConverterConfig) -> Self {
        match &config.executable {
            Some(path) => Self::with_executable(path.clone()),
            None => Self::new(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Build the command line [`generate_mesh`](Self::generate_mesh) would
    /// launch.
    pub fn build_command(
        &self,
        input: impl AsRef<Path>,
        parameters: &OverrideSet,
        output: impl AsRef<Path>,
    ) -> CommandLine {
        CommandLine::build(
            &self.executable,
            input.as_ref(),
            parameters,
            output.as_ref(),
        )
    }

    /// Convert `input` into `output`, blocking until OpenSCAD exits.
    ///
    /// Only a launch failure is reported. The exit status is discarded and
    /// OpenSCAD's own output goes straight to the inherited streams, so
    /// callers that care must check for the output file themselves.
    pub fn generate_mesh(
        &self,
        input: impl AsRef<Path>,
        parameters: &OverrideSet,
        output: impl AsRef<Path>,
    ) -> Result<(), ConverterError> {
        self.run(&self.build_command(input, parameters, output))?;
        Ok(())
    }

    /// Like [`generate_mesh`](Self::generate_mesh), but a non-success exit
    /// status is returned as [`ConverterError::ToolFailed`].
    pub fn generate_mesh_checked(
        &self,
        input: impl AsRef<Path>,
        parameters: &OverrideSet,
        output: impl AsRef<Path>,
    ) -> Result<(), ConverterError> {
        let status = self.run(&self.build_command(input, parameters, output))?;
        if status.success() {
            Ok(())
        } else {
            Err(ConverterError::ToolFailed {
                code: status.code(),
            })
        }
    }

    fn run(&self, command: &CommandLine) -> Result<ExitStatus, ConverterError> {
        tracing::debug!(argv = ?command.argv(), "Launching OpenSCAD");

        let status = command
            .to_command()
            .status()
            .map_err(|source| ConverterError::Launch {
                executable: self.executable.clone(),
                source,
            })?;

        tracing::debug!(
            executable = %self.executable.display(),
            exit_code = ?status.code(),
            "OpenSCAD exited",
        );
        Ok(status)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
