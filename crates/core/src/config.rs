//! Environment-driven converter configuration.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default          | Description                              |
//! |-----------------------|----------|------------------|------------------------------------------|
//! | `OPENSCAD_PATH`       | no       | platform default | Explicit OpenSCAD executable location    |
//! | `SCADMESH_CHECK_EXIT` | no       | `false`          | Treat a non-zero OpenSCAD exit as failure |

use std::path::PathBuf;

use crate::error::ConverterError;

pub const OPENSCAD_PATH_VAR: &str = "OPENSCAD_PATH";
pub const CHECK_EXIT_VAR: &str = "SCADMESH_CHECK_EXIT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Overrides platform resolution when set.
    pub executable: Option<PathBuf>,
    /// Whether callers should use the exit-status-checking conversion.
    pub check_exit: bool,
}

impl ConverterConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConverterError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an injected lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConverterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let executable = lookup(OPENSCAD_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let check_exit = match lookup(CHECK_EXIT_VAR) {
            Some(value) => parse_flag(CHECK_EXIT_VAR, &value)?,
            None => false,
        };

        Ok(Self {
            executable,
            check_exit,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConverterError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConverterError::Config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
