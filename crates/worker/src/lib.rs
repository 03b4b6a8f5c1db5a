//! `scadmesh-worker` library crate.
//!
//! Loads a single mesh job from JSON and runs it through the OpenSCAD
//! converter. The binary entrypoint lives in `main.rs`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use scadmesh_core::{ConverterError, OpenScadConverter, OverrideSet};

/// Environment variable naming the job file to run.
pub const JOB_FILE_VAR: &str = "SCADMESH_JOB_FILE";

/// One conversion request: source in, mesh out, with overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshJob {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub parameters: OverrideSet,
}

#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("Failed to read job file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid job file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Converter(#[from] ConverterError),
}

/// Read and parse a [`MeshJob`] from a JSON file.
pub fn load_job(path: &Path) -> Result<MeshJob, WorkerError> {
    let contents = std::fs::read_to_string(path).map_err(|source| WorkerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| WorkerError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Run `job` through `converter`, blocking until OpenSCAD exits.
///
/// With `check_exit` a non-zero OpenSCAD exit is an error; without it only
/// launch failures are.
pub fn run_job(
    converter: &OpenScadConverter,
    job: &MeshJob,
    check_exit: bool,
) -> Result<(), WorkerError> {
    tracing::info!(
        input = %job.input.display(),
        output = %job.output.display(),
        overrides = job.parameters.len(),
        check_exit,
        "Generating mesh",
    );

    if check_exit {
        converter.generate_mesh_checked(&job.input, &job.parameters, &job.output)?;
    } else {
        converter.generate_mesh(&job.input, &job.parameters, &job.output)?;
    }

    tracing::info!(output = %job.output.display(), "Mesh generation finished");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use scadmesh_core::OverrideValue;

    use super::*;

    #[test]
    fn parameters_default_to_empty() {
        let job: MeshJob =
            serde_json::from_str(r#"{"input": "a.scad", "output": "a.stl"}"#).expect("parse");
        assert!(job.parameters.is_empty());
    }

    #[test]
    fn parameters_keep_document_order() {
        let job: MeshJob = serde_json::from_str(
            r#"{"input": "a.scad", "output": "a.stl", "parameters": {"b": 1, "a": "x"}}"#,
        )
        .expect("parse");
        let entries: Vec<(&str, &OverrideValue)> = job.parameters.iter().collect();
        assert_eq!(entries[0], ("b", &OverrideValue::Integer(1)));
        assert_eq!(entries[1], ("a", &OverrideValue::Text("x".to_string())));
    }

    #[test]
    fn converter_error_is_transparent() {
        let err = WorkerError::from(ConverterError::ToolFailed { code: Some(2) });
        assert_eq!(err.to_string(), "OpenSCAD exited with exit code 2");
    }
}
