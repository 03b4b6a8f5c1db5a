//! `scadmesh-worker` -- runs one OpenSCAD mesh job.
//!
//! Reads a JSON job description, converts the source with OpenSCAD and
//! exits non-zero if the conversion could not be started (or, with exit
//! checking enabled, if OpenSCAD failed).
//!
//! # Environment variables
//!
//! | Variable              | Required | Default          | Description                         |
//! |-----------------------|----------|------------------|-------------------------------------|
//! | `SCADMESH_JOB_FILE`   | yes      | --               | Path to the JSON job description    |
//! | `OPENSCAD_PATH`       | no       | platform default | Explicit OpenSCAD executable        |
//! | `SCADMESH_CHECK_EXIT` | no       | `false`          | Fail when OpenSCAD exits non-zero   |

use std::path::PathBuf;

use scadmesh_core::{ConverterConfig, OpenScadConverter};
use scadmesh_worker::{load_job, run_job, JOB_FILE_VAR};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scadmesh_worker=info,scadmesh_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let job_path = PathBuf::from(std::env::var(JOB_FILE_VAR).unwrap_or_else(|_| {
        tracing::error!("{JOB_FILE_VAR} environment variable is required");
        std::process::exit(1);
    }));

    let config = ConverterConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    let converter = OpenScadConverter::from_config(&config);
    tracing::info!(
        executable = %converter.executable().display(),
        job = %job_path.display(),
        "Starting scadmesh-worker",
    );

    let result = load_job(&job_path).and_then(|job| run_job(&converter, &job, config.check_exit));

    if let Err(e) = result {
        tracing::error!(error = %e, "Mesh job failed");
        std::process::exit(1);
    }
}
