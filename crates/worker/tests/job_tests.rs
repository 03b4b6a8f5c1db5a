//! Integration tests for job loading and execution.

use std::io::Write;

use assert_matches::assert_matches;
use scadmesh_core::{ConverterError, OpenScadConverter, OverrideValue};
use scadmesh_worker::{load_job, run_job, WorkerError};

fn write_job(body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    write!(f, "{body}").expect("write job");
    f
}

// ---------------------------------------------------------------------------
// Test: load_job
// ---------------------------------------------------------------------------

#[test]
fn load_job_reads_paths_and_parameters() {
    let file = write_job(
        r#"{
            "input": "models/bracket.scad",
            "output": "out/bracket.stl",
            "parameters": {"thickness": 2.5, "holes": 4, "label": "v2"}
        }"#,
    );

    let job = load_job(file.path()).expect("load job");
    assert_eq!(job.input.to_str(), Some("models/bracket.scad"));
    assert_eq!(job.output.to_str(), Some("out/bracket.stl"));

    let names: Vec<&str> = job.parameters.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["thickness", "holes", "label"]);
    assert_eq!(job.parameters.get("holes"), Some(&OverrideValue::Integer(4)));
}

#[test]
fn load_job_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = load_job(&dir.path().join("missing.json"));
    assert_matches!(result, Err(WorkerError::Io { .. }));
}

#[test]
fn load_job_invalid_json_is_parse_error() {
    let file = write_job(r#"{"input": "a.scad"}"#);
    let result = load_job(file.path());
    assert_matches!(result, Err(WorkerError::Parse { .. }));
}

// ---------------------------------------------------------------------------
// Test: run_job
// ---------------------------------------------------------------------------

#[test]
fn run_job_surfaces_launch_failure() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let file = write_job(r#"{"input": "a.scad", "output": "a.stl"}"#);
    let job = load_job(file.path()).expect("load job");
    let converter = OpenScadConverter::with_executable(dir.path().join("no-openscad"));

    for check_exit in [false, true] {
        let result = run_job(&converter, &job, check_exit);
        assert_matches!(
            result,
            Err(WorkerError::Converter(ConverterError::Launch { .. }))
        );
    }
}

#[cfg(unix)]
#[test]
fn run_job_check_exit_controls_tool_failure() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("create temp dir");
    let exe = dir.path().join("openscad");
    std::fs::write(&exe, "#!/bin/sh\nexit 1\n").expect("write script");
    std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).expect("chmod");

    let file = write_job(r#"{"input": "a.scad", "output": "a.stl"}"#);
    let job = load_job(file.path()).expect("load job");
    let converter = OpenScadConverter::with_executable(&exe);

    assert!(run_job(&converter, &job, false).is_ok());
    assert_matches!(
        run_job(&converter, &job, true),
        Err(WorkerError::Converter(ConverterError::ToolFailed { code: Some(1) }))
    );
}
