use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConverterError {
    #[error("Failed to launch OpenSCAD at {}: {source}", .executable.display())]
    Launch {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("OpenSCAD exited with {}", describe_code(.code))]
    ToolFailed { code: Option<i32> },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
