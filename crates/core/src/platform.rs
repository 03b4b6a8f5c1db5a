//! Host OS identity and default OpenSCAD executable locations.
//!
//! Resolution is a pure function over an injected [`OsFamily`] and an
//! environment lookup, so every platform branch is testable from any host.
//! The resolved location is never checked for existence; a wrong path only
//! shows up later as a launch failure.

use std::path::PathBuf;

/// Bare command name, resolved through the process search path.
pub const DEFAULT_COMMAND: &str = "openscad";

/// Conventional install location inside the macOS application bundle.
pub const MACOS_EXECUTABLE: &str = "/Applications/OpenSCAD.app/Contents/MacOS/OpenSCAD";

/// Environment variable holding the Windows "Program Files" directory.
pub const PROGRAM_FILES_VAR: &str = "PROGRAMFILES";

const WINDOWS_INSTALL_DIR: &str = "OpenSCAD";
const WINDOWS_EXECUTABLE: &str = "openscad.exe";

/// Operating system class used to pick the executable location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Linux,
    MacOs,
    Windows,
    Other,
}

impl OsFamily {
    /// The OS family of the build target.
    pub fn current() -> Self {
        Self::from_identity(std::env::consts::OS)
    }

    /// Map an OS identity string to a family.
    ///
    /// Accepts both host-identity names (`Linux`, `Darwin`, `Windows`) and
    /// Rust target names (`linux`, `macos`, `windows`). Anything else is
    /// [`OsFamily::Other`].
    pub fn from_identity(identity: &str) -> Self {
        match identity {
            "Linux" | "linux" => Self::Linux,
            "Darwin" | "macos" => Self::MacOs,
            "Windows" | "windows" => Self::Windows,
            _ => Self::Other,
        }
    }
}

/// Resolve the default OpenSCAD executable location for `os`.
///
/// `env_lookup` is only consulted on Windows, for [`PROGRAM_FILES_VAR`].
/// A missing variable yields a relative `OpenSCAD\openscad.exe`, which is
/// passed through as-is.
pub fn resolve_executable<F>(os: OsFamily, env_lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    match os {
        OsFamily::Linux => PathBuf::from(DEFAULT_COMMAND),
        OsFamily::MacOs => PathBuf::from(MACOS_EXECUTABLE),
        OsFamily::Windows => {
            let program_files = env_lookup(PROGRAM_FILES_VAR).unwrap_or_default();
            PathBuf::from(windows_join(&[
                &program_files,
                WINDOWS_INSTALL_DIR,
                WINDOWS_EXECUTABLE,
            ]))
        }
        OsFamily::Other => PathBuf::from(DEFAULT_COMMAND),
    }
}

/// Join path segments with `\`, independent of the host separator.
///
/// Empty segments are skipped and a separator is not doubled when the
/// preceding segment already ends with one.
fn windows_join(segments: &[&str]) -> String {
    let mut joined = String::new();
    for segment in segments.iter().filter(|s| !s.is_empty()) {
        if !joined.is_empty() && !joined.ends_with(['\\', '/']) {
            joined.push('\\');
        }
        joined.push_str(segment);
    }
    joined
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
