//! OpenSCAD argument vector construction.
//!
//! The argument order is fixed:
//!
//! ```text
//! <executable> -o<output> -D<name1>=<value1> -D<name2>=<value2> ... <input>
//! ```

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::overrides::{OverrideSet, OverrideValue};

/// Flag prefix naming the output file.
pub const OUTPUT_FLAG: &str = "-o";

/// Flag prefix for a single variable definition.
pub const DEFINE_FLAG: &str = "-D";

/// A fully built OpenSCAD invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: PathBuf,
    args: Vec<OsString>,
}

impl CommandLine {
    /// Build the invocation for converting `input` into `output`.
    ///
    /// Neither path is checked; OpenSCAD reports its own errors.
    pub fn build(
        program: &Path,
        input: &Path,
        parameters: &OverrideSet,
        output: &Path,
    ) -> Self {
        let mut args = Vec::with_capacity(parameters.len() + 2);
        args.push(prefixed(OUTPUT_FLAG, output.as_os_str()));
        for (name, value) in parameters.iter() {
            args.push(OsString::from(define_flag(name, value)));
        }
        args.push(input.as_os_str().to_os_string());

        Self {
            program: program.to_path_buf(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed after the program.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// The complete argument vector, program first.
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.as_os_str().to_os_string())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Convert into a [`Command`] ready to spawn. Standard streams are
    /// left inherited.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Format one `-D<name>=<value>` definition.
pub fn define_flag(name: &str, value: &OverrideValue) -> String {
    format!("{DEFINE_FLAG}{name}={value}")
}

fn prefixed(flag: &str, value: &OsStr) -> OsString {
    let mut arg = OsString::with_capacity(flag.len() + value.len());
    arg.push(flag);
    arg.push(value);
    arg
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn argv_strings(cmd: &CommandLine) -> Vec<String> {
        cmd.argv()
            .into_iter()
            .map(|arg| arg.into_string().expect("utf-8 argument"))
            .collect()
    }

    fn build(parameters: &OverrideSet) -> CommandLine {
        CommandLine::build(
            Path::new("openscad"),
            Path::new("model.scad"),
            parameters,
            Path::new("model.stl"),
        )
    }

    #[test]
    fn empty_overrides_produce_no_define_flags() {
        let cmd = build(&OverrideSet::new());
        assert_eq!(argv_strings(&cmd), ["openscad", "-omodel.stl", "model.scad"]);
    }

    #[test]
    fn text_override_is_quoted() {
        let params: OverrideSet = [("size", "10")].into_iter().collect();
        let cmd = build(&params);
        assert_eq!(argv_strings(&cmd)[2], "-Dsize=\"10\"");
    }

    #[test]
    fn numeric_override_is_bare() {
        let params: OverrideSet = [("height", 5)].into_iter().collect();
        let cmd = build(&params);
        assert_eq!(argv_strings(&cmd)[2], "-Dheight=5");
    }

    #[test]
    fn overrides_sit_between_output_and_input_in_order() {
        let mut params = OverrideSet::new();
        params.insert("width", 20);
        params.insert("label", "front");
        params.insert("scale", 1.5);
        params.insert("hollow", false);

        let cmd = build(&params);
        assert_eq!(
            argv_strings(&cmd),
            [
                "openscad",
                "-omodel.stl",
                "-Dwidth=20",
                "-Dlabel=\"front\"",
                "-Dscale=1.5",
                "-Dhollow=false",
                "model.scad",
            ]
        );
    }

    #[test]
    fn output_flag_has_no_separating_space() {
        let cmd = CommandLine::build(
            Path::new("openscad"),
            Path::new("in dir/part.scad"),
            &OverrideSet::new(),
            Path::new("out dir/part.stl"),
        );
        assert_eq!(
            argv_strings(&cmd),
            ["openscad", "-oout dir/part.stl", "in dir/part.scad"]
        );
    }

    #[test]
    fn program_and_args_split() {
        let params: OverrideSet = [("n", 1)].into_iter().collect();
        let cmd = build(&params);
        assert_eq!(cmd.program(), Path::new("openscad"));
        assert_eq!(cmd.args().len(), 3);
    }

    #[test]
    fn to_command_carries_program_and_args() {
        let params: OverrideSet = [("n", 1)].into_iter().collect();
        let cmd = build(&params).to_command();
        assert_eq!(cmd.get_program(), OsStr::new("openscad"));
        let args: Vec<&str> = cmd
            .get_args()
            .map(|arg| arg.to_str().expect("utf-8 argument"))
            .collect();
        assert_eq!(args, ["-omodel.stl", "-Dn=1", "model.scad"]);
    }
}
