//! Adapters for the external UI compiler and preview tool
//!
//! Code generation and the preview window both belong to the toolkit. This
//! module hides them behind [`UiCompiler`] and [`Previewer`] so the driver
//! can be exercised without the toolkit installed.

use crate::error::{DriverError, Result};
use crate::options::{Options, DEFAULT_INDENT, DEFAULT_RESOURCE_SUFFIX};
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, Stdio};

/// The toolkit's UI compiler, looked up on `PATH`.
pub const DEFAULT_COMPILER: &str = "pyuic5";

/// Turns a `.ui` file into generated source.
pub trait UiCompiler {
    fn compile(&self, input: &Path, options: &Options, out: &mut dyn Write) -> Result<()>;
}

/// Shows a `.ui` file in a live window and blocks until it closes.
pub trait Previewer {
    /// Returns the exit status of the preview session.
    fn preview(&self, input: &Path) -> Result<i32>;
}

/// Command-line arguments for the external compiler.
///
/// Flags are only passed when they differ from the tool's own defaults, and
/// output is always taken from the child's stdout.
pub fn tool_args(input: &Path, options: &Options) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    if options.execute {
        args.push("-x".into());
    }
    if options.debug {
        args.push("-d".into());
    }
    if options.indent != DEFAULT_INDENT {
        args.push("-i".into());
        args.push(options.indent.to_string().into());
    }
    if let Some(package) = &options.import_from {
        args.push("--import-from".into());
        args.push(package.into());
    } else if options.from_imports {
        args.push("--from-imports".into());
    }
    if options.resource_suffix != DEFAULT_RESOURCE_SUFFIX {
        args.push("--resource-suffix".into());
        args.push(options.resource_suffix.as_str().into());
    }
    args.push(input.as_os_str().to_os_string());
    args
}

pub struct ExternalCompiler {
    program: OsString,
}

impl ExternalCompiler {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_COMPILER)
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &std::ffi::OsStr {
        &self.program
    }
}

impl Default for ExternalCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl UiCompiler for ExternalCompiler {
    fn compile(&self, input: &Path, options: &Options, out: &mut dyn Write) -> Result<()> {
        let args = tool_args(input, options);
        log::debug!("Running {:?} {:?}", self.program, args);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error(&self.program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("{} exited with {}", self.program.to_string_lossy(), output.status),
                detail => detail.to_string(),
            };
            return Err(DriverError::compiler(message));
        }

        if !output.stderr.is_empty() {
            log::warn!("{}", String::from_utf8_lossy(&output.stderr).trim_end());
        }

        out.write_all(&output.stdout)?;
        Ok(())
    }
}

pub struct ExternalPreviewer {
    program: OsString,
}

impl ExternalPreviewer {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_COMPILER)
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ExternalPreviewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Previewer for ExternalPreviewer {
    fn preview(&self, input: &Path) -> Result<i32> {
        log::info!("Opening preview of {}", input.display());

        let status = Command::new(&self.program)
            .arg("-p")
            .arg(input)
            .status()
            .map_err(|e| spawn_error(&self.program, e))?;

        // Killed by a signal: no code to forward.
        status
            .code()
            .ok_or_else(|| DriverError::preview(format!("preview terminated: {}", status)))
    }
}

fn spawn_error(program: &OsString, e: std::io::Error) -> DriverError {
    let program = program.to_string_lossy();
    match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => {
            DriverError::tool_not_found(program, e.to_string())
        }
        _ => DriverError::unexpected(format!("failed to run {}: {}", program, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_as_strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_tool_args_defaults() {
        let options = Options::new("form.ui");
        let args = args_as_strings(tool_args(Path::new("form.ui"), &options));
        assert_eq!(args, vec!["form.ui"]);
    }

    #[test]
    fn test_tool_args_all_options() {
        let options = Options {
            execute: true,
            debug: true,
            indent: 0,
            import_from: Some("app.res".to_string()),
            from_imports: true,
            resource_suffix: "_resources".to_string(),
            ..Options::new("form.ui")
        };
        let args = args_as_strings(tool_args(Path::new("form.ui"), &options));
        assert_eq!(
            args,
            vec![
                "-x",
                "-d",
                "-i",
                "0",
                "--import-from",
                "app.res",
                "--resource-suffix",
                "_resources",
                "form.ui"
            ]
        );
    }

    #[test]
    fn test_tool_args_from_imports() {
        let options = Options {
            from_imports: true,
            ..Options::new("form.ui")
        };
        let args = args_as_strings(tool_args(Path::new("form.ui"), &options));
        assert_eq!(args, vec!["--from-imports", "form.ui"]);
    }

    #[test]
    fn test_missing_tool() {
        let compiler = ExternalCompiler::with_program("qtuidocmake-no-such-tool");
        let mut out = Vec::new();
        let result = compiler.compile(Path::new("form.ui"), &Options::new("form.ui"), &mut out);
        assert!(matches!(result, Err(DriverError::ToolNotFound { .. })));
        assert!(out.is_empty());

        let previewer = ExternalPreviewer::with_program("qtuidocmake-no-such-tool");
        let result = previewer.preview(Path::new("form.ui"));
        assert!(matches!(result, Err(DriverError::ToolNotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_compiler_output_is_captured() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("form.ui");
        fs::write(&input, "class Ui_Form(object):\n    pass\n").unwrap();

        // `cat` stands in for the compiler: with default options it only gets the path.
        let compiler = ExternalCompiler::with_program("cat");
        let mut out = Vec::new();
        compiler
            .compile(&input, &Options::new(input.to_string_lossy()), &mut out)
            .unwrap();
        assert_eq!(out, b"class Ui_Form(object):\n    pass\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_compiler_failure_reports_stderr() {
        let compiler = ExternalCompiler::with_program("cat");
        let mut out = Vec::new();
        let result = compiler.compile(
            Path::new("/nonexistent/form.ui"),
            &Options::new("/nonexistent/form.ui"),
            &mut out,
        );
        match result {
            Err(DriverError::Compiler { message }) => assert!(message.contains("form.ui")),
            other => panic!("expected compiler error, got {:?}", other),
        }
        assert!(out.is_empty());
    }
}
