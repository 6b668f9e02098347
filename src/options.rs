//! The options record produced by the command line and read by the driver

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Output sentinel meaning "write to standard output".
pub const STDOUT_SENTINEL: &str = "-";

/// Default indentation width in spaces.
pub const DEFAULT_INDENT: u32 = 4;

/// Default suffix appended to resource module basenames.
pub const DEFAULT_RESOURCE_SUFFIX: &str = "_rc";

/// Default verbosity count when no `-v` is given.
pub const DEFAULT_VERBOSITY: u8 = 1;

/// Import prefix implied by `--from-imports`.
pub const CURRENT_PACKAGE: &str = ".";

/// Settings for one invocation. Built once by the CLI, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Options {
    /// Path to the input `.ui` file, exactly as given on the command line
    pub path: String,

    /// Show a preview window instead of generating code
    pub preview: bool,

    /// Output destination; `-` means standard output
    pub output: String,

    /// Generate extra code to test and display the class
    pub execute: bool,

    /// Debug output; forces the most verbose log level
    pub debug: bool,

    /// Indent width in spaces; 0 means tab
    pub indent: u32,

    /// Package prefix for generated resource imports
    pub import_from: Option<String>,

    /// Shorthand for `import_from = "."`
    pub from_imports: bool,

    /// Suffix appended to resource module basenames
    pub resource_suffix: String,

    /// Verbosity count, starting at 1
    pub verbose: u8,
}

impl Options {
    /// Options for `path` with every other field at its default.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            preview: false,
            output: STDOUT_SENTINEL.to_string(),
            execute: false,
            debug: false,
            indent: DEFAULT_INDENT,
            import_from: None,
            from_imports: false,
            resource_suffix: DEFAULT_RESOURCE_SUFFIX.to_string(),
            verbose: DEFAULT_VERBOSITY,
        }
    }

    pub fn input_path(&self) -> &Path {
        Path::new(&self.path)
    }

    pub fn output_target(&self) -> OutputTarget {
        if self.output == STDOUT_SENTINEL {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(&self.output))
        }
    }

    pub fn indent_style(&self) -> IndentStyle {
        match self.indent {
            0 => IndentStyle::Tab,
            n => IndentStyle::Spaces(n),
        }
    }

    /// The import prefix generated code should use, if any.
    ///
    /// An explicit `--import-from` wins; `--from-imports` alone means the
    /// current package.
    pub fn effective_import_from(&self) -> Option<&str> {
        match (&self.import_from, self.from_imports) {
            (Some(package), _) => Some(package.as_str()),
            (None, true) => Some(CURRENT_PACKAGE),
            (None, false) => None,
        }
    }
}

/// Where generated code goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// How generated code is indented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Tab,
    Spaces(u32),
}

impl IndentStyle {
    /// One level of indentation as text.
    pub fn unit(&self) -> String {
        match self {
            IndentStyle::Tab => "\t".to_string(),
            IndentStyle::Spaces(n) => " ".repeat(*n as usize),
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentStyle::Tab => write!(f, "use a tab"),
            IndentStyle::Spaces(1) => write!(f, "use 1 space"),
            IndentStyle::Spaces(n) => write!(f, "use {} spaces", n),
        }
    }
}
