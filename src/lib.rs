//! qtuidocmake - Qt Designer UI file front-end
//!
//! Turns a `.ui` form into generated source by handing it to the toolkit's
//! UI compiler, or opens it in a live preview window.
//!
//! # Basic Usage
//!
//! ```no_run
//! use qtuidocmake::{cli, Driver};
//!
//! let options = cli::parse_args(["dialog.ui", "-o", "ui_dialog.py"]).unwrap();
//! let outcome = Driver::new(options).run().unwrap();
//! assert_eq!(outcome.exit_code(), 0);
//! ```
//!
//! # Pipeline
//!
//! 1. **cli**: parse arguments into an immutable [`Options`] record
//! 2. **cli::logging**: derive the log threshold from `-v`/`--debug`
//! 3. **driver**: check the input, sniff its header, then preview or compile
//! 4. **compiler**: run the external tool and capture what it generates

pub mod error;
pub mod options;
pub mod ui_file;
pub mod compiler;
pub mod driver;
pub mod cli;

// Re-export commonly used types and functions
pub use error::{DriverError, Result, EXIT_FAILURE, EXIT_USAGE};
pub use options::{IndentStyle, Options, OutputTarget};
pub use ui_file::{UiHeader, UiSniffer};
pub use compiler::{ExternalCompiler, ExternalPreviewer, Previewer, UiCompiler, DEFAULT_COMPILER};
pub use driver::{Driver, RunOutcome};
pub use cli::logging::LogConfig;
pub use cli::{parse_args, UsageError, UsageErrorKind};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
