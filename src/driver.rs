//! Runs one invocation: validates the input, then previews or compiles it.

use crate::compiler::{ExternalCompiler, ExternalPreviewer, Previewer, UiCompiler};
use crate::error::{DriverError, Result};
use crate::options::{Options, OutputTarget};
use crate::ui_file::UiHeader;
use std::fs;
use std::io::{self, Write};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Code was generated and written in full to `target`
    Generated { target: OutputTarget, bytes: usize },

    /// A preview session ran and exited with this status
    Previewed(i32),
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Generated { .. } => 0,
            RunOutcome::Previewed(code) => *code,
        }
    }
}

pub struct Driver {
    options: Options,
    compiler: Box<dyn UiCompiler>,
    previewer: Box<dyn Previewer>,
}

impl Driver {
    /// A driver backed by the toolkit's own compiler and previewer.
    pub fn new(options: Options) -> Self {
        Self::with_backends(
            options,
            Box::new(ExternalCompiler::new()),
            Box::new(ExternalPreviewer::new()),
        )
    }

    pub fn with_backends(
        options: Options,
        compiler: Box<dyn UiCompiler>,
        previewer: Box<dyn Previewer>,
    ) -> Self {
        Self {
            options,
            compiler,
            previewer,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn run(&self) -> Result<RunOutcome> {
        match serde_json::to_string(&self.options) {
            Ok(json) => log::debug!("Running with options: {}", json),
            Err(e) => log::debug!("Running with options: {:?} ({})", self.options, e),
        }

        let input = self.options.input_path();
        if !input.is_file() {
            return Err(DriverError::file_not_found(&self.options.path));
        }

        match UiHeader::read(input)? {
            Some(header) => log::info!(
                "Processing UI file: {} (format {}, class {}, root widget {})",
                self.options.path,
                header.version.as_deref().unwrap_or("?"),
                header.class_name.as_deref().unwrap_or("?"),
                header.root_widget.as_deref().unwrap_or("?")
            ),
            None => log::warn!(
                "{} does not look like a Qt Designer .ui file",
                self.options.path
            ),
        }

        if self.options.preview {
            let code = self.previewer.preview(input)?;
            log::debug!("Preview exited with status {}", code);
            return Ok(RunOutcome::Previewed(code));
        }

        log::debug!("Indentation: {}", self.options.indent_style());
        if let Some(package) = self.options.effective_import_from() {
            log::debug!("Resource imports from package '{}'", package);
        }

        // Generate in full before touching the destination.
        let mut buffer = Vec::new();
        self.compiler.compile(input, &self.options, &mut buffer)?;

        let target = self.options.output_target();
        write_output(&target, &buffer)?;
        log::info!("Generated code written to {} ({} bytes)", target, buffer.len());

        Ok(RunOutcome::Generated {
            target,
            bytes: buffer.len(),
        })
    }
}

fn write_output(target: &OutputTarget, data: &[u8]) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
        OutputTarget::File(path) => fs::write(path, data)?,
    }
    Ok(())
}
