// FILE: src/cli/mod.rs
//! Command-line surface: argument schema, parsing and usage errors.

pub mod logging;

use crate::error::EXIT_USAGE;
use crate::options::{
    Options, DEFAULT_INDENT, DEFAULT_RESOURCE_SUFFIX, DEFAULT_VERBOSITY, STDOUT_SENTINEL,
};
use clap::builder::NonEmptyStringValueParser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command};
use std::ffi::OsString;
use std::io::{self, Write};
use thiserror::Error;

const HELP_TEMPLATE: &str = "usage: {usage}\n\n{about}\n\n{all-args}\n";

/// What kind of early exit the parser asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageErrorKind {
    Help,
    Version,
    MissingArgument,
    UnrecognizedArguments,
    InvalidValue,
    Other,
}

/// A parse outcome that ends the process before the driver runs.
///
/// Help and version requests are carried here too: they print to stdout
/// and exit 0, everything else prints to stderr and exits 2.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct UsageError {
    kind: UsageErrorKind,
    message: String,
}

impl UsageError {
    pub fn kind(&self) -> UsageErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn use_stderr(&self) -> bool {
        !matches!(self.kind, UsageErrorKind::Help | UsageErrorKind::Version)
    }

    pub fn exit_code(&self) -> i32 {
        if self.use_stderr() {
            EXIT_USAGE
        } else {
            0
        }
    }

    pub fn print(&self) -> io::Result<()> {
        if self.use_stderr() {
            let mut stderr = io::stderr().lock();
            stderr.write_all(self.message.as_bytes())?;
            stderr.flush()
        } else {
            let mut stdout = io::stdout().lock();
            stdout.write_all(self.message.as_bytes())?;
            stdout.flush()
        }
    }

    /// Print the message to the right stream and terminate the process.
    pub fn exit(&self) -> ! {
        let _ = self.print();
        std::process::exit(self.exit_code())
    }
}

pub fn usage() -> String {
    format!("{} [options] path", crate::NAME)
}

pub fn build_cli() -> Command {
    Command::new(crate::NAME)
        .version(crate::VERSION)
        .about(crate::DESCRIPTION)
        .override_usage(usage())
        .help_template(HELP_TEMPLATE)
        .color(ColorChoice::Never)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .next_help_heading("paths and folders")
        .next_display_order(1)
        .arg(
            Arg::new("path")
                .value_name("path")
                .display_order(0)
                .help("path to .ui file")
                .required(true)
                .value_parser(NonEmptyStringValueParser::new())
                .index(1),
        )
        .arg(
            Arg::new("preview")
                .short('p')
                .long("preview")
                .help("show a preview of the UI instead of generating code")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("write generated code to FILE instead of stdout")
                .default_value(STDOUT_SENTINEL)
                .hide_default_value(true),
        )
        .arg(
            Arg::new("execute")
                .short('x')
                .long("execute")
                .help("generate extra code to test and display the class")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("show debug output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("indent")
                .short('i')
                .long("indent")
                .value_name("N")
                .help("set indent width to N spaces, tab if N is 0")
                .value_parser(clap::value_parser!(u32))
                .allow_negative_numbers(true)
                .default_value("4"),
        )
        .next_help_heading("other")
        .arg(
            Arg::new("import-from")
                .long("import-from")
                .value_name("PACKAGE")
                .help("generate imports of pyrcc5 generated modules in the style 'from PACKAGE import ...'"),
        )
        .arg(
            Arg::new("from-imports")
                .long("from-imports")
                .help("the equivalent of '--import-from=.'")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("resource-suffix")
                .long("resource-suffix")
                .value_name("SUFFIX")
                .help("append SUFFIX to the basename of resource files")
                .default_value(DEFAULT_RESOURCE_SUFFIX),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("-v show progress, -vv show debug")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help("show version and exit")
                .action(ArgAction::Version),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .help("show this help message and exit")
                .action(ArgAction::Help),
        )
}

/// Parse the process arguments, excluding the program name.
pub fn parse_args<I, T>(args: I) -> Result<Options, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut cmd = build_cli();
    let argv = std::iter::once(OsString::from(crate::NAME)).chain(args.into_iter().map(Into::into));

    match cmd.try_get_matches_from_mut(argv) {
        Ok(matches) => Ok(build_options(&matches)),
        Err(err) => Err(usage_error(&cmd, &err)),
    }
}

/// Parse `std::env::args_os`, exiting the process on any usage error.
pub fn parse_env() -> Options {
    match parse_args(std::env::args_os().skip(1)) {
        Ok(options) => options,
        Err(err) => err.exit(),
    }
}

pub fn build_options(matches: &ArgMatches) -> Options {
    Options {
        path: matches.get_one::<String>("path").cloned().unwrap_or_default(),
        preview: matches.get_flag("preview"),
        output: matches
            .get_one::<String>("output")
            .cloned()
            .unwrap_or_else(|| STDOUT_SENTINEL.to_string()),
        execute: matches.get_flag("execute"),
        debug: matches.get_flag("debug"),
        indent: matches.get_one::<u32>("indent").copied().unwrap_or(DEFAULT_INDENT),
        import_from: matches.get_one::<String>("import-from").cloned(),
        from_imports: matches.get_flag("from-imports"),
        resource_suffix: matches
            .get_one::<String>("resource-suffix")
            .cloned()
            .unwrap_or_else(|| DEFAULT_RESOURCE_SUFFIX.to_string()),
        verbose: DEFAULT_VERBOSITY.saturating_add(matches.get_count("verbose")),
    }
}

fn usage_error(cmd: &Command, err: &clap::Error) -> UsageError {
    let (kind, detail) = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            return UsageError {
                kind: UsageErrorKind::Help,
                message: err.to_string(),
            };
        }
        ErrorKind::DisplayVersion => {
            return UsageError {
                kind: UsageErrorKind::Version,
                message: err.to_string(),
            };
        }
        ErrorKind::MissingRequiredArgument => {
            let names = context_strings(err, ContextKind::InvalidArg)
                .iter()
                .map(|rendered| display_name(cmd, rendered))
                .collect::<Vec<_>>();
            (
                UsageErrorKind::MissingArgument,
                format!("the following arguments are required: {}", names.join(", ")),
            )
        }
        ErrorKind::UnknownArgument => (
            UsageErrorKind::UnrecognizedArguments,
            format!(
                "unrecognized arguments: {}",
                context_strings(err, ContextKind::InvalidArg).join(" ")
            ),
        ),
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
            (UsageErrorKind::InvalidValue, invalid_value_detail(cmd, err))
        }
        _ => (UsageErrorKind::Other, first_line(err)),
    };

    UsageError {
        kind,
        message: format!("usage: {}\n{}: error: {}\n", usage(), crate::NAME, detail),
    }
}

fn invalid_value_detail(cmd: &Command, err: &clap::Error) -> String {
    let rendered = context_strings(err, ContextKind::InvalidArg);
    let Some(rendered) = rendered.first() else {
        return first_line(err);
    };
    let arg = find_arg(cmd, rendered);
    let name = display_name(cmd, rendered);
    let value = context_strings(err, ContextKind::InvalidValue)
        .into_iter()
        .next()
        .unwrap_or_default();
    let positional = arg.map(Arg::is_positional).unwrap_or(false);

    if value.is_empty() && positional {
        format!("argument {}: must not be empty", name)
    } else if value.is_empty() {
        format!("argument {}: expected one argument", name)
    } else if err.kind() == ErrorKind::ValueValidation {
        // Only numeric arguments carry a validating parser.
        format!("argument {}: invalid int value: '{}'", name, value)
    } else {
        format!("argument {}: invalid value: '{}'", name, value)
    }
}

fn context_strings(err: &clap::Error, kind: ContextKind) -> Vec<String> {
    match err.get(kind) {
        Some(ContextValue::String(value)) => vec![value.clone()],
        Some(ContextValue::Strings(values)) => values.clone(),
        _ => Vec::new(),
    }
}

fn find_arg<'a>(cmd: &'a Command, rendered: &str) -> Option<&'a Arg> {
    cmd.get_arguments().find(|arg| arg.to_string() == rendered)
}

/// `-i/--indent` for flags, bare `path` for positionals.
fn display_name(cmd: &Command, rendered: &str) -> String {
    let Some(arg) = find_arg(cmd, rendered) else {
        let flag = rendered.split_whitespace().next().unwrap_or(rendered);
        return flag.trim_matches(|c| c == '<' || c == '>').to_string();
    };
    if arg.is_positional() {
        return arg.get_id().to_string();
    }
    let mut names = Vec::new();
    if let Some(short) = arg.get_short() {
        names.push(format!("-{}", short));
    }
    if let Some(long) = arg.get_long() {
        names.push(format!("--{}", long));
    }
    names.join("/")
}

fn first_line(err: &clap::Error) -> String {
    let text = err.to_string();
    let line = text.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
