//! qtuidocmake binary

use qtuidocmake::cli::{self, logging};
use qtuidocmake::{Driver, DriverError, LogConfig, NAME};
use std::error::Error;
use std::process;

fn main() {
    let options = cli::parse_env();

    let log_config = LogConfig::from_options(&options);
    logging::init(&log_config);

    let debug = options.debug;
    match Driver::new(options).run() {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            report(&e, debug);
            process::exit(e.exit_code());
        }
    }
}

fn report(e: &DriverError, debug: bool) {
    if !debug {
        eprintln!("{}: error: {}", NAME, e);
        return;
    }

    eprintln!("{}: error: {:#?}", NAME, e);
    let mut source = e.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}
