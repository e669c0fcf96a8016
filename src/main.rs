#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! hailstone: print hailstone (Collatz) sequence values.

use std::ffi::OsString;
use std::io;

use hailstone::cli::{parse_action, program_name, write_error, write_usage};
use hailstone::commands;

/// Environment variable holding the `env_logger` filter.
const LOG_ENV: &str = "HAILSTONE_LOG";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();

    let argv: Vec<OsString> = std::env::args_os().collect();
    let progname = program_name(&argv);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = parse_action(&argv).and_then(|action| {
        log::debug!("action: {action:?}");
        commands::dispatch(&action, &progname, &mut out)
    });

    if let Err(err) = result {
        write_error(&progname, &err);
        if err.shows_usage() {
            if let Err(usage_err) = write_usage(&mut out, &progname) {
                log::debug!("could not write usage: {usage_err}");
            }
        }
        std::process::exit(err.exit_code());
    }
}
