/// CLI argument definitions via clap derive.
///
/// clap's own `--help`/`--version` handling is switched off: `-h` and `-V`
/// are caught by a left-to-right pass over argv before clap runs, and clap
/// errors are folded into the two option-parsing variants of [`HailError`].
use std::convert::Infallible;
use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, FromArgMatches, Parser};

use crate::errors::HailError;
use crate::types::{Action, RunConfig};

/// Command-line arguments for `hailstone`.
#[derive(Debug, Parser)]
#[command(
    name = "hailstone",
    about = "Print hailstone sequence values.",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Print the version and exit.
    #[arg(short = 'V')]
    pub version: bool,

    /// Print usage and exit.
    #[arg(short = 'h')]
    pub help: bool,

    /// Steps per pass. Negative walks the sequence backwards.
    #[arg(
        short = 'n',
        value_name = "int",
        default_value = "1",
        allow_hyphen_values = true,
        value_parser = parse_lenient_int
    )]
    pub counter: i32,

    /// Repeat until interrupted.
    #[arg(short = 'l')]
    pub looping: bool,

    /// Starting value.
    #[arg(
        short = 's',
        value_name = "int",
        default_value = "1",
        allow_hyphen_values = true,
        value_parser = parse_lenient_int
    )]
    pub start: i32,

    /// Draw a bar of `*` next to each value.
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Operands after the options; accepted and ignored.
    #[arg(hide = true)]
    pub operands: Vec<String>,
}

impl Cli {
    /// Resolve parsed flags into the single thing to do.
    #[must_use]
    pub fn action(&self) -> Action {
        if self.version {
            Action::Version
        } else if self.help {
            Action::Usage
        } else {
            Action::Run(RunConfig {
                verbose: self.verbose,
                start: self.start,
                counter: self.counter,
                looping: self.looping,
            })
        }
    }
}

/// Parse a full argv (program name first) into an [`Action`].
///
/// Options are honored left to right: `-V` or `-h` ends parsing as soon as it
/// is reached, so nothing after it can fail.
///
/// # Errors
///
/// Returns `HailError::MissingValue` when `-n`/`-s` has no value and
/// `HailError::UnknownOption` for anything else clap rejects.
pub fn parse_action<I, T>(argv: I) -> Result<Action, HailError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = match prescan(argv.into_iter().map(Into::into)) {
        Prescan::Exit(action) => return Ok(action),
        Prescan::Parse(argv) => argv,
    };
    let matches = Cli::command()
        .try_get_matches_from(argv)
        .map_err(from_clap_error)?;
    let cli = Cli::from_arg_matches(&matches).map_err(from_clap_error)?;
    if !cli.operands.is_empty() {
        log::debug!("ignoring operands: {:?}", cli.operands);
    }
    Ok(cli.action())
}

/// Outcome of walking argv in option order before clap sees it.
#[derive(Debug, PartialEq, Eq)]
enum Prescan {
    /// `-V` or `-h` was reached before any invalid option.
    Exit(Action),
    /// Hand this argv to clap.
    Parse(Vec<OsString>),
}

/// Walk short-option clusters left to right. Stops at the first `-V`/`-h`.
///
/// A value attached with `=` (`-n=5`) is split into its own argument so the
/// `=` stays part of the value, as getopt leaves it; clap would strip it.
/// Parsing stops at the first unknown flag or `--` and the rest is passed
/// through for clap to handle.
fn prescan(argv: impl IntoIterator<Item = OsString>) -> Prescan {
    let mut args = argv.into_iter();
    let mut out: Vec<OsString> = args.next().into_iter().collect();

    'args: while let Some(arg) = args.next() {
        let Some(cluster) = arg
            .to_str()
            .and_then(|text| text.strip_prefix('-'))
            .filter(|rest| !rest.is_empty())
        else {
            out.push(arg);
            continue;
        };

        for (i, flag) in cluster.char_indices() {
            match flag {
                'V' => return Prescan::Exit(Action::Version),
                'h' => return Prescan::Exit(Action::Usage),
                'l' | 'v' => {}
                'n' | 's' => {
                    let (head, attached) = cluster.split_at(i + flag.len_utf8());
                    if attached.is_empty() {
                        // Value is the next argument, whatever it looks like.
                        out.push(arg.clone());
                        out.extend(args.next());
                    } else if attached.starts_with('=') {
                        out.push(format!("-{head}").into());
                        out.push(attached.into());
                    } else {
                        out.push(arg.clone());
                    }
                    continue 'args;
                }
                _ => {
                    out.push(arg.clone());
                    out.extend(args.by_ref());
                    break 'args;
                }
            }
        }
        out.push(arg);
    }
    Prescan::Parse(out)
}

/// `atoi`-style conversion: skip leading whitespace, read an optional sign and
/// as many digits as follow. Anything unparseable yields 0. Wraps at 32 bits.
///
/// # Errors
///
/// Never fails; the `Result` is the shape clap's value parsers take.
#[allow(clippy::unnecessary_wraps)]
pub fn parse_lenient_int(raw: &str) -> Result<i32, Infallible> {
    let trimmed = raw.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i32, |acc, d| acc.wrapping_mul(10).wrapping_add(i32::from(d - b'0')));
    Ok(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

fn from_clap_error(err: clap::Error) -> HailError {
    let option = offending_option(&err);
    log::debug!("clap rejected arguments ({:?}): {err}", err.kind());
    match err.kind() {
        ErrorKind::InvalidValue | ErrorKind::NoEquals => HailError::MissingValue { option },
        _ => HailError::UnknownOption { option },
    }
}

/// First flag character of the argument clap complained about, e.g. `x` for
/// `-x` or `n` for `-n <int>`.
fn offending_option(err: &clap::Error) -> char {
    let arg = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.as_str(),
        _ => "",
    };
    arg.trim_start_matches('-').chars().next().unwrap_or('?')
}
