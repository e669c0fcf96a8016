/// Output formatting: step lines, usage, version, diagnostics.
use std::ffi::OsString;
use std::io::{self, Write};

use crate::errors::HailError;
use crate::types::{VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH};

const DESCRIPTION: &str = "Print hailstone sequence values.";
const FALLBACK_NAME: &str = "hailstone";

/// Program name as invoked (argv[0]), for usage and diagnostics.
#[must_use]
pub fn program_name(argv: &[OsString]) -> String {
    argv.first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_owned())
}

// --- Run output ---

/// Write the header line that precedes the steps.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_counter<W: Write>(out: &mut W, counter: i32) -> io::Result<()> {
    writeln!(out, "counter: {counter}")
}

/// Write one step: the value padded to two digits, then a tab and a bar of
/// `*` when verbose. Negative values get an empty bar.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_step<W: Write>(out: &mut W, value: i32, verbose: bool) -> io::Result<()> {
    write!(out, "{value:02}")?;
    if verbose {
        write!(out, "\t{}", bar(value))?;
    }
    writeln!(out)
}

fn bar(value: i32) -> String {
    let len = usize::try_from(value).unwrap_or(0);
    "*".repeat(len)
}

// --- Usage / version ---

/// Write the usage text.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_usage<W: Write>(out: &mut W, progname: &str) -> io::Result<()> {
    writeln!(out, "usage:\t{progname} [-h] [-l] [-n <int>] [-s <int>] [-v] [-V]")?;
    writeln!(out, "description: {DESCRIPTION}")
}

/// Write the version triple.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "version:\t{VERSION_MAJOR}.{VERSION_MINOR}.{VERSION_PATCH}")
}

// --- Error output ---

/// Write a diagnostic to stderr, prefixed with the program name.
pub fn write_error(progname: &str, err: &HailError) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "{progname}: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write to Vec");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn test_step_is_zero_padded() {
        assert_eq!(render(|o| write_step(o, 4, false)), "04\n");
        assert_eq!(render(|o| write_step(o, 22, false)), "22\n");
        assert_eq!(render(|o| write_step(o, 160, false)), "160\n");
        assert_eq!(render(|o| write_step(o, 0, false)), "00\n");
    }

    #[test]
    fn test_negative_step() {
        assert_eq!(render(|o| write_step(o, -2, false)), "-2\n");
        assert_eq!(render(|o| write_step(o, -14, false)), "-14\n");
    }

    #[test]
    fn test_verbose_bar() {
        assert_eq!(render(|o| write_step(o, 4, true)), "04\t****\n");
        assert_eq!(render(|o| write_step(o, 0, true)), "00\t\n");
    }

    #[test]
    fn test_verbose_negative_bar_is_empty() {
        assert_eq!(render(|o| write_step(o, -2, true)), "-2\t\n");
    }

    #[test]
    fn test_counter_header_keeps_sign() {
        assert_eq!(render(|o| write_counter(o, -3)), "counter: -3\n");
    }

    #[test]
    fn test_usage() {
        assert_eq!(
            render(|o| write_usage(o, "./hailstone")),
            "usage:\t./hailstone [-h] [-l] [-n <int>] [-s <int>] [-v] [-V]\n\
             description: Print hailstone sequence values.\n"
        );
    }

    #[test]
    fn test_version() {
        assert_eq!(render(write_version::<Vec<u8>>), "version:\t0.0.1\n");
    }

    #[test]
    fn test_program_name() {
        assert_eq!(program_name(&[OsString::from("/usr/bin/hs")]), "/usr/bin/hs");
        assert_eq!(program_name(&[]), "hailstone");
        assert_eq!(program_name(&[OsString::new()]), "hailstone");
    }
}
