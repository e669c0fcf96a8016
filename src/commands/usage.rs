/// `-h`: print usage.
use std::io::Write;

use crate::cli::output::write_usage;
use crate::errors::HailError;

/// Run `hailstone -h`.
///
/// # Errors
///
/// Returns `HailError::Io` if the usage text cannot be written.
pub fn run<W: Write>(progname: &str, out: &mut W) -> Result<(), HailError> {
    write_usage(out, progname)?;
    out.flush()?;
    Ok(())
}
