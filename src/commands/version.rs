/// `-V`: print the version triple.
use std::io::Write;

use crate::cli::output::write_version;
use crate::errors::HailError;

/// Run `hailstone -V`.
///
/// # Errors
///
/// Returns `HailError::Io` if the version line cannot be written.
pub fn run<W: Write>(out: &mut W) -> Result<(), HailError> {
    write_version(out)?;
    out.flush()?;
    Ok(())
}
