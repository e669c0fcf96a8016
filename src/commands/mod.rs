/// Command dispatch: routes an `Action` to its implementation.
pub mod run;
pub mod usage;
pub mod version;

use std::io::Write;

use crate::errors::HailError;
use crate::types::Action;

/// Dispatch a parsed `Action`, writing its output to `out`.
///
/// # Errors
///
/// Returns `HailError::Io` if writing to `out` fails for a reason other than
/// a closed pipe.
pub fn dispatch<W: Write>(action: &Action, progname: &str, out: &mut W) -> Result<(), HailError> {
    match action {
        Action::Version => version::run(out),
        Action::Usage => usage::run(progname, out),
        Action::Run(config) => run::run(config, out),
    }
}
