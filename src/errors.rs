/// Errors surfaced by the hailstone CLI: option parsing and output.
use thiserror::Error;

/// Everything that can stop a run early.
#[derive(Debug, Error)]
pub enum HailError {
    /// An option that takes a value was given none.
    #[error("issue(0) with {option}\tOption needs a value.")]
    MissingValue {
        /// The flag character missing its value.
        option: char,
    },

    /// A flag character that is not recognized.
    #[error("issue(1) with {option}\tOption is unknown.")]
    UnknownOption {
        /// The offending flag character.
        option: char,
    },

    /// Writing to stdout failed for a reason other than a closed pipe.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl HailError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingValue { .. } | Self::UnknownOption { .. } | Self::Io(_) => 1,
        }
    }

    /// Whether the usage text should follow the diagnostic.
    #[must_use]
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::MissingValue { .. } | Self::UnknownOption { .. })
    }
}
