/// Shared types passed from the CLI layer to the commands.
use crate::sequence::Direction;

/// Parsed options for a sequence run. Built once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Print a bar of `*` after each value.
    pub verbose: bool,
    /// Value the walk starts from (not printed itself).
    pub start: i32,
    /// Signed step count: sign picks the direction, magnitude the steps per pass.
    pub counter: i32,
    /// Repeat the batch until the process is interrupted.
    pub looping: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            start: 1,
            counter: 1,
            looping: false,
        }
    }
}

impl RunConfig {
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::from_counter(self.counter)
    }

    /// Steps taken per pass of the outer loop.
    #[must_use]
    pub fn steps_per_pass(&self) -> u32 {
        self.counter.unsigned_abs()
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the version triple.
    Version,
    /// Print usage.
    Usage,
    /// Walk the sequence.
    Run(RunConfig),
}

/// Package version, split the way `-V` prints it.
pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");
pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");
pub const VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");
