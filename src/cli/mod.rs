/// CLI layer: argument parsing and output formatting.
pub mod args;
pub mod output;

pub use args::parse_action;
pub use output::{program_name, write_error, write_usage};
