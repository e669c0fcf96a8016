/// Sequence domain layer: step functions and iteration.
pub mod step;

pub use step::{Direction, Hailstone, generate_sequence, hail, unhail};
