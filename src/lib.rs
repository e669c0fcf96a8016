#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! hailstone: the hailstone (Collatz) sequence engine and the CLI built on it.
//!
//! ```
//! use hailstone::{Direction, Hailstone, hail, unhail};
//!
//! assert_eq!(hail(3), 10);
//! assert_eq!(unhail(4), 1);
//! let walk: Vec<i32> = Hailstone::new(3, Direction::Forward).take(3).collect();
//! assert_eq!(walk, vec![10, 5, 16]);
//! ```

pub mod cli;
pub mod commands;
pub mod errors;
pub mod sequence;
pub mod types;

pub use errors::HailError;
pub use sequence::{Direction, Hailstone, generate_sequence, hail, unhail};
