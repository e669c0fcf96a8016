//! Hailstone step functions and the iterator built on them.
//!
//! Arithmetic is 32-bit and wraps on overflow. Oddness is tested on the low
//! bit, so negative odd values take the odd branch as well.

/// Next term of the hailstone sequence: `3v + 1` when odd, `v / 2` when even.
#[must_use]
pub fn hail(value: i32) -> i32 {
    if value & 1 == 1 {
        value.wrapping_mul(3).wrapping_add(1)
    } else {
        value / 2
    }
}

/// Previous term, mirroring the branches of [`hail`]: `2v` when odd,
/// `(v - 1) / 3` when even.
///
/// The even branch truncates without checking that `v - 1` is divisible by
/// three, so this is not a true inverse for every input.
#[must_use]
pub fn unhail(value: i32) -> i32 {
    if value & 1 == 1 {
        value.wrapping_mul(2)
    } else {
        value.wrapping_sub(1) / 3
    }
}

/// Which way to walk the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Apply [`hail`].
    Forward,
    /// Apply [`unhail`].
    Backward,
}

impl Direction {
    /// Direction selected by a signed step counter: positive walks forward,
    /// anything else walks backward.
    #[must_use]
    pub fn from_counter(counter: i32) -> Self {
        if counter > 0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// Apply one step in this direction.
    #[must_use]
    pub fn step(self, value: i32) -> i32 {
        match self {
            Self::Forward => hail(value),
            Self::Backward => unhail(value),
        }
    }
}

/// Endless walk over the sequence. The starting value itself is not yielded.
#[derive(Debug, Clone)]
pub struct Hailstone {
    value: i32,
    direction: Direction,
}

impl Hailstone {
    #[must_use]
    pub fn new(start: i32, direction: Direction) -> Self {
        Self {
            value: start,
            direction,
        }
    }
}

impl Iterator for Hailstone {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.value = self.direction.step(self.value);
        Some(self.value)
    }
}

/// The first `count` terms after `start`, walking forward.
///
/// # Examples
///
/// ```
/// use hailstone::generate_sequence;
///
/// assert_eq!(generate_sequence(3, 5), vec![10, 5, 16, 8, 4]);
/// assert!(generate_sequence(3, 0).is_empty());
/// ```
#[must_use]
pub fn generate_sequence(start: i32, count: usize) -> Vec<i32> {
    Hailstone::new(start, Direction::Forward).take(count).collect()
}
