//! Sources of lazy sequences.
//!
//! Every call returns a fresh sequence with its own cursor. Sequences are
//! single-pass: to start over, call the source again.

mod cycle;
mod numeric;

use std::iter::FusedIterator;

use crate::{
    error::{Result, SeqError},
    integer::Integer,
};

pub use cycle::Cycle;
pub use numeric::{Fibonacci, Powers, Range, Squares};

/// Yields `1, 2, 3, ...` forever.
///
/// Items are plain `u64`s: the count cannot overflow in any realistic number
/// of pulls. The other numeric sources yield [`Integer`]; to mix the two,
/// map the count through `Integer::from`.
pub fn infinite_count() -> std::ops::RangeFrom<u64> {
    1..
}

/// Yields `start, start + step, ...` forever. `step` must be positive.
pub fn infinite_range(start: i64, step: i64) -> Result<Range> {
    if step <= 0 {
        return Err(SeqError::non_positive("infinite_range", "step"));
    }
    Ok(Range::new(Integer::from(start), Integer::from(step)))
}

/// Yields the items in order, then starts again from the first, forever.
pub fn infinite_repeating<I>(items: I) -> Result<Cycle<I::Item>>
where
    I: IntoIterator,
{
    Cycle::new("infinite_repeating", items)
}

pub fn infinite_fibonacci() -> Fibonacci {
    Fibonacci::new()
}

pub fn infinite_squares() -> Squares {
    Squares::new()
}

/// Yields `base`, `base^2`, `base^3`, ... forever, without overflowing.
pub fn infinite_powers(base: impl Into<Integer>) -> Powers<Integer> {
    Powers::new(base.into())
}

/// Yields `base`, `base^2`, `base^3`, ... forever for a fractional base.
/// `base` must be finite; later powers may still round to zero or infinity.
pub fn infinite_powers_f64(base: f64) -> Result<Powers<f64>> {
    if !base.is_finite() {
        return Err(SeqError::non_finite("infinite_powers_f64", "base"));
    }
    Ok(Powers::new(base))
}

/// Wraps an owned collection as a finite sequence.
pub fn from_items<I>(items: I) -> std::vec::IntoIter<I::Item>
where
    I: IntoIterator,
{
    items.into_iter().collect::<Vec<_>>().into_iter()
}

/// Yields the characters of `text`.
pub fn chars(text: impl Into<String>) -> Chars {
    Chars {
        text: text.into(),
        offset: 0,
    }
}

/// A finite sequence over the characters of an owned string.
#[derive(Clone, Debug)]
pub struct Chars {
    text: String,
    offset: usize,
}

impl Iterator for Chars {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.text[self.offset..].chars().next()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.offset;
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl FusedIterator for Chars {}
