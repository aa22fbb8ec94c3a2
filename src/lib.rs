//! Lazy, pull-based sequences.
//!
//! A sequence is any [`Iterator`]. The [`source`] module creates them, the
//! [`combinator`] and [`merge`] modules wrap them without evaluating
//! anything, [`compose`] glues transformers together, and [`terminal`]
//! drives them into collections. Every sequence is single-pass and owned by
//! one consumer at a time.

pub mod combinator;
pub mod compose;
mod error;
mod integer;
pub mod merge;
mod sequence;
pub mod source;
pub mod terminal;

pub use error::{Result, SeqError};
pub use integer::Integer;
pub use sequence::Sequence;

#[cfg(test)]
mod tests {
    use crate::{source, terminal};

    #[test]
    fn basic_pipeline() {
        let fib = terminal::take(source::infinite_fibonacci(), 6);
        assert_eq!(fib, [1, 1, 2, 3, 5, 8]);
    }
}
