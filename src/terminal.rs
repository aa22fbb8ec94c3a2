//! Consumers that drive a sequence, and the unbounded repetition helpers.

mod take_every;

use crate::{
    error::{Result, SeqError},
    source::Cycle,
};

pub use take_every::TakeEvery;

/// Collects up to `n` items. A shorter source gives a shorter result.
pub fn take<I>(seq: I, n: usize) -> Vec<I::Item>
where
    I: IntoIterator,
{
    seq.into_iter().take(n).collect()
}

/// Collects items while `predicate` holds. The first failing item is
/// consumed and dropped. On an unbounded source the predicate must
/// eventually fail.
pub fn take_while<I, P>(seq: I, predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    seq.into_iter().take_while(predicate).collect()
}

/// Discards `n` items and collects the rest. The source must be finite.
pub fn skip<I>(seq: I, n: usize) -> Vec<I::Item>
where
    I: IntoIterator,
{
    seq.into_iter().skip(n).collect()
}

/// Repeats the items forever. Shares its implementation with
/// [`infinite_repeating`](crate::source::infinite_repeating).
pub fn cycle<I>(items: I) -> Result<Cycle<I::Item>>
where
    I: IntoIterator,
{
    Cycle::new("cycle", items)
}

/// Yields every `n`th item: `n - 1` items are skipped before each yield.
///
/// The first item is never yielded. For `n = 1` one item is still skipped
/// before each yield, so `1` and `2` produce the same cadence.
pub fn take_every<I>(seq: I, n: usize) -> Result<TakeEvery<I::IntoIter>>
where
    I: IntoIterator,
{
    if n == 0 {
        return Err(SeqError::non_positive("take_every", "n"));
    }
    Ok(TakeEvery::new(seq.into_iter(), (n - 1).max(1)))
}
