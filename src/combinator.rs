//! Combinators over a single sequence.
//!
//! Each combinator is lazy: it pulls from its source only when its own
//! next item is requested, so all of them are safe on unbounded sources.

mod chunk;
mod take_until;

use crate::error::{Result, SeqError};

pub use chunk::Chunk;
pub use take_until::TakeUntil;

pub fn map<I, F, B>(seq: I, f: F) -> std::iter::Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    seq.into_iter().map(f)
}

pub fn filter<I, P>(seq: I, predicate: P) -> std::iter::Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    seq.into_iter().filter(predicate)
}

/// Yields every item of `f(item)` for each source item, fully draining one
/// inner sequence before pulling the next source item.
pub fn flat_map<I, F, U>(seq: I, f: F) -> std::iter::FlatMap<I::IntoIter, U, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    seq.into_iter().flat_map(f)
}

/// Yields items up to, but not including, the first item matching
/// `predicate`. Without a match this is the whole source.
pub fn take_until<I, P>(seq: I, predicate: P) -> TakeUntil<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    TakeUntil::new(seq.into_iter(), predicate)
}

/// Drops the leading items matching `predicate`, then yields everything
/// after, including later items that match.
pub fn drop_while<I, P>(seq: I, predicate: P) -> std::iter::SkipWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    seq.into_iter().skip_while(predicate)
}

pub fn chunk<I>(seq: I, size: usize) -> Result<Chunk<I::IntoIter>>
where
    I: IntoIterator,
{
    if size == 0 {
        return Err(SeqError::non_positive("chunk", "size"));
    }
    Ok(Chunk::new(seq.into_iter(), size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{chars, infinite_count};

    #[test]
    fn map_keeps_cardinality() {
        let doubled: Vec<_> = map([1, 2, 3], |x| x * 2).collect();
        assert_eq!(doubled, [2, 4, 6]);
    }

    #[test]
    fn map_is_lazy_on_unbounded_sources() {
        let labels: Vec<_> = map(infinite_count(), |n| format!("#{n}")).take(2).collect();
        assert_eq!(labels, ["#1", "#2"]);
    }

    #[test]
    fn filter_preserves_order() {
        let evens: Vec<_> = filter(infinite_count(), |n| n % 2 == 0).take(3).collect();
        assert_eq!(evens, [2, 4, 6]);
    }

    #[test]
    fn flat_map_drains_each_inner_sequence() {
        let items: Vec<_> = flat_map([1, 2, 3], |n| std::iter::repeat(n).take(n)).collect();
        assert_eq!(items, [1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn flat_map_skips_empty_inner_sequences() {
        let items: Vec<_> = flat_map(["", "ab", "", "c"], chars).collect();
        assert_eq!(items, ['a', 'b', 'c']);
    }

    #[test]
    fn take_until_bounds_an_unbounded_source() {
        let items: Vec<_> = take_until(infinite_count(), |n| n * n > 20).collect();
        assert_eq!(items, [1, 2, 3, 4]);
    }

    #[test]
    fn drop_while_only_drops_the_prefix() {
        let items: Vec<_> = drop_while([1, 2, 5, 1, 6], |x| *x < 3).collect();
        assert_eq!(items, [5, 1, 6]);
    }

    #[test]
    fn drop_while_can_drop_everything() {
        assert_eq!(drop_while([1, 2], |_| true).next(), None);
    }

    #[test]
    fn chunk_larger_than_source_is_one_group() {
        let groups: Vec<_> = chunk(['a', 'b'], 5).unwrap().collect();
        assert_eq!(groups, vec![vec!['a', 'b']]);
    }

    #[test]
    fn chunk_of_empty_source_is_empty() {
        assert_eq!(chunk(Vec::<i32>::new(), 2).unwrap().next(), None);
    }

    #[test]
    fn chunk_rejects_zero_size() {
        let err = chunk([1, 2, 3], 0).unwrap_err();
        assert_eq!(
            err,
            SeqError::NonPositive {
                operation: "chunk",
                parameter: "size"
            }
        );
    }
}
