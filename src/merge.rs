//! Combinators over several sequences.

mod chain;
mod interleave;

pub use chain::Chain;
pub use interleave::{Interleave, InterleaveLongest};

/// Yields one item from `seq1`, then one from `seq2`, and so on. Stops as
/// soon as the sequence whose turn it is has nothing left, so with unequal
/// lengths the longer sequence's tail is never pulled.
pub fn interleave<A, B>(seq1: A, seq2: B) -> Interleave<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    Interleave::new(seq1.into_iter(), seq2.into_iter())
}

/// Like [`interleave`], but once either sequence runs out the rest of the
/// other is yielded.
pub fn interleave_longest<A, B>(seq1: A, seq2: B) -> InterleaveLongest<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    InterleaveLongest::new(seq1.into_iter(), seq2.into_iter())
}

/// Yields all of the first sequence, then all of the second, and so on.
/// Empty sequences contribute nothing.
pub fn chain<S>(sequences: S) -> Chain<S::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Chain::new(sequences.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        source::{infinite_count, infinite_repeating, infinite_squares},
        Integer,
    };

    #[test]
    fn interleave_with_unbounded_sources() {
        let evens = infinite_count().map(|n| n * 2);
        let odds = infinite_count().map(|n| n * 2 - 1);
        let items: Vec<_> = interleave(odds, evens).take(6).collect();
        assert_eq!(items, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn interleave_finite_with_unbounded_stops_at_finite() {
        let labels = infinite_repeating(["x"]).unwrap();
        let items: Vec<_> = interleave(["a", "b"], labels).collect();
        assert_eq!(items, ["a", "x", "b", "x"]);
    }

    #[test]
    fn interleave_count_with_squares() {
        let items: Vec<_> = interleave(infinite_count().map(Integer::from), infinite_squares())
            .take(6)
            .collect();
        assert_eq!(items, [1, 1, 2, 4, 3, 9]);
    }

    #[test]
    fn interleave_longest_keeps_going() {
        let items: Vec<_> = interleave_longest([1], [10, 20, 30]).collect();
        assert_eq!(items, [1, 10, 20, 30]);
    }

    #[test]
    fn chain_reaches_an_unbounded_tail() {
        let sequences: Vec<Box<dyn Iterator<Item = u64>>> = vec![
            Box::new([7, 8].into_iter()),
            Box::new(std::iter::empty()),
            Box::new(infinite_count()),
        ];
        let items: Vec<_> = chain(sequences).take(5).collect();
        assert_eq!(items, [7, 8, 1, 2, 3]);
    }
}
