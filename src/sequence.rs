use crate::{
    combinator::{self, Chunk, TakeUntil},
    error::Result,
    merge::{self, Interleave, InterleaveLongest},
    terminal::{self, TakeEvery},
};

/// Method-call forms of the combinators that `Iterator` lacks.
///
/// Implemented for every iterator, so any lazy sequence can be chained as
/// `source.take_until(..).chunk(..)`. Names never collide with `Iterator`'s
/// own adaptors; for those, use the std methods directly.
pub trait Sequence: Iterator + Sized {
    fn take_until<P>(self, predicate: P) -> TakeUntil<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        combinator::take_until(self, predicate)
    }

    fn chunk(self, size: usize) -> Result<Chunk<Self>> {
        combinator::chunk(self, size)
    }

    fn interleave<B>(self, other: B) -> Interleave<Self, B::IntoIter>
    where
        B: IntoIterator<Item = Self::Item>,
    {
        merge::interleave(self, other)
    }

    fn interleave_longest<B>(self, other: B) -> InterleaveLongest<Self, B::IntoIter>
    where
        B: IntoIterator<Item = Self::Item>,
    {
        merge::interleave_longest(self, other)
    }

    fn take_every(self, n: usize) -> Result<TakeEvery<Self>> {
        terminal::take_every(self, n)
    }

    fn take_vec(self, n: usize) -> Vec<Self::Item> {
        terminal::take(self, n)
    }
}

impl<I> Sequence for I where I: Iterator {}
