use std::iter::{Fuse, FusedIterator};

/// Number of items an interleave yields when `first` supplies the next item,
/// given how many items each side has left. `None` means unbounded.
fn alternating_len(first: Option<usize>, second: Option<usize>) -> Option<usize> {
    match (first, second) {
        (Some(f), Some(s)) if f > s => s.checked_mul(2)?.checked_add(1),
        (Some(f), _) => f.checked_mul(2),
        (None, Some(s)) => s.checked_mul(2)?.checked_add(1),
        (None, None) => None,
    }
}

/// Alternates between two sequences, stopping at the first turn whose
/// sequence is exhausted.
#[derive(Clone, Debug)]
pub struct Interleave<A, B> {
    a: A,
    b: B,
    b_turn: bool,
    done: bool,
}

impl<A, B> Interleave<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Interleave {
            a,
            b,
            b_turn: false,
            done: false,
        }
    }
}

impl<A, B> Iterator for Interleave<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if self.done {
            return None;
        }
        let item = if self.b_turn {
            self.b.next()
        } else {
            self.a.next()
        };
        match item {
            Some(item) => {
                self.b_turn = !self.b_turn;
                Some(item)
            }
            None => {
                tracing::trace!(second = self.b_turn, "interleaved sequence exhausted");
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();
        let (lower, upper) = if self.b_turn {
            (
                alternating_len(Some(b_lower), Some(a_lower)),
                alternating_len(b_upper, a_upper),
            )
        } else {
            (
                alternating_len(Some(a_lower), Some(b_lower)),
                alternating_len(a_upper, b_upper),
            )
        };
        (lower.unwrap_or(usize::MAX), upper)
    }
}

impl<A, B> FusedIterator for Interleave<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
}

/// Alternates between two sequences while both have items, then drains
/// whichever one is left.
#[derive(Clone, Debug)]
pub struct InterleaveLongest<A, B> {
    a: Fuse<A>,
    b: Fuse<B>,
    b_turn: bool,
}

impl<A, B> InterleaveLongest<A, B>
where
    A: Iterator,
    B: Iterator,
{
    pub(crate) fn new(a: A, b: B) -> Self {
        InterleaveLongest {
            a: a.fuse(),
            b: b.fuse(),
            b_turn: false,
        }
    }
}

impl<A, B> Iterator for InterleaveLongest<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        let b_turn = self.b_turn;
        self.b_turn = !b_turn;
        if b_turn {
            self.b.next().or_else(|| self.a.next())
        } else {
            self.a.next().or_else(|| self.b.next())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();
        let upper = match (a_upper, b_upper) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (a_lower.saturating_add(b_lower), upper)
    }
}

impl<A, B> FusedIterator for InterleaveLongest<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
}
