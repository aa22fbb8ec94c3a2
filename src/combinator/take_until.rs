use std::{fmt, iter::FusedIterator};

/// Yields items until the first one matching the predicate, which is
/// consumed but not yielded.
#[derive(Clone)]
pub struct TakeUntil<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> TakeUntil<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        TakeUntil {
            iter,
            predicate,
            done: false,
        }
    }
}

impl<I, P> Iterator for TakeUntil<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(item) if !(self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for TakeUntil<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I, P> fmt::Debug for TakeUntil<I, P>
where
    I: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeUntil")
            .field("iter", &self.iter)
            .field("done", &self.done)
            .finish()
    }
}
