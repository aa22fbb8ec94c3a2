use std::iter::FusedIterator;

/// Skips `gap` items before each yielded item.
#[derive(Clone, Debug)]
pub struct TakeEvery<I> {
    iter: I,
    gap: usize,
}

impl<I> TakeEvery<I> {
    pub(crate) fn new(iter: I, gap: usize) -> Self {
        TakeEvery { iter, gap }
    }
}

impl<I> Iterator for TakeEvery<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.nth(self.gap)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let stride = self.gap + 1;
        (lower / stride, upper.map(|upper| upper / stride))
    }
}

impl<I> FusedIterator for TakeEvery<I> where I: FusedIterator {}
