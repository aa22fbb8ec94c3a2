use std::iter::{Fuse, FusedIterator};

/// Yields every item of each sequence in turn, in the order the sequences
/// are supplied.
pub struct Chain<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    sequences: Fuse<O>,
    current: Option<<O::Item as IntoIterator>::IntoIter>,
    position: usize,
}

impl<O> Chain<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    pub(crate) fn new(sequences: O) -> Self {
        Chain {
            sequences: sequences.fuse(),
            current: None,
            position: 0,
        }
    }
}

impl<O> Iterator for Chain<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    type Item = <O::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = &mut self.current {
                if let Some(item) = current.next() {
                    return Some(item);
                }
                tracing::trace!(position = self.position, "chained sequence exhausted");
                self.current = None;
                self.position += 1;
            }
            self.current = Some(self.sequences.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self
            .current
            .as_ref()
            .map_or((0, Some(0)), |current| current.size_hint());
        match self.sequences.size_hint() {
            (0, Some(0)) => (lower, upper),
            _ => (lower, None),
        }
    }
}

impl<O> FusedIterator for Chain<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
}
