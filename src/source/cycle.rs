use std::{iter::FusedIterator, rc::Rc};

use crate::error::{Result, SeqError};

/// Repeats a fixed, non-empty collection forever.
///
/// The items are held behind an `Rc` and never mutated. Cloning a `Cycle`
/// shares the items but gives the clone its own cursor.
#[derive(Clone, Debug)]
pub struct Cycle<T> {
    items: Rc<[T]>,
    index: usize,
}

impl<T> Cycle<T> {
    pub(crate) fn new<I>(operation: &'static str, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Rc<[T]> = items.into_iter().collect();
        if items.is_empty() {
            return Err(SeqError::empty_collection(operation));
        }
        Ok(Cycle { items, index: 0 })
    }

    /// The number of items in one period of the cycle.
    pub fn period(&self) -> usize {
        self.items.len()
    }
}

impl<T> Iterator for Cycle<T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items[self.index].clone();
        self.index = (self.index + 1) % self.items.len();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> FusedIterator for Cycle<T> where T: Clone {}
