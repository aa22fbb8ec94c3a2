use std::{iter::FusedIterator, ops::Mul};

use crate::integer::Integer;

macro_rules! unbounded {
    ($($name:ident),*) => {
        $(
            impl FusedIterator for $name {}
        )*
    };
}

unbounded!(Range, Squares, Fibonacci);

/// `start`, `start + step`, `start + 2 * step`, ...
#[derive(Clone, Debug)]
pub struct Range {
    next: Integer,
    step: Integer,
}

impl Range {
    pub(crate) fn new(start: Integer, step: Integer) -> Self {
        Range { next: start, step }
    }
}

impl Iterator for Range {
    type Item = Integer;

    fn next(&mut self) -> Option<Integer> {
        let following = &self.next + &self.step;
        Some(std::mem::replace(&mut self.next, following))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// `1, 4, 9, 16, ...`
#[derive(Clone, Debug)]
pub struct Squares {
    n: Integer,
}

impl Squares {
    pub(crate) fn new() -> Self {
        Squares {
            n: Integer::from(0),
        }
    }
}

impl Iterator for Squares {
    type Item = Integer;

    fn next(&mut self) -> Option<Integer> {
        self.n = &self.n + &Integer::from(1);
        Some(&self.n * &self.n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// `1, 1, 2, 3, 5, 8, ...`
#[derive(Clone, Debug)]
pub struct Fibonacci {
    current: Integer,
    next: Integer,
}

impl Fibonacci {
    pub(crate) fn new() -> Self {
        Fibonacci {
            current: Integer::from(1),
            next: Integer::from(1),
        }
    }
}

impl Iterator for Fibonacci {
    type Item = Integer;

    fn next(&mut self) -> Option<Integer> {
        let following = &self.current + &self.next;
        let next = std::mem::replace(&mut self.next, following);
        Some(std::mem::replace(&mut self.current, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// `base, base^2, base^3, ...`
#[derive(Clone, Debug)]
pub struct Powers<T> {
    base: T,
    current: T,
}

impl<T> Powers<T>
where
    T: Clone,
{
    pub(crate) fn new(base: T) -> Self {
        Powers {
            current: base.clone(),
            base,
        }
    }
}

impl<T> Iterator for Powers<T>
where
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let following = &self.current * &self.base;
        Some(std::mem::replace(&mut self.current, following))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> FusedIterator for Powers<T> where for<'a> &'a T: Mul<&'a T, Output = T> {}
