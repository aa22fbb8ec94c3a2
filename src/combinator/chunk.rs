use std::iter::{Fuse, FusedIterator};

/// Groups consecutive items into `Vec`s of `size`. The last group is shorter
/// when the source runs out mid-group.
#[derive(Clone, Debug)]
pub struct Chunk<I> {
    iter: Fuse<I>,
    size: usize,
}

impl<I> Chunk<I>
where
    I: Iterator,
{
    // `size` is validated by the caller.
    pub(crate) fn new(iter: I, size: usize) -> Self {
        debug_assert!(size > 0);
        Chunk {
            iter: iter.fuse(),
            size,
        }
    }
}

impl<I> Iterator for Chunk<I>
where
    I: Iterator,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let group: Vec<_> = self.iter.by_ref().take(self.size).collect();
        if group.is_empty() {
            None
        } else {
            Some(group)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

impl<I> FusedIterator for Chunk<I> where I: Iterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_group_may_be_short() {
        let groups: Vec<_> = Chunk::new(1..=7, 3).collect();
        assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    }

    #[test]
    fn exact_multiple_has_no_empty_tail() {
        let mut groups = Chunk::new(1..=4, 2);
        assert_eq!(groups.size_hint(), (2, Some(2)));
        assert_eq!(groups.next(), Some(vec![1, 2]));
        assert_eq!(groups.next(), Some(vec![3, 4]));
        assert_eq!(groups.next(), None);
    }

    #[test]
    fn pulls_only_one_group_at_a_time() {
        let mut pulled = 0;
        let source = std::iter::repeat_with(|| {
            pulled += 1;
            pulled
        });
        let first = Chunk::new(source, 4).next();
        assert_eq!(first, Some(vec![1, 2, 3, 4]));
        assert_eq!(pulled, 4);
    }
}
