//! Composition of sequence transformers.
//!
//! A transformer is any function from one sequence to another. Stages with
//! differing item types compose statically through [`compose`] and the
//! [`pipe!`](crate::pipe) macro. Stages sharing one item type can also be
//! collected at runtime as boxed [`Transformer`]s and run by [`pipe`].

pub type BoxedSeq<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

pub type Transformer<'a, T> = Box<dyn Fn(BoxedSeq<'a, T>) -> BoxedSeq<'a, T> + 'a>;

pub fn boxed<'a, I>(seq: I) -> BoxedSeq<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
{
    Box::new(seq.into_iter())
}

/// Boxes a function as a pipeline stage.
pub fn stage<'a, T, F>(f: F) -> Transformer<'a, T>
where
    F: Fn(BoxedSeq<'a, T>) -> BoxedSeq<'a, T> + 'a,
{
    Box::new(f)
}

/// Returns `input => second(first(input))`.
pub fn compose<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Runs the stages left to right, each consuming the output of the one
/// before. No stages is the identity.
pub fn pipe<'a, T, S>(transformers: S) -> Transformer<'a, T>
where
    T: 'a,
    S: IntoIterator<Item = Transformer<'a, T>>,
{
    let transformers: Vec<_> = transformers.into_iter().collect();
    tracing::trace!(stages = transformers.len(), "built pipeline");
    Box::new(move |seq: BoxedSeq<'a, T>| {
        transformers
            .iter()
            .fold(seq, |seq, transformer| transformer(seq))
    })
}

/// Composes functions left to right: `pipe!(f, g, h)` is `x => h(g(f(x)))`.
///
/// ```
/// use lazy_seq::{combinator::filter, pipe, terminal::take};
///
/// let first_even_squares = pipe!(
///     |seq: std::ops::RangeFrom<u64>| seq.map(|n| n * n),
///     |seq| filter(seq, |n| n % 2 == 0),
///     |seq| take(seq, 3),
/// );
/// assert_eq!(first_even_squares(1..), [4, 16, 36]);
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        |input| input
    };
    ($stage:expr $(,)?) => {
        $stage
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!($crate::compose::compose($first, $second) $(, $rest)*)
    };
}
