//! Small iterator helpers, independent of the chunking engine.

use std::iter::{self, Chain, Once, Repeat, Take};
use std::option;

/// Return the first element of `iter` together with an iterator that yields
/// the full sequence, including that element.
///
/// Returns `None` if the iterator is already exhausted. The element is
/// cloned so that it can be both inspected and replayed.
///
/// ```
/// let (first, rest) = even_chunks::peek(1..4).unwrap();
/// assert_eq!(first, 1);
/// assert_eq!(rest.collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn peek<I>(mut iter: I) -> Option<(I::Item, Chain<Once<I::Item>, I>)>
where
    I: Iterator,
    I::Item: Clone,
{
    let first = iter.next()?;
    Some((first.clone(), iter::once(first).chain(iter)))
}

/// Check whether `iterable` is empty without losing any of its elements.
///
/// Returns an iterator over the full sequence along with the emptiness flag.
/// Unlike [`peek`] this does not clone: the probed element is chained back
/// by value.
pub fn probe_empty<I>(iterable: I) -> (Chain<option::IntoIter<I::Item>, I::IntoIter>, bool)
where
    I: IntoIterator,
{
    let mut iter = iterable.into_iter();
    let first = iter.next();
    let is_empty = first.is_none();
    (first.into_iter().chain(iter), is_empty)
}

/// Yield exactly `n` items: the elements of `iterable`, padded with clones
/// of `fill` if there are fewer than `n`, or truncated if there are more.
pub fn pad_tail<I>(n: usize, fill: I::Item, iterable: I) -> Take<Chain<I::IntoIter, Repeat<I::Item>>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    iterable.into_iter().chain(iter::repeat(fill)).take(n)
}

/// Pair up functions and values positionally and apply each pair, lazily.
///
/// The result has the length of the shorter input.
pub fn zip_apply<F, T, U, FI, VI>(fns: FI, vals: VI) -> impl Iterator<Item = U>
where
    FI: IntoIterator<Item = F>,
    VI: IntoIterator<Item = T>,
    F: FnMut(T) -> U,
{
    fns.into_iter().zip(vals).map(|(mut f, v)| f(v))
}

#[cfg(test)]
mod tests {
    use super::{pad_tail, peek, probe_empty, zip_apply};

    #[test]
    fn test_peek() {
        let (first, rest) = peek("abc".chars()).unwrap();
        assert_eq!(first, 'a');
        assert_eq!(rest.collect::<String>(), "abc");

        assert!(peek(std::iter::empty::<u8>()).is_none());

        // Peeking consumes only one element from the source.
        let mut iter = 0..5;
        let (first, restored) = peek(iter.by_ref()).unwrap();
        assert_eq!(first, 0);
        assert_eq!(restored.count(), 5);
    }

    #[test]
    fn test_probe_empty() {
        let (iter, is_empty) = probe_empty(Vec::<i32>::new());
        assert!(is_empty);
        assert_eq!(iter.count(), 0);

        let (iter, is_empty) = probe_empty(vec![1, 2, 3]);
        assert!(!is_empty);
        assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 3]);

        // Works with non-Clone items.
        let boxes = vec![Box::new(1), Box::new(2)];
        let (iter, is_empty) = probe_empty(boxes);
        assert!(!is_empty);
        assert_eq!(iter.count(), 2);
    }

    #[test]
    fn test_pad_tail() {
        let padded: Vec<i32> = pad_tail(5, -1, vec![1, 2, 3]).collect();
        assert_eq!(padded, [1, 2, 3, -1, -1]);

        let truncated: Vec<i32> = pad_tail(2, -1, vec![1, 2, 3]).collect();
        assert_eq!(truncated, [1, 2]);

        let exact: Vec<i32> = pad_tail(3, -1, vec![1, 2, 3]).collect();
        assert_eq!(exact, [1, 2, 3]);

        let all_fill: Vec<&str> = pad_tail(3, "pad", Vec::new()).collect();
        assert_eq!(all_fill, ["pad", "pad", "pad"]);
    }

    #[test]
    fn test_zip_apply() {
        let fns: Vec<Box<dyn FnMut(i32) -> i32>> =
            vec![Box::new(|x| x + 1), Box::new(|x| x * 2), Box::new(|x| -x)];
        let results: Vec<i32> = zip_apply(fns, [10, 10, 10]).collect();
        assert_eq!(results, [11, 20, -10]);

        // Length of the shorter input wins.
        let doublers = (0..3).map(|_| |x: i32| x * 2);
        assert_eq!(zip_apply(doublers, 0..10).count(), 3);
    }
}
