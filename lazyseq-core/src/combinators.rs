use std::rc::Rc;

use crate::iter::FlatMapIter;
use crate::lazy::Lazy;

// Each combinator captures the source producer, never the source cache, and
// builds a fresh source cursor every time its own producer is invoked. None
// of them pull anything until the result is consumed.
impl<'a, T: 'a> Lazy<'a, T> {
    /// Apply `f` to every item.
    pub fn map<U, F>(&self, f: F) -> Lazy<'a, U>
    where
        U: 'a,
        F: Fn(T) -> U + 'a,
    {
        let source = self.producer();
        let f = Rc::new(f);
        Lazy::new(move || {
            let f = f.clone();
            source.cursor().map(move |item| f(item))
        })
    }

    /// Keep only the items for which `predicate` holds.
    ///
    /// Producing one item may pull arbitrarily many source items.
    pub fn filter<F>(&self, predicate: F) -> Lazy<'a, T>
    where
        F: Fn(&T) -> bool + 'a,
    {
        let source = self.producer();
        let predicate = Rc::new(predicate);
        Lazy::new(move || {
            let predicate = predicate.clone();
            source.cursor().filter(move |item| predicate(item))
        })
    }

    /// At most the first `n` items.
    ///
    /// The source is never pulled past its `n`th item.
    pub fn take(&self, n: usize) -> Lazy<'a, T> {
        let source = self.producer();
        Lazy::new(move || source.cursor().take(n))
    }

    /// Replace every item with the whole sequence `f` builds from it.
    ///
    /// Each inner sequence is drained before the next source item is pulled.
    pub fn flat_map<U, F>(&self, f: F) -> Lazy<'a, U>
    where
        U: 'a,
        F: Fn(T) -> Lazy<'a, U> + 'a,
    {
        let source = self.producer();
        let f = Rc::new(f);
        Lazy::new(move || FlatMapIter::new(source.cursor(), f.clone()))
    }

    /// Pair items from both sequences in lockstep, stopping at the shorter.
    pub fn zip<U: 'a>(&self, other: &Lazy<'a, U>) -> Lazy<'a, (T, U)> {
        let left = self.producer();
        let right = other.producer();
        Lazy::new(move || left.cursor().zip(right.cursor()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use insta::assert_debug_snapshot;

    use crate::creation::{range, repeat};

    use super::*;

    fn counted(pulls: &Cell<usize>) -> Lazy<'_, u32> {
        Lazy::new(move || (0u32..).inspect(move |_| pulls.set(pulls.get() + 1)))
    }

    #[test]
    fn test_combinators_pull_nothing_until_consumed() {
        let pulls = Cell::new(0);
        let seq = counted(&pulls);
        let chained = seq
            .map(|x| x * 2)
            .filter(|x| x % 3 == 0)
            .take(4)
            .flat_map(|x| repeat(x, Some(2)))
            .zip(&seq);
        assert_eq!(pulls.get(), 0);
        assert_eq!(chained.first(), Some((0, 0)));
        assert!(pulls.get() > 0);
    }

    #[test]
    fn test_map() {
        let seq = range(0, None, 1).unwrap().take(5).map(|x| x * 2);
        assert_eq!(seq.to_vec(), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_map_pulls_one_per_item() {
        let pulls = Cell::new(0);
        let seq = counted(&pulls).map(|x| x + 1);
        assert_eq!(seq.iter().take(3).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_map_changes_type() {
        let seq = range(1, Some(4), 1).unwrap().map(|x: i32| x.to_string());
        assert_eq!(seq.to_vec(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_filter() {
        let seq = range(0, None, 1)
            .unwrap()
            .take(10)
            .filter(|x| x % 2 == 0);
        assert_eq!(seq.to_vec(), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_filter_pulls_until_match() {
        let pulls = Cell::new(0);
        let seq = counted(&pulls).filter(|x| *x >= 100);
        assert_eq!(seq.first(), Some(100));
        assert_eq!(pulls.get(), 101);
    }

    #[test]
    fn test_take() {
        let seq = range(0, None, 1).unwrap().take(10);
        assert_eq!(seq.to_vec(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_take_never_pulls_past_bound() {
        let pulls = Cell::new(0);
        let seq = counted(&pulls).take(10);
        assert_eq!(seq.to_vec().len(), 10);
        assert_eq!(pulls.get(), 10);
    }

    #[test]
    fn test_take_zero_pulls_nothing() {
        let pulls = Cell::new(0);
        let seq = counted(&pulls).take(0);
        assert_eq!(seq.to_vec(), Vec::<u32>::new());
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn test_take_longer_than_source() {
        let seq = range(0, Some(3), 1).unwrap().take(10);
        assert_eq!(seq.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_flat_map() {
        let seq = range(0, None, 1)
            .unwrap()
            .take(3)
            .flat_map(|x| repeat(x, Some(2)));
        assert_eq!(seq.to_vec(), vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_flat_map_over_infinite_source() {
        let seq = range(1, None, 1)
            .unwrap()
            .flat_map(|x: u32| range(0, Some(x), 1).unwrap());
        assert_eq!(seq.take(6).to_vec(), vec![0, 0, 1, 0, 1, 2]);
    }

    #[test]
    fn test_fold() {
        let sum = range(0, None, 1).unwrap().take(5).fold(0, |a, x| a + x);
        assert_eq!(sum, 10);
    }

    #[test]
    fn test_zip() {
        let numbers = range(0, None, 1).unwrap().take(3);
        let letters = repeat('a', None);
        assert_debug_snapshot!(numbers.zip(&letters).to_vec(), @r###"
        [
            (
                0,
                'a',
            ),
            (
                1,
                'a',
            ),
            (
                2,
                'a',
            ),
        ]
        "###);
    }

    #[test]
    fn test_zip_shorter_right() {
        let pulls = Cell::new(0);
        let left = counted(&pulls);
        let right = range(0, Some(2), 1).unwrap();
        let zipped = left.zip(&right);
        assert_eq!(zipped.to_vec(), vec![(0, 0), (1, 1)]);
        // the left side is pulled once more to discover the right side ended
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_source_reusable_after_derivation() {
        let source = range(0, Some(4), 1).unwrap();
        let doubled = source.map(|x| x * 2);
        assert_eq!(source.to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(doubled.to_vec(), vec![0, 2, 4, 6]);
        assert_eq!(doubled.to_vec(), vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_derived_at_is_memoized() {
        let pulls = Cell::new(0);
        let seq = counted(&pulls).map(|x| x * 10);
        assert_eq!(seq.at(2), Some(20));
        assert_eq!(seq.at(2), Some(20));
        assert_eq!(seq.at(0), Some(0));
        assert_eq!(pulls.get(), 3);
    }
}
