use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::error;
use crate::iter::{self, Iter};
use crate::memo::Memo;
use crate::producer::Producer;

pub(crate) type SharedProducer<'a, T> = Rc<dyn Producer<'a, T> + 'a>;

/// A lazy, restartable sequence.
///
/// A `Lazy` pairs a [`Producer`] with a memo cache. Iterating it asks the
/// producer for a fresh cursor, so the same value can be traversed any number
/// of times. Indexed access through [`Lazy::at`] goes through the cache, which
/// only ever grows as far as the highest index requested.
///
/// The sequence may be infinite. Terminal operations such as
/// [`Lazy::to_vec`] and [`Lazy::fold`] drain the whole sequence and never
/// return for an infinite one; bound it with [`Lazy::take`] first.
pub struct Lazy<'a, T> {
    producer: SharedProducer<'a, T>,
    memo: RefCell<Memo<'a, T>>,
}

impl<'a, T: 'a> Lazy<'a, T> {
    /// Wrap a producer. Nothing is pulled.
    pub fn new<P>(producer: P) -> Self
    where
        P: Producer<'a, T> + 'a,
    {
        Self::from_shared(Rc::new(producer))
    }

    pub(crate) fn from_shared(producer: SharedProducer<'a, T>) -> Self {
        Self {
            producer,
            memo: RefCell::new(Memo::new()),
        }
    }

    pub(crate) fn producer(&self) -> SharedProducer<'a, T> {
        self.producer.clone()
    }

    /// Start a new traversal from the beginning of the sequence.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.producer.cursor())
    }

    /// Get the item at `index`, if the sequence is long enough.
    ///
    /// Items are memoized: each position is produced at most once over the
    /// lifetime of this `Lazy`, and only as many items are pulled as needed to
    /// reach `index`. If pulling panics, the panic propagates and the next
    /// call resumes from a fresh cursor positioned after the cached items.
    ///
    /// # Panics
    ///
    /// Panics with `"Lazy::at called re-entrantly while filling its cache"`
    /// if called from inside this sequence's own producer while it is filling
    /// the cache for another `at` call.
    pub fn at(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        let Ok(mut memo) = self.memo.try_borrow_mut() else {
            panic!("Lazy::at called re-entrantly while filling its cache");
        };
        memo.fill(index, || {
            debug!("starting memo cursor for index {}", index);
            self.producer.cursor()
        });
        memo.get(index).cloned()
    }

    /// The number of items memoized so far by [`Lazy::at`].
    pub fn cached_len(&self) -> usize {
        self.memo.borrow().len()
    }

    /// Whether [`Lazy::at`] has seen the end of the sequence.
    pub fn is_exhausted(&self) -> bool {
        self.memo.borrow().is_exhausted()
    }

    /// Collect a full traversal into a vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Left fold over a full traversal.
    pub fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.iter().fold(init, f)
    }

    /// Left fold that stops at the first error, returning it unchanged.
    pub fn try_fold<A, E, F>(&self, init: A, f: F) -> Result<A, E>
    where
        F: FnMut(A, T) -> Result<A, E>,
    {
        let mut iter = self.iter();
        iter.try_fold(init, f)
    }

    /// The first item, pulling at most one.
    pub fn first(&self) -> Option<T> {
        self.iter().next()
    }

    /// The single item in the sequence.
    ///
    /// Pulls at most two items, so this is safe on infinite sequences.
    pub fn one(&self) -> error::Result<T> {
        iter::one(self.iter())
    }

    /// The item in a sequence of zero or one items.
    pub fn option(&self) -> error::Result<Option<T>> {
        iter::option(self.iter())
    }
}

impl<T> Clone for Lazy<'_, T> {
    /// The clone shares the producer but starts with an empty cache.
    fn clone(&self) -> Self {
        Self {
            producer: self.producer.clone(),
            memo: RefCell::new(Memo::new()),
        }
    }
}

impl<T> fmt::Debug for Lazy<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Lazy");
        match self.memo.try_borrow() {
            Ok(memo) => s
                .field("cached", &memo.len())
                .field("exhausted", &memo.is_exhausted()),
            Err(_) => s.field("cached", &"<filling>"),
        };
        s.finish_non_exhaustive()
    }
}

impl<'a, T: 'a> IntoIterator for &Lazy<'a, T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T: 'a> IntoIterator for Lazy<'a, T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T: Clone + 'a> From<Vec<T>> for Lazy<'a, T> {
    fn from(items: Vec<T>) -> Self {
        let items: Rc<[T]> = items.into();
        Lazy::new(move || {
            let items = items.clone();
            (0..items.len()).map(move |i| items[i].clone())
        })
    }
}

impl<'a, T: Clone + 'a> FromIterator<T> for Lazy<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}
