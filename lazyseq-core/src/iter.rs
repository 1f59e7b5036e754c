use std::rc::Rc;

use crate::error;
use crate::lazy::Lazy;
use crate::producer::Cursor;

/// An iterator over one traversal of a [`Lazy`] sequence.
///
/// Created by [`Lazy::iter`]. Each `Iter` owns its own cursor, so several can
/// walk the same sequence at once without disturbing each other.
pub struct Iter<'a, T> {
    cursor: Cursor<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(cursor: Cursor<'a, T>) -> Self {
        Self { cursor }
    }
}

impl<T> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.cursor.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

/// Flattens the sequences produced by `f`, one source item at a time.
pub(crate) struct FlatMapIter<'a, T, U, F>
where
    F: Fn(T) -> Lazy<'a, U>,
{
    outer: Cursor<'a, T>,
    f: Rc<F>,
    inner: Option<Iter<'a, U>>,
}

impl<'a, T, U, F> FlatMapIter<'a, T, U, F>
where
    F: Fn(T) -> Lazy<'a, U>,
{
    pub(crate) fn new(outer: Cursor<'a, T>, f: Rc<F>) -> Self {
        Self {
            outer,
            f,
            inner: None,
        }
    }
}

impl<'a, T, U, F> Iterator for FlatMapIter<'a, T, U, F>
where
    U: 'a,
    F: Fn(T) -> Lazy<'a, U>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        loop {
            // drain the current inner sequence before touching the source
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                } else {
                    self.inner = None;
                }
            }
            let item = self.outer.next()?;
            self.inner = Some((self.f)(item).iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, _) = match &self.inner {
            Some(inner) => inner.size_hint(),
            None => (0, None),
        };
        (lower, None)
    }
}

pub(crate) fn one<T>(mut iter: impl Iterator<Item = T>) -> error::Result<T> {
    if let Some(one) = iter.next() {
        if iter.next().is_none() {
            Ok(one)
        } else {
            Err(error::Error::TooMany)
        }
    } else {
        Err(error::Error::Empty)
    }
}

pub(crate) fn option<T>(mut iter: impl Iterator<Item = T>) -> error::Result<Option<T>> {
    if let Some(one) = iter.next() {
        if iter.next().is_none() {
            Ok(Some(one))
        } else {
            Err(error::Error::TooMany)
        }
    } else {
        Ok(None)
    }
}
