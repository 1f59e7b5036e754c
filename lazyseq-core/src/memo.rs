use log::trace;

use crate::producer::Cursor;

/// The index cache behind [`crate::Lazy::at`].
///
/// Items are appended in traversal order and never removed. A single cursor
/// is kept between fills, so each element is pulled from the producer at most
/// once for the lifetime of the memo.
pub(crate) struct Memo<'a, T> {
    items: Vec<T>,
    cursor: Option<Cursor<'a, T>>,
    exhausted: bool,
}

impl<'a, T> Memo<'a, T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
            exhausted: false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Pull until `index` is cached or the sequence ends.
    ///
    /// `start` is only called if no cursor is in progress yet. The cursor is
    /// held outside the memo while pulling, so if pulling panics it is lost
    /// and the next fill starts over, skipping the items already cached.
    pub(crate) fn fill(&mut self, index: usize, start: impl FnOnce() -> Cursor<'a, T>) {
        if self.exhausted || index < self.items.len() {
            return;
        }
        let mut cursor = match self.cursor.take() {
            Some(cursor) => cursor,
            None => {
                let mut cursor = start();
                if self.skip_cached(&mut cursor) {
                    self.finish();
                    return;
                }
                cursor
            }
        };
        while self.items.len() <= index {
            match cursor.next() {
                Some(item) => self.items.push(item),
                None => {
                    // drop the cursor so whatever it holds is released early
                    self.finish();
                    return;
                }
            }
        }
        trace!("memo holds {} items", self.items.len());
        self.cursor = Some(cursor);
    }

    /// Advance a new cursor past the items already cached. Returns `true` if
    /// the cursor ran out first.
    fn skip_cached(&self, cursor: &mut Cursor<'a, T>) -> bool {
        if !self.items.is_empty() {
            trace!("restarting memo cursor past {} items", self.items.len());
        }
        for _ in 0..self.items.len() {
            if cursor.next().is_none() {
                return true;
            }
        }
        false
    }

    fn finish(&mut self) {
        trace!("memo cursor exhausted after {} items", self.items.len());
        self.cursor = None;
        self.exhausted = true;
    }
}
