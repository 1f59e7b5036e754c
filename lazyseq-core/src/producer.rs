/// A forward-only pull handle over one traversal of a sequence.
///
/// `None` signals exhaustion.
pub type Cursor<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// A repeatable factory of fresh cursors.
///
/// Each call to [`Producer::cursor`] starts a new, independent traversal from
/// the logical beginning of the sequence. Any iteration state lives in the
/// returned cursor, never in the producer.
///
/// Every `Fn() -> I` where `I: IntoIterator` is a producer, so a closure that
/// builds an iterator is all that's needed:
///
/// ```
/// use lazyseq_core::Producer;
///
/// let naturals = || 0u64..;
/// let mut a = naturals.cursor();
/// let mut b = naturals.cursor();
/// a.next();
/// assert_eq!(a.next(), Some(1));
/// assert_eq!(b.next(), Some(0));
/// ```
pub trait Producer<'a, T> {
    /// Start a new traversal.
    fn cursor(&self) -> Cursor<'a, T>;
}

impl<'a, T, F, I> Producer<'a, T> for F
where
    F: Fn() -> I,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
{
    fn cursor(&self) -> Cursor<'a, T> {
        Box::new(self().into_iter())
    }
}
