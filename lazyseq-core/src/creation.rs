use num_traits::Zero;

use crate::error;
use crate::lazy::Lazy;

/// An arithmetic progression from `start` toward `end` by `step`.
///
/// `start` is included and `end` is not. With `end` set to `None` the
/// progression is infinite. A negative `step` counts down toward `end`. The
/// progression also stops once [`Step::forward`] gives up: on overflow for
/// integers, and on a non-finite value for floats.
///
/// ```
/// use lazyseq_core::range;
///
/// assert_eq!(range(0, Some(5), 2).unwrap().to_vec(), vec![0, 2, 4]);
/// assert_eq!(range(0.0, Some(1.0), 0.25).unwrap().to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
/// assert_eq!(range(5, Some(0), -2).unwrap().to_vec(), vec![5, 3, 1]);
/// assert_eq!(range(7, None, 1).unwrap().take(3).to_vec(), vec![7, 8, 9]);
/// ```
pub fn range<'a, T>(start: T, end: Option<T>, step: T) -> error::Result<Lazy<'a, T>>
where
    T: Step + 'a,
{
    if step.is_zero() {
        return Err(error::Error::ZeroStep);
    }
    Ok(Lazy::new(move || RangeIter::new(start, end, step)))
}

/// `value`, `times` times over, or forever if `times` is `None`.
///
/// ```
/// use lazyseq_core::repeat;
///
/// assert_eq!(repeat("x", Some(3)).to_vec(), vec!["x", "x", "x"]);
/// assert_eq!(repeat(1, None).take(2).to_vec(), vec![1, 1]);
/// ```
pub fn repeat<'a, T>(value: T, times: Option<usize>) -> Lazy<'a, T>
where
    T: Clone + 'a,
{
    Lazy::new(move || RepeatIter {
        value: value.clone(),
        remaining: times,
    })
}

/// A number [`range`] can count with.
pub trait Step: Copy + PartialOrd + Zero {
    /// `self + step`, or `None` if the progression cannot go on.
    fn forward(self, step: Self) -> Option<Self>;
}

macro_rules! integer_step {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                #[inline]
                fn forward(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! float_step {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                #[inline]
                fn forward(self, step: Self) -> Option<Self> {
                    let next = self + step;
                    next.is_finite().then_some(next)
                }
            }
        )*
    };
}

integer_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_step!(f32, f64);

struct RangeIter<T> {
    next: Option<T>,
    end: Option<T>,
    step: T,
    ascending: bool,
}

impl<T> RangeIter<T>
where
    T: Step,
{
    fn new(start: T, end: Option<T>, step: T) -> Self {
        RangeIter {
            next: Some(start),
            end,
            step,
            ascending: step > T::zero(),
        }
    }

    fn reached(&self, value: T) -> bool {
        match self.end {
            Some(end) if self.ascending => value >= end,
            Some(end) => value <= end,
            None => false,
        }
    }
}

impl<T> Iterator for RangeIter<T>
where
    T: Step,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next?;
        if self.reached(current) {
            self.next = None;
            return None;
        }
        self.next = current.forward(self.step);
        Some(current)
    }
}

struct RepeatIter<T> {
    value: T,
    remaining: Option<usize>,
}

impl<T: Clone> Iterator for RepeatIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match &mut self.remaining {
            Some(0) => None,
            Some(remaining) => {
                *remaining -= 1;
                Some(self.value.clone())
            }
            None => Some(self.value.clone()),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}
