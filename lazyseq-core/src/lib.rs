//! Lazy, restartable sequences.
//!
//! A [`Lazy`] wraps a [`Producer`]: a factory that hands out a fresh
//! forward-only [`Cursor`] every time it is asked. Nothing is computed until a
//! consumer pulls. Combinators such as [`Lazy::map`] and [`Lazy::take`] build
//! new producers on top of the source, so a whole chain is evaluated one
//! element at a time.
//!
//! ```
//! use lazyseq_core::{range, repeat};
//!
//! let evens = range(0, None, 1)
//!     .unwrap()
//!     .take(10)
//!     .filter(|x| x % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
//!
//! let doubled = range(0, Some(3), 1)
//!     .unwrap()
//!     .flat_map(|x| repeat(x, Some(2)));
//! assert_eq!(doubled.to_vec(), vec![0, 0, 1, 1, 2, 2]);
//! ```

mod combinators;
mod creation;
pub mod error;
mod iter;
mod lazy;
mod memo;
mod producer;

pub use creation::{range, repeat, Step};
pub use error::Error;
pub use iter::Iter;
pub use lazy::Lazy;
pub use producer::{Cursor, Producer};
