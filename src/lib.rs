#![no_std]

//! `SimpleVec`: a growable contiguous array with explicit capacity control.
//!
//! `SimpleVec` owns a single buffer of `capacity()` slots and keeps the first
//! `len()` of them live. Capacity only changes when the caller asks for it
//! (`reserve`) or when an operation runs out of room (`push`, `insert`,
//! `resize`). Every allocating operation is fallible: an allocation failure is
//! reported as [`SimpleVecError::AllocationFailure`] and leaves the vector
//! exactly as it was.
//!
//! This crate is `no_std` compatible and only needs the `alloc` crate.
//!
//! # Storage Model
//!
//! Storage is an [`ArrayBuf`]: one allocation whose slots all hold a valid
//! value. Fresh slots are filled with `T::default()`, which is why most
//! growing operations require `T: Default`. Slots in `[len(), capacity())`
//! are allocated but not live; their contents are unspecified.
//!
//! # Growth Policy
//!
//! - `push()` and `resize()` on a full vector grow to
//!   `max(requested, 2 * capacity())`
//! - `insert()` on a full vector doubles the capacity, and grows a
//!   zero-capacity vector to exactly one slot
//! - `reserve(n)` grows to exactly `n`
//! - Nothing ever shrinks the capacity
//!
//! ```
//! # use simple_vec::SimpleVec;
//! let mut vec = SimpleVec::new();
//! assert_eq!(vec.capacity(), 0);
//!
//! vec.push(1).unwrap();
//! vec.push(2).unwrap();
//! vec.push(3).unwrap();
//! assert_eq!(vec.capacity(), 4);
//! assert_eq!(vec, [1, 2, 3]);
//! ```
//!
//! # Construction
//!
//! ```
//! # use simple_vec::{reserve, SimpleVec};
//! let empty = SimpleVec::<u32>::new();
//! let zeros = SimpleVec::<u32>::with_len(3).unwrap();
//! let sevens = SimpleVec::from_elem(3, &7u32).unwrap();
//! let listed = SimpleVec::from_slice(&[1u32, 2, 3]).unwrap();
//! let reserved = SimpleVec::<u32>::from_hint(reserve(8)).unwrap();
//!
//! assert_eq!(empty.capacity(), 0);
//! assert_eq!(zeros, [0, 0, 0]);
//! assert_eq!(sevens, [7, 7, 7]);
//! assert_eq!(listed.len(), 3);
//! assert_eq!((reserved.len(), reserved.capacity()), (0, 8));
//! ```
//!
//! # Positional Editing
//!
//! `insert()` and `erase()` take and return positions as indices. A returned
//! position is only meaningful until the next mutation.
//!
//! ```
//! # use simple_vec::{SimpleVec, SimpleVecError};
//! let mut vec = SimpleVec::from_slice(&[1, 2, 3]).unwrap();
//!
//! let pos = vec.insert(1, 9).unwrap();
//! assert_eq!(pos, 1);
//! assert_eq!(vec, [1, 9, 2, 3]);
//!
//! let pos = vec.erase(2).unwrap();
//! assert_eq!(vec[pos], 3);
//! assert_eq!(vec, [1, 9, 3]);
//!
//! assert_eq!(
//!     vec.at(5),
//!     Err(SimpleVecError::OutOfRange { index: 5, length: 3 })
//! );
//! ```
//!
//! # Ownership Transfer
//!
//! `take()` moves the buffer out and resets the source to the empty,
//! zero-capacity state:
//!
//! ```
//! # use simple_vec::SimpleVec;
//! let mut source = SimpleVec::from_slice(&[1, 2]).unwrap();
//! let target = source.take();
//!
//! assert_eq!(target, [1, 2]);
//! assert_eq!((source.len(), source.capacity()), (0, 0));
//! ```
//!
//! # Features
//!
//! - `std`: enables `std` support in the error type
//! - `log`: emits `log` records on reallocation and allocation failure

extern crate alloc;

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => { ::log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)*) => { ::log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

mod buffer;
mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::buffer::ArrayBuf;
pub use crate::core::{reserve, CapacityHint, SimpleVec};
pub use crate::error::SimpleVecError;
pub use crate::iter::{SimpleVecIntoIter, SimpleVecIter, SimpleVecIterMut};
