use ::core::cmp::Ordering;
use ::core::fmt;
use ::core::hash::{Hash, Hasher};
use ::core::ops::{Index, IndexMut};

use crate::buffer::ArrayBuf;
use crate::error::SimpleVecError;
use crate::iter::{SimpleVecIter, SimpleVecIterMut};

/// Request for a vector with reserved capacity and no elements.
///
/// Distinguishes "`n` reserved slots" from "`n` default elements" at the
/// construction site. Build one with [`reserve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityHint {
    capacity: usize,
}

impl CapacityHint {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Creates a [`CapacityHint`] for `SimpleVec::from_hint`.
#[must_use]
pub const fn reserve(capacity: usize) -> CapacityHint {
    CapacityHint::new(capacity)
}

/// A growable contiguous array with explicit capacity control
pub struct SimpleVec<T> {
    items: ArrayBuf<T>,
    len: usize,
}

impl<T> Default for SimpleVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SimpleVec<T> {
    /// Creates an empty vector. No allocation is performed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: ArrayBuf::new(),
            len: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            items: self.items.take(),
            len: ::core::mem::take(&mut self.len),
        }
    }

    /// Replaces the contents of `self` with those of `source`, leaving
    /// `source` empty with zero capacity. The previous buffer of `self` is
    /// released.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    /// Exchanges buffers, lengths and capacities in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        ::core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Sets the length to zero. Capacity and storage are kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.items.as_mut_slice()[..len]
    }

    /// Returns an iterator over the live elements.
    #[must_use]
    pub fn iter(&self) -> SimpleVecIter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator that allows modifying each live element.
    pub fn iter_mut(&mut self) -> SimpleVecIterMut<'_, T> {
        self.into_iter()
    }

    /// Gets an element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Gets an element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, SimpleVecError> {
        let length = self.len;
        self.get(index)
            .ok_or(SimpleVecError::OutOfRange { index, length })
    }

    /// Gets a mutable element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SimpleVecError> {
        let length = self.len;
        self.get_mut(index)
            .ok_or(SimpleVecError::OutOfRange { index, length })
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`. Reading a slot past the length is
    /// not a memory error, but calling this with `index >= capacity()` is
    /// undefined behavior.
    #[must_use]
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees `index < len() <= capacity()`
        unsafe { self.items.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees `index < len() <= capacity()`
        unsafe { self.items.get_unchecked_mut(index) }
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub(crate) fn into_parts(self) -> (ArrayBuf<T>, usize) {
        (self.items, self.len)
    }
}

impl<T: Default> SimpleVec<T> {
    /// Creates a vector of `len` default values with capacity `len`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::AllocationFailure` if the storage cannot be allocated.
    pub fn with_len(len: usize) -> Result<Self, SimpleVecError> {
        Ok(Self {
            items: ArrayBuf::allocate(len)?,
            len,
        })
    }

    /// Creates an empty vector with exactly `capacity` reserved slots.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::AllocationFailure` if the storage cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, SimpleVecError> {
        let mut vec = Self::new();
        vec.reserve(capacity)?;
        Ok(vec)
    }

    /// Creates an empty vector with the capacity carried by `hint`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::AllocationFailure` if the storage cannot be allocated.
    pub fn from_hint(hint: CapacityHint) -> Result<Self, SimpleVecError> {
        Self::with_capacity(hint.capacity())
    }

    /// Creates a vector holding `items` in order, moving each item in.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::AllocationFailure` if the storage cannot be allocated.
    pub fn from_values<I>(items: I) -> Result<Self, SimpleVecError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let mut vec = Self::with_len(items.len())?;
        for (slot, item) in vec.as_mut_slice().iter_mut().zip(items) {
            *slot = item;
        }
        Ok(vec)
    }

    /// Grows the capacity to exactly `new_capacity`, moving the live
    /// elements into the new storage. Does nothing if `new_capacity` does
    /// not exceed the current capacity. Length is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::AllocationFailure` if the storage cannot be
    /// allocated. The vector is left untouched in that case.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), SimpleVecError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        let mut grown = ArrayBuf::allocate(new_capacity)?;
        trace!(
            "reallocating from {} to {} slots",
            self.capacity(),
            new_capacity
        );

        let len = self.len;
        for (dst, src) in grown
            .as_mut_slice()
            .iter_mut()
            .zip(&mut self.items.as_mut_slice()[..len])
        {
            ::core::mem::swap(dst, src);
        }
        self.items.swap(&mut grown);

        Ok(())
    }

    /// Changes the length to `new_len`.
    ///
    /// Shrinking only moves the length. Growing within capacity resets the
    /// newly exposed slots to `T::default()`. Growing past capacity
    /// reallocates to `max(new_len, 2 * capacity())`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::AllocationFailure` if growth is needed and the
    /// storage cannot be allocated. The vector is left untouched in that case.
    pub fn resize(&mut self, new_len: usize) -> Result<(), SimpleVecError> {
        if new_len <= self.len {
            self.len = new_len;
            return Ok(());
        }

        if new_len > self.capacity() {
            let new_capacity = new_len.max(self.capacity().saturating_mul(2));
            // Fresh slots past the old length already hold defaults
            self.reserve(new_capacity)?;
        } else {
            let len = self.len;
            self.items.as_mut_slice()[len..new_len].fill_with(T::default);
        }
        self.len = new_len;

        Ok(())
    }

    /// Appends `value` to the end of the vector.
    ///
    /// When the vector is full the capacity grows to
    /// `max(len() + 1, 2 * capacity())`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::AllocationFailure` if growth is needed and the
    /// storage cannot be allocated. The vector is left untouched and `value`
    /// is dropped.
    pub fn push(&mut self, value: T) -> Result<(), SimpleVecError> {
        if self.len < self.capacity() {
            let len = self.len;
            self.items.as_mut_slice()[len] = value;
            self.len += 1;
        } else {
            self.resize(self.len + 1)?;
            let last = self.len - 1;
            self.items.as_mut_slice()[last] = value;
        }
        Ok(())
    }

    /// Removes the last element and returns it, or `None` if the vector is empty.
    ///
    /// The vacated slot keeps `T::default()`. Capacity is unchanged.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let len = self.len;
        Some(::core::mem::take(&mut self.items.as_mut_slice()[len]))
    }

    /// Removes the element at `position`, shifting the following elements
    /// one slot to the left. The erased value is dropped immediately and its
    /// slot keeps `T::default()`. Capacity is unchanged.
    ///
    /// Returns the index now occupied by the element that followed the
    /// erased one, which equals the new length if the last element was erased.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::OutOfRange` if `position >= len()`.
    pub fn erase(&mut self, position: usize) -> Result<usize, SimpleVecError> {
        if position >= self.len {
            return Err(SimpleVecError::OutOfRange {
                index: position,
                length: self.len,
            });
        }

        self.as_mut_slice()[position..].rotate_left(1);
        self.len -= 1;
        // The erased value was rotated into the first dead slot; release it now
        let len = self.len;
        drop(::core::mem::take(&mut self.items.as_mut_slice()[len]));

        Ok(position)
    }

    /// Inserts `value` at `position`, shifting the following elements one
    /// slot to the right. `position == len()` appends.
    ///
    /// A full vector doubles its capacity first; an empty zero-capacity
    /// vector grows to one slot.
    ///
    /// Returns the index of the inserted element.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::OutOfRange` if `position > len()` and
    /// `SimpleVecError::AllocationFailure` if growth fails. The vector is left
    /// untouched in both cases.
    pub fn insert(&mut self, position: usize, value: T) -> Result<usize, SimpleVecError> {
        if position > self.len {
            return Err(SimpleVecError::OutOfRange {
                index: position,
                length: self.len,
            });
        }

        if self.len == self.capacity() {
            let new_capacity = if self.capacity() == 0 {
                1
            } else {
                self.capacity().saturating_mul(2)
            };
            self.reserve(new_capacity)?;
        }

        let len = self.len;
        let window = &mut self.items.as_mut_slice()[position..=len];
        window[len - position] = value;
        window.rotate_right(1);
        self.len += 1;

        Ok(position)
    }
}

impl<T: Clone + Default> SimpleVec<T> {
    /// Creates a vector of `len` copies of `value` with capacity `len`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::AllocationFailure` if the storage cannot be allocated.
    pub fn from_elem(len: usize, value: &T) -> Result<Self, SimpleVecError> {
        let mut vec = Self::with_len(len)?;
        vec.as_mut_slice().fill(value.clone());
        Ok(vec)
    }

    /// Creates a vector holding clones of `items` in order.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::AllocationFailure` if the storage cannot be allocated.
    pub fn from_slice(items: &[T]) -> Result<Self, SimpleVecError> {
        Self::from_values(items.iter().cloned())
    }

    /// Copies the vector. The copy has the same capacity as the original.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::AllocationFailure` if the storage cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, SimpleVecError> {
        let mut copy = Self {
            items: ArrayBuf::allocate(self.capacity())?,
            len: self.len,
        };
        copy.as_mut_slice().clone_from_slice(self.as_slice());
        Ok(copy)
    }

    /// Replaces the contents of `self` with a copy of `source`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::AllocationFailure` if the storage cannot be
    /// allocated. `self` is left untouched in that case.
    pub fn try_assign_from(&mut self, source: &Self) -> Result<(), SimpleVecError> {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }
}

impl<T: Clone + Default> Clone for SimpleVec<T> {
    /// # Panics
    ///
    /// Panics if the storage for the copy cannot be allocated.
    #[allow(clippy::expect_used)]
    fn clone(&self) -> Self {
        self.try_clone()
            .expect("allocation failed while cloning SimpleVec")
    }

    #[allow(clippy::expect_used)]
    fn clone_from(&mut self, source: &Self) {
        self.try_assign_from(source)
            .expect("allocation failed while cloning SimpleVec");
    }
}

impl<T: Clone + Default> TryFrom<&[T]> for SimpleVec<T> {
    type Error = SimpleVecError;

    fn try_from(items: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(items)
    }
}

impl<T> Index<usize> for SimpleVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for SimpleVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<[T]> for SimpleVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVec<T> {}

impl<T: PartialOrd> PartialOrd for SimpleVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
