use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::SimpleVecError;

const MAX_ZST_SLOTS: usize = isize::MAX as usize;

/// Owning handle to a single fixed-size allocation of `T` slots.
///
/// The buffer knows only its capacity. It never tracks how many slots are
/// in use; that is the job of the owning container.
#[derive(Debug)]
pub struct ArrayBuf<T> {
    slots: Box<[T]>,
}

impl<T> Default for ArrayBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayBuf<T> {
    /// Creates the empty buffer. No allocation is performed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Exchanges the storage of two buffers without touching the elements.
    pub fn swap(&mut self, other: &mut Self) {
        ::core::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Transfers ownership of the storage out of `self`, leaving the empty buffer behind.
    #[must_use]
    pub fn take(&mut self) -> Self {
        ::core::mem::take(self)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Returns a reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `capacity()`.
    #[must_use]
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees `index < capacity()`
        unsafe { self.slots.get_unchecked(index) }
    }

    /// Returns a mutable reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `capacity()`.
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees `index < capacity()`
        unsafe { self.slots.get_unchecked_mut(index) }
    }

    /// Consumes the buffer, returning all slots as an owned `Vec`.
    pub(crate) fn into_vec(self) -> Vec<T> {
        Vec::from(self.slots)
    }
}

impl<T: Default> ArrayBuf<T> {
    /// Allocates storage for exactly `capacity` slots, each holding `T::default()`.
    ///
    /// A zero capacity yields the empty buffer without allocating. Filling
    /// the slots takes time linear in `capacity`, also for zero-sized `T`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVecError::AllocationFailure` if the allocator cannot
    /// satisfy the request or the size computation overflows. Zero-sized
    /// types are held to the same `isize::MAX` slot limit as any other type.
    pub fn allocate(capacity: usize) -> Result<Self, SimpleVecError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        // The allocator accepts any count of zero-sized slots
        if ::core::mem::size_of::<T>() == 0 && capacity > MAX_ZST_SLOTS {
            debug!("refusing {} zero-sized slots", capacity);
            return Err(SimpleVecError::AllocationFailure {
                requested: capacity,
            });
        }

        let mut slots = Vec::new();
        if slots.try_reserve_exact(capacity).is_err() {
            debug!("allocation of {} slots failed", capacity);
            return Err(SimpleVecError::AllocationFailure {
                requested: capacity,
            });
        }
        slots.resize_with(capacity, T::default);

        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }
}
