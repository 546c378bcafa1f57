use ::core::iter::FusedIterator;
use ::core::slice;

use alloc::vec;

use crate::core::SimpleVec;

/// Iterator over the live elements of a `SimpleVec`
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct SimpleVecIter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SimpleVecIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SimpleVecIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SimpleVecIter<'_, T> {}

impl<T> FusedIterator for SimpleVecIter<'_, T> {}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = SimpleVecIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        SimpleVecIter {
            inner: self.as_slice().iter(),
        }
    }
}

/// Mutable iterator over the live elements of a `SimpleVec`
#[derive(Debug)]
pub struct SimpleVecIterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> Iterator for SimpleVecIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SimpleVecIterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SimpleVecIterMut<'_, T> {}

impl<T> FusedIterator for SimpleVecIterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = SimpleVecIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        SimpleVecIterMut {
            inner: self.as_mut_slice().iter_mut(),
        }
    }
}

/// Owning iterator that moves the live elements out of a `SimpleVec`
#[derive(Debug)]
pub struct SimpleVecIntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for SimpleVecIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SimpleVecIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SimpleVecIntoIter<T> {}

impl<T> FusedIterator for SimpleVecIntoIter<T> {}

impl<T> IntoIterator for SimpleVec<T> {
    type Item = T;
    type IntoIter = SimpleVecIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (items, len) = self.into_parts();
        // Slots past the length are not live; drop them up front
        let mut slots = items.into_vec();
        slots.truncate(len);
        SimpleVecIntoIter {
            inner: slots.into_iter(),
        }
    }
}
