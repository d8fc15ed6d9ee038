//! The resizable array that heaps keep their elements in.
//!
//! [`Storage`] is a thin layer over a [`Vec`] that adds bounds-checked,
//! fallible positional access and a [`Growth`] policy deciding how closely the
//! allocation tracks the logical length.

use alloc::vec::Vec;
use core::fmt;
use core::slice;

use cfg_if::cfg_if;

use crate::{Error, Result};

/// How a [`Storage`]'s allocation follows its logical length.
///
/// The policy never changes observable contents or lengths, only
/// [`Storage::capacity`] and the cost of growing and shrinking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Growth {
    /// Grow the allocation geometrically and never shrink it implicitly, so
    /// that single-element insertions and removals cost amortized *O*(1).
    Amortized,

    /// Keep the allocation at exactly the logical length, reallocating on
    /// every change of length.  Single-element insertions and removals then
    /// cost *O*(*n*).
    Exact,
}

cfg_if! {
    if #[cfg(feature = "exact_growth")] {
        const DEFAULT_GROWTH: Growth = Growth::Exact;
    } else {
        const DEFAULT_GROWTH: Growth = Growth::Amortized;
    }
}

impl Default for Growth {
    /// [`Growth::Amortized`], or [`Growth::Exact`] if the `exact_growth`
    /// feature is enabled.
    #[inline]
    fn default() -> Self {
        DEFAULT_GROWTH
    }
}

/// A 0-indexed, resizable sequence of elements.
///
/// # Examples
///
/// ```
/// use mound::storage::{Growth, Storage};
///
/// let mut storage = Storage::new(Growth::Exact);
/// storage.resize(3);
/// storage.set(1, 7)?;
///
/// assert_eq!(storage.as_slice(), [0, 7, 0]);
/// assert_eq!(storage.capacity(), 3);
/// assert!(storage.get(3).is_err());
/// # Ok::<(), mound::Error>(())
/// ```
pub struct Storage<T> {
    data: Vec<T>,
    growth: Growth,
}

impl<T> Storage<T> {
    /// Creates an empty storage with the given growth policy.
    #[must_use]
    pub const fn new(growth: Growth) -> Self {
        Storage { data: Vec::new(), growth }
    }

    /// Creates an empty storage able to hold at least `capacity` elements
    /// before reallocating.
    ///
    /// Under [`Growth::Exact`] the reservation lasts only until the first
    /// change of length.
    #[must_use]
    pub fn with_capacity(growth: Growth, capacity: usize) -> Self {
        Storage { data: Vec::with_capacity(capacity), growth }
    }

    /// Takes ownership of `data` as the storage's contents.
    pub fn from_vec(data: Vec<T>, growth: Growth) -> Self {
        let mut storage = Storage { data, growth };
        storage.fit();
        storage
    }

    /// The number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether there are no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The number of elements that fit in the current allocation.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The growth policy in force.
    #[must_use]
    pub fn growth(&self) -> Growth {
        self.growth
    }

    /// Replaces the growth policy.  Switching to [`Growth::Exact`] releases
    /// any spare capacity immediately.
    pub fn set_growth(&mut self, growth: Growth) {
        self.growth = growth;
        self.fit();
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.data.get(index).ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Overwrites the element at `index` with `value`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`; `value` is dropped.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        let slot = self.data.get_mut(index).ok_or(Error::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.data.get_mut(index).ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Grows or shrinks to exactly `new_len` elements.
    ///
    /// New slots hold `T::default()`; when shrinking, trailing elements are
    /// dropped.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
            return;
        }
        if self.growth == Growth::Exact {
            self.data.reserve_exact(new_len - len);
        }
        self.data.resize_with(new_len, T::default);
        self.fit();
    }

    /// Reserves room for at least `additional` more elements.  Under
    /// [`Growth::Exact`] the room is released at the next change of length.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Appends one element, growing the length by exactly one.
    pub fn push(&mut self, value: T) {
        if self.growth == Growth::Exact {
            self.data.reserve_exact(1);
        }
        self.data.push(value);
        self.fit();
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.data.pop();
        self.fit();
        value
    }

    /// Shortens to `len` elements, dropping the rest.  Has no effect if
    /// `len` is not less than the current length.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
        self.fit();
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// The elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns an iterator that allows modifying each element, in index
    /// order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Consumes the storage, returning its elements.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn fit(&mut self) {
        if self.growth == Growth::Exact && self.data.capacity() != self.data.len() {
            log::trace!(
                "releasing {} spare slots of exactly-grown storage",
                self.data.capacity() - self.data.len()
            );
            self.data.shrink_to_fit();
        }
    }
}

impl<T: Clone> Clone for Storage<T> {
    fn clone(&self) -> Self {
        Storage { data: self.data.clone(), growth: self.growth }
    }

    fn clone_from(&mut self, source: &Self) {
        self.growth = source.growth;
        self.data.clone_from(&source.data);
        self.fit();
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Storage::new(Growth::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Storage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// Storages are equal when their elements are, whatever their growth policy.
impl<T: PartialEq> PartialEq for Storage<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Storage<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_resize_grows_with_defaults() {
        let mut storage = Storage::new(Growth::Amortized);
        storage.resize(4);
        assert_eq!(storage.as_slice(), [0u8; 4]);

        storage.set(3, 9).unwrap();
        storage.resize(6);
        assert_eq!(storage.as_slice(), [0, 0, 0, 9, 0, 0]);
    }

    #[test]
    fn test_resize_truncates() {
        let mut storage = Storage::from_vec(vec![1, 2, 3, 4], Growth::Amortized);
        storage.resize(2);
        assert_eq!(storage.as_slice(), [1, 2]);
        storage.resize(0);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_bounds_checked_access() {
        let mut storage = Storage::from_vec(vec!['a', 'b'], Growth::default());
        assert_eq!(storage.get(1), Ok(&'b'));
        assert_eq!(storage.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(storage.set(5, 'z'), Err(Error::IndexOutOfRange { index: 5, len: 2 }));
        assert_eq!(storage.as_slice(), ['a', 'b']);
    }

    #[test]
    fn test_exact_growth_tracks_len() {
        let mut storage = Storage::new(Growth::Exact);
        for i in 0..10 {
            storage.push(i);
            assert_eq!(storage.capacity(), storage.len());
        }
        while storage.pop().is_some() {
            assert_eq!(storage.capacity(), storage.len());
        }
        storage.resize(5);
        assert_eq!(storage.capacity(), 5);
        storage.truncate(2);
        assert_eq!(storage.capacity(), 2);
    }

    #[test]
    fn test_exact_growth_drops_reserved_room() {
        let mut storage = Storage::with_capacity(Growth::Exact, 16);
        storage.push(1u8);
        assert_eq!(storage.capacity(), storage.len());

        let mut storage = Storage::new(Growth::Exact);
        storage.reserve(16);
        storage.push(1u8);
        assert_eq!(storage.capacity(), 1);

        storage.reserve(16);
        storage.resize(3);
        assert_eq!(storage.capacity(), 3);
    }

    #[test]
    fn test_mutable_access() {
        let mut storage = Storage::from_vec(vec![1, 2, 3], Growth::default());
        *storage.get_mut(1).unwrap() = 20;
        assert_eq!(storage.get_mut(3).map(|x| *x), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        storage.iter_mut().for_each(|x| *x += 1);
        assert_eq!(storage.as_slice(), [2, 21, 4]);
    }

    #[test]
    fn test_switch_to_exact_growth() {
        let mut storage = Storage::with_capacity(Growth::Amortized, 64);
        storage.push(1);
        assert!(storage.capacity() >= 64);

        storage.set_growth(Growth::Exact);
        assert_eq!(storage.growth(), Growth::Exact);
        assert_eq!(storage.capacity(), 1);
    }

    #[test]
    fn test_eq_ignores_growth() {
        let a = Storage::from_vec(vec![1, 2], Growth::Exact);
        let b = Storage::from_vec(vec![1, 2], Growth::Amortized);
        assert_eq!(a, b);
    }
}
