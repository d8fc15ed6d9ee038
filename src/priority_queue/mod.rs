//! A max-priority queue layered on a [`BinaryHeap`].
//!
//! [`PriorityQueue`] owns exactly one heap and never exposes it mutably, so
//! the heap is in max-heap order before and after every queue operation.

use core::fmt;
use core::iter::FromIterator;

use alloc::vec::Vec;

use crate::binary_heap::{BinaryHeap, Iter};
use crate::container::{Clearable, Linear, Queue};
use crate::order::{OrdTotalOrder, TotalOrder};
use crate::storage::Growth;
use crate::{Error, Result};

#[cfg(test)]
mod tests;

/// A max-priority queue implemented with a binary heap.
///
/// The element of highest priority (the *tip*) is the greatest one by the
/// queue's order `O`; among equally great elements any may be the tip.
///
/// # Examples
///
/// ```
/// use mound::{Error, PriorityQueue};
///
/// let mut queue = PriorityQueue::new();
/// assert_eq!(queue.tip(), Err(Error::Empty));
///
/// queue.insert(1);
/// queue.insert(5);
/// queue.insert(2);
/// assert_eq!(queue.tip(), Ok(&5));
///
/// assert_eq!(queue.tip_n_remove(), Ok(5));
/// assert_eq!(queue.tip_n_remove(), Ok(2));
/// assert_eq!(queue.tip_n_remove(), Ok(1));
/// assert_eq!(queue.tip_n_remove(), Err(Error::Empty));
/// ```
///
/// # Time complexity
///
/// | [insert]      | [remove_tip]  | [tip]  | [change]      |
/// |---------------|---------------|--------|---------------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(1) | *O*(log(*n*)) |
///
/// Insertion and removal additionally reallocate under [`Growth::Exact`].
///
/// [insert]: PriorityQueue::insert
/// [remove_tip]: PriorityQueue::remove_tip
/// [tip]: PriorityQueue::tip
/// [change]: PriorityQueue::change
pub struct PriorityQueue<T, O = OrdTotalOrder> {
    heap: BinaryHeap<T, O>,
}

impl<T: Clone, O: Clone> Clone for PriorityQueue<T, O> {
    fn clone(&self) -> Self {
        PriorityQueue { heap: self.heap.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.heap.clone_from(&source.heap);
    }
}

impl<T, O: TotalOrder<T> + Default> Default for PriorityQueue<T, O> {
    /// Creates an empty `PriorityQueue<T>`.
    #[inline]
    fn default() -> Self {
        PriorityQueue { heap: BinaryHeap::default() }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for PriorityQueue<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.heap, f)
    }
}

/// Queues are equal when their heaps' raw layouts are.
impl<T: PartialEq, O> PartialEq for PriorityQueue<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.heap == other.heap
    }
}

impl<T: Eq, O> Eq for PriorityQueue<T, O> {}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue prioritizing by [`Ord`].
    #[must_use]
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue { heap: BinaryHeap::new() }
    }

    /// Creates an empty queue prioritizing by [`Ord`], whose storage follows
    /// `growth`.
    #[must_use]
    pub fn with_growth(growth: Growth) -> PriorityQueue<T> {
        PriorityQueue { heap: BinaryHeap::with_growth(growth) }
    }

    /// Builds a queue out of clones of the elements of `slice`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::PriorityQueue;
    ///
    /// let pending = vec![3, 9, 4];
    /// let queue = PriorityQueue::from_slice(&pending);
    /// assert_eq!(queue.tip(), Ok(&9));
    /// assert_eq!(pending, [3, 9, 4]);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> PriorityQueue<T>
    where
        T: Clone,
    {
        PriorityQueue { heap: BinaryHeap::from_slice(slice) }
    }
}

impl<T, O: TotalOrder<T>> PriorityQueue<T, O> {
    /// Creates an empty queue prioritizing by `order`.
    #[must_use]
    pub fn with_order(order: O) -> PriorityQueue<T, O> {
        PriorityQueue { heap: BinaryHeap::with_order(order) }
    }

    /// Creates an empty queue prioritizing by `order`, whose storage follows
    /// `growth`.
    #[must_use]
    pub fn with_order_and_growth(order: O, growth: Growth) -> PriorityQueue<T, O> {
        PriorityQueue { heap: BinaryHeap::with_order_and_growth(order, growth) }
    }

    /// Builds a queue out of the elements of `vec`, prioritizing by `order`.
    ///
    /// This takes *O*(*n*) time.
    #[must_use]
    pub fn from_vec_with_order(vec: Vec<T>, order: O) -> PriorityQueue<T, O> {
        PriorityQueue { heap: BinaryHeap::from_vec_with_order(vec, order) }
    }

    /// Builds a queue out of clones of the elements of `slice`, prioritizing
    /// by `order`.
    #[must_use]
    pub fn from_slice_with_order(slice: &[T], order: O) -> PriorityQueue<T, O>
    where
        T: Clone,
    {
        PriorityQueue { heap: BinaryHeap::from_slice_with_order(slice, order) }
    }

    /// The element of highest priority.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    pub fn tip(&self) -> Result<&T> {
        self.heap.as_slice().first().ok_or(Error::Empty)
    }

    /// Adds `value` to the queue.
    ///
    /// It is placed in a new last position and sifted up.
    pub fn insert(&mut self, value: T) {
        self.heap.insert(value);
    }

    /// Removes the element of highest priority.
    ///
    /// The last element takes its place and is sifted down.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    pub fn remove_tip(&mut self) -> Result<()> {
        self.tip_n_remove().map(drop)
    }

    /// Removes the element of highest priority and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    pub fn tip_n_remove(&mut self) -> Result<T> {
        self.heap.remove_root()
    }

    /// Replaces the element at position `index` (in layout order) with
    /// `value`, then moves it to wherever its new priority belongs.
    ///
    /// Positions can be found with [`iter`](Self::iter); they are only stable
    /// until the next mutation.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`; the queue is left
    /// untouched and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::{Error, PriorityQueue};
    ///
    /// let mut queue = PriorityQueue::from([15, 8, 22, 3, 11, 27, 6, 19]);
    /// let p = queue.iter().position(|&x| x == 8).unwrap();
    ///
    /// queue.change(p, 100)?;
    /// assert_eq!(queue.tip(), Ok(&100));
    ///
    /// assert_eq!(queue.change(8, 0), Err(Error::IndexOutOfRange { index: 8, len: 8 }));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn change(&mut self, index: usize, value: T) -> Result<()> {
        self.heap.storage_mut().set(index, value)?;

        // At most one of these moves anything: if the value rose, the slot
        // now holds its old parent, which already dominates the subtree.
        let len = self.heap.len();
        self.heap.sift_up(index);
        self.heap.sift_down(index, len);
        Ok(())
    }

    /// Whether the underlying heap is in heap order, which a queue always
    /// is.
    #[must_use]
    pub fn is_heap(&self) -> bool {
        self.heap.is_heap()
    }
}

impl<T, O> PriorityQueue<T, O> {
    /// Returns the number of elements in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Checks if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The element at `index` in layout order.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.heap.get(index)
    }

    /// The element at position 0, which is the tip.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    pub fn front(&self) -> Result<&T> {
        self.heap.front()
    }

    /// The element at the last position in layout order.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    pub fn back(&self) -> Result<&T> {
        self.heap.back()
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.heap.contains(value)
    }

    /// Returns an iterator visiting all elements in layout order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.heap.iter()
    }

    /// Returns a slice of all elements in layout order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }

    /// Borrows the underlying heap.
    #[must_use]
    pub fn as_heap(&self) -> &BinaryHeap<T, O> {
        &self.heap
    }

    /// Consumes the queue, returning the underlying heap.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_heap(self) -> BinaryHeap<T, O> {
        self.heap
    }

    /// Consumes the queue, returning its elements in layout order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_vec()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, O: TotalOrder<T>> Queue for PriorityQueue<T, O> {
    type Item = T;

    fn tip(&self) -> Result<&T> {
        PriorityQueue::tip(self)
    }

    fn remove_tip(&mut self) -> Result<()> {
        PriorityQueue::remove_tip(self)
    }

    fn tip_n_remove(&mut self) -> Result<T> {
        PriorityQueue::tip_n_remove(self)
    }

    fn insert(&mut self, value: T) {
        PriorityQueue::insert(self, value);
    }

    fn change(&mut self, index: usize, value: T) -> Result<()> {
        PriorityQueue::change(self, index, value)
    }
}

impl<T, O> Linear for PriorityQueue<T, O> {
    type Item = T;

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn get(&self, index: usize) -> Result<&T> {
        PriorityQueue::get(self, index)
    }

    fn front(&self) -> Result<&T> {
        PriorityQueue::front(self)
    }

    fn back(&self) -> Result<&T> {
        PriorityQueue::back(self)
    }
}

impl<T, O> Clearable for PriorityQueue<T, O> {
    fn clear(&mut self) {
        PriorityQueue::clear(self);
    }
}

impl<T, O: TotalOrder<T>> From<BinaryHeap<T, O>> for PriorityQueue<T, O> {
    /// Takes over `heap`, first bringing it back into heap order in case it
    /// has been sorted.
    fn from(mut heap: BinaryHeap<T, O>) -> Self {
        if !heap.is_heap() {
            heap.heapify();
        }
        PriorityQueue { heap }
    }
}

impl<T, O> From<PriorityQueue<T, O>> for BinaryHeap<T, O> {
    fn from(queue: PriorityQueue<T, O>) -> Self {
        queue.heap
    }
}

impl<T: Ord> From<Vec<T>> for PriorityQueue<T> {
    /// Builds a queue out of the elements of `vec` in *O*(*n*) time.
    fn from(vec: Vec<T>) -> Self {
        PriorityQueue { heap: BinaryHeap::from(vec) }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for PriorityQueue<T> {
    fn from(arr: [T; N]) -> Self {
        PriorityQueue { heap: BinaryHeap::from(arr) }
    }
}

impl<T, O: TotalOrder<T> + Default> FromIterator<T> for PriorityQueue<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue { heap: BinaryHeap::from_iter(iter) }
    }
}

impl<T, O: TotalOrder<T>> Extend<T> for PriorityQueue<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter);
    }
}

impl<'a, T: 'a + Copy, O: TotalOrder<T>> Extend<&'a T> for PriorityQueue<T, O> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.heap.extend(iter);
    }
}

impl<T, O> IntoIterator for PriorityQueue<T, O> {
    type Item = T;
    type IntoIter = crate::binary_heap::IntoIter<T>;

    /// Moves the elements out in layout order, not priority order.
    fn into_iter(self) -> Self::IntoIter {
        self.heap.into_iter()
    }
}

impl<'a, T, O> IntoIterator for &'a PriorityQueue<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.heap.iter()
    }
}
