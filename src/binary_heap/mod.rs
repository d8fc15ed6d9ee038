//! An array-backed binary max-heap.
//!
//! The elements live in a single [`Storage`] and are read as a complete binary
//! tree: the children of position *i* are at 2*i* + 1 and 2*i* + 2, and its
//! parent is at (*i* - 1) / 2. Checking the greatest element is *O*(1),
//! insertion and removal of the greatest element are *O*(log(*n*)), converting
//! an arbitrary vector into a heap is *O*(*n*) and sorting in place is
//! *O*(*n* \* log(*n*)).
//!
//! [`BinaryHeap`] hands out its sift primitives and leaves their sequencing to
//! the caller; [`PriorityQueue`] is the type that sequences them into queue
//! operations.
//!
//! # Examples
//!
//! ```
//! use mound::BinaryHeap;
//!
//! let mut heap = BinaryHeap::from(vec![15, 8, 22, 3, 11, 27, 6, 19]);
//! assert!(heap.is_heap());
//! assert_eq!(heap.front(), Ok(&27));
//!
//! // Heap sort leaves the elements ascending, which is no longer a max-heap.
//! heap.sort();
//! assert_eq!(heap.as_slice(), [3, 6, 8, 11, 15, 19, 22, 27]);
//! assert!(!heap.is_heap());
//!
//! // Heap operations must not be used again until the order is rebuilt.
//! heap.heapify();
//! assert_eq!(heap.remove_root(), Ok(27));
//! ```
//!
//! [`PriorityQueue`]: crate::PriorityQueue

use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::mem::swap;

use alloc::slice;
use alloc::vec::{self, Vec};

use crate::container::{Clearable, Heap, Linear, Sortable};
use crate::order::{OrdTotalOrder, TotalOrder};
use crate::storage::{Growth, Storage};
use crate::{Error, Result};


/// An array-backed binary heap.
///
/// This will be a max-heap with respect to its order `O`: every element is
/// ordered at or after each of its children, so the element at position 0
/// is a greatest one.
///
/// Unlike [`PriorityQueue`], a `BinaryHeap` does not keep that invariant
/// unconditionally. [`insert`], [`remove_root`] and [`heapify`] establish or
/// preserve it; [`sort`] deliberately destroys it, leaving the elements in
/// ascending order. After sorting, [`heapify`] must be called before the heap
/// is used as a heap again.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by `O`, changes
/// while it is in the heap. The behavior resulting from such a logic error is
/// not specified but will be encapsulated to the `BinaryHeap` that observed it
/// and will not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use mound::BinaryHeap;
///
/// let mut heap = BinaryHeap::new();
///
/// heap.insert(1);
/// heap.insert(5);
/// heap.insert(2);
///
/// // The greatest element is always at the front.
/// assert_eq!(heap.front(), Ok(&5));
/// assert_eq!(heap.len(), 3);
///
/// // Iteration follows the raw layout, which is not sorted order.
/// for x in &heap {
///     println!("{x}");
/// }
///
/// assert_eq!(heap.remove_root(), Ok(5));
/// assert_eq!(heap.remove_root(), Ok(2));
/// assert_eq!(heap.remove_root(), Ok(1));
/// assert!(heap.remove_root().is_err());
/// ```
///
/// A `BinaryHeap` over a custom order:
///
/// ```
/// use mound::{order::{OrdTotalOrder, Reversed}, BinaryHeap};
///
/// let mut heap = BinaryHeap::from_vec_with_order(vec![4, 9, 1], Reversed(OrdTotalOrder));
/// assert_eq!(heap.front(), Ok(&1));
///
/// // "Ascending" is by the heap's order, so a reversed heap sorts descending.
/// heap.sort();
/// assert_eq!(heap.as_slice(), [9, 4, 1]);
/// ```
///
/// # Time complexity
///
/// | [insert]  | [remove_root] | [front] | [heapify] | [sort]            |
/// |-----------|---------------|---------|-----------|-------------------|
/// | *O*(1)~   | *O*(log(*n*)) | *O*(1)  | *O*(*n*)  | *O*(*n* log(*n*)) |
///
/// The value for `insert` is an expected cost under [`Growth::Amortized`];
/// under [`Growth::Exact`] every insertion and removal also reallocates.
///
/// [`PriorityQueue`]: crate::PriorityQueue
/// [`insert`]: BinaryHeap::insert
/// [insert]: BinaryHeap::insert
/// [`remove_root`]: BinaryHeap::remove_root
/// [remove_root]: BinaryHeap::remove_root
/// [front]: BinaryHeap::front
/// [`heapify`]: BinaryHeap::heapify
/// [heapify]: BinaryHeap::heapify
/// [`sort`]: BinaryHeap::sort
/// [sort]: BinaryHeap::sort
pub struct BinaryHeap<T, O = OrdTotalOrder> {
    data: Storage<T>,
    order: O,
}

impl<T: Clone, O: Clone> Clone for BinaryHeap<T, O> {
    fn clone(&self) -> Self {
        BinaryHeap { data: self.data.clone(), order: self.order.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.order.clone_from(&source.order);
    }
}

impl<T, O: TotalOrder<T> + Default> Default for BinaryHeap<T, O> {
    /// Creates an empty `BinaryHeap<T>`.
    #[inline]
    fn default() -> BinaryHeap<T, O> {
        BinaryHeap::with_order(O::default())
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Heaps are equal when their raw layouts are, position by position.
impl<T: PartialEq, O> PartialEq for BinaryHeap<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq, O> Eq for BinaryHeap<T, O> {}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty `BinaryHeap` as a max-heap under [`Ord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::BinaryHeap;
    /// let mut heap = BinaryHeap::new();
    /// heap.insert(4);
    /// ```
    #[must_use]
    pub fn new() -> BinaryHeap<T> {
        BinaryHeap::with_order(OrdTotalOrder)
    }

    /// Creates an empty `BinaryHeap` with at least the specified capacity.
    ///
    /// Under [`Growth::Exact`] the reservation lasts only until the first
    /// insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::BinaryHeap;
    /// let mut heap = BinaryHeap::with_capacity(10);
    /// assert!(heap.capacity() >= 10);
    /// heap.insert(4);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> BinaryHeap<T> {
        BinaryHeap { data: Storage::with_capacity(Growth::default(), capacity), order: OrdTotalOrder }
    }

    /// Creates an empty `BinaryHeap` whose storage follows `growth`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::{storage::Growth, BinaryHeap};
    /// let mut heap = BinaryHeap::with_growth(Growth::Exact);
    /// heap.insert(4);
    /// heap.insert(7);
    /// assert_eq!(heap.capacity(), 2);
    /// ```
    #[must_use]
    pub fn with_growth(growth: Growth) -> BinaryHeap<T> {
        BinaryHeap::with_order_and_growth(OrdTotalOrder, growth)
    }

    /// Creates a `BinaryHeap` holding `len` default values.
    ///
    /// Equal elements trivially form a heap, so no reordering takes place.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::BinaryHeap;
    /// let heap: BinaryHeap<u32> = BinaryHeap::with_len(3);
    /// assert_eq!(heap.as_slice(), [0, 0, 0]);
    /// assert!(heap.is_heap());
    /// ```
    #[must_use]
    pub fn with_len(len: usize) -> BinaryHeap<T>
    where
        T: Default,
    {
        let mut data = Storage::new(Growth::default());
        data.resize(len);
        BinaryHeap { data, order: OrdTotalOrder }
    }

    /// Builds a heap out of clones of the elements of `slice`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::BinaryHeap;
    ///
    /// let source = [String::from("pear"), String::from("apple")];
    /// let heap = BinaryHeap::from_slice(&source);
    /// assert_eq!(heap.front().map(String::as_str), Ok("pear"));
    /// assert_eq!(source.len(), 2);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> BinaryHeap<T>
    where
        T: Clone,
    {
        BinaryHeap::from_slice_with_order(slice, OrdTotalOrder)
    }
}

impl<T, O: TotalOrder<T>> BinaryHeap<T, O> {
    /// Creates an empty `BinaryHeap` ordered by `order`, using the default
    /// [`Growth`] policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::{order::{OrdTotalOrder, Reversed}, BinaryHeap};
    /// let mut heap = BinaryHeap::with_order(Reversed(OrdTotalOrder));
    /// heap.insert(4);
    /// heap.insert(1);
    /// assert_eq!(heap.front(), Ok(&1));
    /// ```
    #[must_use]
    pub fn with_order(order: O) -> BinaryHeap<T, O> {
        BinaryHeap::with_order_and_growth(order, Growth::default())
    }

    /// Creates an empty `BinaryHeap` ordered by `order` whose storage follows
    /// `growth`.
    #[must_use]
    pub fn with_order_and_growth(order: O, growth: Growth) -> BinaryHeap<T, O> {
        BinaryHeap { data: Storage::new(growth), order }
    }

    /// Builds a heap out of the elements of `vec`, ordered by `order`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    #[must_use]
    pub fn from_vec_with_order(vec: Vec<T>, order: O) -> BinaryHeap<T, O> {
        let mut heap = BinaryHeap { data: Storage::from_vec(vec, Growth::default()), order };
        heap.heapify();
        heap
    }

    /// Builds a heap out of clones of the elements of `slice`, ordered by
    /// `order`.
    #[must_use]
    pub fn from_slice_with_order(slice: &[T], order: O) -> BinaryHeap<T, O>
    where
        T: Clone,
    {
        BinaryHeap::from_vec_with_order(slice.to_vec(), order)
    }

    /// Whether the elements are in max-heap order, i.e. every element is
    /// ordered at or after each of its children.
    ///
    /// Empty and single-element heaps are always in heap order.
    ///
    /// # Time complexity
    ///
    /// *O*(*n*); stops at the first violation.
    #[must_use]
    pub fn is_heap(&self) -> bool {
        let data = self.data.as_slice();
        (1..data.len()).all(|child| self.order.ge(&data[(child - 1) / 2], &data[child]))
    }

    /// Rearranges arbitrary contents into max-heap order.
    ///
    /// Works bottom-up, sifting down every internal node from the last one to
    /// the root.
    ///
    /// # Time complexity
    ///
    /// *O*(*n*).
    pub fn heapify(&mut self) {
        let len = self.len();
        log::trace!("heapifying {len} elements");

        let mut n = len / 2;
        while n > 0 {
            n -= 1;
            self.sift_down(n, len);
        }
    }

    /// Take the element at `pos` and move it up the heap while it is ordered
    /// strictly after its parent.  Returns the element's final position.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`.
    pub fn sift_up(&mut self, mut pos: usize) -> usize {
        assert!(pos < self.len(), "sift position {pos} out of range for length {}", self.len());
        let data = self.data.as_mut_slice();

        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.order.le(&data[pos], &data[parent]) {
                break;
            }
            data.swap(pos, parent);
            pos = parent;
        }

        pos
    }

    /// Take the element at `pos` and move it down the heap while a child is
    /// ordered strictly after it, considering only positions below `end` to be
    /// part of the heap.  Returns the element's final position.
    ///
    /// The element is exchanged with the greater of its children; on a tie the
    /// left child wins.
    ///
    /// # Panics
    ///
    /// Panics if `end > self.len()`.
    pub fn sift_down(&mut self, mut pos: usize, end: usize) -> usize {
        assert!(end <= self.len(), "sift boundary {end} out of range for length {}", self.len());
        let data = &mut self.data.as_mut_slice()[..end];

        // `pos` has at least one child exactly when `pos < end / 2`, which
        // also keeps `2 * pos + 2` from overflowing.
        while pos < end / 2 {
            let left = 2 * pos + 1;
            let right = left + 1;

            let mut largest = pos;
            if self.order.gt(&data[left], &data[largest]) {
                largest = left;
            }
            if right < end && self.order.gt(&data[right], &data[largest]) {
                largest = right;
            }

            // if we are already in order, stop.
            if largest == pos {
                break;
            }

            data.swap(pos, largest);
            pos = largest;
        }

        pos
    }

    /// [`sift_down`](Self::sift_down) over the whole heap.  A `pos` at or
    /// past the end is left where it is.
    pub fn sift_down_to_end(&mut self, pos: usize) -> usize {
        let len = self.len();
        self.sift_down(pos, len)
    }

    /// Sorts the elements in place into non-decreasing order, by heap sort.
    ///
    /// **This leaves the heap out of heap order** (unless it has fewer than
    /// two distinct elements): the greatest element ends up last rather than
    /// first. Call [`heapify`](Self::heapify) before using it as a heap again.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::from([1, 2, 4, 5, 7]);
    /// heap.insert(6);
    /// heap.insert(3);
    ///
    /// heap.sort();
    /// assert_eq!(heap.as_slice(), [1, 2, 3, 4, 5, 6, 7]);
    /// assert!(!heap.is_heap());
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(*n* \* log(*n*)).
    pub fn sort(&mut self) {
        self.heapify();
        log::trace!("heap sorting {} elements", self.len());

        let mut end = self.len();
        while end > 1 {
            end -= 1;
            self.data.as_mut_slice().swap(0, end);
            self.sift_down(0, end);
        }
    }

    /// Consumes the `BinaryHeap` and returns a vector in sorted (ascending)
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::BinaryHeap;
    ///
    /// let heap = BinaryHeap::from([5, 1, 4]);
    /// assert_eq!(heap.into_sorted_vec(), [1, 4, 5]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.sort();
        self.into_vec()
    }

    /// Pushes an item onto the binary heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::BinaryHeap;
    /// let mut heap = BinaryHeap::new();
    /// heap.insert(3);
    /// heap.insert(5);
    /// heap.insert(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.front(), Ok(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The expected cost of `insert`, averaged over every possible ordering of
    /// the elements being pushed, and over a sufficiently large number of
    /// pushes, is *O*(1). In the worst case, elements are pushed in ascending
    /// sorted order and the cost per push is *O*(log(*n*)), plus the cost of
    /// any reallocation.
    pub fn insert(&mut self, item: T) {
        let old_len = self.len();
        self.data.push(item);
        self.sift_up(old_len);
    }

    /// Removes the element at position 0 (the greatest one, provided the
    /// heap is in heap order) and returns it.
    ///
    /// The last element takes its place and is sifted down.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::{BinaryHeap, Error};
    /// let mut heap = BinaryHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.remove_root(), Ok(3));
    /// assert_eq!(heap.remove_root(), Ok(1));
    /// assert_eq!(heap.remove_root(), Err(Error::Empty));
    /// ```
    pub fn remove_root(&mut self) -> Result<T> {
        let mut item = self.data.pop().ok_or(Error::Empty)?;
        if let Some(root) = self.data.as_mut_slice().first_mut() {
            swap(&mut item, root);
            self.sift_down_to_end(0);
        }
        Ok(item)
    }

    pub(crate) fn storage_mut(&mut self) -> &mut Storage<T> {
        &mut self.data
    }
}

impl<T, O> BinaryHeap<T, O> {
    /// Returns an iterator visiting all values in the underlying storage, in
    /// layout order.  Reverse it for a back-to-front traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::BinaryHeap;
    /// let heap = BinaryHeap::from([1, 2, 3, 4]);
    ///
    /// assert_eq!(heap.iter().copied().collect::<Vec<_>>(), [4, 2, 3, 1]);
    /// assert_eq!(heap.iter().rev().copied().collect::<Vec<_>>(), [1, 3, 2, 4]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// The element at `index` in layout order.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.data.get(index)
    }

    /// Returns a mutable reference to the element at `index` in layout order.
    ///
    /// **Writing through it may leave the heap out of heap order**, just like
    /// [`sort`](Self::sort) does. Call [`heapify`](Self::heapify) before
    /// using it as a heap again.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::from([3, 5, 1]);
    /// *heap.get_mut(2)? = 10;
    /// assert!(!heap.is_heap());
    ///
    /// heap.heapify();
    /// assert_eq!(heap.front(), Ok(&10));
    /// # Ok::<(), mound::Error>(())
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.data.get_mut(index)
    }

    /// Returns an iterator that allows modifying each value, in layout order.
    /// Reverse it for a back-to-front traversal.
    ///
    /// **This may leave the heap out of heap order.** Call
    /// [`heapify`](Self::heapify) before using it as a heap again.
    ///
    /// # Examples
    ///
    /// ```
    /// use mound::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::from([1, 2, 3]);
    /// for x in heap.iter_mut() {
    ///     *x = 10 - *x;
    /// }
    /// assert_eq!(heap.as_slice(), [7, 8, 9]);
    /// assert!(!heap.is_heap());
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { iter: self.data.iter_mut() }
    }

    /// The element at position 0, which is the greatest one while the heap is
    /// in heap order.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the heap is empty.
    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(Error::Empty)
    }

    /// The element at the last position.  This is not, in general, the least
    /// element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the heap is empty.
    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(Error::Empty)
    }

    /// Whether any element equals `value`.
    ///
    /// # Time complexity
    ///
    /// *O*(*n*): the heap layout gives no shortcut for membership.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Borrow this heap's order.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the number of elements the binary heap can hold without
    /// reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The growth policy of the heap's storage.
    #[must_use]
    pub fn growth(&self) -> Growth {
        self.data.growth()
    }

    /// Replaces the growth policy of the heap's storage.
    pub fn set_growth(&mut self, growth: Growth) {
        self.data.set_growth(growth);
    }

    /// Returns a slice of all values in the underlying storage, in layout
    /// order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Consumes the `BinaryHeap` and returns the underlying vector in layout
    /// order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the length of the binary heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the binary heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all items from the binary heap.
    pub fn clear(&mut self) {
        log::trace!("clearing heap of {} elements", self.len());
        self.data.clear();
    }
}

impl<T, O> Linear for BinaryHeap<T, O> {
    type Item = T;

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn get(&self, index: usize) -> Result<&T> {
        BinaryHeap::get(self, index)
    }

    fn front(&self) -> Result<&T> {
        BinaryHeap::front(self)
    }

    fn back(&self) -> Result<&T> {
        BinaryHeap::back(self)
    }
}

impl<T, O> Clearable for BinaryHeap<T, O> {
    fn clear(&mut self) {
        BinaryHeap::clear(self);
    }
}

impl<T, O: TotalOrder<T>> Sortable for BinaryHeap<T, O> {
    fn sort(&mut self) {
        BinaryHeap::sort(self);
    }
}

impl<T, O: TotalOrder<T>> Heap for BinaryHeap<T, O> {
    fn is_heap(&self) -> bool {
        BinaryHeap::is_heap(self)
    }

    fn heapify(&mut self) {
        BinaryHeap::heapify(self);
    }
}

/// An iterator over the elements of a `BinaryHeap`.
///
/// This `struct` is created by [`BinaryHeap::iter()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a `BinaryHeap`.
///
/// This `struct` is created by [`BinaryHeap::iter_mut()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    iter: slice::IterMut<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.iter.as_slice()).finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a `BinaryHeap`.
///
/// This `struct` is created by [`BinaryHeap::into_iter()`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    /// Converts a `Vec<T>` into a `BinaryHeap<T>`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> BinaryHeap<T> {
        BinaryHeap::from_vec_with_order(vec, OrdTotalOrder)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BinaryHeap<T> {
    /// ```
    /// use mound::BinaryHeap;
    ///
    /// let mut h1 = BinaryHeap::from([1, 4, 2, 3]);
    /// let mut h2: BinaryHeap<_> = [1, 4, 2, 3].into_iter().collect();
    /// while let Ok(a) = h1.remove_root() {
    ///     assert_eq!(h2.remove_root(), Ok(a));
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, O> From<BinaryHeap<T, O>> for Vec<T> {
    /// Converts a `BinaryHeap<T>` into a `Vec<T>`.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: BinaryHeap<T, O>) -> Vec<T> {
        heap.data.into_vec()
    }
}

impl<T, O: TotalOrder<T> + Default> FromIterator<T> for BinaryHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> BinaryHeap<T, O> {
        BinaryHeap::from_vec_with_order(iter.into_iter().collect(), O::default())
    }
}

impl<T, O> IntoIterator for BinaryHeap<T, O> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of
    /// the binary heap in layout order. The binary heap cannot be used after
    /// calling this.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_vec().into_iter() }
    }
}

impl<'a, T, O> IntoIterator for &'a BinaryHeap<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, O> IntoIterator for &'a mut BinaryHeap<T, O> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T, O: TotalOrder<T>> Extend<T> for BinaryHeap<T, O> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();
        if self.growth() == Growth::Amortized {
            self.data.reserve(lower);
        }
        iterator.for_each(move |elem| self.insert(elem));
    }
}

impl<'a, T: 'a + Copy, O: TotalOrder<T>> Extend<&'a T> for BinaryHeap<T, O> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}
