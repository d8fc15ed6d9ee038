//! Capabilities shared by the heap and the priority queue.
//!
//! Rather than layering the collections on a hierarchy of base types, each
//! collection implements the capabilities it actually provides:
//!
//! | capability     | [`BinaryHeap`] | [`PriorityQueue`] |
//! |----------------|:--------------:|:-----------------:|
//! | [`Linear`]     | ✓              | ✓                 |
//! | [`Clearable`]  | ✓              | ✓                 |
//! | [`Sortable`]   | ✓              |                   |
//! | [`Heap`]       | ✓              |                   |
//! | [`Queue`]      |                | ✓                 |
//!
//! [`BinaryHeap`]: crate::BinaryHeap
//! [`PriorityQueue`]: crate::PriorityQueue

use crate::{Error, Result};

/// Read-only positional access to a sequence.
///
/// Positions refer to the raw layout of the elements, which for the
/// collections in this crate is heap layout, not sorted order.
pub trait Linear {
    /// The element type.
    type Item;

    /// The number of elements.
    fn len(&self) -> usize;

    /// Whether there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<&Self::Item>;

    /// The element at position 0.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if there are no elements.
    fn front(&self) -> Result<&Self::Item> {
        self.get(0).map_err(|_| Error::Empty)
    }

    /// The element at the last position.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if there are no elements.
    fn back(&self) -> Result<&Self::Item> {
        let last = self.len().checked_sub(1).ok_or(Error::Empty)?;
        self.get(last)
    }
}

/// A collection that can be emptied.
pub trait Clearable {
    /// Removes every element.
    fn clear(&mut self);
}

/// A sequence that can be put into non-decreasing order in place.
pub trait Sortable {
    /// Sorts the elements in place.
    fn sort(&mut self);
}

/// A sequence that can be checked for, and brought into, max-heap order.
pub trait Heap {
    /// Whether every element is ordered at or after each of its children.
    fn is_heap(&self) -> bool;

    /// Rearranges the elements into max-heap order.
    fn heapify(&mut self);
}

/// A max-priority queue.
pub trait Queue {
    /// The element type.
    type Item;

    /// The element of highest priority.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    fn tip(&self) -> Result<&Self::Item>;

    /// Removes the element of highest priority.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    fn remove_tip(&mut self) -> Result<()>;

    /// Removes and returns the element of highest priority.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    fn tip_n_remove(&mut self) -> Result<Self::Item>;

    /// Adds an element.
    fn insert(&mut self, value: Self::Item);

    /// Replaces the element at `index` with `value`, which may have any
    /// priority relative to the element it replaces.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index` is not less than the queue's
    /// length; `value` is dropped.
    fn change(&mut self, index: usize, value: Self::Item) -> Result<()>;
}
