//! An array-backed binary max-heap, and the priority queue built directly on
//! top of it, that order their elements according to a specified [`TotalOrder`]
//! rather than the [`Ord`] trait.
//!
//! * [`BinaryHeap`] keeps its elements in a single resizable array read as a
//!   complete binary tree. It exposes the primitives that keep that tree in
//!   max-heap order (sifting up and down, bottom-up heapify) along with an
//!   in-place heap sort which, deliberately, leaves the array sorted rather
//!   than heap-ordered.
//! * [`PriorityQueue`] owns one `BinaryHeap` and sequences those primitives
//!   into max-priority-queue operations: reading, inserting and removing the
//!   tip, and changing the priority of any element in place. Every queue
//!   operation leaves the heap in heap order.
//!
//! Operations whose preconditions fail (an empty container, a position out of
//! range) return an [`Error`] rather than panicking.
//!
//! # Examples
//!
//! ```
//! use mound::{Error, PriorityQueue};
//!
//! let mut queue = PriorityQueue::from([15, 8, 22, 3, 11, 27, 6, 19]);
//! assert_eq!(queue.tip(), Ok(&27));
//!
//! // Raise the priority of the element currently holding 8.
//! let p = queue.iter().position(|&x| x == 8).unwrap();
//! queue.change(p, 100)?;
//! assert_eq!(queue.tip_n_remove(), Ok(100));
//!
//! queue.clear();
//! assert_eq!(queue.remove_tip(), Err(Error::Empty));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Features
//!
//! * `std`: links the standard library.  Without it the crate is `no_std` and
//!   needs only `alloc`.
//! * `exact_growth`: makes [`Growth::Exact`](storage::Growth::Exact) the
//!   default growth policy, so that every heap's allocation is kept at exactly
//!   its length.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![warn(missing_docs)]

extern crate alloc;

pub mod binary_heap;
pub mod container;
mod error;
pub mod order;
pub mod priority_queue;
pub mod storage;

pub use binary_heap::BinaryHeap;
pub use container::{Clearable, Heap, Linear, Queue, Sortable};
pub use error::{Error, Result};
pub use order::TotalOrder;
pub use priority_queue::PriorityQueue;

#[cfg(test)]
#[allow(dead_code)] // Not used in all configurations
pub(crate) mod test_helpers {
    /// Copied from `std::test_helpers::test_rng`, since these tests rely on the
    /// seed not being the same for every RNG invocation too.
    #[track_caller]
    pub(crate) fn test_rng() -> rand_xorshift::XorShiftRng {
        use std::hash::{BuildHasher, Hash, Hasher};
        let mut hasher = std::collections::hash_map::RandomState::new().build_hasher();
        std::panic::Location::caller().hash(&mut hasher);
        let hc64 = hasher.finish();
        let seed_vec =
            hc64.to_le_bytes().into_iter().chain(0u8..8).collect::<alloc::vec::Vec<u8>>();
        let seed: [u8; 16] = seed_vec.as_slice().try_into().unwrap();
        rand::SeedableRng::from_seed(seed)
    }
}
