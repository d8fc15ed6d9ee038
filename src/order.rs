//! Total orders that decide which element of a heap has the highest priority.
//!
//! A heap in this crate is a max-heap *with respect to its order*: the element
//! at the tip is one that no other element is [`gt`] by that order. The
//! [`OrdTotalOrder`] default makes the heaps behave as though they used the
//! [`Ord`] trait directly; [`Reversed`] turns any max-heap into a min-heap; and
//! [`OrderBy`] lifts a closure into an order so that priorities can be decided
//! at runtime.
//!
//! [`gt`]: TotalOrder::gt

use core::cmp::Ordering;
use core::fmt;

/// A total order over values of type `T`.
///
/// It is a logic error for an order to be inconsistent with itself, e.g. for
/// `cmp(a, b)` to change between calls while `a` and `b` are held in a heap.
/// The resulting behavior is unspecified but is confined to the heap that
/// observed it; it never results in undefined behavior.
pub trait TotalOrder<T: ?Sized> {
    /// Compares `this` with `that`.
    fn cmp(&self, this: &T, that: &T) -> Ordering;

    /// Whether `this` is ordered strictly before `that`.
    fn lt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_lt()
    }
    /// Whether `this` is ordered before or alongside `that`.
    fn le(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_le()
    }
    /// Whether `this` is ordered strictly after `that`.
    fn gt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_gt()
    }
    /// Whether `this` is ordered after or alongside `that`.
    fn ge(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_ge()
    }
}

/// A zero-sized total order that delegates to the [`Ord`] implementation of
/// the values being compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OrdTotalOrder;

impl<T: ?Sized + Ord> TotalOrder<T> for OrdTotalOrder {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }

    // The defaults are overridden so that `T`'s own `PartialOrd` comparisons
    // are used rather than ones derived from `Ord::cmp`.  For any `T` whose
    // implementations are consistent with one another this changes nothing.

    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
}

/// The reverse of another total order.
///
/// # Examples
///
/// ```
/// use mound::{order::{OrdTotalOrder, Reversed}, PriorityQueue};
///
/// let mut queue = PriorityQueue::with_order(Reversed(OrdTotalOrder));
/// queue.insert(5);
/// queue.insert(1);
/// queue.insert(3);
///
/// assert_eq!(queue.tip(), Ok(&1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<O = OrdTotalOrder>(pub O);

impl<T: ?Sized, O: TotalOrder<T>> TotalOrder<T> for Reversed<O> {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self.0.cmp(that, this)
    }

    fn lt(&self, this: &T, that: &T) -> bool {
        self.0.lt(that, this)
    }
    fn le(&self, this: &T, that: &T) -> bool {
        self.0.le(that, this)
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        self.0.gt(that, this)
    }
    fn ge(&self, this: &T, that: &T) -> bool {
        self.0.ge(that, this)
    }
}

/// A total order decided by a comparison closure.
///
/// # Examples
///
/// ```
/// use mound::{order::OrderBy, PriorityQueue};
///
/// // Even numbers first, then the larger value.
/// let mut queue = PriorityQueue::with_order(OrderBy(|a: &u32, b: &u32| {
///     (a % 2 == 0).cmp(&(b % 2 == 0)).then(a.cmp(b))
/// }));
/// queue.extend([7, 2, 9, 4]);
///
/// assert_eq!(queue.tip_n_remove(), Ok(4));
/// assert_eq!(queue.tip_n_remove(), Ok(2));
/// assert_eq!(queue.tip_n_remove(), Ok(9));
/// ```
#[derive(Clone, Copy)]
pub struct OrderBy<F>(pub F);

impl<F> fmt::Debug for OrderBy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OrderBy").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> TotalOrder<T> for OrderBy<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        (self.0)(this, that)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ord_total_order() {
        assert!(TotalOrder::lt(&OrdTotalOrder, &1, &2));
        assert!(TotalOrder::ge(&OrdTotalOrder, &2, &2));
        assert_eq!(TotalOrder::cmp(&OrdTotalOrder, "b", "a"), Ordering::Greater);
    }

    #[test]
    fn test_reversed() {
        let order = Reversed(OrdTotalOrder);
        assert!(order.gt(&1, &2));
        assert!(order.le(&3, &3));
        assert_eq!(order.cmp(&1, &2), Ordering::Greater);
        assert_eq!(Reversed(order).cmp(&1, &2), Ordering::Less);
    }

    #[test]
    fn test_order_by() {
        let by_len = OrderBy(|a: &&str, b: &&str| a.len().cmp(&b.len()));
        assert!(by_len.gt(&"three", &"two"));
        assert!(by_len.ge(&"one", &"two"));
        assert!(!by_len.lt(&"one", &"two"));
    }
}
