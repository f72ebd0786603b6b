//! Loop unrolling over a [`Range`](crate::range::Range).
//!
//! [`Unroll`] is implemented recursively on the range type: the empty range
//! yields `0`, a non-empty range calls the [`IndexFn`] for its current index
//! and adds the result of unrolling its successor. Each level is its own
//! monomorphized function marked `#[inline(always)]`, so after compilation
//! a visit over `N` fields is `N` direct calls with no loop counter and no
//! recursion left at run time.
//!
//! Each level is also one step of trait resolution, so a range longer than
//! about a hundred indices needs a higher `#![recursion_limit]` in the
//! calling crate.
//!
//! # Examples
//!
//! ```
//! use vc_introspect::range::{Nat, Range, S, Z};
//! use vc_introspect::unroll::{IndexFn, for_each};
//!
//! struct Sum;
//!
//! impl<I: Nat> IndexFn<I, i32> for Sum {
//!     fn call(&mut self, scale: i32) -> i32 {
//!         I::VALUE as i32 * scale
//!     }
//! }
//!
//! // 2 + 3 + 4, each scaled by 10.
//! let total = for_each::<Range<S<S<Z>>, S<S<S<Z>>>>, _, _>(&mut Sum, 10);
//! assert_eq!(total, 90);
//! ```

use crate::range::{Nat, Range, S, Z};

/// A callable invoked once for index `I`.
///
/// Implement it generically over `I` to run the same logic for every index,
/// or add bounds on `I` (such as `R: FieldAt<I>`) to reach index-specific
/// items.
pub trait IndexFn<I: Nat, A> {
    /// Runs the body for index `I`.
    fn call(&mut self, args: A) -> i32;
}

/// Compile-time iteration over a range.
pub trait Unroll<F, A> {
    /// Calls `func` for every index of the range in ascending order and
    /// returns the sum of the results.
    fn unroll(func: &mut F, args: A) -> i32;
}

impl<C: Nat, F, A> Unroll<F, A> for Range<C, Z> {
    #[inline(always)]
    fn unroll(_func: &mut F, _args: A) -> i32 {
        0
    }
}

impl<C: Nat, R: Nat, F, A> Unroll<F, A> for Range<C, S<R>>
where
    A: Clone,
    F: IndexFn<C, A>,
    Range<S<C>, R>: Unroll<F, A>,
{
    #[inline(always)]
    fn unroll(func: &mut F, args: A) -> i32 {
        let ret = func.call(args.clone());
        ret + <Range<S<C>, R> as Unroll<F, A>>::unroll(func, args)
    }
}

/// Unrolls `func` over the range `Rg`.
///
/// An empty range returns `0` without calling `func`.
#[inline(always)]
pub fn for_each<Rg, F, A>(func: &mut F, args: A) -> i32
where
    Rg: Unroll<F, A>,
{
    Rg::unroll(func, args)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{IndexFn, for_each};
    use crate::range::{Nat, Range, S, Upto, Z};

    type N4 = S<S<S<S<Z>>>>;

    #[derive(Default)]
    struct Collect(Vec<usize>);

    impl<I: Nat> IndexFn<I, usize> for Collect {
        fn call(&mut self, offset: usize) -> i32 {
            self.0.push(I::VALUE + offset);
            1
        }
    }

    #[test]
    fn ascending_order() {
        let mut collect = Collect::default();
        let count = for_each::<Upto<N4>, _, _>(&mut collect, 0);
        assert_eq!(count, 4);
        assert_eq!(collect.0, [0, 1, 2, 3]);
    }

    #[test]
    fn offset_range() {
        let mut collect = Collect::default();
        let count = for_each::<Range<S<S<Z>>, S<Z>>, _, _>(&mut collect, 100);
        assert_eq!(count, 1);
        assert_eq!(collect.0, [102]);
    }

    #[test]
    fn empty_range_never_calls() {
        let mut collect = Collect::default();
        assert_eq!(for_each::<Upto<Z>, _, _>(&mut collect, 0), 0);
        assert_eq!(for_each::<Range<N4, Z>, _, _>(&mut collect, 0), 0);
        assert!(collect.0.is_empty());
    }

    #[test]
    fn results_are_summed() {
        struct Square;

        impl<I: Nat> IndexFn<I, ()> for Square {
            fn call(&mut self, _: ()) -> i32 {
                (I::VALUE * I::VALUE) as i32
            }
        }

        // 0 + 1 + 4 + 9
        assert_eq!(for_each::<Upto<N4>, _, _>(&mut Square, ()), 14);
    }
}
