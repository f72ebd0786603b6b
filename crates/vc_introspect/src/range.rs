//! Type-level integer ranges.
//!
//! A field index is not a runtime value here; it is a type. [`Z`] is zero and
//! [`S<N>`] is `N + 1`, so the third field of a record is addressed as
//! `S<S<Z>>`. A [`Range`] pairs a cursor with the number of indices left,
//! which keeps "advance by one" a plain type substitution that the compiler
//! resolves entirely during monomorphization.
//!
//! ## Menu
//!
//! - [`Nat`]: a type-level natural number.
//! - [`Range`]: the half-open interval `[Cursor, Cursor + Remaining)`.
//! - [`Upto`]: shorthand for `[0, N)`.
//! - [`StaticRange`]: constants describing a range.
//! - [`Advance`]: the successor of a non-empty range.
//!
//! # Examples
//!
//! ```
//! use vc_introspect::range::{Advance, Range, S, StaticRange, Upto, Z};
//!
//! type Two = S<S<Z>>;
//!
//! assert_eq!(<Upto<Two> as StaticRange>::START, 0);
//! assert_eq!(<Upto<Two> as StaticRange>::FINISH, 2);
//! assert!(!<Upto<Two> as StaticRange>::IS_DONE);
//!
//! type Last = <Upto<Two> as Advance>::Next;
//! assert_eq!(<Last as StaticRange>::VALUE, 1);
//! assert!(<Last as StaticRange>::IS_DONE);
//! # let _ = Range::<Z, Z>::new();
//! ```

use core::fmt;
use core::marker::PhantomData;

// -----------------------------------------------------------------------------
// Nat

/// A natural number encoded in the type system.
///
/// Only [`Z`] and [`S`] implement this trait.
pub trait Nat: sealed::Sealed + 'static {
    /// The value of this number.
    const VALUE: usize;
}

/// Type-level zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Z;

/// Type-level successor, `N + 1`.
pub struct S<N>(PhantomData<N>);

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

// Manual impls: derives would require `N: Trait` for a phantom parameter.
impl<N> fmt::Debug for S<N>
where
    S<N>: Nat,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S({})", <Self as Nat>::VALUE)
    }
}

impl<N> Default for S<N> {
    #[inline]
    fn default() -> Self {
        S(PhantomData)
    }
}

impl<N> Clone for S<N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for S<N> {}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Z {}
    impl<N: Sealed> Sealed for super::S<N> {}
}

// -----------------------------------------------------------------------------
// Range

/// The half-open range `[Cursor, Cursor + Remaining)`.
///
/// Storing the remaining length instead of the end bound keeps the
/// unrolling impls disjoint: a range is either `Range<C, Z>` (empty) or
/// `Range<C, S<R>>` (has a current value).
pub struct Range<Cursor, Remaining>(PhantomData<(Cursor, Remaining)>);

/// The range `[0, N)`.
pub type Upto<N> = Range<Z, N>;

impl<C, R> Range<C, R> {
    /// Creates the (zero-sized) range value.
    #[inline(always)]
    pub const fn new() -> Self {
        Range(PhantomData)
    }
}

impl<C, R> Default for Range<C, R> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R> Clone for Range<C, R> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, R> Copy for Range<C, R> {}

impl<C: Nat, R: Nat> fmt::Debug for Range<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", C::VALUE, C::VALUE + R::VALUE)
    }
}

/// Compile-time description of a [`Range`].
pub trait StaticRange {
    /// Inclusive lower bound.
    const START: usize;
    /// Exclusive upper bound.
    const FINISH: usize;
    /// Number of values in the range.
    const LEN: usize = Self::FINISH - Self::START;
    /// The current value, equal to [`START`](StaticRange::START).
    const VALUE: usize = Self::START;
    /// `true` when the range holds no value.
    const IS_EMPTY: bool = Self::LEN == 0;
    /// `true` exactly when `START + 1 == FINISH`.
    const IS_DONE: bool = Self::START + 1 == Self::FINISH;
}

impl<C: Nat, R: Nat> StaticRange for Range<C, R> {
    const START: usize = C::VALUE;
    const FINISH: usize = C::VALUE + R::VALUE;
}

/// Moves a non-empty range forward by one.
///
/// The empty range does not implement this trait, so advancing past the
/// end is rejected by the type checker.
pub trait Advance: StaticRange {
    /// The current value as a type.
    type Current: Nat;
    /// The range starting one past [`Current`](Advance::Current).
    type Next: StaticRange;
}

impl<C: Nat, R: Nat> Advance for Range<C, S<R>> {
    type Current = C;
    type Next = Range<S<C>, R>;
}

#[cfg(test)]
mod tests {
    use super::{Advance, Nat, Range, S, StaticRange, Upto, Z};

    type N3 = S<S<S<Z>>>;

    #[test]
    fn nat_values() {
        assert_eq!(Z::VALUE, 0);
        assert_eq!(<S<Z>>::VALUE, 1);
        assert_eq!(N3::VALUE, 3);
    }

    #[test]
    fn range_bounds() {
        type R = Range<S<Z>, N3>;
        assert_eq!(<R as StaticRange>::START, 1);
        assert_eq!(<R as StaticRange>::FINISH, 4);
        assert_eq!(<R as StaticRange>::LEN, 3);
        assert!(!<R as StaticRange>::IS_EMPTY);
        assert!(!<R as StaticRange>::IS_DONE);
    }

    #[test]
    fn advance_reaches_done() {
        type R0 = Upto<N3>;
        type R1 = <R0 as Advance>::Next;
        type R2 = <R1 as Advance>::Next;
        type R3 = <R2 as Advance>::Next;

        assert_eq!(<<R1 as Advance>::Current as Nat>::VALUE, 1);
        assert!(!<R1 as StaticRange>::IS_DONE);
        assert!(<R2 as StaticRange>::IS_DONE);
        assert_eq!(<R2 as StaticRange>::VALUE, 2);
        assert!(<R3 as StaticRange>::IS_EMPTY);
    }

    #[test]
    fn empty_range() {
        assert!(<Upto<Z> as StaticRange>::IS_EMPTY);
        assert!(!<Upto<Z> as StaticRange>::IS_DONE);
        assert_eq!(alloc::format!("{:?}", Range::<S<Z>, S<Z>>::new()), "1..2");
    }
}
