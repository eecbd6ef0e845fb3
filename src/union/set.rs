//! Tuple-shaped alternative sets and their type-level bookkeeping.
//!
//! Alternative sets are written as plain tuples: `(ParseError, IoError)` is
//! the set of an [`ErrorUnion`](crate::ErrorUnion) with two declared
//! alternatives. [`UnionSet`] maps each tuple onto its
//! [`CaseList`](super::list::CaseList) representation; [`Subtract`] removes
//! one alternative from a set, which is what gives
//! [`narrow`](crate::ErrorUnion::narrow) its precisely-typed remainder.
//!
//! Sets of up to eight alternatives are supported. The empty tuple is a valid
//! set type (it backs the exhausted remainder of a fully-narrowed union) but
//! holds no values, so it can never be constructed.

use super::list::{CaseList, CaseNil, Here, There};

/// A closed, ordered set of error alternatives, written as a tuple.
///
/// Implemented for tuples of up to eight element types. The declaration order
/// of the tuple fixes the case indices reported by
/// [`case_index`](crate::ErrorUnion::case_index) and the matching order used
/// by the panic bridge.
pub trait UnionSet {
    /// The case-list representation backing the set.
    type Repr;
}

impl UnionSet for () {
    type Repr = CaseNil;
}

macro_rules! impl_union_set {
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl<$head $(, $tail)*> UnionSet for ($head, $($tail,)*) {
            type Repr = CaseList<$head, <($($tail,)*) as UnionSet>::Repr>;
        }
        impl_union_set!($($tail),*);
    };
}

impl_union_set!(E0, E1, E2, E3, E4, E5, E6, E7);

/// Removes the alternative `T` (at position `I`) from a set, naming the set
/// of everything that remains.
///
/// Like the position traits in [`list`](super::list), the index parameter is
/// found by inference; a set declaring `T` twice makes it ambiguous and the
/// program is rejected.
pub trait Subtract<T, I>: UnionSet {
    /// The declared set minus the extracted alternative.
    type Rest: UnionSet;
}

macro_rules! impl_subtract {
    (@step [$($pre:ident)*] [] [$($all:ident)*] $idx:ty) => {};
    (@step [$($pre:ident)*] [$cur:ident $($post:ident)*] [$($all:ident)*] $idx:ty) => {
        impl<$($all),*> Subtract<$cur, $idx> for ($($all,)*) {
            type Rest = ($($pre,)* $($post,)*);
        }
        impl_subtract!(@step [$($pre)* $cur] [$($post)*] [$($all)*] There<$idx>);
    };
    ($($all:ident),+) => {
        impl_subtract!(@step [] [$($all)*] [$($all)*] Here);
    };
}

impl_subtract!(E0);
impl_subtract!(E0, E1);
impl_subtract!(E0, E1, E2);
impl_subtract!(E0, E1, E2, E3);
impl_subtract!(E0, E1, E2, E3, E4);
impl_subtract!(E0, E1, E2, E3, E4, E5);
impl_subtract!(E0, E1, E2, E3, E4, E5, E6);
impl_subtract!(E0, E1, E2, E3, E4, E5, E6, E7);
