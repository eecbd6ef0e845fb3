//! Flattening conversion into a target union.
//!
//! [`FlattenInto`] is the engine behind both widening and dispatch: a value
//! "dissolves" into a target [`ErrorUnion`] by recursively unwrapping
//! whatever union layers surround it and re-tagging the innermost concrete
//! payload at its position in the target set. Three kinds of value dissolve:
//!
//! * a plain value that is a declared alternative of the target;
//! * an [`ErrorUnion`] each of whose alternatives dissolves into the target
//!   (so unions nested inside unions flatten all the way down);
//! * a [`Result`] both of whose sides dissolve into the target (success and
//!   error payloads are routed uniformly, by type).
//!
//! The recursion is structural over the type, so it always terminates, and
//! every reachable payload must land somewhere in the target set or the
//! program is rejected. The [`dispatch!`](crate::dispatch!) macro builds its
//! target set from the handler parameter types and leans on exactly that
//! rejection for exhaustiveness checking.
//!
//! The `Marker` parameter records which of the three routes a conversion
//! takes. It is found by inference and never written out; it exists so the
//! three blanket impls stay coherent. When more than one route would apply,
//! say for a union that is simultaneously a declared alternative of the
//! target, inference reports the ambiguity instead of picking silently.
//!
//! # Examples
//!
//! ```
//! use error_union::{ErrorUnion, FlattenInto};
//!
//! #[derive(Debug, PartialEq)]
//! struct Parse;
//! #[derive(Debug, PartialEq)]
//! struct Io;
//!
//! // A nested union dissolves to its innermost case.
//! let nested: ErrorUnion<(Parse, ErrorUnion<(Io,)>)> =
//!     ErrorUnion::new(ErrorUnion::<(Io,)>::new(Io));
//! let flat: ErrorUnion<(Parse, Io)> = nested.flatten_into();
//! assert_eq!(flat.get::<Io, _>(), Some(&Io));
//! ```

use core::marker::PhantomData;

use crate::union::list::{CaseList, CaseNil, Inject};
use crate::union::set::UnionSet;
use crate::union::ErrorUnion;

/// Marker: injected directly as the declared alternative at position `I`.
pub struct AsCase<I>(PhantomData<I>);

/// Marker: a union dissolved alternative-by-alternative via `M`.
pub struct ByCases<M>(PhantomData<M>);

/// Marker: a `Result` split into its success and error routes.
pub struct SplitCases<MA, MB>(PhantomData<(MA, MB)>);

/// Marker list terminator for [`ByCases`].
pub struct NilCases;

/// Marker list cell for [`ByCases`].
pub struct ConsCases<MH, MT>(PhantomData<(MH, MT)>);

/// Conversion of a (possibly nested) union value into a target union.
///
/// `Marker` is inferred; call sites name only the target, usually through a
/// binding annotation or an enclosing return type. See the [module
/// docs](self) for the three conversion routes.
pub trait FlattenInto<Target, Marker> {
    /// Re-tags `self`'s innermost concrete payload in `Target`'s set.
    fn flatten_into(self) -> Target;
}

impl<T, S, I> FlattenInto<ErrorUnion<S>, AsCase<I>> for T
where
    S: UnionSet,
    S::Repr: Inject<T, I>,
{
    #[inline]
    fn flatten_into(self) -> ErrorUnion<S> {
        ErrorUnion::new(self)
    }
}

impl<Src, S, M> FlattenInto<ErrorUnion<S>, ByCases<M>> for ErrorUnion<Src>
where
    Src: UnionSet,
    S: UnionSet,
    Src::Repr: DissolveList<ErrorUnion<S>, M>,
{
    #[inline]
    fn flatten_into(self) -> ErrorUnion<S> {
        self.into_repr().dissolve()
    }
}

impl<T, E, S, MA, MB> FlattenInto<ErrorUnion<S>, SplitCases<MA, MB>> for Result<T, E>
where
    S: UnionSet,
    T: FlattenInto<ErrorUnion<S>, MA>,
    E: FlattenInto<ErrorUnion<S>, MB>,
{
    #[inline]
    fn flatten_into(self) -> ErrorUnion<S> {
        match self {
            Ok(value) => value.flatten_into(),
            Err(error) => error.flatten_into(),
        }
    }
}

/// Case-by-case dissolution of a case list into a target union.
///
/// Each element recurses through [`FlattenInto`], so an alternative that is
/// itself a union keeps dissolving until a concrete payload is reached.
pub trait DissolveList<Target, M> {
    /// Converts the live alternative into the target.
    fn dissolve(self) -> Target;
}

impl<Target> DissolveList<Target, NilCases> for CaseNil {
    #[inline]
    fn dissolve(self) -> Target {
        match self {}
    }
}

impl<H, Rest, Target, MH, MT> DissolveList<Target, ConsCases<MH, MT>> for CaseList<H, Rest>
where
    H: FlattenInto<Target, MH>,
    Rest: DissolveList<Target, MT>,
{
    #[inline]
    fn dissolve(self) -> Target {
        match self {
            CaseList::Head(head) => head.flatten_into(),
            CaseList::Tail(rest) => rest.dissolve(),
        }
    }
}
