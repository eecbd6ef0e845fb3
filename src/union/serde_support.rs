//! Serde support for [`ErrorUnion`].
//!
//! A union serializes as a two-element tuple of `(case index, payload)`, the
//! index in declaration order. Deserialization reads the index first and
//! then decodes the payload as that alternative; an index past the declared
//! set is a data error. The encoding is stable under widening only when the
//! shared prefix of the two sets agrees, so unions should be (de)serialized
//! at one declared shape.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, DeserializeSeed, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::list::{CaseIndex, CaseList, CaseNil};
use super::set::UnionSet;
use super::ErrorUnion;

/// Serializes the live alternative of a case list.
pub trait SerializeCases {
    /// Serializes the live value, whichever position holds it.
    fn serialize_live<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>;
}

impl SerializeCases for CaseNil {
    fn serialize_live<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        match *self {}
    }
}

impl<H, Rest> SerializeCases for CaseList<H, Rest>
where
    H: Serialize,
    Rest: SerializeCases,
{
    fn serialize_live<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CaseList::Head(value) => value.serialize(serializer),
            CaseList::Tail(rest) => rest.serialize_live(serializer),
        }
    }
}

struct Live<'a, R>(&'a R);

impl<R: SerializeCases> Serialize for Live<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize_live(serializer)
    }
}

impl<S: UnionSet> Serialize for ErrorUnion<S>
where
    S::Repr: SerializeCases + CaseIndex,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&(self.repr().case_index() as u32))?;
        tuple.serialize_element(&Live(self.repr()))?;
        tuple.end()
    }
}

/// Deserializes the alternative at a runtime case index.
pub trait DeserializeCases<'de>: Sized {
    /// Decodes the payload as the alternative `index` positions down.
    fn deserialize_case<D: Deserializer<'de>>(index: u32, deserializer: D)
        -> Result<Self, D::Error>;
}

impl<'de> DeserializeCases<'de> for CaseNil {
    fn deserialize_case<D: Deserializer<'de>>(
        _index: u32,
        _deserializer: D,
    ) -> Result<Self, D::Error> {
        Err(de::Error::custom("case index out of range for error union"))
    }
}

impl<'de, H, Rest> DeserializeCases<'de> for CaseList<H, Rest>
where
    H: Deserialize<'de>,
    Rest: DeserializeCases<'de>,
{
    fn deserialize_case<D: Deserializer<'de>>(
        index: u32,
        deserializer: D,
    ) -> Result<Self, D::Error> {
        if index == 0 {
            H::deserialize(deserializer).map(CaseList::Head)
        } else {
            Rest::deserialize_case(index - 1, deserializer).map(CaseList::Tail)
        }
    }
}

struct CaseSeed<R> {
    index: u32,
    _repr: PhantomData<R>,
}

impl<'de, R: DeserializeCases<'de>> DeserializeSeed<'de> for CaseSeed<R> {
    type Value = R;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<R, D::Error> {
        R::deserialize_case(self.index, deserializer)
    }
}

impl<'de, S: UnionSet> Deserialize<'de> for ErrorUnion<S>
where
    S::Repr: DeserializeCases<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UnionVisitor<S>(PhantomData<S>);

        impl<'de, S: UnionSet> Visitor<'de> for UnionVisitor<S>
        where
            S::Repr: DeserializeCases<'de>,
        {
            type Value = ErrorUnion<S>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a (case index, payload) pair")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let index: u32 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let cases = seq
                    .next_element_seed(CaseSeed::<S::Repr> { index, _repr: PhantomData })?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(ErrorUnion::from_repr(cases))
            }
        }

        deserializer.deserialize_tuple(2, UnionVisitor::<S>(PhantomData))
    }
}
