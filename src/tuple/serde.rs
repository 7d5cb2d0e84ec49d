//! Serde support for tuples.
//!
//! A tuple serializes as a fixed-length sequence of its elements, the same
//! shape serde gives native tuples, so `tuple![1, "a"]` and `(1, "a")` have
//! identical JSON. Deserialization rejects sequences whose length differs
//! from the tuple's.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Cons, Nil, Tuple};

// =============================================================================
// Serialization
// =============================================================================

pub trait SerializeElements {
    fn serialize_elements<S: SerializeTuple>(&self, sequence: &mut S) -> Result<(), S::Error>;
}

impl SerializeElements for Nil {
    #[inline]
    fn serialize_elements<S: SerializeTuple>(&self, _sequence: &mut S) -> Result<(), S::Error> {
        Ok(())
    }
}

impl<H: Serialize, T: SerializeElements> SerializeElements for Cons<H, T> {
    fn serialize_elements<S: SerializeTuple>(&self, sequence: &mut S) -> Result<(), S::Error> {
        sequence.serialize_element(&self.head)?;
        self.tail.serialize_elements(sequence)
    }
}

impl Serialize for Nil {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_tuple(0)?.end()
    }
}

impl<H, T> Serialize for Cons<H, T>
where
    H: Serialize,
    T: SerializeElements + Tuple,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut sequence = serializer.serialize_tuple(<Self as Tuple>::LEN)?;
        self.serialize_elements(&mut sequence)?;
        sequence.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

struct ExpectedLength(usize);

impl de::Expected for ExpectedLength {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a tuple of {} elements", self.0)
    }
}

pub trait DeserializeElements<'de>: Sized {
    fn deserialize_elements<A>(
        sequence: &mut A,
        index: usize,
        total: usize,
    ) -> Result<Self, A::Error>
    where
        A: SeqAccess<'de>;
}

impl<'de> DeserializeElements<'de> for Nil {
    #[inline]
    fn deserialize_elements<A>(
        _sequence: &mut A,
        _index: usize,
        _total: usize,
    ) -> Result<Self, A::Error>
    where
        A: SeqAccess<'de>,
    {
        Ok(Nil)
    }
}

impl<'de, H, T> DeserializeElements<'de> for Cons<H, T>
where
    H: Deserialize<'de>,
    T: DeserializeElements<'de>,
{
    fn deserialize_elements<A>(
        sequence: &mut A,
        index: usize,
        total: usize,
    ) -> Result<Self, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let head = sequence
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(index, &ExpectedLength(total)))?;
        let tail = T::deserialize_elements(sequence, index + 1, total)?;
        Ok(Self::new(head, tail))
    }
}

struct TupleVisitor<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> TupleVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for TupleVisitor<T>
where
    T: DeserializeElements<'de> + Tuple,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a tuple of {} elements", T::LEN)
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let value = T::deserialize_elements(&mut sequence, 0, T::LEN)?;
        if sequence.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(T::LEN + 1, &self));
        }
        Ok(value)
    }
}

impl<'de> Deserialize<'de> for Nil {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(0, TupleVisitor::new())
    }
}

impl<'de, H, T> Deserialize<'de> for Cons<H, T>
where
    H: Deserialize<'de>,
    T: DeserializeElements<'de> + Tuple,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(<Self as Tuple>::LEN, TupleVisitor::new())
    }
}
