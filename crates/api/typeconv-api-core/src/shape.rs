//! Shape classification: the structural category of a [`Value`] as seen by
//! the array converters.
//!
//! Classification happens once, up front, and produces a closed sum type so
//! dispatch on it is an exhaustive `match` rather than a chain of capability
//! checks.

use crate::primitive::PrimitiveArray;
use crate::value::{LazyIter, Value};

/// Top-level split between array-like values and everything else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueShape<'a> {
    Null,
    /// Not array-typed; handled by the value-to-array path.
    Opaque(OpaqueShape<'a>),
    /// Fixed-length array with a known element type.
    Array(ArrayShape<'a>),
}

/// Non-array shapes, listed in dispatch priority order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OpaqueShape<'a> {
    /// Known length with indexed access.
    IndexedSequence(&'a [Value]),
    /// Known size, sequential traversal only.
    SizedCollection(&'a [Value]),
    /// Sequential traversal, size unknown until exhausted.
    LazyIterable(&'a LazyIter),
    /// Character sequence to be tokenized.
    Text(&'a str),
    /// Anything else is treated as a single element.
    Scalar(&'a Value),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArrayShape<'a> {
    Primitive(&'a PrimitiveArray),
    Objects(&'a [Value]),
}

impl ValueShape<'_> {
    pub fn is_array(&self) -> bool {
        matches!(self, ValueShape::Array(_))
    }

    /// Short label used in log records.
    pub fn label(&self) -> &'static str {
        match self {
            ValueShape::Null => "null",
            ValueShape::Opaque(OpaqueShape::IndexedSequence(_)) => "indexed sequence",
            ValueShape::Opaque(OpaqueShape::SizedCollection(_)) => "sized collection",
            ValueShape::Opaque(OpaqueShape::LazyIterable(_)) => "lazy iterable",
            ValueShape::Opaque(OpaqueShape::Text(_)) => "text",
            ValueShape::Opaque(OpaqueShape::Scalar(_)) => "scalar",
            ValueShape::Array(ArrayShape::Primitive(_)) => "primitive array",
            ValueShape::Array(ArrayShape::Objects(_)) => "object array",
        }
    }
}

/// Classify `value` into its [`ValueShape`].
pub fn classify(value: &Value) -> ValueShape<'_> {
    match value {
        Value::Null => ValueShape::Null,
        Value::Array(arr) => ValueShape::Array(ArrayShape::Primitive(arr)),
        Value::Objects(items) => ValueShape::Array(ArrayShape::Objects(items)),
        Value::List(items) => ValueShape::Opaque(OpaqueShape::IndexedSequence(items)),
        Value::Set(items) => ValueShape::Opaque(OpaqueShape::SizedCollection(items)),
        Value::Iter(iter) => ValueShape::Opaque(OpaqueShape::LazyIterable(iter)),
        Value::Text(s) => ValueShape::Opaque(OpaqueShape::Text(s)),
        Value::Bool(_) | Value::Char(_) | Value::Int(_) | Value::Float(_) => {
            ValueShape::Opaque(OpaqueShape::Scalar(value))
        }
    }
}
