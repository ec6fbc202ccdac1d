//! Value: opaque runtime inputs handed to the converters.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::primitive::PrimitiveArray;

/// Lightweight kind enum mirroring the [`Value`] variants, handy for error
/// messages and quick dispatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    Char,
    Int,
    Float,
    Text,
    List,
    Set,
    Iter,
    Array,
    Objects,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Char => "char",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::List => "list",
            ValueKind::Set => "set",
            ValueKind::Iter => "iterable",
            ValueKind::Array => "array",
            ValueKind::Objects => "object array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type IterFactory = dyn Fn() -> Box<dyn Iterator<Item = Value> + Send> + Send + Sync;

/// Re-iterable, lazily produced sequence of values whose length is not known
/// up front. Each call to [`LazyIter::iter`] starts a fresh traversal.
#[derive(Clone)]
pub struct LazyIter(Arc<IterFactory>);

impl LazyIter {
    pub fn new<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: Iterator<Item = Value> + Send + 'static,
    {
        LazyIter(Arc::new(move || {
            Box::new(factory()) as Box<dyn Iterator<Item = Value> + Send>
        }))
    }

    /// Iterable that replays a fixed list of values.
    pub fn from_values(values: Vec<Value>) -> Self {
        let values: Arc<[Value]> = values.into();
        LazyIter::new(move || {
            let values = Arc::clone(&values);
            (0..values.len()).map(move |i| values[i].clone())
        })
    }

    /// Start a new traversal.
    pub fn iter(&self) -> Box<dyn Iterator<Item = Value> + Send> {
        (self.0)()
    }
}

impl fmt::Debug for LazyIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LazyIter(..)")
    }
}

/// Two lazy iterables are equal only when they share the same factory.
impl PartialEq for LazyIter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Value {
    /// Absent value
    Null,

    Bool(bool),

    /// Single character (scalar, not a character sequence)
    Char(char),

    Int(i64),

    Float(f64),

    /// Character sequence
    Text(String),

    /// Ordered sequence with indexed access
    List(Vec<Value>),

    /// Unordered collection; size is known but only traversal is meaningful
    Set(Vec<Value>),

    /// Lazy iterable; cannot be serialized
    #[serde(skip)]
    Iter(LazyIter),

    /// Array with a primitive element type
    Array(PrimitiveArray),

    /// Array with an object (boxed `Value`) element type
    Objects(Arc<[Value]>),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Char(_) => ValueKind::Char,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::List(_) => ValueKind::List,
            Value::Set(_) => ValueKind::Set,
            Value::Iter(_) => ValueKind::Iter,
            Value::Array(_) => ValueKind::Array,
            Value::Objects(_) => ValueKind::Objects,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Convenience constructors
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn list(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn set(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Value::Set(items.into_iter().map(Into::into).collect())
    }

    pub fn objects(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Value::Objects(items.into_iter().map(Into::into).collect())
    }

    pub fn array(items: impl Into<PrimitiveArray>) -> Self {
        Value::Array(items.into())
    }

    pub fn lazy(iter: LazyIter) -> Self {
        Value::Iter(iter)
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::List(items) | Value::Set(items) => write_items(f, items),
            Value::Objects(items) => write_items(f, items),
            Value::Iter(_) => f.write_str("<iterable>"),
            Value::Array(arr) => write!(f, "{}[{}]", arr.kind(), arr.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<PrimitiveArray> for Value {
    fn from(arr: PrimitiveArray) -> Self {
        Value::Array(arr)
    }
}

impl From<LazyIter> for Value {
    fn from(iter: LazyIter) -> Self {
        Value::Iter(iter)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from(3).kind(), ValueKind::Int);
        assert_eq!(Value::text("x").kind(), ValueKind::Text);
        assert_eq!(Value::set([1, 2]).kind(), ValueKind::Set);
        assert_eq!(Value::array(vec![1.0f32]).kind(), ValueKind::Array);
        assert_eq!(Value::objects(["a"]).kind(), ValueKind::Objects);
        assert_eq!(
            Value::lazy(LazyIter::from_values(vec![])).kind(),
            ValueKind::Iter
        );
    }

    #[test]
    fn lazy_iter_restarts_each_traversal() {
        let iter = LazyIter::from_values(vec![Value::from(1), Value::from(2)]);
        let first: Vec<Value> = iter.iter().collect();
        let second: Vec<Value> = iter.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn lazy_iter_equality_is_identity() {
        let a = LazyIter::from_values(vec![Value::from(1)]);
        let b = LazyIter::from_values(vec![Value::from(1)]);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_compact() {
        let v = Value::list([Value::from(1), Value::text("a"), Value::Null]);
        assert_eq!(v.to_string(), r#"[1, "a", null]"#);
        assert_eq!(Value::array(vec![1i8, 2]).to_string(), "i8[2]");
        assert_eq!(Value::Char('x').to_string(), "'x'");
    }

    #[test]
    fn serde_uses_type_and_data() {
        let v = Value::list([Value::from(1.5), Value::Null]);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "list",
                "data": [
                    { "type": "float", "data": 1.5 },
                    { "type": "null" }
                ]
            })
        );
        let back: Value = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn lazy_iter_refuses_to_serialize() {
        let v = Value::lazy(LazyIter::from_values(vec![]));
        assert!(serde_json::to_value(&v).is_err());
    }
}
