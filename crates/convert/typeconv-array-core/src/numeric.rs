//! Target numeric element types.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use typeconv_api_core::PrimitiveArray;

/// Numeric element type an array is converted into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericType {
    F64,
    F32,
    I64,
    I32,
    I16,
    I8,
}

impl NumericType {
    pub fn name(self) -> &'static str {
        match self {
            NumericType::F64 => "f64",
            NumericType::F32 => "f32",
            NumericType::I64 => "i64",
            NumericType::I32 => "i32",
            NumericType::I16 => "i16",
            NumericType::I8 => "i8",
        }
    }

    pub fn is_integral(self) -> bool {
        !matches!(self, NumericType::F64 | NumericType::F32)
    }

    /// Inclusive value range of an integral type; `None` for floating point.
    pub fn int_bounds(self) -> Option<(i64, i64)> {
        match self {
            NumericType::F64 | NumericType::F32 => None,
            NumericType::I64 => Some((i64::MIN, i64::MAX)),
            NumericType::I32 => Some((i32::MIN.into(), i32::MAX.into())),
            NumericType::I16 => Some((i16::MIN.into(), i16::MAX.into())),
            NumericType::I8 => Some((i8::MIN.into(), i8::MAX.into())),
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single converted element as produced by an element converter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(x) => x,
        }
    }
}

/// Element type of a converted array.
///
/// The `from_*` casts follow Rust `as` semantics: integer narrowing wraps,
/// float-to-integer truncates toward zero and saturates.
pub trait NumericElement: Copy + Send + Sync + 'static {
    const TYPE: NumericType;

    fn from_i64(v: i64) -> Self;
    fn from_u64(v: u64) -> Self;
    fn from_f64(v: f64) -> Self;

    fn from_bool(b: bool) -> Self {
        Self::from_u64(u64::from(b))
    }

    fn from_number(n: Number) -> Self {
        match n {
            Number::Int(i) => Self::from_i64(i),
            Number::Float(x) => Self::from_f64(x),
        }
    }

    /// Borrow the storage of `array` when its element type is `Self`.
    fn same_kind(array: &PrimitiveArray) -> Option<&Arc<[Self]>>;
}

macro_rules! impl_numeric_element {
    ($($t:ty => $ty:ident, $variant:ident);* $(;)?) => {
        $(
            impl NumericElement for $t {
                const TYPE: NumericType = NumericType::$ty;

                #[inline]
                fn from_i64(v: i64) -> Self {
                    v as $t
                }

                #[inline]
                fn from_u64(v: u64) -> Self {
                    v as $t
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }

                fn same_kind(array: &PrimitiveArray) -> Option<&Arc<[Self]>> {
                    match array {
                        PrimitiveArray::$variant(items) => Some(items),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_numeric_element! {
    f64 => F64, F64;
    f32 => F32, F32;
    i64 => I64, I64;
    i32 => I32, I32;
    i16 => I16, I16;
    i8 => I8, I8;
}
