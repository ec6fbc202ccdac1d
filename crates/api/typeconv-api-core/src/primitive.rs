//! Arrays whose element type is a primitive (unboxed) kind.
//!
//! Every variant shares its storage through an `Arc<[E]>` so that a consumer
//! which needs exactly this element type can hand the same allocation back
//! without copying.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Element kind of a [`PrimitiveArray`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// Complex number stored as `[re, im]` pairs of `f32`.
    Complex32,
    /// Complex number stored as `[re, im]` pairs of `f64`.
    Complex64,
}

impl PrimitiveKind {
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Char => "char",
            PrimitiveKind::I8 => "i8",
            PrimitiveKind::I16 => "i16",
            PrimitiveKind::I32 => "i32",
            PrimitiveKind::I64 => "i64",
            PrimitiveKind::U8 => "u8",
            PrimitiveKind::U16 => "u16",
            PrimitiveKind::U32 => "u32",
            PrimitiveKind::U64 => "u64",
            PrimitiveKind::F32 => "f32",
            PrimitiveKind::F64 => "f64",
            PrimitiveKind::Complex32 => "complex32",
            PrimitiveKind::Complex64 => "complex64",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-length, homogeneous array with a primitive element kind.
///
/// Serializes as `{ "kind": "i32", "items": [...] }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum PrimitiveArray {
    Bool(Arc<[bool]>),
    Char(Arc<[char]>),
    I8(Arc<[i8]>),
    I16(Arc<[i16]>),
    I32(Arc<[i32]>),
    I64(Arc<[i64]>),
    U8(Arc<[u8]>),
    U16(Arc<[u16]>),
    U32(Arc<[u32]>),
    U64(Arc<[u64]>),
    F32(Arc<[f32]>),
    F64(Arc<[f64]>),
    Complex32(Arc<[[f32; 2]]>),
    Complex64(Arc<[[f64; 2]]>),
}

impl PrimitiveArray {
    /// Element kind of this array.
    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveArray::Bool(_) => PrimitiveKind::Bool,
            PrimitiveArray::Char(_) => PrimitiveKind::Char,
            PrimitiveArray::I8(_) => PrimitiveKind::I8,
            PrimitiveArray::I16(_) => PrimitiveKind::I16,
            PrimitiveArray::I32(_) => PrimitiveKind::I32,
            PrimitiveArray::I64(_) => PrimitiveKind::I64,
            PrimitiveArray::U8(_) => PrimitiveKind::U8,
            PrimitiveArray::U16(_) => PrimitiveKind::U16,
            PrimitiveArray::U32(_) => PrimitiveKind::U32,
            PrimitiveArray::U64(_) => PrimitiveKind::U64,
            PrimitiveArray::F32(_) => PrimitiveKind::F32,
            PrimitiveArray::F64(_) => PrimitiveKind::F64,
            PrimitiveArray::Complex32(_) => PrimitiveKind::Complex32,
            PrimitiveArray::Complex64(_) => PrimitiveKind::Complex64,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            PrimitiveArray::Bool(a) => a.len(),
            PrimitiveArray::Char(a) => a.len(),
            PrimitiveArray::I8(a) => a.len(),
            PrimitiveArray::I16(a) => a.len(),
            PrimitiveArray::I32(a) => a.len(),
            PrimitiveArray::I64(a) => a.len(),
            PrimitiveArray::U8(a) => a.len(),
            PrimitiveArray::U16(a) => a.len(),
            PrimitiveArray::U32(a) => a.len(),
            PrimitiveArray::U64(a) => a.len(),
            PrimitiveArray::F32(a) => a.len(),
            PrimitiveArray::F64(a) => a.len(),
            PrimitiveArray::Complex32(a) => a.len(),
            PrimitiveArray::Complex64(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_from_vec {
    ($($elem:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$elem>> for PrimitiveArray {
                fn from(items: Vec<$elem>) -> Self {
                    PrimitiveArray::$variant(items.into())
                }
            }

            impl From<Arc<[$elem]>> for PrimitiveArray {
                fn from(items: Arc<[$elem]>) -> Self {
                    PrimitiveArray::$variant(items)
                }
            }
        )*
    };
}

impl_from_vec! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    [f32; 2] => Complex32,
    [f64; 2] => Complex64,
}
