//! typeconv-api-core: runtime value model and shape classification (core, converter-agnostic)

pub mod json;
pub mod primitive;
pub mod shape;
pub mod value;

pub use primitive::{PrimitiveArray, PrimitiveKind};
pub use shape::{classify, ArrayShape, OpaqueShape, ValueShape};
pub use value::{LazyIter, Value, ValueKind};
