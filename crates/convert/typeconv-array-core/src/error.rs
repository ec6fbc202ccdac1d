use thiserror::Error;
use typeconv_api_core::{PrimitiveKind, Value, ValueKind};

use crate::numeric::NumericType;

/// Errors surfaced by element and array conversion.
///
/// Any error aborts the whole array conversion; partial output is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("cannot convert {kind} {value} to {target}: {reason}")]
    UnconvertibleElement {
        kind: ValueKind,
        value: String,
        target: NumericType,
        reason: String,
    },
    #[error("unsupported primitive element type `{element}` for {target}[] conversion")]
    UnsupportedPrimitiveElementType {
        element: PrimitiveKind,
        target: NumericType,
    },
}

impl ConvertError {
    pub fn unconvertible(value: &Value, target: NumericType, reason: impl Into<String>) -> Self {
        ConvertError::UnconvertibleElement {
            kind: value.kind(),
            value: value.to_string(),
            target,
            reason: reason.into(),
        }
    }
}
