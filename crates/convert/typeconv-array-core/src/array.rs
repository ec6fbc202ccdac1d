//! Array conversion: any [`Value`] into a fixed-length `Arc<[T]>`.
//!
//! The input is classified once (see [`typeconv_api_core::shape`]) and then
//! routed down one of two paths:
//! - value-to-array for sequences, collections, lazy iterables, text and
//!   bare scalars;
//! - array-to-array for primitive arrays (identity or direct numeric copy)
//!   and object arrays (elementwise).
//!
//! Every element that is not copied directly goes through the injected
//! [`ElementConverter`]. The first element error aborts the conversion.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use log::{debug, trace};
use typeconv_api_core::{
    classify, ArrayShape, LazyIter, OpaqueShape, PrimitiveArray, Value, ValueShape,
};

use crate::config::Config;
use crate::element::{ElementConverter, StandardConverter};
use crate::error::ConvertError;
use crate::numeric::NumericElement;
use crate::tokenize::split_tokens;

/// Converts values into arrays of `T`, delegating single elements to `C`.
pub struct ArrayConverter<T, C = StandardConverter> {
    elements: C,
    config: Config,
    _target: PhantomData<fn() -> T>,
}

/// The `f64[]` instance of [`ArrayConverter`].
pub type DoubleArrayConverter<C = StandardConverter> = ArrayConverter<f64, C>;

impl<T: NumericElement> ArrayConverter<T> {
    pub fn new() -> Self {
        Self::with_converter(StandardConverter)
    }
}

impl<T: NumericElement> Default for ArrayConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clone> Clone for ArrayConverter<T, C> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            config: self.config.clone(),
            _target: PhantomData,
        }
    }
}

impl<T: NumericElement, C> fmt::Debug for ArrayConverter<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayConverter")
            .field("target", &T::TYPE)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T: NumericElement, C: ElementConverter> ArrayConverter<T, C> {
    pub fn with_converter(elements: C) -> Self {
        Self {
            elements,
            config: Config::default(),
            _target: PhantomData,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn element_converter(&self) -> &C {
        &self.elements
    }

    /// Convert `value` into an array of `T`.
    ///
    /// Returns `Ok(None)` for [`Value::Null`]. Arrays whose element type is
    /// already `T` are returned as the same `Arc` without touching the
    /// element converter.
    pub fn convert(&self, value: &Value) -> Result<Option<Arc<[T]>>, ConvertError> {
        let shape = classify(value);
        trace!("convert {} into {}[]", shape.label(), T::TYPE);

        let result = match shape {
            ValueShape::Null => return Ok(None),
            ValueShape::Opaque(opaque) => self.convert_value_to_array(opaque),
            ValueShape::Array(array) => self.convert_array_to_array(array),
        };
        result.map(Some).map_err(|err| {
            debug!("{}[] conversion of {} rejected: {err}", T::TYPE, shape.label());
            err
        })
    }

    /// Convert one value into one `T` through the element converter.
    pub fn convert_element(&self, value: &Value) -> Result<T, ConvertError> {
        self.elements.convert(value, T::TYPE).map(T::from_number)
    }

    fn convert_value_to_array(&self, shape: OpaqueShape<'_>) -> Result<Arc<[T]>, ConvertError> {
        match shape {
            // Index order for sequences, iteration order for collections.
            OpaqueShape::IndexedSequence(items) | OpaqueShape::SizedCollection(items) => {
                self.convert_sized(items.len(), items.iter())
            }
            OpaqueShape::LazyIterable(iter) => self.convert_lazy(iter),
            OpaqueShape::Text(text) => {
                let tokens: Vec<Value> = split_tokens(text, &self.config.delimiters)
                    .into_iter()
                    .map(|token| Value::Text(token.to_string()))
                    .collect();
                trace!("text split into {} tokens", tokens.len());
                self.convert_array_to_array(ArrayShape::Objects(&tokens))
            }
            OpaqueShape::Scalar(value) => Ok(vec![self.convert_element(value)?].into()),
        }
    }

    fn convert_array_to_array(&self, shape: ArrayShape<'_>) -> Result<Arc<[T]>, ConvertError> {
        match shape {
            ArrayShape::Primitive(array) => self.convert_primitive_array(array),
            ArrayShape::Objects(items) => self.convert_sized(items.len(), items.iter()),
        }
    }

    /// Output length is known up front; elements are written in traversal order.
    fn convert_sized<'v>(
        &self,
        len: usize,
        elements: impl Iterator<Item = &'v Value>,
    ) -> Result<Arc<[T]>, ConvertError> {
        let mut target = Vec::with_capacity(len);
        for element in elements {
            target.push(self.convert_element(element)?);
        }
        Ok(target.into())
    }

    fn convert_lazy(&self, iter: &LazyIter) -> Result<Arc<[T]>, ConvertError> {
        let mut staging = Vec::new();
        for element in iter.iter() {
            staging.push(self.convert_element(&element)?);
        }
        Ok(staging.into())
    }

    fn convert_primitive_array(&self, array: &PrimitiveArray) -> Result<Arc<[T]>, ConvertError> {
        if let Some(same) = T::same_kind(array) {
            return Ok(Arc::clone(same));
        }

        let target: Vec<T> = match array {
            PrimitiveArray::I8(a) => a.iter().map(|&v| T::from_i64(v.into())).collect(),
            PrimitiveArray::I16(a) => a.iter().map(|&v| T::from_i64(v.into())).collect(),
            PrimitiveArray::I32(a) => a.iter().map(|&v| T::from_i64(v.into())).collect(),
            PrimitiveArray::I64(a) => a.iter().map(|&v| T::from_i64(v)).collect(),
            PrimitiveArray::U8(a) => a.iter().map(|&v| T::from_u64(v.into())).collect(),
            PrimitiveArray::U16(a) => a.iter().map(|&v| T::from_u64(v.into())).collect(),
            PrimitiveArray::U32(a) => a.iter().map(|&v| T::from_u64(v.into())).collect(),
            PrimitiveArray::U64(a) => a.iter().map(|&v| T::from_u64(v)).collect(),
            PrimitiveArray::F32(a) => a.iter().map(|&v| T::from_f64(v.into())).collect(),
            PrimitiveArray::F64(a) => a.iter().map(|&v| T::from_f64(v)).collect(),
            PrimitiveArray::Char(a) => a
                .iter()
                .map(|&c| T::from_u64(u32::from(c).into()))
                .collect(),
            PrimitiveArray::Bool(a) => a.iter().map(|&b| T::from_bool(b)).collect(),
            PrimitiveArray::Complex32(_) | PrimitiveArray::Complex64(_) => {
                return Err(ConvertError::UnsupportedPrimitiveElementType {
                    element: array.kind(),
                    target: T::TYPE,
                });
            }
        };
        Ok(target.into())
    }
}

/// Convert `value` into `f64[]` with the standard element converter and the
/// default configuration.
pub fn to_f64_array(value: &Value) -> Result<Option<Arc<[f64]>>, ConvertError> {
    DoubleArrayConverter::new().convert(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::Delimiters;

    #[test]
    fn null_converts_to_none() {
        let conv = DoubleArrayConverter::new();
        assert_eq!(conv.convert(&Value::Null).unwrap(), None);
    }

    #[test]
    fn widening_covers_every_supported_kind() {
        let conv = DoubleArrayConverter::new();
        let cases: Vec<(Value, Vec<f64>)> = vec![
            (Value::array(vec![-1i8, 2]), vec![-1.0, 2.0]),
            (Value::array(vec![-300i16]), vec![-300.0]),
            (Value::array(vec![i32::MAX]), vec![i32::MAX as f64]),
            (Value::array(vec![1i64 << 40]), vec![(1i64 << 40) as f64]),
            (Value::array(vec![255u8]), vec![255.0]),
            (Value::array(vec![65_535u16]), vec![65_535.0]),
            (Value::array(vec![7u32]), vec![7.0]),
            (Value::array(vec![9u64]), vec![9.0]),
            (Value::array(vec![0.5f32]), vec![0.5]),
            (Value::array(vec!['A', '0']), vec![65.0, 48.0]),
            (Value::array(vec![true, false, true]), vec![1.0, 0.0, 1.0]),
        ];
        for (input, expected) in cases {
            let out = conv.convert(&input).unwrap().unwrap();
            assert_eq!(&*out, expected.as_slice(), "input {input}");
        }
    }

    #[test]
    fn narrowing_to_integral_targets() {
        let conv = ArrayConverter::<i8>::new();
        let out = conv
            .convert(&Value::array(vec![1.9f64, -1.9, 300.0]))
            .unwrap()
            .unwrap();
        assert_eq!(&*out, &[1, -1, i8::MAX]);
    }

    #[test]
    fn text_uses_configured_delimiters() {
        let conv = DoubleArrayConverter::new()
            .with_config(Config::default().with_delimiters(Delimiters::new(['|'], false)));
        let out = conv.convert(&Value::text("1|2||3")).unwrap().unwrap();
        assert_eq!(&*out, &[1.0, 2.0, 3.0]);
        assert!(conv.convert(&Value::text("1,2")).is_err());
    }

    #[test]
    fn convenience_function_uses_defaults() {
        let out = to_f64_array(&Value::text(" 1 ; 2 ")).unwrap().unwrap();
        assert_eq!(&*out, &[1.0, 2.0]);
    }
}
