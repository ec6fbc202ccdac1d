//! Single-element conversion: one [`Value`] into one target [`Number`].
//!
//! [`ElementConverter`] is the seam the array converter delegates to for every
//! element it cannot copy directly. [`StandardConverter`] is the default:
//! - Int -> integral targets after a range check, float targets by cast
//! - Float -> float targets by cast, integral targets truncated toward zero
//! - Bool -> 1 / 0
//! - Char / Text -> trimmed, optional leading '+', then parsed
//! - Null and containers -> error

use typeconv_api_core::Value;

use crate::error::ConvertError;
use crate::numeric::{Number, NumericType};

/// Converts a single value into a number of the requested type.
///
/// Implementations must be safe to call from several threads when the array
/// converter holding them is shared.
pub trait ElementConverter {
    fn convert(&self, value: &Value, target: NumericType) -> Result<Number, ConvertError>;
}

impl<F> ElementConverter for F
where
    F: Fn(&Value, NumericType) -> Result<Number, ConvertError>,
{
    fn convert(&self, value: &Value, target: NumericType) -> Result<Number, ConvertError> {
        self(value, target)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardConverter;

impl ElementConverter for StandardConverter {
    fn convert(&self, value: &Value, target: NumericType) -> Result<Number, ConvertError> {
        match value {
            Value::Int(i) => int_to_target(value, *i, target),
            Value::Float(x) => float_to_target(value, *x, target),
            Value::Bool(b) => Ok(if target.is_integral() {
                Number::Int(i64::from(*b))
            } else {
                Number::Float(if *b { 1.0 } else { 0.0 })
            }),
            Value::Char(c) => {
                let mut buf = [0u8; 4];
                parse_text(value, c.encode_utf8(&mut buf), target)
            }
            Value::Text(s) => parse_text(value, s, target),
            Value::Null => Err(ConvertError::unconvertible(value, target, "value is null")),
            Value::List(_)
            | Value::Set(_)
            | Value::Iter(_)
            | Value::Array(_)
            | Value::Objects(_) => Err(ConvertError::unconvertible(
                value,
                target,
                "containers are not single elements",
            )),
        }
    }
}

fn int_to_target(value: &Value, i: i64, target: NumericType) -> Result<Number, ConvertError> {
    match target.int_bounds() {
        None => Ok(Number::Float(i as f64)),
        Some((lo, hi)) if (lo..=hi).contains(&i) => Ok(Number::Int(i)),
        Some((lo, hi)) => Err(ConvertError::unconvertible(
            value,
            target,
            format!("out of range [{lo}, {hi}]"),
        )),
    }
}

fn float_to_target(value: &Value, x: f64, target: NumericType) -> Result<Number, ConvertError> {
    let Some((lo, hi)) = target.int_bounds() else {
        return Ok(Number::Float(x));
    };
    if !x.is_finite() {
        return Err(ConvertError::unconvertible(value, target, "not a finite number"));
    }
    let truncated = x.trunc();
    // i64::MAX is not representable in f64; the upper check uses the next power of two.
    if truncated < lo as f64 || truncated >= (hi as f64) + 1.0 {
        return Err(ConvertError::unconvertible(
            value,
            target,
            format!("out of range [{lo}, {hi}]"),
        ));
    }
    Ok(Number::Int(truncated as i64))
}

fn parse_text(value: &Value, text: &str, target: NumericType) -> Result<Number, ConvertError> {
    let trimmed = text.trim();
    let digits = match trimmed.strip_prefix('+') {
        Some(rest) if rest.starts_with(['+', '-']) => "",
        Some(rest) => rest,
        None => trimmed,
    };
    if digits.is_empty() {
        return Err(ConvertError::unconvertible(value, target, "not a number"));
    }
    if target.is_integral() {
        let i: i64 = digits
            .parse()
            .map_err(|e| ConvertError::unconvertible(value, target, format!("{e}")))?;
        int_to_target(value, i, target)
    } else {
        let x: f64 = digits
            .parse()
            .map_err(|e| ConvertError::unconvertible(value, target, format!("{e}")))?;
        Ok(Number::Float(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_f64(v: Value) -> Result<f64, ConvertError> {
        StandardConverter
            .convert(&v, NumericType::F64)
            .map(Number::as_f64)
    }

    #[test]
    fn scalars_to_float() {
        assert_eq!(to_f64(Value::Int(5)).unwrap(), 5.0);
        assert_eq!(to_f64(Value::Float(-0.25)).unwrap(), -0.25);
        assert_eq!(to_f64(Value::Bool(true)).unwrap(), 1.0);
        assert_eq!(to_f64(Value::Char('7')).unwrap(), 7.0);
        assert_eq!(to_f64(Value::text("  +3.5 ")).unwrap(), 3.5);
        assert_eq!(to_f64(Value::text("-1e3")).unwrap(), -1000.0);
    }

    #[test]
    fn rejects_non_numeric() {
        for v in [
            Value::text("abc"),
            Value::text(""),
            Value::text("+-1"),
            Value::Char('x'),
            Value::Null,
            Value::list([1]),
        ] {
            let err = to_f64(v).unwrap_err();
            assert!(matches!(err, ConvertError::UnconvertibleElement { .. }));
        }
    }

    #[test]
    fn integral_targets_check_range() {
        let c = StandardConverter;
        assert_eq!(
            c.convert(&Value::Int(127), NumericType::I8).unwrap(),
            Number::Int(127)
        );
        assert!(c.convert(&Value::Int(128), NumericType::I8).is_err());
        assert_eq!(
            c.convert(&Value::Float(-7.9), NumericType::I32).unwrap(),
            Number::Int(-7)
        );
        assert!(c.convert(&Value::Float(f64::NAN), NumericType::I64).is_err());
        assert!(c.convert(&Value::Float(1e19), NumericType::I64).is_err());
        assert!(c.convert(&Value::text("1.5"), NumericType::I32).is_err());
        assert_eq!(
            c.convert(&Value::text("40000"), NumericType::I32).unwrap(),
            Number::Int(40_000)
        );
        assert!(c.convert(&Value::text("40000"), NumericType::I16).is_err());
    }

    #[test]
    fn error_message_names_value_and_target() {
        let err = to_f64(Value::text("abc")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with(r#"cannot convert text "abc" to f64"#), "{msg}");
    }

    #[test]
    fn closures_are_converters() {
        let doubled = |v: &Value, t: NumericType| {
            StandardConverter
                .convert(v, t)
                .map(|n| Number::Float(n.as_f64() * 2.0))
        };
        assert_eq!(
            doubled.convert(&Value::Int(4), NumericType::F64).unwrap(),
            Number::Float(8.0)
        );
    }
}
