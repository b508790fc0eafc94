use crate::error::ConvertError;
use crate::field::FieldSlot;
use crate::kind::{FieldKind, IntWidth};

/// Convert one raw value into the field behind `slot`.
///
/// Rules by kind:
/// - Text: stored verbatim, empty included. Never fails.
/// - Bool, integers, floats: an empty raw value leaves the field untouched.
///   Otherwise the value is parsed and written only on success.
/// - Unsupported: fails before looking at `raw`.
///
/// On error the field keeps its previous value.
pub fn convert(slot: FieldSlot<'_>, raw: &str) -> Result<(), ConvertError> {
    match slot {
        FieldSlot::Unsupported(type_name) => {
            return Err(ConvertError::UnsupportedKind {
                type_name: type_name.to_string(),
            });
        }
        FieldSlot::Text(field) => {
            field.clear();
            field.push_str(raw);
        }
        _ if raw.is_empty() => {}

        FieldSlot::Bool(field) => *field = parse_bool(raw)?,

        FieldSlot::I8(field) => *field = narrow(parse_signed(raw)?, raw, FieldKind::Int(IntWidth::W8))?,
        FieldSlot::I16(field) => *field = narrow(parse_signed(raw)?, raw, FieldKind::Int(IntWidth::W16))?,
        FieldSlot::I32(field) => *field = narrow(parse_signed(raw)?, raw, FieldKind::Int(IntWidth::W32))?,
        FieldSlot::I64(field) => *field = parse_signed(raw)?,
        FieldSlot::Isize(field) => *field = narrow(parse_signed(raw)?, raw, FieldKind::Int(IntWidth::Size))?,

        FieldSlot::U8(field) => *field = narrow(parse_unsigned(raw)?, raw, FieldKind::UInt(IntWidth::W8))?,
        FieldSlot::U16(field) => *field = narrow(parse_unsigned(raw)?, raw, FieldKind::UInt(IntWidth::W16))?,
        FieldSlot::U32(field) => *field = narrow(parse_unsigned(raw)?, raw, FieldKind::UInt(IntWidth::W32))?,
        FieldSlot::U64(field) => *field = parse_unsigned(raw)?,
        FieldSlot::Usize(field) => *field = narrow(parse_unsigned(raw)?, raw, FieldKind::UInt(IntWidth::Size))?,

        // Round to nearest; magnitudes below the f32 subnormal range become 0,
        // above f32::MAX become infinity.
        FieldSlot::F32(field) => *field = parse_float(raw)? as f32,
        FieldSlot::F64(field) => *field = parse_float(raw)?,
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════
//  Per-kind parsers
// ═══════════════════════════════════════════════════════════════

pub(crate) fn parse_bool(raw: &str) -> Result<bool, ConvertError> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(ConvertError::InvalidBool {
            value: raw.to_string(),
        }),
    }
}

/// Base-10 `i64`, optional sign, no fraction, no separators.
pub(crate) fn parse_signed(raw: &str) -> Result<i64, ConvertError> {
    raw.parse::<i64>().map_err(|source| ConvertError::Int {
        value: raw.to_string(),
        source,
    })
}

/// Base-10 `u64`. A minus sign is rejected by the parser itself.
pub(crate) fn parse_unsigned(raw: &str) -> Result<u64, ConvertError> {
    raw.parse::<u64>().map_err(|source| ConvertError::Int {
        value: raw.to_string(),
        source,
    })
}

/// Decimal or exponent notation, parsed at 64 bits.
///
/// A finite literal too large for `f64` is a range error; explicit
/// `inf` / `infinity` spellings are accepted.
pub(crate) fn parse_float(raw: &str) -> Result<f64, ConvertError> {
    let value = raw.parse::<f64>().map_err(|source| ConvertError::Float {
        value: raw.to_string(),
        source,
    })?;
    if value.is_infinite() && !is_infinity_literal(raw) {
        return Err(ConvertError::FloatRange {
            value: raw.to_string(),
        });
    }
    Ok(value)
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn narrow<T, W>(value: W, raw: &str, kind: FieldKind) -> Result<T, ConvertError>
where
    T: TryFrom<W>,
{
    T::try_from(value).map_err(|_| ConvertError::OutOfRange {
        value: raw.to_string(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_spellings() {
        for raw in ["TRUE", "True", "true", "T", "t", "1"] {
            let mut v = false;
            convert(FieldSlot::Bool(&mut v), raw).unwrap();
            assert!(v, "{raw}");
        }
        for raw in ["FALSE", "False", "false", "F", "f", "0"] {
            let mut v = true;
            convert(FieldSlot::Bool(&mut v), raw).unwrap();
            assert!(!v, "{raw}");
        }
    }

    #[test]
    fn test_bool_rejects_other_text() {
        for raw in ["2", "invalid", "yes", "tRUE", " true"] {
            let mut v = false;
            let err = convert(FieldSlot::Bool(&mut v), raw).unwrap_err();
            assert!(matches!(err, ConvertError::InvalidBool { .. }), "{raw}");
            assert!(!v);
        }
    }

    #[test]
    fn test_empty_leaves_field_untouched() {
        let mut b = true;
        let mut i = -7i32;
        let mut u = 7u16;
        let mut f = 1.5f64;
        convert(FieldSlot::Bool(&mut b), "").unwrap();
        convert(FieldSlot::I32(&mut i), "").unwrap();
        convert(FieldSlot::U16(&mut u), "").unwrap();
        convert(FieldSlot::F64(&mut f), "").unwrap();
        assert!(b);
        assert_eq!(i, -7);
        assert_eq!(u, 7);
        assert_eq!(f, 1.5);
    }

    #[test]
    fn test_text_overwrites_even_when_empty() {
        let mut s = "previous".to_string();
        convert(FieldSlot::Text(&mut s), "").unwrap();
        assert_eq!(s, "");
        convert(FieldSlot::Text(&mut s), "héllo wörld").unwrap();
        assert_eq!(s, "héllo wörld");
    }

    #[test]
    fn test_signed() {
        let mut v = 0i64;
        convert(FieldSlot::I64(&mut v), "12345").unwrap();
        assert_eq!(v, 12345);
        convert(FieldSlot::I64(&mut v), "-12345").unwrap();
        assert_eq!(v, -12345);
        convert(FieldSlot::I64(&mut v), "+42").unwrap();
        assert_eq!(v, 42);

        for raw in ["1.5", "a", "1,000", "9223372036854775808"] {
            let err = convert(FieldSlot::I64(&mut v), raw).unwrap_err();
            assert!(matches!(err, ConvertError::Int { .. }), "{raw}");
            assert_eq!(v, 42);
        }
    }

    #[test]
    fn test_signed_narrowing() {
        let mut v = 5i8;
        convert(FieldSlot::I8(&mut v), "-128").unwrap();
        assert_eq!(v, -128);

        let err = convert(FieldSlot::I8(&mut v), "300").unwrap_err();
        assert_eq!(
            err,
            ConvertError::OutOfRange {
                value: "300".into(),
                kind: FieldKind::Int(IntWidth::W8),
            }
        );
        assert_eq!(v, -128);
    }

    #[test]
    fn test_unsigned() {
        let mut v = 0u64;
        convert(FieldSlot::U64(&mut v), "12345").unwrap();
        assert_eq!(v, 12345);

        for raw in ["-12345", "1.5", "a", "-0"] {
            let err = convert(FieldSlot::U64(&mut v), raw).unwrap_err();
            assert!(matches!(err, ConvertError::Int { .. }), "{raw}");
            assert_eq!(v, 12345);
        }

        let mut small = 1u8;
        let err = convert(FieldSlot::U8(&mut small), "256").unwrap_err();
        assert!(matches!(err, ConvertError::OutOfRange { .. }));
        assert_eq!(small, 1);
    }

    #[test]
    fn test_float32_narrowing() {
        let mut v = 0f32;
        convert(FieldSlot::F32(&mut v), "123.45").unwrap();
        assert_eq!(v, 123.45f32);
        convert(FieldSlot::F32(&mut v), "-12345").unwrap();
        assert_eq!(v, -12345.0);
        convert(FieldSlot::F32(&mut v), "1e38").unwrap();
        assert_eq!(v, 1e38f32);
        convert(FieldSlot::F32(&mut v), "1e-45").unwrap();
        assert_eq!(v, 1e-45f32);

        // below the smallest f32 subnormal
        convert(FieldSlot::F32(&mut v), "1e-46").unwrap();
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_float_range_asymmetry() {
        let mut v = 1.0f64;
        let err = convert(FieldSlot::F64(&mut v), "1e400").unwrap_err();
        assert_eq!(err, ConvertError::FloatRange { value: "1e400".into() });
        assert_eq!(v, 1.0);

        convert(FieldSlot::F64(&mut v), "1e-400").unwrap();
        assert_eq!(v, 0.0);

        convert(FieldSlot::F64(&mut v), "-Infinity").unwrap();
        assert_eq!(v, f64::NEG_INFINITY);
    }

    #[test]
    fn test_float_rejects_text() {
        let mut v = 0f32;
        let err = convert(FieldSlot::F32(&mut v), "a").unwrap_err();
        assert!(matches!(err, ConvertError::Float { .. }));
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_unsupported_fails_even_for_empty() {
        let err = convert(FieldSlot::Unsupported("decimal"), "").unwrap_err();
        assert!(err.is_unsupported_kind());
        assert_eq!(err.to_string(), "unsupported kind 'decimal'");
    }
}
