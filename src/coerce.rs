//! Type coercion engine -- pure string-to-scalar conversion.
//!
//! One function per [`ArgType`]. Each returns a [`Coercion`] outcome and
//! nothing else: no side effects, no registry state.

use std::num::IntErrorKind;

use serde::Serialize;

/// The closed set of scalar types an argument can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    String,
    Int,
    Float,
    Double,
    Bool,
    Char,
}

impl ArgType {
    /// Diagnostic tag used in coercion outcomes and error messages.
    pub fn tag(self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Int => "int",
            ArgType::Float => "float",
            ArgType::Double => "double",
            ArgType::Bool => "bool",
            ArgType::Char => "char",
        }
    }
}

/// A successfully coerced scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Char(char),
}

impl ArgValue {
    pub fn tag(&self) -> &'static str {
        match self {
            ArgValue::Str(_) => "string",
            ArgValue::Int(_) => "int",
            ArgValue::Float(_) => "float",
            ArgValue::Double(_) => "double",
            ArgValue::Bool(_) => "bool",
            ArgValue::Char(_) => "char",
        }
    }
}

/// Outcome of one coercion attempt.
///
/// `value` is `Some` exactly when `expected == actual`. On failure `actual`
/// is a diagnostic label rather than a type name: `"string"` means the
/// input was not parseable, `"out_of_range"` means a numeric value
/// overflowed its format.
#[derive(Debug, Clone, PartialEq)]
pub struct Coercion {
    pub value: Option<ArgValue>,
    pub expected: &'static str,
    pub actual: &'static str,
}

impl Coercion {
    fn ok(value: ArgValue) -> Self {
        let tag = value.tag();
        Coercion {
            value: Some(value),
            expected: tag,
            actual: tag,
        }
    }

    fn fail(expected: &'static str, actual: &'static str) -> Self {
        Coercion {
            value: None,
            expected,
            actual,
        }
    }

    /// True when the input coerced to the expected type.
    pub fn is_ok(&self) -> bool {
        self.value.is_some()
    }
}

/// Coerce `raw` against the declared `ty`.
pub fn coerce(ty: ArgType, raw: &str) -> Coercion {
    match ty {
        ArgType::String => coerce_string(raw),
        ArgType::Int => coerce_int(raw),
        ArgType::Float => coerce_float(raw),
        ArgType::Double => coerce_double(raw),
        ArgType::Bool => coerce_bool(raw),
        ArgType::Char => coerce_char(raw),
    }
}

/// Identity conversion; never fails.
pub fn coerce_string(raw: &str) -> Coercion {
    Coercion::ok(ArgValue::Str(raw.to_string()))
}

/// Base-10 signed integer. The whole input must parse; trailing garbage is
/// a failure, not a partial consume.
pub fn coerce_int(raw: &str) -> Coercion {
    match raw.parse::<i64>() {
        Ok(n) => Coercion::ok(ArgValue::Int(n)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Coercion::fail("int", "out_of_range")
            }
            _ => Coercion::fail("int", "string"),
        },
    }
}

/// Single-precision float. Parsing saturates to infinity on overflow
/// instead of erroring, so any non-finite result is reported out of range.
pub fn coerce_float(raw: &str) -> Coercion {
    match raw.parse::<f32>() {
        Ok(v) if v.is_finite() => Coercion::ok(ArgValue::Float(v)),
        Ok(_) => Coercion::fail("float", "out_of_range"),
        Err(_) => Coercion::fail("float", "string"),
    }
}

/// Double-precision float; same overflow handling as [`coerce_float`].
pub fn coerce_double(raw: &str) -> Coercion {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Coercion::ok(ArgValue::Double(v)),
        Ok(_) => Coercion::fail("double", "out_of_range"),
        Err(_) => Coercion::fail("double", "string"),
    }
}

/// Case-insensitive boolean: "true"/"1" and "false"/"0".
pub fn coerce_bool(raw: &str) -> Coercion {
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Coercion::ok(ArgValue::Bool(true))
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Coercion::ok(ArgValue::Bool(false))
    } else {
        Coercion::fail("bool", "string")
    }
}

/// Exactly one character, multi-byte included.
pub fn coerce_char(raw: &str) -> Coercion {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Coercion::ok(ArgValue::Char(c)),
        _ => Coercion::fail("char", "string"),
    }
}
