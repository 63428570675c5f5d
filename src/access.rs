//! Typed accessor -- re-coerce a stored raw value into a Rust type.

use crate::coerce::{self, ArgValue};
use crate::error::{Error, Result};
use crate::registry::Registry;

/// Conversion from a coerced [`ArgValue`] into a concrete Rust type.
///
/// Implemented for exactly the six scalar types an argument can declare.
/// A mismatch between the declared type and the requested one is a checked
/// [`Error::TypeMismatch`], never a runtime cast failure.
pub trait FromArgValue: Sized {
    /// Diagnostic tag for the requesting type.
    const TAG: &'static str;

    fn from_value(value: ArgValue) -> Option<Self>;
}

impl FromArgValue for String {
    const TAG: &'static str = "string";
    fn from_value(value: ArgValue) -> Option<Self> {
        match value {
            ArgValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl FromArgValue for i64 {
    const TAG: &'static str = "int";
    fn from_value(value: ArgValue) -> Option<Self> {
        match value {
            ArgValue::Int(n) => Some(n),
            _ => None,
        }
    }
}

impl FromArgValue for f32 {
    const TAG: &'static str = "float";
    fn from_value(value: ArgValue) -> Option<Self> {
        match value {
            ArgValue::Float(v) => Some(v),
            _ => None,
        }
    }
}

impl FromArgValue for f64 {
    const TAG: &'static str = "double";
    fn from_value(value: ArgValue) -> Option<Self> {
        match value {
            ArgValue::Double(v) => Some(v),
            _ => None,
        }
    }
}

impl FromArgValue for bool {
    const TAG: &'static str = "bool";
    fn from_value(value: ArgValue) -> Option<Self> {
        match value {
            ArgValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FromArgValue for char {
    const TAG: &'static str = "char";
    fn from_value(value: ArgValue) -> Option<Self> {
        match value {
            ArgValue::Char(c) => Some(c),
            _ => None,
        }
    }
}

impl Registry {
    /// Retrieve `name` as `T`, re-running coercion on the stored raw
    /// value.
    ///
    /// Fails with [`Error::MissingValue`] when the stored value does not
    /// coerce (declared but never supplied, no usable default) and with
    /// [`Error::TypeMismatch`] when `T` is not the declared type. Never
    /// mutates; callable any number of times.
    pub fn get<T: FromArgValue>(&self, name: &str) -> Result<T> {
        let decl = self.lookup(name)?;
        let outcome = coerce::coerce(decl.ty, &decl.raw_value);
        let value = outcome
            .value
            .ok_or_else(|| Error::MissingValue(name.to_string()))?;
        let stored = value.tag();
        T::from_value(value).ok_or(Error::TypeMismatch {
            requested: T::TAG,
            stored,
        })
    }

    /// The stored raw token text, untyped.
    pub fn raw(&self, name: &str) -> Result<&str> {
        Ok(&self.lookup(name)?.raw_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::ArgType;
    use crate::registry::ArgKind;

    fn registry() -> Registry {
        let mut registry = Registry::new("prog");
        registry
            .declare("--int", ArgKind::Optional, false, "", ArgType::Int, "42")
            .unwrap();
        registry
            .declare("--float", ArgKind::Optional, false, "", ArgType::Float, "2.5")
            .unwrap();
        registry
            .declare("--double", ArgKind::Optional, false, "", ArgType::Double, "2.5")
            .unwrap();
        registry
            .declare("--bool", ArgKind::Optional, false, "", ArgType::Bool, "true")
            .unwrap();
        registry
            .declare("--char", ArgKind::Optional, false, "", ArgType::Char, "x")
            .unwrap();
        registry
            .declare("--string", ArgKind::Optional, false, "", ArgType::String, "hello")
            .unwrap();
        registry
    }

    #[test]
    fn typed_values_read_back() {
        let registry = registry();
        assert_eq!(registry.get::<i64>("--int").unwrap(), 42);
        assert_eq!(registry.get::<f32>("--float").unwrap(), 2.5);
        assert_eq!(registry.get::<f64>("--double").unwrap(), 2.5);
        assert!(registry.get::<bool>("--bool").unwrap());
        assert_eq!(registry.get::<char>("--char").unwrap(), 'x');
        assert_eq!(registry.get::<String>("--string").unwrap(), "hello");
    }

    #[test]
    fn get_is_repeatable() {
        let registry = registry();
        assert_eq!(registry.get::<i64>("--int").unwrap(), 42);
        assert_eq!(registry.get::<i64>("--int").unwrap(), 42);
    }

    #[test]
    fn unsupplied_value_is_missing() {
        let mut registry = Registry::new("prog");
        registry
            .declare("--n", ArgKind::Optional, false, "", ArgType::Int, "")
            .unwrap();
        assert_eq!(
            registry.get::<i64>("--n").unwrap_err(),
            Error::MissingValue("--n".to_string())
        );
    }

    #[test]
    fn wrong_requested_type_is_mismatch() {
        let registry = registry();
        assert_eq!(
            registry.get::<bool>("--int").unwrap_err(),
            Error::TypeMismatch {
                requested: "bool",
                stored: "int"
            }
        );
    }

    #[test]
    fn unknown_name_is_not_found() {
        let registry = registry();
        assert_eq!(
            registry.get::<i64>("--nope").unwrap_err(),
            Error::NotFound("--nope".to_string())
        );
    }

    #[test]
    fn raw_returns_stored_text() {
        let registry = registry();
        assert_eq!(registry.raw("--int").unwrap(), "42");
    }

    #[test]
    fn empty_string_default_reads_back() {
        // String coercion never fails, so an unsupplied String argument
        // reads back as empty rather than missing.
        let mut registry = Registry::new("prog");
        registry
            .declare("--s", ArgKind::Optional, false, "", ArgType::String, "")
            .unwrap();
        assert_eq!(registry.get::<String>("--s").unwrap(), "");
    }
}
