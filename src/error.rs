//! Crate-wide error taxonomy.

use thiserror::Error;

/// Errors produced by declaration, parsing, and typed access.
///
/// The `Display` renderings of [`Error::Coercion`] and
/// [`Error::UnconsumedToken`] are the exact single-line diagnostics the
/// process boundary writes to stderr.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument with this name is already registered.
    #[error("duplicate argument name: {0}")]
    DuplicateName(String),

    /// No argument with this name has been declared.
    #[error("unknown argument name: {0}")]
    NotFound(String),

    /// A value-bearing assignment failed type coercion.
    #[error("Invalid argument type. Expected '{expected}' got '{actual}'")]
    Coercion {
        expected: &'static str,
        actual: &'static str,
    },

    /// The argument was declared but never received a usable value.
    #[error("missing value for argument: {0}")]
    MissingValue(String),

    /// The caller requested a type other than the one the value coerced to.
    #[error("type mismatch for argument: requested '{requested}' got '{stored}'")]
    TypeMismatch {
        requested: &'static str,
        stored: &'static str,
    },

    /// A bare token arrived with no positional slot left to fill.
    #[error("Invalid argument: {0}")]
    UnconsumedToken(String),
}

pub type Result<T> = std::result::Result<T, Error>;
