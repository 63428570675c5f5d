//! Typed command-line argument parsing.
//!
//! Declare named positional and optional arguments with an expected type.
//! One pass over the invocation tokens fills the declarations; afterward,
//! strongly-typed values are read back through the accessor:
//!
//! ```
//! use argtype::{ArgKind, ArgType, Registry};
//!
//! let mut registry = Registry::new("demo");
//! registry.declare("count", ArgKind::Positional, true, "How many", ArgType::Int, "")?;
//! registry.declare("--label", ArgKind::Optional, false, "Display label", ArgType::String, "item")?;
//!
//! let tokens: Vec<String> = ["3", "--label", "widget"].iter().map(|s| s.to_string()).collect();
//! registry.parse(&tokens)?;
//!
//! assert_eq!(registry.get::<i64>("count")?, 3);
//! assert_eq!(registry.get::<String>("--label")?, "widget");
//! # Ok::<(), argtype::Error>(())
//! ```
//!
//! Every assignment is validated immediately against the declared type.
//! Mismatches on value-bearing assignments abort the parse; mismatches on
//! flag-style booleans are collected as non-fatal diagnostics. The `-h`
//! and `--help` tokens are reserved and render usage text.

pub mod access;
pub mod coerce;
pub mod error;
pub mod parse;
pub mod registry;
pub mod usage;

pub use access::FromArgValue;
pub use coerce::{coerce, ArgType, ArgValue, Coercion};
pub use error::{Error, Result};
pub use parse::{run, ParseOutcome};
pub use registry::{ArgKind, Declaration, Registry, HELP_LONG, HELP_SHORT};
