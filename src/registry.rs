//! Argument registry -- declarations and the positional fill queue.

use std::collections::VecDeque;

use serde::Serialize;

use crate::coerce::ArgType;
use crate::error::{Error, Result};

/// Reserved short help flag, recognized before any generic dispatch.
pub const HELP_SHORT: &str = "-h";
/// Reserved long help flag.
pub const HELP_LONG: &str = "--help";

const HELP_TEXT: &str = "Display this help message";

/// How an argument is identified on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    /// Bare name, filled by position in declaration order.
    Positional,
    /// Dash-prefixed name, matched by the token itself.
    Optional,
}

/// One registered argument.
#[derive(Debug, Clone, Serialize)]
pub struct Declaration {
    pub name: String,
    pub kind: ArgKind,
    /// Informational only; not enforced after parsing.
    pub required: bool,
    pub help: String,
    #[serde(rename = "type")]
    pub ty: ArgType,
    /// Raw token text. Starts at the caller-supplied default (empty when
    /// none) and is overwritten by a successful assignment during parsing.
    #[serde(skip)]
    pub raw_value: String,
}

/// Insertion-ordered argument declarations plus the positional queue.
///
/// Declarations are appended by [`Registry::declare`], mutated in place
/// during the single parse pass, and read any number of times afterward
/// through the typed accessor. There is no deletion. A registry is a plain
/// owned value; distinct instances share nothing.
#[derive(Debug, Clone)]
pub struct Registry {
    program: String,
    args: Vec<Declaration>,
    /// Positional names in declaration order; each bare token pops one.
    positional: VecDeque<String>,
}

impl Registry {
    /// Create a registry for `program` with the reserved help flags
    /// pre-declared.
    pub fn new(program: impl Into<String>) -> Self {
        let mut registry = Registry {
            program: program.into(),
            args: Vec::new(),
            positional: VecDeque::new(),
        };
        for name in [HELP_SHORT, HELP_LONG] {
            registry
                .declare(name, ArgKind::Optional, false, HELP_TEXT, ArgType::Bool, "")
                .expect("reserved flags on an empty registry");
        }
        registry
    }

    /// Program name used in the usage banner.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Register `name`. Fails if the name is already taken, regardless of
    /// kind. Positional names are also queued for left-to-right filling.
    pub fn declare(
        &mut self,
        name: &str,
        kind: ArgKind,
        required: bool,
        help: &str,
        ty: ArgType,
        default: &str,
    ) -> Result<()> {
        if self.is_declared(name) {
            return Err(Error::DuplicateName(name.to_string()));
        }
        if kind == ArgKind::Positional {
            self.positional.push_back(name.to_string());
        }
        self.args.push(Declaration {
            name: name.to_string(),
            kind,
            required,
            help: help.to_string(),
            ty,
            raw_value: default.to_string(),
        });
        Ok(())
    }

    /// Look up a declaration by name.
    pub fn lookup(&self, name: &str) -> Result<&Declaration> {
        self.args
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub(crate) fn lookup_mut(&mut self, name: &str) -> Option<&mut Declaration> {
        self.args.iter_mut().find(|d| d.name == name)
    }

    /// True when `name` is registered.
    pub fn is_declared(&self, name: &str) -> bool {
        self.args.iter().any(|d| d.name == name)
    }

    /// Declarations in insertion order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.args.iter()
    }

    /// Pop the next unfilled positional name, declaration order.
    pub(crate) fn pop_positional(&mut self) -> Option<String> {
        self.positional.pop_front()
    }
}
