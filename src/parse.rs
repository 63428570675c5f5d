//! Tokenizer/dispatcher -- one pass over the invocation tokens.
//!
//! Severity is two-tier: a coercion failure on a value-bearing assignment
//! (positional or optional-with-value) aborts the parse, while a failure
//! on a flag-style boolean is recorded and parsing continues. The flag's
//! presence alone already carries the truthy signal, so the second case
//! stays cosmetic. Unknown dash-prefixed tokens pass through untouched.

use tracing::{debug, warn};

use crate::coerce::{self, Coercion};
use crate::error::{Error, Result};
use crate::registry::{Registry, HELP_LONG, HELP_SHORT};
use crate::usage;

/// Result of a completed parse pass.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Every token was consumed. Flag-style coercion failures are
    /// collected here rather than aborting the pass.
    Completed { diagnostics: Vec<Coercion> },
    /// A reserved help token was seen; carries the rendered usage text.
    /// Tokens after the help flag are never processed.
    Help(String),
}

impl Registry {
    /// Parse the invocation tokens (program name excluded).
    ///
    /// Consumes the positional queue destructively; a registry is parsed
    /// once per invocation.
    pub fn parse(&mut self, tokens: &[String]) -> Result<ParseOutcome> {
        let mut diagnostics = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];

            // Reserved help tokens short-circuit the whole pass.
            if token == HELP_SHORT || token == HELP_LONG {
                return Ok(ParseOutcome::Help(usage::render(self)));
            }

            if token.starts_with('-') {
                let next_is_value = tokens.get(i + 1).is_some_and(|t| !t.starts_with('-'));

                if next_is_value && self.is_declared(token) {
                    self.assign(token, &tokens[i + 1])?;
                    i += 2;
                    continue;
                }

                if self.is_declared(token) {
                    if let Some(failure) = self.assign_flag(token) {
                        warn!(
                            flag = %token,
                            expected = failure.expected,
                            actual = failure.actual,
                            "flag value does not coerce to declared type"
                        );
                        diagnostics.push(failure);
                    }
                    i += 1;
                    continue;
                }

                debug!(token = %token, "ignoring unregistered option token");
                i += 1;
                continue;
            }

            match self.pop_positional() {
                Some(name) => self.assign(&name, token)?,
                None => return Err(Error::UnconsumedToken(token.clone())),
            }
            i += 1;
        }
        Ok(ParseOutcome::Completed { diagnostics })
    }

    /// Coerce `raw` against the declared type of `name`, storing it only
    /// on success.
    fn assign(&mut self, name: &str, raw: &str) -> Result<()> {
        let decl = match self.lookup_mut(name) {
            Some(d) => d,
            None => return Err(Error::NotFound(name.to_string())),
        };
        let outcome = coerce::coerce(decl.ty, raw);
        if !outcome.is_ok() {
            return Err(Error::Coercion {
                expected: outcome.expected,
                actual: outcome.actual,
            });
        }
        debug!(name = %decl.name, value = %raw, "assigned argument value");
        decl.raw_value = raw.to_string();
        Ok(())
    }

    /// Store the flag-style literal `"true"`, returning the coercion
    /// failure (if any) for non-fatal reporting. The store happens before
    /// the check so a mistyped flag still records its presence.
    fn assign_flag(&mut self, name: &str) -> Option<Coercion> {
        let decl = self.lookup_mut(name)?;
        decl.raw_value = "true".to_string();
        let outcome = coerce::coerce(decl.ty, "true");
        if outcome.is_ok() {
            None
        } else {
            Some(outcome)
        }
    }
}

/// Drive a registry at the process boundary: help text to stdout with
/// exit 0, fatal errors to stderr with exit 1, non-fatal diagnostics to
/// stderr without terminating.
pub fn run(registry: &mut Registry, tokens: &[String]) {
    match registry.parse(tokens) {
        Ok(ParseOutcome::Help(text)) => {
            print!("{}", text);
            std::process::exit(0);
        }
        Ok(ParseOutcome::Completed { diagnostics }) => {
            for d in diagnostics {
                eprintln!(
                    "{}",
                    Error::Coercion {
                        expected: d.expected,
                        actual: d.actual,
                    }
                );
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
