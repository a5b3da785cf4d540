// ABOUTME: Replaces `${...}` placeholders in configuration text.
// ABOUTME: Delegates each key to a Resolver and supports the `$${...}` escape.

use crate::lookup::{EnvironmentSource, ProcessEnv, Resolver, UndefinedVariable};
use tracing::debug;

const ESCAPE: char = '$';

/// What to emit for a placeholder the resolver had no value for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unresolved {
    /// Leave `${key}` in the output untouched.
    #[default]
    Keep,
    /// Replace the placeholder with an empty string.
    Empty,
}

/// Scans text for `${key}` spans and splices in resolved values.
///
/// Substituted values are not scanned again. `$${key}` is emitted as a
/// literal `${key}`. An unterminated `${` or an empty `${}` is copied as-is.
#[derive(Debug, Clone)]
pub struct Substitutor<S = ProcessEnv> {
    resolver: Resolver<S>,
    unresolved: Unresolved,
}

impl Default for Substitutor<ProcessEnv> {
    fn default() -> Self {
        Self::new(Resolver::default())
    }
}

impl<S: EnvironmentSource> Substitutor<S> {
    pub fn new(resolver: Resolver<S>) -> Self {
        Self {
            resolver,
            unresolved: Unresolved::default(),
        }
    }

    pub fn unresolved(mut self, policy: Unresolved) -> Self {
        self.unresolved = policy;
        self
    }

    pub fn resolver(&self) -> &Resolver<S> {
        &self.resolver
    }

    /// Substitute every placeholder in `input`.
    ///
    /// The first failing lookup aborts and nothing is returned.
    pub fn replace(&self, input: &str) -> Result<String, UndefinedVariable> {
        let mut result = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(start) = rest.find("${") {
            let escaped = rest[..start].ends_with(ESCAPE);
            let literal_end = if escaped { start - ESCAPE.len_utf8() } else { start };
            result.push_str(&rest[..literal_end]);

            let after_open = &rest[start + 2..];
            let Some(close) = after_open.find('}') else {
                // Unterminated; copy the remainder verbatim.
                result.push_str(&rest[literal_end..]);
                return Ok(result);
            };

            let key = &after_open[..close];
            let placeholder = &rest[start..start + 2 + close + 1];
            rest = &after_open[close + 1..];

            if escaped || key.is_empty() {
                result.push_str(placeholder);
                continue;
            }

            match self.resolver.lookup(key)? {
                Some(value) => result.push_str(&value),
                None => {
                    debug!(key, policy = ?self.unresolved, "placeholder left unresolved");
                    if self.unresolved == Unresolved::Keep {
                        result.push_str(placeholder);
                    }
                }
            }
        }

        result.push_str(rest);
        Ok(result)
    }
}
