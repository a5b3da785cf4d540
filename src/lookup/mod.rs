// ABOUTME: Resolves placeholder keys against an environment source.
// ABOUTME: Handles plain lookups, switch statements, and strict/lenient policy.

mod source;
mod switch;

pub use source::{EnvironmentSource, Layered, ProcessEnv};
pub use switch::{Case, Switch};

use thiserror::Error;
use tracing::debug;

/// A placeholder could not be substituted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UndefinedVariable {
    #[error(
        "the environment variable '{name}' is not defined; could not substitute the expression '${{{expression}}}'"
    )]
    Missing { name: String, expression: String },

    #[error(
        "environment variable names may not contain '='; could not substitute the expression '${{{expression}}}'"
    )]
    MalformedSwitch { name: String, expression: String },
}

impl UndefinedVariable {
    /// The variable the failed expression refers to.
    pub fn name(&self) -> &str {
        match self {
            UndefinedVariable::Missing { name, .. }
            | UndefinedVariable::MalformedSwitch { name, .. } => name,
        }
    }

    /// The placeholder body, without the surrounding `${` and `}`.
    pub fn expression(&self) -> &str {
        match self {
            UndefinedVariable::Missing { expression, .. }
            | UndefinedVariable::MalformedSwitch { expression, .. } => expression,
        }
    }
}

/// Looks up placeholder keys such as `HOME` or `DEPLOY_ENV prod=a staging=b`.
///
/// A key containing '=' is always a switch statement: '=' is not valid in
/// POSIX or Windows variable names. The first whitespace run separates the
/// variable from its `match=replacement` cases and the first matching case
/// wins.
///
/// In strict mode an undefined variable is an error. In lenient mode it
/// yields `None`, the same result as a switch with no matching case.
#[derive(Debug, Clone)]
pub struct Resolver<S = ProcessEnv> {
    strict: bool,
    source: S,
}

impl Resolver<ProcessEnv> {
    /// A strict resolver over the process environment.
    pub fn new() -> Self {
        Self::strict()
    }

    pub fn strict() -> Self {
        Self::with_source(true, ProcessEnv)
    }

    pub fn lenient() -> Self {
        Self::with_source(false, ProcessEnv)
    }
}

impl Default for Resolver<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EnvironmentSource> Resolver<S> {
    pub fn with_source(strict: bool, source: S) -> Self {
        Self { strict, source }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve `key`, the text between `${` and `}`.
    ///
    /// `Ok(None)` means "no substitution"; what to do with the placeholder
    /// is up to the caller.
    pub fn lookup(&self, key: &str) -> Result<Option<String>, UndefinedVariable> {
        if key.contains('=') {
            return self.lookup_switch(key);
        }

        let value = self.source.get(key);
        debug!(name = key, found = value.is_some(), "looked up variable");

        if value.is_none() && self.strict {
            return Err(UndefinedVariable::Missing {
                name: key.to_string(),
                expression: key.to_string(),
            });
        }

        Ok(value)
    }

    fn lookup_switch(&self, statement: &str) -> Result<Option<String>, UndefinedVariable> {
        let Some(switch) = Switch::parse(statement) else {
            return Err(UndefinedVariable::MalformedSwitch {
                name: statement.to_string(),
                expression: statement.to_string(),
            });
        };

        let value = self.source.get(switch.name);
        debug!(
            name = switch.name,
            found = value.is_some(),
            "looked up switch variable"
        );

        if value.is_none() && self.strict {
            return Err(UndefinedVariable::Missing {
                name: switch.name.to_string(),
                expression: statement.to_string(),
            });
        }

        let selected = switch.select(value.as_deref());
        if selected.is_none() {
            debug!(name = switch.name, "no switch case matched");
        }
        Ok(selected.map(str::to_string))
    }
}
