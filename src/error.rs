// ABOUTME: Application-wide error types for envlookup.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::lookup::UndefinedVariable;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    UndefinedVariable(#[from] UndefinedVariable),

    #[error("no substitution for the expression '${{{0}}}'")]
    NoSubstitution(String),

    #[error("invalid vars file: {0}")]
    InvalidVars(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
