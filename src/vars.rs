// ABOUTME: YAML files of variable overrides layered in front of the process environment.
// ABOUTME: Accepts a flat mapping of names to scalar values.

use crate::error::{Error, Result};
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::Path;

/// A flat `NAME: value` mapping loaded from YAML.
///
/// Numbers and booleans are stored in their YAML spelling, `null` as an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarsFile {
    vars: HashMap<String, String>,
}

impl VarsFile {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: HashMap<String, Value> = serde_yaml::from_str(yaml)?;
        let vars = raw
            .into_iter()
            .map(|(name, value)| {
                validate_name(&name)?;
                let value = scalar_to_string(&name, value)?;
                Ok((name, value))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(Self { vars })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.vars
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidVars(
            "variable name cannot be empty".to_string(),
        ));
    }
    if name.contains('=') {
        return Err(Error::InvalidVars(format!(
            "variable name '{name}' may not contain '='"
        )));
    }
    Ok(())
}

fn scalar_to_string(name: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        _ => Err(Error::InvalidVars(format!("value of '{name}' must be a scalar"))),
    }
}
