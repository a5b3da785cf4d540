// ABOUTME: Sources of environment variable values for the resolver.
// ABOUTME: Covers the process environment, in-memory maps, and layered overrides.

use std::collections::HashMap;

/// A read-only mapping from variable name to value.
pub trait EnvironmentSource: Send + Sync {
    /// Get the value of `name`, or `None` if it is not defined.
    fn get(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
///
/// Values that are not valid Unicode are reported as undefined.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvironmentSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvironmentSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl<S: EnvironmentSource + ?Sized> EnvironmentSource for &S {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// Looks a name up in `front` first and falls back to `back`.
#[derive(Debug, Clone, Default)]
pub struct Layered<A, B> {
    front: A,
    back: B,
}

impl<A, B> Layered<A, B> {
    pub fn new(front: A, back: B) -> Self {
        Self { front, back }
    }
}

impl<A: EnvironmentSource, B: EnvironmentSource> EnvironmentSource for Layered<A, B> {
    fn get(&self, name: &str) -> Option<String> {
        self.front.get(name).or_else(|| self.back.get(name))
    }
}
