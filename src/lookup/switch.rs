// ABOUTME: Tokenizer for switch statements such as `ENV prod=a staging=b`.
// ABOUTME: Splits the variable name from its cases and each case on its first '='.

/// A switch statement split into its driving variable and case body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Switch<'a> {
    pub name: &'a str,
    body: &'a str,
}

impl<'a> Switch<'a> {
    /// Split `statement` on its first run of whitespace.
    ///
    /// Returns `None` when there is no whitespace, i.e. no case body.
    pub fn parse(statement: &'a str) -> Option<Self> {
        let split = statement.find(char::is_whitespace)?;
        let name = &statement[..split];
        let body = statement[split..].trim_start();
        Some(Self { name, body })
    }

    /// Cases in the order they were written. Tokens without '=' are skipped.
    pub fn cases(self) -> impl Iterator<Item = Case<'a>> {
        self.body.split_whitespace().filter_map(|token| {
            let case = Case::parse(token);
            if case.is_none() {
                tracing::warn!(token, "ignoring switch case without '='");
            }
            case
        })
    }

    /// Replacement of the first case whose match equals `value`.
    pub fn select(&self, value: Option<&str>) -> Option<&'a str> {
        let value = value?;
        self.cases()
            .find(|case| case.matches == value)
            .map(|case| case.replacement)
    }
}

/// A single `match=replacement` case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case<'a> {
    pub matches: &'a str,
    pub replacement: &'a str,
}

impl<'a> Case<'a> {
    pub fn parse(token: &'a str) -> Option<Self> {
        let (matches, replacement) = token.split_once('=')?;
        Some(Self {
            matches,
            replacement,
        })
    }
}
