use std::fmt;

/// One `key=value` or positional argument of a filter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FilterArg {
    /// Option name; `None` for positional arguments.
    pub key: Option<String>,
    /// Rendered value, unquoted.
    pub value: String,
    /// Wrap the value in single quotes when rendering.
    pub quoted: bool,
}

impl fmt::Display for FilterArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(key) = &self.key {
            write!(f, "{key}=")?;
        }
        // Commas split filters in a chain unless quoted.
        if self.quoted || self.value.contains(',') {
            write!(f, "'{}'", self.value)
        } else {
            f.write_str(&self.value)
        }
    }
}

/// A single ffmpeg filter such as `zoompan=z='1.1':d=1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Filter {
    /// Filter name.
    pub name: String,
    /// Arguments in render order.
    pub args: Vec<FilterArg>,
}

impl Filter {
    /// Filter with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append `key=value`.
    pub fn arg(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.args.push(FilterArg {
            key: Some(key.into()),
            value: value.to_string(),
            quoted: false,
        });
        self
    }

    /// Append `key='expr'`.
    pub fn expr(mut self, key: impl Into<String>, expr: impl fmt::Display) -> Self {
        self.args.push(FilterArg {
            key: Some(key.into()),
            value: expr.to_string(),
            quoted: true,
        });
        self
    }

    /// Append a positional value.
    pub fn pos(mut self, value: impl fmt::Display) -> Self {
        self.args.push(FilterArg {
            key: None,
            value: value.to_string(),
            quoted: false,
        });
        self
    }

    /// Value of the keyed argument `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|a| a.key.as_deref() == Some(key))
            .map(|a| a.value.as_str())
    }

    /// Replace the keyed argument `key`. Returns `false` when the filter has no such argument.
    pub fn set(&mut self, key: &str, value: impl fmt::Display) -> bool {
        match self.args.iter_mut().find(|a| a.key.as_deref() == Some(key)) {
            Some(arg) => {
                arg.value = value.to_string();
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            f.write_str(if i == 0 { "=" } else { ":" })?;
            write!(f, "{arg}")?;
        }
        Ok(())
    }
}

/// Filters applied in sequence, rendered comma-separated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct FilterChain(Vec<Filter>);

impl FilterChain {
    /// Empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter.
    pub fn push(&mut self, filter: Filter) {
        self.0.push(filter);
    }

    /// Builder-style [`FilterChain::push`].
    pub fn then(mut self, filter: Filter) -> Self {
        self.0.push(filter);
        self
    }

    /// Insert a filter before all others.
    pub fn prepend(&mut self, filter: Filter) {
        self.0.insert(0, filter);
    }

    /// Append every filter of `other`.
    pub fn extend(&mut self, other: FilterChain) {
        self.0.extend(other.0);
    }

    /// Filters in order.
    pub fn filters(&self) -> &[Filter] {
        &self.0
    }

    /// First filter named `name`.
    pub fn find(&self, name: &str) -> Option<&Filter> {
        self.0.iter().find(|f| f.name == name)
    }

    /// First filter named `name`, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Filter> {
        self.0.iter_mut().find(|f| f.name == name)
    }

    /// `true` when the chain has no filters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of filters.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Filter>> for FilterChain {
    fn from(filters: Vec<Filter>) -> Self {
        Self(filters)
    }
}

impl FromIterator<Filter> for FilterChain {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, filter) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{filter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/filter.rs"]
mod tests;
