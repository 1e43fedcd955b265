use std::fmt::{Display, Formatter};

use ahash::HashMap;

/// A value bound to a variable name in an [`Environment`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum VarValue {
    /// A string, substituted literally (and escaped unless the text is unsafe).
    String(String),
}

impl VarValue {
    /// The text substituted for a variable bound to this value.
    pub fn as_str(&self) -> &str {
        match self {
            VarValue::String(s) => s,
        }
    }
}

impl Display for VarValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for VarValue {
    fn from(s: String) -> Self {
        VarValue::String(s)
    }
}

impl From<&str> for VarValue {
    fn from(s: &str) -> Self {
        VarValue::String(s.to_string())
    }
}

/// Variable bindings used to expand variable text at render time.
///
/// An environment is passed to each render call; the tree never stores it.
///
/// ```rust
/// use htmlgen::Environment;
///
/// let env: Environment = [("name", "foo")].into_iter().collect();
/// assert_eq!(env.get("name").map(|v| v.as_str()), Some("foo"));
/// assert!(env.get("other").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Environment {
    vars: HashMap<String, VarValue>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<VarValue>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Look up a variable by name.
    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.vars.get(name)
    }

    /// Remove a binding, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<VarValue> {
        self.vars.remove(name)
    }

    /// The number of bindings.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<VarValue>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (name, value) in iter {
            env.insert(name, value);
        }
        env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces() {
        let mut env = Environment::new();
        env.insert("a", "1");
        env.insert("a", String::from("2"));
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("a"), Some(&VarValue::String("2".to_string())));
    }

    #[test]
    fn test_remove() {
        let mut env: Environment = [("a", "1")].into_iter().collect();
        assert_eq!(env.remove("a").map(|v| v.to_string()), Some("1".to_string()));
        assert!(env.is_empty());
    }
}
