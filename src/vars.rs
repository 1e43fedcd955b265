//! Variable text: text with `$name` references expanded at render time.
//!
//! A variable is a `$` followed by an identifier (`[a-zA-Z_][a-zA-Z0-9_]*`).
//! `$$` expands to a literal `$`. A `$` followed by anything else is a
//! variable with an empty name, which is never bound and so expands to
//! `undefined`.

use std::borrow::Cow;

use genawaiter::rc::gen;
use genawaiter::yield_;

use crate::entity::escape;
use crate::environment::Environment;

const DELIMITER: char = '$';

/// Substituted for variables that are not bound in the environment.
pub const UNDEFINED: &str = "undefined";

/// The location of a variable reference in variable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarSpan {
    /// Byte offset of the leading `$`.
    pub start: usize,
    /// Length in bytes, including the leading `$`.
    pub len: usize,
}

impl VarSpan {
    /// Byte offset just past the span.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The variable name without its leading `$`.
    ///
    /// This is `"$"` for an escaped delimiter and `""` for a stray one.
    pub fn name<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start + 1..self.end()]
    }
}

/// Length of the name that follows a delimiter: either a second delimiter
/// or the longest identifier at the start of `rest`.
fn name_len(rest: &str) -> usize {
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, DELIMITER)) => 1,
        Some((_, c)) if c.is_ascii_alphabetic() || c == '_' => chars
            .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
            .map(|(i, _)| i)
            .unwrap_or(rest.len()),
        _ => 0,
    }
}

/// Find all variable spans in `text`, in order.
///
/// ```rust
/// use htmlgen::{parse_vars, VarSpan};
///
/// assert_eq!(parse_vars("01234 $worl"), vec![VarSpan { start: 6, len: 5 }]);
/// assert!(parse_vars("no variables").is_empty());
/// ```
pub fn parse_vars(text: &str) -> Vec<VarSpan> {
    let mut vars = Vec::new();
    let mut offset = 0;
    while let Some(index) = text[offset..].find(DELIMITER) {
        let start = offset + index;
        let len = 1 + name_len(&text[start + 1..]);
        vars.push(VarSpan { start, len });
        offset = start + len;
    }
    vars
}

/// Variable text leaf.
///
/// The text is stored raw; escaping (unless unsafe) happens during
/// expansion, to both the literal parts and the substituted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarText {
    text: String,
    vars: Vec<VarSpan>,
    is_unsafe: bool,
}

impl VarText {
    /// Create variable text, escaping at render time.
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let vars = parse_vars(&text);
        VarText {
            text,
            vars,
            is_unsafe: false,
        }
    }

    /// Create variable text that is never escaped.
    pub fn new_unsafe<S: Into<String>>(text: S) -> Self {
        let mut var_text = Self::new(text);
        var_text.is_unsafe = true;
        var_text
    }

    /// The raw text.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// The variable spans in the text.
    pub fn vars(&self) -> &[VarSpan] {
        &self.vars
    }

    /// Whether escaping is disabled.
    pub fn is_unsafe(&self) -> bool {
        self.is_unsafe
    }

    /// Replace the text.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        self.vars = parse_vars(&self.text);
    }

    /// Append to the text.
    ///
    /// The whole text is scanned again, as the appended part may complete a
    /// variable name that ended the old text.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
        self.vars = parse_vars(&self.text);
    }

    /// Enable or disable escaping.
    pub fn set_unsafe(&mut self, is_unsafe: bool) {
        self.is_unsafe = is_unsafe;
    }

    fn escaped<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.is_unsafe {
            Cow::Borrowed(s)
        } else {
            escape(s)
        }
    }

    /// The expanded output as a sequence of pieces.
    pub(crate) fn chunks<'a>(
        &'a self,
        env: Option<&'a Environment>,
    ) -> impl Iterator<Item = Cow<'a, str>> + 'a {
        gen!({
            let mut offset = 0;
            for span in &self.vars {
                yield_!(self.escaped(&self.text[offset..span.start]));
                let name = span.name(&self.text);
                if name.len() == 1 && name.starts_with(DELIMITER) {
                    // never escaped; it's not a markup character
                    yield_!(Cow::Borrowed(&self.text[span.start..span.start + 1]));
                } else {
                    let value = env
                        .and_then(|env| env.get(name))
                        .map(|value| value.as_str())
                        .unwrap_or(UNDEFINED);
                    yield_!(self.escaped(value));
                }
                offset = span.end();
            }
            yield_!(self.escaped(&self.text[offset..]));
        })
        .into_iter()
    }

    /// Expand variables against `env`.
    ///
    /// ```rust
    /// use htmlgen::{Environment, VarText};
    ///
    /// let env: Environment = [("name", "foo&bar")].into_iter().collect();
    /// let text = VarText::new("hello, $name; $missing costs $$5");
    /// assert_eq!(text.expand(Some(&env)), "hello, foo&amp;bar; undefined costs $5");
    /// ```
    pub fn expand(&self, env: Option<&Environment>) -> String {
        let mut result = String::with_capacity(self.text.len());
        for chunk in self.chunks(env) {
            result.push_str(&chunk);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn spans(spans: &[(usize, usize)]) -> Vec<VarSpan> {
        spans
            .iter()
            .map(|(start, len)| VarSpan {
                start: *start,
                len: *len,
            })
            .collect()
    }

    #[rstest]
    #[case("", &[])]
    #[case("hello", &[])]
    #[case("01234 $worl", &[(6, 5)])]
    #[case("01234 $worl ", &[(6, 5)])]
    #[case("01234 $worl foo", &[(6, 5)])]
    #[case("01234 $worl $ $$ $", &[(6, 5), (12, 1), (14, 2), (17, 1)])]
    #[case("$$$bar?", &[(0, 2), (2, 4)])]
    #[case("$0bar", &[(0, 1)])]
    #[case("$bar0", &[(0, 5)])]
    #[case("$_x.$y", &[(0, 3), (4, 2)])]
    #[case("é$x", &[(2, 2)])]
    fn test_parse_vars(#[case] text: &str, #[case] expected: &[(usize, usize)]) {
        assert_eq!(parse_vars(text), spans(expected));
    }

    #[test]
    fn test_span_name() {
        let text = "a $name $$ $";
        let vars = parse_vars(text);
        let names: Vec<_> = vars.iter().map(|v| v.name(text)).collect();
        assert_eq!(names, ["name", "$", ""]);
    }

    #[test]
    fn test_push_str_reparses() {
        let mut text = VarText::new("hello, $na");
        text.push_str("me!");
        assert_eq!(text.vars(), spans(&[(7, 5)]));
        let env: Environment = [("name", "foo")].into_iter().collect();
        assert_eq!(text.expand(Some(&env)), "hello, foo!");
    }

    #[test]
    fn test_set_reparses() {
        let mut text = VarText::new("$a");
        text.set("no vars");
        assert!(text.vars().is_empty());
    }

    #[test]
    fn test_expand_without_environment() {
        let text = VarText::new("$a and $$");
        assert_eq!(text.expand(None), "undefined and $");
    }

    #[test]
    fn test_unsafe_leaves_markup() {
        let env: Environment = [("x", "<b>")].into_iter().collect();
        let text = VarText::new_unsafe("<i>$x</i>");
        assert!(text.is_unsafe());
        assert_eq!(text.expand(Some(&env)), "<i><b></i>");
    }
}
