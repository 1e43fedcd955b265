use std::borrow::Cow;

/// Escape the five characters that are special in markup text and
/// attribute values.
///
/// Returns the input unchanged (borrowed) if nothing needs escaping.
///
/// ```rust
/// use htmlgen::escape;
///
/// assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &#34;c&#34;");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(content: &str) -> Cow<str> {
    if !content.contains(['&', '\'', '<', '>', '"']) {
        return Cow::Borrowed(content);
    }
    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '\'' => result.push_str("&#39;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&#34;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
