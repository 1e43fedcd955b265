use crate::element::Element;
use crate::entity::escape;
use crate::vars::VarText;

/// The type of a node.
///
/// Access it using [`Value::value_type`] or
/// [`Html::value_type`](crate::Html::value_type).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Wrapper that renders only its children.
    Fragment,
    /// The `html` element, rendered after a doctype declaration.
    Document,
    /// An element, possibly self-closing.
    Element,
    /// A comment wrapping its children.
    Comment,
    /// Text, escaped when it was added.
    Text,
    /// Text with variables expanded at render time.
    VarText,
}

/// The value of a node.
///
/// Access it using [`Html::value`](crate::Html::value). A node's value is
/// fixed when it's created; elements and text are changed through the `Html`
/// methods, which keep self-closing elements and leaves without children.
#[derive(Debug)]
pub enum Value {
    /// Renders its children and nothing else.
    Fragment,
    /// The `html` element; compact and pretty output start with `<!DOCTYPE html>`.
    Document(Element),
    /// An element with a name and attributes.
    Element(Element),
    /// A comment; its children are rendered inside `<!-- -->`.
    Comment,
    /// Text.
    Text(Text),
    /// Variable text.
    VarText(VarText),
}

impl Value {
    /// Returns the type of the value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Fragment => ValueType::Fragment,
            Value::Document(_) => ValueType::Document,
            Value::Element(_) => ValueType::Element,
            Value::Comment => ValueType::Comment,
            Value::Text(_) => ValueType::Text,
            Value::VarText(_) => ValueType::VarText,
        }
    }

    /// The element, for documents and elements.
    pub fn element(&self) -> Option<&Element> {
        match self {
            Value::Document(element) | Value::Element(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Value::Document(element) | Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Whether a node with this value may have children.
    pub fn accepts_children(&self) -> bool {
        match self {
            Value::Fragment | Value::Document(_) | Value::Comment => true,
            Value::Element(element) => !element.is_void(),
            Value::Text(_) | Value::VarText(_) => false,
        }
    }

    /// A detached duplicate: attributes and text are copied, children are
    /// not.
    pub(crate) fn copy(&self) -> Value {
        match self {
            Value::Fragment => Value::Fragment,
            Value::Comment => Value::Comment,
            Value::Document(element) => Value::Document(element.copy()),
            Value::Element(element) => Value::Element(element.copy()),
            Value::Text(text) => Value::Text(text.clone()),
            Value::VarText(text) => Value::VarText(text.clone()),
        }
    }
}

/// Text leaf.
///
/// The stored text is already escaped: [`Text::push_str`] escapes as it
/// appends, [`Text::push_str_unsafe`] does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    /// Create text from unescaped input.
    pub fn new(text: &str) -> Self {
        Text {
            text: escape(text).into_owned(),
        }
    }

    /// Create text from input that is used as is.
    pub fn new_unsafe<S: Into<String>>(text: S) -> Self {
        Text { text: text.into() }
    }

    /// Get the text as it will be rendered.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Replace the text. The new text is used as is.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// Append escaped text.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(&escape(text));
    }

    /// Append text without escaping.
    pub fn push_str_unsafe(&mut self, text: &str) {
        self.text.push_str(text);
    }
}
