use crate::element::Element;
use crate::error::Error;
use crate::htmldata::{Html, Node, NodeData};
use crate::names::ElementId;
use crate::value::{Text, Value};
use crate::vars::VarText;

/// ## Creation
///
/// These create detached nodes. Attach them with [`Html::append`], or use
/// the `append_*` variants which create and attach in one go.
impl Html {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena_mut().new_node(NodeData {
            value,
            hidden: false,
        }))
    }

    /// Create an element. Void elements such as `br` and `img` are
    /// self-closing and can't get children.
    pub fn new_element(&mut self, element_id: ElementId) -> Node {
        self.new_node(Value::Element(Element::new(element_id)))
    }

    /// Create a document: an `html` element rendered after a doctype
    /// declaration.
    pub fn new_document(&mut self) -> Node {
        self.new_node(Value::Document(Element::new(ElementId::Html)))
    }

    /// Create a fragment, which renders only its children.
    pub fn new_fragment(&mut self) -> Node {
        self.new_node(Value::Fragment)
    }

    /// Create a comment. Its children are rendered inside `<!-- -->`.
    pub fn new_comment(&mut self) -> Node {
        self.new_node(Value::Comment)
    }

    /// Create a text node. The text is escaped.
    pub fn new_text(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(Text::new(text)))
    }

    /// Create a text node from text that is used as is.
    pub fn new_text_unsafe(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(Text::new_unsafe(text)))
    }

    /// Create a variable text node. Variables are expanded using the
    /// environment given when rendering; text and values are escaped.
    pub fn new_var_text(&mut self, text: &str) -> Node {
        self.new_node(Value::VarText(VarText::new(text)))
    }

    /// Create a variable text node that is never escaped.
    pub fn new_var_text_unsafe(&mut self, text: &str) -> Node {
        self.new_node(Value::VarText(VarText::new_unsafe(text)))
    }

    fn append_new(&mut self, parent: Node, value: Value) -> Result<Node, Error> {
        self.check_accepts_children(parent)?;
        let node = self.new_node(value);
        self.append(parent, node)?;
        Ok(node)
    }

    /// Create an element and append it to `parent`.
    pub fn append_element(&mut self, parent: Node, element_id: ElementId) -> Result<Node, Error> {
        self.append_new(parent, Value::Element(Element::new(element_id)))
    }

    /// Create a comment and append it to `parent`.
    pub fn append_comment(&mut self, parent: Node) -> Result<Node, Error> {
        self.append_new(parent, Value::Comment)
    }

    /// Create a text node and append it to `parent`.
    pub fn append_text(&mut self, parent: Node, text: &str) -> Result<Node, Error> {
        self.append_new(parent, Value::Text(Text::new(text)))
    }

    /// Create an unescaped text node and append it to `parent`.
    pub fn append_text_unsafe(&mut self, parent: Node, text: &str) -> Result<Node, Error> {
        self.append_new(parent, Value::Text(Text::new_unsafe(text)))
    }

    /// Create a variable text node and append it to `parent`.
    pub fn append_var_text(&mut self, parent: Node, text: &str) -> Result<Node, Error> {
        self.append_new(parent, Value::VarText(VarText::new(text)))
    }

    /// Create an unescaped variable text node and append it to `parent`.
    pub fn append_var_text_unsafe(&mut self, parent: Node, text: &str) -> Result<Node, Error> {
        self.append_new(parent, Value::VarText(VarText::new_unsafe(text)))
    }
}
