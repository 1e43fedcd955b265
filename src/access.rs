use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::element::Element;
use crate::error::Error;
use crate::htmldata::{Html, Node};
use crate::names::{AttrId, ElementId};
use crate::value::{Value, ValueType};

/// Node edges, used by [`Html::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node. For an element this is where its opening
    /// tag goes.
    Start(Node),
    /// The end edge of a node. For an element this is where its closing tag
    /// goes.
    End(Node),
}

/// ## Read-only access
impl Html {
    /// The type of a node's value.
    ///
    /// # Panics
    ///
    /// Panics if the node was removed.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Check whether a node has been removed with [`Html::remove`].
    ///
    /// Accessors returning an [`Option`] return [`None`] for a removed node.
    /// Mutators and renderers return [`Error::Removed`]. Only
    /// [`Html::value`] and [`Html::value_type`] panic.
    pub fn is_removed(&self, node: Node) -> bool {
        node.get().is_removed(self.arena())
    }

    /// Get parent node.
    ///
    /// Returns [`None`] if the node is detached or the top of its tree.
    ///
    /// ```rust
    /// use htmlgen::{ElementId, Html};
    ///
    /// let mut html = Html::new();
    /// let div = html.new_element(ElementId::Div);
    /// let text = html.append_text(div, "hi")?;
    /// assert_eq!(html.parent(text), Some(div));
    /// assert_eq!(html.parent(div), None);
    /// # Ok::<(), htmlgen::Error>(())
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Walk `count` parent links up from `node`.
    ///
    /// A `count` of 0 is treated as 1. Returns [`None`] when walking past
    /// the top of the tree.
    ///
    /// ```rust
    /// use htmlgen::{ElementId, Html};
    ///
    /// let mut html = Html::new();
    /// let body = html.new_element(ElementId::Body);
    /// let div = html.append_element(body, ElementId::Div)?;
    /// let span = html.append_element(div, ElementId::Span)?;
    /// assert_eq!(html.up(span, 1), Some(div));
    /// assert_eq!(html.up(span, 0), Some(div));
    /// assert_eq!(html.up(span, 2), Some(body));
    /// assert_eq!(html.up(span, 3), None);
    /// # Ok::<(), htmlgen::Error>(())
    /// ```
    pub fn up(&self, node: Node, count: usize) -> Option<Node> {
        let mut current = node;
        for _ in 0..count.max(1) {
            current = self.parent(current)?;
        }
        Some(current)
    }

    /// Iterator over the children of a node, in document order.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// The first child of a node.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// The last child of a node.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// The next sibling of a node.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// The previous sibling of a node.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].previous_sibling().map(Node::new)
    }

    /// Iterator over a node and its descendants, in document order.
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Traverse the visible part of a subtree as start and end edges, in
    /// document order.
    ///
    /// Hidden nodes are skipped along with their descendants. If `node`
    /// itself is hidden the traversal is empty.
    ///
    /// ```rust
    /// use htmlgen::{ElementId, Html, NodeEdge};
    ///
    /// let mut html = Html::new();
    /// let ul = html.new_element(ElementId::Ul);
    /// let a = html.append_element(ul, ElementId::Li)?;
    /// let b = html.append_element(ul, ElementId::Li)?;
    /// html.hide(a)?;
    /// assert_eq!(html.traverse(ul).collect::<Vec<_>>(), vec![
    ///     NodeEdge::Start(ul),
    ///     NodeEdge::Start(b),
    ///     NodeEdge::End(b),
    ///     NodeEdge::End(ul),
    /// ]);
    /// # Ok::<(), htmlgen::Error>(())
    /// ```
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        let mut skipping = None;
        let live = !self.is_removed(node);
        node.get()
            .traverse(self.arena())
            .take_while(move |_| live)
            .filter_map(move |edge| match (skipping, edge) {
                (Some(hidden), IndexTreeNodeEdge::End(node_id)) if hidden == node_id => {
                    skipping = None;
                    None
                }
                (Some(_), _) => None,
                (None, IndexTreeNodeEdge::Start(node_id)) => {
                    if self.arena()[node_id].get().hidden {
                        skipping = Some(node_id);
                        None
                    } else {
                        Some(NodeEdge::Start(Node::new(node_id)))
                    }
                }
                (None, IndexTreeNodeEdge::End(node_id)) => Some(NodeEdge::End(Node::new(node_id))),
            })
    }

    /// Whether the node is hidden. A hidden node and its descendants are
    /// not rendered. A removed node is not hidden.
    pub fn is_hidden(&self, node: Node) -> bool {
        self.live_data(node).map_or(false, |data| data.hidden)
    }

    /// The element of a document or element node.
    pub fn element(&self, node: Node) -> Option<&Element> {
        self.live_data(node)?.value.element()
    }

    /// The element of a document or element node, mutably.
    ///
    /// Attributes can be changed through it; the element keeps its name.
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        if self.is_removed(node) {
            return None;
        }
        self.value_mut(node).element_mut()
    }

    pub(crate) fn element_or_err(&self, node: Node) -> Result<&Element, Error> {
        self.check_live(node)?;
        self.element(node).ok_or(Error::NotElement(node))
    }

    pub(crate) fn element_mut_or_err(&mut self, node: Node) -> Result<&mut Element, Error> {
        self.check_live(node)?;
        self.element_mut(node).ok_or(Error::NotElement(node))
    }

    /// The text of a text or variable text node.
    ///
    /// For text nodes this is the escaped text; for variable text it's the
    /// raw text before expansion.
    pub fn text_str(&self, node: Node) -> Option<&str> {
        match &self.live_data(node)?.value {
            Value::Text(text) => Some(text.get()),
            Value::VarText(text) => Some(text.get()),
            _ => None,
        }
    }

    /// The `id` attribute of an element.
    pub fn id(&self, node: Node) -> Option<&str> {
        self.element(node).and_then(|element| element.id())
    }

    /// Get a known attribute of an element.
    pub fn attr(&self, node: Node, attr_id: AttrId) -> Option<&str> {
        self.element(node).and_then(|element| element.attr(attr_id))
    }

    /// Iterator over the `option` element children of a node.
    pub fn option_children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.children(node).filter(move |child| {
            self.element(*child)
                .map(|element| element.element_id() == ElementId::Option)
                .unwrap_or(false)
        })
    }

    /// The first `option` child that has the `selected` attribute.
    ///
    /// Returns [`Error::NotFound`] if no option is selected.
    ///
    /// ```rust
    /// use htmlgen::{AttrId, ElementId, Error, Html};
    ///
    /// let mut html = Html::new();
    /// let select = html.new_element(ElementId::Select);
    /// let a = html.append_element(select, ElementId::Option)?;
    /// assert!(matches!(html.selected_option(select), Err(Error::NotFound)));
    /// html.set_flag(a, AttrId::Selected, true)?;
    /// assert_eq!(html.selected_option(select)?, a);
    /// # Ok::<(), htmlgen::Error>(())
    /// ```
    pub fn selected_option(&self, node: Node) -> Result<Node, Error> {
        self.element_or_err(node)?;
        self.option_children(node)
            .find(|option| {
                self.element(*option)
                    .map(|element| element.has_attr(AttrId::Selected))
                    .unwrap_or(false)
            })
            .ok_or(Error::NotFound)
    }
}
