use crate::error::Error;
use crate::htmldata::{Html, Node};
use crate::names::AttrId;
use crate::value::Value;

/// ## Manipulation
///
/// Structural changes to the tree. A node has at most one parent; appending
/// a node that is already attached moves it.
impl Html {
    /// Append a child to the end of the children of the given parent.
    ///
    /// If `child` has a parent already it's detached from it first.
    ///
    /// Fails with [`Error::NoChildren`] if `parent` is a self-closing
    /// element or a leaf, and with [`Error::Cycle`] if `child` is `parent`
    /// or one of its ancestors.
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.check_live(child)?;
        self.check_accepts_children(parent)?;
        if parent
            .get()
            .ancestors(self.arena())
            .any(|ancestor| ancestor == child.get())
        {
            return Err(Error::Cycle(child));
        }
        child.get().detach(self.arena_mut());
        parent.get().checked_append(child.get(), self.arena_mut())?;
        Ok(())
    }

    pub(crate) fn check_accepts_children(&self, parent: Node) -> Result<(), Error> {
        self.check_live(parent)?;
        if self.value(parent).accepts_children() {
            Ok(())
        } else {
            Err(Error::NoChildren(parent))
        }
    }

    /// Detach a node from its parent. The node and its descendants stay in
    /// the arena and can be appended elsewhere.
    ///
    /// Detaching a node without a parent does nothing.
    pub fn detach(&mut self, node: Node) -> Result<(), Error> {
        self.check_live(node)?;
        node.get().detach(self.arena_mut());
        Ok(())
    }

    /// Detach all children of a node.
    pub fn remove_children(&mut self, node: Node) -> Result<(), Error> {
        self.check_live(node)?;
        let children: Vec<_> = node.get().children(self.arena()).collect();
        for child in children {
            child.detach(self.arena_mut());
        }
        Ok(())
    }

    /// Remove a node and its descendants from the arena.
    ///
    /// Any later operation on a removed node fails with [`Error::Removed`].
    pub fn remove(&mut self, node: Node) -> Result<(), Error> {
        self.check_live(node)?;
        let count = node.get().descendants(self.arena()).count();
        node.get().remove_subtree(self.arena_mut());
        tracing::debug!(nodes = count, "removed subtree");
        Ok(())
    }

    /// Create a detached copy of a node.
    ///
    /// Attributes and text are copied. Children are not, and the copy is
    /// visible even if the node is hidden. The node's open tag is rendered
    /// first so the copy starts with it cached.
    ///
    /// ```rust
    /// use htmlgen::{ElementId, Html};
    ///
    /// let mut html = Html::new();
    /// let div = html.new_element(ElementId::Div);
    /// html.set_id(div, "a")?;
    /// html.append_text(div, "content")?;
    /// let copy = html.copy(div)?;
    /// html.set_id(copy, "b")?;
    /// assert_eq!(html.to_string(div, None)?, r#"<div id="a">content</div>"#);
    /// assert_eq!(html.to_string(copy, None)?, r#"<div id="b"></div>"#);
    /// # Ok::<(), htmlgen::Error>(())
    /// ```
    pub fn copy(&mut self, node: Node) -> Result<Node, Error> {
        self.check_live(node)?;
        let value = self.value(node).copy();
        Ok(self.new_node(value))
    }

    /// Hide or show a node. A hidden node and its descendants render as
    /// nothing.
    pub fn set_hidden(&mut self, node: Node, hidden: bool) -> Result<(), Error> {
        self.check_live(node)?;
        self.data_mut(node).hidden = hidden;
        Ok(())
    }

    /// Hide a node.
    pub fn hide(&mut self, node: Node) -> Result<(), Error> {
        self.set_hidden(node, true)
    }

    /// Show a hidden node.
    pub fn show(&mut self, node: Node) -> Result<(), Error> {
        self.set_hidden(node, false)
    }
}

/// ## Attributes
///
/// Shortcuts for [`Element`](crate::Element) methods. They fail with
/// [`Error::NotElement`] when the node isn't an element or document.
impl Html {
    /// Set a known attribute. An empty value removes it.
    pub fn set_attr<S: Into<String>>(
        &mut self,
        node: Node,
        attr_id: AttrId,
        value: S,
    ) -> Result<(), Error> {
        self.element_mut_or_err(node)?.set_attr(attr_id, value);
        Ok(())
    }

    /// Set or clear a boolean attribute.
    pub fn set_flag(&mut self, node: Node, attr_id: AttrId, on: bool) -> Result<(), Error> {
        self.element_mut_or_err(node)?.set_flag(attr_id, on);
        Ok(())
    }

    /// Remove a known attribute.
    pub fn remove_attr(&mut self, node: Node, attr_id: AttrId) -> Result<(), Error> {
        self.element_mut_or_err(node)?.remove_attr(attr_id);
        Ok(())
    }

    /// Whether an element has a known attribute.
    pub fn has_attr(&self, node: Node, attr_id: AttrId) -> Result<bool, Error> {
        Ok(self.element_or_err(node)?.has_attr(attr_id))
    }

    /// Get a custom attribute.
    pub fn attribute(&self, node: Node, key: &str) -> Result<Option<&str>, Error> {
        Ok(self.element_or_err(node)?.attribute(key))
    }

    /// Set a custom attribute.
    pub fn set_attribute<K: Into<String>, V: Into<String>>(
        &mut self,
        node: Node,
        key: K,
        value: V,
    ) -> Result<(), Error> {
        self.element_mut_or_err(node)?.set_attribute(key, value);
        Ok(())
    }

    /// Set several custom attributes.
    pub fn set_attributes<I, K, V>(&mut self, node: Node, attributes: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.element_mut_or_err(node)?.set_attributes(attributes);
        Ok(())
    }

    /// Remove a custom attribute.
    pub fn remove_attribute(&mut self, node: Node, key: &str) -> Result<(), Error> {
        self.element_mut_or_err(node)?.remove_attribute(key);
        Ok(())
    }

    /// Remove several custom attributes.
    pub fn remove_attributes<'a, I: IntoIterator<Item = &'a str>>(
        &mut self,
        node: Node,
        keys: I,
    ) -> Result<(), Error> {
        self.element_mut_or_err(node)?.remove_attributes(keys);
        Ok(())
    }

    /// Set the `id` attribute. An empty id removes it.
    pub fn set_id<S: Into<String>>(&mut self, node: Node, id: S) -> Result<(), Error> {
        self.element_mut_or_err(node)?.set_id(id);
        Ok(())
    }

    /// Set the `title` attribute. An empty title removes it.
    pub fn set_title<S: Into<String>>(&mut self, node: Node, title: S) -> Result<(), Error> {
        self.element_mut_or_err(node)?.set_title(title);
        Ok(())
    }

    /// Append classes to the `class` attribute.
    pub fn add_classes<I, S>(&mut self, node: Node, classes: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.element_mut_or_err(node)?.add_classes(classes);
        Ok(())
    }

    /// Replace the `class` attribute.
    pub fn set_classes<I, S>(&mut self, node: Node, classes: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.element_mut_or_err(node)?.set_classes(classes);
        Ok(())
    }
}

/// ## Text
///
/// Text methods fail with [`Error::NotText`] when the node is the wrong
/// kind of leaf.
impl Html {
    /// The text of a text node, as it will be rendered.
    pub fn text(&self, node: Node) -> Result<&str, Error> {
        self.check_live(node)?;
        match self.value(node) {
            Value::Text(text) => Ok(text.get()),
            _ => Err(Error::NotText(node)),
        }
    }

    /// Append escaped text to a text node.
    pub fn push_text(&mut self, node: Node, text: &str) -> Result<(), Error> {
        self.check_live(node)?;
        match self.value_mut(node) {
            Value::Text(t) => t.push_str(text),
            _ => return Err(Error::NotText(node)),
        }
        Ok(())
    }

    /// Append text to a text node without escaping it.
    pub fn push_text_unsafe(&mut self, node: Node, text: &str) -> Result<(), Error> {
        self.check_live(node)?;
        match self.value_mut(node) {
            Value::Text(t) => t.push_str_unsafe(text),
            _ => return Err(Error::NotText(node)),
        }
        Ok(())
    }

    /// Replace the text of a text or variable text node.
    ///
    /// The text is used as is for text nodes; variable text is escaped at
    /// render time unless unsafe.
    pub fn set_text<S: Into<String>>(&mut self, node: Node, text: S) -> Result<(), Error> {
        self.check_live(node)?;
        match self.value_mut(node) {
            Value::Text(t) => t.set(text),
            Value::VarText(t) => t.set(text),
            _ => return Err(Error::NotText(node)),
        }
        Ok(())
    }

    /// Append to a variable text node.
    pub fn push_var_text(&mut self, node: Node, text: &str) -> Result<(), Error> {
        self.check_live(node)?;
        match self.value_mut(node) {
            Value::VarText(t) => t.push_str(text),
            _ => return Err(Error::NotText(node)),
        }
        Ok(())
    }

    /// Replace the text of a variable text node.
    pub fn set_var_text<S: Into<String>>(&mut self, node: Node, text: S) -> Result<(), Error> {
        self.check_live(node)?;
        match self.value_mut(node) {
            Value::VarText(t) => t.set(text),
            _ => return Err(Error::NotText(node)),
        }
        Ok(())
    }

    /// Enable or disable escaping of a variable text node.
    pub fn set_unsafe(&mut self, node: Node, is_unsafe: bool) -> Result<(), Error> {
        self.check_live(node)?;
        match self.value_mut(node) {
            Value::VarText(t) => t.set_unsafe(is_unsafe),
            _ => return Err(Error::NotText(node)),
        }
        Ok(())
    }
}
