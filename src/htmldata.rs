use indextree::{Arena, NodeId};

use crate::error::Error;
use crate::value::Value;

#[derive(Debug)]
pub(crate) struct NodeData {
    pub(crate) value: Value,
    pub(crate) hidden: bool,
}

pub(crate) type HtmlArena = Arena<NodeData>;

/// A node in the HTML tree.
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// The `Html` struct owns all nodes of one or more HTML trees.
///
/// Nodes are created detached, attached with [`Html::append`] and rendered
/// with [`Html::write`] or [`Html::write_pretty`]. A [`Node`] is only a
/// handle; all access goes through `Html`.
///
/// `Html` is not `Sync`: rendering fills per-element caches, so a tree must
/// not be rendered from two threads at once.
///
/// A node's value can be read but not replaced:
///
/// ```compile_fail
/// use htmlgen::{ElementId, Html};
///
/// let mut html = Html::new();
/// let div = html.new_element(ElementId::Div);
/// let br = html.new_element(ElementId::Br);
/// *html.value_mut(div) = html.value(br).clone();
/// ```
#[derive(Debug, Default)]
pub struct Html {
    pub(crate) arena: HtmlArena,
}

impl Html {
    /// Create a new, empty `Html`.
    pub fn new() -> Self {
        Html {
            arena: HtmlArena::new(),
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &HtmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut HtmlArena {
        &mut self.arena
    }

    #[inline]
    pub(crate) fn data(&self, node: Node) -> &NodeData {
        self.arena[node.get()].get()
    }

    #[inline]
    pub(crate) fn data_mut(&mut self, node: Node) -> &mut NodeData {
        self.arena[node.get()].get_mut()
    }

    // The data of a node, unless it was removed.
    #[inline]
    pub(crate) fn live_data(&self, node: Node) -> Option<&NodeData> {
        if self.is_removed(node) {
            None
        } else {
            Some(self.data(node))
        }
    }

    pub(crate) fn check_live(&self, node: Node) -> Result<(), Error> {
        if self.is_removed(node) {
            Err(Error::Removed(node))
        } else {
            Ok(())
        }
    }

    /// The value of a node.
    ///
    /// # Panics
    ///
    /// Panics if the node was removed with [`Html::remove`]. Use
    /// [`Html::is_removed`] to check first.
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        &self.data(node).value
    }

    // Only for changes that keep the node's kind: replacing a value could
    // give children to a self-closing element.
    #[inline]
    pub(crate) fn value_mut(&mut self, node: Node) -> &mut Value {
        &mut self.data_mut(node).value
    }

    /// The number of nodes in the arena, including removed ones.
    pub fn len(&self) -> usize {
        self.arena.count()
    }

    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
