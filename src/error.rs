use thiserror::Error;

use crate::htmldata::Node;

/// Htmlgen errors
#[derive(Debug, Error)]
pub enum Error {
    /// The output sink rejected a write. Rendering stopped; `written` bytes
    /// were accepted by the sink before the failure.
    #[error("write failed after {written} bytes: {source}")]
    Write {
        /// Bytes accepted by the sink before it failed.
        written: usize,
        /// The underlying sink error.
        #[source]
        source: std::io::Error,
    },
    /// A lookup for a uniquely marked child found nothing.
    #[error("not found")]
    NotFound,
    /// The node is not an element, so it has no attributes.
    #[error("not an element: {0:?}")]
    NotElement(Node),
    /// The node is not a text or variable text leaf.
    #[error("not a text node: {0:?}")]
    NotText(Node),
    /// The node cannot hold children (a self-closing element or a leaf).
    #[error("node cannot have children: {0:?}")]
    NoChildren(Node),
    /// The child to append is the parent itself or one of its ancestors.
    #[error("cannot append a node to itself or its descendants: {0:?}")]
    Cycle(Node),
    /// The node was removed from the tree with [`Html::remove`](crate::Html::remove).
    #[error("node was removed: {0:?}")]
    Removed(Node),
    /// Structural error reported by the underlying arena.
    #[error("tree error: {0}")]
    Tree(#[from] indextree::NodeError),
}

impl Error {
    /// The number of bytes written before the render failed, if this is a
    /// write failure.
    pub fn written(&self) -> Option<usize> {
        match self {
            Error::Write { written, .. } => Some(*written),
            _ => None,
        }
    }
}
