/// A vertex of the hash tree.
///
/// Leaves carry the digest of one block and have height 0. An internal node
/// carries the digest of its children's digests concatenated in order and
/// sits one level above them. Nodes are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: String,
    children: Vec<Node>,
    height: u32,
}

impl Node {
    pub(crate) fn leaf(value: String) -> Self {
        Node {
            value,
            children: Vec::new(),
            height: 0,
        }
    }

    pub(crate) fn internal(value: String, children: Vec<Node>, height: u32) -> Self {
        Node {
            value,
            children,
            height,
        }
    }

    /// The hex digest identifying this node.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Children in construction order; empty for leaves.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Distance from the leaf level.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
