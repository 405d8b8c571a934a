use std::{fmt, sync::Arc};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{
    HashFunction, MerkleTreeError, Node, TreeOptions, VerifyOptions, hash::hash_concat, proof,
    verify,
};

/// An immutable N-ary Merkle tree over an ordered list of string blocks.
///
/// The number of blocks is always an exact power of the branching factor,
/// so every level groups evenly and the root height is that exponent.
///
/// ```
/// use nary_merkle_tree::{MerkleTree, TreeOptions};
///
/// let tree = MerkleTree::new(["a", "b", "c", "d"], TreeOptions::default())
///     .expect("4 is a power of 2");
/// assert_eq!(tree.height(), 2);
///
/// let proof = tree.prove(1).expect("leaf 1 is inside the tree");
/// assert!(tree.verify("b", 1, &proof));
/// ```
#[derive(Clone)]
pub struct MerkleTree {
    blocks: Vec<String>,
    hash_function: Arc<dyn HashFunction>,
    number_of_children: usize,
    root: Node,
}

impl MerkleTree {
    /// Build a tree from `blocks`.
    ///
    /// Fails with [`MerkleTreeError::InvalidConfiguration`] before hashing
    /// anything if the branching factor is below 2 or if the block count is
    /// not an exact power of it. A single block is `b^0` and yields a tree of
    /// height 0 whose root is that block's leaf.
    pub fn new<I, B>(blocks: I, options: TreeOptions) -> Result<Self, MerkleTreeError>
    where
        I: IntoIterator<Item = B>,
        B: Into<String>,
    {
        let blocks: Vec<String> = blocks.into_iter().map(Into::into).collect();
        let (hash_function, number_of_children) = options.resolve();
        let expected_height = validate_leaf_count(blocks.len(), number_of_children)?;

        let root = build(&blocks, hash_function.as_ref(), number_of_children).ok_or_else(|| {
            MerkleTreeError::InvalidConfiguration("cannot build a tree without blocks".into())
        })?;
        debug_assert_eq!(root.height(), expected_height);

        debug!(
            leaf_count = blocks.len(),
            number_of_children,
            height = root.height(),
            "built merkle tree"
        );

        Ok(MerkleTree {
            blocks,
            hash_function,
            number_of_children,
            root,
        })
    }

    /// Build a binary SHA-256 tree.
    pub fn from_blocks<I, B>(blocks: I) -> Result<Self, MerkleTreeError>
    where
        I: IntoIterator<Item = B>,
        B: Into<String>,
    {
        Self::new(blocks, TreeOptions::default())
    }

    /// The root node, owning the whole node graph.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Hex digest of the root node.
    pub fn root_hash(&self) -> &str {
        self.root.value()
    }

    /// Number of grouping rounds between the leaves and the root.
    pub fn height(&self) -> u32 {
        self.root.height()
    }

    /// The blocks the tree was built from, in order.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Number of leaves, equal to the number of blocks.
    pub fn leaf_count(&self) -> usize {
        self.blocks.len()
    }

    /// Branching factor the tree was built with.
    pub fn number_of_children(&self) -> usize {
        self.number_of_children
    }

    /// The provider the tree was built with.
    pub fn hash_function(&self) -> &Arc<dyn HashFunction> {
        &self.hash_function
    }

    /// Leaf nodes in block order.
    pub fn leaves(&self) -> Vec<&Node> {
        let mut leaves = Vec::with_capacity(self.blocks.len());
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                leaves.push(node);
            } else {
                stack.extend(node.children().iter().rev());
            }
        }
        leaves
    }

    /// Inclusion proof for the leaf at `index`. See [`prove`](crate::prove).
    pub fn prove(&self, index: usize) -> Result<Vec<String>, MerkleTreeError> {
        proof::prove(self, index)
    }

    /// Check `block` at `index` against this tree's root, hashing with this
    /// tree's provider.
    pub fn verify(&self, block: &str, index: usize, proof: &[String]) -> bool {
        verify::is_proven(
            block,
            index,
            self.root_hash(),
            proof,
            VerifyOptions::default().with_shared_hash_function(self.hash_function.clone()),
        )
    }
}

impl fmt::Debug for MerkleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("leaf_count", &self.blocks.len())
            .field("number_of_children", &self.number_of_children)
            .field("height", &self.root.height())
            .field("root_hash", &self.root.value())
            .finish()
    }
}

/// Build a tree from `blocks`. Same as [`MerkleTree::new`].
pub fn new_tree<I, B>(blocks: I, options: TreeOptions) -> Result<MerkleTree, MerkleTreeError>
where
    I: IntoIterator<Item = B>,
    B: Into<String>,
{
    MerkleTree::new(blocks, options)
}

/// Check that `leaf_count` is `number_of_children^k` and return `k`.
pub(crate) fn validate_leaf_count(
    leaf_count: usize,
    number_of_children: usize,
) -> Result<u32, MerkleTreeError> {
    if number_of_children < 2 {
        return Err(MerkleTreeError::InvalidConfiguration(format!(
            "number of children must be at least 2, got {}",
            number_of_children
        )));
    }
    if leaf_count == 0 {
        return Err(MerkleTreeError::InvalidConfiguration(
            "number of blocks must be a power of the number of children, got 0".into(),
        ));
    }

    let mut remaining = leaf_count;
    let mut exponent = 0;
    while remaining % number_of_children == 0 {
        remaining /= number_of_children;
        exponent += 1;
    }
    if remaining != 1 {
        return Err(MerkleTreeError::InvalidConfiguration(format!(
            "number of blocks ({}) must be a power of the number of children ({})",
            leaf_count, number_of_children
        )));
    }
    Ok(exponent)
}

/// Build the node graph bottom-up and return the root.
///
/// Each round groups the current level into consecutive runs of
/// `number_of_children` nodes and hashes every run into a parent one level
/// higher, until a single node remains. Returns `None` for no blocks.
///
/// The block count is expected to be a power of `number_of_children`; that
/// is checked by [`MerkleTree::new`], not here.
pub(crate) fn build(
    blocks: &[String],
    hash_function: &dyn HashFunction,
    number_of_children: usize,
) -> Option<Node> {
    debug_assert!(number_of_children >= 2);

    let mut level: Vec<Node> = blocks
        .iter()
        .map(|block| Node::leaf(hash_function.hash(block)))
        .collect();
    let mut height = 0;

    while level.len() > 1 {
        height += 1;
        let mut parents = Vec::with_capacity(level.len() / number_of_children);
        let groups = level.into_iter().chunks(number_of_children);
        for group in &groups {
            let children: Vec<Node> = group.collect();
            let value = hash_concat(hash_function, children.iter().map(Node::value));
            parents.push(Node::internal(value, children, height));
        }
        trace!(height, nodes = parents.len(), "hashed tree level");
        level = parents;
    }

    level.pop()
}
