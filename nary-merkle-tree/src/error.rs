use thiserror::Error;

/// Errors from N-ary Merkle tree operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MerkleTreeError {
    /// Block count or branching factor rejected at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Proof requested for a leaf the tree does not have.
    #[error("leaf index {index} is out of range (leaf count {leaf_count})")]
    IndexOutOfRange {
        /// Requested leaf index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
    /// The base-2 path of the index leaves the tree before reaching a leaf.
    #[error("path for leaf index {index} does not fit a tree of height {height}")]
    PathOutOfTree {
        /// Requested leaf index.
        index: usize,
        /// Height of the tree.
        height: u32,
    },
}
