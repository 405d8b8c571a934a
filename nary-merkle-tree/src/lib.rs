//! N-ary Merkle tree over string blocks.
//!
//! Blocks are hashed into leaves, then consecutive runs of
//! `number_of_children` nodes are hashed into parents until a single root
//! remains. Every digest is a hex string and an internal node hashes the
//! plain concatenation of its children's digests:
//!
//! `value = H(child_0.value || child_1.value || ... || child_{n-1}.value)`
//!
//! The block count must be an exact power of the branching factor.
//!
//! Inclusion proofs list one sibling digest per level, leaf-first, and are
//! checked with [`is_proven`] against nothing but the root digest. Proof
//! paths are base-2, so proofs are only meaningful for binary trees; see
//! [`prove`].
//!
//! ```
//! use nary_merkle_tree::{TreeOptions, VerifyOptions, is_proven, new_tree, prove};
//!
//! let blocks = ["a", "b", "c", "d"];
//! let tree = new_tree(blocks, TreeOptions::default()).expect("4 = 2^2");
//! let proof = prove(&tree, 2).expect("leaf 2 exists");
//! assert!(is_proven("c", 2, tree.root_hash(), &proof, VerifyOptions::default()));
//! ```

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
mod node;
mod options;
pub(crate) mod path;
pub(crate) mod proof;
pub(crate) mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::MerkleTreeError;
#[cfg(feature = "blake3")]
pub use hash::Blake3Hasher;
pub use hash::{HashFunction, Sha256Hasher, default_hash_function};
pub use node::Node;
pub use options::{DEFAULT_NUMBER_OF_CHILDREN, TreeOptions, VerifyOptions};
pub use proof::prove;
pub use tree::{MerkleTree, new_tree};
pub use verify::is_proven;
