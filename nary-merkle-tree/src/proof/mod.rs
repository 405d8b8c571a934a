//! Inclusion proof generation.
//!
//! A proof is the list of sibling digests met on the way from a leaf up to
//! the root, ordered leaf-first. It holds exactly one digest per tree level,
//! so its length equals the tree height.

use std::collections::VecDeque;

use tracing::debug;

use crate::{MerkleTree, MerkleTreeError, Node, path::index_path};


/// Generate the inclusion proof for the leaf at `index`.
///
/// The leaf is located by walking down from the root along the base-2 path
/// of `index`, padded to the tree height. A `0` bit descends into the first
/// child and records the second one as the sibling. A `1` bit reverses the
/// children first, then does the same, so in a binary tree it descends right
/// and records the left sibling.
///
/// # Branching factors other than 2
///
/// The path is always base-2 and only ever considers two children per
/// level, whatever the branching factor. Trees with more children per node
/// build fine, but their proofs do not describe the real branching structure
/// and will not verify. Indices whose base-2 form is wider than the tree
/// height are rejected with [`MerkleTreeError::PathOutOfTree`].
///
/// # Errors
///
/// [`MerkleTreeError::IndexOutOfRange`] if `index >= tree.leaf_count()`.
pub fn prove(tree: &MerkleTree, index: usize) -> Result<Vec<String>, MerkleTreeError> {
    let leaf_count = tree.leaf_count();
    if index >= leaf_count {
        return Err(MerkleTreeError::IndexOutOfRange { index, leaf_count });
    }

    let height = tree.height();
    let path_out_of_tree = || MerkleTreeError::PathOutOfTree { index, height };
    let path = index_path(index, height).ok_or_else(path_out_of_tree)?;

    let mut proof = VecDeque::with_capacity(path.len());
    let mut node = tree.root();
    for go_right in path {
        let (next, sibling) =
            select_branch(node.children(), go_right).ok_or_else(path_out_of_tree)?;
        proof.push_front(sibling.value().to_owned());
        node = next;
    }

    if tree.number_of_children() != 2 {
        debug!(
            index,
            number_of_children = tree.number_of_children(),
            "generated base-2 proof over a non-binary tree"
        );
    }
    debug!(index, proof_len = proof.len(), "generated inclusion proof");

    Ok(Vec::from(proof))
}

/// Pick `(next, sibling)` among `children` for one path bit.
fn select_branch(children: &[Node], go_right: bool) -> Option<(&Node, &Node)> {
    if go_right {
        let mut reversed = children.iter().rev();
        Some((reversed.next()?, reversed.next()?))
    } else {
        let mut ordered = children.iter();
        Some((ordered.next()?, ordered.next()?))
    }
}
