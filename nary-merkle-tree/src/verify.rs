//! Proof verification.
//!
//! Pure function, no tree required. Recomputes a candidate root from the
//! block and the proof and compares it to the claimed root.

use tracing::debug;

use crate::{VerifyOptions, path::index_path};

/// Check that `block` sits at `index` under `root_hash`.
///
/// The proof length is taken as the tree height. Starting from the block's
/// digest, each proof element is folded in leaf-first: when the path bit
/// for that level is `1` the element goes on the left
/// (`hash(element + acc)`), otherwise on the right (`hash(acc + element)`).
/// The result must equal `root_hash` exactly; comparison is case-sensitive.
///
/// Never fails. A mismatched provider, a proof of the wrong length or an
/// index wider than the proof all yield `false`. Like proof generation, the
/// path is base-2 whatever branching factor built the tree.
///
/// ```
/// use nary_merkle_tree::{VerifyOptions, is_proven};
///
/// let root = "58c89d709329eb37285837b042ab6ff72c7c8f74de0446b091b6a0131c102cfd";
/// let proof = vec![
///     "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb".to_string(),
///     "d3a0f1c792ccf7f1708d5422696263e35755a86917ea76ef9242bd4a8cf4891a".to_string(),
/// ];
/// assert!(is_proven("b", 1, root, &proof, VerifyOptions::default()));
/// assert!(!is_proven("a", 1, root, &proof, VerifyOptions::default()));
/// ```
pub fn is_proven(
    block: &str,
    index: usize,
    root_hash: &str,
    proof: &[String],
    options: VerifyOptions,
) -> bool {
    let Ok(width) = u32::try_from(proof.len()) else {
        return false;
    };
    let Some(path) = index_path(index, width) else {
        debug!(index, proof_len = proof.len(), "index does not fit proof");
        return false;
    };

    let hash_function = options.resolve();
    let mut acc = hash_function.hash(block);
    for (go_right, element) in path.into_iter().rev().zip(proof) {
        acc = if go_right {
            hash_function.hash(&format!("{}{}", element, acc))
        } else {
            hash_function.hash(&format!("{}{}", acc, element))
        };
    }

    let proven = acc == root_hash;
    debug!(index, proven, "verified inclusion proof");
    proven
}
