//! Leaf index to root-to-leaf path encoding.
//!
//! The path is the base-2 representation of the leaf index, most significant
//! bit first, left-padded with zeros. `true` selects the right-hand branch.
//! This encoding is used for every tree regardless of its branching factor.

/// Bits of `index` from the root level down, padded to `width` bits.
///
/// Returns `None` when `index` needs more than `width` bits.
pub(crate) fn index_path(index: usize, width: u32) -> Option<Vec<bool>> {
    let significant_bits = usize::BITS - index.leading_zeros();
    if significant_bits > width {
        return None;
    }
    let path = (0..width)
        .rev()
        .map(|shift| index.checked_shr(shift).unwrap_or(0) & 1 == 1)
        .collect();
    Some(path)
}
