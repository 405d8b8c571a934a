//! Hash providers.
//!
//! A provider maps an arbitrary string to a lowercase hex digest string.
//! Leaves hash the raw block; internal nodes hash the concatenation of their
//! children's hex digests, in child order.

use std::sync::Arc;

use sha2::{Digest, Sha256};

/// A deterministic, side-effect free `string -> string` digest.
///
/// Any `Fn(&str) -> String + Send + Sync` closure is a provider, so callers
/// can plug in their own algorithm without defining a type:
///
/// ```
/// use nary_merkle_tree::HashFunction;
///
/// let reversed = |input: &str| input.chars().rev().collect::<String>();
/// assert_eq!(reversed.hash("abc"), "cba");
/// ```
pub trait HashFunction: Send + Sync {
    /// Digest `input` into a hex string.
    fn hash(&self, input: &str) -> String;
}

impl<F> HashFunction for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn hash(&self, input: &str) -> String {
        self(input)
    }
}

/// SHA-256 over the UTF-8 bytes of the input, hex encoded. The default
/// provider.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Hasher;

impl HashFunction for Sha256Hasher {
    fn hash(&self, input: &str) -> String {
        hex::encode(Sha256::digest(input.as_bytes()))
    }
}

/// Blake3 over the UTF-8 bytes of the input, hex encoded.
#[cfg(feature = "blake3")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Blake3Hasher;

#[cfg(feature = "blake3")]
impl HashFunction for Blake3Hasher {
    fn hash(&self, input: &str) -> String {
        hex::encode(blake3::hash(input.as_bytes()).as_bytes())
    }
}

/// Shared handle to the default provider.
pub fn default_hash_function() -> Arc<dyn HashFunction> {
    Arc::new(Sha256Hasher)
}

/// Hash the concatenation of `values` in order.
pub(crate) fn hash_concat<'a, I>(hash_function: &dyn HashFunction, values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined: String = values.into_iter().collect();
    hash_function.hash(&joined)
}
