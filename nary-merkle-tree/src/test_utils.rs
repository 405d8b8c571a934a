//! Test utilities: block fixtures and an instrumented hash provider.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::{HashFunction, Sha256Hasher};

/// `count` distinct blocks: "block-0", "block-1", ...
pub(crate) fn numbered_blocks(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("block-{}", i)).collect()
}

/// SHA-256 provider that counts how many digests it produced.
#[derive(Default)]
pub(crate) struct CountingHasher {
    calls: AtomicUsize,
}

impl CountingHasher {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HashFunction for CountingHasher {
    fn hash(&self, input: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Sha256Hasher.hash(input)
    }
}

/// Provider that returns its input unchanged, so tree values spell out the
/// exact concatenation order.
pub(crate) fn identity(input: &str) -> String {
    input.to_owned()
}
