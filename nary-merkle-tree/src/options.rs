use std::{fmt, sync::Arc};

use crate::{HashFunction, hash::default_hash_function};

/// Default branching factor.
pub const DEFAULT_NUMBER_OF_CHILDREN: usize = 2;

/// Options for building a tree.
///
/// Unset fields fall back to SHA-256 and a branching factor of
/// [`DEFAULT_NUMBER_OF_CHILDREN`].
#[derive(Clone, Default)]
pub struct TreeOptions {
    /// Digest used for leaves and internal nodes.
    pub hash_function: Option<Arc<dyn HashFunction>>,
    /// Branching factor, at least 2.
    pub number_of_children: Option<usize>,
}

impl TreeOptions {
    /// Options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `hash_function` as the provider.
    pub fn with_hash_function<H: HashFunction + 'static>(mut self, hash_function: H) -> Self {
        self.hash_function = Some(Arc::new(hash_function));
        self
    }

    /// Use an already shared provider, e.g. one taken from another tree.
    pub fn with_shared_hash_function(mut self, hash_function: Arc<dyn HashFunction>) -> Self {
        self.hash_function = Some(hash_function);
        self
    }

    /// Set the branching factor.
    pub fn with_number_of_children(mut self, number_of_children: usize) -> Self {
        self.number_of_children = Some(number_of_children);
        self
    }

    pub(crate) fn resolve(self) -> (Arc<dyn HashFunction>, usize) {
        (
            self.hash_function.unwrap_or_else(default_hash_function),
            self.number_of_children.unwrap_or(DEFAULT_NUMBER_OF_CHILDREN),
        )
    }
}

impl fmt::Debug for TreeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeOptions")
            .field("hash_function", &self.hash_function.as_ref().map(|_| ".."))
            .field("number_of_children", &self.number_of_children)
            .finish()
    }
}

/// Options for verifying a proof. An unset provider means SHA-256.
#[derive(Clone, Default)]
pub struct VerifyOptions {
    /// Digest used to recompute the root.
    pub hash_function: Option<Arc<dyn HashFunction>>,
}

impl VerifyOptions {
    /// Options with the default provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `hash_function` as the provider.
    pub fn with_hash_function<H: HashFunction + 'static>(mut self, hash_function: H) -> Self {
        self.hash_function = Some(Arc::new(hash_function));
        self
    }

    /// Use an already shared provider, e.g. one taken from another tree.
    pub fn with_shared_hash_function(mut self, hash_function: Arc<dyn HashFunction>) -> Self {
        self.hash_function = Some(hash_function);
        self
    }

    pub(crate) fn resolve(self) -> Arc<dyn HashFunction> {
        self.hash_function.unwrap_or_else(default_hash_function)
    }
}

impl fmt::Debug for VerifyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyOptions")
            .field("hash_function", &self.hash_function.as_ref().map(|_| ".."))
            .finish()
    }
}
