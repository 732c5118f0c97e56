//! Configuration for a diff run.

/// Configuration for a diff run.
///
/// Controls concurrency and which normalization passes run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffConfig {
    /// Build the old and new trees concurrently.
    pub parallel: bool,

    /// Fold unconstrained extensions into the types they extend.
    pub merge_extensions: bool,

    /// Re-pair leftover additions and removals into modifications.
    pub consolidate: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            merge_extensions: true,
            consolidate: true,
        }
    }
}

impl DiffConfig {
    /// Creates a configuration that builds both trees on the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Creates a configuration with every normalization pass disabled.
    ///
    /// Extensions stay standalone and unmatched elements are reported as
    /// plain additions and removals.
    #[must_use]
    pub fn raw() -> Self {
        Self {
            merge_extensions: false,
            consolidate: false,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable concurrent tree building.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder method to enable/disable extension merging.
    #[must_use]
    pub fn with_merge_extensions(mut self, merge: bool) -> Self {
        self.merge_extensions = merge;
        self
    }

    /// Builder method to enable/disable consolidation.
    #[must_use]
    pub fn with_consolidate(mut self, consolidate: bool) -> Self {
        self.consolidate = consolidate;
        self
    }
}
