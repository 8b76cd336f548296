//! Construction options for [`FuncCache`](crate::FuncCache).

/// Sizing hints for a new cache.
///
/// These only pre-size the internal tables. The cache has no capacity limit
/// and never evicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FuncCacheConfig {
    /// Expected number of cached functions.
    pub capacity: usize,
    /// Expected number of simultaneously pinned functions.
    pub pinned_capacity: usize,
}

impl FuncCacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_pinned_capacity(mut self, pinned_capacity: usize) -> Self {
        self.pinned_capacity = pinned_capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unsized() {
        let config = FuncCacheConfig::new();
        assert_eq!(config.capacity, 0);
        assert_eq!(config.pinned_capacity, 0);
    }

    #[test]
    fn builder() {
        let config = FuncCacheConfig::new()
            .with_capacity(64)
            .with_pinned_capacity(8);
        assert_eq!(config.capacity, 64);
        assert_eq!(config.pinned_capacity, 8);
    }
}
