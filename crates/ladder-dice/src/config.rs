//! Roll cache configuration.

use crate::error::CacheError;

/// Configuration for a [`RollCache`](crate::RollCache).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Entries per buffer. Two buffers of this size are allocated.
    ///
    /// Default: 65_536. Must be non-zero.
    pub capacity: usize,
}

impl CacheConfig {
    /// Default entries per buffer.
    pub const DEFAULT_CAPACITY: usize = 1 << 16;

    /// Create a config with the given per-buffer capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), CacheError> {
        if self.capacity == 0 {
            return Err(CacheError::ZeroCapacity);
        }
        Ok(())
    }

    /// Bytes held by both buffers for entries of type `T`.
    pub fn footprint_bytes<T>(&self) -> usize {
        2 * self.capacity * std::mem::size_of::<T>()
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_core::CompoundRoll;

    #[test]
    fn default_validates() {
        assert!(CacheConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(CacheConfig::new(0).validate(), Err(CacheError::ZeroCapacity));
    }

    #[test]
    fn footprint_counts_both_buffers() {
        let config = CacheConfig::new(1024);
        assert_eq!(config.footprint_bytes::<CompoundRoll>(), 2 * 1024 * 3);
    }
}
