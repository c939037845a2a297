//! Pool capacity configuration.

use crate::error::ConfigError;

/// Capacity limits for a [`ListPool`].
///
/// Both limits are global to the pool: `max_nodes` bounds the number of items
/// held by *all* lists together, so a single list may use nearly the whole
/// node budget while the others stay small. Values are fixed once the pool is
/// built.
///
/// [`ListPool`]: crate::ListPool
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    /// Maximum number of nodes live at once, across every list.
    pub max_nodes: usize,
    /// Maximum number of lists live at once.
    pub max_lists: usize,
}

impl PoolConfig {
    /// Default node capacity.
    pub const DEFAULT_MAX_NODES: usize = 100;

    /// Default list capacity.
    pub const DEFAULT_MAX_LISTS: usize = 10;

    /// Create a config with explicit limits.
    pub const fn new(max_nodes: usize, max_lists: usize) -> Self {
        Self {
            max_nodes,
            max_lists,
        }
    }

    /// Replace the node capacity.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Replace the list capacity.
    pub fn with_max_lists(mut self, max_lists: usize) -> Self {
        self.max_lists = max_lists;
        self
    }

    /// Check that both capacities fit the pool's `u32` slot indices.
    ///
    /// Zero is accepted: a pool with no node capacity rejects every insertion
    /// with [`ListError::Exhausted`](crate::ListError::Exhausted).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limit = u32::MAX as usize;
        if self.max_nodes > limit {
            return Err(ConfigError::CapacityTooLarge {
                what: "max_nodes",
                requested: self.max_nodes,
                limit,
            });
        }
        if self.max_lists > limit {
            return Err(ConfigError::CapacityTooLarge {
                what: "max_lists",
                requested: self.max_lists,
                limit,
            });
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_NODES, Self::DEFAULT_MAX_LISTS)
    }
}
