//! Error types returned by pool and list operations.
//!
//! A missing item (empty list, cursor beyond either end, failed search) is
//! not an error; those operations return `None`.

use std::fmt;

use crate::pool::ListHandle;

/// Which of the two backing stores ran out of slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoolKind {
    /// The node store, shared by every list's items.
    Node,
    /// The list-header store.
    List,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolKind::Node => f.write_str("node"),
            PoolKind::List => f.write_str("list"),
        }
    }
}

/// Errors from [`ListPool`](crate::ListPool) operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// No free slot is left in the named pool. The list that was being
    /// mutated is left exactly as it was.
    #[error("{kind} pool exhausted: all {capacity} slots in use")]
    Exhausted {
        /// The pool that ran out.
        kind: PoolKind,
        /// Its fixed capacity.
        capacity: usize,
    },

    /// The handle refers to a list header that has been released (and
    /// possibly reused) since the handle was issued.
    ///
    /// Handles are moved into [`free`](crate::ListPool::free) and
    /// [`concat`](crate::ListPool::concat) and cannot be cloned or built
    /// outside the crate, so this is reachable only through a forged
    /// handle. Callers need no recovery path for it.
    #[error("stale list handle: slot {index} is at generation {slot_generation}, handle has {handle_generation}")]
    StaleHandle {
        /// Slot index carried by the handle.
        index: u32,
        /// Generation carried by the handle.
        handle_generation: u32,
        /// Current generation of the slot.
        slot_generation: u32,
    },

    /// The handle was issued by a different pool.
    #[error("list handle belongs to pool {found_pool}, not pool {expected_pool}")]
    ForeignHandle {
        /// Id of the pool the handle was presented to.
        expected_pool: u32,
        /// Id of the pool that issued the handle.
        found_pool: u32,
    },
}

/// A rejected [`ListPool::concat`](crate::ListPool::concat).
///
/// Nothing was mutated. The source handle is handed back so the caller can
/// still free that list.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("concat rejected: {error}")]
pub struct ConcatError {
    /// Why the concatenation was refused.
    #[source]
    pub error: ListError,
    /// The source handle, returned untouched.
    pub src: ListHandle,
}

impl ConcatError {
    /// Take back the source handle.
    pub fn into_handle(self) -> ListHandle {
        self.src
    }
}

/// Errors from [`PoolConfig::validate`](crate::PoolConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A capacity does not fit a `u32` slot index.
    #[error("{what} = {requested} exceeds the maximum of {limit}")]
    CapacityTooLarge {
        /// The offending setting.
        what: &'static str,
        /// The requested capacity.
        requested: usize,
        /// Largest accepted capacity.
        limit: usize,
    },
}
