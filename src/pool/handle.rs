//! Owned list handles.
//!
//! A [`ListHandle`] names one list header inside one pool. It is neither
//! `Clone` nor `Copy`: the operations that destroy a list ([`free`] and the
//! source side of [`concat`]) take it by value, so a destroyed list cannot
//! be named again through the handle that destroyed it. The generation and
//! pool id it carries catch the remaining misuse (a handle presented to the
//! wrong pool) at runtime.
//!
//! [`free`]: crate::ListPool::free
//! [`concat`]: crate::ListPool::concat

use std::fmt;

/// Index of a slot inside one of the pool's backing stores.
pub(crate) type SlotIndex = u32;

/// Owned reference to a list living in a [`ListPool`](crate::ListPool).
#[derive(Debug, PartialEq, Eq, Hash)]
#[must_use = "dropping a list handle leaks the list's slots until the pool is dropped"]
pub struct ListHandle {
    pub(crate) pool: u32,
    pub(crate) index: SlotIndex,
    pub(crate) generation: u32,
}

impl ListHandle {
    pub(crate) fn new(pool: u32, index: SlotIndex, generation: u32) -> Self {
        Self {
            pool,
            index,
            generation,
        }
    }

    /// Id of the pool that issued this handle.
    pub fn pool_id(&self) -> u32 {
        self.pool
    }

    /// Header slot this handle points at.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the header slot when the handle was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ListHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ListHandle(pool={}, slot={}, gen={})",
            self.pool, self.index, self.generation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let handle = ListHandle::new(7, 3, 12);
        assert_eq!(handle.pool_id(), 7);
        assert_eq!(handle.index(), 3);
        assert_eq!(handle.generation(), 12);
    }

    #[test]
    fn display() {
        let handle = ListHandle::new(1, 0, 2);
        assert_eq!(handle.to_string(), "ListHandle(pool=1, slot=0, gen=2)");
    }
}
