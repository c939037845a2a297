//! Fixed-capacity slot storage.
//!
//! A [`Slab`] is the backing store for one kind of pool object (list nodes or
//! list headers). It never grows past the capacity given at construction.
//! Slots are created lazily up to that bound; a released slot's index goes on
//! a free stack and is handed out again before any fresh slot, so both
//! acquire and release run in *O*(1) without scanning.
//!
//! ```text
//!   slots: [ gen 2 | live ][ gen 0 | live ][ gen 1 | vacant ][ gen 0 | live ]
//!   free:  [ 2 ]                                         len = 4, capacity = 6
//! ```
//!
//! Every slot keeps a generation counter that is bumped on release, so a
//! [`ListHandle`] minted before the release no longer matches the slot.

use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::{ListError, PoolKind};

mod handle;

pub use handle::ListHandle;
pub(crate) use handle::SlotIndex;

static NEXT_POOL_ID: AtomicU32 = AtomicU32::new(1);

/// Allocate a process-unique pool id.
pub(crate) fn next_pool_id() -> u32 {
    NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed)
}

/// Index and generation of a freshly acquired slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SlotKey {
    pub(crate) index: SlotIndex,
    pub(crate) generation: u32,
}

struct Slot<S> {
    generation: u32,
    value: Option<S>,
}

pub(crate) struct Slab<S> {
    slots: Vec<Slot<S>>,
    /// Indices of vacant slots, most recently released on top.
    free: Vec<SlotIndex>,
    capacity: usize,
    kind: PoolKind,
}

impl<S> Slab<S> {
    /// Create an empty slab. `capacity` must fit a [`SlotIndex`]; callers
    /// check this through [`PoolConfig::validate`](crate::PoolConfig::validate).
    pub(crate) fn new(kind: PoolKind, capacity: usize) -> Self {
        debug_assert!(capacity <= SlotIndex::MAX as usize);
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            capacity,
            kind,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots.
    pub(crate) fn in_use(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn available(&self) -> usize {
        self.capacity - self.in_use()
    }

    /// Store `value` in a vacant slot and return the slot's key.
    ///
    /// Fails with [`ListError::Exhausted`] when every slot is occupied. The
    /// value is dropped in that case.
    pub(crate) fn acquire(&mut self, value: S) -> Result<SlotKey, ListError> {
        let index = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                debug_assert!(slot.value.is_none(), "free stack holds an occupied slot");
                slot.value = Some(value);
                index
            }
            None if self.slots.len() < self.capacity => {
                let index = self.slots.len() as SlotIndex;
                self.slots.push(Slot {
                    generation: 0,
                    value: Some(value),
                });
                index
            }
            None => {
                pool_event!(
                    debug,
                    kind = %self.kind,
                    capacity = self.capacity,
                    "pool exhausted"
                );
                return Err(ListError::Exhausted {
                    kind: self.kind,
                    capacity: self.capacity,
                });
            }
        };
        pool_event!(trace, kind = %self.kind, index, "slot acquired");
        Ok(SlotKey {
            index,
            generation: self.slots[index as usize].generation,
        })
    }

    /// Vacate slot `index` and return its value.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already vacant. The engine only releases slots
    /// it reached through live links or a validated handle, so a double
    /// release means those links are corrupt.
    pub(crate) fn release(&mut self, index: SlotIndex) -> S {
        let kind = self.kind;
        let slot = match self.slots.get_mut(index as usize) {
            Some(slot) => slot,
            None => panic!("release of unknown {} slot {}", kind, index),
        };
        let value = match slot.value.take() {
            Some(value) => value,
            None => panic!("double release of {} slot {}", kind, index),
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        pool_event!(trace, kind = %kind, index, "slot released");
        value
    }

    /// Current generation of slot `index`, or `None` if the slot was never
    /// created.
    pub(crate) fn generation(&self, index: SlotIndex) -> Option<u32> {
        self.slots.get(index as usize).map(|slot| slot.generation)
    }

    pub(crate) fn get(&self, index: SlotIndex) -> Option<&S> {
        self.slots.get(index as usize)?.value.as_ref()
    }

    pub(crate) fn get_mut(&mut self, index: SlotIndex) -> Option<&mut S> {
        self.slots.get_mut(index as usize)?.value.as_mut()
    }
}

/// Panics if the slot is vacant. Used only on indices reached through live
/// links, where vacancy would mean the links are corrupt.
impl<S> Index<SlotIndex> for Slab<S> {
    type Output = S;

    fn index(&self, index: SlotIndex) -> &S {
        match self.get(index) {
            Some(value) => value,
            None => panic!("{} slot {} is vacant", self.kind, index),
        }
    }
}

impl<S> IndexMut<SlotIndex> for Slab<S> {
    fn index_mut(&mut self, index: SlotIndex) -> &mut S {
        let kind = self.kind;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("{} slot {} is vacant", kind, index),
        }
    }
}
