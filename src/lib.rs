//! This crate provides a cursor-oriented doubly-linked list whose nodes live in
//! a fixed-capacity pool shared by every list.
//!
//! A [`ListPool`] owns two bounded stores: one for list nodes and one for list
//! headers. Lists are created from the pool and named by an owned
//! [`ListHandle`]; every item of every list occupies one node slot, so the
//! node capacity is a budget for the whole pool, not for one list. Running
//! out is an ordinary, recoverable [`ListError::Exhausted`].
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use pooled_list::{ListPool, Position};
//!
//! let mut pool = ListPool::new();
//! let handle = pool.create().unwrap();
//!
//! let mut list = pool.list_mut(&handle).unwrap();
//! list.append("a").unwrap();
//! list.append("b").unwrap();
//! list.append("c").unwrap();
//! assert_eq!(list.count(), 3);
//!
//! assert_eq!(list.first(), Some(&"a"));
//! assert_eq!(list.next(), Some(&"b"));
//! assert_eq!(list.next(), Some(&"c"));
//! assert_eq!(list.next(), None);
//! assert_eq!(list.position(), Position::AfterEnd);
//! assert_eq!(list.prev(), Some(&"c"));
//!
//! pool.free(handle, drop).unwrap();
//! assert_eq!(pool.nodes_in_use(), 0);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the pool is like the following graph:
//! ```text
//!  ListPool
//! ╔═══════════╗      lists: Slab<Header>                 nodes: Slab<Node<T>>
//! ║   lists   ║ ──→ ┌──────────────────┐       ┌────────────────────────────────────────┐
//! ╟───────────╢     │ 0: head tail cur │ ─┐    │ 0: prev=∅  next=3  owner=0  item       │ ←┐
//! ║   nodes   ║ ─┐  │ 1: (vacant)      │  └──→ │ 1: (vacant)                            │  │
//! ╟───────────╢  │  │ 2: head tail cur │       │ 2: prev=∅  next=∅  owner=2  item       │  │
//! ║    id     ║  │  └──────────────────┘       │ 3: prev=0  next=∅  owner=0  item       │ ─┘
//! ╚═══════════╝  │   free: [1]                 └────────────────────────────────────────┘
//!                └──────────────────────────→   free: [1]
//! ```
//! - Each header holds the slot indices of its list's head and tail, the item
//!   count and the cursor.
//! - Each node holds the slot indices of its neighbours (`∅` at the ends), the
//!   header slot of the list that owns it, and the caller's item.
//! - Vacant slots of either store sit on that store's free stack and are
//!   reused before any fresh slot is touched.
//!
//! Links are indices, never addresses, so the crate needs no `unsafe`.
//!
//! # Cursor
//!
//! Every list has exactly one cursor. It is in one of three states, reported
//! by [`ListViewMut::position`]:
//! - [`Position::BeforeStart`]: before the head. A new list starts here.
//! - [`Position::OnItem`]: on an item, which [`ListViewMut::curr`] returns.
//! - [`Position::AfterEnd`]: past the tail.
//!
//! Navigation past either end leaves the cursor in the matching beyond state
//! and yields `None`; stepping back from it lands on the boundary item.
//!
//! ```
//! use pooled_list::{ListPool, Position};
//!
//! let mut pool = ListPool::new();
//! let handle = pool.create().unwrap();
//! let mut list = pool.list_mut(&handle).unwrap();
//! list.append(1).unwrap();
//! list.append(2).unwrap();
//!
//! assert_eq!(list.first(), Some(&1));
//! assert_eq!(list.prev(), None);
//! assert_eq!(list.position(), Position::BeforeStart);
//! assert_eq!(list.next(), Some(&1));
//! # pool.free(handle, drop).unwrap();
//! ```
//!
//! # Mutations
//!
//! [`ListViewMut`] mutates the list relative to the cursor, and every
//! insertion makes the new item current:
//! - [`add`]: insert after the cursor;
//! - [`insert`]: insert before the cursor;
//! - [`append`] / [`prepend`]: insert at the tail / head;
//! - [`remove`]: take the current item out, moving to its successor;
//! - [`trim`]: take the tail item out, moving to the new tail;
//! - [`search`]: scan forward from the cursor for a matching item.
//!
//! Whole-list operations live on the pool: [`ListPool::concat`] moves one
//! list's items onto the end of another and [`ListPool::free`] releases a
//! list, handing each item to a cleanup closure.
//!
//! ## Examples
//!
//! ```
//! use pooled_list::ListPool;
//!
//! let mut pool = ListPool::new();
//! let first = pool.create().unwrap();
//! let second = pool.create().unwrap();
//!
//! let mut list = pool.list_mut(&first).unwrap();
//! list.append(1).unwrap();
//! list.append(4).unwrap();
//! list.first();
//! list.add(2).unwrap(); // becomes [1, 2, 4], cursor on 2
//! list.add(3).unwrap(); // becomes [1, 2, 3, 4], cursor on 3
//!
//! pool.list_mut(&second).unwrap().append(5).unwrap();
//! pool.concat(&first, second).unwrap();
//!
//! let list = pool.list(&first).unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(list.curr(), Some(&3));
//!
//! let mut freed = Vec::new();
//! pool.free(first, |item| freed.push(item)).unwrap();
//! assert_eq!(freed, vec![1, 2, 3, 4, 5]);
//! ```
//!
//! # Features
//!
//! - `tracing`: emit `trace` events for every slot acquired or released and a
//!   `debug` event when a store is exhausted.
//! - `serde`: derive `Serialize` and `Deserialize` for [`PoolConfig`].
//!
//! [`add`]: crate::ListViewMut::add
//! [`insert`]: crate::ListViewMut::insert
//! [`append`]: crate::ListViewMut::append
//! [`prepend`]: crate::ListViewMut::prepend
//! [`remove`]: crate::ListViewMut::remove
//! [`trim`]: crate::ListViewMut::trim
//! [`search`]: crate::ListViewMut::search

#![deny(unsafe_code)]

#[cfg(feature = "tracing")]
macro_rules! pool_event {
    ($level:ident, $($arg:tt)+) => {
        tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! pool_event {
    ($level:ident, $($arg:tt)+) => {};
}

#[doc(inline)]
pub use config::PoolConfig;
#[doc(inline)]
pub use error::{ConcatError, ConfigError, ListError, PoolKind};
#[doc(inline)]
pub use list::iterator::Iter;
#[doc(inline)]
pub use list::view::{ListView, ListViewMut, Position};
#[doc(inline)]
pub use list::ListPool;
#[doc(inline)]
pub use pool::ListHandle;

pub mod config;
pub mod error;
pub mod list;
mod pool;
