use std::fmt::{self, Debug, Formatter};

use crate::config::PoolConfig;
use crate::error::{ConcatError, ConfigError, ListError, PoolKind};
use crate::list::view::{ListView, ListViewMut};
use crate::pool::{next_pool_id, ListHandle, Slab, SlotIndex};

pub mod iterator;
pub mod view;

mod algorithms;

/// The `ListPool` owns the storage of a family of cursor-oriented
/// doubly-linked lists.
///
/// Nodes and list headers are kept in two fixed-capacity slabs, sized by the
/// [`PoolConfig`] the pool was built with. Lists are created with
/// [`ListPool::create`], inspected and edited through the views returned by
/// [`ListPool::list`] and [`ListPool::list_mut`], and destroyed with
/// [`ListPool::free`] or [`ListPool::concat`].
///
/// # Naming Conventions
///
/// - `prev`/`next` of `None` stand for the list boundary: `connect(list,
///   None, next)` makes `next` the head, `connect(list, prev, None)` makes
///   `prev` the tail;
/// - `front..=back`: a closed range of linked nodes, both inclusive.
pub struct ListPool<T> {
    id: u32,
    nodes: Slab<Node<T>>,
    lists: Slab<Header>,
}

pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) prev: Option<SlotIndex>,
    pub(crate) next: Option<SlotIndex>,
    /// Header slot of the list this node belongs to.
    pub(crate) owner: SlotIndex,
}

/// Where the cursor of a list rests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cursor {
    BeforeStart,
    OnNode(SlotIndex),
    AfterEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Header {
    pub(crate) head: Option<SlotIndex>,
    pub(crate) tail: Option<SlotIndex>,
    pub(crate) cursor: Cursor,
    pub(crate) len: usize,
}

impl Header {
    const EMPTY: Header = Header {
        head: None,
        tail: None,
        cursor: Cursor::BeforeStart,
        len: 0,
    };
}

// private methods
impl<T> ListPool<T> {
    /// Check that `handle` was issued by this pool and that its list is
    /// still live, and return the header slot.
    pub(crate) fn validate(&self, handle: &ListHandle) -> Result<SlotIndex, ListError> {
        if handle.pool != self.id {
            return Err(ListError::ForeignHandle {
                expected_pool: self.id,
                found_pool: handle.pool,
            });
        }
        match self.lists.generation(handle.index) {
            Some(generation) if generation == handle.generation => Ok(handle.index),
            slot_generation => Err(ListError::StaleHandle {
                index: handle.index,
                handle_generation: handle.generation,
                slot_generation: slot_generation.unwrap_or(handle.generation),
            }),
        }
    }

    pub(crate) fn header(&self, list: SlotIndex) -> &Header {
        &self.lists[list]
    }

    pub(crate) fn header_mut(&mut self, list: SlotIndex) -> &mut Header {
        &mut self.lists[list]
    }

    pub(crate) fn node(&self, node: SlotIndex) -> &Node<T> {
        &self.nodes[node]
    }

    /// Take a node slot for `item`, owned by `list` but not linked yet.
    pub(crate) fn acquire_node(&mut self, list: SlotIndex, item: T) -> Result<SlotIndex, ListError> {
        let node = Node {
            item,
            prev: None,
            next: None,
            owner: list,
        };
        self.nodes.acquire(node).map(|key| key.index)
    }

    fn release_node(&mut self, node: SlotIndex) -> Node<T> {
        self.nodes.release(node)
    }

    fn acquire_list(&mut self) -> Result<ListHandle, ListError> {
        let key = self.lists.acquire(Header::EMPTY)?;
        Ok(ListHandle::new(self.id, key.index, key.generation))
    }

    fn release_list(&mut self, list: SlotIndex) -> Header {
        self.lists.release(list)
    }

    /// Link `prev` and `next` to each other. A `None` side stands for the
    /// list boundary, so the other side becomes the head or the tail.
    fn connect(&mut self, list: SlotIndex, prev: Option<SlotIndex>, next: Option<SlotIndex>) {
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.lists[list].head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.lists[list].tail = prev,
        }
    }

    /// Attach the detached node `node` to `list`, between `prev` and `next`.
    ///
    /// `prev` and `next` must be adjacent in `list` (checked only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) fn attach_node(
        &mut self,
        list: SlotIndex,
        prev: Option<SlotIndex>,
        next: Option<SlotIndex>,
        node: SlotIndex,
    ) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(list, prev, next);
        debug_assert_eq!(self.nodes[node].owner, list);
        self.connect(list, prev, Some(node));
        self.connect(list, Some(node), next);
        self.lists[list].len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(list, prev, Some(node));
            self.assert_adjacent(list, Some(node), next);
        }
    }

    /// Unlink `node` from `list`, release its slot and return its item.
    ///
    /// `node` must belong to `list` (checked only in
    /// `#[cfg(debug_assertions)]`). The cursor is left alone; callers
    /// reposition it.
    pub(crate) fn detach_node(&mut self, list: SlotIndex, node: SlotIndex) -> T {
        let Node {
            prev, next, owner, ..
        } = self.nodes[node];
        debug_assert_eq!(owner, list, "node belongs to another list");
        self.connect(list, prev, next);
        self.lists[list].len -= 1;
        self.release_node(node).item
    }

    /// Attach the chain `front..=back` of `len` nodes to `list`, between
    /// `prev` and `next`, and make `list` the owner of every node in it.
    ///
    /// This operation should compute in *O*(`len`) time.
    fn attach_nodes(
        &mut self,
        list: SlotIndex,
        prev: Option<SlotIndex>,
        next: Option<SlotIndex>,
        (front, back): (SlotIndex, SlotIndex),
        len: usize,
    ) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(list, prev, next);
        let mut walk = Some(front);
        while let Some(node) = walk {
            let node = &mut self.nodes[node];
            node.owner = list;
            walk = node.next;
        }
        self.connect(list, prev, Some(front));
        self.connect(list, Some(back), next);
        self.lists[list].len += len;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(list, prev, Some(front));
            self.assert_adjacent(list, Some(back), next);
        }
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, list: SlotIndex, prev: Option<SlotIndex>, next: Option<SlotIndex>) {
        let after_prev = match prev {
            Some(prev) => self.nodes[prev].next,
            None => self.lists[list].head,
        };
        let before_next = match next {
            Some(next) => self.nodes[next].prev,
            None => self.lists[list].tail,
        };
        assert_eq!(after_prev, next);
        assert_eq!(before_next, prev);
    }
}

impl<T> ListPool<T> {
    /// Create a pool with the default capacities
    /// ([`PoolConfig::DEFAULT_MAX_NODES`] nodes,
    /// [`PoolConfig::DEFAULT_MAX_LISTS`] lists).
    ///
    /// # Examples
    /// ```
    /// use pooled_list::ListPool;
    /// let pool: ListPool<u32> = ListPool::new();
    /// assert_eq!(pool.lists_in_use(), 0);
    /// ```
    pub fn new() -> Self {
        Self::build(PoolConfig::default())
    }

    /// Create a pool with the given capacities.
    ///
    /// # Examples
    /// ```
    /// use pooled_list::{ListPool, PoolConfig};
    ///
    /// let pool: ListPool<&str> = ListPool::with_config(PoolConfig::new(4, 1)).unwrap();
    /// assert_eq!(pool.node_capacity(), 4);
    /// assert_eq!(pool.list_capacity(), 1);
    /// ```
    pub fn with_config(config: PoolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PoolConfig) -> Self {
        Self {
            id: next_pool_id(),
            nodes: Slab::new(PoolKind::Node, config.max_nodes),
            lists: Slab::new(PoolKind::List, config.max_lists),
        }
    }

    /// Process-unique id of this pool, carried by every handle it issues.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Maximum number of items held by all lists together.
    pub fn node_capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Maximum number of live lists.
    pub fn list_capacity(&self) -> usize {
        self.lists.capacity()
    }

    /// Number of items currently held by all lists together.
    pub fn nodes_in_use(&self) -> usize {
        self.nodes.in_use()
    }

    /// Number of live lists.
    pub fn lists_in_use(&self) -> usize {
        self.lists.in_use()
    }

    /// Number of items that can still be inserted, across all lists.
    pub fn free_nodes(&self) -> usize {
        self.nodes.available()
    }

    /// Number of lists that can still be created.
    pub fn free_lists(&self) -> usize {
        self.lists.available()
    }

    /// Returns `true` if `handle` names a live list of this pool.
    pub fn is_live(&self, handle: &ListHandle) -> bool {
        self.validate(handle).is_ok()
    }

    /// Create an empty list with its cursor before the start.
    ///
    /// Fails with [`ListError::Exhausted`] when every list slot is in use.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::{ListPool, PoolConfig};
    ///
    /// let mut pool: ListPool<u8> = ListPool::with_config(PoolConfig::new(8, 1)).unwrap();
    /// let handle = pool.create().unwrap();
    /// assert!(pool.create().is_err());
    ///
    /// pool.free(handle, drop).unwrap();
    /// assert!(pool.create().is_ok());
    /// ```
    pub fn create(&mut self) -> Result<ListHandle, ListError> {
        self.acquire_list()
    }

    /// Provides a read-only view of a list. Viewing never moves the cursor.
    pub fn list(&self, handle: &ListHandle) -> Result<ListView<'_, T>, ListError> {
        let list = self.validate(handle)?;
        Ok(ListView::new(self, list))
    }

    /// Provides a view with navigation and editing operations on a list.
    pub fn list_mut(&mut self, handle: &ListHandle) -> Result<ListViewMut<'_, T>, ListError> {
        let list = self.validate(handle)?;
        Ok(ListViewMut::new(self, list))
    }

    /// Moves all items of `src` to the end of `dst` and destroys `src`.
    ///
    /// The cursor of `dst` is kept, except when `dst` was empty: it then
    /// takes over the cursor `src` had. The nodes themselves are reused, so
    /// the number of nodes in use does not change and no capacity is needed.
    ///
    /// If either handle is rejected nothing is mutated, and the `src`
    /// handle comes back inside the [`ConcatError`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m*) time, where *m* is the
    /// length of `src`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::ListPool;
    ///
    /// let mut pool = ListPool::new();
    /// let first = pool.create().unwrap();
    /// let second = pool.create().unwrap();
    /// pool.list_mut(&first).unwrap().append('a').unwrap();
    /// pool.list_mut(&second).unwrap().append('b').unwrap();
    /// pool.list_mut(&second).unwrap().append('c').unwrap();
    ///
    /// pool.concat(&first, second).unwrap();
    ///
    /// let list = pool.list(&first).unwrap();
    /// assert_eq!(list.iter().collect::<String>(), "abc");
    /// assert_eq!(pool.lists_in_use(), 1);
    /// ```
    pub fn concat(&mut self, dst: &ListHandle, src: ListHandle) -> Result<(), ConcatError> {
        let validated = self
            .validate(dst)
            .and_then(|dst| self.validate(&src).map(|src| (dst, src)));
        let (dst, src) = match validated {
            Ok(pair) => pair,
            Err(error) => return Err(ConcatError { error, src }),
        };
        debug_assert_ne!(dst, src);

        let moved = self.release_list(src);
        let Header { tail, len, .. } = *self.header(dst);
        if let (Some(front), Some(back)) = (moved.head, moved.tail) {
            self.attach_nodes(dst, tail, None, (front, back), moved.len);
        }
        if len == 0 {
            self.header_mut(dst).cursor = moved.cursor;
        }
        pool_event!(
            debug,
            pool = self.id,
            dst,
            src,
            moved = moved.len,
            "lists concatenated"
        );
        Ok(())
    }

    /// Destroys a list, handing each of its items to `cleanup` in list order
    /// as its node is released. The list header is released last.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::ListPool;
    ///
    /// let mut pool = ListPool::new();
    /// let handle = pool.create().unwrap();
    /// let mut list = pool.list_mut(&handle).unwrap();
    /// list.append(String::from("x")).unwrap();
    /// list.append(String::from("y")).unwrap();
    ///
    /// let mut seen = Vec::new();
    /// pool.free(handle, |item| seen.push(item)).unwrap();
    /// assert_eq!(seen, ["x", "y"]);
    /// assert_eq!(pool.nodes_in_use(), 0);
    /// assert_eq!(pool.lists_in_use(), 0);
    /// ```
    pub fn free<F>(&mut self, handle: ListHandle, mut cleanup: F) -> Result<(), ListError>
    where
        F: FnMut(T),
    {
        let list = self.validate(&handle)?;
        let header = *self.header(list);
        let mut walk = header.head;
        while let Some(node) = walk {
            let node = self.release_node(node);
            debug_assert_eq!(node.owner, list);
            walk = node.next;
            cleanup(node.item);
        }
        self.release_list(list);
        pool_event!(debug, pool = self.id, list, items = header.len, "list freed");
        Ok(())
    }
}

impl<T> Debug for ListPool<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListPool")
            .field("id", &self.id)
            .field("nodes_in_use", &self.nodes_in_use())
            .field("node_capacity", &self.node_capacity())
            .field("lists_in_use", &self.lists_in_use())
            .field("list_capacity", &self.list_capacity())
            .finish()
    }
}

impl<T> Default for ListPool<T> {
    fn default() -> Self {
        Self::new()
    }
}
