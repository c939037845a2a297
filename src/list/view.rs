use crate::error::ListError;
use crate::list::iterator::Iter;
use crate::list::{Cursor, Header, ListPool};
use crate::pool::SlotIndex;
use std::fmt;
use std::fmt::Formatter;

/// The resting place of a list's cursor.
///
/// In a list with *n* items there are *n* + 2 places for the cursor: before
/// the head, on each item, and after the tail. The empty list has only the
/// two beyond places.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// Before the head. A freshly created list starts here.
    BeforeStart,
    /// On an item.
    OnItem,
    /// After the tail.
    AfterEnd,
}

impl Cursor {
    pub(crate) fn position(self) -> Position {
        match self {
            Cursor::BeforeStart => Position::BeforeStart,
            Cursor::OnNode(_) => Position::OnItem,
            Cursor::AfterEnd => Position::AfterEnd,
        }
    }
}

/// A read-only view of one list in a [`ListPool`].
///
/// Nothing reachable from a `ListView` moves the cursor, so several views
/// of the same pool may be held at once.
///
/// # Examples
///
/// ```
/// use pooled_list::ListPool;
///
/// let mut pool = ListPool::new();
/// let handle = pool.create().unwrap();
/// let mut list = pool.list_mut(&handle).unwrap();
/// list.append('A').unwrap();
/// list.append('B').unwrap();
///
/// let view = pool.list(&handle).unwrap();
/// assert_eq!(view.count(), 2);
/// assert_eq!(view.curr(), Some(&'B'));
/// assert_eq!(view.front(), Some(&'A'));
/// assert_eq!(view.curr(), Some(&'B'));
/// ```
pub struct ListView<'a, T: 'a> {
    pub(crate) pool: &'a ListPool<T>,
    pub(crate) list: SlotIndex,
}

impl<'a, T: 'a> Clone for ListView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for ListView<'a, T> {}

/// A view of one list in a [`ListPool`] with navigation and editing
/// operations.
///
/// A `ListViewMut` borrows the whole pool mutably: list operations may take
/// node slots from, or give them back to, the pool's shared store. The view
/// is cheap to obtain again from the [`ListHandle`](crate::ListHandle), and
/// the cursor is stored in the list, not in the view, so it survives between
/// views.
///
/// ```compile_fail
/// use pooled_list::ListPool;
///
/// let mut pool = ListPool::new();
/// let a = pool.create().unwrap();
/// let b = pool.create().unwrap();
/// let mut list_a = pool.list_mut(&a).unwrap();
/// let mut list_b = pool.list_mut(&b).unwrap();
/// list_a.append(1).unwrap();
/// list_b.append(2).unwrap();
/// ```
pub struct ListViewMut<'a, T: 'a> {
    pub(crate) pool: &'a mut ListPool<T>,
    pub(crate) list: SlotIndex,
}

macro_rules! impl_view {
    ($VIEW:ident) => {
        // Private methods
        impl<'a, T: 'a> $VIEW<'a, T> {
            pub(crate) fn header(&self) -> &Header {
                self.pool.header(self.list)
            }
            pub(crate) fn item(&self, node: SlotIndex) -> &T {
                &self.pool.node(node).item
            }
        }

        impl<'a, T: 'a> $VIEW<'a, T> {
            /// Returns the number of items in the list.
            ///
            /// This operation should compute in *O*(1) time.
            pub fn count(&self) -> usize {
                self.header().len
            }

            /// Returns `true` if the list holds no item.
            pub fn is_empty(&self) -> bool {
                self.header().head.is_none()
            }

            /// Returns where the cursor rests.
            pub fn position(&self) -> Position {
                self.header().cursor.position()
            }

            /// Returns the item under the cursor, or `None` if the cursor is
            /// before the start or after the end.
            ///
            /// This operation should compute in *O*(1) time.
            pub fn curr(&self) -> Option<&T> {
                match self.header().cursor {
                    Cursor::OnNode(node) => Some(self.item(node)),
                    Cursor::BeforeStart | Cursor::AfterEnd => None,
                }
            }

            /// Returns the head item without moving the cursor.
            pub fn front(&self) -> Option<&T> {
                self.header().head.map(|node| self.item(node))
            }

            /// Returns the tail item without moving the cursor.
            pub fn back(&self) -> Option<&T> {
                self.header().tail.map(|node| self.item(node))
            }

            /// Provides a double-ended iterator over the items, head to tail.
            /// The cursor is not involved.
            pub fn iter(&self) -> Iter<'_, T> {
                Iter::new(&self.pool.nodes, self.header())
            }

            /// Returns `true` if the list contains an item equal to `x`.
            ///
            /// This operation should compute in *O*(*n*) time.
            pub fn contains(&self, x: &T) -> bool
            where
                T: PartialEq,
            {
                self.iter().any(|item| item == x)
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $VIEW<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($VIEW))
                    .field("items", &self.iter())
                    .field("position", &self.position())
                    .finish()
            }
        }
    };
}

impl_view!(ListView);
impl_view!(ListViewMut);

impl<'a, T: 'a> ListView<'a, T> {
    pub(crate) fn new(pool: &'a ListPool<T>, list: SlotIndex) -> Self {
        Self { pool, list }
    }
}

impl<'a, T: 'a> ListViewMut<'a, T> {
    pub(crate) fn new(pool: &'a mut ListPool<T>, list: SlotIndex) -> Self {
        Self { pool, list }
    }

    pub(crate) fn set_cursor(&mut self, cursor: Cursor) {
        self.pool.header_mut(self.list).cursor = cursor;
    }

    /// Move onto `node` and return its item.
    pub(crate) fn land_on(&mut self, node: SlotIndex) -> Option<&T> {
        self.set_cursor(Cursor::OnNode(node));
        Some(self.item(node))
    }

    /// Put `item` in a new node between `prev` and `next` and move onto it.
    /// On exhaustion nothing changes.
    fn place(
        &mut self,
        prev: Option<SlotIndex>,
        next: Option<SlotIndex>,
        item: T,
    ) -> Result<(), ListError> {
        let node = self.pool.acquire_node(self.list, item)?;
        self.pool.attach_node(self.list, prev, next, node);
        self.set_cursor(Cursor::OnNode(node));
        Ok(())
    }

    /// Re-borrow the view as a short-lived read-only one.
    pub fn as_view(&self) -> ListView<'_, T> {
        ListView::new(&*self.pool, self.list)
    }
}

// Navigation
impl<'a, T: 'a> ListViewMut<'a, T> {
    /// Moves the cursor onto the head and returns it, or returns `None` and
    /// leaves the cursor alone if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::{ListPool, Position};
    ///
    /// let mut pool = ListPool::new();
    /// let handle = pool.create().unwrap();
    /// let mut list = pool.list_mut(&handle).unwrap();
    /// assert_eq!(list.first(), None);
    /// assert_eq!(list.position(), Position::BeforeStart);
    ///
    /// list.append(1).unwrap();
    /// list.append(2).unwrap();
    /// assert_eq!(list.first(), Some(&1));
    /// assert_eq!(list.curr(), Some(&1));
    /// ```
    pub fn first(&mut self) -> Option<&T> {
        let head = self.header().head?;
        self.land_on(head)
    }

    /// Moves the cursor onto the tail and returns it, or returns `None` and
    /// leaves the cursor alone if the list is empty.
    pub fn last(&mut self) -> Option<&T> {
        let tail = self.header().tail?;
        self.land_on(tail)
    }

    /// Moves the cursor forward one item and returns the new current item.
    ///
    /// Stepping off the tail leaves the cursor after the end and returns
    /// `None`; so does every further call. From before the start the cursor
    /// moves onto the head.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::{ListPool, Position};
    ///
    /// let mut pool = ListPool::new();
    /// let handle = pool.create().unwrap();
    /// let mut list = pool.list_mut(&handle).unwrap();
    /// list.append('a').unwrap();
    /// list.append('b').unwrap();
    ///
    /// assert_eq!(list.next(), None); // already on the tail
    /// assert_eq!(list.position(), Position::AfterEnd);
    /// assert_eq!(list.next(), None);
    /// assert_eq!(list.prev(), Some(&'b'));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        let Header { head, cursor, .. } = *self.header();
        let target = match cursor {
            Cursor::BeforeStart => head?,
            Cursor::OnNode(node) => match self.pool.node(node).next {
                Some(next) => next,
                None => {
                    self.set_cursor(Cursor::AfterEnd);
                    return None;
                }
            },
            Cursor::AfterEnd => return None,
        };
        self.land_on(target)
    }

    /// Moves the cursor backward one item and returns the new current item.
    ///
    /// Stepping off the head leaves the cursor before the start and returns
    /// `None`; so does every further call. From after the end the cursor
    /// moves onto the tail.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn prev(&mut self) -> Option<&T> {
        let Header { tail, cursor, .. } = *self.header();
        let target = match cursor {
            Cursor::AfterEnd => tail?,
            Cursor::OnNode(node) => match self.pool.node(node).prev {
                Some(prev) => prev,
                None => {
                    self.set_cursor(Cursor::BeforeStart);
                    return None;
                }
            },
            Cursor::BeforeStart => return None,
        };
        self.land_on(target)
    }
}

// Mutations
impl<'a, T: 'a> ListViewMut<'a, T> {
    /// Inserts `item` directly after the current item and makes it current.
    ///
    /// Before the start, the item becomes the new head; after the end, or in
    /// an empty list, it becomes the new tail.
    ///
    /// Fails with [`ListError::Exhausted`] if the pool has no free node. The
    /// list is then left exactly as it was, and `item` is dropped.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::ListPool;
    ///
    /// let mut pool = ListPool::new();
    /// let handle = pool.create().unwrap();
    /// let mut list = pool.list_mut(&handle).unwrap();
    ///
    /// list.add(1).unwrap(); // [1]
    /// list.add(3).unwrap(); // [1, 3]
    /// list.first();
    /// list.add(2).unwrap(); // [1, 2, 3]
    /// assert_eq!(list.curr(), Some(&2));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn add(&mut self, item: T) -> Result<(), ListError> {
        let Header {
            head, tail, cursor, ..
        } = *self.header();
        let (prev, next) = match cursor {
            Cursor::OnNode(node) => (Some(node), self.pool.node(node).next),
            Cursor::BeforeStart => (None, head),
            Cursor::AfterEnd => (tail, None),
        };
        self.place(prev, next, item)
    }

    /// Inserts `item` directly before the current item and makes it current.
    ///
    /// Before the start, or in an empty list, the item becomes the new head;
    /// after the end it becomes the new tail.
    ///
    /// Fails with [`ListError::Exhausted`] if the pool has no free node. The
    /// list is then left exactly as it was, and `item` is dropped.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::ListPool;
    ///
    /// let mut pool = ListPool::new();
    /// let handle = pool.create().unwrap();
    /// let mut list = pool.list_mut(&handle).unwrap();
    ///
    /// list.insert(3).unwrap(); // [3]
    /// list.insert(1).unwrap(); // [1, 3]
    /// list.next();
    /// list.insert(2).unwrap(); // [1, 2, 3]
    /// assert_eq!(list.curr(), Some(&2));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn insert(&mut self, item: T) -> Result<(), ListError> {
        let Header {
            head, tail, cursor, ..
        } = *self.header();
        let (prev, next) = match cursor {
            Cursor::OnNode(node) => (self.pool.node(node).prev, Some(node)),
            Cursor::BeforeStart => (None, head),
            Cursor::AfterEnd => (tail, None),
        };
        self.place(prev, next, item)
    }

    /// Adds `item` after the tail and makes it current.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn append(&mut self, item: T) -> Result<(), ListError> {
        let tail = self.header().tail;
        self.place(tail, None, item)
    }

    /// Adds `item` before the head and makes it current.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn prepend(&mut self, item: T) -> Result<(), ListError> {
        let head = self.header().head;
        self.place(None, head, item)
    }

    /// Removes the current item and returns it, or returns `None` if the
    /// cursor is not on an item.
    ///
    /// The cursor moves onto the removed item's successor. Removing the tail
    /// leaves it after the end, and removing the last remaining item leaves
    /// it before the start.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::{ListPool, Position};
    ///
    /// let mut pool = ListPool::new();
    /// let handle = pool.create().unwrap();
    /// let mut list = pool.list_mut(&handle).unwrap();
    /// for i in 0..4 {
    ///     list.append(i).unwrap();
    /// }
    ///
    /// list.first();
    /// list.next();
    /// assert_eq!(list.remove(), Some(1)); // becomes [0, 2, 3]
    /// assert_eq!(list.curr(), Some(&2));
    ///
    /// list.last();
    /// assert_eq!(list.remove(), Some(3)); // becomes [0, 2]
    /// assert_eq!(list.position(), Position::AfterEnd);
    /// assert_eq!(list.remove(), None);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        let node = match self.header().cursor {
            Cursor::OnNode(node) => node,
            Cursor::BeforeStart | Cursor::AfterEnd => return None,
        };
        let next = self.pool.node(node).next;
        let item = self.pool.detach_node(self.list, node);
        let cursor = match next {
            Some(next) => Cursor::OnNode(next),
            None if self.is_empty() => Cursor::BeforeStart,
            None => Cursor::AfterEnd,
        };
        self.set_cursor(cursor);
        Some(item)
    }

    /// Removes the tail item and returns it, or returns `None` if the list
    /// is empty.
    ///
    /// The cursor moves onto the new tail, or before the start if the list
    /// is now empty.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::{ListPool, Position};
    ///
    /// let mut pool = ListPool::new();
    /// let handle = pool.create().unwrap();
    /// let mut list = pool.list_mut(&handle).unwrap();
    /// list.append("x").unwrap();
    /// list.append("y").unwrap();
    /// list.first();
    ///
    /// assert_eq!(list.trim(), Some("y"));
    /// assert_eq!(list.curr(), Some(&"x"));
    /// assert_eq!(list.trim(), Some("x"));
    /// assert_eq!(list.position(), Position::BeforeStart);
    /// assert_eq!(list.trim(), None);
    /// ```
    pub fn trim(&mut self) -> Option<T> {
        let tail = self.header().tail?;
        let item = self.pool.detach_node(self.list, tail);
        let cursor = match self.header().tail {
            Some(tail) => Cursor::OnNode(tail),
            None => Cursor::BeforeStart,
        };
        self.set_cursor(cursor);
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use crate::list::tests::assert_well_formed;
    use crate::{ListError, ListHandle, ListPool, PoolConfig, PoolKind, Position};

    fn setup<T>(max_nodes: usize) -> (ListPool<T>, ListHandle) {
        let mut pool = ListPool::with_config(PoolConfig::new(max_nodes, 4)).unwrap();
        let handle = pool.create().unwrap();
        (pool, handle)
    }

    fn items<T: Copy>(pool: &ListPool<T>, handle: &ListHandle) -> Vec<T> {
        pool.list(handle).unwrap().iter().copied().collect()
    }

    #[test]
    fn view_new_list() {
        let (mut pool, handle) = setup::<i32>(4);
        let mut list = pool.list_mut(&handle).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.count(), 0);
        assert_eq!(list.position(), Position::BeforeStart);
        assert_eq!(list.curr(), None);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert_eq!(list.next(), None);
        assert_eq!(list.prev(), None);
        assert_eq!(list.remove(), None);
        assert_eq!(list.trim(), None);
        assert_eq!(list.position(), Position::BeforeStart);
    }

    #[test]
    fn view_traversal() {
        let (mut pool, handle) = setup(8);
        let mut list = pool.list_mut(&handle).unwrap();
        for c in "abc".chars() {
            list.append(c).unwrap();
        }
        assert_eq!(list.count(), 3);
        assert_eq!(list.first(), Some(&'a'));
        assert_eq!(list.next(), Some(&'b'));
        assert_eq!(list.next(), Some(&'c'));
        assert_eq!(list.next(), None);
        assert_eq!(list.position(), Position::AfterEnd);
        assert_eq!(list.curr(), None);
        assert_eq!(list.prev(), Some(&'c'));
        assert_eq!(list.prev(), Some(&'b'));
        assert_eq!(list.prev(), Some(&'a'));
        assert_eq!(list.prev(), None);
        assert_eq!(list.position(), Position::BeforeStart);
        assert_eq!(list.prev(), None);
        assert_eq!(list.next(), Some(&'a'));
        assert_eq!(list.last(), Some(&'c'));
    }

    #[test]
    fn view_add_places_after_cursor() {
        let (mut pool, handle) = setup(8);
        let mut list = pool.list_mut(&handle).unwrap();
        list.add(2).unwrap();
        assert_eq!(list.position(), Position::OnItem);
        list.add(4).unwrap();
        list.first();
        list.add(3).unwrap();
        assert_eq!(list.curr(), Some(&3));

        // before the start: new head
        list.first();
        list.prev();
        list.add(1).unwrap();
        assert_eq!(list.curr(), Some(&1));

        // after the end: new tail
        list.last();
        list.next();
        list.add(5).unwrap();
        assert_eq!(list.curr(), Some(&5));
        assert_eq!(list.next(), None);

        assert_eq!(items(&pool, &handle), vec![1, 2, 3, 4, 5]);
        assert_well_formed(&pool, &handle);
    }

    #[test]
    fn view_insert_places_before_cursor() {
        let (mut pool, handle) = setup(8);
        let mut list = pool.list_mut(&handle).unwrap();
        list.insert(4).unwrap();
        list.insert(2).unwrap();
        assert_eq!(list.curr(), Some(&2));
        list.next();
        list.insert(3).unwrap();
        assert_eq!(list.curr(), Some(&3));

        list.first();
        list.prev();
        list.insert(1).unwrap();
        assert_eq!(list.curr(), Some(&1));
        assert_eq!(list.prev(), None);

        list.last();
        list.next();
        list.insert(5).unwrap();
        assert_eq!(list.curr(), Some(&5));

        assert_eq!(items(&pool, &handle), vec![1, 2, 3, 4, 5]);
        assert_well_formed(&pool, &handle);
    }

    #[test]
    fn view_append_and_prepend() {
        let (mut pool, handle) = setup(8);
        let mut list = pool.list_mut(&handle).unwrap();
        list.append(2).unwrap();
        list.prepend(1).unwrap();
        assert_eq!(list.curr(), Some(&1));
        list.append(3).unwrap();
        assert_eq!(list.curr(), Some(&3));
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(items(&pool, &handle), vec![1, 2, 3]);
        assert_well_formed(&pool, &handle);
    }

    #[test]
    fn view_remove_moves_to_successor() {
        let (mut pool, handle) = setup(8);
        let mut list = pool.list_mut(&handle).unwrap();
        for i in 0..3 {
            list.append(i).unwrap();
        }
        list.first();
        assert_eq!(list.remove(), Some(0));
        assert_eq!(list.curr(), Some(&1));
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.remove(), Some(1));
        assert_eq!(list.remove(), Some(2));
        assert!(list.is_empty());
        assert_eq!(list.position(), Position::BeforeStart);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_well_formed(&pool, &handle);
        assert_eq!(pool.nodes_in_use(), 0);
    }

    #[test]
    fn view_remove_tail_goes_after_end() {
        let (mut pool, handle) = setup(8);
        let mut list = pool.list_mut(&handle).unwrap();
        list.append(0).unwrap();
        list.append(1).unwrap();
        assert_eq!(list.remove(), Some(1));
        assert_eq!(list.position(), Position::AfterEnd);
        assert_eq!(list.back(), Some(&0));
        assert_eq!(list.remove(), None);
        assert_eq!(list.prev(), Some(&0));
        assert_well_formed(&pool, &handle);
    }

    #[test]
    fn view_remove_beyond_is_noop() {
        let (mut pool, handle) = setup(8);
        let mut list = pool.list_mut(&handle).unwrap();
        list.append(0).unwrap();
        list.prev();
        assert_eq!(list.position(), Position::BeforeStart);
        assert_eq!(list.remove(), None);
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn view_trim_single_item() {
        let (mut pool, handle) = setup(8);
        let mut list = pool.list_mut(&handle).unwrap();
        list.append("only").unwrap();
        assert_eq!(list.trim(), Some("only"));
        assert!(list.is_empty());
        assert_eq!(list.position(), Position::BeforeStart);
        assert_well_formed(&pool, &handle);
    }

    #[test]
    fn view_trim_moves_to_new_tail() {
        let (mut pool, handle) = setup(8);
        let mut list = pool.list_mut(&handle).unwrap();
        for i in 0..3 {
            list.append(i).unwrap();
        }
        list.first();
        assert_eq!(list.trim(), Some(2));
        assert_eq!(list.curr(), Some(&1));
        list.next();
        assert_eq!(list.position(), Position::AfterEnd);
        assert_eq!(list.trim(), Some(1));
        assert_eq!(list.curr(), Some(&0));
        assert_well_formed(&pool, &handle);
    }

    #[test]
    fn view_exhaustion_leaves_list_unchanged() {
        let (mut pool, handle) = setup(2);
        let mut list = pool.list_mut(&handle).unwrap();
        list.append(1).unwrap();
        list.append(2).unwrap();
        list.first();
        let exhausted = Err(ListError::Exhausted {
            kind: PoolKind::Node,
            capacity: 2,
        });
        assert_eq!(list.add(3), exhausted);
        assert_eq!(list.insert(3), exhausted);
        assert_eq!(list.append(3), exhausted);
        assert_eq!(list.prepend(3), exhausted);
        assert_eq!(list.count(), 2);
        assert_eq!(list.curr(), Some(&1));
        assert_eq!(items(&pool, &handle), vec![1, 2]);
        assert_well_formed(&pool, &handle);
    }

    #[test]
    fn view_node_budget_is_shared() {
        let mut pool = ListPool::with_config(PoolConfig::new(3, 2)).unwrap();
        let a = pool.create().unwrap();
        let b = pool.create().unwrap();
        let mut list = pool.list_mut(&a).unwrap();
        list.append(1).unwrap();
        list.append(2).unwrap();
        let mut list = pool.list_mut(&b).unwrap();
        list.append(3).unwrap();
        assert!(list.append(4).is_err());

        assert_eq!(pool.list_mut(&a).unwrap().trim(), Some(2));
        assert!(pool.list_mut(&b).unwrap().append(4).is_ok());
        assert_eq!(items(&pool, &b), vec![3, 4]);
        assert_eq!(pool.free_nodes(), 0);
    }

    #[test]
    fn view_cursor_persists_between_views() {
        let (mut pool, handle) = setup(8);
        let mut list = pool.list_mut(&handle).unwrap();
        list.append(1).unwrap();
        list.append(2).unwrap();
        list.first();
        assert_eq!(pool.list(&handle).unwrap().curr(), Some(&1));
        let mut list = pool.list_mut(&handle).unwrap();
        assert_eq!(list.next(), Some(&2));
        assert_eq!(list.as_view().position(), Position::OnItem);
    }

    #[test]
    fn view_contains_and_debug() {
        let (mut pool, handle) = setup(8);
        let mut list = pool.list_mut(&handle).unwrap();
        list.append(1).unwrap();
        list.append(2).unwrap();
        assert!(list.contains(&2));
        assert!(!list.contains(&3));
        assert_eq!(
            format!("{:?}", list),
            "ListViewMut { items: Iter(1, 2), position: OnItem }"
        );
    }
}
