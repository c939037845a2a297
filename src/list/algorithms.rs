use crate::list::view::{ListView, ListViewMut};
use crate::list::{Cursor, Header};
use std::hash::{Hash, Hasher};

/// Two views are equal when their lists hold equal items in the same order.
/// Cursors are not compared, and the lists may live in different pools.
impl<'a, T: PartialEq + 'a> PartialEq for ListView<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<'a, T: Eq + 'a> Eq for ListView<'a, T> {}

impl<'a, T: Hash + 'a> Hash for ListView<'a, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<'a, T: 'a> ListViewMut<'a, T> {
    /// Scans forward from the cursor, the current item included, for the
    /// first item on which `predicate(item, arg)` holds. On a match the
    /// cursor lands on that item and it is returned.
    ///
    /// If nothing matches, the cursor is left after the end and `None` is
    /// returned. A scan from before the start begins at the head; a scan
    /// from after the end finds nothing.
    ///
    /// The predicate alone decides what matches; items are never
    /// interpreted by the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, where *n* is the
    /// number of items from the cursor to the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::{ListPool, Position};
    ///
    /// let mut pool = ListPool::new();
    /// let handle = pool.create().unwrap();
    /// let mut list = pool.list_mut(&handle).unwrap();
    /// for word in ["apple", "banana", "cherry", "blueberry"] {
    ///     list.append(word).unwrap();
    /// }
    ///
    /// let starts_with = |item: &&str, prefix: &str| item.starts_with(prefix);
    ///
    /// list.first();
    /// assert_eq!(list.search(starts_with, "b"), Some(&"banana"));
    /// // The current item counts, so searching again finds it again.
    /// assert_eq!(list.search(starts_with, "b"), Some(&"banana"));
    ///
    /// list.next();
    /// assert_eq!(list.search(starts_with, "b"), Some(&"blueberry"));
    ///
    /// assert_eq!(list.search(starts_with, "z"), None);
    /// assert_eq!(list.position(), Position::AfterEnd);
    /// ```
    pub fn search<A, P>(&mut self, mut predicate: P, arg: &A) -> Option<&T>
    where
        A: ?Sized,
        P: FnMut(&T, &A) -> bool,
    {
        let Header { head, cursor, .. } = *self.header();
        let mut walk = match cursor {
            Cursor::BeforeStart => head,
            Cursor::OnNode(node) => Some(node),
            Cursor::AfterEnd => None,
        };
        while let Some(node) = walk {
            let current = self.pool.node(node);
            walk = current.next;
            if predicate(&current.item, arg) {
                return self.land_on(node);
            }
        }
        self.set_cursor(Cursor::AfterEnd);
        None
    }
}
