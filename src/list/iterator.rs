use crate::list::{Header, Node};
use crate::pool::{Slab, SlotIndex};
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the items of one list, head to tail.
///
/// It uses a pair of nodes `front..=back` plus the number of items left to
/// represent the remaining range. It never touches the list's cursor.
///
/// Though the `Iter` only holds the pool's node store, it *borrows*
/// (immutably) from the pool, so the list cannot be edited meanwhile.
///
/// # Examples
///
/// ```compile_fail
/// use pooled_list::ListPool;
///
/// let mut pool = ListPool::new();
/// let handle = pool.create().unwrap();
/// pool.list_mut(&handle).unwrap().append(1).unwrap();
///
/// let view = pool.list(&handle).unwrap();
/// let mut iter = view.iter();
///
/// // Won't compile, because the pool is already borrowed immutably.
/// pool.list_mut(&handle).unwrap().append(2).unwrap();
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    nodes: &'a Slab<Node<T>>,
    front: Option<SlotIndex>,
    back: Option<SlotIndex>,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Slab<Node<T>>, header: &Header) -> Self {
        Self {
            nodes,
            front: header.head,
            back: header.tail,
            len: header.len,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        for item in self.clone() {
            f.field(item);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*front` and shrink the range to `(front.next)..=back`, or
    /// return `None` if the range is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let nodes: &'a Slab<Node<T>> = self.nodes;
        let node = &nodes[self.front?];
        self.front = node.next;
        self.len -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Shrink the range to `front..=(back.prev)` and return `*back`, or
    /// return `None` if the range is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let nodes: &'a Slab<Node<T>> = self.nodes;
        let node = &nodes[self.back?];
        self.back = node.prev;
        self.len -= 1;
        Some(&node.item)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}
