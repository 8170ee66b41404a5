//! Unbalanced binary search tree.
//!
//! This module contains [`BinarySearchTree`], the ordered record store of this crate, along
//! with its traversal entry points.

use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::mem;

use tracing::{debug, instrument, trace};

use crate::error::{TreeError, TreeResult};
use crate::iter::{Traversal, TraversalOrder};
use crate::node::{Link, Node, Side};
use crate::record::Keyed;
use crate::stats::{TreeStats, TreeStatsTrait};

/// An unbalanced binary search tree keyed by the values it stores.
///
/// Every key in a node's left subtree compares less than the node's key, and every key in its
/// right subtree compares greater than or equal to it. Nothing is rebalanced, so the shape (and
/// the cost of every operation) depends only on insertion order: sorted input yields a chain.
///
/// ## Duplicate keys
///
/// Inserting a key that is already present never fails. The new value is placed in the right
/// subtree of the existing one, so equal keys accumulate to the right. [`get`](Self::get) and
/// [`remove`](Self::remove) act on the first match met on the way down from the root.
///
/// ## Examples
///
/// ```rust
/// use rbst::{BinarySearchTree, Keyed, Record};
///
/// let mut tree = BinarySearchTree::new();
/// for key in ["5", "3", "8", "1", "4", "7", "9"] {
///     tree.insert(Record::keyed(key));
/// }
///
/// assert!(tree.get("4").is_some());
/// assert!(tree.get("6").is_none());
///
/// tree.remove("3");
/// let keys: Vec<&str> = tree.iter().map(|r| r.key()).collect();
/// assert_eq!(keys, ["1", "4", "5", "7", "8", "9"]);
/// ```
///
/// Visiting records in a chosen order:
///
/// ```rust
/// use rbst::{BinarySearchTree, Keyed, Record, TraversalOrder};
///
/// let tree: BinarySearchTree<Record> =
///     ["2", "1", "3"].into_iter().map(Record::keyed).collect();
///
/// let mut seen = Vec::new();
/// tree.traverse(TraversalOrder::PreOrder, |r| seen.push(r.key().to_string()));
/// assert_eq!(seen, ["2", "1", "3"]);
/// ```
pub struct BinarySearchTree<V>
where
    V: Keyed,
{
    root: Link<V>,
    len: usize,
}

impl<V: Keyed> Default for BinarySearchTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> BinarySearchTree<V>
where
    V: Keyed,
{
    /// Create a new, empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of values in the tree, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the tree is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The value held by the root node.
    pub fn root(&self) -> Option<&V> {
        self.root.as_deref().map(|node| &node.value)
    }

    /// Insert a value as a new leaf.
    ///
    /// Keys less than a node's key descend left, all others descend right. Insertion always
    /// succeeds and never moves or mutates an existing node.
    #[instrument(level = "trace", skip_all, fields(len = self.len))]
    pub fn insert(&mut self, value: V) {
        let mut slot = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = slot {
            slot = match value.key().cmp(node.value.key()) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }
        *slot = Some(Node::new_leaf(value));
        self.len += 1;
        trace!(depth, "inserted leaf");
    }

    /// Look up a value by exact key.
    ///
    /// Returns `None` when no value carries `key`.
    pub fn get(&self, key: &V::Key) -> Option<&V> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(node.value.key()) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        trace!("key not found");
        None
    }

    /// Check if a value with `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &V::Key) -> bool {
        self.get(key).is_some()
    }

    /// Look up a value by exact key, reporting a miss as [`TreeError::KeyNotFound`].
    pub fn fetch(&self, key: &V::Key) -> TreeResult<&V>
    where
        V::Key: Display,
    {
        self.get(key)
            .ok_or_else(|| TreeError::KeyNotFound(key.to_string()))
    }

    /// Remove the value with `key`, returning it.
    ///
    /// Removing a key that is not present leaves the tree untouched and returns `None`. A node
    /// with two children takes over the value of its in-order successor, whose own node is
    /// unlinked from the right subtree instead.
    #[instrument(level = "trace", skip_all, fields(len = self.len))]
    pub fn remove(&mut self, key: &V::Key) -> Option<V> {
        let Some(slot) = Self::find_slot(&mut self.root, key) else {
            trace!("nothing to remove");
            return None;
        };
        let removed = Self::detach(slot)?;
        self.len -= 1;
        Some(removed)
    }

    /// Visit every value once in `order`, handing each to `sink`.
    pub fn traverse<F>(&self, order: TraversalOrder, mut sink: F)
    where
        F: FnMut(&V),
    {
        for value in self.traversal(order) {
            sink(value);
        }
    }

    /// Visit values in ascending key order.
    pub fn in_order<F: FnMut(&V)>(&self, sink: F) {
        self.traverse(TraversalOrder::InOrder, sink)
    }

    /// Visit each node before its left subtree, then its right subtree.
    pub fn pre_order<F: FnMut(&V)>(&self, sink: F) {
        self.traverse(TraversalOrder::PreOrder, sink)
    }

    /// Visit both subtrees of each node before the node itself.
    pub fn post_order<F: FnMut(&V)>(&self, sink: F) {
        self.traverse(TraversalOrder::PostOrder, sink)
    }

    /// Create a lazy iterator over all values in `order`.
    pub fn traversal(&self, order: TraversalOrder) -> Traversal<'_, V> {
        Traversal::new(self.root.as_deref(), order, self.len)
    }

    /// Create an iterator over all values in ascending key order.
    pub fn iter(&self) -> Traversal<'_, V> {
        self.traversal(TraversalOrder::InOrder)
    }

    /// The value with the smallest key.
    pub fn first(&self) -> Option<&V> {
        self.root
            .as_deref()
            .map(|node| &node.leftmost().value)
    }

    /// The value with the largest key. Among equal keys this is the last one inserted.
    pub fn last(&self) -> Option<&V> {
        self.root
            .as_deref()
            .map(|node| &node.extreme(Side::Right).value)
    }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        let mut level: Vec<&Node<V>> = self.root.as_deref().into_iter().collect();
        let mut height = 0;
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        debug!(len = self.len, "clearing tree");
        Self::release(self.root.take());
        self.len = 0;
    }
}

impl<V> TreeStatsTrait for BinarySearchTree<V>
where
    V: Keyed,
{
    fn get_tree_stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();

        let Some(root) = self.root.as_deref() else {
            return stats;
        };

        let mut stack = vec![(root, 1usize)];
        while let Some((node, height)) = stack.pop() {
            stats.num_nodes += 1;
            stats.max_height = stats.max_height.max(height);
            match node.num_children() {
                0 => stats.num_leaves += 1,
                1 => stats.num_single_child += 1,
                _ => stats.num_two_children += 1,
            }
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                stack.push((child, height + 1));
            }
        }

        let min_height = (usize::BITS - stats.num_nodes.leading_zeros()) as usize;
        stats.balance = min_height as f64 / stats.max_height as f64;

        stats
    }
}

// Internals implementation
impl<V> BinarySearchTree<V>
where
    V: Keyed,
{
    /// Walk down from `slot` to the link that holds the first node matching `key`.
    fn find_slot<'a>(mut slot: &'a mut Link<V>, key: &V::Key) -> Option<&'a mut Link<V>> {
        loop {
            let side = match key.cmp(slot.as_deref()?.value.key()) {
                Ordering::Equal => return Some(slot),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match slot {
                Some(node) => slot = node.child_slot_mut(side),
                None => return None,
            }
        }
    }

    /// Unlink the node held by `slot`, returning its value and leaving the replacement subtree
    /// in `slot`.
    fn detach(slot: &mut Link<V>) -> Option<V> {
        let node = slot.as_mut()?;

        // Two children: the in-order successor's value replaces this node's value.
        if node.left.is_some()
            && let Some(successor) = Self::take_leftmost(&mut node.right)
        {
            debug!("promoted in-order successor");
            return Some(mem::replace(&mut node.value, successor));
        }

        // At most one child, which takes the node's place.
        let node = slot.take()?;
        let Node { value, left, right } = *node;
        *slot = left.or(right);
        Some(value)
    }

    /// Unlink the leftmost node under `slot`. It has no left child, so its right subtree (if
    /// any) takes its place.
    fn take_leftmost(mut slot: &mut Link<V>) -> Option<V> {
        while slot.as_ref().is_some_and(|node| node.left.is_some()) {
            match slot {
                Some(node) => slot = &mut node.left,
                None => return None,
            }
        }
        let node = slot.take()?;
        let Node { value, right, .. } = *node;
        *slot = right;
        Some(value)
    }

    /// Free a subtree without recursion.
    fn release(root: Link<V>) {
        let mut stack: Vec<Box<Node<V>>> = root.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<V: Keyed> Drop for BinarySearchTree<V> {
    fn drop(&mut self) {
        Self::release(self.root.take());
    }
}

impl<'a, V: Keyed> IntoIterator for &'a BinarySearchTree<V> {
    type Item = &'a V;
    type IntoIter = Traversal<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Keyed> FromIterator<V> for BinarySearchTree<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<V: Keyed> Extend<V> for BinarySearchTree<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<V> fmt::Debug for BinarySearchTree<V>
where
    V: Keyed + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
