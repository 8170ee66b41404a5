use std::iter::FusedIterator;

use crate::node::Node;

/// The order in which a traversal visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree. Yields keys in non-decreasing order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

enum Frame<'a, V> {
    Visit(&'a Node<V>),
    Emit(&'a Node<V>),
}

/// A depth-first traversal over every value in a tree, in the requested [`TraversalOrder`].
///
/// Pending work is kept on an explicit stack, so traversing a degenerate (chain shaped) tree
/// does not grow the call stack.
pub struct Traversal<'a, V> {
    order: TraversalOrder,
    stack: Vec<Frame<'a, V>>,
    remaining: usize,
}

impl<'a, V> Traversal<'a, V> {
    pub(crate) fn new(root: Option<&'a Node<V>>, order: TraversalOrder, len: usize) -> Self {
        let stack = match root {
            Some(root) => vec![Frame::Visit(root)],
            None => Vec::new(),
        };
        Self {
            order,
            stack,
            remaining: len,
        }
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    // Frames are pushed in reverse of the order they must be handled.
    fn expand(&mut self, node: &'a Node<V>) {
        let left = node.left.as_deref().map(Frame::Visit);
        let right = node.right.as_deref().map(Frame::Visit);
        match self.order {
            TraversalOrder::InOrder => {
                self.stack.extend(right);
                self.stack.push(Frame::Emit(node));
                self.stack.extend(left);
            }
            TraversalOrder::PreOrder => {
                self.stack.extend(right);
                self.stack.extend(left);
                self.stack.push(Frame::Emit(node));
            }
            TraversalOrder::PostOrder => {
                self.stack.push(Frame::Emit(node));
                self.stack.extend(right);
                self.stack.extend(left);
            }
        }
    }
}

impl<'a, V> Iterator for Traversal<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Frame::Emit(node) => {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(&node.value);
                }
                Frame::Visit(node) => self.expand(node),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Traversal<'_, V> {}

impl<V> FusedIterator for Traversal<'_, V> {}
