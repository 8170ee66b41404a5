pub(crate) type Link<V> = Option<Box<Node<V>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A tree node. Each node exclusively owns its value and its children; there are no parent
/// links.
pub(crate) struct Node<V> {
    pub(crate) value: V,
    pub(crate) left: Link<V>,
    pub(crate) right: Link<V>,
}

impl<V> Node<V> {
    #[inline]
    pub(crate) fn new_leaf(value: V) -> Box<Node<V>> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    pub fn num_children(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<&Node<V>> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    #[inline]
    pub(crate) fn child_slot_mut(&mut self, side: Side) -> &mut Link<V> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Follow `side` links until there are none left.
    pub(crate) fn extreme(&self, side: Side) -> &Node<V> {
        let mut cur = self;
        while let Some(next) = cur.child(side) {
            cur = next;
        }
        cur
    }

    /// The in-order minimum of this subtree.
    #[inline]
    pub(crate) fn leftmost(&self) -> &Node<V> {
        self.extreme(Side::Left)
    }
}
