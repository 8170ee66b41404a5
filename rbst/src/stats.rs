//! Statistics and introspection for the record tree.
//!
//! An unbalanced tree's cost per operation is its height, and its height is decided entirely by
//! insertion order. These numbers make that visible:
//! - how far the tree is from the shortest shape its size allows
//! - how many nodes form chains (one child) versus branch (two children)

pub trait TreeStatsTrait {
    fn get_tree_stats(&self) -> TreeStats;
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeStats {
    pub num_nodes: usize,
    pub num_leaves: usize,
    pub num_single_child: usize,
    pub num_two_children: usize,
    pub max_height: usize,
    /// Shortest possible height for `num_nodes` divided by `max_height`. 1.0 for a packed (or
    /// empty) tree, tending towards 0 as the tree degenerates into a chain.
    pub balance: f64,
}

impl Default for TreeStats {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            num_leaves: 0,
            num_single_child: 0,
            num_two_children: 0,
            max_height: 0,
            balance: 1.0,
        }
    }
}
