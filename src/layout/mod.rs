//! Column layout: the column tree, its flat header list and resolved geometry.
//!
//! This module handles:
//! - Building the column/group hierarchy with navigational parent links
//! - Resolving leaf and group widths, visibility and left positions
//! - Deriving the same-depth header levels the sticky computation walks

mod column_tree;

pub use column_tree::{Cell, ColumnTree, HeaderNode, NodeId, TableInstance};
