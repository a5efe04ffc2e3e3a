//! Offset accumulation.
//!
//! A sibling counts toward an offset when it is visible and its effective
//! side, inherited from its group when unset, matches. Leaves of a sticky
//! group therefore stack next to each other instead of all pinning at 0.

use super::resolve::resolve_sticky;
use super::siblings::SiblingSet;
use crate::layout::{ColumnTree, NodeId};
use crate::types::{ColumnId, StickySide};

fn contributes(tree: &ColumnTree, node: NodeId, side: StickySide) -> bool {
    tree.get(node).is_some_and(|header| header.is_visible)
        && resolve_sticky(tree, node) == Some(side)
}

impl SiblingSet<'_> {
    /// Width of the visible left-sticky siblings before `id`
    pub fn margin_left(&self, id: &ColumnId) -> f64 {
        let Some(index) = self.position(id) else {
            return 0.0;
        };
        self.nodes
            .iter()
            .take(index)
            .filter(|&&node| contributes(self.tree, node, StickySide::Left))
            .filter_map(|&node| self.tree.get(node))
            .fold(0.0, |acc, header| acc + header.width)
    }

    /// Width of the visible right-sticky siblings after `id`
    pub fn margin_right(&self, id: &ColumnId) -> f64 {
        let Some(index) = self.position(id) else {
            return 0.0;
        };
        self.nodes
            .iter()
            .skip(index + 1)
            .filter(|&&node| contributes(self.tree, node, StickySide::Right))
            .filter_map(|&node| self.tree.get(node))
            .fold(0.0, |acc, header| acc + header.width)
    }

    pub fn margin(&self, id: &ColumnId, side: StickySide) -> f64 {
        match side {
            StickySide::Left => self.margin_left(id),
            StickySide::Right => self.margin_right(id),
        }
    }
}
