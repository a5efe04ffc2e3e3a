//! Boundary classification: which header draws the divider between the
//! sticky area and the scrolling area.

use super::resolve::resolve_sticky;
use super::siblings::SiblingSet;
use crate::types::{ColumnId, StickySide};

impl SiblingSet<'_> {
    /// Position of the last sibling resolving to `left`
    pub fn last_left_sticky(&self) -> Option<usize> {
        self.nodes
            .iter()
            .rposition(|&node| resolve_sticky(self.tree, node) == Some(StickySide::Left))
    }

    /// Position of the first sibling resolving to `right`
    pub fn first_right_sticky(&self) -> Option<usize> {
        self.nodes
            .iter()
            .position(|&node| resolve_sticky(self.tree, node) == Some(StickySide::Right))
    }

    pub fn is_last_left_sticky(&self, id: &ColumnId) -> bool {
        matches!(
            (self.position(id), self.last_left_sticky()),
            (Some(index), Some(last)) if index == last
        )
    }

    pub fn is_first_right_sticky(&self, id: &ColumnId) -> bool {
        matches!(
            (self.position(id), self.first_right_sticky()),
            (Some(index), Some(first)) if index == first
        )
    }
}
