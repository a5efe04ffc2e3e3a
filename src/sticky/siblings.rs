//! Same-depth header levels.
//!
//! Boundary classification and offset accumulation both work on the headers
//! sharing one nesting depth, in the order they are rendered.

use crate::layout::{ColumnTree, HeaderNode, NodeId, TableInstance};
use crate::types::ColumnId;

/// Headers at one depth, left to right
#[derive(Debug, Clone)]
pub struct SiblingSet<'a> {
    pub(crate) tree: &'a ColumnTree,
    pub(crate) nodes: Vec<NodeId>,
}

impl<'a> SiblingSet<'a> {
    pub fn new(tree: &'a ColumnTree, nodes: Vec<NodeId>) -> Self {
        Self { tree, nodes }
    }

    /// The flat headers sharing `node`'s depth (empty for an unknown node)
    pub fn same_depth(instance: &'a TableInstance, node: NodeId) -> Self {
        let nodes = instance
            .node(node)
            .map(|header| instance.headers_at_depth(header.depth))
            .unwrap_or_default();
        Self::new(&instance.columns, nodes)
    }

    /// Position of the first sibling carrying `id`
    pub fn position(&self, id: &ColumnId) -> Option<usize> {
        self.headers().position(|header| header.id == *id)
    }

    pub(crate) fn headers(&self) -> impl Iterator<Item = &'a HeaderNode> + '_ {
        self.nodes.iter().filter_map(|&node| self.tree.get(node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
