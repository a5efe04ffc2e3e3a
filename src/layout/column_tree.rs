//! Column tree built from a table definition.
//!
//! Nodes live in a single arena in pre-order, so the arena order is also the
//! left-to-right order of the flat header list. Parent links are arena
//! indices and never own anything.

use crate::config::DEFAULT_COLUMN_WIDTH;
use crate::error::{Result, StickyError};
use crate::types::{ColumnDef, ColumnId, StickySide};

/// Index of a node in a [`ColumnTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One column or column group with its resolved geometry
#[derive(Debug, Clone)]
pub struct HeaderNode {
    pub id: ColumnId,
    /// Display label
    pub header: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Sticky side declared on this node (not inherited)
    pub sticky: Option<StickySide>,
    /// Nesting level, 0 for top-level columns
    pub depth: usize,
    pub is_visible: bool,
    /// Width in pixels; for groups, the sum of visible children
    pub width: f64,
    /// X of the node's left edge from the start of the table
    pub total_left: f64,
}

impl HeaderNode {
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Header label, or the id when the label is empty
    pub fn label(&self) -> String {
        if self.header.is_empty() {
            self.id.to_string()
        } else {
            self.header.clone()
        }
    }
}

/// Arena of header nodes
#[derive(Debug, Clone, Default)]
pub struct ColumnTree {
    nodes: Vec<HeaderNode>,
    roots: Vec<NodeId>,
}

impl ColumnTree {
    /// Build the tree and resolve widths, visibility and left positions.
    ///
    /// # Errors
    /// Returns [`StickyError::MissingColumnId`] when a definition has neither
    /// an id nor a header label.
    pub fn build(defs: &[ColumnDef]) -> Result<Self> {
        let mut tree = Self::default();
        let mut counter = 0;
        for def in defs {
            let root = tree.insert(def, None, 0, true, &mut counter)?;
            tree.roots.push(root);
        }

        let mut x = 0.0;
        for root in tree.roots.clone() {
            tree.place(root, x);
            x += tree.visible_width(root);
        }

        tracing::debug!(nodes = tree.nodes.len(), width = x, "column tree built");
        Ok(tree)
    }

    fn insert(
        &mut self,
        def: &ColumnDef,
        parent: Option<NodeId>,
        depth: usize,
        parent_visible: bool,
        counter: &mut usize,
    ) -> Result<NodeId> {
        let index = *counter;
        *counter += 1;
        let id = def
            .resolved_id()
            .ok_or(StickyError::MissingColumnId { index })?;

        // a hidden group hides everything below it
        let is_visible = parent_visible && def.is_visible;
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(HeaderNode {
            id,
            header: def.header.clone(),
            parent,
            children: Vec::new(),
            sticky: def.sticky,
            depth,
            is_visible,
            width: def.width.unwrap_or(DEFAULT_COLUMN_WIDTH),
            total_left: 0.0,
        });

        if def.columns.is_empty() {
            return Ok(node_id);
        }

        let mut children = Vec::with_capacity(def.columns.len());
        for child in &def.columns {
            children.push(self.insert(child, Some(node_id), depth + 1, is_visible, counter)?);
        }

        let width = children
            .iter()
            .fold(0.0, |acc, &c| acc + self.visible_width(c));
        let any_visible = children
            .iter()
            .any(|&c| self.get(c).is_some_and(|n| n.is_visible));

        if let Some(node) = self.nodes.get_mut(node_id.0) {
            node.children = children;
            node.width = width;
            node.is_visible = node.is_visible && any_visible;
        }
        Ok(node_id)
    }

    fn place(&mut self, id: NodeId, left: f64) {
        let children = match self.nodes.get_mut(id.0) {
            Some(node) => {
                node.total_left = left;
                node.children.clone()
            }
            None => return,
        };

        let mut x = left;
        for child in children {
            self.place(child, x);
            x += self.visible_width(child);
        }
    }

    fn visible_width(&self, id: NodeId) -> f64 {
        match self.get(id) {
            Some(node) if node.is_visible => node.width,
            _ => 0.0,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&HeaderNode> {
        self.nodes.get(id.0)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Top-level columns, left to right
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Every node in pre-order with its id
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &HeaderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A column tree plus the flat header list the host renders from
#[derive(Debug, Clone, Default)]
pub struct TableInstance {
    pub columns: ColumnTree,
    pub flat_headers: Vec<NodeId>,
}

impl TableInstance {
    /// # Errors
    /// See [`ColumnTree::build`].
    pub fn new(defs: &[ColumnDef]) -> Result<Self> {
        let columns = ColumnTree::build(defs)?;
        let flat_headers = columns.iter().map(|(id, _)| id).collect();
        Ok(Self {
            columns,
            flat_headers,
        })
    }

    pub fn node(&self, id: NodeId) -> Option<&HeaderNode> {
        self.columns.get(id)
    }

    /// First header carrying `id`, in flat header order
    pub fn find(&self, id: &ColumnId) -> Option<NodeId> {
        self.flat_headers
            .iter()
            .copied()
            .find(|&h| self.columns.get(h).is_some_and(|n| n.id == *id))
    }

    /// Flat headers at `depth`, left to right
    pub fn headers_at_depth(&self, depth: usize) -> Vec<NodeId> {
        self.flat_headers
            .iter()
            .copied()
            .filter(|&h| self.columns.get(h).is_some_and(|n| n.depth == depth))
            .collect()
    }
}

/// A body cell; its sticky props are those of its column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub column: NodeId,
    pub row: usize,
}
