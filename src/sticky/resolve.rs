use crate::layout::{ColumnTree, NodeId};
use crate::types::StickySide;

/// Effective sticky side of a node: its own side, else the nearest
/// ancestor's, else `None`.
pub fn resolve_sticky(tree: &ColumnTree, node: NodeId) -> Option<StickySide> {
    let mut current = Some(node);
    while let Some(id) = current {
        let header = tree.get(id)?;
        if let Some(side) = header.sticky {
            return Some(side);
        }
        current = header.parent;
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::layout::TableInstance;
    use crate::types::{ColumnDef, ColumnId};

    fn lookup(instance: &TableInstance, id: &str) -> NodeId {
        instance.find(&ColumnId::from(id)).unwrap()
    }

    #[test]
    fn test_own_side_wins() {
        let instance =
            TableInstance::new(&[ColumnDef::new("a").sticky(StickySide::Right)]).unwrap();
        let a = lookup(&instance, "a");
        assert_eq!(resolve_sticky(&instance.columns, a), Some(StickySide::Right));
    }

    #[test]
    fn test_inherits_from_ancestors() {
        let instance = TableInstance::new(&[ColumnDef::group(
            "outer",
            vec![ColumnDef::group("inner", vec![ColumnDef::new("leaf")])],
        )
        .sticky(StickySide::Left)])
        .unwrap();
        let leaf = lookup(&instance, "leaf");
        assert_eq!(resolve_sticky(&instance.columns, leaf), Some(StickySide::Left));
    }

    #[test]
    fn test_none_without_sticky_ancestor() {
        let instance = TableInstance::new(&[ColumnDef::group(
            "g",
            vec![ColumnDef::new("a"), ColumnDef::new("b")],
        )])
        .unwrap();
        let b = lookup(&instance, "b");
        assert_eq!(resolve_sticky(&instance.columns, b), None);
    }
}
