//! Column tree checks for sticky/grouping conflicts.

use crate::error::{Result, StickyError};
use crate::layout::ColumnTree;

/// Check the whole tree for configurations that break sticky rendering.
///
/// Two rules, checked in this order:
/// 1. once any group exists, no top-level leaf column may be sticky;
/// 2. a group without its own sticky side may not have a sticky child.
///
/// # Errors
/// [`StickyError::UngroupedSticky`] listing every offending column, or
/// [`StickyError::PartialGroupSticky`] naming the first offending group.
pub fn validate(tree: &ColumnTree) -> Result<()> {
    let has_groups = tree.iter().any(|(_, node)| node.parent.is_some());

    if has_groups {
        let loose: Vec<String> = tree
            .iter()
            .filter(|(_, node)| node.parent.is_none() && !node.is_group())
            .filter(|(_, node)| node.sticky.is_some())
            .map(|(_, node)| node.label())
            .collect();

        if !loose.is_empty() {
            tracing::warn!(columns = ?loose, "sticky columns outside groups");
            return Err(StickyError::UngroupedSticky { columns: loose });
        }
    }

    for (_, group) in tree
        .iter()
        .filter(|(_, node)| node.is_group() && node.sticky.is_none())
    {
        let sticky_child = group
            .children
            .iter()
            .filter_map(|&child| tree.get(child))
            .find(|child| child.sticky.is_some());

        if let Some(child) = sticky_child {
            tracing::warn!(group = %group.id, child = %child.id, "sticky child in non-sticky group");
            return Err(StickyError::PartialGroupSticky {
                group: group.label(),
                child: child.label(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::types::{ColumnDef, StickySide};

    fn tree(defs: &[ColumnDef]) -> ColumnTree {
        ColumnTree::build(defs).unwrap()
    }

    #[test]
    fn test_flat_sticky_columns_are_fine() {
        let defs = [
            ColumnDef::new("a").sticky(StickySide::Left),
            ColumnDef::new("b"),
            ColumnDef::new("c").sticky(StickySide::Right),
        ];
        assert!(validate(&tree(&defs)).is_ok());
    }

    #[test]
    fn test_sticky_group_is_fine() {
        let defs = [
            ColumnDef::group("g", vec![ColumnDef::new("a"), ColumnDef::new("b")])
                .sticky(StickySide::Left),
            ColumnDef::new("c"),
        ];
        assert!(validate(&tree(&defs)).is_ok());
    }

    #[test]
    fn test_loose_sticky_columns_next_to_groups() {
        let defs = [
            ColumnDef::new("a").header("Name").sticky(StickySide::Left),
            ColumnDef::group("g", vec![ColumnDef::new("b")]),
            ColumnDef::new("c").header("Total").sticky(StickySide::Right),
        ];
        match validate(&tree(&defs)) {
            Err(StickyError::UngroupedSticky { columns }) => {
                assert_eq!(columns, ["Name", "Total"]);
            }
            other => panic!("expected UngroupedSticky, got {other:?}"),
        }
    }

    #[test]
    fn test_sticky_child_in_plain_group() {
        let defs = [ColumnDef::group(
            "g",
            vec![
                ColumnDef::new("a"),
                ColumnDef::new("b").sticky(StickySide::Left),
                ColumnDef::new("c").sticky(StickySide::Right),
            ],
        )
        .header("Group")];
        match validate(&tree(&defs)) {
            Err(StickyError::PartialGroupSticky { group, child }) => {
                assert_eq!(group, "Group");
                assert_eq!(child, "b");
            }
            other => panic!("expected PartialGroupSticky, got {other:?}"),
        }
    }

    #[test]
    fn test_ungrouped_rule_is_checked_first() {
        let defs = [
            ColumnDef::new("a").sticky(StickySide::Left),
            ColumnDef::group("g", vec![ColumnDef::new("b").sticky(StickySide::Left)]),
        ];
        assert!(matches!(
            validate(&tree(&defs)),
            Err(StickyError::UngroupedSticky { .. })
        ));
    }

    #[test]
    fn test_nested_plain_subgroup_with_sticky_leaf() {
        let defs = [ColumnDef::group(
            "outer",
            vec![ColumnDef::group(
                "inner",
                vec![ColumnDef::new("leaf").sticky(StickySide::Right)],
            )],
        )
        .sticky(StickySide::Right)];
        match validate(&tree(&defs)) {
            Err(StickyError::PartialGroupSticky { group, child }) => {
                assert_eq!(group, "inner");
                assert_eq!(child, "leaf");
            }
            other => panic!("expected PartialGroupSticky, got {other:?}"),
        }
    }
}
