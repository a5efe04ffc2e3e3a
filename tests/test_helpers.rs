#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
#![allow(dead_code)]

use sticky_columns::layout::{NodeId, TableInstance};
use sticky_columns::sticky::sticky_props;
use sticky_columns::{ColumnDef, ColumnId, StickyConfig, StickyProps, StickySide};

/// Leaf column with a width
pub fn col(id: &str, width: f64) -> ColumnDef {
    ColumnDef::new(id).width(width)
}

pub fn left(id: &str, width: f64) -> ColumnDef {
    col(id, width).sticky(StickySide::Left)
}

pub fn right(id: &str, width: f64) -> ColumnDef {
    col(id, width).sticky(StickySide::Right)
}

pub fn build(defs: &[ColumnDef]) -> TableInstance {
    TableInstance::new(defs).expect("column tree should build")
}

pub fn node(instance: &TableInstance, id: &str) -> NodeId {
    instance
        .find(&ColumnId::from(id))
        .unwrap_or_else(|| panic!("no column '{id}'"))
}

/// Props for column `id` with the default config
pub fn props_of(instance: &TableInstance, id: &str) -> StickyProps {
    sticky_props(instance, node(instance, id), &StickyConfig::default())
        .expect("props should compute")
}

/// A realistic grouped table: a sticky left group, a scrolling middle
/// group and a sticky right group
pub fn grouped_table() -> Vec<ColumnDef> {
    vec![
        ColumnDef::group("person", vec![col("first", 120.0), col("last", 100.0)])
            .header("Person")
            .sticky(StickySide::Left),
        ColumnDef::group(
            "info",
            vec![col("age", 60.0), col("visits", 80.0), col("status", 90.0)],
        )
        .header("Info"),
        ColumnDef::group("totals", vec![col("progress", 70.0), col("sum", 50.0)])
            .header("Totals")
            .sticky(StickySide::Right),
    ]
}
