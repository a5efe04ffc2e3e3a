//! sticky-columns - sticky column metadata for table headers and cells
//!
//! Computes the inline style and data attributes that pin columns and column
//! groups to the left or right edge of a horizontally scrolling table:
//! - Validation of sticky/grouping conflicts in the column tree
//! - Sticky side inherited through column groups
//! - Pixel offsets from the neighbouring sticky columns
//! - `data-sticky-last-left-td` / `data-sticky-first-right-td` boundary markers
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { StickyTable } from 'sticky-columns';
//! await init();
//! const table = new StickyTable({ columns });
//! const props = table.headerProps('firstName');
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use sticky_columns::{ColumnDef, StickySide, StickyTable, TableDefinition};
//!
//! let table = StickyTable::from_definition(&TableDefinition {
//!     columns: vec![
//!         ColumnDef::new("name").sticky(StickySide::Left).width(120.0),
//!         ColumnDef::new("city"),
//!     ],
//!     ..TableDefinition::default()
//! })?;
//! let props = table.header_props_for(&"name".into())?;
//! assert!(props.is_some());
//! # Ok::<(), sticky_columns::error::StickyError>(())
//! ```

pub mod config;
pub mod error;
pub mod hooks;
pub mod layout;
pub mod sticky;
pub mod table;
pub mod types;

use wasm_bindgen::prelude::*;

pub use config::StickyConfig;
pub use table::StickyTable;
pub use types::*;

/// Build a table from `definition` and compute the props of every flat header
///
/// # Errors
/// Returns an error if the column tree cannot be built or is misconfigured.
pub fn compute_header_props(definition: &TableDefinition) -> error::Result<Vec<HeaderProps>> {
    StickyTable::from_definition(definition)?.all_header_props()
}

/// Decode a JSON table definition and return the per-header props as JSON
///
/// # Errors
/// Returns an error if the JSON is invalid or the columns are misconfigured.
pub fn header_props_json(definition_json: &str) -> error::Result<String> {
    let definition: TableDefinition = serde_json::from_str(definition_json)?;
    let props = compute_header_props(&definition)?;
    Ok(serde_json::to_string(&props)?)
}

/// Compute per-header sticky props for a JSON table definition
///
/// # Arguments
/// * `definition_json` - `{ "columns": [...], "config": {...} }`
///
/// # Returns
/// A JSON array with one `{ id, header, depth, props }` entry per header
///
/// # Errors
/// Returns an error if the JSON is invalid or the columns are misconfigured.
#[wasm_bindgen(js_name = "stickyPropsJson")]
pub fn sticky_props_json(definition_json: &str) -> Result<String, JsValue> {
    header_props_json(definition_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
