//! Structured error types for sticky-columns.
//!
//! The two configuration variants are fatal: a table whose column
//! definitions trip them has to be fixed by the caller, nothing here
//! falls back to a degraded layout.

/// All errors that can occur while building a column tree or computing props.
#[derive(Debug, thiserror::Error)]
pub enum StickyError {
    /// Groups exist, but some columns outside any group are sticky.
    #[error(
        "table has column groups and sticky columns outside groups, which breaks the layout; \
         place {} into a group (even a group with an empty header label)",
        quote_labels(.columns)
    )]
    UngroupedSticky {
        /// Labels of every offending column, in tree order.
        columns: Vec<String>,
    },

    /// A group without a sticky side has a sticky child.
    #[error(
        "column group '{group}' has sticky child columns; when a table has column groups \
         only groups can be sticky: set sticky to left or right on '{group}' or remove \
         the sticky property of '{child}'"
    )]
    PartialGroupSticky {
        /// Label of the group.
        group: String,
        /// Label of the first sticky child.
        child: String,
    },

    /// A column definition has neither an id nor a header label to derive one from.
    #[error("column definition #{index} needs an id or a header label")]
    MissingColumnId { index: usize },

    /// A plugin with the same name is already registered.
    #[error("plugin '{0}' is already registered")]
    DuplicatePlugin(&'static str),

    /// Table definition could not be decoded.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StickyError>;

fn quote_labels(labels: &[String]) -> String {
    labels
        .iter()
        .map(|label| format!("'{label}'"))
        .collect::<Vec<_>>()
        .join(" and ")
}

#[cfg(target_arch = "wasm32")]
impl From<StickyError> for wasm_bindgen::JsValue {
    fn from(e: StickyError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
