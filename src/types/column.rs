use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::StickyConfig;

/// Column identifier, a string or a number as supplied by the table definition
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum ColumnId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for ColumnId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// Edge of the table a sticky column is pinned to
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StickySide {
    Left,
    Right,
}

impl StickySide {
    /// CSS property name the offset is written to
    pub fn as_css_property(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for StickySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css_property())
    }
}

fn default_visible() -> bool {
    true
}

/// A column or column group as declared by the table definition
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    /// Unique id among siblings; falls back to the header label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ColumnId>,
    /// Display label
    #[serde(default, alias = "Header")]
    pub header: String,
    /// Sub-columns (non-empty for a group)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnDef>,
    /// Sticky side declared on this column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky: Option<StickySide>,
    /// Width in pixels for leaf columns (groups always span their children)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

impl ColumnDef {
    /// Leaf column with an id and a header label equal to it
    pub fn new(id: impl Into<ColumnId>) -> Self {
        let id = id.into();
        Self {
            header: id.to_string(),
            id: Some(id),
            columns: Vec::new(),
            sticky: None,
            width: None,
            is_visible: true,
        }
    }

    /// Column group spanning `columns`
    pub fn group(id: impl Into<ColumnId>, columns: Vec<ColumnDef>) -> Self {
        Self {
            columns,
            ..Self::new(id)
        }
    }

    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    #[must_use]
    pub fn sticky(mut self, side: StickySide) -> Self {
        self.sticky = Some(side);
        self
    }

    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    /// Declared id, or the header label when no id was given
    pub fn resolved_id(&self) -> Option<ColumnId> {
        match &self.id {
            Some(id) => Some(id.clone()),
            None if !self.header.is_empty() => Some(ColumnId::Text(self.header.clone())),
            None => None,
        }
    }
}

/// Everything needed to build a table: its column tree and sticky settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TableDefinition {
    pub columns: Vec<ColumnDef>,
    #[serde(default)]
    pub config: StickyConfig,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_column_id_accepts_strings_and_numbers() {
        let ids: Vec<ColumnId> = serde_json::from_str(r#"["name", 7]"#).unwrap();
        assert_eq!(ids, vec![ColumnId::from("name"), ColumnId::Number(7)]);
    }

    #[test]
    fn test_column_def_defaults() {
        let def: ColumnDef = serde_json::from_str(r#"{"Header": "Name"}"#).unwrap();
        assert_eq!(def.header, "Name");
        assert!(def.is_visible);
        assert!(def.sticky.is_none());
        assert!(def.columns.is_empty());
        assert_eq!(def.resolved_id(), Some(ColumnId::from("Name")));
    }

    #[test]
    fn test_sticky_side_is_lowercase() {
        let def: ColumnDef =
            serde_json::from_str(r#"{"id": 1, "sticky": "right", "isVisible": false}"#).unwrap();
        assert_eq!(def.sticky, Some(StickySide::Right));
        assert!(!def.is_visible);
        assert!(serde_json::from_str::<ColumnDef>(r#"{"id": 1, "sticky": "top"}"#).is_err());
    }

    #[test]
    fn test_unlabelled_column_has_no_id() {
        let def: ColumnDef = serde_json::from_str(r#"{"columns": []}"#).unwrap();
        assert_eq!(def.resolved_id(), None);
    }
}
