use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::{ColumnId, StickySide};

/// Attribute set on every sticky header or cell
pub const DATA_STICKY: &str = "data-sticky-td";
/// Attribute set on the last left-sticky element of a header level
pub const DATA_STICKY_LAST_LEFT: &str = "data-sticky-last-left-td";
/// Attribute set on the first right-sticky element of a header level
pub const DATA_STICKY_FIRST_RIGHT: &str = "data-sticky-first-right-td";

/// Inline style contributed by the sticky computation
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StickyStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl StickyStyle {
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.z_index.is_none()
            && self.left.is_none()
            && self.right.is_none()
    }

    /// Offset written for `side`, if any
    pub fn offset(&self, side: StickySide) -> Option<&str> {
        match side {
            StickySide::Left => self.left.as_deref(),
            StickySide::Right => self.right.as_deref(),
        }
    }
}

/// Boolean data attributes contributed by the sticky computation
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct StickyAttributes {
    #[serde(rename = "data-sticky-td", default, skip_serializing_if = "is_false")]
    pub sticky: bool,
    #[serde(
        rename = "data-sticky-last-left-td",
        default,
        skip_serializing_if = "is_false"
    )]
    pub last_left: bool,
    #[serde(
        rename = "data-sticky-first-right-td",
        default,
        skip_serializing_if = "is_false"
    )]
    pub first_right: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}

impl StickyAttributes {
    pub fn is_empty(&self) -> bool {
        !self.sticky && !self.last_left && !self.first_right
    }
}

/// Style and attributes for one header or cell
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct StickyProps {
    pub style: StickyStyle,
    #[serde(flatten)]
    pub attributes: StickyAttributes,
}

impl StickyProps {
    /// True for a non-sticky element
    pub fn is_empty(&self) -> bool {
        self.style.is_empty() && self.attributes.is_empty()
    }
}

/// Props accumulated for a rendered element across all registered hooks
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementProps {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl ElementProps {
    /// Merge `next` on top of `self`.
    ///
    /// Style entries are merged key by key with `next` winning, class names
    /// are joined with a space and every other attribute is replaced.
    #[must_use]
    pub fn merge(mut self, next: ElementProps) -> Self {
        self.style.extend(next.style);
        self.class_name = match (self.class_name.take(), next.class_name) {
            (Some(a), Some(b)) => Some(format!("{a} {b}")),
            (a, b) => a.or(b),
        };
        self.attributes.extend(next.attributes);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// True when the boolean attribute `name` is present and set
    pub fn has_flag(&self, name: &str) -> bool {
        matches!(self.attributes.get(name), Some(Value::Bool(true)))
    }

    /// Render the style map as a CSS declaration list, e.g.
    /// `left: 40px; position: sticky; z-index: 3`
    pub fn inline_style(&self) -> String {
        self.style
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                format!("{}: {value}", kebab_case(key))
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl From<StickyProps> for ElementProps {
    fn from(props: StickyProps) -> Self {
        let mut out = ElementProps::default();
        let StickyStyle {
            position,
            z_index,
            left,
            right,
        } = props.style;
        if let Some(position) = position {
            out.style.insert("position".to_string(), Value::String(position));
        }
        if let Some(z_index) = z_index {
            out.style.insert("zIndex".to_string(), Value::from(z_index));
        }
        if let Some(left) = left {
            out.style.insert("left".to_string(), Value::String(left));
        }
        if let Some(right) = right {
            out.style.insert("right".to_string(), Value::String(right));
        }

        let flags = [
            (DATA_STICKY, props.attributes.sticky),
            (DATA_STICKY_LAST_LEFT, props.attributes.last_left),
            (DATA_STICKY_FIRST_RIGHT, props.attributes.first_right),
        ];
        for (name, set) in flags {
            if set {
                out.attributes.insert(name.to_string(), Value::Bool(true));
            }
        }
        out
    }
}

/// `zIndex` -> `z-index`
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Props computed for one entry of the flat header list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderProps {
    pub id: ColumnId,
    pub header: String,
    pub depth: usize,
    pub props: ElementProps,
}
