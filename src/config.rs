//! Settings for the sticky prop computation.

use serde::{Deserialize, Serialize};

/// Stacking order given to sticky headers and cells
pub const DEFAULT_Z_INDEX: u32 = 3;

/// Width in pixels of a leaf column that declares none
pub const DEFAULT_COLUMN_WIDTH: f64 = 150.0;

fn default_z_index() -> u32 {
    DEFAULT_Z_INDEX
}

fn default_inline_position() -> bool {
    true
}

/// Sticky prop settings, usually read from the `config` key of a table definition
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StickyConfig {
    /// `z-index` written on sticky elements
    #[serde(default = "default_z_index")]
    pub z_index: u32,
    /// Emit `position: sticky` and `z-index` inline. When false only the
    /// offset is written and positioning is left to the stylesheet, keyed on
    /// the `data-sticky-td` attribute.
    #[serde(default = "default_inline_position")]
    pub inline_position: bool,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            z_index: DEFAULT_Z_INDEX,
            inline_position: true,
        }
    }
}
