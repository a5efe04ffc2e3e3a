//! Sticky column computation.
//!
//! This module handles:
//! - Validating the column tree for sticky/grouping conflicts
//! - Resolving a column's effective sticky side through its groups
//! - Finding the last left-sticky and first right-sticky header of a level
//! - Accumulating pixel offsets from the sticky headers beside a column
//! - Producing the style and data attributes, and the plugin that applies them

mod boundary;
mod offset;
mod plugin;
mod props;
mod resolve;
mod siblings;
mod validate;

pub use plugin::{StickyPlugin, PLUGIN_NAME};
pub use props::{px, sticky_props, STICKY_POSITION};
pub use resolve::resolve_sticky;
pub use siblings::SiblingSet;
pub use validate::validate;
