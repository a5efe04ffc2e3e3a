use super::resolve::resolve_sticky;
use super::siblings::SiblingSet;
use super::validate::validate;
use crate::config::StickyConfig;
use crate::error::Result;
use crate::layout::{NodeId, TableInstance};
use crate::types::{StickyAttributes, StickyProps, StickySide, StickyStyle};

/// CSS `position` value for sticky elements
pub const STICKY_POSITION: &str = "sticky";

/// Compute the sticky style and data attributes for one header.
///
/// The whole column tree is validated first, so a misconfigured table fails
/// on every call rather than rendering a broken layout. A header that is not
/// sticky (or unknown) gets empty props.
///
/// # Errors
/// Any error from [`validate`].
pub fn sticky_props(
    instance: &TableInstance,
    node: NodeId,
    config: &StickyConfig,
) -> Result<StickyProps> {
    validate(&instance.columns)?;

    let Some(side) = resolve_sticky(&instance.columns, node) else {
        return Ok(StickyProps::default());
    };
    let Some(header) = instance.node(node) else {
        return Ok(StickyProps::default());
    };

    let siblings = SiblingSet::same_depth(instance, node);
    let margin = siblings.margin(&header.id, side);

    let mut style = StickyStyle::default();
    if config.inline_position {
        style.position = Some(STICKY_POSITION.to_string());
        style.z_index = Some(config.z_index);
    }
    match side {
        StickySide::Left => style.left = Some(px(margin)),
        StickySide::Right => style.right = Some(px(margin)),
    }

    let attributes = StickyAttributes {
        sticky: true,
        last_left: siblings.is_last_left_sticky(&header.id),
        first_right: siblings.is_first_right_sticky(&header.id),
    };

    tracing::debug!(
        column = %header.id,
        depth = header.depth,
        %side,
        margin,
        last_left = attributes.last_left,
        first_right = attributes.first_right,
        "sticky props"
    );

    Ok(StickyProps { style, attributes })
}

/// Pixel length with the shortest float rendering (`40px`, `12.5px`)
pub fn px(value: f64) -> String {
    format!("{value}px")
}
