use super::props::sticky_props;
use crate::config::StickyConfig;
use crate::hooks::{Hooks, Plugin};
use crate::types::ElementProps;

/// Name the sticky plugin registers under
pub const PLUGIN_NAME: &str = "useSticky";

/// Adds sticky style and attributes to header and cell props
#[derive(Debug, Clone, Copy, Default)]
pub struct StickyPlugin {
    pub config: StickyConfig,
}

impl StickyPlugin {
    pub fn new(config: StickyConfig) -> Self {
        Self { config }
    }
}

impl Plugin for StickyPlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn register(&self, hooks: &mut Hooks) {
        let config = self.config;
        hooks.push_header_props(move |props, ctx| {
            let next = sticky_props(ctx.instance(), ctx.column(), &config)?;
            Ok(props.merge(ElementProps::from(next)))
        });
        hooks.push_cell_props(move |props, ctx| {
            let next = sticky_props(ctx.instance(), ctx.column(), &config)?;
            Ok(props.merge(ElementProps::from(next)))
        });
    }
}
