//! Prop hook pipeline.
//!
//! Plugins register prop transformations once, at setup. Rendering a header
//! or cell folds the registered hooks in order over an empty
//! [`ElementProps`], each hook receiving the props so far and returning the
//! merged result.

use std::fmt;

use crate::error::{Result, StickyError};
use crate::layout::{Cell, NodeId, TableInstance};
use crate::types::{ElementProps, HeaderProps};

/// What a hook is computing props for
#[derive(Debug, Clone, Copy)]
pub enum HookContext<'a> {
    Header {
        instance: &'a TableInstance,
        column: NodeId,
    },
    Cell {
        instance: &'a TableInstance,
        cell: Cell,
    },
}

impl<'a> HookContext<'a> {
    pub fn instance(&self) -> &'a TableInstance {
        match *self {
            Self::Header { instance, .. } | Self::Cell { instance, .. } => instance,
        }
    }

    /// Column being rendered; for a cell, the cell's column
    pub fn column(&self) -> NodeId {
        match *self {
            Self::Header { column, .. } => column,
            Self::Cell { cell, .. } => cell.column,
        }
    }
}

/// A single prop transformation
pub type PropHook = Box<dyn Fn(ElementProps, &HookContext<'_>) -> Result<ElementProps>>;

/// Something that contributes hooks to a pipeline
pub trait Plugin {
    /// Unique name; registering two plugins with the same name fails
    fn name(&self) -> &'static str;

    fn register(&self, hooks: &mut Hooks);
}

/// Ordered header and cell prop hooks
#[derive(Default)]
pub struct Hooks {
    header_props: Vec<PropHook>,
    cell_props: Vec<PropHook>,
    plugins: Vec<&'static str>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("header_props", &self.header_props.len())
            .field("cell_props", &self.cell_props.len())
            .field("plugins", &self.plugins)
            .finish()
    }
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `plugin` register its hooks.
    ///
    /// # Errors
    /// [`StickyError::DuplicatePlugin`] if a plugin with the same name is
    /// already registered.
    pub fn use_plugin<P: Plugin + ?Sized>(&mut self, plugin: &P) -> Result<()> {
        let name = plugin.name();
        if self.plugins.contains(&name) {
            return Err(StickyError::DuplicatePlugin(name));
        }
        plugin.register(self);
        self.plugins.push(name);
        tracing::debug!(plugin = name, "plugin registered");
        Ok(())
    }

    /// Builder form of [`Hooks::use_plugin`].
    ///
    /// # Errors
    /// See [`Hooks::use_plugin`].
    pub fn with_plugin<P: Plugin + ?Sized>(mut self, plugin: &P) -> Result<Self> {
        self.use_plugin(plugin)?;
        Ok(self)
    }

    /// Names of the registered plugins, in registration order
    pub fn plugins(&self) -> &[&'static str] {
        &self.plugins
    }

    pub fn push_header_props<F>(&mut self, hook: F)
    where
        F: Fn(ElementProps, &HookContext<'_>) -> Result<ElementProps> + 'static,
    {
        self.header_props.push(Box::new(hook));
    }

    pub fn push_cell_props<F>(&mut self, hook: F)
    where
        F: Fn(ElementProps, &HookContext<'_>) -> Result<ElementProps> + 'static,
    {
        self.cell_props.push(Box::new(hook));
    }

    /// Run the header hooks for `column`.
    ///
    /// # Errors
    /// The first error returned by a hook; later hooks do not run.
    pub fn header_props(&self, instance: &TableInstance, column: NodeId) -> Result<ElementProps> {
        let ctx = HookContext::Header { instance, column };
        Self::run(&self.header_props, &ctx)
    }

    /// Run the cell hooks for `cell`.
    ///
    /// # Errors
    /// The first error returned by a hook; later hooks do not run.
    pub fn cell_props(&self, instance: &TableInstance, cell: Cell) -> Result<ElementProps> {
        let ctx = HookContext::Cell { instance, cell };
        Self::run(&self.cell_props, &ctx)
    }

    /// Header props for every entry of the flat header list.
    ///
    /// # Errors
    /// See [`Hooks::header_props`].
    pub fn all_header_props(&self, instance: &TableInstance) -> Result<Vec<HeaderProps>> {
        let mut out = Vec::with_capacity(instance.flat_headers.len());
        for &column in &instance.flat_headers {
            let Some(header) = instance.node(column) else {
                continue;
            };
            out.push(HeaderProps {
                id: header.id.clone(),
                header: header.header.clone(),
                depth: header.depth,
                props: self.header_props(instance, column)?,
            });
        }
        Ok(out)
    }

    fn run(hooks: &[PropHook], ctx: &HookContext<'_>) -> Result<ElementProps> {
        hooks
            .iter()
            .try_fold(ElementProps::default(), |props, hook| hook(props, ctx))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::ColumnDef;
    use serde_json::json;

    struct ClassPlugin(&'static str);

    impl Plugin for ClassPlugin {
        fn name(&self) -> &'static str {
            self.0
        }

        fn register(&self, hooks: &mut Hooks) {
            let class = self.0;
            hooks.push_header_props(move |props, _| {
                Ok(props.merge(ElementProps {
                    class_name: Some(class.to_string()),
                    ..ElementProps::default()
                }))
            });
        }
    }

    fn instance() -> TableInstance {
        TableInstance::new(&[ColumnDef::new("a"), ColumnDef::new("b")]).unwrap()
    }

    #[test]
    fn test_hooks_run_in_registration_order() {
        let hooks = Hooks::new()
            .with_plugin(&ClassPlugin("first"))
            .unwrap()
            .with_plugin(&ClassPlugin("second"))
            .unwrap();
        let instance = instance();
        let props = hooks
            .header_props(&instance, instance.flat_headers[0])
            .unwrap();
        assert_eq!(props.class_name.as_deref(), Some("first second"));
        assert_eq!(hooks.plugins(), ["first", "second"]);
    }

    #[test]
    fn test_duplicate_plugin_is_rejected() {
        let mut hooks = Hooks::new();
        hooks.use_plugin(&ClassPlugin("same")).unwrap();
        let err = hooks.use_plugin(&ClassPlugin("same")).unwrap_err();
        assert!(matches!(err, StickyError::DuplicatePlugin("same")));
        assert_eq!(hooks.plugins().len(), 1);
    }

    #[test]
    fn test_cell_hooks_see_cell_column() {
        let mut hooks = Hooks::new();
        hooks.push_cell_props(|props, ctx| {
            let id = ctx.instance().node(ctx.column()).map(|n| n.id.to_string());
            let mut next = ElementProps::default();
            next.attributes.insert("data-column".to_string(), json!(id));
            Ok(props.merge(next))
        });
        let instance = instance();
        let cell = Cell {
            column: instance.flat_headers[1],
            row: 4,
        };
        let props = hooks.cell_props(&instance, cell).unwrap();
        assert_eq!(props.attribute("data-column"), Some(&json!("b")));
    }

    #[test]
    fn test_error_stops_the_pipeline() {
        let mut hooks = Hooks::new();
        hooks.push_header_props(|_, _| Err(StickyError::DuplicatePlugin("boom")));
        hooks.push_header_props(|_, _| Ok(ElementProps::default()));
        let instance = instance();
        assert!(hooks
            .header_props(&instance, instance.flat_headers[0])
            .is_err());
    }
}
