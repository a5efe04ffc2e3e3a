//! `StickyTable`: a built column tree with the sticky plugin registered,
//! exposed to JavaScript.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{Result, StickyError};
use crate::hooks::Hooks;
use crate::layout::{Cell, TableInstance};
use crate::sticky::StickyPlugin;
use crate::types::{ColumnId, ElementProps, HeaderProps, TableDefinition};

/// Column tree plus the hook pipeline computing its props
#[wasm_bindgen]
#[derive(Debug)]
pub struct StickyTable {
    instance: TableInstance,
    hooks: Hooks,
}

impl StickyTable {
    /// Build the tree and register the sticky plugin.
    ///
    /// The column configuration is validated eagerly so a broken definition
    /// fails here instead of on the first render.
    ///
    /// # Errors
    /// Tree build errors and sticky configuration errors.
    pub fn from_definition(definition: &TableDefinition) -> Result<Self> {
        let instance = TableInstance::new(&definition.columns)?;
        crate::sticky::validate(&instance.columns)?;
        let hooks = Hooks::new().with_plugin(&StickyPlugin::new(definition.config))?;
        Ok(Self { instance, hooks })
    }

    pub fn instance(&self) -> &TableInstance {
        &self.instance
    }

    /// Header props for the header carrying `id`, `None` if there is none.
    ///
    /// # Errors
    /// Errors raised by the registered hooks.
    pub fn header_props_for(&self, id: &ColumnId) -> Result<Option<ElementProps>> {
        self.instance
            .find(id)
            .map(|column| self.hooks.header_props(&self.instance, column))
            .transpose()
    }

    /// Cell props for row `row` of column `id`, `None` if there is no such column.
    ///
    /// # Errors
    /// Errors raised by the registered hooks.
    pub fn cell_props_for(&self, id: &ColumnId, row: usize) -> Result<Option<ElementProps>> {
        self.instance
            .find(id)
            .map(|column| self.hooks.cell_props(&self.instance, Cell { column, row }))
            .transpose()
    }

    /// # Errors
    /// Errors raised by the registered hooks.
    pub fn all_header_props(&self) -> Result<Vec<HeaderProps>> {
        self.hooks.all_header_props(&self.instance)
    }
}

#[wasm_bindgen]
impl StickyTable {
    /// Build from a JS table definition `{ columns, config }`.
    ///
    /// # Errors
    /// Returns an error if the definition cannot be decoded or is misconfigured.
    #[wasm_bindgen(constructor)]
    pub fn new(definition: JsValue) -> std::result::Result<StickyTable, JsValue> {
        let definition: TableDefinition =
            serde_wasm_bindgen::from_value(definition).map_err(|e| js_error(&e.to_string()))?;
        Self::from_definition(&definition).map_err(|e| to_js_error(&e))
    }

    /// # Errors
    /// Returns an error if the id cannot be decoded or a hook fails.
    #[wasm_bindgen(js_name = "headerProps")]
    pub fn header_props(&self, id: JsValue) -> std::result::Result<JsValue, JsValue> {
        let id: ColumnId =
            serde_wasm_bindgen::from_value(id).map_err(|e| js_error(&e.to_string()))?;
        let props = self.header_props_for(&id).map_err(|e| to_js_error(&e))?;
        to_js(&props)
    }

    /// # Errors
    /// Returns an error if the id cannot be decoded or a hook fails.
    #[wasm_bindgen(js_name = "cellProps")]
    pub fn cell_props(&self, id: JsValue, row: usize) -> std::result::Result<JsValue, JsValue> {
        let id: ColumnId =
            serde_wasm_bindgen::from_value(id).map_err(|e| js_error(&e.to_string()))?;
        let props = self.cell_props_for(&id, row).map_err(|e| to_js_error(&e))?;
        to_js(&props)
    }

    /// # Errors
    /// Returns an error if a hook fails.
    #[wasm_bindgen(js_name = "allHeaderProps")]
    pub fn all_header_props_js(&self) -> std::result::Result<JsValue, JsValue> {
        let props = self.all_header_props().map_err(|e| to_js_error(&e))?;
        to_js(&props)
    }
}

/// Plain JS objects rather than `Map`s, so props can be spread onto elements
fn to_js<T: Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| js_error(&format!("Serialization error: {e}")))
}

fn to_js_error(e: &StickyError) -> JsValue {
    js_error(&e.to_string())
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}
