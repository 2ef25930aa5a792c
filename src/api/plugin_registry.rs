use crate::error::{GraphError, GraphResult};
use crate::extensions::GraphPlugin;
use crate::render::Renderer;

use super::BarGraph;

impl<R: Renderer> BarGraph<R> {
    /// Registers a plugin with unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn GraphPlugin>) -> GraphResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(GraphError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.core.runtime.plugins.contains_key(&plugin_id) {
            return Err(GraphError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.core.runtime.plugins.insert(plugin_id, plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.core.runtime.plugins.shift_remove(plugin_id).is_some()
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core.runtime.plugins.contains_key(plugin_id)
    }
}
