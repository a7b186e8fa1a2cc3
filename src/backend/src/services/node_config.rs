use alarm_widget_core::WidgetConfiguration;
use anyhow::{Result, anyhow};
use log::info;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

/// In-memory configuration per custom alarm node.
///
/// Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct NodeConfigStore {
    configs: Arc<RwLock<HashMap<String, WidgetConfiguration>>>,
}

impl NodeConfigStore {
    /// Store `config` for `node_id`, replacing any previous one.
    pub fn save(&self, node_id: &str, config: WidgetConfiguration) -> Result<WidgetConfiguration> {
        let mut configs = self
            .configs
            .write()
            .map_err(|_| anyhow!("failed to lock node config store for writing"))?;

        info!("storing config for node {node_id}: {config:?}");
        configs.insert(node_id.to_string(), config.clone());

        Ok(config)
    }

    pub fn get(&self, node_id: &str) -> Result<Option<WidgetConfiguration>> {
        let configs = self
            .configs
            .read()
            .map_err(|_| anyhow!("failed to lock node config store for reading"))?;

        Ok(configs.get(node_id).cloned())
    }
}
