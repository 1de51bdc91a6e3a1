use std::time::Duration;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::FieldSize;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "snake_server_config.yaml";

pub const MIN_TICK_INTERVAL_MS: u64 = 20;
pub const MAX_TICK_INTERVAL_MS: u64 = 5000;

pub type ServerConfigManager =
    ConfigManager<FileContentConfigProvider, ServerConfig, YamlConfigSerializer>;

pub fn get_config_manager(file_path: &str) -> ServerConfigManager {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub static_files_path: String,
    pub field_width: usize,
    pub field_height: usize,
    pub tick_interval_ms: u64,
    /// Fixed seed for reproducible food placement. Random when absent.
    pub seed: Option<u64>,
}

impl ServerConfig {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bind_address.is_empty() {
            return Err("bind_address must not be empty".to_string());
        }
        if self.static_files_path.is_empty() {
            return Err("static_files_path must not be empty".to_string());
        }
        if !self.field_size().is_valid() {
            return Err(format!(
                "field sides must be between {} and {}",
                FieldSize::MIN_SIDE,
                FieldSize::MAX_SIDE
            ));
        }
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(format!(
                "tick_interval_ms must be between {} and {}",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            static_files_path: "./web/static".to_string(),
            field_width: 40,
            field_height: 20,
            tick_interval_ms: 200,
            seed: None,
        }
    }
}
