use std::time::Duration;

use common::BoardSettings;
use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 8004;
pub const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

const CONFIG_FILE_NAME: &str = "connect_four_server.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, ServerConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub board: BoardSettings,
    /// Base seed for automated opponents; each session offsets it by its number.
    #[serde(default)]
    pub computer_seed: Option<u64>,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            board: BoardSettings::default(),
            computer_seed: None,
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("Port must be non-zero".to_string());
        }
        self.board.validate()
    }
}
