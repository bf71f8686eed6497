use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::{BoardSettings, OpponentKind};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "connect_four_client.yaml";

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or(CONFIG_FILE))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub server_address: String,
    pub opponent: OpponentKind,
    /// Must match the server's board; the client mirrors moves onto it.
    #[serde(default)]
    pub board: BoardSettings,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_address: "127.0.0.1:8004".to_string(),
            opponent: OpponentKind::Computer,
            board: BoardSettings::default(),
            seed: None,
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.server_address.trim().is_empty() {
            return Err("server address must not be empty".to_string());
        }
        self.board.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::ConfigContentProvider;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_connect_four_client_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file_yields_default() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(&file_path));
        assert_eq!(manager.get_config().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_config_is_read_from_file() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("server_address: 10.0.0.5:9000\nopponent: Person\nseed: 11\n")
            .unwrap();

        let config = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(config.server_address, "10.0.0.5:9000");
        assert_eq!(config.opponent, OpponentKind::Person);
        assert_eq!(config.board, BoardSettings::default());
        assert_eq!(config.seed, Some(11));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_empty_address_is_rejected() {
        let config = ClientConfig {
            server_address: "  ".to_string(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
