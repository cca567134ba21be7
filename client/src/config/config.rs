use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::{BotType, GameMode};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const MAX_COMPUTER_DELAY_MS: u64 = 5000;

pub type ConfigStore = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigStore {
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub mode: GameMode,
    pub bot: BotType,
    pub computer_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {} (got {})",
                MAX_COMPUTER_DELAY_MS, self.computer_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsComputer,
            bot: BotType::Minimax,
            computer_delay_ms: 300,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_delay_over_limit_is_invalid() {
        let config = Config {
            computer_delay_ms: 60_000,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_missing_seed_defaults_to_none() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer
            .deserialize("mode: HumanVsHuman\nbot: Random\ncomputer_delay_ms: 0\n")
            .unwrap();
        assert_eq!(config.mode, GameMode::HumanVsHuman);
        assert_eq!(config.bot, BotType::Random);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_file() {
        let config = Config {
            mode: GameMode::HumanVsHuman,
            seed: Some(1234),
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager: ConfigStore = ConfigManager::from_yaml_file(file_path.clone());
        assert!(manager.set_config(&config).is_ok());

        let provider = FileContentConfigProvider::new(file_path.clone());
        let content = provider.get_config_content().unwrap().unwrap();
        assert!(content.contains("HumanVsHuman"));

        let reloaded: ConfigStore = ConfigManager::from_yaml_file(file_path.clone());
        assert_eq!(reloaded.get_config(), Ok(config));
        let _ = std::fs::remove_file(file_path);
    }
}
