use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once, caches it, and writes every change back through the
/// content provider. Nothing is cached until a stored config validates.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config lock poisoned: {}", e))?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config lock poisoned: {}", e))?;
        *current = Some(config.clone());
        Ok(())
    }

    /// Read-modify-write of the current config.
    pub fn update_config<F>(&self, update: F) -> Result<TConfig, String>
    where
        F: FnOnce(&mut TConfig),
    {
        let mut config = self.get_config()?;
        update(&mut config);
        self.set_config(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct PacingConfig {
        delay_ms: u64,
    }

    impl Default for PacingConfig {
        fn default() -> Self {
            Self { delay_ms: 300 }
        }
    }

    impl Validate for PacingConfig {
        fn validate(&self) -> Result<(), String> {
            if self.delay_ms > 5000 {
                return Err("delay_ms must not exceed 5000".to_string());
            }
            Ok(())
        }
    }

    fn memory_manager(
        content: Option<&str>,
    ) -> ConfigManager<MemoryContentConfigProvider, PacingConfig, YamlConfigSerializer> {
        ConfigManager::new(
            MemoryContentConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_gives_default() {
        let manager = memory_manager(None);
        assert_eq!(manager.get_config(), Ok(PacingConfig::default()));
    }

    #[test]
    fn test_stored_content_is_parsed() {
        let manager = memory_manager(Some("delay_ms: 50\n"));
        assert_eq!(manager.get_config(), Ok(PacingConfig { delay_ms: 50 }));
    }

    #[test]
    fn test_invalid_stored_content_is_rejected() {
        let manager = memory_manager(Some("delay_ms: 9000\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"));
    }

    #[test]
    fn test_set_config_rejects_invalid() {
        let manager = memory_manager(None);
        assert!(manager.set_config(&PacingConfig { delay_ms: 10_000 }).is_err());
        assert_eq!(manager.get_config(), Ok(PacingConfig::default()));
    }

    #[test]
    fn test_update_config_persists() {
        let manager = memory_manager(None);
        let updated = manager.update_config(|c| c.delay_ms = 0).unwrap();
        assert_eq!(updated.delay_ms, 0);
        assert_eq!(manager.get_config().unwrap().delay_ms, 0);
    }

    #[test]
    fn test_yaml_file_manager_round_trip() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("temp_tictactoe_manager_{}.yaml", random_number));
        let manager: ConfigManager<FileContentConfigProvider, PacingConfig> =
            ConfigManager::from_yaml_file(path.clone());
        assert!(manager.set_config(&PacingConfig { delay_ms: 120 }).is_ok());

        let reloaded: ConfigManager<FileContentConfigProvider, PacingConfig> =
            ConfigManager::from_yaml_file(path.clone());
        assert_eq!(reloaded.get_config(), Ok(PacingConfig { delay_ms: 120 }));
        let _ = std::fs::remove_file(path);
    }
}
