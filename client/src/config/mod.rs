mod config;

pub use config::{get_config_manager, Config, ConfigStore};
