use std::path::PathBuf;
use std::time::Duration;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::GameSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";
const MAX_COMPUTER_MOVE_DELAY_MS: u32 = 5000;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub settings: GameSettings,
    pub computer_move_delay_ms: u32,
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Config {
    pub fn computer_move_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.computer_move_delay_ms))
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {}",
                MAX_COMPUTER_MOVE_DELAY_MS
            ));
        }
        if let Some(ref log_file) = self.log_file
            && log_file.trim().is_empty()
        {
            return Err("log_file must not be empty when set".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: GameSettings::default(),
            computer_move_delay_ms: 1000,
            log_file: None,
        }
    }
}
