//! Config file load/save (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Pintone settings
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PintoneConfig {
    /// Whether conversion starts enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Whether a typed 'v' is rewritten to 'ü'
    #[serde(default = "default_convert_v")]
    pub convert_v: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_convert_v() -> bool {
    true
}

impl Default for PintoneConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            convert_v: default_convert_v(),
        }
    }
}

/// Config file path: ~/.config/pintone/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME unset or invalid: fall back to /var/tmp (writable)
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("pintone").join("config.json")
}

/// Load the config file (defaults when missing or unparsable)
pub fn load_config() -> PintoneConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| PintoneConfig::default()),
        Err(_) => PintoneConfig::default(),
    }
}

/// Save the config file
pub fn save_config(config: &PintoneConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("failed to create config dir: {}", e))?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| format!("serialization failed: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("failed to write config file: {}", e))?;
    Ok(())
}
