use crate::error::{Result, ShopError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_QUANTITY_TEXT: &str = "1";
const DEFAULT_VALIDATION_NOTICE: &str = "Please enter details";

/// Settings keys, as typed on the command line.
pub const CONFIG_KEYS: &[&str] = &["default-quantity", "validation-notice"];

/// Configuration for shoplist, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoplistConfig {
    /// Quantity text used when an add request leaves the quantity out
    #[serde(default = "default_quantity")]
    pub default_quantity: String,

    /// Notice shown to the user when an add or edit is rejected
    #[serde(default = "default_validation_notice")]
    pub validation_notice: String,
}

fn default_quantity() -> String {
    DEFAULT_QUANTITY_TEXT.to_string()
}

fn default_validation_notice() -> String {
    DEFAULT_VALIDATION_NOTICE.to_string()
}

impl Default for ShoplistConfig {
    fn default() -> Self {
        Self {
            default_quantity: default_quantity(),
            validation_notice: default_validation_notice(),
        }
    }
}

impl ShoplistConfig {
    /// Load config from the given directory, or return defaults if not found.
    ///
    /// Values that `set` would refuse are a config error.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let config = Self::read(config_dir)?;
        config.validate().map_err(|e| {
            ShopError::Config(format!(
                "{}: {}",
                config_dir.join(CONFIG_FILENAME).display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Like [`load`](Self::load) without the value checks, so `config set`
    /// can repair a hand-edited file.
    pub fn read<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ShoplistConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "config loaded");
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-quantity" => Some(self.default_quantity.clone()),
            "validation-notice" => Some(self.validation_notice.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        check_value(key, value)?;
        match key {
            "default-quantity" => self.default_quantity = value.to_string(),
            "validation-notice" => self.validation_notice = value.to_string(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// Applies the `set` checks to every setting.
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.entries()
            .iter()
            .try_for_each(|(key, value)| check_value(key, value))
    }

    /// All settings as (key, value) pairs, in [`CONFIG_KEYS`] order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn check_value(key: &str, value: &str) -> std::result::Result<(), String> {
    match key {
        "default-quantity" if value.parse::<i32>().map(|q| q < 1).unwrap_or(true) => Err(
            format!("default-quantity must be a positive integer, got '{}'", value),
        ),
        "validation-notice" if value.trim().is_empty() => {
            Err("validation-notice cannot be empty".to_string())
        }
        "default-quantity" | "validation-notice" => Ok(()),
        _ => Err(format!("Unknown config key: {}", key)),
    }
}

/// Fails with a config error when the directory exists but is not a directory.
pub fn ensure_config_dir(config_dir: &Path) -> Result<()> {
    if config_dir.exists() && !config_dir.is_dir() {
        return Err(ShopError::Config(format!(
            "{} is not a directory",
            config_dir.display()
        )));
    }
    Ok(())
}
