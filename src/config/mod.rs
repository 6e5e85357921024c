//! Configuration persistence
//!
//! The config is a small JSON record stored at `~/.claude-commit/config.json`:
//!
//! ```json
//! {
//!   "api_key": "sk-ant-...",
//!   "model": "claude-sonnet-4-0"
//! }
//! ```
//!
//! Saving merges into whatever is already stored: empty values leave the
//! stored field untouched. The file is plaintext and is read-then-written
//! without locking.

pub mod fs;


use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::config::{DIR_NAME, FILE_NAME};
use crate::error::{AppError, Result};
use crate::llm::models::{DEFAULT_MODEL, is_known_model};
use crate::ui::{MessageKind, Printer, mask_api_key};

pub use fs::{FileSystem, OsFileSystem};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Loads, saves and displays the persisted [`Config`].
#[derive(Clone)]
pub struct ConfigStore {
    fs: Arc<dyn FileSystem>,
    printer: Arc<dyn Printer>,
}

impl ConfigStore {
    pub fn new(fs: Arc<dyn FileSystem>, printer: Arc<dyn Printer>) -> Self {
        Self { fs, printer }
    }

    /// `<home>/.claude-commit/config.json`
    pub fn config_path(&self) -> Result<PathBuf> {
        let home = self
            .fs
            .home_dir()
            .ok_or_else(|| AppError::Config("error getting home directory".to_string()))?;
        Ok(home.join(DIR_NAME).join(FILE_NAME))
    }

    /// Loads the stored config; a record without an API key counts as unconfigured.
    pub fn load(&self) -> Result<Config> {
        let config = self.read_stored()?;
        if config.api_key.is_empty() {
            return Err(AppError::Validation("API key is required".to_string()));
        }
        Ok(config)
    }

    /// The stored record as-is, whatever fields it has.
    fn read_stored(&self) -> Result<Config> {
        let path = self.config_path()?;
        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|source| AppError::NotConfigured {
                path: path.clone(),
                source,
            })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| AppError::parse("error parsing config file", e))?;
        tracing::debug!("Loaded config from {} (model: {})", path.display(), config.model);
        Ok(config)
    }

    /// Merges `api_key` and `model` into the stored config and writes it back.
    ///
    /// Empty arguments keep the stored value. Fails if no API key results.
    pub fn save(&self, api_key: &str, model: &str) -> Result<Config> {
        let mut config = self.read_stored().unwrap_or_else(|e| {
            tracing::debug!("No usable existing config, starting fresh: {}", e);
            Config::default()
        });

        if !api_key.is_empty() {
            config.api_key = api_key.to_string();
        }
        if !model.is_empty() {
            config.model = model.to_string();
        }

        if config.api_key.is_empty() {
            return Err(AppError::Validation("API key is required".to_string()));
        }

        let path = self.config_path()?;
        if let Some(dir) = path.parent() {
            self.fs
                .create_dir_all(dir)
                .map_err(|e| AppError::io("error creating config directory", e))?;
        }

        let data = serde_json::to_string_pretty(&config)
            .map_err(|e| AppError::parse("error encoding config", e))?;
        self.fs
            .write(&path, &data)
            .map_err(|e| AppError::io("error writing config file", e))?;
        tracing::debug!("Wrote config to {}", path.display());

        self.printer
            .print(MessageKind::Success, "Configuration saved successfully");
        self.printer.print(
            MessageKind::Boxed,
            &format!(
                "API Key: {}\nModel: {}",
                mask_api_key(&config.api_key),
                config.model
            ),
        );
        if !is_known_model(&config.model) {
            self.printer.print(
                MessageKind::Warning,
                &format!(
                    "'{}' is not a known model; run 'claude_commit models' to list supported models",
                    config.model
                ),
            );
        }

        Ok(config)
    }

    /// Prints the stored config with the API key masked.
    pub fn view(&self) -> Result<Config> {
        let config = self.load()?;

        self.printer
            .print(MessageKind::Title, "Current Configuration");
        self.printer.print(
            MessageKind::Boxed,
            &format!(
                "API Key: {}\nModel: {}",
                mask_api_key(&config.api_key),
                config.model
            ),
        );
        if let Ok(path) = self.config_path() {
            self.printer.print(
                MessageKind::Info,
                &format!("Config file: {}", path.display()),
            );
        }

        Ok(config)
    }
}
