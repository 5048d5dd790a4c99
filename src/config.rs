use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_DATA_FILE: &str = "./ceny_akcji.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_file: String,
    pub delimiter: char,
    pub has_headers: bool,
    pub output_format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            delimiter: ',',
            has_headers: false,
            output_format: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    /// Delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(ConfigError::InvalidDelimiter(self.delimiter))
        }
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    config.delimiter_byte()?;
    Ok(config)
}

/// Loads `path` when it exists, otherwise falls back to defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        Ok(AppConfig::default())
    }
}
