// ABOUTME: Configuration management for credtmpl
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_table() -> String {
    "credential-store".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_table")]
    pub table: String,

    #[serde(default)]
    pub store: Option<PathBuf>,

    #[serde(default)]
    pub template: TemplateConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplateConfig {
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: default_table(),
            store: None,
            template: TemplateConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config {}", config_path.display()))?;
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Invalid config {}", config_path.display()))?
        } else {
            Config::default()
        };

        config.merge_env()?;
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = vec![
            PathBuf::from("credtmpl.yaml"),
            PathBuf::from("credtmpl.yml"),
            PathBuf::from(".credtmpl.yaml"),
            PathBuf::from(".credtmpl.yml"),
        ];

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".credtmpl").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        for path in possible_paths {
            if path.exists() {
                return path;
            }
        }

        // Default path (may not exist)
        PathBuf::from("credtmpl.yaml")
    }

    /// Merge process environment variables into configuration
    fn merge_env(&mut self) -> Result<()> {
        self.merge_env_from(|key| std::env::var(key).ok())
    }

    fn merge_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(table) = lookup("CREDTMPL_TABLE") {
            self.table = table;
        }
        if let Some(store) = lookup("CREDTMPL_STORE") {
            self.store = Some(PathBuf::from(store));
        }
        if let Some(strict) = lookup("CREDTMPL_STRICT") {
            self.template.strict = strict
                .parse()
                .with_context(|| format!("Invalid CREDTMPL_STRICT value '{}'", strict))?;
        }

        if let Some(level) = lookup("CREDTMPL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CREDTMPL_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}
