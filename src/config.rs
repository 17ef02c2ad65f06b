//! Configuration module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Synthetic dataset settings
    pub dataset: DatasetConfig,

    /// Measurement settings
    pub bench: BenchConfig,

    /// Template locations
    pub templates: TemplateConfig,

    /// Engine selection
    pub engines: EngineConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub size: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Decimal places when reporting elapsed seconds
    pub precision: u32,
    /// Timed samples per engine; 1 means a single-shot run
    pub iterations: u64,
    /// Untimed calls before sampling begins
    pub warmup: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub enabled: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig {
                size: 10_000,
                seed: None,
            },
            bench: BenchConfig {
                precision: 3,
                iterations: 1,
                warmup: 0,
            },
            templates: TemplateConfig {
                dir: PathBuf::from("templates"),
            },
            engines: EngineConfig {
                enabled: vec![
                    "tera".to_string(),
                    "liquid".to_string(),
                    "handlebars".to_string(),
                    "minijinja".to_string(),
                ],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                json_output: false,
            },
        }
    }
}

impl Config {
    /// Load config from environment
    pub fn from_env() -> anyhow::Result<Self> {
        // Try to load from file first
        let config_path = std::env::var("RENDER_BENCH_CONFIG")
            .unwrap_or_else(|_| "config/render-bench.json".to_string());

        if std::path::Path::new(&config_path).exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
