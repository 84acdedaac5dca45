use crate::core::CorynError;
use crate::stats::DEFAULT_MIN_OCCURRENCE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchOptions {
    /// Minimum token-set score for name matches.
    pub name_cutoff: f64,
    /// Minimum weighted score for `all <category>` queries.
    pub category_cutoff: f64,
    /// Default result count.
    pub limit: usize,
    pub ascending: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            name_cutoff: 50.0,
            category_cutoff: 60.0,
            limit: 20,
            ascending: false,
        }
    }
}

impl SearchOptions {
    pub fn validate(&self) -> Result<(), CorynError> {
        if self.limit == 0 {
            return Err(CorynError::InvalidOption {
                name: "limit",
                reason: "must be at least 1".to_string(),
            });
        }
        for (name, value) in [
            ("name_cutoff", self.name_cutoff),
            ("category_cutoff", self.category_cutoff),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(CorynError::InvalidOption {
                    name,
                    reason: format!("{} is outside 0..=100", value),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CorynConfig {
    pub dataset: PathBuf,
    pub stat_min_occurrence: usize,
    pub search: SearchOptions,
}

// Default configuration if file is missing
impl Default for CorynConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("data/items.toml"),
            stat_min_occurrence: DEFAULT_MIN_OCCURRENCE,
            search: SearchOptions::default(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join("coryn.toml"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Load config or create default if missing
    pub async fn load(&self) -> Result<CorynConfig, CorynError> {
        if !self.path.exists() {
            let default_config = CorynConfig::default();
            self.save(&default_config).await?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&self.path).await?;
        let config: CorynConfig = toml::from_str(&content)?;
        config.search.validate()?;
        Ok(config)
    }

    pub async fn save(&self, config: &CorynConfig) -> Result<(), CorynError> {
        config.search.validate()?;
        let content = toml::to_string_pretty(config)?;

        fs::write(&self.path, content).await?;
        Ok(())
    }
}
