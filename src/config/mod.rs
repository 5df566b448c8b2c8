//! Configuration loading for the resource store

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::ConfigError;

/// Number of records seeded per resource
///
/// Settings is not listed: it always holds exactly one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedCounts {
    pub hotels: usize,
    pub yachts: usize,
    pub tours: usize,
    pub articles: usize,
    pub reviews: usize,
    pub inquiries: usize,
    pub packages: usize,
    pub faqs: usize,
    pub news: usize,
    pub emails: usize,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            hotels: 15,
            yachts: 10,
            tours: 20,
            articles: 12,
            reviews: 30,
            inquiries: 25,
            packages: 8,
            faqs: 15,
            news: 10,
            emails: 20,
        }
    }
}

/// Values of the single settings record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub site_title: String,
    pub contact_email: String,
    pub phone_number: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: "Egipto Viajeros".to_string(),
            contact_email: "contact@egiptoviajeros.com".to_string(),
            phone_number: "+20 123 456 7890".to_string(),
        }
    }
}

/// Complete configuration of the resource store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Seed for the fixture generator; random values differ on every start when unset
    pub seed: Option<u64>,

    /// Number of records generated per resource
    pub counts: SeedCounts,

    /// Site settings record
    pub settings: SiteSettings,
}

impl StoreConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError {
                message: err.to_string(),
            },
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|err| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|err| ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration with a fixed generator seed, for reproducible fixtures
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.settings.site_title.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "settings.site_title".to_string(),
                value: self.settings.site_title.clone(),
                message: "site title must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
