use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stores user-configurable preferences and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Flat deduction rate applied to new gross incomes when the record
    /// carries no explicit rate.
    #[serde(default = "Config::default_tax_rate_value")]
    pub default_tax_rate: f64,
    #[serde(default = "Config::default_backup_retention")]
    pub backup_retention: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_opened_household: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for household files. Defaults to
    /// `~/Documents/Hearth`.
    pub default_household_root: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for backups. Defaults to
    /// `~/Documents/Hearth/backups`.
    pub default_backup_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            default_tax_rate: Self::default_tax_rate_value(),
            backup_retention: Self::default_backup_retention(),
            last_opened_household: None,
            default_household_root: None,
            default_backup_root: None,
        }
    }
}

impl Config {
    pub fn default_tax_rate_value() -> f64 {
        0.25
    }

    pub fn default_backup_retention() -> usize {
        5
    }

    pub fn resolve_default_household_root(&self) -> PathBuf {
        if let Some(path) = &self.default_household_root {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Hearth")
    }

    pub fn resolve_default_backup_root(&self) -> PathBuf {
        if let Some(path) = &self.default_backup_root {
            return path.clone();
        }

        self.resolve_default_household_root().join("backups")
    }
}
