use std::path::PathBuf;

use crate::i18n::Language;

#[derive(Debug, Clone)]
pub struct RankingSettings {
    /// Rows shown in the live ranking tables.
    pub live_limit: usize,
    /// Places shown per evaluation date on the history page.
    pub history_top: i64,
    /// Players without an evaluation in this many days are not ranked.
    pub recency_days: i64,
    /// z-score of the confidence band in the rating chart.
    pub ci_z: f64,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            live_limit: 100,
            history_top: 5,
            recency_days: 365,
            ci_z: 1.96,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub database_path: String,
    pub data_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: "DATA.DB".to_string(),
            data_dir: PathBuf::from("."),
        }
    }
}

impl StorageSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LanguageSettings {
    pub pages: Language,
    pub endpoints: Language,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            pages: Language::Zh,
            endpoints: Language::En,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub ranking: RankingSettings,
    pub storage: StorageSettings,
    pub languages: LanguageSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self {
            storage: StorageSettings::from_env(),
            ..Self::default()
        }
    }

    pub fn with_storage(database_path: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage: StorageSettings {
                database_path: database_path.into(),
                data_dir: data_dir.into(),
            },
            ..Self::default()
        }
    }
}
