use anyhow::{Context, Result};
use log::info;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Gender, LastInfo, RankingEntry};

pub const LAST_INFO_FILE: &str = "LAST_INFO.JSON";

/// The static JSON files published next to the database.
#[derive(Debug, Clone)]
pub struct StaticStore {
    data_dir: PathBuf,
}

impl StaticStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn load_ranking(&self, gender: Gender) -> Result<Option<Vec<RankingEntry>>> {
        self.read_json_opt(&self.build_path(gender.ranking_file()))
    }

    pub fn save_ranking(&self, gender: Gender, entries: &[RankingEntry]) -> Result<()> {
        let file_path = self.build_path(gender.ranking_file());
        self.write_json(&file_path, entries)?;
        info!("Saved {} ranking entries to {}", entries.len(), file_path.display());
        Ok(())
    }

    pub fn load_last_info(&self) -> Result<Option<LastInfo>> {
        self.read_json_opt(&self.build_path(LAST_INFO_FILE))
    }

    pub fn save_last_info(&self, last_info: &LastInfo) -> Result<()> {
        let file_path = self.build_path(LAST_INFO_FILE);
        self.write_json(&file_path, last_info)?;
        info!("Saved update times to {}", file_path.display());
        Ok(())
    }

    /// Raw bytes of a published file, served as-is.
    pub fn read_raw(&self, file_name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.build_path(file_name);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(bytes))
    }

    fn build_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    // Writes go through a temp file so readers never see a partial file.
    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }

    fn read_json_opt<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }
}
