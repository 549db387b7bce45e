use anyhow::Result;
use chrono::Utc;
use log::info;

use crate::config::settings::AppConfig;
use crate::database::{self, AccessMode, DbConn};
use crate::domain::dates::today_index;
use crate::domain::{DayIndex, Gender, RankingEntry};
use crate::rating;
use crate::store::StaticStore;

/// Regenerates the live ranking files from the stored rating history.
pub struct PublishService {
    config: AppConfig,
    store: StaticStore,
}

impl PublishService {
    pub fn new(config: AppConfig) -> Self {
        let store = StaticStore::new(&config.storage.data_dir);
        Self { config, store }
    }

    pub fn run(&self) -> Result<()> {
        self.run_for_day(today_index())
    }

    pub fn run_for_day(&self, today: DayIndex) -> Result<()> {
        info!("=== Publishing Rankings ===");
        info!(
            "Database: {}, data directory: {}",
            self.config.storage.database_path,
            self.store.data_dir().display()
        );

        let pool = database::create_pool(&self.config.storage.database_path, AccessMode::ReadOnly)?;
        let conn = database::get_connection(&pool)?;

        for gender in Gender::ALL {
            let ranking = self.build_ranking(&conn, gender, today)?;
            info!("  → Ranked {} {} players", ranking.len(), gender.as_str());
            self.store.save_ranking(gender, &ranking)?;
        }

        self.stamp_ranking_time()?;
        info!("=== Publishing Complete ===");
        Ok(())
    }

    fn build_ranking(&self, conn: &DbConn, gender: Gender, today: DayIndex) -> Result<Vec<RankingEntry>> {
        let recency_days = self.config.ranking.recency_days;
        let candidates = database::ratings::latest_since(conn, gender, today - recency_days)?;
        rating::derive_ranking(&candidates, gender, today, recency_days)
    }

    fn stamp_ranking_time(&self) -> Result<()> {
        let mut last_info = self.store.load_last_info()?.unwrap_or_default();
        last_info.ranking_time = Some(Utc::now().format("%Y-%m-%d %H:%M:%S").to_string());
        self.store.save_last_info(&last_info)
    }
}
