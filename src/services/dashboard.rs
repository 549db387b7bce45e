use anyhow::Context;
use log::error;

use crate::config::settings::RankingSettings;
use crate::database::{self, DbConn, DbPool, HistoryRow, PlayerRow, SnapshotRow};
use crate::domain::dates::{format_date, parse_date};
use crate::domain::{Gender, RatingPoint};
use crate::errors::ApiError;

/// Players at the top of one evaluation date.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryDate {
    pub date: String,
    pub players: Vec<HistoryRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub player: PlayerRow,
    pub gender: Gender,
    pub ratings: Vec<RatingPoint>,
}

/// Read-side queries behind both the JSON endpoints and the pages.
#[derive(Clone)]
pub struct DashboardService {
    pool: DbPool,
    settings: RankingSettings,
}

impl DashboardService {
    pub fn new(pool: DbPool, settings: RankingSettings) -> Self {
        Self { pool, settings }
    }

    pub fn settings(&self) -> &RankingSettings {
        &self.settings
    }

    pub async fn history(&self, gender: Gender) -> Result<Vec<HistoryDate>, ApiError> {
        let top = self.settings.history_top;
        let rows = self
            .with_connection(move |conn| database::history::list_top_ranks(conn, gender, top))
            .await
            .inspect_err(|e| error!("History query for {} failed: {:#}", gender.as_str(), e))?;
        Ok(group_by_date(rows))
    }

    pub async fn player(&self, raw_id: Option<&str>) -> Result<PlayerProfile, ApiError> {
        let player_id = parse_player_id(raw_id)?;

        let profile = self
            .with_connection(move |conn| {
                let Some(player) = database::players::find_by_id(conn, player_id)? else {
                    return Ok(None);
                };
                let gender = Gender::from_player_code(&player.gender);
                let ratings = database::ratings::list_by_player(conn, gender, player_id)?;
                Ok(Some(PlayerProfile {
                    player,
                    gender,
                    ratings,
                }))
            })
            .await
            .inspect_err(|e| error!("Player query for {} failed: {:#}", player_id, e))?;

        profile.ok_or(ApiError::PlayerNotFound)
    }

    pub async fn snapshot(
        &self,
        gender: Gender,
        raw_date: Option<&str>,
    ) -> Result<Vec<SnapshotRow>, ApiError> {
        let eval_date = raw_date
            .filter(|value| !value.trim().is_empty())
            .and_then(|value| parse_date(value).ok())
            .map(format_date)
            .ok_or(ApiError::InvalidDate)?;

        let rows = self
            .with_connection(move |conn| {
                if database::snapshots::count_for_date(conn, gender, &eval_date)? == 0 {
                    return Ok(None);
                }
                database::snapshots::list_for_date(conn, gender, &eval_date).map(Some)
            })
            .await
            .inspect_err(|e| error!("Snapshot query for {} failed: {:#}", gender.as_str(), e))?;

        rows.ok_or(ApiError::DateNotFound)
    }

    async fn with_connection<T, F>(&self, query: F) -> anyhow::Result<T>
    where
        F: FnOnce(&DbConn) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = database::get_connection(&pool)?;
            query(&conn)
        })
        .await
        .context("Database task failed")?
    }
}

/// Positive integer id, as typed into the address bar.
pub fn parse_player_id(raw: Option<&str>) -> Result<i64, ApiError> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
        .ok_or(ApiError::InvalidId)
}

/// Groups rows already ordered by date into one entry per date.
pub fn group_by_date(rows: Vec<HistoryRow>) -> Vec<HistoryDate> {
    let mut dates: Vec<HistoryDate> = Vec::new();
    for row in rows {
        match dates.last_mut() {
            Some(current) if current.date == row.eval_date => current.players.push(row),
            _ => dates.push(HistoryDate {
                date: row.eval_date.clone(),
                players: vec![row],
            }),
        }
    }
    dates
}
