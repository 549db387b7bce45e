use serde::{Deserialize, Serialize};

use crate::database::{PlayerRow, SnapshotRow};
use crate::domain::RatingPoint;
use crate::rating::format2;
use crate::services::dashboard::HistoryDate;

// Ratings and errors travel as two-decimal strings.

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryPlayer {
    pub id: i64,
    pub rank: i64,
    pub name: String,
    pub name_zh: Option<String>,
    pub rating: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub date: String,
    pub players: Vec<HistoryPlayer>,
}

impl From<HistoryDate> for HistoryEntry {
    fn from(history: HistoryDate) -> Self {
        Self {
            date: history.date,
            players: history
                .players
                .into_iter()
                .map(|row| HistoryPlayer {
                    id: row.id,
                    rank: row.rank,
                    name: row.name,
                    name_zh: row.name_zh,
                    rating: format2(row.rating),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerInfo {
    pub id: i64,
    pub name: String,
    pub name_zh: Option<String>,
    pub gender: String,
    pub yob: Option<String>,
    pub assoc: Option<String>,
    pub assoc_zh: Option<String>,
    pub ma: Option<String>,
}

impl From<PlayerRow> for PlayerInfo {
    fn from(row: PlayerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            name_zh: row.name_zh,
            gender: row.gender,
            yob: row.yob,
            assoc: row.assoc,
            assoc_zh: row.assoc_zh,
            ma: row.ma,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RatingHistoryItem {
    /// Day index since 1988-10-01.
    pub date: i64,
    pub rating: String,
    pub error: String,
}

impl From<&RatingPoint> for RatingHistoryItem {
    fn from(point: &RatingPoint) -> Self {
        Self {
            date: point.date,
            rating: format2(point.rating),
            error: format2(point.error),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerResponse {
    pub success: bool,
    pub message: String,
    pub player: Option<PlayerInfo>,
    pub ratings: Vec<RatingHistoryItem>,
}

impl PlayerResponse {
    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            player: None,
            ratings: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SnapshotEntry {
    pub rank: i64,
    pub id: i64,
    pub name: String,
    pub name_zh: Option<String>,
    pub yob: Option<String>,
    pub assoc: Option<String>,
    pub assoc_zh: Option<String>,
    pub ma: Option<String>,
    /// Same as `ma`; older pages read this key.
    pub association: Option<String>,
    pub rating: String,
    pub error: String,
}

impl From<SnapshotRow> for SnapshotEntry {
    fn from(row: SnapshotRow) -> Self {
        Self {
            rank: row.rank,
            id: row.id,
            name: row.name,
            name_zh: row.name_zh,
            yob: row.yob,
            assoc: row.assoc,
            assoc_zh: row.assoc_zh,
            association: row.ma.clone(),
            ma: row.ma,
            rating: format2(row.rating),
            error: format2(row.error),
        }
    }
}

/// In-band failure payload of the history and snapshot endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorPayload {
    pub error: bool,
    pub message: String,
}

impl ErrorPayload {
    pub fn new(message: String) -> Self {
        Self {
            error: true,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
