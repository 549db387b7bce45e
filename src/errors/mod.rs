use thiserror::Error;

use crate::i18n::Language;

/// Failures a dashboard request can end in. Each one is reported in-band
/// with a localized message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid player id")]
    InvalidId,

    #[error("player not found")]
    PlayerNotFound,

    #[error("invalid date")]
    InvalidDate,

    #[error("no rankings for date")]
    DateNotFound,

    #[error("database error: {0:#}")]
    Database(#[from] anyhow::Error),
}

impl ApiError {
    pub fn message_key(&self) -> &'static str {
        match self {
            ApiError::InvalidId => "invalid_id",
            ApiError::PlayerNotFound => "player_not_found",
            ApiError::InvalidDate => "invalid_date",
            ApiError::DateNotFound => "date_not_found",
            ApiError::Database(_) => "db_error",
        }
    }

    pub fn localized(&self, lang: Language) -> String {
        match self {
            ApiError::Database(e) => format!("{}{:#}", lang.t(self.message_key()), e),
            _ => lang.t(self.message_key()).to_string(),
        }
    }
}

/// Context message for a failed query against `table`.
pub fn query_context(table: &str) -> String {
    format!("Failed to query {}", table)
}
