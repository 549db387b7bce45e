use axum::http::{header, HeaderMap};
use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::i18n::Language;
use crate::services::dashboard::DashboardService;
use crate::store::StaticStore;

pub mod data;
pub mod pages;
pub mod static_files;

pub struct AppState {
    pub dashboard: DashboardService,
    pub store: StaticStore,
    pub config: AppConfig,
}

impl AppState {
    /// JSON endpoints only honour the `lang` parameter.
    pub fn endpoint_language(&self, lang: Option<&str>) -> Language {
        Language::negotiate(lang, None, self.config.languages.endpoints)
    }

    /// Pages honour `lang`, then the language cookie.
    pub fn page_language(&self, lang: Option<&str>, headers: &HeaderMap) -> Language {
        let cookie = headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok());
        Language::negotiate(lang, cookie, self.config.languages.pages)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenderParams {
    pub gender: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerParams {
    pub id: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SnapshotParams {
    pub gender: Option<String>,
    pub date: Option<String>,
    pub lang: Option<String>,
}
