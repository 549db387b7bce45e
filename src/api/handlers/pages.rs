use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Response},
};
use log::{error, warn};
use std::sync::Arc;

use super::{AppState, GenderParams, PlayerParams, SnapshotParams};
use crate::domain::dates::today_index;
use crate::domain::{Gender, LastInfo, RankingEntry};
use crate::errors::ApiError;
use crate::i18n::{Language, LANGUAGE_COOKIE};
use crate::store::StaticStore;
use crate::views::player::PlayerView;
use crate::views::{self, NavItem, PageContext, TableData};

const COOKIE_MAX_AGE_SECS: u32 = 365 * 24 * 60 * 60;

pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GenderParams>,
    headers: HeaderMap,
) -> Response {
    let lang = state.page_language(params.lang.as_deref(), &headers);
    let ctx = PageContext::new(lang, NavItem::Rankings, "/index.html")
        .with_param("gender", params.gender.as_deref());

    let (men, women, last_info) = tokio::join!(
        load_ranking(state.store.clone(), Gender::Men),
        load_ranking(state.store.clone(), Gender::Women),
        load_last_info(state.store.clone()),
    );

    let html = views::rankings::render_index(
        &ctx,
        Gender::from_query(params.gender.as_deref()),
        &men,
        &women,
        last_info.as_ref(),
        state.config.ranking.live_limit,
    );
    respond(html, params.lang.as_deref())
}

pub async fn history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GenderParams>,
    headers: HeaderMap,
) -> Response {
    let lang = state.page_language(params.lang.as_deref(), &headers);
    let ctx = PageContext::new(lang, NavItem::History, "/history.html")
        .with_param("gender", params.gender.as_deref());

    let (men, women) = tokio::join!(
        state.dashboard.history(Gender::Men),
        state.dashboard.history(Gender::Women),
    );

    let top = usize::try_from(state.config.ranking.history_top).unwrap_or(0);
    let html = views::history::render_history(
        &ctx,
        Gender::from_query(params.gender.as_deref()),
        &table_data(men),
        &table_data(women),
        top,
    );
    respond(html, params.lang.as_deref())
}

pub async fn snapshot(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SnapshotParams>,
    headers: HeaderMap,
) -> Response {
    let lang = state.page_language(params.lang.as_deref(), &headers);
    let ctx = PageContext::new(lang, NavItem::History, "/snapshot.html")
        .with_param("date", params.date.as_deref())
        .with_param("gender", params.gender.as_deref());
    let active = Gender::from_query(params.gender.as_deref());
    let date = params
        .date
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let (men, women) = match date {
        Some(date) => {
            let (men, women) = tokio::join!(
                state.dashboard.snapshot(Gender::Men, Some(date)),
                state.dashboard.snapshot(Gender::Women, Some(date)),
            );
            (table_data(men), table_data(women))
        }
        None => (TableData::Rows(Vec::new()), TableData::Rows(Vec::new())),
    };

    let html = views::snapshot::render_snapshot(&ctx, date, active, &men, &women);
    respond(html, params.lang.as_deref())
}

pub async fn player(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerParams>,
    headers: HeaderMap,
) -> Response {
    let lang = state.page_language(params.lang.as_deref(), &headers);
    let ctx = PageContext::new(lang, NavItem::None, "/player.html")
        .with_param("id", params.id.as_deref());
    let settings = state.dashboard.settings();

    let raw_id = params.id.as_deref().filter(|value| !value.trim().is_empty());
    let result = match raw_id {
        Some(raw_id) => Some(state.dashboard.player(Some(raw_id)).await),
        None => None,
    };
    let view = match &result {
        None => PlayerView::NoId,
        Some(Ok(profile)) => PlayerView::Loaded(profile),
        Some(Err(e)) => PlayerView::Failed(e.localized(lang)),
    };

    let html = views::player::render_player(&ctx, &view, today_index(), settings.ci_z);
    respond(html, params.lang.as_deref())
}

/// Rows for a table, or the failure marker when the database was unreachable.
fn table_data<T>(result: Result<Vec<T>, ApiError>) -> TableData<T> {
    match result {
        Ok(rows) => TableData::Rows(rows),
        Err(ApiError::Database(_)) => TableData::Failed,
        Err(_) => TableData::Rows(Vec::new()),
    }
}

async fn load_ranking(store: StaticStore, gender: Gender) -> TableData<RankingEntry> {
    match tokio::task::spawn_blocking(move || store.load_ranking(gender)).await {
        Ok(Ok(Some(entries))) => TableData::Rows(entries),
        Ok(Ok(None)) => {
            warn!("{} has not been published", gender.ranking_file());
            TableData::Failed
        }
        Ok(Err(e)) => {
            error!("Failed to load {}: {:#}", gender.ranking_file(), e);
            TableData::Failed
        }
        Err(e) => {
            error!("Load task for {} failed: {}", gender.ranking_file(), e);
            TableData::Failed
        }
    }
}

async fn load_last_info(store: StaticStore) -> Option<LastInfo> {
    match tokio::task::spawn_blocking(move || store.load_last_info()).await {
        Ok(Ok(info)) => info,
        Ok(Err(e)) => {
            warn!("Update times unavailable: {:#}", e);
            None
        }
        Err(e) => {
            error!("Load task for update times failed: {}", e);
            None
        }
    }
}

/// HTML response; an explicit `lang` choice is remembered in a cookie.
fn respond(html: String, lang_param: Option<&str>) -> Response {
    let mut response = Html(html).into_response();
    if let Some(lang) = lang_param.and_then(Language::parse) {
        let cookie = format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            LANGUAGE_COOKIE,
            lang.as_str(),
            COOKIE_MAX_AGE_SECS
        );
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}
