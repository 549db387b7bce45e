use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::{AppState, GenderParams, PlayerParams, SnapshotParams};
use crate::api::models::{
    ErrorPayload, HealthResponse, HistoryEntry, PlayerInfo, PlayerResponse, RatingHistoryItem,
    SnapshotEntry,
};
use crate::domain::Gender;

// Failures are answered with HTTP 200 and an in-band payload; the pages
// read `error` / `success` rather than the status code.

pub async fn history_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GenderParams>,
) -> Response {
    let lang = state.endpoint_language(params.lang.as_deref());
    let gender = Gender::from_query(params.gender.as_deref());

    match state.dashboard.history(gender).await {
        Ok(dates) => {
            let entries: Vec<HistoryEntry> = dates.into_iter().map(HistoryEntry::from).collect();
            Json(entries).into_response()
        }
        Err(e) => Json(ErrorPayload::new(e.localized(lang))).into_response(),
    }
}

pub async fn player_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerParams>,
) -> Json<PlayerResponse> {
    let lang = state.endpoint_language(params.lang.as_deref());

    match state.dashboard.player(params.id.as_deref()).await {
        Ok(profile) => Json(PlayerResponse {
            success: true,
            message: String::new(),
            ratings: profile.ratings.iter().map(RatingHistoryItem::from).collect(),
            player: Some(PlayerInfo::from(profile.player)),
        }),
        Err(e) => Json(PlayerResponse::failure(e.localized(lang))),
    }
}

pub async fn snapshot_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SnapshotParams>,
) -> Response {
    let lang = state.endpoint_language(params.lang.as_deref());
    let gender = Gender::from_query(params.gender.as_deref());

    match state.dashboard.snapshot(gender, params.date.as_deref()).await {
        Ok(rows) => {
            let entries: Vec<SnapshotEntry> = rows.into_iter().map(SnapshotEntry::from).collect();
            Json(entries).into_response()
        }
        Err(e) => Json(ErrorPayload::new(e.localized(lang))).into_response(),
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
