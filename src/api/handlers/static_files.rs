use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use log::error;
use std::sync::Arc;

use super::AppState;
use crate::domain::Gender;
use crate::store::{StaticStore, LAST_INFO_FILE};

pub async fn men_ranking(State(state): State<Arc<AppState>>) -> Response {
    serve_json(state.store.clone(), Gender::Men.ranking_file()).await
}

pub async fn women_ranking(State(state): State<Arc<AppState>>) -> Response {
    serve_json(state.store.clone(), Gender::Women.ranking_file()).await
}

pub async fn last_info(State(state): State<Arc<AppState>>) -> Response {
    serve_json(state.store.clone(), LAST_INFO_FILE).await
}

/// Serves a published file byte for byte.
async fn serve_json(store: StaticStore, file_name: &'static str) -> Response {
    let result = tokio::task::spawn_blocking(move || store.read_raw(file_name)).await;

    match result {
        Ok(Ok(Some(bytes))) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Ok(Ok(None)) => (StatusCode::NOT_FOUND, format!("{} not found", file_name)).into_response(),
        Ok(Err(e)) => {
            error!("Failed to read {}: {:#}", file_name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response()
        }
        Err(e) => {
            error!("Read task for {} failed: {}", file_name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response()
        }
    }
}
