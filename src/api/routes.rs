use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{data, pages, static_files, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/index.html", get(pages::index))
        .route("/history.html", get(pages::history))
        .route("/snapshot.html", get(pages::snapshot))
        .route("/player.html", get(pages::player))
        .route("/history_data.php", get(data::history_data))
        .route("/player_data.php", get(data::player_data))
        .route("/snapshot_data.php", get(data::snapshot_data))
        .route("/api/history", get(data::history_data))
        .route("/api/player", get(data::player_data))
        .route("/api/snapshot", get(data::snapshot_data))
        .route("/men_ranking.json", get(static_files::men_ranking))
        .route("/women_ranking.json", get(static_files::women_ranking))
        .route("/LAST_INFO.JSON", get(static_files::last_info))
        .route("/health", get(data::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::config::settings::AppConfig;
    use crate::database::fixtures;
    use crate::domain::{Gender, RankingEntry};
    use crate::services::dashboard::DashboardService;
    use crate::store::StaticStore;

    fn app() -> (TempDir, Router) {
        let (dir, pool) = fixtures::seeded_pool();
        let config = AppConfig::with_storage(
            dir.path().join("DATA.DB").to_string_lossy().into_owned(),
            dir.path(),
        );
        let state = Arc::new(AppState {
            dashboard: DashboardService::new(pool, config.ranking.clone()),
            store: StaticStore::new(dir.path()),
            config,
        });
        (dir, create_router(state))
    }

    async fn get(router: &Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }

    async fn get_json(router: &Router, uri: &str) -> Value {
        let (status, _, body) = get(router, uri).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    async fn get_html(router: &Router, uri: &str) -> String {
        let (status, _, body) = get(router, uri).await;
        assert_eq!(status, StatusCode::OK);
        String::from_utf8(body).unwrap()
    }

    #[tokio::test]
    async fn test_player_data() {
        let (_dir, router) = app();
        let json = get_json(&router, "/player_data.php?id=1").await;

        assert_eq!(json["success"], true);
        assert_eq!(json["player"]["name"], "MA Long");
        assert_eq!(json["player"]["name_zh"], "马龙");
        assert_eq!(json["player"]["assoc_zh"], "中国");
        let ratings = json["ratings"].as_array().unwrap();
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[0]["date"], 11000);
        assert_eq!(ratings[0]["rating"], "2800.00");
        assert_eq!(ratings[1]["rating"], "2850.50");
        assert_eq!(ratings[1]["error"], "35.25");
    }

    #[tokio::test]
    async fn test_player_data_failures_are_in_band() {
        let (_dir, router) = app();

        let json = get_json(&router, "/player_data.php?id=abc").await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid player ID");

        let json = get_json(&router, "/api/player?id=999&lang=zh").await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], crate::i18n::Language::Zh.t("player_not_found"));
    }

    #[tokio::test]
    async fn test_history_data_groups_by_date() {
        let (_dir, router) = app();
        let json = get_json(&router, "/history_data.php?gender=men").await;

        let dates = json.as_array().unwrap();
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0]["date"], "2020-01-12");
        assert_eq!(dates[0]["players"].as_array().unwrap().len(), 3);
        assert_eq!(dates[0]["players"][1]["rating"], "2899.99");
        assert_eq!(dates[1]["players"][0]["id"], 2);
        assert_eq!(dates[1]["players"][0]["rating"], "2901.23");
    }

    #[tokio::test]
    async fn test_unknown_gender_means_women() {
        let (_dir, router) = app();
        let json = get_json(&router, "/api/history?gender=other").await;

        assert_eq!(json[0]["players"][0]["id"], 10);
    }

    #[tokio::test]
    async fn test_snapshot_data() {
        let (_dir, router) = app();
        let json = get_json(&router, "/snapshot_data.php?gender=men&date=2020-01-05").await;

        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["id"], 2);
        assert_eq!(rows[0]["rating"], "2901.23");
        assert_eq!(rows[1]["association"], rows[1]["ma"]);
    }

    #[tokio::test]
    async fn test_snapshot_data_errors() {
        let (_dir, router) = app();

        let json = get_json(&router, "/snapshot_data.php?gender=men").await;
        assert_eq!(json["error"], true);
        assert_eq!(json["message"], "Invalid date format");

        let json = get_json(&router, "/snapshot_data.php?gender=women&date=2020-01-12").await;
        assert_eq!(json["error"], true);
        assert_eq!(json["message"], "No data available for this date");
    }

    #[tokio::test]
    async fn test_static_rankings() {
        let (dir, router) = app();

        let (status, _, _) = get(&router, "/women_ranking.json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let entry = RankingEntry {
            rank: 1,
            id: 10,
            name: "SUN Yingsha".to_string(),
            name_zh: Some("孙颖莎".to_string()),
            yob: None,
            association: Some("CHN".to_string()),
            association_zh: Some("中国".to_string()),
            rating: 2950.0,
            error: 32.0,
            adjusted_rating: Some(2918.0),
        };
        StaticStore::new(dir.path()).save_ranking(Gender::Women, &[entry]).unwrap();

        let (status, headers, body) = get(&router, "/women_ranking.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json[0]["name"], "SUN Yingsha");
    }

    #[tokio::test]
    async fn test_database_file_is_not_served() {
        let (_dir, router) = app();
        let (status, _, _) = get(&router, "/DATA.DB").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_and_health() {
        let (_dir, router) = app();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_language_query_sets_cookie() {
        let (_dir, router) = app();
        let (status, headers, body) = get(&router, "/history.html?lang=en").await;

        assert_eq!(status, StatusCode::OK);
        let cookie = headers[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("language=en;"));
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("Ranking History"));
        assert!(html.contains(">MA Long</a>"));
    }

    #[tokio::test]
    async fn test_language_cookie_is_honoured() {
        let (_dir, router) = app();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/player.html?id=1")
                    .header(header::COOKIE, "theme=dark; language=en")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<title>MA Long | Player Profile | Table Tennis WHR</title>"));
    }

    #[tokio::test]
    async fn test_pages_default_to_chinese() {
        let (_dir, router) = app();
        let html = get_html(&router, "/player.html?id=1").await;

        assert!(html.contains("<html lang=\"zh-CN\">"));
        assert!(html.contains(">马龙</h2>"));
    }

    #[tokio::test]
    async fn test_index_without_published_files() {
        let (_dir, router) = app();
        let html = get_html(&router, "/?lang=en").await;

        assert_eq!(html.matches("Error loading rankings.").count(), 2);
        assert_eq!(html.matches(">Unknown<").count(), 2);
    }

    #[tokio::test]
    async fn test_snapshot_page_selects_gender() {
        let (_dir, router) = app();
        let html = get_html(&router, "/snapshot.html?date=2020-01-05&gender=women&lang=en").await;

        assert!(html.contains("<section id=\"women\" class=\"tab-content active\">"));
        assert!(html.contains(">SUN Yingsha</a>"));
        assert!(html.contains("<span id=\"selected-date\">2020-01-05</span>"));
    }

    #[tokio::test]
    async fn test_player_page_without_id() {
        let (_dir, router) = app();
        let html = get_html(&router, "/player.html?lang=en").await;

        assert!(html.contains("No player ID provided"));
    }
}
