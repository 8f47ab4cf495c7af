use axum::http::StatusCode;
use movebrasil::api::{self, AppState};
use movebrasil::db::{init_db, seed_demo_data};
use movebrasil::{Repository, SeedOutcome};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

async fn setup_state() -> (AppState, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();

    let pool = init_db(&db_path).await.expect("init_db failed");
    let outcome = seed_demo_data(&pool).await.expect("seed failed");
    assert!(matches!(outcome, SeedOutcome::Seeded { .. }));

    let repo = Arc::new(Repository::new(pool));
    (AppState::new(repo), temp_dir)
}

async fn setup_test_app() -> (axum::Router, TempDir) {
    let (state, temp_dir) = setup_state().await;
    (api::create_router(state), temp_dir)
}

fn write_assets() -> TempDir {
    let assets = TempDir::new().unwrap();
    std::fs::write(
        assets.path().join("index.html"),
        "<!doctype html><title>MoveBrasil</title>",
    )
    .unwrap();
    std::fs::write(assets.path().join("script.js"), "carregarLinhas();").unwrap();
    assets
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    (status, body)
}

async fn get_json(app: axum::Router, uri: &str) -> serde_json::Value {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "GET {} failed", uri);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_root_is_health_check() {
    let (app, _temp) = setup_test_app().await;

    let json = get_json(app, "/").await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "MoveBrasil API no ar");
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (app, _temp) = setup_test_app().await;

    let (status, _) = get(app, "/onibus").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_fresh_store_serves_three_lines() {
    let (app, _temp) = setup_test_app().await;

    let json = get_json(app, "/linhas").await;
    let lines = json.as_array().unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["codigo"], "201");
    assert_eq!(lines[0]["nome"], "Benedito Bentes / Centro");
    assert_eq!(lines[0]["horarios"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_fresh_store_serves_five_schedules() {
    let (app, _temp) = setup_test_app().await;

    let lines = get_json(app.clone(), "/linhas").await;
    let line_223_id = lines
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["codigo"] == "223")
        .unwrap()["id"]
        .clone();

    let json = get_json(app, "/horarios").await;
    let schedules = json.as_array().unwrap();
    assert_eq!(schedules.len(), 5);

    let trapiche = schedules
        .iter()
        .find(|s| s["linha_id"] == line_223_id && s["parada"]["nome"] == "Terminal Trapiche")
        .expect("schedule for line 223 at Terminal Trapiche");
    assert_eq!(trapiche["status_transito"], "moderado");
}

#[tokio::test]
async fn test_fresh_store_serves_map_entries_per_schedule() {
    let (app, _temp) = setup_test_app().await;

    let json = get_json(app, "/paradas/mapa").await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 5);

    let orla = entries
        .iter()
        .find(|e| e["nome"] == "Orla da Ponta Verde")
        .unwrap();
    assert_eq!(orla["lotacao"], "baixa");
    assert_eq!(orla["transito"], "livre");
}

#[tokio::test]
async fn test_restart_does_not_reseed() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();

    let pool = init_db(&db_path).await.unwrap();
    seed_demo_data(&pool).await.unwrap();
    pool.close().await;

    let pool = init_db(&db_path).await.unwrap();
    let outcome = seed_demo_data(&pool).await.unwrap();
    assert_eq!(outcome, SeedOutcome::AlreadySeeded);

    let app = api::create_router(AppState::new(Arc::new(Repository::new(pool))));
    let json = get_json(app, "/linhas").await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_storage_failure_is_500() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.unwrap();
    sqlx::query("DROP TABLE horarios")
        .execute(&pool)
        .await
        .unwrap();
    let app = api::create_router(AppState::new(Arc::new(Repository::new(pool))));

    let (status, body) = get(app, "/horarios").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_static_assets_served_under_static() {
    let (state, _temp) = setup_state().await;
    let assets = write_assets();
    let app = api::create_router_with_static_assets(state, assets.path());

    let (status, body) = get(app.clone(), "/static/index.html").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("MoveBrasil"));

    let (status, body) = get(app.clone(), "/static/script.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"carregarLinhas();");

    let (status, _) = get(app.clone(), "/static/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Static hosting never replaces the JSON root.
    let json = get_json(app, "/").await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_static_directory_serves_index_html() {
    let (state, _temp) = setup_state().await;
    let assets = write_assets();
    let app = api::create_router_with_static_assets(state, assets.path());

    let (status, body) = get(app, "/static/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        "<!doctype html><title>MoveBrasil</title>"
    );
}

#[tokio::test]
async fn test_static_assets_carry_cors_headers() {
    let (state, _temp) = setup_state().await;
    let assets = write_assets();
    let app = api::create_router_with_static_assets(state, assets.path());

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/static/script.js")
        .header("origin", "http://localhost:5500")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_static_assets_absent_without_static_dir() {
    let (app, _temp) = setup_test_app().await;

    let (status, _) = get(app, "/static/index.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
