mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shorturl::api::handlers::shorten_handler;
use sqlx::PgPool;

fn shorten_server(state: shorturl::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/shorturl", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_shorten_success_echoes_submitted_url(pool: PgPool) {
    let server = shorten_server(common::create_test_state(pool));

    let submitted = "http://localhost:8080/some/page?q=1";
    let response = server.post("/api/shorturl").form(&[("url", submitted)]).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["original_url"], submitted);

    let short = body["short_url"].as_str().unwrap();
    assert!(short.chars().all(|c| c.is_ascii_digit()));
    assert!(short.parse::<u32>().unwrap() < 100_000);
}

#[sqlx::test]
async fn test_shorten_preserves_url_exactly(pool: PgPool) {
    let server = shorten_server(common::create_test_state(pool));

    // Uppercase host, default port, trailing slash: all must survive as
    // submitted.
    let submitted = "http://LOCALHOST:80/Path/";
    let response = server.post("/api/shorturl").form(&[("url", submitted)]).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["original_url"], submitted);
}

#[sqlx::test]
async fn test_shorten_rejects_non_http_scheme(pool: PgPool) {
    let server = shorten_server(common::create_test_state(pool));

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "ftp://invalid.scheme")])
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "invalid url" })
    );
}

#[sqlx::test]
async fn test_shorten_rejects_missing_scheme(pool: PgPool) {
    let server = shorten_server(common::create_test_state(pool));

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "www.example.com")])
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "invalid url" })
    );
}

#[sqlx::test]
async fn test_shorten_rejects_unresolvable_host(pool: PgPool) {
    let server = shorten_server(common::create_test_state(pool));

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://this-domain-does-not-exist.invalid")])
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "invalid url" })
    );
}

#[sqlx::test]
async fn test_shorten_same_url_twice_gets_distinct_codes(pool: PgPool) {
    let server = shorten_server(common::create_test_state(pool));

    let submitted = "http://localhost:8080/repeated";

    let first = server.post("/api/shorturl").form(&[("url", submitted)]).await;
    let second = server.post("/api/shorturl").form(&[("url", submitted)]).await;

    first.assert_status_ok();
    second.assert_status_ok();

    let code1 = first.json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();
    let code2 = second.json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();

    // Every create files a fresh record; the unique index only forbids
    // reusing a code, not a URL.
    assert_ne!(code1, code2);
}
