mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use common::{TestApp, host_header};
use regex::Regex;
use url_proxy::domain::repositories::LinkRepository;
use url_proxy::utils::public_origin::PublicOrigin;

fn short_url_regex() -> Regex {
    Regex::new(r"^http://sho\.rt/p/([a-z0-9]{6})$").unwrap()
}

#[tokio::test]
async fn test_new_link_returns_short_url() {
    let app = TestApp::new();
    let (name, value) = host_header();

    let response = app
        .server
        .get("/new")
        .add_query_param("url", "https://example.com/video.mp4")
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    assert!(
        response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );

    let body = response.text();
    let captures = short_url_regex()
        .captures(&body)
        .unwrap_or_else(|| panic!("unexpected short URL: {body}"));

    let link = app.repository.find_by_code(&captures[1]).await.unwrap().unwrap();
    assert_eq!(link.target_url, "https://example.com/video.mp4");
}

#[tokio::test]
async fn test_new_link_accepts_post() {
    let app = TestApp::new();
    let (name, value) = host_header();

    let response = app
        .server
        .post("/new")
        .add_query_param("url", "http://example.com/a?b=c")
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    assert!(short_url_regex().is_match(&response.text()));
    assert_eq!(app.link_count().await, 1);
}

#[tokio::test]
async fn test_new_link_missing_url() {
    let app = TestApp::new();
    let (name, value) = host_header();

    let response = app.server.get("/new").add_header(name, value).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(!response.text().is_empty());
    assert_eq!(app.link_count().await, 0);
}

#[tokio::test]
async fn test_new_link_rejects_non_http_scheme() {
    let app = TestApp::new();

    for url in ["ftp://example.com/file", "example.com", "javascript:alert(1)", ""] {
        let (name, value) = host_header();
        let response = app
            .server
            .get("/new")
            .add_query_param("url", url)
            .add_header(name, value)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    assert_eq!(app.link_count().await, 0);
}

#[tokio::test]
async fn test_new_link_uses_configured_base_url() {
    let app = TestApp::with_origin(PublicOrigin::new(
        Some("https://media.example.org/".to_string()),
        false,
    ));

    let response = app
        .server
        .get("/new")
        .add_query_param("url", "https://example.com/")
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(
        Regex::new(r"^https://media\.example\.org/p/[a-z0-9]{6}$")
            .unwrap()
            .is_match(&body),
        "unexpected short URL: {body}"
    );
}

#[tokio::test]
async fn test_new_link_uses_forwarded_headers_behind_proxy() {
    let app = TestApp::with_origin(PublicOrigin::new(None, true));
    let (name, value) = host_header();

    let response = app
        .server
        .get("/new")
        .add_query_param("url", "https://example.com/")
        .add_header(name, value)
        .add_header(
            HeaderName::from_static("x-forwarded-proto"),
            HeaderValue::from_static("https"),
        )
        .add_header(
            HeaderName::from_static("x-forwarded-host"),
            HeaderValue::from_static("public.example"),
        )
        .await;

    response.assert_status_ok();
    assert!(response.text().starts_with("https://public.example/p/"));
}

#[tokio::test]
async fn test_new_link_distinct_codes_for_same_url() {
    let app = TestApp::new();
    let mut urls = Vec::new();

    for _ in 0..5 {
        let (name, value) = host_header();
        let response = app
            .server
            .get("/new")
            .add_query_param("url", "https://example.com/same")
            .add_header(name, value)
            .await;
        response.assert_status_ok();
        urls.push(response.text());
    }

    urls.sort();
    urls.dedup();
    assert_eq!(urls.len(), 5);
    assert_eq!(app.link_count().await, 5);
}
