//! Canonical path redirects through the full middleware stack.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use worksheets_site::config::SiteConfig;

mod common;

fn location(response: &axum::response::Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn test_collapses_slashes_with_permanent_redirect() {
    let router = common::router(SiteConfig::default());
    let res = common::send(router, common::navigation("/grade-1//worksheets/")).await;

    assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&res), Some("http://w.test/grade-1/worksheets"));
    assert!(common::body_string(res).await.is_empty());
}

#[tokio::test]
async fn test_strips_trailing_dot() {
    let router = common::router(SiteConfig::default());
    let res = common::send(router, common::navigation("/about.")).await;

    assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&res), Some("http://w.test/about"));
}

#[tokio::test]
async fn test_query_string_is_preserved() {
    let router = common::router(SiteConfig::default());
    let res = common::send(router, common::navigation("/math//?grade=2&sort=new")).await;

    assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&res), Some("http://w.test/math?grade=2&sort=new"));
}

#[tokio::test]
async fn test_canonical_paths_are_served() {
    for path in ["/faq", "/site.webmanifest", "/build/main.js", "/fonts//inter/", "/v1.2"] {
        let router = common::router(SiteConfig::default());
        let res = common::send(router, common::navigation(path)).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{path}");
        assert_eq!(location(&res), None, "{path}");
    }
}

#[tokio::test]
async fn test_homepage_with_query_is_served() {
    let router = common::router(SiteConfig::default());
    let res = common::send(router, common::navigation("/?x=1")).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(location(&res), None);
}

#[tokio::test]
async fn test_non_get_methods_pass_through() {
    for method in [Method::POST, Method::HEAD, Method::PUT] {
        let router = common::router(SiteConfig::default());
        let mut req = common::navigation("/grade-1//worksheets/");
        *req.method_mut() = method.clone();
        let res = common::send(router, req).await;
        assert_ne!(res.status(), StatusCode::PERMANENT_REDIRECT, "{method}");
        assert_eq!(location(&res), None, "{method}");
    }
}

#[tokio::test]
async fn test_non_document_requests_pass_through() {
    let router = common::router(SiteConfig::default());
    let req = Request::builder()
        .uri("/api//items/")
        .header("host", "w.test")
        .header("accept", "application/json")
        .header("sec-fetch-dest", "empty")
        .body(Body::empty())
        .unwrap();
    let res = common::send(router, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(location(&res), None);
}

#[tokio::test]
async fn test_accept_header_alone_marks_a_document() {
    let router = common::router(SiteConfig::default());
    let req = Request::builder()
        .uri("/reading/")
        .header("host", "w.test")
        .header("accept", "text/html")
        .body(Body::empty())
        .unwrap();
    let res = common::send(router, req).await;
    assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&res), Some("http://w.test/reading"));
}

#[tokio::test]
async fn test_trusted_forwarded_headers_shape_location() {
    let mut config = SiteConfig::default();
    config.normalize.trust_forwarded_headers = true;
    let router = common::router(config);

    let mut req = common::navigation("/grade-1//worksheets/");
    req.headers_mut()
        .insert("x-forwarded-proto", "https".parse().unwrap());
    req.headers_mut()
        .insert("x-forwarded-host", "iloveworksheets.com".parse().unwrap());

    let res = common::send(router, req).await;
    assert_eq!(
        location(&res),
        Some("https://iloveworksheets.com/grade-1/worksheets")
    );
}

#[tokio::test]
async fn test_forwarded_headers_ignored_by_default() {
    let router = common::router(SiteConfig::default());
    let mut req = common::navigation("/about.");
    req.headers_mut()
        .insert("x-forwarded-host", "evil.test".parse().unwrap());
    let res = common::send(router, req).await;
    assert_eq!(location(&res), Some("http://w.test/about"));
}

#[tokio::test]
async fn test_extra_exempt_prefix() {
    let mut config = SiteConfig::default();
    config.normalize.exempt_prefixes.push("/downloads/".into());
    let router = common::router(config);
    let res = common::send(router, common::navigation("/downloads//grade-1/")).await;
    assert_eq!(location(&res), None);
}

#[tokio::test]
async fn test_disabled_normalizer_never_redirects() {
    let mut config = SiteConfig::default();
    config.normalize.enabled = false;
    let router = common::router(config);
    let res = common::send(router, common::navigation("/grade-1//worksheets/")).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(location(&res), None);
}

#[tokio::test]
async fn test_request_without_host_passes_through() {
    let router = common::router(SiteConfig::default());
    let mut req = common::navigation("/about.");
    req.headers_mut().remove("host");
    let res = common::send(router, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_host_with_path_characters_passes_through() {
    for host in ["w.test/x/", "w.test?"] {
        let router = common::router(SiteConfig::default());
        let mut req = common::navigation("/faq");
        req.headers_mut().insert("host", host.parse().unwrap());
        let res = common::send(router, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{host}");
        assert_eq!(location(&res), None, "{host}");
    }
}

#[tokio::test]
async fn test_redirect_over_the_wire() {
    let (addr, shutdown) = common::spawn_server(SiteConfig::default()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/grade-1//worksheets/?tab=math"))
        .header("accept", "text/html")
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), 308);
    let location = res.headers()[reqwest::header::LOCATION].to_str().unwrap();
    assert_eq!(location, format!("http://{addr}/grade-1/worksheets?tab=math"));
    assert!(res.bytes().await.unwrap().is_empty());

    shutdown.trigger();
}
