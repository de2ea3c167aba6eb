//! Landing page, health probe, error page and response headers.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::Value;
use worksheets_site::config::SiteConfig;
use worksheets_site::site::content::FAQS;

mod common;

#[tokio::test]
async fn test_landing_page() {
    let router = common::router(SiteConfig::default());
    let res = common::send(router, common::navigation("/")).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );

    let html = common::body_string(res).await;
    assert!(html.contains(r#"<link rel="canonical" href="https://iloveworksheets.com">"#));
    for faq in FAQS {
        assert!(html.contains(faq.question), "{}", faq.question);
    }
    assert_eq!(html.matches("application/ld+json").count(), 2);
}

#[tokio::test]
async fn test_landing_page_uses_configured_identity() {
    let mut config = SiteConfig::default();
    config.site.canonical_url = "https://staging.iloveworksheets.com".into();
    config.site.theme_color = "#ff00aa".into();
    let router = common::router(config);

    let html = common::body_string(common::send(router, common::navigation("/")).await).await;
    assert!(html.contains(r#"href="https://staging.iloveworksheets.com""#));
    assert!(html.contains(r##"content="#ff00aa""##));
    assert!(html.contains(r#""url":"https://staging.iloveworksheets.com""#));
}

#[tokio::test]
async fn test_health() {
    let router = common::router(SiteConfig::default());
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let res = common::send(router, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&common::body_string(res).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_path_gets_404_page() {
    let router = common::router(SiteConfig::default());
    let res = common::send(router, common::navigation("/grade-1/worksheets")).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let html = common::body_string(res).await;
    assert!(html.contains("<h1>404</h1>"));
    assert!(html.contains("The requested page could not be found."));
}

#[tokio::test]
async fn test_security_headers() {
    let router = common::router(SiteConfig::default());
    let res = common::send(router, common::navigation("/")).await;
    assert_eq!(res.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(res.headers()[header::X_FRAME_OPTIONS], "DENY");
    assert_eq!(
        res.headers()[header::REFERRER_POLICY],
        "strict-origin-when-cross-origin"
    );

    let mut config = SiteConfig::default();
    config.security.enable_headers = false;
    let res = common::send(common::router(config), common::navigation("/")).await;
    assert!(res.headers().get(header::X_FRAME_OPTIONS).is_none());
}

#[tokio::test]
async fn test_redirects_carry_security_headers() {
    let router = common::router(SiteConfig::default());
    let res = common::send(router, common::navigation("/faq/")).await;
    assert_eq!(res.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(res.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
}

#[tokio::test]
async fn test_request_id_is_assigned_and_echoed() {
    let router = common::router(SiteConfig::default());
    let res = common::send(router, common::navigation("/")).await;
    let id = res.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok(), "{id}");

    let router = common::router(SiteConfig::default());
    let mut req = common::navigation("/about.");
    req.headers_mut()
        .insert("x-request-id", "client-123".parse().unwrap());
    let res = common::send(router, req).await;
    assert_eq!(res.headers()["x-request-id"], "client-123");
}

#[tokio::test]
async fn test_serves_over_the_wire_and_shuts_down() {
    let (addr, shutdown) = common::spawn_server(SiteConfig::default()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/"))
        .header("accept", "text/html")
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("Worksheets by grade"));

    shutdown.trigger();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert!(client.get(format!("http://{addr}/health")).send().await.is_err());
}
