//! Liveness, index and static asset behaviour of the gateway.

use axum::http::{header, Request, StatusCode};
use axum::body::Body;
use chrono::DateTime;
use serde_json::Value;

mod common;

use common::{asset_root, gateway, gateway_config, get, send};

const UPSTREAM: &str = "http://127.0.0.1:9";

#[tokio::test]
async fn test_health_reports_ok() {
    let assets = asset_root(&[]);
    let app = gateway(gateway_config(UPSTREAM, assets.path()));

    let (status, headers, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "frontend");
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_health_timestamps_do_not_go_backwards() {
    let assets = asset_root(&[]);
    let app = gateway(gateway_config(UPSTREAM, assets.path()));

    let mut previous = None;
    for _ in 0..5 {
        let (_, _, body) = send(&app, get("/health")).await;
        let json: Value = serde_json::from_slice(&body).unwrap();
        let ts = DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).unwrap();
        if let Some(prev) = previous {
            assert!(ts >= prev);
        }
        previous = Some(ts);
    }
}

#[tokio::test]
async fn test_health_not_shadowed_by_asset() {
    let assets = asset_root(&[("health", "static health file")]);
    let app = gateway(gateway_config(UPSTREAM, assets.path()));

    let (status, _, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_configured_service_name() {
    let assets = asset_root(&[]);
    let mut config = gateway_config(UPSTREAM, assets.path());
    config.liveness.service = "monitor-ui".into();
    let app = gateway(config);

    let (_, _, body) = send(&app, get("/health")).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["service"], "monitor-ui");
}

#[tokio::test]
async fn test_root_serves_index() {
    let assets = asset_root(&[("index.html", "<html>OK</html>")]);
    let app = gateway(gateway_config(UPSTREAM, assets.path()));

    let (status, headers, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"<html>OK</html>");
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
}

#[tokio::test]
async fn test_root_prefers_designated_index() {
    let assets = asset_root(&[
        ("index.html", "<html>directory index</html>"),
        ("app.html", "<html>designated</html>"),
    ]);
    let mut config = gateway_config(UPSTREAM, assets.path());
    config.assets.index = "app.html".into();
    let app = gateway(config);

    let (status, _, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"<html>designated</html>");

    let (status, _, body) = send(&app, get("/index.html")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"<html>directory index</html>");
}

#[tokio::test]
async fn test_static_file_with_content_type() {
    let assets = asset_root(&[
        ("index.html", "<html>OK</html>"),
        ("css/style.css", "body { margin: 0 }"),
        ("js/app.js", "console.log(1)"),
    ]);
    let app = gateway(gateway_config(UPSTREAM, assets.path()));

    let (status, headers, body) = send(&app, get("/css/style.css")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"body { margin: 0 }");
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/css"));

    let (status, headers, _) = send(&app, get("/js/app.js")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .contains("javascript"));
}

#[tokio::test]
async fn test_missing_file_is_404() {
    let assets = asset_root(&[("index.html", "<html>OK</html>")]);
    let app = gateway(gateway_config(UPSTREAM, assets.path()));

    let (status, _, _) = send(&app, get("/does-not-exist.xyz")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_index_is_404() {
    let assets = asset_root(&[]);
    let app = gateway(gateway_config(UPSTREAM, assets.path()));

    let (status, _, _) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_traversal_outside_root_is_refused() {
    let outer = asset_root(&[("secret.txt", "top secret"), ("www/index.html", "ok")]);
    let app = gateway(gateway_config(UPSTREAM, &outer.path().join("www")));

    let (status, _, body) = send(&app, get("/../secret.txt")).await;
    assert_ne!(status, StatusCode::OK);
    assert_ne!(&body[..], b"top secret");
}

#[tokio::test]
async fn test_prefix_lookalike_is_not_proxied() {
    let assets = asset_root(&[]);
    let app = gateway(gateway_config(UPSTREAM, assets.path()));

    let (status, _, _) = send(&app, get("/apix")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_on_every_response() {
    let assets = asset_root(&[("index.html", "<html>OK</html>")]);
    let app = gateway(gateway_config(UPSTREAM, assets.path()));

    for uri in ["/health", "/", "/does-not-exist.xyz"] {
        let request = Request::builder()
            .uri(uri)
            .header(header::ORIGIN, "http://dashboard.example")
            .body(Body::empty())
            .unwrap();
        let (_, headers, _) = send(&app, request).await;
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*", "missing on {uri}");
    }
}

#[tokio::test]
async fn test_preflight_answered_locally() {
    let assets = asset_root(&[]);
    let app = gateway(gateway_config(UPSTREAM, assets.path()));

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/servers")
        .header(header::ORIGIN, "http://dashboard.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&app, request).await;

    assert!(status.is_success());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_request_id_assigned_and_kept() {
    let assets = asset_root(&[]);
    let app = gateway(gateway_config(UPSTREAM, assets.path()));

    let (_, headers, _) = send(&app, get("/health")).await;
    let id = headers["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "client-chosen")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(&app, request).await;
    assert_eq!(headers["x-request-id"], "client-chosen");
}
