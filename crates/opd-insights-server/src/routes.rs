//! Router construction.

use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::Router;
use opd_insights_config::CorsConfig;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::cors::cors_layer;
use crate::handlers::{self, analyze, predict};

/// Builds the gateway router with tracing and CORS applied to every route,
/// fallbacks included.
pub fn router(cors: &CorsConfig) -> Result<Router> {
    let cors = cors_layer(cors)?;

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let app = Router::new()
        .route("/", get(handlers::root).fallback(handlers::method_not_allowed))
        .route(
            "/predict/opd-load",
            get(predict::opd_load).fallback(handlers::method_not_allowed),
        )
        .route(
            "/analyze/dosha-trends",
            get(analyze::dosha_trends).fallback(handlers::method_not_allowed),
        )
        .route(
            "/analyze/remedy-trends",
            get(analyze::remedy_trends).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(trace_layer)
        .layer(cors);

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, Method, StatusCode};
    use http_body_util::BodyExt;
    use opd_insights_config::AllowList;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const ORIGIN: &str = "http://localhost:5000";
    const REMEDIES: [&str; 4] = ["Arnica Montana", "Nux Vomica", "Belladonna", "Rhus Tox"];

    fn app() -> Router {
        router(&CorsConfig::default()).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, body.to_vec())
    }

    async fn get_json(app: &Router, uri: &str) -> Value {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, headers, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK, "GET {uri}");
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        serde_json::from_slice(&body).unwrap()
    }

    fn preflight(uri: &str, method: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .header(header::ORIGIN, ORIGIN)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-requested-with")
            .body(Body::empty())
            .unwrap()
    }

    fn as_u64(value: &Value, field: &str) -> u64 {
        value[field].as_u64().unwrap_or_else(|| panic!("{field} is not an integer: {value}"))
    }

    #[tokio::test]
    async fn test_root_status() {
        let body = get_json(&app(), "/").await;
        assert_eq!(body, json!({ "status": "ML Service Running" }));
    }

    #[tokio::test]
    async fn test_opd_load_over_many_calls() {
        let app = app();

        for _ in 0..1_000 {
            let body = get_json(&app, "/predict/opd-load").await;
            let current_load = as_u64(&body, "current_load");
            let next_hour = as_u64(&body, "predicted_next_hour");

            assert!((30..=60).contains(&current_load), "{body}");
            assert!((20..=50).contains(&next_hour), "{body}");

            let expected = if current_load > 45 { "High" } else { "Normal" };
            assert_eq!(body["status"], expected, "{body}");
            if current_load == 46 {
                assert_eq!(body["status"], "High");
            }
            assert_eq!(body.as_object().unwrap().len(), 3);
        }
    }

    #[tokio::test]
    async fn test_dosha_trends_over_many_calls() {
        let app = app();

        for _ in 0..300 {
            let body = get_json(&app, "/analyze/dosha-trends").await;

            assert!((30..=60).contains(&as_u64(&body, "vata")), "{body}");
            assert!((20..=40).contains(&as_u64(&body, "pitta")), "{body}");
            assert!((10..=30).contains(&as_u64(&body, "kapha")), "{body}");
            assert_eq!(body["dominant"], "Vata");
            assert_eq!(body.as_object().unwrap().len(), 4);
        }
    }

    #[tokio::test]
    async fn test_remedy_trends_over_many_calls() {
        let app = app();

        for _ in 0..300 {
            let body = get_json(&app, "/analyze/remedy-trends").await;
            let remedy = body["top_remedy"].as_str().unwrap();

            assert!(REMEDIES.contains(&remedy), "{body}");
            assert!((70..=95).contains(&as_u64(&body, "effectiveness")), "{body}");
            assert!((10..=50).contains(&as_u64(&body, "cases_treated")), "{body}");
            assert_eq!(body.as_object().unwrap().len(), 3);
        }
    }

    #[tokio::test]
    async fn test_head_is_served_like_get() {
        let request = Request::builder()
            .method(Method::HEAD)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let (status, _, body) = send(&app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let request = Request::builder().uri("/predict/nothing").body(Body::empty()).unwrap();
        let (status, _, body) = send(&app(), request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "detail": "Not Found" }));
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/analyze/dosha-trends")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"answers":[1,2,3]}"#))
            .unwrap();
        let (status, _, body) = send(&app(), request).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "detail": "Method Not Allowed" }));
    }

    #[tokio::test]
    async fn test_preflight_allows_any_origin_and_method() {
        let app = app();

        for uri in ["/", "/predict/opd-load", "/analyze/remedy-trends", "/not-a-route"] {
            for method in ["GET", "POST", "DELETE"] {
                let (status, headers, _) = send(&app, preflight(uri, method)).await;

                assert_eq!(status, StatusCode::OK, "OPTIONS {uri}");
                assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
                assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], method);
                assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "x-requested-with");
                assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
                assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "600");
            }
        }
    }

    #[tokio::test]
    async fn test_simple_request_echoes_origin() {
        let request = Request::builder()
            .uri("/analyze/dosha-trends")
            .header(header::ORIGIN, "https://clinic.example")
            .body(Body::empty())
            .unwrap();
        let (status, headers, _) = send(&app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://clinic.example");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[tokio::test]
    async fn test_wildcard_without_credentials() {
        let config = CorsConfig { allow_credentials: false, ..CorsConfig::default() };
        let app = router(&config).unwrap();
        let (_, headers, _) = send(&app, preflight("/", "PUT")).await;

        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "*");
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    }

    #[tokio::test]
    async fn test_explicit_origin_list() {
        let config = CorsConfig {
            allow_origins: AllowList::only(["https://clinic.example"]),
            ..CorsConfig::default()
        };
        let app = router(&config).unwrap();

        let (_, headers, _) = send(&app, preflight("/", "GET")).await;
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());

        let request = Request::builder()
            .uri("/")
            .header(header::ORIGIN, "https://clinic.example")
            .body(Body::empty())
            .unwrap();
        let (_, headers, _) = send(&app, request).await;
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://clinic.example");
    }
}
