//! Translation of [`CorsConfig`] into a `tower-http` layer.

use anyhow::{bail, Context, Result};
use axum::http::{HeaderName, HeaderValue, Method};
use opd_insights_config::{AllowList, CorsConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

/// Builds the CORS layer for `config`.
///
/// Browsers refuse a literal `*` on credentialed requests, so "any" combined
/// with credentials mirrors whatever the request asked for instead.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let credentials = config.allow_credentials;

    let origin = match &config.allow_origins {
        AllowList::Any if credentials => AllowOrigin::mirror_request(),
        AllowList::Any => AllowOrigin::from(Any),
        AllowList::Only(origins) => AllowOrigin::list(parse_all(origins, "origin", |o| {
            HeaderValue::from_str(o).ok()
        })?),
    };

    let methods = match &config.allow_methods {
        AllowList::Any if credentials => AllowMethods::mirror_request(),
        AllowList::Any => AllowMethods::from(Any),
        AllowList::Only(methods) => AllowMethods::list(parse_all(methods, "method", |m| {
            Method::from_bytes(m.as_bytes()).ok()
        })?),
    };

    let headers = match &config.allow_headers {
        AllowList::Any if credentials => AllowHeaders::mirror_request(),
        AllowList::Any => AllowHeaders::from(Any),
        AllowList::Only(headers) => AllowHeaders::list(parse_all(headers, "header", |h| {
            HeaderName::from_bytes(h.as_bytes()).ok()
        })?),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(credentials)
        .max_age(config.max_age))
}

fn parse_all<T>(
    values: &[String],
    kind: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>> {
    values
        .iter()
        .map(|value| {
            // `*` inside an explicit list is rejected by tower-http at request time.
            if value.trim() == "*" {
                bail!("CORS {kind} list may not contain '*'; use AllowList::Any");
            }
            parse(value.trim()).with_context(|| format!("invalid CORS {kind}: {value:?}"))
        })
        .collect()
}
