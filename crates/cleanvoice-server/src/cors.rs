use std::sync::Arc;

use axum::{extract::Request, middleware::Next, response::Response};
use cleanvoice_config::{AnyOrArray, CorsConfig};
use http::{
    HeaderMap, HeaderValue,
    header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
        ACCESS_CONTROL_MAX_AGE, ORIGIN, VARY,
    },
};

/// Append CORS allow headers to every response
///
/// tower-http's `CorsLayer` intercepts preflights with its own 200 reply,
/// but the extension contract pins `OPTIONS` at 204 with an empty body, so
/// the headers are applied here instead and the preflight stays a regular
/// route.
pub async fn cors_middleware(config: Arc<CorsConfig>, request: Request, next: Next) -> Response {
    let origin = request.headers().get(ORIGIN).cloned();

    let mut response = next.run(request).await;
    apply_allow_headers(&config, origin.as_ref(), response.headers_mut());

    response
}

fn apply_allow_headers(config: &CorsConfig, origin: Option<&HeaderValue>, headers: &mut HeaderMap) {
    match &config.origins {
        AnyOrArray::Any => {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        }
        AnyOrArray::List(allowed) => {
            // Echo the origin only when it is on the list; the response
            // then varies by origin for caches
            if let Some(origin) = origin
                && let Ok(value) = origin.to_str()
                && allowed.iter().any(|candidate| candidate == value)
            {
                headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
                headers.append(VARY, HeaderValue::from_static("origin"));
            }
        }
    }

    if let Some(value) = list_header(&config.methods) {
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, value);
    }

    if let Some(value) = list_header(&config.headers) {
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, value);
    }

    if let Some(max_age) = config.max_age_duration() {
        headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from(max_age.as_secs()));
    }
}

fn list_header(value: &AnyOrArray) -> Option<HeaderValue> {
    match value {
        AnyOrArray::Any => Some(HeaderValue::from_static("*")),
        AnyOrArray::List(items) if items.is_empty() => None,
        AnyOrArray::List(items) => HeaderValue::from_str(&items.join(", ")).ok(),
    }
}
