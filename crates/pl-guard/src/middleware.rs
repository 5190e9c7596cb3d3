use crate::rate_limiter::RateLimiter;
use crate::scanner::SuspiciousPatternScanner;

use pl_core::LogContext;
use pl_telemetry::EventLogger;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, json};

/// Largest body prefix read for pattern scanning
const MAX_SCAN_BODY_BYTES: usize = 64 * 1024;

/// Paths that bypass the guard entirely
const ALLOWLIST: &[&str] = &["/health", "/live", "/ready"];
const ALLOWLIST_PREFIXES: &[&str] = &["/static/", "/assets/"];

/// Header values replaced before a request snapshot is logged
const REDACTED_HEADERS: &[&str] = &["authorization", "cookie", "x-api-key"];

/// Per-request gate: rate limiter, suspicious-pattern scanner, and
/// audit logger, run ahead of routing for every API request.
pub struct RequestGuard {
    limiter: RateLimiter,
    scanner: SuspiciousPatternScanner,
    logger: Arc<EventLogger>,
}

impl RequestGuard {
    pub fn new(limiter: RateLimiter, logger: Arc<EventLogger>) -> Self {
        Self {
            limiter,
            scanner: SuspiciousPatternScanner::default(),
            logger,
        }
    }
}

fn is_allowlisted(path: &str) -> bool {
    ALLOWLIST.contains(&path)
        || ALLOWLIST_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
}

/// Client address for rate limiting: first hop of `X-Forwarded-For`,
/// falling back to the socket address.
fn client_ip(request: &Request) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn redacted_headers(request: &Request) -> Map<String, serde_json::Value> {
    let mut headers = Map::new();
    for (name, value) in request.headers() {
        let shown = if REDACTED_HEADERS.contains(&name.as_str()) {
            "[redacted]".to_string()
        } else {
            value.to_str().unwrap_or("[binary]").to_string()
        };
        headers.insert(name.to_string(), json!(shown));
    }
    headers
}

/// Axum middleware entry point. Layer it with
/// `middleware::from_fn_with_state(guard, request_guard)`.
pub async fn request_guard(
    State(guard): State<Arc<RequestGuard>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if is_allowlisted(&path) {
        return next.run(request).await;
    }

    let ip = client_ip(&request);

    if guard.limiter.check(&ip).await.is_err() {
        let window_secs = guard.limiter.config().window_secs;
        guard
            .logger
            .security(
                &format!("Rate limit exceeded for {ip}"),
                LogContext {
                    ip: Some(ip),
                    path: Some(path),
                    ..LogContext::default()
                },
            )
            .await;

        let mut response = (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": "Too many requests"})),
        )
            .into_response();
        if let Ok(value) = HeaderValue::from_str(&window_secs.to_string()) {
            response.headers_mut().insert(header::RETRY_AFTER, value);
        }
        return response;
    }

    let mut request = request;
    if path.starts_with("/api") {
        let (scanned, suspicious) = scan_request(&guard, request, &ip, &path).await;
        request = scanned;

        // Suspicious matches are alert-only; enforcement stays disabled:
        // if suspicious.is_some() {
        //     return (
        //         StatusCode::FORBIDDEN,
        //         Json(json!({"error": "Request blocked"})),
        //     )
        //         .into_response();
        // }
        let _ = suspicious;

        let method = request.method().to_string();
        let query = request.uri().query().unwrap_or("").to_string();
        let mut metadata = Map::new();
        metadata.insert("method".into(), json!(method));
        metadata.insert("query".into(), json!(query));

        guard
            .logger
            .info(
                &format!("API request: {} {}", request.method(), path),
                LogContext {
                    ip: Some(ip),
                    path: Some(path),
                    user_agent: request
                        .headers()
                        .get(header::USER_AGENT)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                    metadata: Some(metadata),
                    ..LogContext::default()
                },
            )
            .await;
    }

    next.run(request).await
}

/// Check the URL and, for non-GET requests, a bounded body prefix
/// against the pattern set. A match is logged with a redacted request
/// snapshot; the raw body is never logged. Returns the (possibly
/// re-buffered) request and the matched pattern.
async fn scan_request(
    guard: &RequestGuard,
    request: Request,
    ip: &str,
    path: &str,
) -> (Request, Option<&'static str>) {
    let url = request.uri().to_string();
    let mut matched = guard.scanner.scan(&url);

    let mut has_body = false;
    let request = if request.method() != Method::GET {
        let (parts, body) = request.into_parts();
        // Best-effort read; an unreadable body is passed through unscanned
        let bytes = to_bytes(body, MAX_SCAN_BODY_BYTES).await.unwrap_or_default();
        has_body = !bytes.is_empty();

        if matched.is_none() {
            let text = String::from_utf8_lossy(&bytes);
            matched = guard.scanner.scan(&text);
        }

        Request::from_parts(parts, Body::from(bytes))
    } else {
        request
    };

    if let Some(pattern) = matched {
        let mut metadata = Map::new();
        metadata.insert("method".into(), json!(request.method().to_string()));
        metadata.insert("url".into(), json!(url));
        metadata.insert("headers".into(), json!(redacted_headers(&request)));
        metadata.insert("has_body".into(), json!(has_body));
        metadata.insert("pattern".into(), json!(pattern));

        guard
            .logger
            .security(
                "Suspicious request pattern detected",
                LogContext {
                    ip: Some(ip.to_string()),
                    path: Some(path.to_string()),
                    metadata: Some(metadata),
                    ..LogContext::default()
                },
            )
            .await;
    }

    (request, matched)
}
