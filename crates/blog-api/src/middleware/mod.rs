//! Tower middleware for the HTTP server
//!
//! Every route gets request ids, tracing and a timeout. API routes also get
//! CORS and a global rate limit.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use blog_common::{CorsConfig, RateLimitConfig};
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level, Span};

use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Requests running longer than this get a 503
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, fn(&Request<Body>) -> Span> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as fn(&Request<Body>) -> Span)
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

/// Request id, tracing and timeout
///
/// The id is set before the span is made so it shows up in every log line.
pub fn apply_middleware(router: Router<AppState>) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
            .layer(PropagateRequestIdLayer::new(request_id_header()))
            .layer(trace_layer())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                REQUEST_TIMEOUT,
            )),
    )
}

/// [`apply_middleware`] plus CORS and the global rate limiter
pub fn apply_middleware_with_config(
    router: Router<AppState>,
    rate_limit: &RateLimitConfig,
    cors: &CorsConfig,
    is_production: bool,
) -> Router<AppState> {
    let router = apply_middleware(router.layer(cors_layer(cors, is_production)));

    // Outermost, so throttled requests never reach tracing or handlers
    let limiter = GovernorConfigBuilder::default()
        .per_second(rate_limit.requests_per_second.into())
        .burst_size(rate_limit.burst)
        .key_extractor(GlobalKeyExtractor)
        .finish();

    match limiter {
        Some(config) => router.layer(GovernorLayer {
            config: Arc::new(config),
        }),
        None => {
            warn!(
                requests_per_second = rate_limit.requests_per_second,
                burst = rate_limit.burst,
                "Rate limiter disabled: rate and burst must be non-zero"
            );
            router
        }
    }
}

fn cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            request_id_header(),
        ])
        .expose_headers([request_id_header()]);

    match (is_production, config.allowed_origins.is_empty()) {
        (false, true) => {
            warn!("CORS: no origins configured, allowing any origin");
            layer.allow_origin(Any)
        }
        (true, true) => {
            warn!("CORS: no origins configured in production, browser requests will be blocked");
            layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
        }
        (_, false) => {
            let origins: Vec<HeaderValue> = config
                .allowed_origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            info!(count = origins.len(), "CORS: allowing configured origins");
            layer.allow_origin(AllowOrigin::list(origins))
        }
    }
}
