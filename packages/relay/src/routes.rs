//! HTTP surface. Every path and method lands on one handler, mirroring a
//! single-function deployment.
use std::sync::Arc;

use audioforge_domain::{ClipOwner, RelayError};
use axum::{Json, Router};
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::relay::Relay;
use crate::response::{FailureResponse, SynthesisResponse};

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const USER_ID_HEADER: &str = "x-user-id";
pub const TRACK_ID_HEADER: &str = "x-track-id";

pub fn router(relay: Relay) -> Router {
    Router::new()
        .fallback(relay_handler)
        .with_state(Arc::new(relay))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
}

async fn relay_handler(
    State(relay): State<Arc<Relay>>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    // CORS preflight
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    // Oversized or unreadable bodies still answer with the failure envelope.
    let outcome = match body {
        Ok(body) => relay.handle(&body, clip_owner(&headers)).await,
        Err(rejection) => Err(RelayError::Runtime(format!(
            "invalid request body: {}",
            rejection.body_text()
        ))),
    };

    match outcome {
        Ok(outcome) => (StatusCode::OK, Json(SynthesisResponse::from(outcome))).into_response(),
        Err(err) => {
            error!(error = %err, kind = ?err.kind(), "speech synthesis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse::from(&err)),
            )
                .into_response()
        }
    }
}

fn clip_owner(headers: &HeaderMap) -> ClipOwner {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    ClipOwner {
        user_id: header(USER_ID_HEADER).unwrap_or_else(|| ClipOwner::ANONYMOUS.to_string()),
        track_id: header(TRACK_ID_HEADER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_defaults_to_anonymous() {
        assert_eq!(clip_owner(&HeaderMap::new()), ClipOwner::default());
    }

    #[test]
    fn owner_reads_caller_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("user-42"));
        headers.insert(TRACK_ID_HEADER, HeaderValue::from_static("track-7"));

        let owner = clip_owner(&headers);
        assert_eq!(owner.user_id, "user-42");
        assert_eq!(owner.track_id.as_deref(), Some("track-7"));
    }
}
