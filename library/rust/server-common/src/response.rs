//! Unified API response envelope.
//!
//! Every HTTP API in the platform returns the same envelope shape:
//! `{ "code": 0, "message": "ok", "success": true, "data": ... }`.
//! The `data` field is omitted from the wire when no payload is attached.
//!
//! Code conventions are deliberately not enforced: services may return the
//! well-known [`codes`] or define their own ranges. The only fixed rule is
//! that `success` tells consumers whether `data` is meaningful.

use serde::{Deserialize, Serialize};

/// Well-known response codes shared across services.
///
/// Nothing in the envelope enforces these; they are the default convention.
pub mod codes {
    /// The request was handled successfully.
    pub const OK: i32 = 0;
    /// Generic failure with no more specific code.
    pub const ERROR: i32 = 1;
}

/// ResponseEnvelope is the read-only contract every API response satisfies.
///
/// Handlers and middleware that only need to inspect a response (logging,
/// metrics, error translation) should accept this trait rather than the
/// concrete [`ApiResponse`].
pub trait ResponseEnvelope<T> {
    /// Service-defined response code.
    fn code(&self) -> i32;

    /// Human-readable message.
    fn message(&self) -> &str;

    /// Whether the request succeeded and `data` is meaningful.
    fn is_success(&self) -> bool;

    /// The payload, when one is attached.
    fn data(&self) -> Option<&T>;
}

/// ApiResponse is the concrete envelope returned by platform services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success envelope carrying a payload.
    pub fn ok(data: T) -> Self {
        Self {
            code: codes::OK,
            message: "ok".to_string(),
            success: true,
            data: Some(data),
        }
    }

    /// Create a success envelope with a custom message and no payload.
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            code: codes::OK,
            message: message.into(),
            success: true,
            data: None,
        }
    }

    /// Create a failure envelope with a service-defined code.
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            success: false,
            data: None,
        }
    }

    /// Attach a payload to an existing envelope.
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }
}

impl<T> ResponseEnvelope<T> for ApiResponse<T> {
    fn code(&self) -> i32 {
        self.code
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn is_success(&self) -> bool {
        self.success
    }

    fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}

// --- axum integration ---

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        // Failure envelopes still ship with HTTP 200 -- the in-band `code`
        // carries the outcome, matching the platform's API conventions.
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}
