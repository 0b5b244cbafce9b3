//! HTTP error handling
//!
//! The API has exactly two failure modes, both 404s with a fixed JSON
//! envelope: `{"error": "Node not found"}` and
//! `{"error": "Parent node not found"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use roadmap_core::RoadmapError;

/// JSON error envelope returned by the API.
///
/// Serializes as `{"error": "<message>"}`; the status code rides alongside
/// and is not part of the body.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// User-facing error message
    pub error: String,

    #[serde(skip)]
    status: StatusCode,
}

impl ApiError {
    /// Create a 404 error with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<RoadmapError> for ApiError {
    fn from(err: RoadmapError) -> Self {
        match err {
            RoadmapError::NodeNotFound { .. } => ApiError::not_found("Node not found"),
            RoadmapError::ParentNotFound { .. } => ApiError::not_found("Parent node not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_messages_are_fixed() {
        let err: ApiError = RoadmapError::node_not_found("n1").into();
        assert_eq!(err.error, "Node not found");

        let err: ApiError = RoadmapError::parent_not_found("n1").into();
        assert_eq!(err.error, "Parent node not found");
    }

    #[test]
    fn test_envelope_serializes_message_only() {
        let err = ApiError::not_found("Node not found");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value, serde_json::json!({"error": "Node not found"}));
    }
}
