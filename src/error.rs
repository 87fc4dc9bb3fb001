use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

use crate::models::MessageResponse;

/// Message returned for every internal fault; details stay in the logs
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// Custom error type for API endpoints
///
/// Each variant maps to an HTTP status code and a `{success: false, message}`
/// envelope. Internal faults are logged here and never echoed to the client.
#[derive(Debug)]
pub enum ApiError {
    /// No item has the requested id (the raw path segment is kept for logs)
    ItemNotFound(String),
    /// Create request without a non-empty name
    NameRequired,
    /// No route matches the request
    RouteNotFound,
    /// Request body could not be read or decoded
    MalformedBody(String),
    /// Store or other unexpected failure
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::ItemNotFound(id) => {
                tracing::debug!("Item not found with id: {}", id);
                (StatusCode::NOT_FOUND, "Item not found")
            }
            ApiError::NameRequired => (StatusCode::BAD_REQUEST, "Name is required"),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, "Route not found"),
            ApiError::MalformedBody(details) => {
                tracing::error!("Failed to read request body: {}", details);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
            ApiError::Internal(err) => {
                tracing::error!("Request failed: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, Json(MessageResponse::failure(message))).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

/// Response for a handler that panicked, used with `CatchPanicLayer::custom`
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(anyhow::anyhow!("Handler panicked: {}", details)).into_response()
}
