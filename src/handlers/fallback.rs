use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback for unmatched paths and unsupported methods on known paths
pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    tracing::debug!("No route for {} {}", method, uri);
    ApiError::RouteNotFound
}
