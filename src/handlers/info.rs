use crate::models::InfoResponse;
use crate::routes;
use axum::{http::StatusCode, Json};
use std::collections::BTreeMap;

/// GET / handler - Service info
///
/// Doubles as the health check: answers 200 with the list of available routes
/// whenever the process is serving.
#[utoipa::path(
    get,
    path = routes::INFO,
    responses(
        (status = 200, description = "Service is running", body = InfoResponse)
    ),
    tag = "info"
)]
pub async fn info_handler() -> (StatusCode, Json<InfoResponse>) {
    let endpoints = [
        ("GET /", "API info"),
        ("GET /api/items", "Get all items"),
        ("GET /api/items/:id", "Get item by ID"),
        ("POST /api/items", "Create new item"),
        ("PUT /api/items/:id", "Update item"),
        ("DELETE /api/items/:id", "Delete item"),
        ("GET /api-docs/openapi.json", "OpenAPI document"),
    ]
    .into_iter()
    .map(|(route, description)| (route.to_string(), description.to_string()))
    .collect::<BTreeMap<_, _>>();

    tracing::debug!("Info requested");
    (
        StatusCode::OK,
        Json(InfoResponse {
            success: true,
            message: "API is running!".to_string(),
            endpoints,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_info_endpoint() {
        let app = Router::new().route(routes::INFO, get(info_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: InfoResponse = serde_json::from_slice(&body).unwrap();
        assert!(response_json.success);
        assert_eq!(response_json.message, "API is running!");
        assert_eq!(response_json.endpoints.len(), 7);
        assert_eq!(
            response_json.endpoints.get("DELETE /api/items/:id").map(String::as_str),
            Some("Delete item")
        );
    }
}
