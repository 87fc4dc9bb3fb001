use crate::error::ApiError;
use crate::models::{ItemListResponse, MessageResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/items handler - List all items in insertion order
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items", body = ItemListResponse),
        (status = 500, description = "Internal error", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ItemListResponse>), ApiError> {
    let data = state.store.list()?;

    tracing::info!("Listed {} items", data.len());
    Ok((
        StatusCode::OK,
        Json(ItemListResponse {
            success: true,
            data,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use crate::store::ItemStore;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn setup_test_app(store: ItemStore) -> Router {
        Router::new()
            .route(routes::ITEMS, get(list_handler))
            .with_state(AppState::new(store))
    }

    async fn list(app: Router) -> ItemListResponse {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/items")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_list_endpoint_seeded() {
        let response_json = list(setup_test_app(ItemStore::seeded())).await;

        assert!(response_json.success);
        assert_eq!(
            response_json.data,
            vec![
                Item {
                    id: 1,
                    name: "Item 1".to_string(),
                    description: "First item".to_string(),
                },
                Item {
                    id: 2,
                    name: "Item 2".to_string(),
                    description: "Second item".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_list_endpoint_empty() {
        let response_json = list(setup_test_app(ItemStore::default())).await;

        assert!(response_json.success);
        assert!(response_json.data.is_empty());
    }

    #[tokio::test]
    async fn test_list_reflects_store_changes() {
        let store = ItemStore::seeded();
        store.create("Item 3".to_string(), String::new()).unwrap();
        store.delete(1).unwrap();

        let response_json = list(setup_test_app(store)).await;
        let ids: Vec<i64> = response_json.data.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
