use crate::error::ApiError;
use crate::models::{parse_item_id, ItemResponse, MessageResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /api/items/:id handler - Retrieve one item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Numeric item id")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "Item not found", body = MessageResponse),
        (status = 500, description = "Internal error", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let Some(id) = parse_item_id(&id_str) else {
        return Err(ApiError::ItemNotFound(id_str));
    };

    match state.store.get(id)? {
        Some(item) => {
            tracing::info!("Successfully retrieved item with id: {}", id);
            Ok((StatusCode::OK, Json(ItemResponse::ok(item))))
        }
        None => Err(ApiError::ItemNotFound(id_str)),
    }
}
