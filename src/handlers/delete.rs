use crate::error::ApiError;
use crate::models::{parse_item_id, MessageResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /api/items/:id handler - Remove an item
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Numeric item id")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "Item not found", body = MessageResponse),
        (status = 500, description = "Internal error", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Some(id) = parse_item_id(&id_str) else {
        return Err(ApiError::ItemNotFound(id_str));
    };

    if !state.store.delete(id)? {
        return Err(ApiError::ItemNotFound(id_str));
    }

    tracing::info!("Successfully deleted item with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(MessageResponse::ok("Item deleted successfully")),
    ))
}
