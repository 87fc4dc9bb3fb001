use crate::error::ApiError;
use crate::extract::Payload;
use crate::models::{parse_item_id, ItemInput, ItemResponse, MessageResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::ItemChanges;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// PUT /api/items/:id handler - Partially update an item
///
/// An empty `name` leaves the stored name alone. A `description` that is
/// present in the body is always applied: an empty string or `null` clears it.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Numeric item id")
    ),
    request_body = ItemInput,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 404, description = "Item not found", body = MessageResponse),
        (status = 500, description = "Internal error", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Payload(input): Payload<ItemInput>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let Some(id) = parse_item_id(&id_str) else {
        return Err(ApiError::ItemNotFound(id_str));
    };

    let changes = ItemChanges {
        name: input.name,
        description: input.description.map(Option::unwrap_or_default),
    };

    match state.store.update(id, changes)? {
        Some(item) => {
            tracing::info!("Successfully updated item with id: {}", id);
            Ok((StatusCode::OK, Json(ItemResponse::ok(item))))
        }
        None => Err(ApiError::ItemNotFound(id_str)),
    }
}
