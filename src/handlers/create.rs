use crate::error::ApiError;
use crate::extract::Payload;
use crate::models::{ItemInput, ItemResponse, MessageResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /api/items handler - Create an item
///
/// The id is assigned by the store. A missing, null or empty `name` is
/// rejected before the store is touched.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = ItemInput,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Name is required", body = MessageResponse),
        (status = 500, description = "Internal error", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Payload(input): Payload<ItemInput>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let name = match input.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::NameRequired),
    };

    let item = state
        .store
        .create(name, input.description.flatten().unwrap_or_default())?;

    tracing::info!("Successfully created item with id: {}", item.id);
    Ok((StatusCode::CREATED, Json(ItemResponse::ok(item))))
}
