use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    InfoResponse, Item, ItemInput, ItemListResponse, ItemResponse, MessageResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "items-api",
        version = "1.0.0",
        description = "A minimal in-memory CRUD service for items"
    ),
    paths(
        handlers::info::info_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Item,
            ItemInput,
            ItemResponse,
            ItemListResponse,
            MessageResponse,
            InfoResponse
        )
    ),
    tags(
        (name = "info", description = "Service info and health"),
        (name = "items", description = "Item operations")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json handler - Serve the OpenAPI document
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_item_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/items"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/items/{id}"));

        let item_path = &doc.paths.paths["/api/items/{id}"];
        assert!(item_path.get.is_some());
        assert!(item_path.put.is_some());
        assert!(item_path.delete.is_some());
    }
}
