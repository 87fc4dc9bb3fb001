use axum::{
    extract::Request,
    http::{uri::PathAndQuery, Uri},
    routing::get,
    Router,
};
use tower::util::MapRequest;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, normalize_path::NormalizePath,
    trace::TraceLayer,
};

use crate::api_doc::openapi_handler;
use crate::error::handle_panic;
use crate::handlers::{
    create_handler, delete_handler, get_handler, info_handler, list_handler, not_found_handler,
    update_handler,
};
use crate::routes;
use crate::state::AppState;

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::INFO, get(info_handler))
        .route(routes::ITEMS, get(list_handler).post(create_handler))
        .route(
            routes::ITEM,
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route(routes::OPENAPI, get(openapi_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// The router wrapped in path normalization, ready to serve
pub type App = NormalizePath<MapRequest<Router, fn(Request) -> Request>>;

/// Build the served application.
///
/// Paths are matched without regard to case or a trailing slash, so
/// `/API/Items/` reaches the same handler as `/api/items`. Normalization has
/// to wrap the router rather than be layered inside it, since routing happens
/// before any `Router::layer` middleware runs.
pub fn build_app(state: AppState) -> App {
    let lowercase: fn(Request) -> Request = lowercase_path;
    NormalizePath::trim_trailing_slash(MapRequest::new(build_router(state), lowercase))
}

fn lowercase_path(mut req: Request) -> Request {
    let path = req.uri().path();
    if !path.bytes().any(|b| b.is_ascii_uppercase()) {
        return req;
    }

    let lowered = match req.uri().query() {
        Some(query) => format!("{}?{}", path.to_ascii_lowercase(), query),
        None => path.to_ascii_lowercase(),
    };
    let mut parts = req.uri().clone().into_parts();
    match lowered.parse::<PathAndQuery>() {
        Ok(path_and_query) => {
            parts.path_and_query = Some(path_and_query);
            match Uri::from_parts(parts) {
                Ok(uri) => *req.uri_mut() = uri,
                Err(e) => tracing::warn!("Failed to rebuild lowercased uri: {}", e),
            }
        }
        Err(e) => tracing::warn!("Failed to lowercase path {}: {}", lowered, e),
    }
    req
}
