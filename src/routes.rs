// Route path constants - single source of truth for all API paths

pub const INFO: &str = "/";
pub const ITEMS: &str = "/api/items";
pub const ITEM: &str = "/api/items/{id}";
pub const OPENAPI: &str = "/api-docs/openapi.json";
