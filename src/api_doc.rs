use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{Item, ItemInput, MessageResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "item-api",
        version = "1.0.0",
        description = "A simple in-memory item CRUD service"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::create::create_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Item,
            ItemInput,
            MessageResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "system", description = "Service status operations"),
        (name = "items", description = "Item CRUD operations")
    )
)]
pub struct ApiDoc;
