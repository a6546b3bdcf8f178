use crate::error::{ApiError, ErrorResponse};
use crate::models::{Item, ItemInput};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// POST /items handler - Create an item
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = ItemInput,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(input): Json<ItemInput>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = state.store.create(input).await?;

    tracing::info!("Created item with id: {}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}
