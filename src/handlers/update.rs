use crate::error::{ApiError, ErrorResponse};
use crate::models::{Item, ItemInput};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};
use uuid::Uuid;

/// PUT /items/:id handler - Replace an item
///
/// Full replacement, not a merge: every field except the id comes from the
/// request body, so omitting `tags` clears it.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "UUID of the item")
    ),
    request_body = ItemInput,
    responses(
        (status = 200, description = "Item replaced", body = Item),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(input): Json<ItemInput>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    let item = state.store.replace(id, input).await?;

    tracing::info!("Replaced item with id: {}", id);
    Ok((StatusCode::OK, Json(item)))
}
