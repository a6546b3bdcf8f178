use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};
use uuid::Uuid;

/// DELETE /items/:id handler - Remove an item
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "UUID of the item")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    state.store.delete(id).await?;

    tracing::info!("Deleted item with id: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
