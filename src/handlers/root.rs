use crate::models::MessageResponse;
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET / handler - Service banner
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    ),
    tag = "system"
)]
pub async fn root_handler() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "item-api is up".to_string(),
        }),
    )
}
