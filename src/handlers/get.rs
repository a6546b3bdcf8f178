use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};
use uuid::Uuid;

/// GET /items/:id handler - Retrieve an item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "UUID of the item")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    let item = state.store.get(id).await?;

    tracing::info!("Retrieved item with id: {}", id);
    Ok((StatusCode::OK, Json(item)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::app;
    use axum::{Router, body::Body, http::Request};
    use tower::ServiceExt;

    async fn create_item(app: &Router) -> Item {
        let body = serde_json::json!({
            "name": "Pen",
            "price": 1.5,
            "tags": ["office"]
        });
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_get_endpoint_success() {
        let app = app(AppState::new());

        let created = create_item(&app).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/items/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let item: Item = serde_json::from_slice(&body).unwrap();
        assert_eq!(item, created);
    }

    #[tokio::test]
    async fn test_get_endpoint_not_found() {
        let app = app(AppState::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/items/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.error, "Item not found");
    }

    #[tokio::test]
    async fn test_get_endpoint_invalid_uuid() {
        let app = app(AppState::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/items/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("Invalid UUID format"));
    }
}
