use crate::models::{Item, ListQuery};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Query, extract::State, http::StatusCode};

/// GET /items handler - List items
///
/// With `tag` set to a non-empty string, only items whose tag sequence
/// contains that exact string are returned. Result order is unspecified.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    params(
        ("tag" = Option<String>, Query, description = "Filter by exact tag membership")
    ),
    responses(
        (status = 200, description = "List of items", body = Vec<Item>)
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> (StatusCode, Json<Vec<Item>>) {
    let items = state.store.list(query.tag.as_deref()).await;

    tracing::info!("Listed {} items (tag filter: {:?})", items.len(), query.tag);
    (StatusCode::OK, Json(items))
}
