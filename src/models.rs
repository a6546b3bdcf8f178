use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client-supplied fields for creating or replacing an item
///
/// The id is never part of the input; the store mints it.
#[derive(Serialize, Deserialize, Debug, Clone, utoipa::ToSchema)]
pub struct ItemInput {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A stored item
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, utoipa::ToSchema)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub tags: Vec<String>,
}

/// Query parameters for the list endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ListQuery {
    pub tag: Option<String>,
}

/// Response type for the root endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
