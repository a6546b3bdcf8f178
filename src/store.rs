use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Item, ItemInput};

/// Name length bounds, inclusive.
const NAME_MIN_LEN: usize = 1;
const NAME_MAX_LEN: usize = 50;

/// A field constraint violated by an [`ItemInput`]
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name length outside the accepted 1..=50 range
    NameLength(usize),
    /// Price below zero
    NegativePrice(f64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NameLength(len) => write!(
                f,
                "name must be between {} and {} characters, got length {}",
                NAME_MIN_LEN, NAME_MAX_LEN, len
            ),
            ValidationError::NegativePrice(price) => {
                write!(f, "price must be greater than or equal to 0, got {}", price)
            }
        }
    }
}

/// Failure modes of store operations
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Input failed a field constraint; nothing was mutated
    Validation(ValidationError),
    /// Referenced id is not present in the store
    NotFound(Uuid),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(err) => write!(f, "validation failed: {}", err),
            StoreError::NotFound(id) => write!(f, "no item with id {}", id),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Validation(err)
    }
}

/// Check the declared field constraints before any mutation
fn validate(input: &ItemInput) -> Result<(), ValidationError> {
    let name_len = input.name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name_len) {
        return Err(ValidationError::NameLength(name_len));
    }
    if input.price < 0.0 {
        return Err(ValidationError::NegativePrice(input.price));
    }
    Ok(())
}

/// Shareable in-memory item store for use across async handlers
///
/// Owns the id-to-item mapping behind an `RwLock`, so every operation is
/// atomic with respect to the map: writers are exclusive, readers never
/// observe a partially applied mutation. Ids are minted here and never
/// accepted from callers.
#[derive(Clone, Default)]
pub struct ItemStore {
    inner: Arc<RwLock<HashMap<Uuid, Item>>>,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the input, mint a fresh v4 id, and insert the item
    ///
    /// # Errors
    /// Returns `StoreError::Validation` if a field constraint is violated;
    /// the store is unchanged in that case.
    pub async fn create(&self, input: ItemInput) -> Result<Item, StoreError> {
        validate(&input)?;
        let item = Item {
            id: Uuid::new_v4(),
            name: input.name,
            price: input.price,
            tags: input.tags,
        };
        let mut items = self.inner.write().await;
        items.insert(item.id, item.clone());
        tracing::debug!("Inserted item with id: {}", item.id);
        Ok(item)
    }

    /// List all stored items, optionally filtered by exact tag membership
    ///
    /// A `Some` filter with a non-empty string keeps only items whose `tags`
    /// contains that exact string (case-sensitive, no substring matching).
    /// Result order is unspecified.
    pub async fn list(&self, tag: Option<&str>) -> Vec<Item> {
        let items = self.inner.read().await;
        match tag {
            Some(tag) if !tag.is_empty() => items
                .values()
                .filter(|item| item.tags.iter().any(|t| t == tag))
                .cloned()
                .collect(),
            _ => items.values().cloned().collect(),
        }
    }

    /// Fetch the item for `id`
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if the id is absent.
    pub async fn get(&self, id: Uuid) -> Result<Item, StoreError> {
        let items = self.inner.read().await;
        items.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Validate the input and fully overwrite the item for `id`
    ///
    /// Replacement keeps the existing id and replaces every other field; a
    /// `tags` omitted from the input becomes the empty sequence, not the old
    /// value. No partial or merge semantics.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if the id is absent, or
    /// `StoreError::Validation` if a field constraint is violated. The
    /// stored item is unchanged on either failure.
    pub async fn replace(&self, id: Uuid, input: ItemInput) -> Result<Item, StoreError> {
        validate(&input)?;
        let mut items = self.inner.write().await;
        if !items.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        let item = Item {
            id,
            name: input.name,
            price: input.price,
            tags: input.tags,
        };
        items.insert(id, item.clone());
        tracing::debug!("Replaced item with id: {}", id);
        Ok(item)
    }

    /// Remove the item for `id`
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if the id is absent.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut items = self.inner.write().await;
        match items.remove(&id) {
            Some(_) => {
                tracing::debug!("Deleted item with id: {}", id);
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}
