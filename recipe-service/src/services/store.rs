use crate::models::{Recipe, RecipePatch};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// Persistence for the recipe collection. Each operation is a single store
/// call; lookups by id use the store-assigned `_id`.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Recipe>, AppError>;

    /// Persist a new recipe and return it with its assigned `_id`.
    async fn insert(&self, recipe: Recipe) -> Result<Recipe, AppError>;

    /// Apply `patch` to the recipe with `_id == id`. A missing document is
    /// not an error.
    async fn update_by_id(&self, id: &str, patch: &RecipePatch) -> Result<(), AppError>;

    /// Remove the recipe with `_id == id`. A missing document is not an error.
    async fn delete_by_id(&self, id: &str) -> Result<(), AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidObjectId(id.to_string()))
}
