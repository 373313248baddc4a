use crate::models::{Recipe, RecipePatch};
use crate::services::store::{parse_object_id, RecipeStore};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use tokio::sync::RwLock;

/// Process-local recipe store, kept in insertion order.
#[derive(Default)]
pub struct InMemoryRecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn find_all(&self) -> Result<Vec<Recipe>, AppError> {
        Ok(self.recipes.read().await.clone())
    }

    async fn insert(&self, mut recipe: Recipe) -> Result<Recipe, AppError> {
        recipe.object_id = Some(ObjectId::new());
        self.recipes.write().await.push(recipe.clone());
        Ok(recipe)
    }

    async fn update_by_id(&self, id: &str, patch: &RecipePatch) -> Result<(), AppError> {
        let oid = parse_object_id(id)?;
        let mut recipes = self.recipes.write().await;
        if let Some(recipe) = recipes.iter_mut().find(|r| r.object_id == Some(oid)) {
            recipe.apply(patch);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let oid = parse_object_id(id)?;
        self.recipes
            .write()
            .await
            .retain(|r| r.object_id != Some(oid));
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
