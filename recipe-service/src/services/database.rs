use crate::models::{Recipe, RecipePatch};
use crate::services::store::{parse_object_id, RecipeStore};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, bson::oid::ObjectId, Client as MongoClient, Collection, Database};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub fn recipes(&self) -> Collection<Recipe> {
        self.db.collection("recipes")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl RecipeStore for MongoDb {
    async fn find_all(&self) -> Result<Vec<Recipe>, AppError> {
        let cursor = self.recipes().find(doc! {}, None).await.map_err(|e| {
            tracing::error!("Failed to list recipes: {}", e);
            AppError::from(e)
        })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect recipes: {}", e);
            AppError::from(e)
        })
    }

    async fn insert(&self, mut recipe: Recipe) -> Result<Recipe, AppError> {
        recipe.object_id = Some(ObjectId::new());

        self.recipes()
            .insert_one(&recipe, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert recipe: {}", e);
                AppError::from(e)
            })?;

        Ok(recipe)
    }

    async fn update_by_id(&self, id: &str, patch: &RecipePatch) -> Result<(), AppError> {
        let oid = parse_object_id(id)?;
        let set = patch.to_set_document()?;
        // MongoDB rejects an empty `$set`.
        if set.is_empty() {
            return Ok(());
        }

        let result = self
            .recipes()
            .update_one(doc! { "_id": oid }, doc! { "$set": set }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update recipe {}: {}", id, e);
                AppError::from(e)
            })?;

        tracing::debug!(
            recipe_id = %id,
            matched = result.matched_count,
            "Recipe update applied"
        );
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let oid = parse_object_id(id)?;

        let result = self
            .recipes()
            .delete_one(doc! { "_id": oid }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete recipe {}: {}", id, e);
                AppError::from(e)
            })?;

        tracing::debug!(recipe_id = %id, deleted = result.deleted_count, "Recipe delete applied");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
