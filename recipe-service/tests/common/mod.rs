use recipe_service::config::{MongoConfig, RecipeConfig, StoreBackend, StoreConfig};
use recipe_service::services::MongoDb;
use recipe_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub mongo: Option<(MongoDb, String)>,
}

fn test_config(backend: StoreBackend, database: String) -> RecipeConfig {
    RecipeConfig {
        common: CoreConfig { port: 0 }, // Random port for testing
        mongodb: MongoConfig {
            uri: std::env::var("TEST_MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database,
        },
        store: StoreConfig { backend },
    }
}

impl TestApp {
    /// Spawn the service on a random port with the in-memory store.
    pub async fn spawn() -> Self {
        let config = test_config(StoreBackend::Memory, "unused".to_string());
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        Self::launch(app, None).await
    }

    /// Spawn the service against a fresh MongoDB database.
    pub async fn spawn_with_mongo() -> Self {
        let db_name = format!("recipe_test_{}", Uuid::new_v4());
        let config = test_config(StoreBackend::MongoDb, db_name.clone());

        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .expect("Failed to connect to MongoDB");
        let app = Application::with_store(config, Arc::new(db.clone()))
            .await
            .expect("Failed to build test application");

        Self::launch(app, Some((db, db_name))).await
    }

    async fn launch(app: Application, mongo: Option<(MongoDb, String)>) -> Self {
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            client,
            mongo,
        }
    }

    pub async fn create(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/create", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn select_all(&self) -> Vec<serde_json::Value> {
        self.client
            .get(format!("{}/api/selectAll", self.address))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse JSON")
    }

    pub async fn update(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .put(format!("{}/api/updateById", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete(&self, id: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}/api/deleteById", self.address))
            .query(&[("id", id)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Drop the per-test database, if any.
    pub async fn cleanup(&self) {
        if let Some((db, db_name)) = &self.mongo {
            let _ = db.client().database(db_name).drop(None).await;
        }
    }
}

pub fn pancakes() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "name": "Pancakes",
        "type": "breakfast",
        "calories": 520,
        "ingredients": ["flour", "egg", "milk"],
        "day": "Sunday"
    })
}
