//! Application startup and lifecycle management.

use crate::config::{RecipeConfig, StoreBackend};
use crate::handlers;
use crate::services::{InMemoryRecipeStore, MongoDb, RecipeStore};
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::request_id_middleware;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/api/selectAll", get(handlers::select_all_recipes))
        .route("/api/deleteById", delete(handlers::delete_recipe_by_id))
        .route("/api/updateById", put(handlers::update_recipe_by_id))
        .route("/api/create", post(handlers::create_recipe))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Open the store selected by configuration. MongoDB is pinged so an
/// unreachable server fails start-up rather than the first request.
pub async fn connect_store(config: &RecipeConfig) -> Result<Arc<dyn RecipeStore>, AppError> {
    match config.store.backend {
        StoreBackend::MongoDb => {
            let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to connect to MongoDB: {}", e);
                    e
                })?;
            db.health_check().await?;
            Ok(Arc::new(db))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory recipe store; data is lost on restart");
            Ok(Arc::new(InMemoryRecipeStore::new()))
        }
    }
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: RecipeConfig) -> Result<Self, AppError> {
        let store = connect_store(&config).await?;
        Self::with_store(config, store).await
    }

    /// Build the application around an already opened store.
    pub async fn with_store(
        config: RecipeConfig,
        store: Arc<dyn RecipeStore>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Recipe service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(store),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_with_shutdown(std::future::pending()).await
    }

    /// Serve until `signal` resolves, then drain in-flight requests.
    pub async fn run_with_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = build_router(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(signal)
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
