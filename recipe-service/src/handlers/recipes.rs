use crate::dtos::{
    CreateRecipeRequest, DeleteRecipeParams, MessageResponse, RecipeResponse, UpdateRecipeRequest,
};
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

#[tracing::instrument(skip(state))]
pub async fn select_all_recipes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecipeResponse>>, AppError> {
    let recipes = state.store.find_all().await?;

    Ok(Json(recipes.into_iter().map(RecipeResponse::from).collect()))
}

#[tracing::instrument(skip(state))]
pub async fn delete_recipe_by_id(
    State(state): State<AppState>,
    Query(params): Query<DeleteRecipeParams>,
) -> Result<Json<MessageResponse>, AppError> {
    match params.id.as_deref() {
        Some(id) => state.store.delete_by_id(id).await?,
        None => tracing::debug!("No recipe id supplied, nothing to delete"),
    }

    Ok(Json(MessageResponse::new("Recipe deleted successfully")))
}

#[tracing::instrument(skip(state))]
pub async fn update_recipe_by_id(
    State(state): State<AppState>,
    Json(req): Json<UpdateRecipeRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    match (req.id.as_deref(), req.recipe) {
        (Some(id), Some(patch)) if !patch.is_empty() => {
            state.store.update_by_id(id, &patch).await?;
        }
        _ => tracing::debug!("No recipe id or fields supplied, nothing to update"),
    }

    Ok(Json(MessageResponse::new("Recipe updated successfully")))
}

#[tracing::instrument(skip(state))]
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(req): Json<CreateRecipeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.store.insert(req.into()).await?;

    tracing::info!(
        recipe_id = ?recipe.object_id,
        name = ?recipe.name,
        "Recipe created"
    );

    Ok((StatusCode::CREATED, Json(RecipeResponse::from(recipe))))
}
