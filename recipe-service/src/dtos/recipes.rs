use crate::models::{Recipe, RecipePatch};
use serde::{Deserialize, Serialize, Serializer};

/// Recipe as returned over HTTP.
///
/// `id` and `calories` are held as `f64`, matching the double the store
/// keeps, but integral values are written as JSON integers (`520`, not
/// `520.0`).
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub id: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub calories: Option<f64>,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
}

// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn serialize_number<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER => {
            serializer.serialize_i64(*v as i64)
        }
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            object_id: recipe.object_id.map(|oid| oid.to_hex()),
            id: recipe.id,
            name: recipe.name,
            category: recipe.category,
            calories: recipe.calories,
            ingredients: recipe.ingredients,
            day: recipe.day,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub id: Option<f64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub category: Option<String>,
    pub calories: Option<f64>,
    pub ingredients: Option<Vec<String>>,
    pub day: Option<String>,
}

impl From<CreateRecipeRequest> for Recipe {
    fn from(req: CreateRecipeRequest) -> Self {
        Self {
            object_id: None,
            id: req.id,
            name: req.name,
            category: req.category,
            calories: req.calories,
            ingredients: req.ingredients.unwrap_or_default(),
            day: req.day,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateRecipeRequest {
    pub id: Option<String>,
    pub recipe: Option<RecipePatch>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRecipeParams {
    pub id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
