pub mod recipes;

pub use recipes::{
    CreateRecipeRequest, DeleteRecipeParams, MessageResponse, RecipeResponse, UpdateRecipeRequest,
};
