pub mod health;
pub mod recipes;

pub use health::{health_check, readiness_check};
pub use recipes::{create_recipe, delete_recipe_by_id, select_all_recipes, update_recipe_by_id};
