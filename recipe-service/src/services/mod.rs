pub mod database;
pub mod memory;
pub mod store;

pub use database::MongoDb;
pub use memory::InMemoryRecipeStore;
pub use store::{parse_object_id, RecipeStore};
