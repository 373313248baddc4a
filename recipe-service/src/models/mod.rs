pub mod recipe;

pub use recipe::{Recipe, RecipePatch};
