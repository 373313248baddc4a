use mongodb::bson::{self, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// A recipe as stored in the `recipes` collection.
///
/// Nothing is validated: every scalar field may be absent, in which case it
/// is left out of the stored document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
}

impl Recipe {
    /// Overwrite every field the patch carries, leaving the rest untouched.
    pub fn apply(&mut self, patch: &RecipePatch) {
        if let Some(id) = patch.id {
            self.id = Some(id);
        }
        if let Some(name) = &patch.name {
            self.name = Some(name.clone());
        }
        if let Some(category) = &patch.category {
            self.category = Some(category.clone());
        }
        if let Some(calories) = patch.calories {
            self.calories = Some(calories);
        }
        if let Some(ingredients) = &patch.ingredients {
            self.ingredients = ingredients.clone();
        }
        if let Some(day) = &patch.day {
            self.day = Some(day.clone());
        }
    }
}

/// A partial recipe used for field-wise updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecipePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
}

impl RecipePatch {
    pub fn is_empty(&self) -> bool {
        self == &RecipePatch::default()
    }

    /// The body of a `$set` update covering only the supplied fields.
    pub fn to_set_document(&self) -> Result<Document, bson::ser::Error> {
        bson::to_document(self)
    }
}
