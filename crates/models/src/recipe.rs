use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A free-form recipe note paired with a drink suggestion.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub recipe: String,
    #[serde(default)]
    pub image_uri: Option<String>,
    #[serde(default)]
    pub pairing_drink: String,
}

/// Editable form of a recipe, validated before it reaches the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub ingredients: Vec<String>,
    pub recipe: String,
    pub image_uri: Option<String>,
    pub pairing_drink: String,
}

impl RecipeDraft {
    /// A note needs at least one ingredient or some recipe text.
    pub fn validate(&self) -> Result<(), ModelError> {
        let has_ingredient = self.ingredients.iter().any(|i| !i.trim().is_empty());
        if !has_ingredient && self.recipe.trim().is_empty() {
            return Err(ModelError::Validation("recipe needs ingredients or text".into()));
        }
        Ok(())
    }

    pub fn into_recipe(self) -> Result<Recipe, ModelError> {
        self.validate()?;
        Ok(Recipe {
            ingredients: self
                .ingredients
                .into_iter()
                .filter(|i| !i.trim().is_empty())
                .collect(),
            recipe: self.recipe,
            image_uri: self.image_uri.filter(|uri| !uri.is_empty()),
            pairing_drink: self.pairing_drink,
        })
    }
}
