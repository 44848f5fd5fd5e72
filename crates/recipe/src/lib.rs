//! Read-only recipe catalog.
//!
//! The catalog is built once at startup from compiled-in data and never
//! mutated afterwards. Lookups by id are backed by an index so repeated calls
//! always return the identical record; listing preserves insertion order for
//! the catalog screen.

mod data;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use diabetcare_shared::MealSlot;

pub type RecipeId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub category: MealSlot,
    pub cook_time: String,
    pub calories: u32,
    pub carbs: u32,
    pub sugar: u32,
    pub description: String,
    pub ingredients: Vec<String>,
    pub image: String,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate recipe id {0} in catalog")]
    DuplicateId(RecipeId),
}

/// Immutable, insertion-ordered recipe table indexed by id.
pub struct Catalog {
    recipes: Vec<Recipe>,
    by_id: HashMap<RecipeId, usize>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(recipes.len());
        for (idx, recipe) in recipes.iter().enumerate() {
            if by_id.insert(recipe.id, idx).is_some() {
                return Err(CatalogError::DuplicateId(recipe.id));
            }
        }
        Ok(Self { recipes, by_id })
    }

    /// The compiled-in diabetic-friendly catalog.
    pub fn builtin() -> Self {
        Self::new(data::recipes()).expect("builtin catalog has unique ids")
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.by_id.get(&id).map(|&idx| &self.recipes[idx])
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All recipes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
