//! In-memory recipe store
//!
//! Records are kept in insertion order behind a single async lock. The store
//! assigns every id; callers never choose one.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{Error, Result};

/// A named dish with an ordered ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Fields for a recipe that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl NewRecipe {
    pub fn new(name: impl Into<String>, ingredients: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

/// Replacement fields for an existing recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeUpdate {
    pub name: String,
    pub ingredients: Vec<String>,
}

fn ensure_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("`name` must not be empty".to_string()));
    }
    Ok(())
}

/// Recipes shipped with a fresh server
pub fn seed_recipes() -> Vec<NewRecipe> {
    vec![
        NewRecipe::new(
            "boiled white rice",
            ["1 cup white rice", "2 cups water", "pinch of salt"],
        ),
        NewRecipe::new(
            "milkshake",
            ["2 tbsp cocoa", "2 cups vanilla ice cream", "1 cup milk"],
        ),
    ]
}

#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding `recipes`, each with a freshly assigned id
    pub fn with_recipes(recipes: impl IntoIterator<Item = NewRecipe>) -> Result<Self> {
        let mut records = Vec::new();
        for recipe in recipes {
            ensure_name(&recipe.name)?;
            records.push(Recipe {
                id: Uuid::new_v4().to_string(),
                name: recipe.name,
                ingredients: recipe.ingredients,
            });
        }
        Ok(Self {
            recipes: RwLock::new(records),
        })
    }

    /// Snapshot of all recipes in insertion order
    pub async fn list(&self) -> Vec<Recipe> {
        self.recipes.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Recipe> {
        self.recipes.read().await.iter().find(|r| r.id == id).cloned()
    }

    pub async fn create(&self, recipe: NewRecipe) -> Result<Recipe> {
        ensure_name(&recipe.name)?;

        let created = Recipe {
            id: Uuid::new_v4().to_string(),
            name: recipe.name,
            ingredients: recipe.ingredients,
        };
        self.recipes.write().await.push(created.clone());
        Ok(created)
    }

    /// Replace name and ingredients of the recipe with `id`, keeping the id
    pub async fn update(&self, id: &str, update: RecipeUpdate) -> Result<Recipe> {
        ensure_name(&update.name)?;

        let mut recipes = self.recipes.write().await;
        let existing = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(format!("recipe {}", id)))?;

        existing.name = update.name;
        existing.ingredients = update.ingredients;
        Ok(existing.clone())
    }

    /// Remove the recipe with `id`. Returns whether anything was removed;
    /// an unknown id is not an error.
    pub async fn delete(&self, id: &str) -> bool {
        let mut recipes = self.recipes.write().await;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        recipes.len() != before
    }

    pub async fn len(&self) -> usize {
        self.recipes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.recipes.read().await.is_empty()
    }
}
