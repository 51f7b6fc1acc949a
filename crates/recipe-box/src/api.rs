//! Recipe API endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::store::{NewRecipe, Recipe, RecipeUpdate};
use crate::AppState;

/// Request body for POST and PUT.
///
/// Every field is optional at the deserialization layer; `validate_create`
/// and `validate_update` decide which ones are required.
#[derive(Debug, Default, Deserialize)]
pub struct RecipePayload {
    pub id: Option<String>,
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

fn missing(field: &str) -> Error {
    Error::Validation(format!("Missing `{}` in request body", field))
}

impl RecipePayload {
    /// `name` and `ingredients` are required; any `id` is ignored
    pub fn validate_create(self) -> Result<NewRecipe> {
        let name = self.name.ok_or_else(|| missing("name"))?;
        let ingredients = self.ingredients.ok_or_else(|| missing("ingredients"))?;
        Ok(NewRecipe { name, ingredients })
    }

    /// `name`, `ingredients` and `id` are required and `id` must equal the path id
    pub fn validate_update(self, path_id: &str) -> Result<RecipeUpdate> {
        let name = self.name.ok_or_else(|| missing("name"))?;
        let ingredients = self.ingredients.ok_or_else(|| missing("ingredients"))?;
        let id = self.id.ok_or_else(|| missing("id"))?;

        if id != path_id {
            return Err(Error::Validation(format!(
                "Request path id ({}) and request body id ({}) must match",
                path_id, id
            )));
        }
        Ok(RecipeUpdate { name, ingredients })
    }
}

fn parse_payload(
    payload: std::result::Result<Json<RecipePayload>, JsonRejection>,
) -> Result<RecipePayload> {
    payload
        .map(|Json(p)| p)
        .map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                Error::PayloadTooLarge(rejection.body_text())
            } else {
                Error::Validation(rejection.body_text())
            }
        })
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// List all recipes
pub async fn list_recipes(State(state): State<Arc<AppState>>) -> Json<Vec<Recipe>> {
    Json(state.store.list().await)
}

/// Create a recipe
pub async fn create_recipe(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<RecipePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>)> {
    let new_recipe = parse_payload(payload)
        .and_then(RecipePayload::validate_create)
        .inspect_err(|e| tracing::debug!("Rejected create: {}", e))?;

    let recipe = state.store.create(new_recipe).await?;
    tracing::info!(id = %recipe.id, name = %recipe.name, "Created recipe");

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Replace the name and ingredients of a recipe
pub async fn update_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<RecipePayload>, JsonRejection>,
) -> Result<Json<Recipe>> {
    let update = parse_payload(payload)
        .and_then(|p| p.validate_update(&id))
        .inspect_err(|e| tracing::debug!(id = %id, "Rejected update: {}", e))?;

    let recipe = state.store.update(&id, update).await?;
    tracing::info!(id = %recipe.id, name = %recipe.name, "Updated recipe");

    Ok(Json(recipe))
}

/// Delete a recipe. Unknown ids still answer 204.
pub async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> StatusCode {
    if state.store.delete(&id).await {
        tracing::info!(id = %id, "Deleted recipe");
    } else {
        tracing::debug!(id = %id, "Delete of unknown recipe ignored");
    }
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> RecipePayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_validate_create_requires_name() {
        let err = payload(json!({ "ingredients": ["avocado"] }))
            .validate_create()
            .unwrap_err();
        assert_eq!(err, missing("name"));
    }

    #[test]
    fn test_validate_create_requires_ingredients_key() {
        let err = payload(json!({ "name": "Guacamole" })).validate_create().unwrap_err();
        assert_eq!(err, missing("ingredients"));

        let ok = payload(json!({ "name": "Guacamole", "ingredients": [] }))
            .validate_create()
            .unwrap();
        assert!(ok.ingredients.is_empty());
    }

    #[test]
    fn test_validate_create_ignores_client_id() {
        let recipe = payload(json!({ "id": "mine", "name": "Toast", "ingredients": ["bread"] }))
            .validate_create()
            .unwrap();
        assert_eq!(recipe, NewRecipe::new("Toast", ["bread"]));
    }

    #[test]
    fn test_validate_update_requires_all_fields() {
        let err = payload(json!({ "name": "Toast", "ingredients": [] }))
            .validate_update("abc")
            .unwrap_err();
        assert_eq!(err, missing("id"));

        let err = payload(json!({ "id": "abc", "ingredients": [] }))
            .validate_update("abc")
            .unwrap_err();
        assert_eq!(err, missing("name"));
    }

    #[test]
    fn test_validate_update_rejects_mismatched_id() {
        let err = payload(json!({ "id": "other", "name": "Toast", "ingredients": [] }))
            .validate_update("abc")
            .unwrap_err();
        assert!(matches!(err, Error::Validation(msg) if msg.contains("must match")));
    }

    #[test]
    fn test_validate_update_ok() {
        let update = payload(json!({ "id": "abc", "name": "Toast", "ingredients": ["bread", "butter"] }))
            .validate_update("abc")
            .unwrap();
        assert_eq!(update.name, "Toast");
        assert_eq!(update.ingredients, ["bread", "butter"]);
    }
}
