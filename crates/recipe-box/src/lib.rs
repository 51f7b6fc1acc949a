//! Recipe Box - an in-memory recipe collection served over HTTP
//!
//! - `store`: the recipe collection and its CRUD operations
//! - `api` / `router`: HTTP handlers, payload validation and routing
//! - `server`: `run_server` / `RecipeServer::close` lifecycle

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod server;
pub mod store;

pub use config::AppConfig;
pub use error::Error;
pub use router::create_router;
pub use server::{run_server, shutdown_signal, RecipeServer};
pub use store::{NewRecipe, Recipe, RecipeStore, RecipeUpdate};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub store: RecipeStore,
}
