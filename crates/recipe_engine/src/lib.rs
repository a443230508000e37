//! Recipe engine: remote recipe store client and effect execution.
mod client;
mod decode;
mod engine;
mod types;

pub use client::{ClientSettings, RecipeClient, ReqwestRecipeClient, DEFAULT_BASE_URL};
pub use decode::{decode_recipe, decode_recipes, server_error_message, DecodedRecipes};
pub use engine::{EngineError, EngineHandle};
pub use types::{ClientError, EngineEvent, FailureKind, RecipeId, RecipeRecord, RequestId};
