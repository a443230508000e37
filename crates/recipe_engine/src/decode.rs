use recipe_logging::{clip, recipe_warn, LOG_CLIP_CHARS};
use serde_json::Value;

use crate::{ClientError, FailureKind, RecipeRecord};

/// Result of decoding a `/recipes` listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedRecipes {
    /// Valid entries, in server order.
    pub recipes: Vec<RecipeRecord>,
    /// Number of entries dropped for not matching the schema.
    pub rejected: usize,
}

/// Decodes a recipe listing, checking every element on its own.
///
/// The body must be a JSON array. Elements that miss a required field, carry a
/// wrong type or have a blank title are dropped and logged; the rest keep
/// their order.
pub fn decode_recipes(body: &[u8]) -> Result<DecodedRecipes, ClientError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| ClientError::new(FailureKind::Decode, err.to_string()))?;
    let Value::Array(items) = value else {
        return Err(ClientError::new(
            FailureKind::Decode,
            "recipe listing is not a JSON array",
        ));
    };

    let mut decoded = DecodedRecipes::default();
    for (position, item) in items.into_iter().enumerate() {
        match validate(item) {
            Ok(record) => decoded.recipes.push(record),
            Err(reason) => {
                recipe_warn!("Dropping recipe at position {}: {}", position, reason);
                decoded.rejected += 1;
            }
        }
    }
    Ok(decoded)
}

/// Decodes a single recipe object, applying the same checks as the listing.
pub fn decode_recipe(body: &[u8]) -> Result<RecipeRecord, ClientError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| ClientError::new(FailureKind::Decode, err.to_string()))?;
    validate(value).map_err(|reason| ClientError::new(FailureKind::Decode, reason))
}

/// Pulls `error` out of a JSON error body. Anything else yields `None`.
pub fn server_error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("error")? {
        Value::String(text) => Some(text.clone()),
        other => {
            recipe_warn!(
                "Ignoring non-text error field: {}",
                clip(&other.to_string(), LOG_CLIP_CHARS)
            );
            None
        }
    }
}

fn validate(item: Value) -> Result<RecipeRecord, String> {
    let record: RecipeRecord = serde_json::from_value(item).map_err(|err| err.to_string())?;
    if record.title.trim().is_empty() {
        return Err(format!("recipe {} has a blank title", record.id));
    }
    Ok(record)
}
