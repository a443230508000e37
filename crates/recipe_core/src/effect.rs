use crate::{RecipeId, RequestId};

/// Remote work requested by [`crate::update`]. Each carries the id its
/// result message must echo back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchRecipes { request_id: RequestId },
    ProcessUrl { request_id: RequestId, url: String },
    DeleteRecipe { request_id: RequestId, id: RecipeId },
}

impl Effect {
    pub fn request_id(&self) -> RequestId {
        match self {
            Effect::FetchRecipes { request_id }
            | Effect::ProcessUrl { request_id, .. }
            | Effect::DeleteRecipe { request_id, .. } => *request_id,
        }
    }
}
