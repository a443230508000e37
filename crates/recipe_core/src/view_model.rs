use crate::{PendingDelete, Recipe};

/// Snapshot handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub recipe_count: usize,
    pub current_index: Option<usize>,
    pub current: Option<Recipe>,
    pub draft_url: String,
    pub is_submitting: bool,
    pub can_submit: bool,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub pending_delete: Option<PendingDelete>,
    pub dirty: bool,
}

impl AppViewModel {
    /// One flag per recipe, set for the displayed one.
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.recipe_count)
            .map(|index| Some(index) == self.current_index)
            .collect()
    }
}
