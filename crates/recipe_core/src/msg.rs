use crate::{DeleteFailure, FetchFailure, ProcessFailure, Recipe, RecipeId, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Front end is up; triggers the initial load.
    Started,
    /// User asked for a fresh copy of the collection.
    ReloadClicked,
    /// User edited the URL input.
    DraftChanged(String),
    /// User submitted the current URL draft for extraction.
    SubmitClicked,
    PreviousClicked,
    NextClicked,
    /// User picked the indicator for the recipe at this index.
    IndicatorClicked(usize),
    /// User asked to delete the displayed recipe; opens the confirmation.
    DeleteClicked,
    DeleteConfirmed,
    DeleteCancelled,
    /// User closed the status lines.
    DismissNotifications,
    /// Result of an `Effect::FetchRecipes`.
    RecipesLoaded {
        request_id: RequestId,
        result: Result<Vec<Recipe>, FetchFailure>,
    },
    /// Result of an `Effect::ProcessUrl`.
    UrlProcessed {
        request_id: RequestId,
        result: Result<(), ProcessFailure>,
    },
    /// Result of an `Effect::DeleteRecipe`.
    RecipeDeleted {
        request_id: RequestId,
        id: RecipeId,
        result: Result<(), DeleteFailure>,
    },
    /// Render tick.
    Tick,
    /// Fallback for unmapped input.
    NoOp,
}
