use recipe_logging::{recipe_debug, recipe_info};

use crate::outcome::{DeleteFailure, FetchFailure, ProcessFailure};
use crate::{AppState, Effect, Msg, PendingDelete, Recipe, RecipeId, RequestId};

const EXTRACTED_TEXT: &str = "Recipe extracted and saved!";
const DELETED_TEXT: &str = "Recipe deleted.";

/// Pure update function: applies a message to state and returns any effects.
///
/// Notification rules per outcome:
///
/// | outcome          | error                  | success   |
/// |------------------|------------------------|-----------|
/// | load ok          | kept                   | kept      |
/// | load failed      | fetch failure text     | kept      |
/// | submit started   | cleared                | cleared   |
/// | submit ok        | (still cleared)        | extracted |
/// | submit failed    | server text / fallback | (cleared) |
/// | delete ok        | kept                   | deleted   |
/// | delete failed    | delete failure text    | kept      |
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started | Msg::ReloadClicked => {
            state.mark_dirty();
            vec![state.request_load()]
        }
        Msg::DraftChanged(text) => {
            if text != state.submission.draft_url() {
                state.submission.set_draft(text);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::PreviousClicked => navigate(&mut state, |store| store.previous()),
        Msg::NextClicked => navigate(&mut state, |store| store.next()),
        Msg::IndicatorClicked(index) => navigate(&mut state, |store| store.jump_to(index)),
        Msg::DeleteClicked => {
            if let Some(recipe) = state.store.current() {
                state.pending_delete = Some(PendingDelete {
                    id: recipe.id,
                    title: recipe.title.clone(),
                });
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DeleteConfirmed => match state.pending_delete.take() {
            Some(pending) => {
                state.mark_dirty();
                vec![state.request_delete(pending.id)]
            }
            None => Vec::new(),
        },
        Msg::DeleteCancelled => {
            if state.pending_delete.take().is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DismissNotifications => {
            if !state.notifications.is_empty() {
                state.notifications.clear();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RecipesLoaded { request_id, result } => {
            on_recipes_loaded(&mut state, request_id, result);
            Vec::new()
        }
        Msg::UrlProcessed { request_id, result } => on_url_processed(&mut state, request_id, result),
        Msg::RecipeDeleted {
            request_id,
            id,
            result,
        } => on_recipe_deleted(&mut state, request_id, id, result),
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn navigate(state: &mut AppState, step: impl FnOnce(&mut crate::RecipeStore)) -> Vec<Effect> {
    let before = state.store.current_index();
    step(&mut state.store);
    if state.store.current_index() != before {
        state.mark_dirty();
    }
    Vec::new()
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    if state.submission.is_submitting() {
        recipe_info!("Submit ignored: an extraction is already running");
        return Vec::new();
    }
    if !state.submission.can_submit() {
        recipe_debug!("Submit ignored: URL field is empty");
        return Vec::new();
    }
    let request_id = state.allocate_request_id();
    let Some(url) = state.submission.begin(request_id) else {
        return Vec::new();
    };
    state.notifications.clear();
    state.mark_dirty();
    vec![Effect::ProcessUrl { request_id, url }]
}

fn on_recipes_loaded(
    state: &mut AppState,
    request_id: RequestId,
    result: Result<Vec<Recipe>, FetchFailure>,
) {
    if !state.settle_load(request_id) {
        recipe_debug!("Discarding superseded load result {}", request_id);
        return;
    }
    match result {
        Ok(recipes) => {
            recipe_debug!("Load {} replaced collection with {} recipes", request_id, recipes.len());
            state.replace_recipes(recipes);
        }
        Err(failure) => state.notifications.set_error(failure.user_message()),
    }
    state.mark_dirty();
}

fn on_url_processed(
    state: &mut AppState,
    request_id: RequestId,
    result: Result<(), ProcessFailure>,
) -> Vec<Effect> {
    if !state.submission.finish(request_id) {
        recipe_debug!("Discarding result of unknown submission {}", request_id);
        return Vec::new();
    }
    state.mark_dirty();
    match result {
        Ok(()) => {
            state.notifications.set_success(EXTRACTED_TEXT);
            state.submission.clear_draft();
            vec![state.request_load()]
        }
        Err(failure) => {
            state.notifications.set_error(failure.user_message());
            Vec::new()
        }
    }
}

fn on_recipe_deleted(
    state: &mut AppState,
    request_id: RequestId,
    id: RecipeId,
    result: Result<(), DeleteFailure>,
) -> Vec<Effect> {
    if !state.settle_delete(request_id, id) {
        recipe_debug!("Discarding result of unknown delete {} (recipe {})", request_id, id);
        return Vec::new();
    }
    state.mark_dirty();
    match result {
        Ok(()) => {
            state.notifications.set_success(DELETED_TEXT);
            vec![state.request_load()]
        }
        Err(failure) => {
            state.notifications.set_error(failure.user_message());
            Vec::new()
        }
    }
}
