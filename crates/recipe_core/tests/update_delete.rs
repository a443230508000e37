use recipe_core::{
    update, AppState, DeleteFailure, Effect, Msg, PendingDelete, Recipe, RecipeId, RequestId,
};

fn recipe(id: u64) -> Recipe {
    Recipe {
        id,
        title: format!("Recipe {id}"),
        youtube_url: format!("https://youtu.be/video{id:06}"),
        cooking_time: None,
        servings: None,
        ingredients: Vec::new(),
        instructions: Vec::new(),
        created_at: None,
    }
}

fn load(state: AppState, effects: &[Effect], ids: &[u64]) -> AppState {
    let request_id = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchRecipes { request_id } => Some(*request_id),
            _ => None,
        })
        .expect("fetch effect");
    let (state, _) = update(
        state,
        Msg::RecipesLoaded {
            request_id,
            result: Ok(ids.iter().copied().map(recipe).collect()),
        },
    );
    state
}

fn with_recipes(ids: &[u64]) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Started);
    load(state, &effects, ids)
}

fn confirm_delete(state: AppState) -> (AppState, RequestId, RecipeId) {
    let (state, _) = update(state, Msg::DeleteClicked);
    let (state, effects) = update(state, Msg::DeleteConfirmed);
    match effects[..] {
        [Effect::DeleteRecipe { request_id, id }] => (state, request_id, id),
        _ => panic!("expected delete effect, got {effects:?}"),
    }
}

#[test]
fn delete_click_asks_for_confirmation_first() {
    recipe_logging::initialize_for_tests();
    let (state, _) = update(with_recipes(&[1, 2]), Msg::NextClicked);
    let (state, effects) = update(state, Msg::DeleteClicked);

    assert!(effects.is_empty());
    assert_eq!(
        state.pending_delete(),
        Some(&PendingDelete {
            id: 2,
            title: "Recipe 2".to_string(),
        })
    );
}

#[test]
fn cancelled_delete_never_reaches_remote() {
    recipe_logging::initialize_for_tests();
    let (state, _) = update(with_recipes(&[1]), Msg::DeleteClicked);
    let (state, effects) = update(state, Msg::DeleteCancelled);
    assert!(effects.is_empty());
    assert_eq!(state.pending_delete(), None);

    let (_state, effects) = update(state, Msg::DeleteConfirmed);
    assert!(effects.is_empty());
}

#[test]
fn delete_click_on_empty_collection_is_ignored() {
    recipe_logging::initialize_for_tests();
    let (mut state, effects) = update(with_recipes(&[]), Msg::DeleteClicked);
    state.consume_dirty();

    assert!(effects.is_empty());
    assert_eq!(state.pending_delete(), None);
}

#[test]
fn deleting_current_of_three_reloads_to_index_zero() {
    recipe_logging::initialize_for_tests();
    let (state, _) = update(with_recipes(&[1, 2, 3]), Msg::NextClicked);
    let (state, request_id, id) = confirm_delete(state);
    assert_eq!(id, 2);

    let (state, effects) = update(
        state,
        Msg::RecipeDeleted {
            request_id,
            id,
            result: Ok(()),
        },
    );
    assert_eq!(state.view().success_message.as_deref(), Some("Recipe deleted."));

    let state = load(state, &effects, &[1, 3]);
    let view = state.view();
    assert_eq!(view.recipe_count, 2);
    assert_eq!(view.current_index, Some(0));
    assert_eq!(view.current.map(|r| r.id), Some(1));
}

#[test]
fn delete_failure_keeps_everything_but_sets_error() {
    recipe_logging::initialize_for_tests();
    let (state, _) = update(with_recipes(&[1, 2, 3]), Msg::PreviousClicked);
    let (state, request_id, id) = confirm_delete(state);

    let (state, effects) = update(
        state,
        Msg::RecipeDeleted {
            request_id,
            id,
            result: Err(DeleteFailure),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.recipe_count, 3);
    assert_eq!(view.current_index, Some(2));
    assert_eq!(view.error_message.as_deref(), Some("Failed to delete recipe."));
    assert_eq!(view.success_message, None);
}

#[test]
fn delete_success_keeps_existing_error() {
    recipe_logging::initialize_for_tests();
    let (state, request_id, id) = confirm_delete(with_recipes(&[1, 2]));
    let (state, _) = update(
        state,
        Msg::RecipeDeleted {
            request_id,
            id,
            result: Err(DeleteFailure),
        },
    );
    let (state, request_id, id) = confirm_delete(state);
    let (state, _) = update(
        state,
        Msg::RecipeDeleted {
            request_id,
            id,
            result: Ok(()),
        },
    );

    let view = state.view();
    assert_eq!(view.error_message.as_deref(), Some("Failed to delete recipe."));
    assert_eq!(view.success_message.as_deref(), Some("Recipe deleted."));
}

#[test]
fn reload_drops_confirmation_for_vanished_recipe() {
    recipe_logging::initialize_for_tests();
    let (state, _) = update(with_recipes(&[1, 2]), Msg::DeleteClicked);
    let (state, effects) = update(state, Msg::ReloadClicked);
    let state = load(state, &effects, &[2]);

    assert_eq!(state.pending_delete(), None);
}

#[test]
fn reload_keeps_confirmation_for_surviving_recipe() {
    recipe_logging::initialize_for_tests();
    let (state, _) = update(with_recipes(&[1, 2]), Msg::DeleteClicked);
    let (state, effects) = update(state, Msg::ReloadClicked);
    let state = load(state, &effects, &[2, 1]);

    assert_eq!(state.pending_delete().map(|p| p.id), Some(1));
}

#[test]
fn delete_result_with_mismatched_id_is_ignored() {
    recipe_logging::initialize_for_tests();
    let (state, request_id, id) = confirm_delete(with_recipes(&[1, 2]));

    let (state, effects) = update(
        state,
        Msg::RecipeDeleted {
            request_id,
            id: id + 1,
            result: Ok(()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().success_message, None);
}

#[test]
fn dismiss_clears_both_messages() {
    recipe_logging::initialize_for_tests();
    let (state, request_id, id) = confirm_delete(with_recipes(&[1, 2]));
    let (state, _) = update(
        state,
        Msg::RecipeDeleted {
            request_id,
            id,
            result: Err(DeleteFailure),
        },
    );
    let (mut state, _) = update(state, Msg::DismissNotifications);

    assert!(state.consume_dirty());
    assert!(state.notifications().is_empty());
}
