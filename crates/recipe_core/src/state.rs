use std::collections::BTreeMap;

use crate::notification::NotificationState;
use crate::store::RecipeStore;
use crate::submission::SubmissionState;
use crate::view_model::AppViewModel;
use crate::{Effect, RecipeId};

pub type RequestId = u64;

/// Recipe awaiting the user's yes/no before it is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: RecipeId,
    pub title: String,
}

/// Everything the browser knows. Only [`crate::update`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) store: RecipeStore,
    pub(crate) submission: SubmissionState,
    pub(crate) notifications: NotificationState,
    pub(crate) pending_delete: Option<PendingDelete>,
    outstanding_load: Option<RequestId>,
    outstanding_deletes: BTreeMap<RequestId, RecipeId>,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn notifications(&self) -> &NotificationState {
        &self.notifications
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.outstanding_load.is_some()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            recipe_count: self.store.len(),
            current_index: self.store.current_index(),
            current: self.store.current().cloned(),
            draft_url: self.submission.draft_url().to_string(),
            is_submitting: self.submission.is_submitting(),
            can_submit: self.submission.can_submit(),
            is_loading: self.is_loading(),
            error_message: self.notifications.error().map(ToOwned::to_owned),
            success_message: self.notifications.success().map(ToOwned::to_owned),
            pending_delete: self.pending_delete.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn allocate_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }

    /// Issues a load that supersedes any load still in flight.
    pub(crate) fn request_load(&mut self) -> Effect {
        let request_id = self.allocate_request_id();
        self.outstanding_load = Some(request_id);
        Effect::FetchRecipes { request_id }
    }

    /// Clears the outstanding load if `request_id` is it. Stale loads return false.
    pub(crate) fn settle_load(&mut self, request_id: RequestId) -> bool {
        if self.outstanding_load != Some(request_id) {
            return false;
        }
        self.outstanding_load = None;
        true
    }

    pub(crate) fn request_delete(&mut self, id: RecipeId) -> Effect {
        let request_id = self.allocate_request_id();
        self.outstanding_deletes.insert(request_id, id);
        Effect::DeleteRecipe { request_id, id }
    }

    pub(crate) fn settle_delete(&mut self, request_id: RequestId, id: RecipeId) -> bool {
        match self.outstanding_deletes.get(&request_id) {
            Some(expected) if *expected == id => {
                self.outstanding_deletes.remove(&request_id);
                true
            }
            _ => false,
        }
    }

    /// Collection replacement; drops a confirmation whose recipe is gone.
    pub(crate) fn replace_recipes(&mut self, recipes: Vec<crate::Recipe>) {
        self.store.replace(recipes);
        if let Some(pending) = &self.pending_delete {
            if !self.store.contains(pending.id) {
                self.pending_delete = None;
            }
        }
    }
}
