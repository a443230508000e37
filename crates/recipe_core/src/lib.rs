//! Recipe browser core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod navigation;
mod notification;
mod outcome;
mod recipe;
mod state;
mod store;
mod submission;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use navigation::Cursor;
pub use notification::NotificationState;
pub use outcome::{DeleteFailure, FetchFailure, ProcessFailure};
pub use recipe::{Recipe, RecipeId};
pub use state::{AppState, PendingDelete, RequestId};
pub use store::RecipeStore;
pub use submission::SubmissionState;
pub use update::update;
pub use view_model::AppViewModel;
