//! Failure outcomes reported back to the core by whoever runs the effects.

const FETCH_FAILED_TEXT: &str = "Failed to fetch recipes.";
const PROCESS_FAILED_TEXT: &str = "Failed to process the YouTube video link.";
const DELETE_FAILED_TEXT: &str = "Failed to delete recipe.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteFailure;

/// The remote extraction was rejected or could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessFailure {
    /// `error` field of the server's response body, when there was one.
    pub server_message: Option<String>,
}

impl ProcessFailure {
    pub fn with_server_message(message: impl Into<String>) -> Self {
        Self {
            server_message: Some(message.into()),
        }
    }

    /// Text shown to the user. An empty server message counts as absent.
    pub fn user_message(&self) -> &str {
        match self.server_message.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => PROCESS_FAILED_TEXT,
        }
    }
}

impl FetchFailure {
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_TEXT
    }
}

impl DeleteFailure {
    pub fn user_message(&self) -> &'static str {
        DELETE_FAILED_TEXT
    }
}
