use std::fmt;

pub type RecipeId = u64;
pub type RequestId = u64;

/// A recipe exactly as the remote store describes it.
///
/// The server speaks snake_case; camelCase spellings are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct RecipeRecord {
    pub id: RecipeId,
    pub title: String,
    #[serde(alias = "youtubeUrl")]
    pub youtube_url: String,
    #[serde(default, alias = "cookingTime")]
    pub cooking_time: Option<String>,
    #[serde(default)]
    pub servings: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    RecipesFetched {
        request_id: RequestId,
        result: Result<Vec<RecipeRecord>, ClientError>,
    },
    UrlProcessed {
        request_id: RequestId,
        result: Result<(), ClientError>,
    },
    RecipeDeleted {
        request_id: RequestId,
        id: RecipeId,
        result: Result<(), ClientError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
    /// `error` field of a JSON error body, when the server sent one.
    pub server_message: Option<String>,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            server_message: None,
        }
    }

    pub(crate) fn with_server_message(mut self, server_message: Option<String>) -> Self {
        self.server_message = server_message;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
