use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use recipe_logging::{recipe_debug, recipe_info, recipe_warn};

use crate::client::{ClientSettings, RecipeClient, ReqwestRecipeClient};
use crate::{ClientError, EngineEvent, FailureKind, RecipeId, RequestId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("invalid client settings: {0}")]
    Client(#[from] ClientError),
    #[error("engine worker has stopped")]
    Disconnected,
}

#[derive(Debug, Clone)]
enum EngineCommand {
    FetchRecipes { request_id: RequestId },
    ProcessUrl { request_id: RequestId, url: String },
    DeleteRecipe { request_id: RequestId, id: RecipeId },
}

/// Runs remote calls on a background runtime and reports their outcomes.
///
/// Dropping the handle closes the command channel; the worker thread then
/// shuts the runtime down, abandoning anything still in flight. Outcomes that
/// arrive after that have nobody to go to and are dropped.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        let client = ReqwestRecipeClient::new(settings)?;
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn RecipeClient>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    // The call runs in its own task so a panicking client still
                    // produces an outcome for this request.
                    let fallback = command.clone();
                    let call =
                        tokio::spawn(async move { handle_command(client.as_ref(), command).await });
                    let event = match call.await {
                        Ok(event) => event,
                        Err(err) => {
                            recipe_warn!("Engine call {:?} failed: {}", fallback, err);
                            fault_event(fallback, err.to_string())
                        }
                    };
                    if event_tx.send(event).is_err() {
                        recipe_debug!("Engine event dropped: receiver is gone");
                    }
                });
            }
            recipe_info!("Engine command channel closed; shutting down");
            runtime.shutdown_background();
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_recipes(&self, request_id: RequestId) -> Result<(), EngineError> {
        self.send(EngineCommand::FetchRecipes { request_id })
    }

    pub fn process_url(
        &self,
        request_id: RequestId,
        url: impl Into<String>,
    ) -> Result<(), EngineError> {
        self.send(EngineCommand::ProcessUrl {
            request_id,
            url: url.into(),
        })
    }

    pub fn delete_recipe(&self, request_id: RequestId, id: RecipeId) -> Result<(), EngineError> {
        self.send(EngineCommand::DeleteRecipe { request_id, id })
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Fails only when the worker thread is gone; the command is not run.
    fn send(&self, command: EngineCommand) -> Result<(), EngineError> {
        self.cmd_tx.send(command).map_err(|err| {
            recipe_warn!("Engine worker is gone, dropping {:?}", err.0);
            EngineError::Disconnected
        })
    }
}

async fn handle_command(client: &dyn RecipeClient, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::FetchRecipes { request_id } => EngineEvent::RecipesFetched {
            request_id,
            result: client.list_recipes().await,
        },
        EngineCommand::ProcessUrl { request_id, url } => EngineEvent::UrlProcessed {
            request_id,
            result: client.process_url(&url).await,
        },
        EngineCommand::DeleteRecipe { request_id, id } => EngineEvent::RecipeDeleted {
            request_id,
            id,
            result: client.delete_recipe(id).await,
        },
    }
}

/// Outcome reported when a client call died without producing one.
fn fault_event(command: EngineCommand, reason: String) -> EngineEvent {
    let fault = || ClientError::new(FailureKind::Network, format!("client fault: {reason}"));
    match command {
        EngineCommand::FetchRecipes { request_id } => EngineEvent::RecipesFetched {
            request_id,
            result: Err(fault()),
        },
        EngineCommand::ProcessUrl { request_id, .. } => EngineEvent::UrlProcessed {
            request_id,
            result: Err(fault()),
        },
        EngineCommand::DeleteRecipe { request_id, id } => EngineEvent::RecipeDeleted {
            request_id,
            id,
            result: Err(fault()),
        },
    }
}
