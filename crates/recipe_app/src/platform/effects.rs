use recipe_core::{DeleteFailure, Effect, FetchFailure, Msg, ProcessFailure, Recipe};
use recipe_engine::{ClientSettings, EngineError, EngineEvent, EngineHandle, RecipeRecord};
use recipe_logging::{recipe_info, recipe_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    /// Failures for effects the engine never accepted.
    undelivered: Vec<Msg>,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        recipe_info!("Using recipe API at {}", settings.base_url);
        Ok(Self::with_engine(EngineHandle::new(settings)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self {
            engine,
            undelivered: Vec::new(),
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            let sent = match &effect {
                Effect::FetchRecipes { request_id } => self.engine.fetch_recipes(*request_id),
                Effect::ProcessUrl { request_id, url } => {
                    recipe_info!("ProcessUrl request_id={} url={}", request_id, url);
                    self.engine.process_url(*request_id, url.as_str())
                }
                Effect::DeleteRecipe { request_id, id } => {
                    recipe_info!("DeleteRecipe request_id={} id={}", request_id, id);
                    self.engine.delete_recipe(*request_id, *id)
                }
            };
            if let Err(err) = sent {
                recipe_warn!("Could not start {:?}: {}", effect, err);
                self.undelivered.push(undelivered_msg(effect));
            }
        }
    }

    /// Collects every outcome that is ready, without waiting.
    pub fn drain_messages(&mut self) -> Vec<Msg> {
        let mut msgs = std::mem::take(&mut self.undelivered);
        msgs.extend(std::iter::from_fn(|| self.engine.try_recv()).map(map_event));
        msgs
    }
}

/// Failure outcome for an effect that never reached the engine.
pub(crate) fn undelivered_msg(effect: Effect) -> Msg {
    match effect {
        Effect::FetchRecipes { request_id } => Msg::RecipesLoaded {
            request_id,
            result: Err(FetchFailure),
        },
        Effect::ProcessUrl { request_id, .. } => Msg::UrlProcessed {
            request_id,
            result: Err(ProcessFailure::default()),
        },
        Effect::DeleteRecipe { request_id, id } => Msg::RecipeDeleted {
            request_id,
            id,
            result: Err(DeleteFailure),
        },
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::RecipesFetched { request_id, result } => Msg::RecipesLoaded {
            request_id,
            result: result
                .map(|records| records.into_iter().map(map_record).collect())
                .map_err(|err| {
                    recipe_warn!("Load {} failed: {}", request_id, err);
                    FetchFailure
                }),
        },
        EngineEvent::UrlProcessed { request_id, result } => Msg::UrlProcessed {
            request_id,
            result: result.map_err(|err| {
                recipe_warn!("Extraction {} failed: {}", request_id, err);
                ProcessFailure {
                    server_message: err.server_message,
                }
            }),
        },
        EngineEvent::RecipeDeleted {
            request_id,
            id,
            result,
        } => Msg::RecipeDeleted {
            request_id,
            id,
            result: result.map_err(|err| {
                recipe_warn!("Delete of recipe {} failed: {}", id, err);
                DeleteFailure
            }),
        },
    }
}

fn map_record(record: RecipeRecord) -> Recipe {
    Recipe {
        id: record.id,
        title: record.title,
        youtube_url: record.youtube_url,
        cooking_time: record.cooking_time,
        servings: record.servings,
        ingredients: record.ingredients,
        instructions: record.instructions,
        created_at: record.created_at,
    }
}
