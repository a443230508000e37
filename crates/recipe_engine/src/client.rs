use std::time::Duration;

use futures_util::StreamExt;
use recipe_logging::{clip, recipe_debug, recipe_warn, LOG_CLIP_CHARS};
use url::Url;

use crate::decode::{decode_recipe, decode_recipes, server_error_message};
use crate::{ClientError, FailureKind, RecipeId, RecipeRecord};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// API root; endpoint paths are appended to it.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Extraction runs transcription and summarization server side, so it gets
    /// its own, longer budget.
    pub process_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            process_timeout: Duration::from_secs(300),
            max_bytes: 16 * 1024 * 1024,
        }
    }
}

/// Boundary to the remote recipe store.
#[async_trait::async_trait]
pub trait RecipeClient: Send + Sync {
    /// `GET /recipes`: the whole collection in server order.
    async fn list_recipes(&self) -> Result<Vec<RecipeRecord>, ClientError>;

    /// `POST /recipes/process`: asks the server to extract and store a recipe.
    async fn process_url(&self, url: &str) -> Result<(), ClientError>;

    /// `DELETE /recipes/{id}`.
    async fn delete_recipe(&self, id: RecipeId) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestRecipeClient {
    settings: ClientSettings,
    base: Url,
    http: reqwest::Client,
}

impl ReqwestRecipeClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::new(
                FailureKind::InvalidUrl,
                format!("{} cannot be used as an API root", settings.base_url),
            ));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            base,
            http,
        })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// `GET /recipes/{id}`. The browser always reloads the whole collection,
    /// so this is not part of [`RecipeClient`].
    pub async fn get_recipe(&self, id: RecipeId) -> Result<RecipeRecord, ClientError> {
        let url = self.endpoint(&["recipes", &id.to_string()]);
        recipe_debug!("GET {}", url);
        let response = self.http.get(url).send().await.map_err(map_reqwest_error)?;
        if !response.status().is_success() {
            return Err(self.status_error(response).await);
        }
        let body = self.read_body(response).await?;
        decode_recipe(&body)
    }

    /// Appends path segments to the API root, keeping its own path intact.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ClientError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }

    /// Turns a non-2xx response into an error, keeping the server's `error`
    /// text if the body has one.
    async fn status_error(&self, response: reqwest::Response) -> ClientError {
        let status = response.status();
        let body = match self.read_body(response).await {
            Ok(body) => body,
            Err(err) => {
                recipe_warn!("Could not read error body for {}: {}", status, err);
                Vec::new()
            }
        };
        if !body.is_empty() {
            recipe_debug!(
                "Error body for {}: {}",
                status,
                clip(&String::from_utf8_lossy(&body), LOG_CLIP_CHARS)
            );
        }
        ClientError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
            .with_server_message(server_error_message(&body))
    }
}

#[async_trait::async_trait]
impl RecipeClient for ReqwestRecipeClient {
    async fn list_recipes(&self) -> Result<Vec<RecipeRecord>, ClientError> {
        let url = self.endpoint(&["recipes"]);
        recipe_debug!("GET {}", url);
        let response = self.http.get(url).send().await.map_err(map_reqwest_error)?;
        if !response.status().is_success() {
            return Err(self.status_error(response).await);
        }

        let body = self.read_body(response).await?;
        let decoded = decode_recipes(&body)?;
        if decoded.rejected > 0 {
            recipe_warn!(
                "Kept {} recipes, dropped {} malformed",
                decoded.recipes.len(),
                decoded.rejected
            );
        }
        Ok(decoded.recipes)
    }

    async fn process_url(&self, video_url: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&["recipes", "process"]);
        recipe_debug!("POST {} url={}", url, video_url);
        let response = self
            .http
            .post(url)
            .timeout(self.settings.process_timeout)
            .json(&serde_json::json!({ "url": video_url }))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        if !response.status().is_success() {
            return Err(self.status_error(response).await);
        }
        Ok(())
    }

    async fn delete_recipe(&self, id: RecipeId) -> Result<(), ClientError> {
        let url = self.endpoint(&["recipes", &id.to_string()]);
        recipe_debug!("DELETE {}", url);
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        if !response.status().is_success() {
            return Err(self.status_error(response).await);
        }
        Ok(())
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> ClientError {
    ClientError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ClientError::new(FailureKind::Decode, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}
