//! Narrative Backend Client
//!
//! Typed access to the REST backend that stores narratives and resolves them
//! into text. The builder only depends on the [`NarrativeApi`] trait, so tests
//! and alternative transports can stand in for the HTTP client.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::narrative::Narrative;
use crate::types::NarrativeId;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Selectable resource as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub path: String,
    pub preview: String,
    pub is_directory: bool,
}

/// Narrative backend contract
#[async_trait]
pub trait NarrativeApi: Send + Sync {
    /// List files that can be added as context entries
    async fn fetch_files(&self) -> Result<Vec<FileInfo>, ApiError>;

    async fn list_narratives(&self) -> Result<Vec<Narrative>, ApiError>;

    async fn get_narrative(&self, id: NarrativeId) -> Result<Narrative, ApiError>;

    /// Store a new narrative; the backend assigns identity and timestamps
    async fn create_narrative(&self, narrative: &Narrative) -> Result<Narrative, ApiError>;

    /// Replace the narrative stored under `id`
    async fn update_narrative(
        &self,
        id: NarrativeId,
        narrative: &Narrative,
    ) -> Result<Narrative, ApiError>;

    /// Resolve a narrative into the concatenated text of its contexts
    async fn resolve_narrative(&self, id: NarrativeId) -> Result<String, ApiError>;

    async fn delete_narrative(&self, id: NarrativeId) -> Result<(), ApiError>;
}

fn map_http_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::TransportError(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::TransportError(format!("Connection error: {}", error))
    } else if error.is_decode() {
        ApiError::InvalidResponse(format!("Failed to decode response: {}", error))
    } else {
        ApiError::TransportError(format!("HTTP error: {}", error))
    }
}

/// HTTP implementation of [`NarrativeApi`]
pub struct HttpNarrativeClient {
    client: Client,
    base_url: String,
}

impl HttpNarrativeClient {
    pub fn new(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .no_proxy()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| ApiError::TransportError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.connect_timeout_secs),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success status into an error. `id` is the narrative the
    /// request addressed, if any, so 404s can name it.
    async fn check_status(
        response: Response,
        id: Option<NarrativeId>,
    ) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
            return Err(ApiError::NarrativeNotFound(id));
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!(status = %status, "Narrative backend returned an error");
        Err(ApiError::RequestFailed(format!(
            "status {}: {}",
            status,
            body.trim()
        )))
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl NarrativeApi for HttpNarrativeClient {
    async fn fetch_files(&self) -> Result<Vec<FileInfo>, ApiError> {
        let response = self
            .client
            .get(self.url("/api/files"))
            .send()
            .await
            .map_err(map_http_error)?;
        let response = Self::check_status(response, None).await?;
        Self::parse_json(response).await
    }

    async fn list_narratives(&self) -> Result<Vec<Narrative>, ApiError> {
        let response = self
            .client
            .get(self.url("/api/narratives"))
            .send()
            .await
            .map_err(map_http_error)?;
        let response = Self::check_status(response, None).await?;
        Self::parse_json(response).await
    }

    async fn get_narrative(&self, id: NarrativeId) -> Result<Narrative, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/api/narratives/{}", id)))
            .send()
            .await
            .map_err(map_http_error)?;
        let response = Self::check_status(response, Some(id)).await?;
        Self::parse_json(response).await
    }

    async fn create_narrative(&self, narrative: &Narrative) -> Result<Narrative, ApiError> {
        debug!(name = %narrative.name, contexts = narrative.contexts.len(), "Creating narrative");
        let response = self
            .client
            .post(self.url("/api/narratives"))
            .json(narrative)
            .send()
            .await
            .map_err(map_http_error)?;
        let response = Self::check_status(response, None).await?;
        Self::parse_json(response).await
    }

    async fn update_narrative(
        &self,
        id: NarrativeId,
        narrative: &Narrative,
    ) -> Result<Narrative, ApiError> {
        debug!(%id, contexts = narrative.contexts.len(), "Updating narrative");
        let response = self
            .client
            .put(self.url(&format!("/api/narratives/{}", id)))
            .json(narrative)
            .send()
            .await
            .map_err(map_http_error)?;
        let response = Self::check_status(response, Some(id)).await?;
        Self::parse_json(response).await
    }

    async fn resolve_narrative(&self, id: NarrativeId) -> Result<String, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/api/narratives/{}/resolve", id)))
            .send()
            .await
            .map_err(map_http_error)?;
        let response = Self::check_status(response, Some(id)).await?;
        response.text().await.map_err(map_http_error)
    }

    async fn delete_narrative(&self, id: NarrativeId) -> Result<(), ApiError> {
        debug!(%id, "Deleting narrative");
        let response = self
            .client
            .delete(self.url(&format!("/api/narratives/{}", id)))
            .send()
            .await
            .map_err(map_http_error)?;
        Self::check_status(response, Some(id)).await?;
        Ok(())
    }
}
