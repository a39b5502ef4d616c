use std::time::Duration;

use airforge_core::{ApiConfig, BuildRequest};
use serde::Deserialize;

use crate::transport::{HttpTransport, ReqwestTransport, TransportError};

/// Build service client, parameterized over the transport for testability.
pub struct BuildClient<T: HttpTransport = ReqwestTransport> {
    endpoint: String,
    transport: T,
}

impl BuildClient<ReqwestTransport> {
    pub fn new(config: &ApiConfig) -> Result<Self, DispatchError> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))
            .map_err(|e| DispatchError::Transport { source: e })?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            transport,
        })
    }
}

impl<T: HttpTransport> BuildClient<T> {
    pub fn with_transport(endpoint: impl Into<String>, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one build request. Single attempt: transport failures and
    /// non-2xx statuses surface as [`DispatchError`], never a retry.
    pub async fn dispatch(&self, request: &BuildRequest) -> Result<BuildResult, DispatchError> {
        let body = serde_json::to_value(request)
            .map_err(|e| DispatchError::Serialize { source: e })?;

        tracing::info!(endpoint = %self.endpoint, "dispatching build request");
        tracing::info!(body = %body, "request body");

        let response = self
            .transport
            .post_json(&self.endpoint, &body)
            .await
            .map_err(|e| DispatchError::Transport { source: e })?;

        if !response.is_success() {
            return Err(DispatchError::Status {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body)
            .map_err(|e| DispatchError::InvalidResponse { source: e })
    }
}

/// Successful response from the build service.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildResult {
    /// Human-readable outcome, e.g. "Image built and pushed successfully"
    pub message: String,
    /// Tag of the pushed image. The service may omit it; absence is not
    /// an error.
    #[serde(default)]
    pub image_tag: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("failed to serialize build request")]
    Serialize { source: serde_json::Error },

    #[error("could not reach build service")]
    Transport { source: TransportError },

    #[error("build service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("build service response was not valid JSON")]
    InvalidResponse { source: serde_json::Error },
}
