use std::time::Duration;

/// Abstraction over the HTTP POST for testability.
///
/// Production code uses [`ReqwestTransport`], tests use mockall-generated
/// mocks.
#[allow(async_fn_in_trait)]
pub trait HttpTransport: Send + Sync {
    /// POST a JSON body and return the raw response, whatever its status.
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError>;
}

/// Status and body of an HTTP response, before any interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Real HTTP transport backed by reqwest, with a bounded timeout.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::ClientBuild { source: e })?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Request { source: e })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request { source: e })?;

        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to construct HTTP client")]
    ClientBuild { source: reqwest::Error },

    #[error("request to build service failed: {source}")]
    Request { source: reqwest::Error },
}
