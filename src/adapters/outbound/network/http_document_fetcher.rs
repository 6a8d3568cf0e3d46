use crate::config::{default_user_agent, GraphConfig, DEFAULT_TIMEOUT_SECS};
use crate::ports::outbound::DocumentFetcher;
use crate::release_notes::domain::{Document, DocumentKind};
use crate::shared::{GraphError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// HttpDocumentFetcher adapter for reading graph documents over HTTP(S)
///
/// This adapter implements the DocumentFetcher port with an async reqwest
/// client. One GET per call, no retries: callers that need resilience wrap
/// the graph externally.
///
/// # Status mapping
/// - 2xx: body is decoded with the rules for the requested kind
/// - 404: `Ok(None)`
/// - anything else: `GraphError::Status`
pub struct HttpDocumentFetcher {
    client: reqwest::Client,
}

impl HttpDocumentFetcher {
    /// Creates a fetcher with the default timeout and user agent
    pub fn new() -> Result<Self> {
        Self::build(Duration::from_secs(DEFAULT_TIMEOUT_SECS), default_user_agent())
    }

    /// Creates a fetcher using the timeout and user agent from `config`
    pub fn from_config(config: &GraphConfig) -> Result<Self> {
        Self::build(
            Duration::from_secs(config.timeout_secs),
            config.user_agent.clone(),
        )
    }

    /// Wraps an existing client, e.g. one sharing a connection pool
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build(timeout: Duration, user_agent: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|source| GraphError::Client { source })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch(&self, url: &str, kind: DocumentKind) -> Result<Option<Document>> {
        tracing::debug!(url, %kind, "GET");

        let http_error = |source| GraphError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(http_error)?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(url, %kind, "document not found");
            return Ok(None);
        }

        if !status.is_success() {
            return Err(GraphError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(http_error)?;
        let document = kind.decode(&body).map_err(|source| GraphError::Decode {
            url: url.to_string(),
            kind,
            source,
        })?;

        Ok(Some(document))
    }
}
