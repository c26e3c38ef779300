use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::{sleep, timeout};

use crate::config::SourceConfig;
use crate::gateway::error::FetchError;
use crate::gateway::UserSource;
use crate::model::User;

/// Fetches users with a plain `GET` against a fixed URL.
///
/// Each attempt is bounded by the configured timeout. Transient failures
/// are retried with linear backoff; malformed bodies and 4xx are not.
pub struct HttpUserSource {
    client: Client,
    url: String,
    timeout: Duration,
    max_retries: u32,
    retry_backoff_base_ms: u64,
}

impl HttpUserSource {
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|source| FetchError::Client { source })?;

        Ok(Self {
            client,
            url: config.url.clone(),
            timeout: Duration::from_secs(u64::from(config.timeout_seconds)),
            max_retries: config.max_retries,
            retry_backoff_base_ms: config.retry_backoff_base_ms,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn attempt(&self) -> Result<Vec<User>, FetchError> {
        match timeout(self.timeout, self.request()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                seconds: self.timeout.as_secs(),
            }),
        }
    }

    async fn request(&self) -> Result<Vec<User>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Connection {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Body { source })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Parse { source })
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_all(&self) -> Result<Vec<User>, FetchError> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.attempt().await {
                Ok(users) => {
                    tracing::info!(url = %self.url, count = users.len(), attempt, "Fetched users");
                    return Ok(users);
                }
                Err(err) if err.is_transient() && attempt <= self.max_retries => {
                    let delay_ms = self.retry_backoff_base_ms.saturating_mul(u64::from(attempt));
                    tracing::warn!(
                        url = %self.url,
                        attempt,
                        delay_ms,
                        error = %err,
                        "Fetch failed, retrying"
                    );
                    sleep(Duration::from_millis(delay_ms)).await;
                }
                Err(err) => {
                    tracing::error!(
                        url = %self.url,
                        attempt,
                        error_type = err.error_type(),
                        error = %err,
                        "Fetch failed"
                    );
                    return Err(err);
                }
            }
        }
    }
}
