//! HTTP ingestion sink.
//!
//! Each submission is POSTed as JSON on a spawned task. The caller never
//! waits; failures are logged and dropped.

use crate::analytics::{Submission, TelemetrySink};
use crate::config::AnalyticsConfig;
use anyhow::{Context, Result};
use std::time::Duration;
use tokio::runtime::Handle;

pub struct HttpSink {
    client: reqwest::Client,
    endpoint: String,
    identity_pool_id: String,
    region: String,
    runtime: Handle,
}

impl HttpSink {
    /// Must be called from inside the tokio runtime that will carry the
    /// submissions.
    pub fn new(config: &AnalyticsConfig) -> Result<Self> {
        let runtime = Handle::try_current().context("HttpSink needs a running tokio runtime")?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build analytics HTTP client")?;
        Ok(Self {
            client,
            endpoint: config.resolved_endpoint(),
            identity_pool_id: config.identity_pool_id.clone(),
            region: config.region.clone(),
            runtime,
        })
    }
}

impl TelemetrySink for HttpSink {
    fn send(&self, submission: Submission) {
        let request = self
            .client
            .post(&self.endpoint)
            .header("x-identity-pool-id", &self.identity_pool_id)
            .header("x-region", &self.region)
            .json(&submission);
        let coin = submission.data.coin;
        let id = submission.data.id;

        self.runtime.spawn(async move {
            match request.send().await.and_then(|r| r.error_for_status()) {
                Ok(response) => {
                    tracing::debug!(id, %coin, status = %response.status(), "vote delivered");
                }
                Err(e) => {
                    tracing::warn!(id, %coin, error = %e, "vote submission failed");
                }
            }
        });
    }
}
