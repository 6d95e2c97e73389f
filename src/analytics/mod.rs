//! Vote analytics: event records, the sink seam, and the client that stamps
//! and submits events.
//!
//! Submission is one-way. [`TelemetrySink::send`] returns nothing, and the
//! vote counters never depend on whether a submission arrived.

pub mod http;

use crate::config::AnalyticsConfig;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use http::HttpSink;

/// One shill, as recorded by the ingestion stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteEvent {
    /// Submission time in Unix milliseconds.
    pub id: i64,
    pub coin: String,
}

/// Envelope sent to the sink: the event plus the stream it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub data: VoteEvent,
    pub stream_name: String,
}

/// Fire-and-forget destination for vote submissions.
pub trait TelemetrySink: Send + Sync {
    fn send(&self, submission: Submission);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("analytics.identity_pool_id is not set (config file or SHILL_IDENTITY_POOL_ID)")]
    MissingIdentityPool,
    #[error("analytics.region is not set (config file or SHILL_REGION)")]
    MissingRegion,
    #[error("analytics.stream_name is not set (config file or SHILL_STREAM_NAME)")]
    MissingStreamName,
    #[error("analytics.timeout_secs must be at least 1")]
    ZeroTimeout,
}

/// Check that every identifier needed to reach the ingestion endpoint is
/// present and the request timeout is non-zero.
pub fn validate(config: &AnalyticsConfig) -> Result<(), ConfigError> {
    if config.identity_pool_id.trim().is_empty() {
        return Err(ConfigError::MissingIdentityPool);
    }
    if config.region.trim().is_empty() {
        return Err(ConfigError::MissingRegion);
    }
    if config.stream_name.trim().is_empty() {
        return Err(ConfigError::MissingStreamName);
    }
    if config.timeout_secs == 0 {
        return Err(ConfigError::ZeroTimeout);
    }
    Ok(())
}

/// Configured analytics client. Built once at startup, before any vote.
pub struct Analytics {
    sink: Box<dyn TelemetrySink>,
    stream_name: String,
    last_id: i64,
}

impl Analytics {
    pub fn configure(
        config: &AnalyticsConfig,
        sink: Box<dyn TelemetrySink>,
    ) -> Result<Self, ConfigError> {
        validate(config)?;
        tracing::info!(
            region = %config.region,
            stream = %config.stream_name,
            "analytics configured"
        );
        Ok(Self {
            sink,
            stream_name: config.stream_name.clone(),
            last_id: 0,
        })
    }

    /// Stamp a vote for `coin` and hand it to the sink without waiting.
    pub fn record_vote(&mut self, coin: &str) -> VoteEvent {
        let id = self.next_id(Utc::now().timestamp_millis());
        let event = VoteEvent {
            id,
            coin: coin.to_string(),
        };
        tracing::debug!(id, coin, "submitting vote");
        self.sink.send(Submission {
            data: event.clone(),
            stream_name: self.stream_name.clone(),
        });
        event
    }

    /// Ids never go backwards, even if the wall clock does.
    fn next_id(&mut self, now_ms: i64) -> i64 {
        self.last_id = self.last_id.max(now_ms);
        self.last_id
    }
}
