use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::UpstreamConfig;
use super::error::UpstreamError;
use super::types::{CommentPage, RawComment};

/// Only the first page is ever requested.
pub const PAGE_OFFSET: u32 = 0;
pub const PAGE_SIZE: u32 = 25;

/// Where comments for a subfeddit come from.
#[async_trait]
pub trait CommentSource: Send + Sync {
    async fn fetch_comments(&self, subfeddit_id: i64) -> Result<Vec<RawComment>, UpstreamError>;
}

pub struct FedditClient {
    client: Client,
    base_url: String,
}

impl FedditClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }
}

#[async_trait]
impl CommentSource for FedditClient {
    async fn fetch_comments(&self, subfeddit_id: i64) -> Result<Vec<RawComment>, UpstreamError> {
        let url = format!("{}/comments/", self.base_url);
        debug!(
            "Fetching comments from {} (subfeddit_id={}, skip={}, limit={})",
            url, subfeddit_id, PAGE_OFFSET, PAGE_SIZE
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("subfeddit_id", subfeddit_id),
                ("skip", i64::from(PAGE_OFFSET)),
                ("limit", i64::from(PAGE_SIZE)),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!("Error connecting to Feddit API: {}", e);
                UpstreamError::Unavailable(e)
            })?;

        let status = response.status();
        info!("Feddit API response status: {}", status);
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body = response.bytes().await.map_err(UpstreamError::Unavailable)?;
        let page: CommentPage = serde_json::from_slice(&body)?;

        Ok(page.comments)
    }
}
