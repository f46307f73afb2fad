//! Low-level HTTP client — `MptfHttp`.
//!
//! One method per AJAX endpoint, returning wire types. Requests are
//! form-encoded the way the site's own frontend sends them. No retries and
//! no timeout: a failed request is that request's caller's problem, and the
//! workflow above issues requests strictly one at a time.

use crate::domain::day_stats::wire::DayStatsResponse;
use crate::domain::key_price::DayStatsApi;
use crate::error::HttpError;
use crate::network::{DAY_STATS_PATH, KEY_SKU};

use async_lock::RwLock;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

/// Low-level HTTP client for the marketplace AJAX API.
pub struct MptfHttp {
    base_url: String,
    client: Client,
    /// Anti-forgery token read from the host page. NEVER exposed publicly.
    csrf: Arc<RwLock<Option<String>>>,
}

impl MptfHttp {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .build()
                .expect("Failed to build HTTP client"),
            csrf: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the anti-forgery token for subsequent requests.
    pub(crate) async fn set_csrf(&self, token: Option<String>) {
        *self.csrf.write().await = token;
    }

    #[allow(dead_code)]
    pub(crate) async fn has_csrf(&self) -> bool {
        self.csrf.read().await.is_some()
    }

    // ── Day stats ────────────────────────────────────────────────────────

    /// `POST /ajax/items/GetDayStats` for one SKU and display-format date.
    ///
    /// A 2xx response with `success: false` is a hard failure, carrying the
    /// endpoint's message.
    pub async fn get_day_stats(
        &self,
        sku: &str,
        timestamp: &str,
    ) -> Result<DayStatsResponse, HttpError> {
        let csrf = self
            .csrf
            .read()
            .await
            .clone()
            .ok_or(HttpError::Unauthorized)?;

        let url = format!("{}{}", self.base_url, DAY_STATS_PATH);
        tracing::debug!(target: "mptf_helper", sku, timestamp, "requesting day stats");

        let resp = self
            .client
            .post(&url)
            .form(&[("sku", sku), ("timestamp", timestamp), ("csrf", csrf.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HttpError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = resp.json::<DayStatsResponse>().await?;
        if !parsed.success {
            return Err(HttpError::ApiFailure {
                message: parsed.message.unwrap_or_default(),
            });
        }
        Ok(parsed)
    }
}

#[async_trait]
impl DayStatsApi for MptfHttp {
    async fn day_stats_html(&self, timestamp: &str) -> Result<String, HttpError> {
        Ok(self.get_day_stats(KEY_SKU, timestamp).await?.html)
    }
}

impl Clone for MptfHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            csrf: self.csrf.clone(),
        }
    }
}
