//! High-level client — `MptfClient` and the suggestion-table workflow.
//!
//! `build_table` is the Rust form of the script's init path: activation gate
//! → session token check → chart read → filtered table. Resolution and
//! export then run on the returned [`PricingTable`].

use crate::config::HelperConfig;
use crate::domain::table::PricingTable;
use crate::error::{AuthError, HelperError, PageError};
use crate::http::MptfHttp;
use crate::network::DEFAULT_BASE_URL;
use crate::page::{is_unusual_path, HostPage, MEDIAN_PRICE_SERIES};

use chrono::{DateTime, Utc};

/// The primary entry point for the SDK.
pub struct MptfClient {
    pub(crate) http: MptfHttp,
    config: HelperConfig,
}

impl MptfClient {
    pub fn builder() -> MptfClientBuilder {
        MptfClientBuilder::default()
    }

    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// Build the suggestion table for a host page.
    ///
    /// Returns `Ok(None)` when the page is not an unusual-tier item page and
    /// the config restricts activation to those (logged, no-op). A missing
    /// session token is an [`AuthError::MissingCsrf`]; the token is otherwise
    /// stored for the resolution requests that follow.
    pub async fn build_table(
        &self,
        page: &dyn HostPage,
        now: DateTime<Utc>,
    ) -> Result<Option<PricingTable>, HelperError> {
        if self.config.unusual_only && !is_unusual_path(page.path()) {
            tracing::info!(
                target: "mptf_helper",
                path = page.path(),
                "not an unusual-tier page, skipping"
            );
            return Ok(None);
        }

        let token = page.csrf_token().ok_or(AuthError::MissingCsrf)?;
        self.http.set_csrf(Some(token.to_string())).await;

        let chart = page.chart().ok_or(PageError::ChartMissing)?;
        let prices = chart
            .median_prices()
            .ok_or(PageError::SeriesMissing(MEDIAN_PRICE_SERIES))?;

        let mut table = PricingTable::build(&chart.labels, prices, &self.config, now);
        if let Some(name) = page.item_name() {
            table = table.with_item_name(name);
        }
        Ok(Some(table))
    }

    /// Resolve every row of a built table through the live endpoint.
    pub async fn resolve_table(
        &self,
        table: &mut PricingTable,
        now: DateTime<Utc>,
    ) -> Result<(), HelperError> {
        table.resolve_all(&self.http, now).await.map_err(Into::into)
    }
}

impl Clone for MptfClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MptfClientBuilder {
    base_url: String,
    config: HelperConfig,
}

impl Default for MptfClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            config: HelperConfig::default(),
        }
    }
}

impl MptfClientBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn config(mut self, config: HelperConfig) -> Self {
        self.config = config;
        self
    }

    /// Recency window for relevant sales, in 30-day months.
    pub fn valid_sale_months(mut self, months: u32) -> Self {
        self.config.valid_sale_months = months;
        self
    }

    /// Allow activation on non-unusual pages.
    pub fn any_tier(mut self) -> Self {
        self.config.unusual_only = false;
        self
    }

    pub fn build(self) -> MptfClient {
        MptfClient {
            http: MptfHttp::new(&self.base_url),
            config: self.config,
        }
    }
}
