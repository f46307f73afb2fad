//! # mptf-helper-sdk
//!
//! A typed Rust SDK for the marketplace.tf price-suggestion workflow: read
//! the item page's sales chart, keep only the recent samples, resolve the
//! key price for each traded day from the site's day-stats endpoint, and
//! produce a copyable suggestion table.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain logic (dates, day stats, key
//!    prices, the table), errors, config
//! 2. **Page** — The host page as an injectable collaborator, with a
//!    scraping implementation for raw item-page HTML
//! 3. **HTTP API** — `MptfHttp`, one method per AJAX endpoint, no retries,
//!    strictly serial use
//! 4. **High-Level Client** — `MptfClient` with the build → resolve →
//!    export workflow
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mptf_helper_sdk::prelude::*;
//! use chrono::Utc;
//!
//! let client = MptfClient::builder().build();
//! let page = ScrapedPage::from_html("/items/tf2/378;5;u13", &page_html);
//!
//! if let Some(mut table) = client.build_table(&page, Utc::now()).await? {
//!     client.resolve_table(&mut table, Utc::now()).await?;
//!     println!("{}", table.export_tsv());
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting utilities.
pub mod shared;

/// Domain modules (vertical slices): dates, day stats, key prices, table.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants and site markers.
pub mod network;

/// Helper configuration.
pub mod config;

/// Clipboard sinks for table export.
pub mod clipboard;

// ── Layer 2: Page ────────────────────────────────────────────────────────────

/// Host-page collaborators: chart state, session token, activation.
pub mod page;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the AJAX endpoints.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `MptfClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::SampleDate;

    // Domain types and operations
    pub use crate::domain::dates::{filter_relevant, neighbor_window, NeighborWindow};
    pub use crate::domain::day_stats::{modal_price, PriceVolumeEntry};
    pub use crate::domain::key_price::{DayStatsApi, KeyPrice, KeyPriceResolver};
    pub use crate::domain::table::{PricingTable, TableRow};

    // Page collaborators
    pub use crate::page::{ChartSeries, HostPage, ScrapedPage};

    // Config + clipboard
    pub use crate::clipboard::{BufferClipboard, Clipboard};
    pub use crate::config::HelperConfig;

    // Errors
    pub use crate::error::HelperError;

    // Network
    pub use crate::network::DEFAULT_BASE_URL;

    // HTTP + client
    #[cfg(feature = "http")]
    pub use crate::client::{MptfClient, MptfClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::MptfHttp;
}
