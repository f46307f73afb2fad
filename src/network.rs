//! Network constants and site-specific markers.

/// Default site base URL.
pub const DEFAULT_BASE_URL: &str = "https://marketplace.tf";

/// Day-stats AJAX endpoint, relative to the base URL.
pub const DAY_STATS_PATH: &str = "/ajax/items/GetDayStats";

/// SKU of the reference tradeable (the Mann Co. Supply Crate Key).
/// Every key-price lookup queries this fixed SKU.
pub const KEY_SKU: &str = "5021;6";

/// Path marker identifying an unusual-tier item page.
pub const UNUSUAL_PATH_MARKER: &str = ";5;";
