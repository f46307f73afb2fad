//! Helper configuration.

/// Tunables for table building and activation.
///
/// Defaults match the behavior price suggesters expect: only the last
/// three months of sales matter, and only unusual-tier pages are handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperConfig {
    /// Recency window for relevant sales, in 30-day months.
    pub valid_sale_months: u32,
    /// When set, the workflow activates only on unusual-tier item pages.
    pub unusual_only: bool,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            valid_sale_months: 3,
            unusual_only: true,
        }
    }
}
