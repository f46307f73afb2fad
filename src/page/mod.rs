//! Host-page collaborators — chart state, session token, activation gate.
//!
//! The item page is a fixed external collaborator: its chart series, session
//! object, and metadata have given shapes, read once and never
//! re-synchronized. `HostPage` makes that surface an injectable interface so
//! tests run against fakes and the live implementation
//! ([`ScrapedPage`](scraped::ScrapedPage)) stays a thin extraction layer.

pub mod scraped;

pub use scraped::ScrapedPage;

use crate::network::UNUSUAL_PATH_MARKER;
use crate::shared::SampleDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label of the chart series carrying per-day median item prices.
pub const MEDIAN_PRICE_SERIES: &str = "Median Price";

/// Read-only view of the host page's state.
pub trait HostPage {
    /// URL path of the current page.
    fn path(&self) -> &str;

    /// Anti-forgery token from the page session, present once authenticated.
    fn csrf_token(&self) -> Option<&str>;

    /// Item display name for the panel heading.
    fn item_name(&self) -> Option<&str>;

    /// The item-sales chart state, when the page rendered one.
    fn chart(&self) -> Option<&ChartSeries>;
}

/// Parallel arrays backing the item-sales chart: one label per traded day,
/// datasets aligned by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<SampleDate>,
    pub datasets: Vec<ChartDataset>,
}

/// One named series of the chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<Decimal>,
}

impl ChartSeries {
    /// Data of the dataset with the given label.
    pub fn series(&self, label: &str) -> Option<&[Decimal]> {
        self.datasets
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.data.as_slice())
    }

    pub fn median_prices(&self) -> Option<&[Decimal]> {
        self.series(MEDIAN_PRICE_SERIES)
    }
}

/// Whether the path belongs to an unusual-tier item page.
pub fn is_unusual_path(path: &str) -> bool {
    path.contains(UNUSUAL_PATH_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn unusual_marker_detection() {
        assert!(is_unusual_path("/items/tf2/730;5;u13"));
        assert!(!is_unusual_path("/items/tf2/5021;6"));
    }

    #[test]
    fn median_series_lookup_by_label() {
        let chart = ChartSeries {
            labels: vec![SampleDate::from("Jan 5, 2024")],
            datasets: vec![
                ChartDataset {
                    label: "Volume".into(),
                    data: vec![dec!(3)],
                },
                ChartDataset {
                    label: MEDIAN_PRICE_SERIES.into(),
                    data: vec![dec!(10.5)],
                },
            ],
        };
        assert_eq!(chart.median_prices(), Some([dec!(10.5)].as_slice()));
        assert_eq!(chart.series("Average"), None);
    }
}
