//! Suggestion-table domain — the row model and the price-to-keys ratio.

pub mod controller;

pub use controller::PricingTable;

use crate::domain::key_price::KeyPrice;
use crate::shared::SampleDate;
use rust_decimal::Decimal;

/// One relevant traded day in the suggestion table.
///
/// `key_price` and `ratio` start unset and are written exactly once, by the
/// resolution pass. `None` means "not yet attempted"; an attempted day with
/// no usable price is recorded as [`KeyPrice::Unresolved`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub date: SampleDate,
    pub item_price: Decimal,
    pub mean_mode: bool,
    key_price: Option<KeyPrice>,
    ratio: Option<Decimal>,
}

impl TableRow {
    pub(crate) fn new(date: SampleDate, item_price: Decimal) -> Self {
        Self {
            date,
            item_price,
            mean_mode: false,
            key_price: None,
            ratio: None,
        }
    }

    pub fn key_price(&self) -> Option<KeyPrice> {
        self.key_price
    }

    /// The truncated item-price / key-price ratio, when both resolved.
    pub fn ratio(&self) -> Option<Decimal> {
        self.ratio
    }

    pub fn is_resolved(&self) -> bool {
        self.key_price.is_some()
    }

    /// Write-once: a second call is ignored.
    pub(crate) fn record_key_price(&mut self, key_price: KeyPrice) {
        if self.key_price.is_some() {
            return;
        }
        self.key_price = Some(key_price);
        self.ratio = key_price
            .as_decimal()
            .and_then(|key| floor_key_ratio(self.item_price, key));
    }

    // ── Cell rendering (site-compatible) ─────────────────────────────────

    pub fn item_cell(&self) -> String {
        format!("${}", self.item_price.normalize())
    }

    /// Empty before resolution; `$NaN` for an attempted-but-unresolved day.
    pub fn key_cell(&self) -> String {
        match self.key_price {
            Some(key) => format!("${key}"),
            None => String::new(),
        }
    }

    /// The "Calculated price" cell, e.g. `~3.75 keys`.
    pub fn calc_cell(&self) -> String {
        match (self.key_price, self.ratio) {
            (None, _) => String::new(),
            (Some(_), Some(ratio)) => format!("~{} keys", ratio.normalize()),
            (Some(_), None) => "~NaN keys".to_string(),
        }
    }
}

/// `floor(item / key * 100) / 100` — two decimal places, truncated, never
/// rounded. A zero key price has no ratio.
pub fn floor_key_ratio(item_price: Decimal, key_price: Decimal) -> Option<Decimal> {
    if key_price.is_zero() {
        return None;
    }
    Some(((item_price / key_price) * Decimal::ONE_HUNDRED).floor() / Decimal::ONE_HUNDRED)
}
