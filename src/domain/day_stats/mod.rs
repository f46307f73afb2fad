//! Day-stats domain — per-day sale tables and modal-price extraction.
//!
//! The day-stats endpoint returns a server-rendered HTML table: one body row
//! per price level traded that day, first cell the price, last cell the
//! volume. The modal price (the price with the highest volume) is the base
//! key price for that day.

pub mod wire;

use crate::shared::{parse_dollar_price, parse_leading_int};
use lazy_static::lazy_static;
use rust_decimal::Decimal;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref ROW_SELECTOR: Selector = Selector::parse("tbody tr").unwrap();
    static ref CELL_SELECTOR: Selector = Selector::parse("td").unwrap();
}

/// One price level traded on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceVolumeEntry {
    pub price: Decimal,
    pub volume: i64,
}

/// Parse the day-stats HTML fragment into price/volume pairs, document order.
///
/// Rows whose price or volume cell does not parse are skipped.
pub fn parse_price_volume_rows(html: &str) -> Vec<PriceVolumeEntry> {
    let doc = Html::parse_document(html);

    doc.select(&ROW_SELECTOR)
        .filter_map(|row| {
            let cells: Vec<_> = row.select(&CELL_SELECTOR).collect();
            let first = cells.first()?;
            let last = cells.last()?;

            let price = parse_dollar_price(&first.text().collect::<String>())?;
            let volume = parse_leading_int(&last.text().collect::<String>())?;
            Some(PriceVolumeEntry { price, volume })
        })
        .collect()
}

/// The most-traded price of the day, or `None` for an empty table.
///
/// Ties on maximum volume resolve to the first row in document order.
pub fn modal_price(html: &str) -> Option<Decimal> {
    let entries = parse_price_volume_rows(html);
    let max_volume = entries.iter().map(|e| e.volume).max()?;
    entries
        .iter()
        .find(|e| e.volume == max_volume)
        .map(|e| e.price)
}
