//! The pricing-table controller — row building, sequential resolution,
//! export.

use super::TableRow;
use crate::clipboard::Clipboard;
use crate::config::HelperConfig;
use crate::domain::dates::filter_relevant;
use crate::domain::key_price::{DayStatsApi, KeyPriceResolver};
use crate::error::HttpError;
use crate::shared::SampleDate;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// The in-memory suggestion table built from the host chart's series.
///
/// Rows are created once from the chart data and only ever mutated by the
/// resolution pass, in table order.
#[derive(Debug, Clone)]
pub struct PricingTable {
    item_name: Option<String>,
    rows: Vec<TableRow>,
    resolved: bool,
}

impl PricingTable {
    /// Build rows from the chart's parallel arrays.
    ///
    /// `dates[i]` corresponds to `prices[i]`. Dates are relevance-filtered
    /// first; each surviving date is matched back to its first occurrence in
    /// the source array (dates missing from the source, or without a price
    /// at that index, produce no row).
    pub fn build(
        dates: &[SampleDate],
        prices: &[Decimal],
        config: &HelperConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let relevant = filter_relevant(dates, config.valid_sale_months, now);

        let mut rows = Vec::with_capacity(relevant.len());
        for date in relevant {
            let Some(index) = dates.iter().position(|d| *d == date) else {
                continue;
            };
            let Some(price) = prices.get(index) else {
                continue;
            };
            rows.push(TableRow::new(date, *price));
        }

        tracing::debug!(target: "mptf_helper", rows = rows.len(), "built suggestion table");
        Self {
            item_name: None,
            rows,
            resolved: false,
        }
    }

    /// Attach the panel heading's item name.
    pub fn with_item_name(mut self, name: impl Into<String>) -> Self {
        self.item_name = Some(name.into());
        self
    }

    pub fn item_name(&self) -> Option<&str> {
        self.item_name.as_deref()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Toggle mean mode for one row. Ignored once that row is resolved.
    pub fn set_mean_mode(&mut self, index: usize, mean_mode: bool) {
        if let Some(row) = self.rows.get_mut(index) {
            if !row.is_resolved() {
                row.mean_mode = mean_mode;
            }
        }
    }

    /// Resolve every row's key price, strictly in table order.
    ///
    /// One request is in flight at a time: each row's resolution is awaited
    /// before the next row starts, so the shared session token is never used
    /// concurrently and the endpoint sees a bounded, serial load.
    ///
    /// A completed run is recorded and repeat invocations are no-ops. A
    /// single-mode fetch failure aborts the remaining rows for this run;
    /// rows resolved before the failure keep their values and are skipped
    /// on a later retry.
    pub async fn resolve_all(
        &mut self,
        api: &dyn DayStatsApi,
        now: DateTime<Utc>,
    ) -> Result<(), HttpError> {
        if self.resolved {
            tracing::debug!(target: "mptf_helper", "table already resolved, skipping");
            return Ok(());
        }

        let resolver = KeyPriceResolver::new(api);
        for index in 0..self.rows.len() {
            if self.rows[index].is_resolved() {
                continue;
            }
            let date = self.rows[index].date.clone();
            let mean_mode = self.rows[index].mean_mode;

            let key_price = resolver.resolve(&date, mean_mode, now, None).await?;
            tracing::debug!(
                target: "mptf_helper",
                date = date.as_str(),
                mean_mode,
                key_price = %key_price,
                "resolved key price"
            );
            self.rows[index].record_key_price(key_price);
        }

        self.resolved = true;
        Ok(())
    }

    /// Render the whole table as text: panel heading (when an item name is
    /// set), column header, then one line per row with the site-rendered
    /// cells.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(name) = &self.item_name {
            out.push_str(&format!("Relevant sales for suggestions ({name})\n"));
        }
        out.push_str("Date\tItem price\tKey price\tCalculated price\n");
        for row in &self.rows {
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                row.date,
                row.item_cell(),
                row.key_cell(),
                row.calc_cell()
            ));
        }
        out
    }

    /// Serialize all rows as tab-separated lines, table order, `$` stripped:
    /// `date \t item/key \t calculated`.
    pub fn export_tsv(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let item = row.item_cell().replace('$', "");
            let key = row.key_cell().replace('$', "");
            out.push_str(&format!(
                "{}\t{}/{}\t{}\n",
                row.date,
                item,
                key,
                row.calc_cell()
            ));
        }
        out
    }

    /// Place the export on a clipboard, falling back to the legacy sink when
    /// the primary rejects. Outcome is logged, never an error.
    pub fn copy_to(&self, primary: &mut dyn Clipboard, fallback: &mut dyn Clipboard) -> bool {
        let text = self.export_tsv();
        match primary.write(&text) {
            Ok(()) => {
                tracing::info!(target: "mptf_helper", "Successfully copied the table!");
                true
            }
            Err(err) => {
                tracing::warn!(target: "mptf_helper", error = %err, "Error copying the table");
                match fallback.write(&text) {
                    Ok(()) => {
                        tracing::info!(target: "mptf_helper", "Copied via fallback");
                        true
                    }
                    Err(err) => {
                        tracing::warn!(target: "mptf_helper", error = %err, "Fallback copy failed");
                        false
                    }
                }
            }
        }
    }
}
