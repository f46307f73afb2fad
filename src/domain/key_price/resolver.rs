//! Key-price resolution over the day-stats port.

use super::{most_frequent, DayStatsApi, KeyPrice};
use crate::domain::dates::neighbor_window;
use crate::domain::day_stats::modal_price;
use crate::error::HttpError;
use crate::shared::SampleDate;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Progress callback for mean-mode resolution, called once per neighbor date
/// with the percentage of the window processed.
pub type ProgressFn<'a> = &'a (dyn Fn(f64) + Sync);

/// Resolves key prices through an injected [`DayStatsApi`].
///
/// All requests are issued one at a time; the resolver never interleaves
/// fetches, which keeps the shared session token safe and the remote endpoint
/// unhammered.
pub struct KeyPriceResolver<'a> {
    api: &'a dyn DayStatsApi,
}

impl<'a> KeyPriceResolver<'a> {
    pub fn new(api: &'a dyn DayStatsApi) -> Self {
        Self { api }
    }

    /// Resolve a key price for `date`, honoring the per-row mode flag.
    pub async fn resolve(
        &self,
        date: &SampleDate,
        mean_mode: bool,
        now: DateTime<Utc>,
        progress: Option<ProgressFn<'_>>,
    ) -> Result<KeyPrice, HttpError> {
        if mean_mode {
            Ok(self.resolve_mean(date, now, progress).await)
        } else {
            self.resolve_single(date).await
        }
    }

    /// Single-date lookup: one fetch, modal price of that day.
    ///
    /// Fetch failures propagate; a day without sales resolves to
    /// [`KeyPrice::Unresolved`].
    pub async fn resolve_single(&self, date: &SampleDate) -> Result<KeyPrice, HttpError> {
        let html = self.api.day_stats_html(date.as_str()).await?;
        Ok(KeyPrice::from_modal(modal_price(&html)))
    }

    /// Mean mode: modal prices across the neighbor window, most frequent wins.
    ///
    /// Per-date failures are substituted with a zero sentinel and the pass
    /// continues; zeros are discarded before taking the mode. Never fails —
    /// a window where every date failed resolves to `Unresolved`.
    pub async fn resolve_mean(
        &self,
        date: &SampleDate,
        now: DateTime<Utc>,
        progress: Option<ProgressFn<'_>>,
    ) -> KeyPrice {
        let Some(window) = neighbor_window(date, now) else {
            tracing::warn!(target: "mptf_helper", date = date.as_str(), "unparseable date, cannot build neighbor window");
            return KeyPrice::Unresolved;
        };

        let total = window.len();
        let mut samples = Vec::with_capacity(total);
        for (index, entry) in window.entries().iter().enumerate() {
            let value = match self.api.day_stats_html(entry.as_str()).await {
                Ok(html) => modal_price(&html).unwrap_or(Decimal::ZERO),
                Err(err) => {
                    tracing::warn!(
                        target: "mptf_helper",
                        date = entry.as_str(),
                        error = %err,
                        "day-stats fetch failed, substituting zero"
                    );
                    Decimal::ZERO
                }
            };
            samples.push(value);

            if let Some(report) = progress {
                if total > 1 {
                    report(index as f64 / (total - 1) as f64 * 100.0);
                }
            }
        }

        let survivors: Vec<Decimal> = samples.into_iter().filter(|v| !v.is_zero()).collect();
        KeyPrice::from_modal(most_frequent(&survivors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays a scripted sequence of responses, one per request.
    struct ScriptedApi {
        responses: Mutex<VecDeque<Result<String, HttpError>>>,
    }

    impl ScriptedApi {
        fn new(responses: Vec<Result<String, HttpError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
            }
        }
    }

    #[async_trait]
    impl DayStatsApi for ScriptedApi {
        async fn day_stats_html(&self, _timestamp: &str) -> Result<String, HttpError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("more requests than scripted responses")
        }
    }

    fn one_row_table(price: &str) -> String {
        format!("<table><tbody><tr><td>{price}</td><td>1</td></tr></tbody></table>")
    }

    fn fetch_failed() -> HttpError {
        HttpError::ServerError {
            status: 500,
            body: String::new(),
        }
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        use chrono::TimeZone;
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn single_mode_returns_modal_price() {
        let api = ScriptedApi::new(vec![Ok(one_row_table("$2.45"))]);
        let resolver = KeyPriceResolver::new(&api);
        let key = resolver
            .resolve_single(&SampleDate::from("Jan 5, 2024"))
            .await
            .unwrap();
        assert_eq!(key, KeyPrice::Resolved(dec!(2.45)));
    }

    #[tokio::test]
    async fn single_mode_propagates_fetch_failure() {
        let api = ScriptedApi::new(vec![Err(fetch_failed())]);
        let resolver = KeyPriceResolver::new(&api);
        let err = resolver
            .resolve_single(&SampleDate::from("Jan 5, 2024"))
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::ServerError { status: 500, .. }));
    }

    #[tokio::test]
    async fn single_mode_empty_day_is_unresolved() {
        let api = ScriptedApi::new(vec![Ok("<table><tbody></tbody></table>".into())]);
        let resolver = KeyPriceResolver::new(&api);
        let key = resolver
            .resolve_single(&SampleDate::from("Jan 5, 2024"))
            .await
            .unwrap();
        assert_eq!(key, KeyPrice::Unresolved);
    }

    #[tokio::test]
    async fn mean_mode_takes_mode_after_dropping_failures() {
        // Window of 7: modal prices 5, 5, 3, <failed>, 4, 5, <no sales>.
        // The failure and the empty day become zeros and are discarded.
        let api = ScriptedApi::new(vec![
            Ok(one_row_table("$5")),
            Ok(one_row_table("$5")),
            Ok(one_row_table("$3")),
            Err(fetch_failed()),
            Ok(one_row_table("$4")),
            Ok(one_row_table("$5")),
            Ok("<table><tbody></tbody></table>".into()),
        ]);
        let resolver = KeyPriceResolver::new(&api);
        let key = resolver
            .resolve_mean(&SampleDate::from("Jan 5, 2024"), noon(2024, 1, 10), None)
            .await;
        assert_eq!(key, KeyPrice::Resolved(dec!(5)));
    }

    #[tokio::test]
    async fn mean_mode_all_failed_is_unresolved() {
        let api = ScriptedApi::new((0..7).map(|_| Err(fetch_failed())).collect());
        let resolver = KeyPriceResolver::new(&api);
        let key = resolver
            .resolve_mean(&SampleDate::from("Jan 5, 2024"), noon(2024, 1, 10), None)
            .await;
        assert_eq!(key, KeyPrice::Unresolved);
    }

    #[tokio::test]
    async fn mean_mode_reports_progress_per_neighbor() {
        let api = ScriptedApi::new((0..7).map(|_| Ok(one_row_table("$5"))).collect());
        let resolver = KeyPriceResolver::new(&api);
        let seen = Mutex::new(Vec::new());
        let record = |pct: f64| seen.lock().unwrap().push(pct);
        resolver
            .resolve_mean(
                &SampleDate::from("Jan 5, 2024"),
                noon(2024, 1, 10),
                Some(&record),
            )
            .await;

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 7);
        assert_eq!(seen[0], 0.0);
        assert_eq!(*seen.last().unwrap(), 100.0);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn mean_mode_unparseable_date_is_unresolved_without_fetching() {
        let api = ScriptedApi::new(vec![]);
        let resolver = KeyPriceResolver::new(&api);
        let key = resolver
            .resolve_mean(&SampleDate::from("???"), noon(2024, 1, 10), None)
            .await;
        assert_eq!(key, KeyPrice::Unresolved);
    }
}
