//! Date relevance and neighbor-window logic.
//!
//! Two pieces feed key-price resolution:
//!
//! - [`filter_relevant`] keeps only samples recent enough to matter for a
//!   price suggestion (fixed 30-day month approximation, same arithmetic the
//!   site community uses).
//! - [`neighbor_window`] produces the calendar dates surrounding a target
//!   sample for mean-mode resolution.

use crate::shared::SampleDate;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Seconds in the fixed 30-day "month" the recency window uses.
/// Deliberately not calendar-month-aware.
const MONTH_SECS: i64 = 60 * 60 * 24 * 30;

/// Neighbors collected after the target before topping up the before side.
const AFTER_TARGET: usize = 3;

fn day_start_utc(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Keep the dates that fall inside the recency window.
///
/// A date is relevant iff `now - window_months * 30d < date`. Input order is
/// preserved. Labels that do not parse as dates are dropped: the comparison
/// can never hold for them, matching the host script's NaN-timestamp
/// behavior.
pub fn filter_relevant(
    dates: &[SampleDate],
    window_months: u32,
    now: DateTime<Utc>,
) -> Vec<SampleDate> {
    let cutoff = now.timestamp() - i64::from(window_months) * MONTH_SECS;

    dates
        .iter()
        .filter(|date| match date.parse_day() {
            Some(day) => cutoff < day_start_utc(day).timestamp(),
            None => false,
        })
        .cloned()
        .collect()
}

/// The neighbor dates used for a mean-mode key-price estimate.
///
/// Chronological: before-dates, the target itself, then after-dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborWindow {
    entries: Vec<SampleDate>,
    target_index: usize,
}

impl NeighborWindow {
    /// All lookup keys, oldest first. The target keeps its original label;
    /// generated neighbors use the same label format.
    pub fn entries(&self) -> &[SampleDate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the target date within [`entries`](Self::entries).
    pub fn target_index(&self) -> usize {
        self.target_index
    }
}

/// Build the neighbor window around `target`.
///
/// Walks forward one day at a time collecting up to 3 dates strictly before
/// `now`; any deficit on the after side is made up with extra dates before
/// the target (`before = 3 + (3 - after)`), so the window holds the target
/// plus 6 neighbors whenever the calendar allows.
///
/// Returns `None` when the target label does not parse as a date.
pub fn neighbor_window(target: &SampleDate, now: DateTime<Utc>) -> Option<NeighborWindow> {
    let t = target.parse_day()?;

    let mut after = Vec::with_capacity(AFTER_TARGET);
    let mut cursor = t + Duration::days(1);
    while after.len() < AFTER_TARGET && day_start_utc(cursor) < now {
        after.push(SampleDate::from_day(cursor));
        cursor += Duration::days(1);
    }

    let before_count = AFTER_TARGET + (AFTER_TARGET - after.len());

    let mut entries = Vec::with_capacity(before_count + 1 + after.len());
    for offset in (1..=before_count as i64).rev() {
        entries.push(SampleDate::from_day(t - Duration::days(offset)));
    }
    let target_index = entries.len();
    entries.push(target.clone());
    entries.extend(after);

    Some(NeighborWindow {
        entries,
        target_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn dates(labels: &[&str]) -> Vec<SampleDate> {
        labels.iter().map(|l| SampleDate::from(*l)).collect()
    }

    #[test]
    fn filter_keeps_recent_preserving_order() {
        let now = noon(2024, 4, 1);
        let input = dates(&["Mar 30, 2024", "Jan 15, 2024", "Mar 1, 2024"]);
        let out = filter_relevant(&input, 3, now);
        assert_eq!(
            out,
            dates(&["Mar 30, 2024", "Jan 15, 2024", "Mar 1, 2024"])
        );
    }

    #[test]
    fn filter_drops_dates_outside_window() {
        let now = noon(2024, 4, 1);
        let input = dates(&["Dec 1, 2023", "Mar 30, 2024", "Jun 5, 2023"]);
        let out = filter_relevant(&input, 3, now);
        assert_eq!(out, dates(&["Mar 30, 2024"]));
    }

    #[test]
    fn filter_window_uses_thirty_day_months() {
        // 3 * 30 days before Apr 1 noon is Jan 2 noon; Jan 2 midnight is
        // outside the strict bound, Jan 3 is inside.
        let now = noon(2024, 4, 1);
        let input = dates(&["Jan 2, 2024", "Jan 3, 2024"]);
        let out = filter_relevant(&input, 3, now);
        assert_eq!(out, dates(&["Jan 3, 2024"]));
    }

    #[test]
    fn filter_drops_malformed_labels() {
        let now = noon(2024, 4, 1);
        let input = dates(&["garbage", "Mar 30, 2024"]);
        let out = filter_relevant(&input, 3, now);
        assert_eq!(out, dates(&["Mar 30, 2024"]));
    }

    #[test]
    fn window_is_balanced_when_future_allows() {
        let now = noon(2024, 1, 10);
        let target = SampleDate::from("Jan 5, 2024");
        let w = neighbor_window(&target, now).unwrap();
        assert_eq!(
            w.entries(),
            dates(&[
                "Jan 2, 2024",
                "Jan 3, 2024",
                "Jan 4, 2024",
                "Jan 5, 2024",
                "Jan 6, 2024",
                "Jan 7, 2024",
                "Jan 8, 2024",
            ])
            .as_slice()
        );
        assert_eq!(w.target_index(), 3);
    }

    #[test]
    fn after_deficit_shifts_to_before_side() {
        // Only Jan 9 and Jan 10 exist after the target, so two extra
        // before-dates make up the difference.
        let now = noon(2024, 1, 10);
        let target = SampleDate::from("Jan 8, 2024");
        let w = neighbor_window(&target, now).unwrap();
        assert_eq!(w.len(), 7);
        assert_eq!(
            w.entries(),
            dates(&[
                "Jan 4, 2024",
                "Jan 5, 2024",
                "Jan 6, 2024",
                "Jan 7, 2024",
                "Jan 8, 2024",
                "Jan 9, 2024",
                "Jan 10, 2024",
            ])
            .as_slice()
        );
        assert_eq!(w.target_index(), 4);
    }

    #[test]
    fn today_as_target_pads_entirely_backwards() {
        let now = noon(2024, 1, 10);
        let target = SampleDate::from("Jan 10, 2024");
        let w = neighbor_window(&target, now).unwrap();
        assert_eq!(w.len(), 7);
        assert_eq!(w.target_index(), 6);
        assert_eq!(w.entries()[0], SampleDate::from("Jan 4, 2024"));
    }

    #[test]
    fn target_keeps_its_original_label() {
        let now = noon(2024, 1, 10);
        let target = SampleDate::from("Jan 05, 2024"); // padded, as some charts render
        let w = neighbor_window(&target, now).unwrap();
        assert_eq!(&w.entries()[w.target_index()], &target);
    }

    #[test]
    fn malformed_target_yields_no_window() {
        assert!(neighbor_window(&SampleDate::from("???"), noon(2024, 1, 10)).is_none());
    }

    #[test]
    fn window_crosses_month_boundaries() {
        let now = noon(2024, 3, 15);
        let target = SampleDate::from("Mar 1, 2024");
        let w = neighbor_window(&target, now).unwrap();
        assert_eq!(w.entries()[0], SampleDate::from("Feb 27, 2024"));
        assert_eq!(w.entries()[6], SampleDate::from("Mar 4, 2024"));
    }
}
