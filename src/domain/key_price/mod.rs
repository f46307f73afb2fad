//! Key-price domain — resolving the reference key's price for a sample date.
//!
//! A key price comes from the day-stats table of the fixed key SKU: either a
//! single date's modal price, or (mean mode) the most frequent modal price
//! across a window of neighboring dates.

pub mod resolver;

pub use resolver::KeyPriceResolver;

use crate::error::HttpError;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Port to the remote day-stats endpoint.
///
/// The live implementation is `http::MptfHttp`; tests substitute fakes.
#[async_trait]
pub trait DayStatsApi: Send + Sync {
    /// Fetch the rendered day-stats table for the reference key SKU on the
    /// given display-format date (`"Jan 5, 2024"`).
    async fn day_stats_html(&self, timestamp: &str) -> Result<String, HttpError>;
}

/// Outcome of a key-price resolution attempt.
///
/// `Unresolved` is the typed form of the `NaN` the host script writes into
/// the table when a day has no sales: it still renders as `NaN`, it just
/// cannot be mistaken for a number along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPrice {
    Resolved(Decimal),
    Unresolved,
}

impl KeyPrice {
    pub fn from_modal(modal: Option<Decimal>) -> Self {
        match modal {
            Some(price) => KeyPrice::Resolved(price),
            None => KeyPrice::Unresolved,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            KeyPrice::Resolved(price) => Some(*price),
            KeyPrice::Unresolved => None,
        }
    }
}

impl std::fmt::Display for KeyPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyPrice::Resolved(price) => write!(f, "{}", price.normalize()),
            KeyPrice::Unresolved => write!(f, "NaN"),
        }
    }
}

/// Count-based mode over decimal values.
///
/// Ties resolve to the first value in insertion order; an empty slice has no
/// mode.
pub fn most_frequent(values: &[Decimal]) -> Option<Decimal> {
    let mut counts: Vec<(Decimal, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some(entry) => entry.1 += 1,
            None => counts.push((*value, 1)),
        }
    }

    let mut best: Option<(Decimal, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn mode_picks_most_frequent() {
        let values = [dec!(5), dec!(5), dec!(3), dec!(4), dec!(5)];
        assert_eq!(most_frequent(&values), Some(dec!(5)));
    }

    #[test]
    fn mode_tie_goes_to_first_inserted() {
        let values = [dec!(2), dec!(3), dec!(2), dec!(3)];
        assert_eq!(most_frequent(&values), Some(dec!(2)));
    }

    #[test]
    fn mode_of_empty_is_none() {
        assert_eq!(most_frequent(&[]), None);
    }

    #[test]
    fn mode_treats_equal_values_with_different_scales_as_one() {
        let values = [dec!(2.0), dec!(2.00), dec!(3)];
        assert_eq!(most_frequent(&values), Some(dec!(2)));
    }

    #[test]
    fn key_price_renders_like_the_site_cell() {
        assert_eq!(KeyPrice::Resolved(dec!(2.10)).to_string(), "2.1");
        assert_eq!(KeyPrice::Unresolved.to_string(), "NaN");
    }
}
