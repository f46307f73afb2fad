//! Wire types for the day-stats endpoint.

use serde::{Deserialize, Serialize};

/// Response envelope of `POST /ajax/items/GetDayStats`.
///
/// The payload itself is a server-rendered HTML table; `success: false`
/// carries a human-readable message instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayStatsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_success_envelope() {
        let resp: DayStatsResponse =
            serde_json::from_str(r#"{"success":true,"html":"<table></table>"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.html, "<table></table>");
        assert!(resp.message.is_none());
    }

    #[test]
    fn deserializes_failure_envelope() {
        let resp: DayStatsResponse =
            serde_json::from_str(r#"{"success":false,"message":"No data"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("No data"));
        assert!(resp.html.is_empty());
    }
}
