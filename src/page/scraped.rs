//! `ScrapedPage` — host-page state extracted from raw item-page HTML.
//!
//! The page embeds its state as inline script globals: the `MPTF` session
//! object (JSON, carries `csrfCode`) and the `itemSalesChartData` chart
//! config the sales graph is rendered from. Both are captured by regex and
//! parsed as JSON; the item name comes from the `og:title` meta tag.

use super::{ChartSeries, HostPage};
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};

lazy_static! {
    static ref OG_TITLE_SELECTOR: Selector =
        Selector::parse(r#"meta[property="og:title"]"#).unwrap();
    // Non-greedy: the capture ends at the first `};`. A `};` inside one of
    // the session object's string values truncates the capture, the mangled
    // JSON fails to parse, and the token reads as absent.
    static ref SESSION_RE: Regex = Regex::new(r"(?s)MPTF\s*=\s*(\{.*?\})\s*;").unwrap();
    static ref CHART_RE: Regex =
        Regex::new(r"(?s)itemSalesChartData\s*=\s*(\{.*?\})\s*;").unwrap();
}

/// Host-page state scraped from the item page's HTML.
#[derive(Debug, Clone)]
pub struct ScrapedPage {
    path: String,
    csrf: Option<String>,
    item_name: Option<String>,
    chart: Option<ChartSeries>,
}

impl ScrapedPage {
    /// Extract page state from raw HTML. Extraction is best-effort: anything
    /// the page does not carry is simply absent, and callers decide whether
    /// that is fatal.
    pub fn from_html(path: impl Into<String>, html: &str) -> Self {
        let doc = Html::parse_document(html);

        let item_name = doc
            .select(&OG_TITLE_SELECTOR)
            .next()
            .and_then(|meta| meta.value().attr("content"))
            .map(String::from);

        let csrf = SESSION_RE
            .captures(html)
            .and_then(|caps| serde_json::from_str::<serde_json::Value>(&caps[1]).ok())
            .and_then(|session| {
                session
                    .get("csrfCode")
                    .and_then(|code| code.as_str())
                    .filter(|code| !code.is_empty())
                    .map(String::from)
            });

        let chart = CHART_RE
            .captures(html)
            .and_then(|caps| serde_json::from_str::<ChartSeries>(&caps[1]).ok());

        Self {
            path: path.into(),
            csrf,
            item_name,
            chart,
        }
    }
}

impl HostPage for ScrapedPage {
    fn path(&self) -> &str {
        &self.path
    }

    fn csrf_token(&self) -> Option<&str> {
        self.csrf.as_deref()
    }

    fn item_name(&self) -> Option<&str> {
        self.item_name.as_deref()
    }

    fn chart(&self) -> Option<&ChartSeries> {
        self.chart.as_ref()
    }
}
