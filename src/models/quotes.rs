use serde::{Deserialize, Serialize};

use super::OneOrMany;

/// One quote as returned by `v1/markets/quotes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Last traded price. Absent before the first trade of a session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prevclose: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct QuotesEnvelope {
    #[serde(default)]
    pub quote: Option<OneOrMany<Quote>>,
}

/// Top-level envelope for `v1/markets/quotes`. `quotes` is null when the
/// API matched no symbols.
#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub quotes: Option<QuotesEnvelope>,
}

impl QuoteResponse {
    /// All matched quotes, regardless of how the wire nested them.
    pub fn into_quotes(self) -> Vec<Quote> {
        self.quotes
            .and_then(|q| q.quote)
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
    }
}
