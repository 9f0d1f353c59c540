use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::OneOrMany;

/// One aggregated bar from `v1/markets/history`. OHLCV fields can be null
/// for halted sessions, so only the date is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryEnvelope {
    #[serde(default)]
    pub day: Option<OneOrMany<PriceBar>>,
}

/// Top-level envelope for `v1/markets/history`. `history` is null when the
/// requested range holds no trading days.
#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Option<HistoryEnvelope>,
}

impl HistoryResponse {
    /// Bars in the response, whether the wire carried one day or many.
    pub fn into_bars(self) -> Vec<PriceBar> {
        self.history
            .and_then(|h| h.day)
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
    }
}
