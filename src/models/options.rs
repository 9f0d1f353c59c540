use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::OneOrMany;

/// Call/put side of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

/// Sensitivity metrics attached to a contract when `greeks=true` is
/// requested. Sourced from ORATS by Tradier and updated on a delay, so
/// every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vega: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rho: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_iv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid_iv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask_iv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smv_vol: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One contract from `v1/markets/options/chains`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionContract {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub strike: f64,
    pub option_type: OptionType,
    pub expiration_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlying: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_interest: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeks: Option<Greeks>,
}

#[derive(Debug, Deserialize)]
pub struct OptionsEnvelope {
    #[serde(default)]
    pub option: Option<OneOrMany<OptionContract>>,
}

/// Top-level envelope for `v1/markets/options/chains`. `options` is null
/// when the expiration has no listed contracts.
#[derive(Debug, Deserialize)]
pub struct OptionChainResponse {
    #[serde(default)]
    pub options: Option<OptionsEnvelope>,
}

impl OptionChainResponse {
    pub fn into_contracts(self) -> Vec<OptionContract> {
        self.options
            .and_then(|o| o.option)
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct ExpirationsEnvelope {
    #[serde(default)]
    pub date: Option<OneOrMany<NaiveDate>>,
}

/// Top-level envelope for `v1/markets/options/expirations`. `expirations`
/// is null for symbols with no listed options.
#[derive(Debug, Deserialize)]
pub struct ExpirationsResponse {
    #[serde(default)]
    pub expirations: Option<ExpirationsEnvelope>,
}

impl ExpirationsResponse {
    pub fn into_dates(self) -> Vec<NaiveDate> {
        self.expirations
            .and_then(|e| e.date)
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
    }
}
