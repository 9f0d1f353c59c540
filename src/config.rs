use std::env;

use crate::service::market::MarketServiceError;

/// Host used when `TRADIER_BASE_URI` is not set. Sandbox tokens are free,
/// so this is the safe default.
const SANDBOX_BASE_URI: &str = "https://sandbox.tradier.com/";

/// Connection settings for the Tradier API.
///
/// Injected into [`MarketService`](crate::MarketService) at construction so
/// tests can build a service against a local server without touching the
/// process environment.
#[derive(Debug, Clone)]
pub struct TradierConfig {
    pub base_url: String,
    pub token: String,
}

impl TradierConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Read configuration from the process environment, loading `.env` first
    /// if one is present. `TRADIER_BASE_URI` falls back to the sandbox host;
    /// a missing `TRADIER_TOKEN` is an error.
    pub fn from_env() -> Result<Self, MarketServiceError> {
        dotenvy::dotenv().ok();

        let base_url =
            env::var("TRADIER_BASE_URI").unwrap_or_else(|_| SANDBOX_BASE_URI.to_string());
        let token = env::var("TRADIER_TOKEN").map_err(|_| MarketServiceError::MissingToken)?;

        Ok(Self { base_url, token })
    }

    /// Join an endpoint path onto the configured base URL, tolerating a
    /// trailing slash either way.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
