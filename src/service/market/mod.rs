use std::time::Duration as StdDuration;

use chrono::{NaiveDate, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::TradierConfig;
use crate::models::{
    CalendarEnvelope, EarningsEvent, ExpirationsResponse, HistoryResponse, LookupResponse,
    OptionChainResponse, OptionContract, PriceBar, QuoteResponse, Security,
};

pub mod calendar;
pub mod window;

pub use calendar::extract_earnings_events;
pub use window::{compute_window, HistoricalWindow, Interval, SeasonalDuration};

const OPTION_EXPIRATIONS: &str = "v1/markets/options/expirations";
const OPTION_CHAINS: &str = "v1/markets/options/chains";
const QUOTES: &str = "v1/markets/quotes";
const LOOKUP: &str = "v1/markets/lookup";
const HISTORY: &str = "v1/markets/history";
const CALENDARS: &str = "beta/markets/fundamentals/calendars";

const REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(15);

/// Bytes of response body echoed into decode errors.
const BODY_PREVIEW_LIMIT: usize = 500;

#[derive(Debug, thiserror::Error)]
pub enum MarketServiceError {
    #[error("tradier request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("tradier api status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to decode tradier response: {source}; body preview: {preview}")]
    Decode {
        source: serde_json::Error,
        preview: String,
    },
    #[error("no quote data for symbol {0}")]
    NotFound(String),
    #[error("unable to determine price for {symbol} on {date}")]
    NoPriceData { symbol: String, date: NaiveDate },
    #[error("calendar response contained no result envelopes")]
    CalendarEmpty,
    #[error("expected a single calendar envelope, got {count}")]
    CalendarAmbiguous { count: usize },
    #[error("unknown seasonal duration token: {0}")]
    InvalidDuration(String),
    #[error("unknown interval: {0}")]
    InvalidInterval(String),
    #[error("TRADIER_TOKEN is not set")]
    MissingToken,
}

/// Client for the Tradier market-data endpoints.
///
/// One outbound request per operation; no retries, no caching, no shared
/// state between calls. Concurrent use from multiple tasks is fine since
/// `reqwest::Client` is internally reference-counted.
pub struct MarketService {
    http: reqwest::Client,
    config: TradierConfig,
}

impl MarketService {
    pub fn new(config: TradierConfig) -> Result<Self, MarketServiceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, config })
    }

    /// Build a service from `TRADIER_BASE_URI`/`TRADIER_TOKEN`.
    pub fn from_env() -> Result<Self, MarketServiceError> {
        Self::new(TradierConfig::from_env()?)
    }

    /// Expiration dates with listed option contracts for a symbol. A symbol
    /// without options yields an empty list.
    pub async fn get_option_expirations(
        &self,
        symbol: &str,
    ) -> Result<Vec<NaiveDate>, MarketServiceError> {
        info!("Fetching option expirations for {symbol}");

        let resp: ExpirationsResponse = self
            .get_json(OPTION_EXPIRATIONS, &[("symbol", symbol)])
            .await?;
        Ok(resp.into_dates())
    }

    /// Full option chain for a symbol and expiration, greeks included.
    pub async fn get_option_chain(
        &self,
        symbol: &str,
        expiration: NaiveDate,
    ) -> Result<Vec<OptionContract>, MarketServiceError> {
        info!("Fetching option chain for {symbol} expiring {expiration}");

        let expiration = expiration.format("%Y-%m-%d").to_string();
        let resp: OptionChainResponse = self
            .get_json(
                OPTION_CHAINS,
                &[
                    ("symbol", symbol),
                    ("expiration", expiration.as_str()),
                    ("greeks", "true"),
                ],
            )
            .await?;
        Ok(resp.into_contracts())
    }

    /// Last traded price for a symbol.
    pub async fn get_current_price(&self, symbol: &str) -> Result<f64, MarketServiceError> {
        info!("Fetching current price for {symbol}");

        let resp: QuoteResponse = self.get_json(QUOTES, &[("symbols", symbol)]).await?;
        resp.into_quotes()
            .into_iter()
            .next()
            .and_then(|quote| quote.last)
            .ok_or_else(|| MarketServiceError::NotFound(symbol.to_string()))
    }

    /// Securities matching a free-text query. No match is an empty list.
    pub async fn lookup_symbol(&self, query: &str) -> Result<Vec<Security>, MarketServiceError> {
        info!("Looking up securities for {query:?}");

        let resp: LookupResponse = self.get_json(LOOKUP, &[("q", query)]).await?;
        Ok(resp.into_securities())
    }

    /// Opening price for a symbol on a specific trading day. A date with no
    /// trading record is [`MarketServiceError::NoPriceData`], never a
    /// placeholder price.
    pub async fn get_price_at_date(
        &self,
        symbol: &str,
        date: NaiveDate,
    ) -> Result<f64, MarketServiceError> {
        info!("Fetching opening price for {symbol} on {date}");

        let day = date.format("%Y-%m-%d").to_string();
        let resp: HistoryResponse = self
            .get_json(
                HISTORY,
                &[
                    ("symbol", symbol),
                    ("interval", Interval::Daily.as_str()),
                    ("start", day.as_str()),
                    ("end", day.as_str()),
                    ("session_filter", "all"),
                ],
            )
            .await?;

        resp.into_bars()
            .into_iter()
            .next()
            .and_then(|bar| bar.open)
            .ok_or_else(|| MarketServiceError::NoPriceData {
                symbol: symbol.to_string(),
                date,
            })
    }

    /// Historical price series over a lookback window aligned per interval
    /// (see [`compute_window`]).
    pub async fn get_seasonal_view(
        &self,
        symbol: &str,
        duration: SeasonalDuration,
        interval: Interval,
    ) -> Result<Vec<PriceBar>, MarketServiceError> {
        let today = Utc::now().date_naive();
        let window = compute_window(duration, interval, today);
        info!(
            "Fetching seasonal view for {symbol}: {} {} to {}",
            interval, window.start, window.end
        );

        let start = window.start.format("%Y-%m-%d").to_string();
        let end = window.end.format("%Y-%m-%d").to_string();
        let resp: HistoryResponse = self
            .get_json(
                HISTORY,
                &[
                    ("symbol", symbol),
                    ("interval", interval.as_str()),
                    ("start", start.as_str()),
                    ("end", end.as_str()),
                    ("session_filter", "all"),
                ],
            )
            .await?;
        Ok(resp.into_bars())
    }

    /// Confirmed quarterly-earnings events for a symbol, earliest first.
    pub async fn get_earning_dates(
        &self,
        symbol: &str,
    ) -> Result<Vec<EarningsEvent>, MarketServiceError> {
        info!("Fetching earnings calendar for {symbol}");

        let envelopes: Vec<CalendarEnvelope> =
            self.get_json(CALENDARS, &[("symbols", symbol)]).await?;
        extract_earnings_events(&envelopes)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, MarketServiceError> {
        let resp = self
            .http
            .get(self.config.endpoint(path))
            .query(query)
            .bearer_auth(&self.config.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "unable to read body".to_string());
            warn!("Tradier returned status {status} for {path}: {body}");
            return Err(MarketServiceError::Status { status, body });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            let preview =
                String::from_utf8_lossy(&bytes[..bytes.len().min(BODY_PREVIEW_LIMIT)]).into_owned();
            warn!("Failed to decode Tradier response for {path}: {e}");
            MarketServiceError::Decode { source: e, preview }
        })
    }
}
