//! Typed async client for the Tradier market-data API: quotes, options
//! chains and expirations, historical prices, symbol lookup, and
//! corporate-calendar earnings events.

pub mod config;
pub mod models;
pub mod service;

pub use config::TradierConfig;
pub use service::market::{
    compute_window, extract_earnings_events, HistoricalWindow, Interval, MarketService,
    MarketServiceError, SeasonalDuration,
};
