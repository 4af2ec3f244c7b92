pub mod utils;
pub mod yahoo;
pub mod yahoo_dto;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::models::{Bar, Period};

/// Market data boundary: a time-indexed OHLCV series for one symbol.
/// An empty series means the provider has no data for the symbol and
/// window, which is a benign outcome rather than an error.
#[async_trait]
pub trait MarketDataSource {
    async fn fetch_daily(&self, symbol: &str, period: Period) -> Result<Vec<Bar>, SourceError>;
}

pub use yahoo::YahooFinance;
