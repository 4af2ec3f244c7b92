use log::{debug, info};

use crate::api::MarketDataSource;
use crate::db::QuoteStore;
use crate::error::IngestError;
use crate::models::quote::normalize_ticker;
use crate::models::{Period, QuoteRecord, StoredQuote};

pub struct IngestService<S, R> {
    source: S,
    store: R,
    period: Period,
}

impl<S, R> IngestService<S, R>
where
    S: MarketDataSource,
    R: QuoteStore,
{
    pub fn new(source: S, store: R, period: Period) -> Self {
        Self {
            source,
            store,
            period,
        }
    }

    /// Fetches the latest series for `ticker`, normalizes the single most
    /// recent observation and upserts it. Re-running for the same ticker
    /// and trading date refreshes the stored row instead of duplicating it.
    pub async fn ingest(&self, ticker: &str) -> Result<StoredQuote, IngestError> {
        let symbol =
            normalize_ticker(ticker).map_err(|_| IngestError::InvalidTicker(ticker.to_string()))?;

        debug!("fetching {} chart for {}", self.period, symbol);
        let bars = self.source.fetch_daily(&symbol, self.period).await?;

        // The series may hold several rows; the newest timestamp is taken
        // as one atomic unit, never field-by-field across rows.
        let latest = bars
            .into_iter()
            .max_by_key(|bar| *bar.timestamp())
            .ok_or_else(|| IngestError::NoData(symbol.clone()))?;

        let record = QuoteRecord::from_bar(&symbol, &latest)?;
        let stored = self.store.upsert(&record).await?;

        info!(
            "{} quote row {} for {} on {}",
            if *stored.created() { "created" } else { "updated" },
            stored.id(),
            stored.ticker(),
            stored.as_of_date()
        );

        Ok(stored)
    }
}
