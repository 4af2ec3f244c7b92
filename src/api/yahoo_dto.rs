use chrono::{TimeZone, Utc};
use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::Deserialize;

use crate::models::Bar;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    pub quote: Vec<QuoteIndicators>,
}

// The chart payload is column-oriented: one array per field, aligned by
// index with `timestamp`. Any entry may be null.
#[derive(Debug, Deserialize)]
pub struct QuoteIndicators {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<i64>>,
}

impl ChartResult {
    /// Rows with a missing field are dropped rather than patched together
    /// from neighbouring rows.
    pub fn to_bars(&self) -> Vec<Bar> {
        let Some(quote) = self.indicators.quote.first() else {
            return Vec::new();
        };

        self.timestamp
            .iter()
            .enumerate()
            .filter_map(|(index, ts)| {
                let timestamp = Utc.timestamp_opt(*ts, 0).single()?;
                let open = price_at(&quote.open, index)?;
                let high = price_at(&quote.high, index)?;
                let low = price_at(&quote.low, index)?;
                let close = price_at(&quote.close, index)?;
                let volume = quote.volume.get(index).copied().flatten()?;

                Some(Bar::new(timestamp, open, high, low, close, volume))
            })
            .collect()
    }
}

fn price_at(values: &[Option<f64>], index: usize) -> Option<Decimal> {
    values
        .get(index)
        .copied()
        .flatten()
        .and_then(Decimal::from_f64)
}
