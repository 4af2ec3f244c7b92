use chrono::{DateTime, NaiveDate, Utc};
use derive_getters::Getters;
use derive_new::new;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::QuoteError;

use super::Bar;

static TICKER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9.\-]{0,11}$").expect("ticker pattern"));

pub fn normalize_ticker(ticker: &str) -> Result<String, QuoteError> {
    let trimmed = ticker.trim();
    if trimmed.is_empty() {
        return Err(QuoteError::EmptyTicker);
    }
    if !TICKER_PATTERN.is_match(trimmed) {
        return Err(QuoteError::InvalidTicker(trimmed.to_string()));
    }
    Ok(trimmed.to_uppercase())
}

/// One ticker's trading-day summary, keyed by `(ticker, as_of_date)`.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct QuoteRecord {
    ticker: String,
    as_of_date: NaiveDate,
    opening_price: Decimal,
    closing_price: Decimal,
    low_price: Decimal,
    high_price: Decimal,
    volume: i64,
}

impl QuoteRecord {
    pub fn new(
        ticker: &str,
        as_of_date: NaiveDate,
        opening_price: Decimal,
        closing_price: Decimal,
        low_price: Decimal,
        high_price: Decimal,
        volume: i64,
    ) -> Result<Self, QuoteError> {
        let ticker = normalize_ticker(ticker)?;

        for (field, price) in [
            ("opening_price", opening_price),
            ("closing_price", closing_price),
            ("low_price", low_price),
            ("high_price", high_price),
        ] {
            if price < Decimal::ZERO {
                return Err(QuoteError::NegativeValue { field });
            }
        }
        if volume < 0 {
            return Err(QuoteError::NegativeValue { field: "volume" });
        }
        if low_price > opening_price.min(closing_price)
            || high_price < opening_price.max(closing_price)
        {
            return Err(QuoteError::PriceOutOfRange);
        }

        Ok(Self {
            ticker,
            as_of_date,
            opening_price,
            closing_price,
            low_price,
            high_price,
            volume,
        })
    }

    /// The observation's time-of-day and timezone are discarded here.
    pub fn from_bar(ticker: &str, bar: &Bar) -> Result<Self, QuoteError> {
        Self::new(
            ticker,
            bar.timestamp().date_naive(),
            *bar.open(),
            *bar.close(),
            *bar.low(),
            *bar.high(),
            *bar.volume(),
        )
    }
}

/// A `QuoteRecord` as persisted: store-assigned id, write timestamp and
/// whether the upsert created the row or refreshed an existing one.
#[derive(Clone, Debug, Getters, new)]
pub struct StoredQuote {
    id: i64,
    ticker: String,
    as_of_date: NaiveDate,
    opening_price: Decimal,
    closing_price: Decimal,
    low_price: Decimal,
    high_price: Decimal,
    volume: i64,
    last_updated: DateTime<Utc>,
    created: bool,
}
