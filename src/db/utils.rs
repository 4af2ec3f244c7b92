use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{Row, postgres::PgRow};

use crate::models::StoredQuote;

pub fn parse_i64_from_row(row: &PgRow, column: &str) -> Result<i64> {
    row.try_get::<i64, _>(column)
        .with_context(|| format!("Failed to parse i64 from column '{}'", column))
}

pub fn parse_string_from_row(row: &PgRow, column: &str) -> Result<String> {
    row.try_get::<String, _>(column)
        .with_context(|| format!("Failed to parse String from column '{}'", column))
}

pub fn parse_bool_from_row(row: &PgRow, column: &str) -> Result<bool> {
    row.try_get::<bool, _>(column)
        .with_context(|| format!("Failed to parse bool from column '{}'", column))
}

pub fn parse_decimal_from_row(row: &PgRow, column: &str) -> Result<Decimal> {
    row.try_get::<Decimal, _>(column)
        .with_context(|| format!("Failed to parse Decimal from column '{}'", column))
}

pub fn parse_date_from_row(row: &PgRow, column: &str) -> Result<NaiveDate> {
    row.try_get::<NaiveDate, _>(column)
        .with_context(|| format!("Failed to parse date from column '{}'", column))
}

pub fn parse_timestamp_from_row(row: &PgRow, column: &str) -> Result<DateTime<Utc>> {
    row.try_get::<DateTime<Utc>, _>(column)
        .with_context(|| format!("Failed to parse timestamp from column '{}'", column))
}

pub fn parse_stored_quote(row: &PgRow) -> Result<StoredQuote> {
    let id = parse_i64_from_row(row, "id")?;
    let ticker = parse_string_from_row(row, "ticker")?;
    let as_of_date = parse_date_from_row(row, "as_of_date")?;
    let opening_price = parse_decimal_from_row(row, "opening_price")?;
    let closing_price = parse_decimal_from_row(row, "closing_price")?;
    let low_price = parse_decimal_from_row(row, "low_price")?;
    let high_price = parse_decimal_from_row(row, "high_price")?;
    let volume = parse_i64_from_row(row, "volume")?;
    let last_updated = parse_timestamp_from_row(row, "last_updated")?;
    let created = parse_bool_from_row(row, "created")?;

    Ok(StoredQuote::new(
        id,
        ticker,
        as_of_date,
        opening_price,
        closing_price,
        low_price,
        high_price,
        volume,
        last_updated,
        created,
    ))
}
