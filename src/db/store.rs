use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DbConfig;
use crate::db::{QuoteStore, utils};
use crate::error::StoreError;
use crate::models::{QuoteRecord, StoredQuote};

pub struct PgQuoteStore {
    pool: PgPool,
}

impl PgQuoteStore {
    pub fn connect(config: &DbConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy(&config.connection_url())
            .map_err(StoreError::Unavailable)?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QuoteStore for PgQuoteStore {
    async fn upsert(&self, record: &QuoteRecord) -> Result<StoredQuote, StoreError> {
        // Single conflict-aware statement; the UNIQUE (ticker, as_of_date)
        // constraint makes racing writers converge on one row, last writer
        // wins. xmax is 0 only for freshly inserted rows.
        let row = sqlx::query(
            r#"
            INSERT INTO stock_quotes
            (ticker, as_of_date, opening_price, closing_price, low_price, high_price, volume, last_updated)
            VALUES ($1, $2, $3, $4, $5, $6, $7, now())
            ON CONFLICT (ticker, as_of_date) DO UPDATE SET
                opening_price = EXCLUDED.opening_price,
                closing_price = EXCLUDED.closing_price,
                low_price = EXCLUDED.low_price,
                high_price = EXCLUDED.high_price,
                volume = EXCLUDED.volume,
                last_updated = now()
            RETURNING
                id, ticker, as_of_date, opening_price, closing_price,
                low_price, high_price, volume, last_updated,
                (xmax = 0) AS created
            "#,
        )
        .bind(record.ticker())
        .bind(record.as_of_date())
        .bind(record.opening_price())
        .bind(record.closing_price())
        .bind(record.low_price())
        .bind(record.high_price())
        .bind(record.volume())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx_error(err, record))?;

        utils::parse_stored_quote(&row).map_err(|err| StoreError::SchemaMismatch(err.to_string()))
    }
}

fn map_sqlx_error(err: sqlx::Error, record: &QuoteRecord) -> StoreError {
    if let sqlx::Error::ColumnNotFound(column) = &err {
        return StoreError::SchemaMismatch(format!("missing column '{}'", column));
    }

    if let sqlx::Error::Database(db) = &err {
        let code = db.code().map(|code| code.to_string()).unwrap_or_default();
        match code.as_str() {
            // unique_violation: a racing writer got past the conflict path
            "23505" => {
                return StoreError::ConstraintViolation(format!(
                    "duplicate row for ({}, {})",
                    record.ticker(),
                    record.as_of_date()
                ));
            }
            // undefined_table / undefined_column
            "42P01" | "42703" => return StoreError::SchemaMismatch(db.message().to_string()),
            _ => {}
        }
    }

    StoreError::Unavailable(err)
}
