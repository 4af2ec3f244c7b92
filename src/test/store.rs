#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::config::DbConfig;
    use crate::db::{PgQuoteStore, QuoteStore, init};
    use crate::models::QuoteRecord;

    // These tests need a reachable PostgreSQL; settings come from the same
    // STOCK_DB_* variables the binary uses.
    async fn connect() -> PgQuoteStore {
        dotenv::dotenv().ok();
        let config = DbConfig::from_env().unwrap();
        let store = PgQuoteStore::connect(&config).unwrap();
        init::create_stock_quotes(store.pool()).await.unwrap();
        store
    }

    fn record(ticker: &str, close: Decimal, high: Decimal, volume: i64) -> QuoteRecord {
        QuoteRecord::new(
            ticker,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            dec!(10.0),
            close,
            dec!(9.8),
            high,
            volume,
        )
        .unwrap()
    }

    async fn delete_rows(store: &PgQuoteStore, ticker: &str) {
        sqlx::query("DELETE FROM stock_quotes WHERE ticker = $1")
            .bind(ticker)
            .execute(store.pool())
            .await
            .unwrap();
    }

    async fn count_rows(store: &PgQuoteStore, ticker: &str) -> i64 {
        let (count,): (i64,) =
            sqlx::query_as("SELECT count(*) FROM stock_quotes WHERE ticker = $1")
                .bind(ticker)
                .fetch_one(store.pool())
                .await
                .unwrap();
        count
    }

    #[tokio::test]
    #[ignore]
    async fn upsert_is_idempotent() {
        let store = connect().await;
        delete_rows(&store, "ZZZTA").await;

        let quote = record("ZZZTA", dec!(10.5), dec!(10.7), 12_000);
        let first = store.upsert(&quote).await.unwrap();
        let second = store.upsert(&quote).await.unwrap();

        assert!(first.created());
        assert!(!second.created());
        assert_eq!(first.id(), second.id());
        assert_eq!(second.closing_price(), quote.closing_price());
        assert!(second.last_updated() >= first.last_updated());
        assert_eq!(count_rows(&store, "ZZZTA").await, 1);

        delete_rows(&store, "ZZZTA").await;
    }

    #[tokio::test]
    #[ignore]
    async fn last_writer_wins_for_the_same_key() {
        let store = connect().await;
        delete_rows(&store, "ZZZTB").await;

        let first_write = record("ZZZTB", dec!(10.5), dec!(10.7), 12_000);
        let second_write = record("ZZZTB", dec!(10.9), dec!(11.0), 15_000);

        let first = store.upsert(&first_write).await.unwrap();
        let second = store.upsert(&second_write).await.unwrap();

        assert_eq!(first.id(), second.id());
        assert_eq!(*second.closing_price(), dec!(10.9));
        assert_eq!(*second.high_price(), dec!(11.0));
        assert_eq!(*second.volume(), 15_000);
        assert_eq!(count_rows(&store, "ZZZTB").await, 1);

        delete_rows(&store, "ZZZTB").await;
    }

    #[tokio::test]
    #[ignore]
    async fn different_dates_create_separate_rows() {
        let store = connect().await;
        delete_rows(&store, "ZZZTC").await;

        let friday = QuoteRecord::new(
            "ZZZTC",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            dec!(10.0),
            dec!(10.5),
            dec!(9.8),
            dec!(10.7),
            12_000,
        )
        .unwrap();
        let monday = QuoteRecord::new(
            "ZZZTC",
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            dec!(10.5),
            dec!(10.8),
            dec!(10.2),
            dec!(11.1),
            9_000,
        )
        .unwrap();

        let first = store.upsert(&friday).await.unwrap();
        let second = store.upsert(&monday).await.unwrap();

        assert!(first.created());
        assert!(second.created());
        assert_ne!(first.id(), second.id());
        assert_eq!(count_rows(&store, "ZZZTC").await, 2);

        delete_rows(&store, "ZZZTC").await;
    }
}
