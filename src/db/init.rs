use sqlx::PgPool;
use sqlx::postgres::PgQueryResult;

pub async fn create_stock_quotes(pool: &PgPool) -> Result<PgQueryResult, sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stock_quotes (
            id BIGSERIAL PRIMARY KEY,
            ticker TEXT NOT NULL,
            as_of_date DATE NOT NULL,
            opening_price NUMERIC(18, 4) NOT NULL,
            closing_price NUMERIC(18, 4) NOT NULL,
            low_price NUMERIC(18, 4) NOT NULL,
            high_price NUMERIC(18, 4) NOT NULL,
            volume BIGINT NOT NULL,
            last_updated TIMESTAMPTZ NOT NULL DEFAULT now(),
            UNIQUE (ticker, as_of_date)
        )
        "#,
    )
    .execute(pool)
    .await
}
