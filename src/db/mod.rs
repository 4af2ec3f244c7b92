pub mod init;
pub mod store;
pub mod utils;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{QuoteRecord, StoredQuote};

/// Persistence gateway. Implementations must make `upsert` atomic: two
/// concurrent calls with the same `(ticker, as_of_date)` converge to a
/// single row with the last writer's values.
#[async_trait]
pub trait QuoteStore {
    async fn upsert(&self, record: &QuoteRecord) -> Result<StoredQuote, StoreError>;
}

pub use store::PgQuoteStore;
