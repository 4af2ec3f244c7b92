pub mod bar;
pub mod period;
pub mod quote;

pub use bar::Bar;
pub use period::Period;
pub use quote::{QuoteRecord, StoredQuote};
