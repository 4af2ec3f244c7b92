use clap::Parser;
use log::warn;

use stock_quote_collector::api::YahooFinance;
use stock_quote_collector::config::DbConfig;
use stock_quote_collector::db::{PgQuoteStore, init};
use stock_quote_collector::error::IngestError;
use stock_quote_collector::models::Period;
use stock_quote_collector::services::IngestService;

#[derive(Debug, Parser)]
#[command(
    name = "stock-quote-collector",
    about = "Collects a daily OHLCV stock quote and upserts it into PostgreSQL",
    version
)]
struct Cli {
    /// Ticker symbol to ingest
    ticker: String,

    /// Lookback window requested from the market data source (1d, 5d, 1mo)
    #[arg(long, default_value = "1d")]
    period: Period,

    /// Skip the schema bootstrap on startup
    #[arg(long)]
    skip_schema: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let config = DbConfig::from_env()?;
    let store = PgQuoteStore::connect(&config)?;

    if !cli.skip_schema {
        init::create_stock_quotes(store.pool()).await?;
    }

    let service = IngestService::new(YahooFinance::new(), store, cli.period);

    match service.ingest(&cli.ticker).await {
        Ok(stored) => {
            println!(
                "{} {} on {}: open={} close={} low={} high={} volume={} (row {})",
                if *stored.created() { "Created" } else { "Updated" },
                stored.ticker(),
                stored.as_of_date(),
                stored.opening_price(),
                stored.closing_price(),
                stored.low_price(),
                stored.high_price(),
                stored.volume(),
                stored.id()
            );
            Ok(())
        }
        Err(IngestError::NoData(symbol)) => {
            warn!("no market data available for {}", symbol);
            println!("No market data available for {}", symbol);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
