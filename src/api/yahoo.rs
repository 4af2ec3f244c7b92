use async_trait::async_trait;
use reqwest::Client;

use crate::api::{MarketDataSource, utils};
use crate::api::yahoo_dto::ChartResponse;
use crate::error::SourceError;
use crate::models::{Bar, Period};

const BASE_URL: &str = "https://query1.finance.yahoo.com";

#[derive(Clone, Debug)]
pub struct YahooFinance {
    client: Client,
    base_url: String,
}

impl Default for YahooFinance {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooFinance {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }
}

#[async_trait]
impl MarketDataSource for YahooFinance {
    async fn fetch_daily(&self, symbol: &str, period: Period) -> Result<Vec<Bar>, SourceError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url, symbol, period
        );
        let (status, body) = utils::fetch_body(&self.client, &url).await?;

        // Unknown symbols come back as an error payload, often with a
        // non-2xx status, so decode before rejecting on status alone.
        let response = match serde_json::from_str::<ChartResponse>(&body) {
            Ok(response) => response,
            Err(_) if !(200..300).contains(&status) => {
                return Err(SourceError::Status { status });
            }
            Err(err) => return Err(SourceError::Malformed(err.to_string())),
        };

        series_from_response(response)
    }
}

pub fn series_from_response(response: ChartResponse) -> Result<Vec<Bar>, SourceError> {
    if let Some(error) = response.chart.error {
        if error.code.eq_ignore_ascii_case("not found") {
            return Ok(Vec::new());
        }
        return Err(SourceError::Malformed(format!(
            "{}: {}",
            error.code, error.description
        )));
    }

    let results = response.chart.result.unwrap_or_default();
    Ok(results
        .first()
        .map(|result| result.to_bars())
        .unwrap_or_default())
}
