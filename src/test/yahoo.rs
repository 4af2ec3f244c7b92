#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    use crate::api::yahoo::series_from_response;
    use crate::api::yahoo_dto::ChartResponse;
    use crate::error::SourceError;

    // Trimmed-down capture of a real chart payload: column-oriented arrays
    // aligned by index, with one row null-padded.
    const CHART_JSON: &str = r#"
    {
        "chart": {
            "result": [
                {
                    "meta": { "currency": "USD", "symbol": "ACME", "regularMarketPrice": 10.5 },
                    "timestamp": [1709240400, 1709326800, 1709413200],
                    "indicators": {
                        "quote": [
                            {
                                "open": [9.5, 10.0, null],
                                "high": [10.1, 10.7, 10.9],
                                "low": [9.3, 9.8, null],
                                "close": [10.0, 10.5, 10.8],
                                "volume": [8000, 12000, null]
                            }
                        ]
                    }
                }
            ],
            "error": null
        }
    }
    "#;

    const NOT_FOUND_JSON: &str = r#"
    {
        "chart": {
            "result": null,
            "error": {
                "code": "Not Found",
                "description": "No data found, symbol may be delisted"
            }
        }
    }
    "#;

    const EMPTY_RESULT_JSON: &str = r#"{ "chart": { "result": null, "error": null } }"#;

    #[test]
    fn decodes_bars_and_drops_incomplete_rows() {
        let response = serde_json::from_str::<ChartResponse>(CHART_JSON).unwrap();
        let bars = series_from_response(response).unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(
            *bars[0].timestamp(),
            Utc.with_ymd_and_hms(2024, 2, 29, 21, 0, 0).unwrap()
        );
        assert_eq!(*bars[1].open(), dec!(10.0));
        assert_eq!(*bars[1].high(), dec!(10.7));
        assert_eq!(*bars[1].low(), dec!(9.8));
        assert_eq!(*bars[1].close(), dec!(10.5));
        assert_eq!(*bars[1].volume(), 12_000);
    }

    #[test]
    fn unknown_symbol_maps_to_empty_series() {
        let response = serde_json::from_str::<ChartResponse>(NOT_FOUND_JSON).unwrap();
        let bars = series_from_response(response).unwrap();

        assert!(bars.is_empty());
    }

    #[test]
    fn missing_result_maps_to_empty_series() {
        let response = serde_json::from_str::<ChartResponse>(EMPTY_RESULT_JSON).unwrap();
        let bars = series_from_response(response).unwrap();

        assert!(bars.is_empty());
    }

    #[test]
    fn provider_error_is_surfaced() {
        let payload = r#"
        {
            "chart": {
                "result": null,
                "error": { "code": "Bad Request", "description": "Invalid range" }
            }
        }
        "#;
        let response = serde_json::from_str::<ChartResponse>(payload).unwrap();

        assert!(matches!(
            series_from_response(response),
            Err(SourceError::Malformed(_))
        ));
    }
}
