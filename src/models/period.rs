use strum_macros::{Display, EnumString};

/// Lookback window requested from the market data source.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq)]
pub enum Period {
    #[default]
    #[strum(serialize = "1d")]
    OneDay,
    #[strum(serialize = "5d")]
    FiveDays,
    #[strum(serialize = "1mo")]
    OneMonth,
}
