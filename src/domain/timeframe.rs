use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The chart timeframes offered by the selector.
///
/// The strum serializations are the exact interval strings the kline
/// endpoint accepts, so `to_string`/`from_str` round-trip through the API
/// format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Timeframe {
    #[default]
    #[strum(serialize = "1m")]
    Min1,
    #[strum(serialize = "5m")]
    Min5,
    #[strum(serialize = "15m")]
    Min15,
    #[strum(serialize = "30m")]
    Min30,
    #[strum(serialize = "1h")]
    Hour1,
    #[strum(serialize = "4h")]
    Hour4,
    #[strum(serialize = "1d")]
    Day1,
}

impl Timeframe {
    pub const MS_IN_MIN: i64 = 60 * 1000;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;

    /// The interval string passed to the kline endpoint.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Label shown in the timeframe selector.
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Min1 => "1 Minute",
            Timeframe::Min5 => "5 Minutes",
            Timeframe::Min15 => "15 Minutes",
            Timeframe::Min30 => "30 Minutes",
            Timeframe::Hour1 => "1 Hour",
            Timeframe::Hour4 => "4 Hours",
            Timeframe::Day1 => "1 Day",
        }
    }

    /// Width of one candle bucket in milliseconds.
    pub fn interval_ms(&self) -> i64 {
        match self {
            Timeframe::Min1 => Self::MS_IN_MIN,
            Timeframe::Min5 => 5 * Self::MS_IN_MIN,
            Timeframe::Min15 => 15 * Self::MS_IN_MIN,
            Timeframe::Min30 => 30 * Self::MS_IN_MIN,
            Timeframe::Hour1 => Self::MS_IN_H,
            Timeframe::Hour4 => 4 * Self::MS_IN_H,
            Timeframe::Day1 => Self::MS_IN_D,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn api_strings_round_trip() {
        for timeframe in Timeframe::iter() {
            let parsed = Timeframe::from_str(timeframe.as_str()).unwrap();
            assert_eq!(parsed, timeframe);
            assert_eq!(timeframe.to_string(), timeframe.as_str());
        }
    }

    #[test]
    fn selector_offers_seven_values() {
        assert_eq!(Timeframe::iter().count(), 7);
        assert_eq!(Timeframe::default(), Timeframe::Min1);
    }

    #[test]
    fn interval_widths() {
        assert_eq!(Timeframe::Min1.interval_ms(), 60_000);
        assert_eq!(Timeframe::Min30.interval_ms(), 30 * 60_000);
        assert_eq!(Timeframe::Hour4.interval_ms(), 4 * 3_600_000);
        assert_eq!(Timeframe::Day1.interval_ms(), 86_400_000);
    }

    #[test]
    fn unknown_interval_does_not_parse() {
        assert!(Timeframe::from_str("7x").is_err());
    }
}
