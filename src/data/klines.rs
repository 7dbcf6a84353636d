// Std library crates
use std::fmt;
use std::time::Duration;

// External crates
use anyhow::{Context, Result};
use serde::Deserialize;

// Local crates
use crate::config::BINANCE;
use crate::domain::{Candle, Series};

/// One field of a raw kline row. The endpoint mixes an integer open time
/// with string-encoded decimals, and some mirrors send plain numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KlineField {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// A raw kline row: open time plus at least the five OHLCV fields. The
/// upstream appends more (close time, quote volume, trade count, ...); we
/// never look past the sixth.
pub type RawKline = Vec<KlineField>;

// Custom error type for kline conversion for better error messages.
#[derive(Debug)]
pub enum KlineError {
    /// Fewer than the six leading fields a candle needs
    TooShort(usize),
    /// A field was present but not numeric (named for diagnostics)
    BadField(&'static str),
}

impl fmt::Display for KlineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KlineError::TooShort(len) => {
                write!(f, "kline row has {} fields, expected at least 6", len)
            }
            KlineError::BadField(name) => write!(f, "kline field '{}' is not numeric", name),
        }
    }
}

impl std::error::Error for KlineError {}

fn field_to_f64(field: &KlineField) -> Option<f64> {
    match field {
        KlineField::Integer(v) => Some(*v as f64),
        KlineField::Float(v) => Some(*v),
        KlineField::Text(s) => s.parse::<f64>().ok(),
    }
}

impl TryFrom<RawKline> for Candle {
    type Error = KlineError;

    fn try_from(row: RawKline) -> Result<Self, Self::Error> {
        if row.len() < 6 {
            return Err(KlineError::TooShort(row.len()));
        }

        let number = |idx: usize, name: &'static str| {
            field_to_f64(&row[idx]).ok_or(KlineError::BadField(name))
        };

        // The open time arrives in milliseconds; candles carry seconds.
        let open_time_ms = number(0, "open_time")? as i64;

        Ok(Candle::new(
            open_time_ms / 1000,
            number(1, "open")?,
            number(2, "high")?,
            number(3, "low")?,
            number(4, "close")?,
            number(5, "volume")?,
        ))
    }
}

/// Templates the kline request URL. The interval string goes through
/// verbatim, unvalidated; what the upstream makes of an unrecognized value
/// is the upstream's answer.
pub fn kline_url(base_url: &str, symbol: &str, interval: &str) -> String {
    format!("{base_url}/api/v3/klines?symbol={symbol}&interval={interval}")
}

fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_millis(BINANCE.client.timeout_ms))
        .build()
        .context("failed to build HTTP client")
}

/// Fetches one batch of klines and normalizes it into a series, preserving
/// upstream order. Any failure comes back as an error; `fetch_series` is
/// the absorbing wrapper the app goes through.
pub async fn fetch_klines(
    client: &reqwest::Client,
    base_url: &str,
    symbol: &str,
    interval: &str,
) -> Result<Series> {
    let url = kline_url(base_url, symbol, interval);

    let rows: Vec<RawKline> = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("request failed: GET {url}"))?
        .error_for_status()
        .context("upstream returned an error status")?
        .json()
        .await
        .context("kline payload is not a JSON array of arrays")?;

    let candles = rows
        .into_iter()
        .map(Candle::try_from)
        .collect::<Result<Vec<_>, _>>()
        .context("kline payload failed to normalize")?;

    Ok(Series::new(candles))
}

/// The fetch boundary the app sees: every failure (network, HTTP status,
/// malformed payload) is logged once and flattened into an empty series,
/// so "fetch failed" and "no data" look the same downstream.
pub async fn fetch_series(base_url: &str, symbol: &str, interval: &str) -> Series {
    let client = match build_client() {
        Ok(client) => client,
        Err(e) => {
            log::error!("{symbol} {interval}: {e:#}");
            return Series::default();
        }
    };

    match fetch_klines(&client, base_url, symbol, interval).await {
        Ok(series) => {
            log::info!("{symbol} {interval}: fetched {} candles", series.len());
            series
        }
        Err(e) => {
            log::error!("{symbol} {interval}: kline fetch failed: {e:#}");
            Series::default()
        }
    }
}

/// Worker-thread entry point: blocks on the fetch with a private runtime so
/// network I/O stays off the UI thread.
pub fn fetch_series_blocking(symbol: &str, interval: &str) -> Series {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("failed to create Tokio runtime for kline fetch: {e}");
            return Series::default();
        }
    };
    rt.block_on(fetch_series(BINANCE.rest.base_url, symbol, interval))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shaped like the real reply: 12 fields, string prices, integer times.
    const REPLY: &str = r#"[
        [1700000000000, "100.5", "110.25", "95.0", "105.75", "12.5", 1700000059999, "1300.0", 42, "6.0", "620.0", "0"],
        [1700000060000, "105.75", "108.0", "101.5", "102.25", "8.25", 1700000119999, "860.0", 30, "4.0", "410.0", "0"],
        [1700000120000, "102.25", "104.0", "99.0", "103.5", "4.75", 1700000179999, "490.0", 18, "2.0", "205.0", "0"]
    ]"#;

    fn parse(reply: &str) -> Series {
        let rows: Vec<RawKline> = serde_json::from_str(reply).unwrap();
        let candles = rows
            .into_iter()
            .map(Candle::try_from)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        Series::new(candles)
    }

    #[test]
    fn reply_normalizes_row_for_row_in_order() {
        let series = parse(REPLY);
        assert_eq!(series.len(), 3);

        let first = &series.candles()[0];
        assert_eq!(first.time_s, 1_700_000_000);
        assert_eq!(first.open, 100.5);
        assert_eq!(first.high, 110.25);
        assert_eq!(first.low, 95.0);
        assert_eq!(first.close, 105.75);
        assert_eq!(first.volume, 12.5);
        assert!(first.band.is_none());

        let times: Vec<i64> = series.candles().iter().map(|c| c.time_s).collect();
        assert_eq!(times, vec![1_700_000_000, 1_700_000_060, 1_700_000_120]);
    }

    #[test]
    fn identical_replies_normalize_identically() {
        assert_eq!(parse(REPLY), parse(REPLY));
    }

    #[test]
    fn six_fields_are_enough_and_extras_are_ignored() {
        let short: Vec<RawKline> =
            serde_json::from_str(r#"[[1700000000000, "1", "2", "0.5", "1.5", "10"]]"#).unwrap();
        let candle = Candle::try_from(short.into_iter().next().unwrap()).unwrap();
        assert_eq!(candle.close, 1.5);

        // Same row with trailing fields the normalizer never reads
        let long = parse(REPLY);
        assert_eq!(long.candles()[0].close, 105.75);
    }

    #[test]
    fn numeric_fields_may_be_numbers_instead_of_strings() {
        let rows: Vec<RawKline> =
            serde_json::from_str(r#"[[1700000000000, 1.0, 2, 0.5, 1.5, 10]]"#).unwrap();
        let candle = Candle::try_from(rows.into_iter().next().unwrap()).unwrap();
        assert_eq!(candle.open, 1.0);
        assert_eq!(candle.high, 2.0);
        assert_eq!(candle.volume, 10.0);
    }

    #[test]
    fn short_row_is_rejected() {
        let rows: Vec<RawKline> =
            serde_json::from_str(r#"[[1700000000000, "1", "2", "0.5", "1.5"]]"#).unwrap();
        let err = Candle::try_from(rows.into_iter().next().unwrap()).unwrap_err();
        assert!(matches!(err, KlineError::TooShort(5)));
    }

    #[test]
    fn non_numeric_field_is_rejected_by_name() {
        let rows: Vec<RawKline> =
            serde_json::from_str(r#"[[1700000000000, "1", "oops", "0.5", "1.5", "10"]]"#).unwrap();
        let err = Candle::try_from(rows.into_iter().next().unwrap()).unwrap_err();
        assert!(matches!(err, KlineError::BadField("high")));
    }

    #[test]
    fn payload_that_is_not_an_array_of_arrays_fails_to_decode() {
        assert!(serde_json::from_str::<Vec<RawKline>>(r#"{"code": -1121}"#).is_err());
        assert!(serde_json::from_str::<Vec<RawKline>>("not json").is_err());
    }

    #[test]
    fn url_forwards_symbol_and_interval_verbatim() {
        assert_eq!(
            kline_url("https://api.binance.com", "BTCUSDT", "1m"),
            "https://api.binance.com/api/v3/klines?symbol=BTCUSDT&interval=1m"
        );
        // Unsupported intervals are not validated locally
        assert_eq!(
            kline_url("https://api.binance.com", "ETHUSDT", "7x"),
            "https://api.binance.com/api/v3/klines?symbol=ETHUSDT&interval=7x"
        );
    }

    #[tokio::test]
    async fn unreachable_upstream_resolves_to_an_empty_series() {
        // Nothing listens on port 1; the failure is absorbed, not raised.
        let series = fetch_series("http://127.0.0.1:1", "BTCUSDT", "1m").await;
        assert!(series.is_empty());
    }
}
