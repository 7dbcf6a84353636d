pub mod klines;

pub use klines::{fetch_series, fetch_series_blocking, kline_url};
