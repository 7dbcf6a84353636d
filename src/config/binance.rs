//! Binance-specific configuration constants and types.

/// Configuration for the REST endpoint we read klines from
pub struct RestConfig {
    /// Base URL of the Binance REST API
    pub base_url: &'static str,
}

/// Default values for the HTTP client
pub struct ClientDefaults {
    /// Per-request timeout. A hung upstream call becomes an ordinary fetch
    /// failure instead of pinning the loading state forever.
    pub timeout_ms: u64,
}

/// The master configuration struct
pub struct BinanceConfig {
    pub rest: RestConfig,
    pub client: ClientDefaults,
}

pub const BINANCE: BinanceConfig = BinanceConfig {
    rest: RestConfig {
        base_url: "https://api.binance.com",
    },
    client: ClientDefaults { timeout_ms: 5000 },
};
