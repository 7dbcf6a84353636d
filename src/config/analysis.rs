//! Overlay computation constants.

/// Bollinger band parameters
pub struct BollingerConfig {
    /// Trailing lookback window in candles, inclusive of the current one
    pub window: usize,
    /// Standard-deviation multiplier for the band half-width
    pub multiplier: f64,
}

pub struct AnalysisConfig {
    pub bollinger: BollingerConfig,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    bollinger: BollingerConfig {
        window: 20,
        multiplier: 2.0,
    },
};
