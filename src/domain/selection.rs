use strum_macros::{Display, EnumIter};

use crate::domain::timeframe::Timeframe;

/// Overlay analysis tools offered by the tool selector.
///
/// At most one is active at a time; `None` leaves the series bare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Tool {
    #[default]
    #[strum(serialize = "None")]
    None,
    #[strum(serialize = "Bollinger Bands")]
    BollingerBands,
    #[strum(serialize = "Fibonacci Retracement")]
    FibonacciRetracement,
}

/// The current (symbol, timeframe, tool) selection.
///
/// The only state that outlives a fetch; mutated by user interaction only,
/// seeded from the CLI at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub tool: Tool,
}

impl Selection {
    pub fn new(symbol: impl Into<String>, timeframe: Timeframe) -> Self {
        Selection {
            symbol: symbol.into(),
            timeframe,
            tool: Tool::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_names_match_selector_entries() {
        assert_eq!(Tool::None.to_string(), "None");
        assert_eq!(Tool::BollingerBands.to_string(), "Bollinger Bands");
        assert_eq!(Tool::FibonacciRetracement.to_string(), "Fibonacci Retracement");
    }

    #[test]
    fn new_selection_starts_without_a_tool() {
        let selection = Selection::new("BTCUSDT", Timeframe::Min1);
        assert_eq!(selection.tool, Tool::None);
    }
}
