use crate::analysis::{bollinger, fibonacci};
use crate::domain::{Selection, Series, Timeframe, Tool};

/// Fetch lifecycle. Orthogonal to whichever tool is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Ready,
}

/// A staged fetch for the app shell to spawn. The generation tag travels
/// with the request and comes back attached to the result.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub symbol: String,
    pub interval: &'static str,
    pub generation: u64,
}

/// Owns the selection, the fetched series, and the derived overlay.
///
/// In-flight fetches are never cancelled. Instead every selection change
/// bumps `generation`, and a completion whose tag no longer matches is
/// dropped, so a slow stale reply cannot overwrite a newer selection.
pub struct ChartController {
    selection: Selection,
    state: FetchState,
    series: Series,
    fib_levels: Vec<f64>,
    generation: u64,
    pending: Option<FetchRequest>,
}

impl ChartController {
    pub fn new(selection: Selection) -> Self {
        ChartController {
            selection,
            state: FetchState::Idle,
            series: Series::default(),
            fib_levels: Vec::new(),
            generation: 0,
            pending: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn fib_levels(&self) -> &[f64] {
        &self.fib_levels
    }

    /// Invalidates whatever is held and stages a fresh fetch for the
    /// current selection. Staging replaces any fetch not yet spawned, so a
    /// burst of selection changes costs one request.
    pub fn reload(&mut self) {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.pending = Some(FetchRequest {
            symbol: self.selection.symbol.clone(),
            interval: self.selection.timeframe.as_str(),
            generation: self.generation,
        });
    }

    /// Hands the staged fetch to the caller, if any.
    pub fn take_fetch_request(&mut self) -> Option<FetchRequest> {
        self.pending.take()
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        if self.selection.timeframe == timeframe {
            return;
        }
        self.selection.timeframe = timeframe;
        self.reload();
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        let symbol = symbol.into();
        if self.selection.symbol == symbol {
            return;
        }
        self.selection.symbol = symbol;
        self.reload();
    }

    /// Recomputes the overlay from the series already held. Never fetches.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.selection.tool == tool {
            return;
        }
        self.selection.tool = tool;
        self.apply_tool();
    }

    /// Applies a completed fetch. Returns false when the result was stale
    /// and dropped.
    pub fn on_fetch_complete(&mut self, generation: u64, series: Series) -> bool {
        if generation != self.generation {
            log::debug!(
                "dropping stale fetch result (generation {generation}, current {})",
                self.generation
            );
            return false;
        }

        self.series = series;
        self.state = FetchState::Ready;
        self.apply_tool();
        true
    }

    fn apply_tool(&mut self) {
        match self.selection.tool {
            Tool::None => {
                self.series.clear_bands();
                self.fib_levels.clear();
            }
            Tool::BollingerBands => {
                self.fib_levels.clear();
                bollinger::annotate_default(&mut self.series);
            }
            Tool::FibonacciRetracement => {
                self.series.clear_bands();
                self.fib_levels = fibonacci::retracement_levels(&self.series);
            }
        }
    }
}
