use crate::domain::Series;

/// Retracement fractions of the high-low range, in draw order from the
/// series high down to the series low.
pub const RETRACEMENT_RATIOS: [f64; 6] = [0.0, 0.236, 0.382, 0.5, 0.618, 1.0];

/// The six horizontal price levels between the series extremes.
///
/// Constant across the whole series; recomputed only when the series
/// changes. An empty series has no extremes, so the overlay is suppressed
/// by returning no levels at all.
pub fn retracement_levels(series: &Series) -> Vec<f64> {
    let Some((low, high)) = series.price_extents() else {
        return Vec::new();
    };
    let diff = high - low;

    RETRACEMENT_RATIOS
        .iter()
        .map(|ratio| high - ratio * diff)
        .collect()
}

/// Legend label for a retracement line ("23.6%", "50%", ...).
pub fn ratio_label(ratio: f64) -> String {
    let pct = ratio * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{pct:.0}%")
    } else {
        format!("{pct:.1}%")
    }
}
