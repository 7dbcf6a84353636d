use statrs::statistics::Statistics;

use crate::config::ANALYSIS;
use crate::domain::{BandPoint, Series};

/// Annotates every candle whose trailing close window is full:
/// middle = SMA(close, window), edges = middle +/- multiplier * stddev.
/// Candles with fewer predecessors stay unannotated; a partial window is
/// never computed.
pub fn annotate(series: &mut Series, window: usize, multiplier: f64) {
    if window == 0 {
        return;
    }

    let closes: Vec<f64> = series.candles().iter().map(|c| c.close).collect();
    for (idx, candle) in series.candles_mut().iter_mut().enumerate() {
        candle.band = band_at(&closes, idx, window, multiplier);
    }
}

/// Annotates with the configured window and multiplier.
pub fn annotate_default(series: &mut Series) {
    annotate(
        series,
        ANALYSIS.bollinger.window,
        ANALYSIS.bollinger.multiplier,
    );
}

fn band_at(closes: &[f64], idx: usize, window: usize, multiplier: f64) -> Option<BandPoint> {
    if idx + 1 < window {
        return None;
    }

    let slice = &closes[idx + 1 - window..=idx];
    let middle = slice.iter().mean();
    let half_width = multiplier * slice.iter().population_std_dev();

    Some(BandPoint {
        top: middle + half_width,
        middle,
        bottom: middle - half_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Candle;

    fn series_from_closes(closes: &[f64]) -> Series {
        let candles = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Candle::new(i as i64 * 60, close, close, close, close, 1.0))
            .collect();
        Series::new(candles)
    }

    #[test]
    fn band_appears_exactly_at_the_window_boundary() {
        let mut series = series_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        annotate(&mut series, 4, 2.0);

        let bands: Vec<bool> = series.candles().iter().map(|c| c.band.is_some()).collect();
        assert_eq!(bands, vec![false, false, false, true, true, true]);
    }

    #[test]
    fn constant_closes_collapse_the_band() {
        let mut series = series_from_closes(&[7.0; 5]);
        annotate(&mut series, 3, 2.0);

        let band = series.candles()[4].band.unwrap();
        assert_eq!(band.top, 7.0);
        assert_eq!(band.middle, 7.0);
        assert_eq!(band.bottom, 7.0);
    }

    #[test]
    fn known_window_values() {
        // Window [1, 3]: mean 2, population stddev 1
        let mut series = series_from_closes(&[1.0, 3.0]);
        annotate(&mut series, 2, 2.0);

        let band = series.candles()[1].band.unwrap();
        assert!((band.middle - 2.0).abs() < 1e-12);
        assert!((band.top - 4.0).abs() < 1e-12);
        assert!((band.bottom - 0.0).abs() < 1e-12);
    }

    #[test]
    fn series_shorter_than_the_window_stays_bare() {
        let mut series = series_from_closes(&[1.0, 2.0, 3.0]);
        annotate(&mut series, 10, 2.0);
        assert!(series.candles().iter().all(|c| c.band.is_none()));
    }

    #[test]
    fn annotation_leaves_prices_and_volumes_alone() {
        let mut series = series_from_closes(&[1.0, 2.0, 3.0, 4.0]);
        let before = series.clone();
        annotate(&mut series, 2, 2.0);

        for (annotated, original) in series.candles().iter().zip(before.candles()) {
            assert_eq!(annotated.open, original.open);
            assert_eq!(annotated.high, original.high);
            assert_eq!(annotated.low, original.low);
            assert_eq!(annotated.close, original.close);
            assert_eq!(annotated.volume, original.volume);
        }
    }
}
