use argminmax::ArgMinMax;

use crate::domain::candle::Candle;

/// An ordered run of candles for one (symbol, timeframe) selection.
///
/// Ascending by open time, in upstream order, rebuilt wholesale on every
/// fetch. There are no incremental updates; an empty series doubles as the
/// "fetch failed" value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Series {
    candles: Vec<Candle>,
}

impl Series {
    pub fn new(candles: Vec<Candle>) -> Self {
        Series { candles }
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn candles_mut(&mut self) -> &mut [Candle] {
        &mut self.candles
    }

    /// Lowest low and highest high across the whole series.
    pub fn price_extents(&self) -> Option<(f64, f64)> {
        if self.candles.is_empty() {
            return None;
        }
        let lows: Vec<f64> = self.candles.iter().map(|c| c.low).collect();
        let highs: Vec<f64> = self.candles.iter().map(|c| c.high).collect();
        Some((lows[lows.argmin()], highs[highs.argmax()]))
    }

    /// Largest volume, for scaling the volume sub-plot.
    pub fn max_volume(&self) -> Option<f64> {
        if self.candles.is_empty() {
            return None;
        }
        let volumes: Vec<f64> = self.candles.iter().map(|c| c.volume).collect();
        Some(volumes[volumes.argmax()])
    }

    /// Strips every band annotation, leaving prices and volumes alone.
    pub fn clear_bands(&mut self) {
        for candle in &mut self.candles {
            candle.band = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::candle::BandPoint;

    fn sample() -> Series {
        Series::new(vec![
            Candle::new(60, 10.0, 15.0, 8.0, 12.0, 3.0),
            Candle::new(120, 12.0, 20.0, 11.0, 18.0, 5.0),
            Candle::new(180, 18.0, 19.0, 5.0, 6.0, 2.0),
        ])
    }

    #[test]
    fn extents_span_wicks_not_bodies() {
        assert_eq!(sample().price_extents(), Some((5.0, 20.0)));
    }

    #[test]
    fn empty_series_has_no_extents() {
        assert_eq!(Series::default().price_extents(), None);
        assert_eq!(Series::default().max_volume(), None);
    }

    #[test]
    fn max_volume_picks_the_heaviest_bucket() {
        assert_eq!(sample().max_volume(), Some(5.0));
    }

    #[test]
    fn clear_bands_leaves_prices_and_volumes_alone() {
        let mut series = sample();
        let before = series.clone();
        for candle in series.candles_mut() {
            candle.band = Some(BandPoint {
                top: 1.0,
                middle: 0.5,
                bottom: 0.0,
            });
        }

        series.clear_bands();

        assert_eq!(series, before);
        assert!(series.candles().iter().all(|c| c.band.is_none()));
    }
}
