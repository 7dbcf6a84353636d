pub mod candle;
pub mod selection;
pub mod series;
pub mod timeframe;

pub use candle::{BandPoint, Candle, CandleType};
pub use selection::{Selection, Tool};
pub use series::Series;
pub use timeframe::Timeframe;
