//! Domain types — candles and the validated candle series.

pub mod candle;
pub mod series;

pub use candle::Candle;
pub use series::{CandleSeries, SeriesError};
