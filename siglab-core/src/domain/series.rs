//! CandleSeries — validated, ordered candle history.
//!
//! Construction checks the ordering invariant once; everything downstream
//! (indicators, conditions, signals) can then assume strictly increasing
//! timestamps and index-aligned columns.

use serde::{Deserialize, Serialize};

use crate::domain::Candle;

/// Errors raised while ingesting a candle sequence.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("candle timestamp at index {index} is not strictly increasing")]
    NonMonotonicTimestamp { index: usize },
}

/// Ordered candle sequence with strictly increasing timestamps.
///
/// Read-only once constructed: evaluation attaches derived columns to its
/// own output frame, never back onto the input series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// Validate ordering and wrap the candle sequence.
    pub fn new(candles: Vec<Candle>) -> Result<Self, SeriesError> {
        for i in 1..candles.len() {
            if candles[i].timestamp <= candles[i - 1].timestamp {
                return Err(SeriesError::NonMonotonicTimestamp { index: i });
            }
        }
        Ok(Self { candles })
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Close prices as an aligned column.
    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    /// Volumes as an aligned column.
    pub fn volumes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.volume).collect()
    }
}
