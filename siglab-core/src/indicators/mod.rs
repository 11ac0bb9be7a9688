//! Indicator trait and the indicator suite.
//!
//! Indicators are pure functions: candle history in, numeric series out.
//! Output is always the same length as the input, with `f64::NAN` for the
//! warm-up prefix. Multi-series indicators (Bollinger, MACD, +DI/-DI) are
//! exposed as separate named instances per band/line, keeping the
//! single-series trait unchanged.
//!
//! # Look-ahead contamination guard
//! No indicator value at candle t may depend on price data from candle t+1
//! or later. Every indicator must pass the truncated-vs-full series test.

pub mod adx;
pub mod bollinger;
pub mod dmi;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod wilder;

pub use adx::Adx;
pub use bollinger::{Bollinger, BollingerBand};
pub use dmi::{DiSide, DirectionalIndex};
pub use ema::Ema;
pub use macd::{Macd, MacdOutput};
pub use rsi::Rsi;
pub use sma::Sma;

use crate::domain::Candle;

/// Trait for indicators.
///
/// `compute` returns a `Vec<f64>` of the same length as `candles`, with the
/// first `lookback()` values set to `f64::NAN`.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_20", "adx_14").
    fn name(&self) -> &str;

    /// Number of candles needed before the indicator produces valid output.
    fn lookback(&self) -> usize;

    /// Compute the indicator over the entire candle series.
    fn compute(&self, candles: &[Candle]) -> Vec<f64>;
}

/// Create synthetic candles from close prices for testing.
///
/// Generates plausible OHLV at 5-minute spacing: open = prev close (or close
/// for the first candle), high = max(open,close) + 1.0,
/// low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_candles(closes: &[f64]) -> Vec<Candle> {
    let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 1.0;
            let low = open.min(close) - 1.0;
            Candle {
                timestamp: base + chrono::Duration::minutes(5 * i as i64),
                open,
                high,
                low,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
