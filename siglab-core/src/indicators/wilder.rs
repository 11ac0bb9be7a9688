//! Shared Wilder building blocks: true range and Wilder smoothing.
//!
//! Used by the directional indicators (+DI/-DI), ADX, and RSI.

use crate::domain::Candle;

/// Compute the True Range series.
///
/// TR[t] = max(high[t]-low[t], |high[t]-close[t-1]|, |low[t]-close[t-1]|).
/// TR[0] is NaN: there is no previous close, so the smoothing seed starts
/// at index 1 together with the directional movement series.
pub fn true_range(candles: &[Candle]) -> Vec<f64> {
    let n = candles.len();
    let mut tr = vec![f64::NAN; n];

    for i in 1..n {
        let h = candles[i].high;
        let l = candles[i].low;
        let pc = candles[i - 1].close;
        if h.is_nan() || l.is_nan() || pc.is_nan() {
            continue;
        }
        tr[i] = (h - l).max((h - pc).abs()).max((l - pc).abs());
    }

    tr
}

/// Apply Wilder smoothing (EMA with alpha = 1/period) to a series.
///
/// Seed: mean of the first run of `period` consecutive valid values; the
/// seed lands at the last index of that run. A NaN after the seed leaves
/// everything from there on undefined.
pub fn wilder_smooth(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if period == 0 || n < period {
        return result;
    }

    let mut run = 0usize;
    let mut seed_end = None;
    for (i, v) in values.iter().enumerate() {
        if v.is_nan() {
            run = 0;
        } else {
            run += 1;
        }
        if run == period {
            seed_end = Some(i);
            break;
        }
    }
    let Some(end) = seed_end else {
        return result;
    };

    let start = end + 1 - period;
    let seed = values[start..=end].iter().sum::<f64>() / period as f64;
    result[end] = seed;

    let alpha = 1.0 / period as f64;
    let mut prev = seed;
    for i in (end + 1)..n {
        if values[i].is_nan() {
            break;
        }
        prev = alpha * values[i] + (1.0 - alpha) * prev;
        result[i] = prev;
    }

    result
}
