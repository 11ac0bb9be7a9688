//! Directional movement indicators (+DI / -DI, Wilder).
//!
//! +DM[t] = high[t] - high[t-1] when that exceeds both the downward move
//! and zero, else 0 (symmetric for -DM). The DIs are the Wilder-smoothed
//! DM series normalized by the smoothed true range, scaled to [0, 100].
//!
//! Both sides are exposed as separate Indicator instances sharing the same
//! computation. Lookback: period.

use crate::domain::Candle;
use crate::indicators::wilder::{true_range, wilder_smooth};
use crate::indicators::Indicator;

/// Which directional indicator to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiSide {
    Plus,
    Minus,
}

#[derive(Debug, Clone)]
pub struct DirectionalIndex {
    period: usize,
    side: DiSide,
    name: String,
}

impl DirectionalIndex {
    fn new(period: usize, side: DiSide) -> Self {
        assert!(period >= 1, "DI period must be >= 1");
        let prefix = match side {
            DiSide::Plus => "plus_di",
            DiSide::Minus => "minus_di",
        };
        Self {
            period,
            side,
            name: format!("{prefix}_{period}"),
        }
    }

    pub fn plus(period: usize) -> Self {
        Self::new(period, DiSide::Plus)
    }

    pub fn minus(period: usize) -> Self {
        Self::new(period, DiSide::Minus)
    }
}

/// Raw +DM and -DM series. Index 0 is NaN (no previous candle).
fn directional_movement(candles: &[Candle]) -> (Vec<f64>, Vec<f64>) {
    let n = candles.len();
    let mut plus_dm = vec![f64::NAN; n];
    let mut minus_dm = vec![f64::NAN; n];

    for i in 1..n {
        let up = candles[i].high - candles[i - 1].high;
        let down = candles[i - 1].low - candles[i].low;

        if up.is_nan() || down.is_nan() {
            continue;
        }

        plus_dm[i] = if up > down && up > 0.0 { up } else { 0.0 };
        minus_dm[i] = if down > up && down > 0.0 { down } else { 0.0 };
    }

    (plus_dm, minus_dm)
}

/// Smoothed +DI and -DI series, shared by both DI sides and by ADX.
pub(crate) fn smoothed_di(candles: &[Candle], period: usize) -> (Vec<f64>, Vec<f64>) {
    let n = candles.len();
    let (plus_dm, minus_dm) = directional_movement(candles);
    let smooth_tr = wilder_smooth(&true_range(candles), period);
    let smooth_plus = wilder_smooth(&plus_dm, period);
    let smooth_minus = wilder_smooth(&minus_dm, period);

    let mut plus_di = vec![f64::NAN; n];
    let mut minus_di = vec![f64::NAN; n];

    for i in 0..n {
        let tr = smooth_tr[i];
        if tr.is_nan() || smooth_plus[i].is_nan() || smooth_minus[i].is_nan() || tr == 0.0 {
            continue;
        }
        plus_di[i] = 100.0 * smooth_plus[i] / tr;
        minus_di[i] = 100.0 * smooth_minus[i] / tr;
    }

    (plus_di, minus_di)
}

impl Indicator for DirectionalIndex {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let (plus_di, minus_di) = smoothed_di(candles, self.period);
        match self.side {
            DiSide::Plus => plus_di,
            DiSide::Minus => minus_di,
        }
    }
}
