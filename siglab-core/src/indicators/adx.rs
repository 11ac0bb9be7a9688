//! ADX — Average Directional Index (Wilder).
//!
//! DX = 100 * |+DI - -DI| / (+DI + -DI), then Wilder-smoothed to ADX.
//! DX is 0 when both DIs are 0, keeping ADX defined in flat windows.
//! Lookback: 2 * period (period for the DI smoothing, then period for the
//! ADX smoothing).

use crate::domain::Candle;
use crate::indicators::dmi::smoothed_di;
use crate::indicators::wilder::wilder_smooth;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct Adx {
    period: usize,
    name: String,
}

impl Adx {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ADX period must be >= 1");
        Self {
            period,
            name: format!("adx_{period}"),
        }
    }
}

impl Indicator for Adx {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        2 * self.period
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let n = candles.len();
        let (plus_di, minus_di) = smoothed_di(candles, self.period);

        let mut dx = vec![f64::NAN; n];
        for i in 0..n {
            let p = plus_di[i];
            let m = minus_di[i];
            if p.is_nan() || m.is_nan() {
                continue;
            }
            let di_sum = p + m;
            dx[i] = if di_sum == 0.0 {
                0.0
            } else {
                100.0 * (p - m).abs() / di_sum
            };
        }

        wilder_smooth(&dx, self.period)
    }
}
