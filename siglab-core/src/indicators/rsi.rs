//! Relative Strength Index (RSI).
//!
//! Wilder-smoothed average gains and losses over close-to-close changes:
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss).
//! Edge cases: avg_loss == 0 -> 100; avg_gain == 0 -> 0; both zero -> 50.
//! Lookback: period.

use crate::domain::Candle;
use crate::indicators::wilder::wilder_smooth;
use crate::indicators::Indicator;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let n = candles.len();
        let mut gains = vec![f64::NAN; n];
        let mut losses = vec![f64::NAN; n];

        for i in 1..n {
            let change = candles[i].close - candles[i - 1].close;
            if change.is_nan() {
                continue;
            }
            gains[i] = change.max(0.0);
            losses[i] = (-change).max(0.0);
        }

        let avg_gain = wilder_smooth(&gains, self.period);
        let avg_loss = wilder_smooth(&losses, self.period);

        let mut result = vec![f64::NAN; n];
        for i in 0..n {
            if avg_gain[i].is_nan() || avg_loss[i].is_nan() {
                continue;
            }
            result[i] = relative_strength(avg_gain[i], avg_loss[i]);
        }

        result
    }
}

fn relative_strength(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0 // no movement
    } else if avg_loss == 0.0 {
        100.0
    } else if avg_gain == 0.0 {
        0.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
