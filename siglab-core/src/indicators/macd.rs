//! MACD — Moving Average Convergence/Divergence.
//!
//! Line: EMA(close, fast) - EMA(close, slow)
//! Signal: EMA(line, signal_period), seeded on the line's valid suffix
//! Histogram: line - signal
//!
//! Three series, exposed as separate Indicator instances.
//! Lookback: slow - 1 for the line, slow + signal_period - 2 for signal
//! and histogram.

use crate::domain::Candle;
use crate::indicators::ema::ema_of_series;
use crate::indicators::Indicator;

/// Which MACD series to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacdOutput {
    Line,
    Signal,
    Histogram,
}

#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal_period: usize,
    output: MacdOutput,
    name: String,
}

impl Macd {
    fn new(fast: usize, slow: usize, signal_period: usize, output: MacdOutput) -> Self {
        assert!(fast >= 1, "MACD fast period must be >= 1");
        assert!(slow > fast, "MACD slow period must be > fast period");
        assert!(signal_period >= 1, "MACD signal period must be >= 1");
        let suffix = match output {
            MacdOutput::Line => "line",
            MacdOutput::Signal => "signal",
            MacdOutput::Histogram => "hist",
        };
        Self {
            fast,
            slow,
            signal_period,
            output,
            name: format!("macd_{suffix}_{fast}_{slow}_{signal_period}"),
        }
    }

    pub fn line(fast: usize, slow: usize, signal_period: usize) -> Self {
        Self::new(fast, slow, signal_period, MacdOutput::Line)
    }

    pub fn signal(fast: usize, slow: usize, signal_period: usize) -> Self {
        Self::new(fast, slow, signal_period, MacdOutput::Signal)
    }

    pub fn histogram(fast: usize, slow: usize, signal_period: usize) -> Self {
        Self::new(fast, slow, signal_period, MacdOutput::Histogram)
    }
}

impl Indicator for Macd {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        match self.output {
            MacdOutput::Line => self.slow - 1,
            MacdOutput::Signal | MacdOutput::Histogram => self.slow + self.signal_period - 2,
        }
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let n = candles.len();
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

        let fast_ema = ema_of_series(&closes, self.fast);
        let slow_ema = ema_of_series(&closes, self.slow);

        let mut line = vec![f64::NAN; n];
        for i in 0..n {
            if !fast_ema[i].is_nan() && !slow_ema[i].is_nan() {
                line[i] = fast_ema[i] - slow_ema[i];
            }
        }

        if self.output == MacdOutput::Line {
            return line;
        }

        // Seed the signal EMA on the line's valid suffix; the NaN warm-up
        // prefix would otherwise poison the seed window.
        let Some(first) = line.iter().position(|v| !v.is_nan()) else {
            return vec![f64::NAN; n];
        };
        let tail = ema_of_series(&line[first..], self.signal_period);

        let mut signal = vec![f64::NAN; n];
        for (j, &v) in tail.iter().enumerate() {
            signal[first + j] = v;
        }

        match self.output {
            MacdOutput::Signal => signal,
            MacdOutput::Histogram => {
                let mut hist = vec![f64::NAN; n];
                for i in 0..n {
                    if !line[i].is_nan() && !signal[i].is_nan() {
                        hist[i] = line[i] - signal[i];
                    }
                }
                hist
            }
            MacdOutput::Line => unreachable!(),
        }
    }
}
