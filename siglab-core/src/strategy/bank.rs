//! Indicator bank — precomputes every column the strategy needs.
//!
//! Built once per evaluation call from the parameter set; the columns are
//! computed over the full input series before any condition is evaluated.

use std::collections::HashMap;

use crate::domain::Candle;
use crate::indicators::{Adx, Bollinger, DirectionalIndex, Indicator, Macd, Rsi, Sma};
use crate::strategy::params::StrategyParams;

/// Output column names — the external contract.
pub mod columns {
    pub const ADX: &str = "adx";
    pub const BB_LOWER: &str = "bb_lowerband";
    pub const BB_MIDDLE: &str = "bb_middleband";
    pub const BB_UPPER: &str = "bb_upperband";
    pub const BUY_MA1: &str = "buy_MA1";
    pub const BUY_MA2: &str = "buy_MA2";
    pub const MACD: &str = "macd";
    pub const MACD_SIGNAL: &str = "macdsignal";
    pub const MACD_HIST: &str = "macdhist";
    pub const MINUS_DI: &str = "minus_di";
    pub const PLUS_DI: &str = "plus_di";
    pub const RSI: &str = "rsi";

    /// Every indicator column, in the order of the external contract.
    pub const ALL: [&str; 12] = [
        ADX, BB_LOWER, BB_MIDDLE, BB_UPPER, BUY_MA1, BUY_MA2, MACD, MACD_SIGNAL, MACD_HIST,
        MINUS_DI, PLUS_DI, RSI,
    ];
}

// Fixed periods the strategy is tuned for. Only the SMA periods vary
// through the parameter set.
const ADX_PERIOD: usize = 14;
const DI_PERIOD: usize = 14;
const RSI_PERIOD: usize = 14;
const BB_PERIOD: usize = 20;
const BB_STDDEV: f64 = 2.0;
const MACD_FAST: usize = 12;
const MACD_SLOW: usize = 26;
const MACD_SIGNAL_PERIOD: usize = 9;

/// One computed column per required indicator, all aligned with the input.
#[derive(Debug, Clone)]
pub struct IndicatorColumns {
    pub adx: Vec<f64>,
    pub bb_lowerband: Vec<f64>,
    pub bb_middleband: Vec<f64>,
    pub bb_upperband: Vec<f64>,
    pub buy_ma1: Vec<f64>,
    pub buy_ma2: Vec<f64>,
    pub macd: Vec<f64>,
    pub macdsignal: Vec<f64>,
    pub macdhist: Vec<f64>,
    pub minus_di: Vec<f64>,
    pub plus_di: Vec<f64>,
    pub rsi: Vec<f64>,
}

impl IndicatorColumns {
    /// Columns keyed by their external names.
    pub fn into_map(self) -> HashMap<String, Vec<f64>> {
        HashMap::from([
            (columns::ADX.to_string(), self.adx),
            (columns::BB_LOWER.to_string(), self.bb_lowerband),
            (columns::BB_MIDDLE.to_string(), self.bb_middleband),
            (columns::BB_UPPER.to_string(), self.bb_upperband),
            (columns::BUY_MA1.to_string(), self.buy_ma1),
            (columns::BUY_MA2.to_string(), self.buy_ma2),
            (columns::MACD.to_string(), self.macd),
            (columns::MACD_SIGNAL.to_string(), self.macdsignal),
            (columns::MACD_HIST.to_string(), self.macdhist),
            (columns::MINUS_DI.to_string(), self.minus_di),
            (columns::PLUS_DI.to_string(), self.plus_di),
            (columns::RSI.to_string(), self.rsi),
        ])
    }
}

/// The full indicator set for one parameter instance.
#[derive(Debug, Clone)]
pub struct IndicatorBank {
    adx: Adx,
    bb_lower: Bollinger,
    bb_middle: Bollinger,
    bb_upper: Bollinger,
    ma_fast: Sma,
    ma_slow: Sma,
    macd_line: Macd,
    macd_signal: Macd,
    macd_hist: Macd,
    minus_di: DirectionalIndex,
    plus_di: DirectionalIndex,
    rsi: Rsi,
}

impl IndicatorBank {
    pub fn new(params: &StrategyParams) -> Self {
        Self {
            adx: Adx::new(ADX_PERIOD),
            bb_lower: Bollinger::lower(BB_PERIOD, BB_STDDEV),
            bb_middle: Bollinger::middle(BB_PERIOD, BB_STDDEV),
            bb_upper: Bollinger::upper(BB_PERIOD, BB_STDDEV),
            ma_fast: Sma::new(params.buy_ma1),
            ma_slow: Sma::new(params.buy_ma2),
            macd_line: Macd::line(MACD_FAST, MACD_SLOW, MACD_SIGNAL_PERIOD),
            macd_signal: Macd::signal(MACD_FAST, MACD_SLOW, MACD_SIGNAL_PERIOD),
            macd_hist: Macd::histogram(MACD_FAST, MACD_SLOW, MACD_SIGNAL_PERIOD),
            minus_di: DirectionalIndex::minus(DI_PERIOD),
            plus_di: DirectionalIndex::plus(DI_PERIOD),
            rsi: Rsi::new(RSI_PERIOD),
        }
    }

    fn all(&self) -> [&dyn Indicator; 12] {
        [
            &self.adx,
            &self.bb_lower,
            &self.bb_middle,
            &self.bb_upper,
            &self.ma_fast,
            &self.ma_slow,
            &self.macd_line,
            &self.macd_signal,
            &self.macd_hist,
            &self.minus_di,
            &self.plus_di,
            &self.rsi,
        ]
    }

    /// Max lookback across the bank — candles needed before every column has
    /// its first defined value. Convergence of the recursive indicators
    /// takes longer; callers provide `STARTUP_CANDLE_COUNT` lead-in.
    pub fn warmup_candles(&self) -> usize {
        self.all()
            .iter()
            .map(|ind| ind.lookback())
            .max()
            .unwrap_or(0)
    }

    /// Compute every column over the full series.
    pub fn compute(&self, candles: &[Candle]) -> IndicatorColumns {
        IndicatorColumns {
            adx: self.adx.compute(candles),
            bb_lowerband: self.bb_lower.compute(candles),
            bb_middleband: self.bb_middle.compute(candles),
            bb_upperband: self.bb_upper.compute(candles),
            buy_ma1: self.ma_fast.compute(candles),
            buy_ma2: self.ma_slow.compute(candles),
            macd: self.macd_line.compute(candles),
            macdsignal: self.macd_signal.compute(candles),
            macdhist: self.macd_hist.compute(candles),
            minus_di: self.minus_di.compute(candles),
            plus_di: self.plus_di.compute(candles),
            rsi: self.rsi.compute(candles),
        }
    }
}
