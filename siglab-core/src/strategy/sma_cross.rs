//! SMA-cross strategy core.
//!
//! One evaluation call runs four stages: parameter validation, indicator
//! precompute, entry combinatorics, exit combinatorics. Any failure aborts
//! the whole call; the next call is independent. Nothing is shared between
//! calls, so independent series/parameter pairs evaluate concurrently
//! without coordination.

use crate::domain::CandleSeries;
use crate::signal::conditions::{compare, compare_scalar, crossed_above, crossed_below, positive_volume};
use crate::signal::{Cmp, SignalSeries};
use crate::strategy::bank::{IndicatorBank, IndicatorColumns};
use crate::strategy::frame::SignalFrame;
use crate::strategy::params::{BuyTrigger, ParamError, SellTrigger, StrategyParams};

/// Candle interval the default parameters are tuned for.
pub const TIMEFRAME: &str = "5m";

/// Lead-in candles required before the window of interest so every
/// indicator column is defined and converged there.
pub const STARTUP_CANDLE_COUNT: usize = 600;

/// Tag applied where an entry fires.
pub const ENTRY_TAG: &str = "buy_signal";

/// Tag applied where an exit fires.
pub const EXIT_TAG: &str = "sell_signal";

/// Errors aborting an evaluation call.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    Config(#[from] ParamError),
}

/// SMA crossover strategy with ADX/RSI guards and band/MACD triggers.
#[derive(Debug, Clone)]
pub struct SmaCross {
    params: StrategyParams,
}

impl SmaCross {
    pub fn new(params: StrategyParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &StrategyParams {
        &self.params
    }

    /// Candles needed before every indicator column has a defined value.
    pub fn warmup_candles(&self) -> usize {
        IndicatorBank::new(&self.params).warmup_candles()
    }

    /// Evaluate the full series into an augmented signal frame.
    ///
    /// A series shorter than the warm-up window is not an error: affected
    /// columns stay undefined and no signal can fire there.
    pub fn evaluate(&self, series: &CandleSeries) -> Result<SignalFrame, EvalError> {
        self.params.validate()?;

        let candles = series.candles();
        let cols = IndicatorBank::new(&self.params).compute(candles);
        let closes = series.closes();

        let entries = self.entry_signals(series, &closes, &cols);
        let exits = self.exit_signals(series, &closes, &cols);

        Ok(SignalFrame::new(
            candles.to_vec(),
            cols.into_map(),
            entries,
            exits,
        ))
    }

    fn entry_signals(
        &self,
        series: &CandleSeries,
        closes: &[f64],
        cols: &IndicatorColumns,
    ) -> SignalSeries {
        let mut conditions = Vec::new();

        // Trend up
        conditions.push(compare(&cols.plus_di, Cmp::Gt, &cols.minus_di));
        conditions.push(compare(&cols.buy_ma1, Cmp::Gt, &cols.buy_ma2));

        // Guards
        if self.params.buy_adx_enabled {
            conditions.push(compare_scalar(&cols.adx, Cmp::Gt, self.params.buy_adx));
        }
        if self.params.buy_rsi_enabled {
            conditions.push(compare_scalar(&cols.rsi, Cmp::Lt, self.params.buy_rsi as f64));
        }

        // Trigger
        match self.params.buy_trigger {
            BuyTrigger::BbLower => {
                conditions.push(compare(closes, Cmp::Lt, &cols.bb_lowerband));
            }
            BuyTrigger::MacdCrossSignal => {
                conditions.push(crossed_above(&cols.macd, &cols.macdsignal));
            }
        }

        // Volume is above 0
        conditions.push(positive_volume(series.candles()));

        SignalSeries::combine(&conditions, series.len(), ENTRY_TAG)
    }

    fn exit_signals(
        &self,
        series: &CandleSeries,
        closes: &[f64],
        cols: &IndicatorColumns,
    ) -> SignalSeries {
        let mut conditions = Vec::new();

        // Trigger
        match self.params.sell_trigger {
            SellTrigger::BbUpper => {
                conditions.push(compare(closes, Cmp::Gt, &cols.bb_upperband));
            }
            SellTrigger::MacdCrossSignal => {
                conditions.push(crossed_below(&cols.macd, &cols.macdsignal));
            }
        }

        // Volume is above 0
        conditions.push(positive_volume(series.candles()));

        SignalSeries::combine(&conditions, series.len(), EXIT_TAG)
    }
}
