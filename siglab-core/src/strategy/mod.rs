//! Strategy core — parameters, indicator bank, evaluation.

pub mod bank;
pub mod frame;
pub mod params;
pub mod sma_cross;

pub use bank::{columns, IndicatorBank, IndicatorColumns};
pub use frame::SignalFrame;
pub use params::{BuyTrigger, ConfigError, ParamError, SellTrigger, StrategyParams};
pub use sma_cross::{EvalError, SmaCross, ENTRY_TAG, EXIT_TAG, STARTUP_CANDLE_COUNT, TIMEFRAME};
