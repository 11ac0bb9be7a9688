//! Strategy parameters — runtime values with declared domains.
//!
//! Search-space declarations belong to the optimizer collaborator; this
//! module carries only the values, their valid ranges, and validation.
//! Values outside a declared range are a configuration error surfaced
//! before any indicator computation — never silently clamped.

use serde::{Deserialize, Serialize};

/// Declared domain for `buy_adx`.
pub const BUY_ADX_RANGE: (f64, f64) = (25.0, 50.0);
/// Declared domain for `buy_rsi`.
pub const BUY_RSI_RANGE: (usize, usize) = (20, 40);
/// Declared domain for `buy_MA1` (fast SMA period).
pub const BUY_MA1_RANGE: (usize, usize) = (3, 7);
/// Declared domain for `buy_MA2` (slow SMA period).
pub const BUY_MA2_RANGE: (usize, usize) = (8, 25);

/// A parameter value outside its declared domain.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParamError {
    #[error("{name} = {value} outside valid range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{name} = {value} outside valid range [{min}, {max}]")]
    OutOfRangeInt {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

/// Errors loading a parameter file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse strategy params: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] ParamError),
}

/// Entry trigger choice — exactly one is active, never OR'd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyTrigger {
    BbLower,
    MacdCrossSignal,
}

/// Exit trigger choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellTrigger {
    BbUpper,
    MacdCrossSignal,
}

/// Tunable strategy parameters.
///
/// Field order is fixed, so the JSON serialization is canonical and
/// `full_hash` is deterministic across runs and platforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyParams {
    pub buy_adx: f64,
    pub buy_rsi: usize,
    pub buy_adx_enabled: bool,
    pub buy_rsi_enabled: bool,
    pub buy_trigger: BuyTrigger,
    #[serde(rename = "buy_MA1")]
    pub buy_ma1: usize,
    #[serde(rename = "buy_MA2")]
    pub buy_ma2: usize,
    pub sell_trigger: SellTrigger,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            buy_adx: 30.1,
            buy_rsi: 30,
            buy_adx_enabled: true,
            buy_rsi_enabled: false,
            buy_trigger: BuyTrigger::BbLower,
            buy_ma1: 5,
            buy_ma2: 8,
            sell_trigger: SellTrigger::BbUpper,
        }
    }
}

impl StrategyParams {
    /// Preset found by a prior optimization run.
    pub fn tuned() -> Self {
        Self {
            buy_adx: 40.0,
            buy_rsi: 22,
            buy_adx_enabled: false,
            buy_rsi_enabled: false,
            buy_trigger: BuyTrigger::BbLower,
            buy_ma1: 7,
            buy_ma2: 13,
            sell_trigger: SellTrigger::BbUpper,
        }
    }

    /// Check every value against its declared domain.
    ///
    /// Returns the first violation. The disjoint MA ranges also guarantee
    /// the fast period stays below the slow period.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_range("buy_adx", self.buy_adx, BUY_ADX_RANGE)?;
        check_range_int("buy_rsi", self.buy_rsi, BUY_RSI_RANGE)?;
        check_range_int("buy_MA1", self.buy_ma1, BUY_MA1_RANGE)?;
        check_range_int("buy_MA2", self.buy_ma2, BUY_MA2_RANGE)?;
        Ok(())
    }

    /// Parse from TOML and validate.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let params: Self = toml::from_str(raw)?;
        params.validate()?;
        Ok(params)
    }

    /// Deterministic BLAKE3 hash of the canonical JSON serialization.
    ///
    /// Two identical parameter sets always hash identically; optimizer
    /// collaborators use this for deduplication and result caching.
    pub fn full_hash(&self) -> String {
        let json = serde_json::to_string(self).expect("StrategyParams must serialize");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

fn check_range(name: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ParamError> {
    if value.is_nan() || value < min || value > max {
        return Err(ParamError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_range_int(
    name: &'static str,
    value: usize,
    (min, max): (usize, usize),
) -> Result<(), ParamError> {
    if value < min || value > max {
        return Err(ParamError::OutOfRangeInt {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}
