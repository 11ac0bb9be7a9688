//! SigLab Core — candle-series signal evaluation.
//!
//! Maps a series of OHLCV candles plus a validated parameter set into
//! per-candle entry/exit trading signals:
//! - Domain types (candles, validated candle series)
//! - Indicator trait and the indicator suite (SMA, EMA, Bollinger bands,
//!   RSI, +DI/-DI, ADX, MACD)
//! - NaN-safe condition primitives and the AND-reduce signal combiner
//! - The SMA-cross strategy core orchestrating bank → conditions → signals
//!
//! The whole crate is pure computation: one evaluation call is a
//! deterministic function of (candle series, parameter set) with no shared
//! mutable state between calls.

pub mod domain;
pub mod indicators;
pub mod signal;
pub mod strategy;
