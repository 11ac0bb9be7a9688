//! SignalFrame — the augmented evaluation output.
//!
//! Owns a copy of the input candles plus every derived column: the named
//! indicator columns and the tagged entry/exit signal series. All columns
//! are aligned 1:1 with the candle sequence.

use std::collections::HashMap;

use crate::domain::Candle;
use crate::signal::SignalSeries;

#[derive(Debug, Clone)]
pub struct SignalFrame {
    candles: Vec<Candle>,
    columns: HashMap<String, Vec<f64>>,
    entries: SignalSeries,
    exits: SignalSeries,
}

impl SignalFrame {
    pub(crate) fn new(
        candles: Vec<Candle>,
        columns: HashMap<String, Vec<f64>>,
        entries: SignalSeries,
        exits: SignalSeries,
    ) -> Self {
        debug_assert!(columns.values().all(|c| c.len() == candles.len()));
        debug_assert_eq!(entries.len(), candles.len());
        debug_assert_eq!(exits.len(), candles.len());
        Self {
            candles,
            columns,
            entries,
            exits,
        }
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// A named indicator column, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// All indicator column names, sorted for stable iteration.
    pub fn column_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.columns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn entries(&self) -> &SignalSeries {
        &self.entries
    }

    pub fn exits(&self) -> &SignalSeries {
        &self.exits
    }

    /// Entry mask (`enter_long` as booleans).
    pub fn enter_long(&self) -> &[bool] {
        self.entries.mask()
    }

    /// Entry tag at an index (`enter_tag`): set only where the flag is 1.
    pub fn enter_tag(&self, index: usize) -> Option<&str> {
        self.entries.tag_at(index)
    }

    /// Exit mask (`exit_long` as booleans).
    pub fn exit_long(&self) -> &[bool] {
        self.exits.mask()
    }

    /// Exit tag at an index (`exit_tag`).
    pub fn exit_tag(&self, index: usize) -> Option<&str> {
        self.exits.tag_at(index)
    }
}
