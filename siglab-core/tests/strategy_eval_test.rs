//! End-to-end strategy evaluation tests.
//!
//! The scenario series is 700 synthetic 5-minute candles: flat at 100,
//! a step up to 103 at index 645 (SMA crossover, +DI onset), then a
//! wide-range candle at 650 whose high spikes up while the close dips
//! below the lower Bollinger band. With default parameters every entry
//! conjunct holds at 650 and only there.

use chrono::NaiveDate;
use siglab_core::domain::{Candle, CandleSeries};
use siglab_core::strategy::{
    columns, BuyTrigger, SellTrigger, SmaCross, StrategyParams, ENTRY_TAG, EXIT_TAG,
};

fn candle(i: usize, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Candle {
    let base = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    Candle {
        timestamp: base + chrono::Duration::minutes(5 * i as i64),
        open,
        high,
        low,
        close,
        volume,
    }
}

/// 700 candles: flat, step up at 645, band-piercing dip at 650.
fn scenario_candles() -> Vec<Candle> {
    let mut candles = Vec::with_capacity(700);
    for i in 0..700 {
        let c = match i {
            0..=644 => candle(i, 100.0, 100.5, 99.5, 100.0, 1000.0),
            // Step up: high jumps, low holds, so only +DM registers.
            645 => candle(i, 100.0, 103.5, 99.5, 103.0, 1000.0),
            646..=649 => candle(i, 103.0, 103.5, 102.5, 103.0, 1000.0),
            // Wide-range candle: the high spike keeps the upward move
            // larger than the downward one (-DM stays 0) while the close
            // pierces the lower band.
            650 => candle(i, 103.0, 111.5, 96.5, 97.0, 1000.0),
            651 => candle(i, 97.0, 103.5, 96.5, 103.0, 1000.0),
            _ => candle(i, 103.0, 103.5, 102.5, 103.0, 1000.0),
        };
        candles.push(c);
    }
    candles
}

fn scenario_series() -> CandleSeries {
    CandleSeries::new(scenario_candles()).unwrap()
}

// ── Independent reference evaluation (plain loops, no library calls) ──

fn ref_gt(a: &[f64], b: &[f64]) -> Vec<bool> {
    (0..a.len())
        .map(|i| !a[i].is_nan() && !b[i].is_nan() && a[i] > b[i])
        .collect()
}

fn ref_lt(a: &[f64], b: &[f64]) -> Vec<bool> {
    (0..a.len())
        .map(|i| !a[i].is_nan() && !b[i].is_nan() && a[i] < b[i])
        .collect()
}

fn ref_gt_scalar(a: &[f64], t: f64) -> Vec<bool> {
    a.iter().map(|&x| !x.is_nan() && x > t).collect()
}

fn ref_crossed_above(a: &[f64], b: &[f64]) -> Vec<bool> {
    (0..a.len())
        .map(|i| {
            i > 0
                && !a[i - 1].is_nan()
                && !b[i - 1].is_nan()
                && !a[i].is_nan()
                && !b[i].is_nan()
                && a[i - 1] <= b[i - 1]
                && a[i] > b[i]
        })
        .collect()
}

fn ref_and(conds: &[Vec<bool>]) -> Vec<bool> {
    let n = conds[0].len();
    (0..n).map(|i| conds.iter().all(|c| c[i])).collect()
}

fn col<'a>(frame: &'a siglab_core::strategy::SignalFrame, name: &str) -> &'a [f64] {
    frame.column(name).unwrap()
}

#[test]
fn entry_fires_exactly_at_the_manufactured_setup() {
    let strategy = SmaCross::new(StrategyParams::default());
    let frame = strategy.evaluate(&scenario_series()).unwrap();

    let fired: Vec<usize> = frame
        .enter_long()
        .iter()
        .enumerate()
        .filter(|(_, &m)| m)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(fired, vec![650]);

    // All five conjuncts hold at 650.
    assert!(col(&frame, columns::PLUS_DI)[650] > col(&frame, columns::MINUS_DI)[650]);
    assert!(col(&frame, columns::BUY_MA1)[650] > col(&frame, columns::BUY_MA2)[650]);
    assert!(col(&frame, columns::ADX)[650] > 30.1);
    assert!(frame.candles()[650].close < col(&frame, columns::BB_LOWER)[650]);
    assert!(frame.candles()[650].volume > 0.0);
}

#[test]
fn entry_mask_matches_hand_computed_conjunction() {
    let strategy = SmaCross::new(StrategyParams::default());
    let series = scenario_series();
    let frame = strategy.evaluate(&series).unwrap();

    let closes: Vec<f64> = frame.candles().iter().map(|c| c.close).collect();
    let volume_ok: Vec<bool> = frame.candles().iter().map(|c| c.volume > 0.0).collect();

    let expected = ref_and(&[
        ref_gt(col(&frame, columns::PLUS_DI), col(&frame, columns::MINUS_DI)),
        ref_gt(col(&frame, columns::BUY_MA1), col(&frame, columns::BUY_MA2)),
        ref_gt_scalar(col(&frame, columns::ADX), 30.1),
        ref_lt(&closes, col(&frame, columns::BB_LOWER)),
        volume_ok,
    ]);
    assert_eq!(frame.enter_long(), expected.as_slice());
}

#[test]
fn exit_mask_matches_hand_computed_conjunction() {
    let strategy = SmaCross::new(StrategyParams::default());
    let frame = strategy.evaluate(&scenario_series()).unwrap();

    let closes: Vec<f64> = frame.candles().iter().map(|c| c.close).collect();
    let volume_ok: Vec<bool> = frame.candles().iter().map(|c| c.volume > 0.0).collect();

    let expected = ref_and(&[
        ref_gt(&closes, col(&frame, columns::BB_UPPER)),
        volume_ok,
    ]);
    assert_eq!(frame.exit_long(), expected.as_slice());

    // The step candle closes above the upper band of the flat window.
    assert!(frame.exit_long()[645]);
    assert!(frame.exit_long()[646]);
    // The dip candle closes far below it.
    assert!(!frame.exit_long()[650]);
}

#[test]
fn tags_set_exactly_where_flags_fire() {
    let strategy = SmaCross::new(StrategyParams::default());
    let frame = strategy.evaluate(&scenario_series()).unwrap();

    for i in 0..frame.len() {
        if frame.enter_long()[i] {
            assert_eq!(frame.enter_tag(i), Some(ENTRY_TAG));
            assert_eq!(frame.entries().flag(i), 1);
        } else {
            assert_eq!(frame.enter_tag(i), None);
            assert_eq!(frame.entries().flag(i), 0);
        }
        if frame.exit_long()[i] {
            assert_eq!(frame.exit_tag(i), Some(EXIT_TAG));
        } else {
            assert_eq!(frame.exit_tag(i), None);
        }
    }

    assert_eq!(frame.enter_tag(650), Some("buy_signal"));
    assert_eq!(frame.exit_tag(645), Some("sell_signal"));
}

#[test]
fn evaluation_is_deterministic() {
    let strategy = SmaCross::new(StrategyParams::default());
    let series = scenario_series();
    let a = strategy.evaluate(&series).unwrap();
    let b = strategy.evaluate(&series).unwrap();

    for name in columns::ALL {
        let ca = a.column(name).unwrap();
        let cb = b.column(name).unwrap();
        assert_eq!(ca.len(), cb.len());
        for i in 0..ca.len() {
            // Bitwise identity, NaN included.
            assert_eq!(ca[i].to_bits(), cb[i].to_bits(), "{name} differs at {i}");
        }
    }
    assert_eq!(a.enter_long(), b.enter_long());
    assert_eq!(a.exit_long(), b.exit_long());
}

#[test]
fn enabling_a_guard_never_adds_entries() {
    let series = scenario_series();

    let without_guard = SmaCross::new(StrategyParams {
        buy_adx_enabled: false,
        ..Default::default()
    })
    .evaluate(&series)
    .unwrap();

    for buy_adx in [25.0, 30.1, 50.0] {
        let with_guard = SmaCross::new(StrategyParams {
            buy_adx_enabled: true,
            buy_adx,
            ..Default::default()
        })
        .evaluate(&series)
        .unwrap();

        for i in 0..series.len() {
            assert!(
                !with_guard.enter_long()[i] || without_guard.enter_long()[i],
                "guard added an entry at {i}"
            );
        }
    }

    // The scenario setup clears the default threshold but not the maximum.
    assert!(without_guard.enter_long()[650]);
    let strict = SmaCross::new(StrategyParams {
        buy_adx: 50.0,
        ..Default::default()
    })
    .evaluate(&series)
    .unwrap();
    assert_eq!(strict.entries().count(), 0);
}

#[test]
fn rsi_guard_narrows_the_same_way() {
    let series = scenario_series();
    let relaxed = SmaCross::new(StrategyParams::default()).evaluate(&series).unwrap();
    let guarded = SmaCross::new(StrategyParams {
        buy_rsi_enabled: true,
        buy_rsi: 30,
        ..Default::default()
    })
    .evaluate(&series)
    .unwrap();

    for i in 0..series.len() {
        assert!(!guarded.enter_long()[i] || relaxed.enter_long()[i]);
    }
    // The dip candle drives RSI below 30, so the entry survives the guard.
    assert!(guarded.enter_long()[650]);
}

#[test]
fn zero_volume_candle_cannot_fire() {
    let mut candles = scenario_candles();
    candles[650].volume = 0.0;
    let series = CandleSeries::new(candles).unwrap();

    let frame = SmaCross::new(StrategyParams::default()).evaluate(&series).unwrap();
    assert!(!frame.enter_long()[650]);
    assert_eq!(frame.entries().count(), 0);
}

#[test]
fn macd_triggers_match_hand_computed_crossovers() {
    let strategy = SmaCross::new(StrategyParams {
        buy_trigger: BuyTrigger::MacdCrossSignal,
        sell_trigger: SellTrigger::MacdCrossSignal,
        buy_adx_enabled: false,
        ..Default::default()
    });
    let frame = strategy.evaluate(&scenario_series()).unwrap();

    let volume_ok: Vec<bool> = frame.candles().iter().map(|c| c.volume > 0.0).collect();
    let macd = col(&frame, columns::MACD);
    let macdsignal = col(&frame, columns::MACD_SIGNAL);

    let expected_entries = ref_and(&[
        ref_gt(col(&frame, columns::PLUS_DI), col(&frame, columns::MINUS_DI)),
        ref_gt(col(&frame, columns::BUY_MA1), col(&frame, columns::BUY_MA2)),
        ref_crossed_above(macd, macdsignal),
        volume_ok.clone(),
    ]);
    assert_eq!(frame.enter_long(), expected_entries.as_slice());

    let expected_exits: Vec<bool> = (0..frame.len())
        .map(|i| {
            i > 0
                && !macd[i - 1].is_nan()
                && !macdsignal[i - 1].is_nan()
                && !macd[i].is_nan()
                && !macdsignal[i].is_nan()
                && macd[i - 1] >= macdsignal[i - 1]
                && macd[i] < macdsignal[i]
                && volume_ok[i]
        })
        .collect();
    assert_eq!(frame.exit_long(), expected_exits.as_slice());

    // The step at 645 bends the MACD line up through its signal line.
    assert!(frame.exits().count() > 0 || frame.entries().count() > 0);
}

#[test]
fn out_of_range_params_abort_with_named_bound() {
    let strategy = SmaCross::new(StrategyParams {
        buy_adx: 60.0,
        ..Default::default()
    });
    let err = strategy.evaluate(&scenario_series()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("buy_adx"));
    assert!(message.contains("60"));
    assert!(message.contains("[25, 50]"));
}

#[test]
fn no_signal_inside_warmup_window() {
    // Values crafted to satisfy comparisons if warm-up NaNs leaked through.
    let candles: Vec<Candle> = (0..20)
        .map(|i| candle(i, 100.0 + i as f64, 102.0 + i as f64, 99.0 + i as f64, 101.0 + i as f64, 1000.0))
        .collect();
    let series = CandleSeries::new(candles).unwrap();

    let frame = SmaCross::new(StrategyParams::default()).evaluate(&series).unwrap();
    // Every trigger depends on a column still undefined at 20 candles.
    assert_eq!(frame.entries().count(), 0);
    assert_eq!(frame.exits().count(), 0);
}

#[test]
fn full_hash_stable_across_identical_params() {
    assert_eq!(
        StrategyParams::default().full_hash(),
        StrategyParams::default().full_hash()
    );
    assert_ne!(
        StrategyParams::default().full_hash(),
        StrategyParams::tuned().full_hash()
    );
}
