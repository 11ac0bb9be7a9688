//! Condition evaluation and signal combination.
//!
//! Conditions are NaN-safe boolean series aligned 1:1 with the candle
//! sequence; the combiner AND-reduces an ordered condition list into one
//! tagged signal series.

pub mod combine;
pub mod conditions;

pub use combine::SignalSeries;
pub use conditions::Cmp;
