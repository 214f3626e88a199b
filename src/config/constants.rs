use std::time::Duration;

// --- Lesson timing ---

/// Pause between completing the knowledge check and moving to the summary.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// Cadence (seconds) of the decorative data-flow pulses in the diagrams.
/// Presentation-only; no core state depends on these.
pub const RNN_PULSE_PERIOD: f64 = 2.0;
pub const LSTM_PULSE_PERIOD: f64 = 3.0;
pub const WINDOW_SLIDE_PERIOD: f64 = 2.5;

// --- Step walkthroughs ---

pub const RNN_STEPS: usize = 3;
pub const LSTM_STEPS: usize = 4;
pub const TIMESERIES_STEPS: usize = 3;

// --- Synthetic series ---

pub const HISTORICAL_DAYS: usize = 100;
pub const PROJECTION_DAYS: usize = 30;
pub const SERIES_START_PRICE: f64 = 100.0;
/// The walk never drops below this; keeps the chart strictly positive.
pub const PRICE_FLOOR: f64 = 1.0;

// --- Lab slider ranges ---

pub const VOLATILITY_RANGE: std::ops::RangeInclusive<f64> = 0.5..=5.0;
pub const TREND_RANGE: std::ops::RangeInclusive<f64> = -2.0..=2.0;
pub const LOOKBACK_RANGE: std::ops::RangeInclusive<usize> = 3..=30;
