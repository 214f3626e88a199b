//! Synthetic price walk for the stock-prediction lab.
//!
//! This is chart decoration, not a model: a pseudo-random walk whose
//! "projection" simply biases the same walk with a trend term. Repeated
//! calls with identical parameters produce different series on purpose
//! (non-seeded randomness at the call sites); only the statistical
//! invariants hold: requested length, and every value >= the price floor.

use rand::Rng;

use crate::config::{
    HISTORICAL_DAYS, PRICE_FLOOR, PROJECTION_DAYS, SERIES_START_PRICE,
};

/// Slider-driven knobs for the lab. The lookback window is a labeled
/// parameter only; the toy walk does not consume it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesParams {
    /// Market volatility in percent (0.5..=5.0 on the slider).
    pub volatility_pct: f64,
    /// Per-step trend bias in percent (-2.0..=2.0 on the slider).
    pub trend_pct: f64,
    /// Days of history framed as the model input (3..=30 on the slider).
    pub lookback_days: usize,
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            volatility_pct: 2.0,
            trend_pct: 0.0,
            lookback_days: 7,
        }
    }
}

/// Regenerated wholesale, never mutated in place.
#[derive(Clone, Debug, Default)]
pub struct SeriesData {
    pub historical: Vec<f64>,
    pub predicted: Vec<f64>,
}

impl SeriesData {
    pub fn generate(rng: &mut impl Rng, params: &SeriesParams) -> Self {
        let historical = generate_historical(
            rng,
            HISTORICAL_DAYS,
            params.volatility_pct / 100.0,
            SERIES_START_PRICE,
        );
        let mut data = Self {
            historical,
            predicted: Vec::new(),
        };
        data.reproject(rng, params);
        data
    }

    /// Replace the projection, keeping the historical walk. Runs whenever
    /// a slider moves.
    pub fn reproject(&mut self, rng: &mut impl Rng, params: &SeriesParams) {
        let last = self.last_historical().unwrap_or(SERIES_START_PRICE);
        self.predicted = generate_projection(
            rng,
            last,
            PROJECTION_DAYS,
            params.volatility_pct / 100.0,
            params.trend_pct,
        );
    }

    pub fn last_historical(&self) -> Option<f64> {
        self.historical.last().copied()
    }

    /// Percent change from the last observed price to the last projected
    /// one; what the insights card reports.
    pub fn projected_change_pct(&self) -> Option<f64> {
        let last = self.last_historical()?;
        let end = self.predicted.last().copied()?;
        Some((end / last - 1.0) * 100.0)
    }
}

/// Random walk: `price += price * volatility * (U(0,1) - 0.5)`, floored so
/// the chart never shows a non-positive price.
pub fn generate_historical(
    rng: &mut impl Rng,
    days: usize,
    volatility: f64,
    start_price: f64,
) -> Vec<f64> {
    let mut prices = Vec::with_capacity(days);
    let mut price = start_price;
    for _ in 0..days {
        let change = price * volatility * (rng.r#gen::<f64>() - 0.5);
        price = (price + change).max(PRICE_FLOOR);
        prices.push(price);
    }
    prices
}

/// Same recurrence as the historical walk plus a per-step trend drift of
/// `last * trend_pct / 100`.
pub fn generate_projection(
    rng: &mut impl Rng,
    last_historical_price: f64,
    future_days: usize,
    volatility: f64,
    trend_pct: f64,
) -> Vec<f64> {
    let mut prices = Vec::with_capacity(future_days);
    let mut last = last_historical_price;
    for _ in 0..future_days {
        let change = last * (volatility * (rng.r#gen::<f64>() - 0.5) + trend_pct / 100.0);
        last = (last + change).max(PRICE_FLOOR);
        prices.push(last);
    }
    prices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_historical_length_and_floor() {
        let mut rng = StdRng::seed_from_u64(7);
        let prices = generate_historical(&mut rng, 100, 0.02, 100.0);
        assert_eq!(prices.len(), 100);
        assert!(prices.iter().all(|p| *p >= 1.0));
    }

    #[test]
    fn test_floor_holds_under_extreme_volatility() {
        // Volatility way past the slider range still cannot push the walk
        // below the floor
        let mut rng = StdRng::seed_from_u64(42);
        let prices = generate_historical(&mut rng, 500, 3.0, 2.0);
        assert_eq!(prices.len(), 500);
        assert!(prices.iter().all(|p| *p >= 1.0));
    }

    #[test]
    fn test_projection_length_and_floor() {
        let mut rng = StdRng::seed_from_u64(3);
        let prices = generate_projection(&mut rng, 100.0, 30, 0.02, -2.0);
        assert_eq!(prices.len(), 30);
        assert!(prices.iter().all(|p| *p >= 1.0));
    }

    #[test]
    fn test_strong_trend_dominates_noise() {
        // +2% drift per step with tiny noise must end above the start
        let mut rng = StdRng::seed_from_u64(11);
        let prices = generate_projection(&mut rng, 100.0, 30, 0.001, 2.0);
        assert!(prices.last().unwrap() > &100.0);
    }

    #[test]
    fn test_reproject_keeps_history() {
        let mut rng = StdRng::seed_from_u64(5);
        let params = SeriesParams::default();
        let mut data = SeriesData::generate(&mut rng, &params);
        let history = data.historical.clone();

        let steeper = SeriesParams {
            trend_pct: 1.5,
            ..params
        };
        data.reproject(&mut rng, &steeper);
        assert_eq!(data.historical, history);
        assert_eq!(data.predicted.len(), PROJECTION_DAYS);
    }

    #[test]
    fn test_projected_change_pct_is_consistent() {
        let data = SeriesData {
            historical: vec![100.0],
            predicted: vec![90.0, 110.0],
        };
        let change = data.projected_change_pct().unwrap();
        assert!((change - 10.0).abs() < 1e-9);
    }
}
