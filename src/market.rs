// src/market.rs

use crate::config::{MIN_PRICE, MIN_VOLATILITY, PRICE_FACTOR_MAX, PRICE_FACTOR_MIN};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::fmt;

/// A snapshot of the market: the current price and volatility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketState {
    pub price: f64,
    pub volatility: f64,
}

/// Simulates a financial market with daily price movements driven by the
/// current volatility. The struct owns its own rng so a whole run can be
/// replayed from a fixed seed.
pub struct Market {
    state: MarketState,
    day: u32,
    rng: StdRng,
}

impl Market {
    pub fn new(initial_price: f64, initial_volatility: f64) -> Self {
        Self::from_rng(initial_price, initial_volatility, StdRng::from_entropy())
    }

    /// Seeded constructor for reproducible runs and tests.
    pub fn with_seed(initial_price: f64, initial_volatility: f64, seed: u64) -> Self {
        Self::from_rng(initial_price, initial_volatility, StdRng::seed_from_u64(seed))
    }

    fn from_rng(initial_price: f64, initial_volatility: f64, rng: StdRng) -> Self {
        Self {
            state: MarketState {
                price: initial_price.max(MIN_PRICE),
                volatility: initial_volatility.max(MIN_VOLATILITY),
            },
            day: 0,
            rng,
        }
    }

    /// Advance the market by one day.
    ///
    /// The daily log-return is drawn from Normal(0, volatility) and turned
    /// into a multiplicative price factor, clamped to the configured band so
    /// a single day can never more than halve or double the price.
    /// Volatility is untouched here; only challenges move it.
    pub fn update(&mut self) {
        self.day += 1;

        // Floor invariant guarantees volatility > 0, so Normal::new cannot fail.
        let normal = Normal::new(0.0, self.state.volatility).unwrap();
        let daily_return: f64 = normal.sample(&mut self.rng);

        let raw_factor = daily_return.exp();
        let price_factor = if raw_factor.is_finite() {
            raw_factor.clamp(PRICE_FACTOR_MIN, PRICE_FACTOR_MAX)
        } else if daily_return > 0.0 {
            // exp overflowed; pin the move to the band edge.
            PRICE_FACTOR_MAX
        } else {
            PRICE_FACTOR_MIN
        };

        self.state.price = (self.state.price * price_factor).max(MIN_PRICE);
    }

    /// Apply a challenge as a pair of multiplicative factors on (price,
    /// volatility), then re-assert the floors. Together with `update` these
    /// are the only two ways the state ever changes.
    pub fn apply_challenge(&mut self, price_factor: f64, volatility_factor: f64) {
        self.state.price = (self.state.price * price_factor).max(MIN_PRICE);
        self.state.volatility = (self.state.volatility * volatility_factor).max(MIN_VOLATILITY);
    }

    pub fn state(&self) -> MarketState {
        self.state
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Day {}: Price = {:.2}, Volatility = {:.4}",
            self.day, self.state.price, self.state.volatility
        )
    }
}
