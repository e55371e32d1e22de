// src/makers/simple.rs

use super::maker_trait::MarketMaker;
use crate::config::{MIN_PRICE, SPREAD_MULTIPLIER};

/// A simple market maker that quotes a symmetric spread proportional to
/// price and volatility.
pub struct SimpleMarketMaker {
    spread_multiplier: f64,
}

impl SimpleMarketMaker {
    pub fn new(spread_multiplier: f64) -> Self {
        Self { spread_multiplier }
    }
}

impl Default for SimpleMarketMaker {
    fn default() -> Self {
        Self::new(SPREAD_MULTIPLIER)
    }
}

impl MarketMaker for SimpleMarketMaker {
    fn make_market(&self, price: f64, volatility: f64) -> (f64, f64) {
        let spread = price * volatility * self.spread_multiplier;
        let bid = (price - spread).max(MIN_PRICE);
        let ask = price + spread;
        (bid, ask)
    }
}

// -----------------------------------------------------------------------------
//  Unit Tests
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_never_exceeds_ask_and_respects_floor() {
        let maker = SimpleMarketMaker::default();
        let inputs: &[(f64, f64)] = &[
            (100.0, 0.02),
            (0.01, 0.001),
            (0.02, 10.0), // spread larger than the price itself
            (1e9, 0.5),
            (0.5, 0.0001),
        ];
        for &(price, volatility) in inputs {
            let (bid, ask) = maker.make_market(price, volatility);
            assert!(
                bid <= ask,
                "bid {} above ask {} for ({}, {})",
                bid,
                ask,
                price,
                volatility
            );
            assert!(bid >= 0.01, "bid {} below the floor", bid);
        }
    }

    #[test]
    fn test_spread_is_symmetric_around_price() {
        // Arrange
        let maker = SimpleMarketMaker::new(0.1);

        // Act: spread = 100 * 0.02 * 0.1 = 0.2
        let (bid, ask) = maker.make_market(100.0, 0.02);

        // Assert
        assert!((bid - 99.8).abs() < 1e-9, "bid was {}", bid);
        assert!((ask - 100.2).abs() < 1e-9, "ask was {}", ask);
    }

    #[test]
    fn test_quoting_is_idempotent() {
        let maker = SimpleMarketMaker::default();
        let first = maker.make_market(137.5, 0.034);
        let second = maker.make_market(137.5, 0.034);
        assert_eq!(
            first, second,
            "make_market must be a pure function of its inputs."
        );
    }
}
