// src/makers/maker_trait.rs

/// The one capability every market maker exposes: turn the current market
/// state into a (bid, ask) quote.
///
/// Implementations must be pure: no internal state between calls, no side
/// effects, and identical inputs always produce identical quotes. The
/// returned pair must satisfy bid <= ask and bid >= 0.01.
pub trait MarketMaker {
    fn make_market(&self, price: f64, volatility: f64) -> (f64, f64);
}
