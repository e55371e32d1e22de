// src/book_sim.rs

use rand::Rng;

/// One resting level of the toy book: (price, quantity).
pub type BookLevel = (f64, u32);

/// Generate a toy order-book snapshot around a mid price: `depth` levels per
/// side spaced evenly out to `max_spread` (a fraction of mid), each with a
/// random quantity. Purely cosmetic; only the visualizer consumes it.
pub fn simulate_book<R: Rng>(
    mid_price: f64,
    depth: usize,
    max_spread: f64,
    rng: &mut R,
) -> (Vec<BookLevel>, Vec<BookLevel>) {
    let mut bids = Vec::with_capacity(depth);
    let mut asks = Vec::with_capacity(depth);
    for level in 0..depth {
        let offset = max_spread * (level + 1) as f64 / depth as f64;
        bids.push((mid_price * (1.0 - offset), rng.gen_range(1..100)));
        asks.push((mid_price * (1.0 + offset), rng.gen_range(1..100)));
    }
    (bids, asks)
}

// -----------------------------------------------------------------------------
//  Unit Tests
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_book_shape_and_ordering() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(17);

        // Act
        let (bids, asks) = simulate_book(100.0, 5, 0.01, &mut rng);

        // Assert
        assert_eq!(bids.len(), 5);
        assert_eq!(asks.len(), 5);
        for ((bid_price, bid_qty), (ask_price, ask_qty)) in bids.iter().zip(&asks) {
            assert!(*bid_price < 100.0, "bids sit below mid");
            assert!(*ask_price > 100.0, "asks sit above mid");
            assert!((1..100).contains(bid_qty));
            assert!((1..100).contains(ask_qty));
        }
        // The outermost levels reach the full configured spread.
        assert!((bids[4].0 - 99.0).abs() < 1e-9);
        assert!((asks[4].0 - 101.0).abs() < 1e-9);
    }
}
