// src/challenges.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A challenge's effect is a pure transform of (price, volatility) into new
/// absolute target values; the rng is only used by the variants that
/// incorporate randomness internally.
type Effect = fn(f64, f64, &mut StdRng) -> (f64, f64);

/// A named market event that perturbs price and volatility for one day.
#[derive(Clone, Copy)]
pub struct Challenge {
    pub name: &'static str,
    pub description: &'static str,
    effect: Effect,
}

fn volatility_spike(price: f64, volatility: f64, _rng: &mut StdRng) -> (f64, f64) {
    (price, volatility * 2.0)
}

fn market_crash(price: f64, volatility: f64, _rng: &mut StdRng) -> (f64, f64) {
    (price * 0.8, volatility * 1.5)
}

fn bull_run(price: f64, volatility: f64, _rng: &mut StdRng) -> (f64, f64) {
    (price * 1.2, volatility * 1.2)
}

fn calm_markets(price: f64, volatility: f64, _rng: &mut StdRng) -> (f64, f64) {
    (price, volatility * 0.5)
}

fn economic_news(price: f64, volatility: f64, rng: &mut StdRng) -> (f64, f64) {
    (
        price * rng.gen_range(0.9..1.1),
        volatility * rng.gen_range(0.8..1.2),
    )
}

/// Owns the challenge catalog and draws one uniformly at random each day.
pub struct ChallengeManager {
    challenges: Vec<Challenge>,
    rng: StdRng,
}

impl ChallengeManager {
    /// The five fixed challenges every full game draws from.
    pub fn full_catalog() -> Vec<Challenge> {
        vec![
            Challenge {
                name: "Volatility Spike",
                description: "Market volatility suddenly increases.",
                effect: volatility_spike,
            },
            Challenge {
                name: "Market Crash",
                description: "A sudden downturn causes prices to plummet.",
                effect: market_crash,
            },
            Challenge {
                name: "Bull Run",
                description: "A surge of optimism drives prices up.",
                effect: bull_run,
            },
            Challenge {
                name: "Calm Markets",
                description: "Volatility decreases as markets enter a calm period.",
                effect: calm_markets,
            },
            Challenge {
                name: "Economic News",
                description: "Breaking economic news causes price fluctuation.",
                effect: economic_news,
            },
        ]
    }

    pub fn new() -> Self {
        Self {
            challenges: Self::full_catalog(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded constructor for reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            challenges: Self::full_catalog(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restrict the catalog, e.g. to pin a single known challenge in a
    /// scenario test. Panics on an empty catalog since a day cannot pass
    /// without drawing one.
    pub fn with_catalog(challenges: Vec<Challenge>, seed: u64) -> Self {
        assert!(!challenges.is_empty(), "challenge catalog cannot be empty");
        Self {
            challenges,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a challenge uniformly at random and apply its effect to the given
    /// state, returning the new *absolute* price and volatility targets plus
    /// the challenge that produced them. Converting targets into relative
    /// factors is the caller's job: the market only accepts multiplicative
    /// deltas.
    pub fn apply(&mut self, price: f64, volatility: f64) -> (f64, f64, &Challenge) {
        let idx = self.rng.gen_range(0..self.challenges.len());
        let effect = self.challenges[idx].effect;
        let (new_price, new_volatility) = effect(price, volatility, &mut self.rng);
        (new_price, new_volatility, &self.challenges[idx])
    }
}

impl Default for ChallengeManager {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
//  Unit Tests
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    fn find(name: &str) -> Challenge {
        ChallengeManager::full_catalog()
            .into_iter()
            .find(|c| c.name == name)
            .expect("catalog entry missing")
    }

    #[test]
    fn test_catalog_has_exactly_five_challenges() {
        assert_eq!(ChallengeManager::full_catalog().len(), 5);
    }

    #[test]
    fn test_fixed_effects_match_their_factors() {
        let mut rng = StdRng::seed_from_u64(0);
        let cases: &[(&str, f64, f64)] = &[
            ("Volatility Spike", 1.0, 2.0),
            ("Market Crash", 0.8, 1.5),
            ("Bull Run", 1.2, 1.2),
            ("Calm Markets", 1.0, 0.5),
        ];
        for &(name, pf, vf) in cases {
            let challenge = find(name);
            let (p, v) = (challenge.effect)(100.0, 0.02, &mut rng);
            assert!(
                (p - 100.0 * pf).abs() < 1e-9,
                "{} price target wrong: {}",
                name,
                p
            );
            assert!(
                (v - 0.02 * vf).abs() < 1e-9,
                "{} volatility target wrong: {}",
                name,
                v
            );
        }
    }

    #[test]
    fn test_economic_news_stays_within_its_bands() {
        let mut rng = StdRng::seed_from_u64(5);
        let news = find("Economic News");
        for _ in 0..1_000 {
            let (p, v) = (news.effect)(100.0, 0.02, &mut rng);
            assert!((90.0..110.0).contains(&p), "price target out of band: {}", p);
            assert!(
                (0.016..0.024).contains(&v),
                "volatility target out of band: {}",
                v
            );
        }
    }

    #[test]
    fn test_single_entry_catalog_always_draws_that_entry() {
        // Arrange
        let calm = find("Calm Markets");
        let mut manager = ChallengeManager::with_catalog(vec![calm], 3);

        // Act + Assert
        for _ in 0..10 {
            let (_, _, drawn) = manager.apply(100.0, 0.02);
            assert_eq!(drawn.name, "Calm Markets");
        }
    }

    #[test]
    fn test_seeded_managers_draw_the_same_sequence() {
        let mut a = ChallengeManager::with_seed(11);
        let mut b = ChallengeManager::with_seed(11);
        for _ in 0..63 {
            let (pa, va, ca) = a.apply(100.0, 0.02);
            let (pb, vb, cb) = b.apply(100.0, 0.02);
            assert_eq!(ca.name, cb.name);
            assert_eq!(pa, pb);
            assert_eq!(va, vb);
        }
    }
}
