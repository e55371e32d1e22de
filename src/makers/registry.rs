// src/makers/registry.rs

use super::maker_trait::MarketMaker;
use super::simple::SimpleMarketMaker;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use tracing::warn;

type MakerFactory = fn() -> Box<dyn MarketMaker>;

/// Explicit name -> factory table, populated once at startup. New maker
/// variants register here and become selectable from the CLI without any
/// change to the game loop.
static REGISTRY: Lazy<BTreeMap<&'static str, MakerFactory>> = Lazy::new(|| {
    let mut table: BTreeMap<&'static str, MakerFactory> = BTreeMap::new();
    table.insert("simple", || Box::new(SimpleMarketMaker::default()));
    table
});

pub const DEFAULT_MAKER: &str = "simple";

/// Resolve a maker by name. An unknown name is not an error: it logs a
/// warning and falls back to the default maker so the run still proceeds.
pub fn resolve(name: &str) -> Box<dyn MarketMaker> {
    match REGISTRY.get(name) {
        Some(factory) => factory(),
        None => {
            warn!(
                requested = name,
                fallback = DEFAULT_MAKER,
                available = ?known_names(),
                "unknown market maker, using the default"
            );
            Box::new(SimpleMarketMaker::default())
        }
    }
}

/// Every registered maker name, for help text and diagnostics.
pub fn known_names() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}

// -----------------------------------------------------------------------------
//  Unit Tests
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name_resolves() {
        let maker = resolve(DEFAULT_MAKER);
        let (bid, ask) = maker.make_market(100.0, 0.02);
        assert!(bid <= ask);
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        // An unrecognized name must not panic or error; it quotes exactly
        // like the default maker.
        let fallback = resolve("NoSuchMaker");
        let default = resolve(DEFAULT_MAKER);
        assert_eq!(
            fallback.make_market(100.0, 0.02),
            default.make_market(100.0, 0.02),
            "Fallback maker should behave exactly like the default."
        );
    }

    #[test]
    fn test_known_names_contains_default() {
        assert!(known_names().contains(&DEFAULT_MAKER));
    }
}
