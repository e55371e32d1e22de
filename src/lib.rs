// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod analysis;
pub mod book_sim;
pub mod challenges;
pub mod config;
pub mod game;
pub mod makers;
pub mod market;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From the `market` process ---
pub use market::{Market, MarketState};

// --- From `challenges` ---
pub use challenges::{Challenge, ChallengeManager};

// --- From `makers` ---
pub use makers::maker_trait::MarketMaker;
pub use makers::registry::{resolve, DEFAULT_MAKER};
pub use makers::simple::SimpleMarketMaker;

// --- From the `game` loop ---
pub use game::{DayRecord, Game, Side, TradeResult};

// --- From `analysis` ---
pub use analysis::PerformanceReport;
