// src/config.rs

//! A centralized place for the game's tuning parameters.

// --- Market simulation ---
pub const INITIAL_PRICE: f64 = 100.0;
pub const INITIAL_VOLATILITY: f64 = 0.02;
pub const SIMULATION_DAYS: u32 = 63;
// Hard floors the market state can never drop below.
pub const MIN_PRICE: f64 = 0.01;
pub const MIN_VOLATILITY: f64 = 0.001;
// Daily price factor band: a single day can at most halve or double the price.
pub const PRICE_FACTOR_MIN: f64 = 0.5;
pub const PRICE_FACTOR_MAX: f64 = 2.0;

// --- Market maker ---
pub const SPREAD_MULTIPLIER: f64 = 0.1;
// Defined but not consumed by any component. Kept to mirror the original
// configuration surface; do not wire these in without deciding what they mean.
pub const BASE_SPREAD: f64 = 0.01;
pub const INVENTORY_LIMIT: u32 = 100;

// --- Trade simulation ---
// A quote counts as crossed when the market price is within this fraction of it.
pub const TRADE_BUFFER: f64 = 0.001;
pub const RANDOM_TRADE_PROB: f64 = 0.1;

// --- Scoring ---
pub const NEGATIVE_PNL_PENALTY: f64 = 10.0;
pub const CONSECUTIVE_POSITIVE_BONUS: f64 = 5.0;

// --- Logging ---
pub const LOG_FILE: &str = "market_making_game.log";

// --- Analysis ---
pub const RISK_FREE_RATE: f64 = 0.02;
pub const VOLATILITY_WINDOW: usize = 30;
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

// --- Order book snapshot ---
pub const ORDER_BOOK_DEPTH: usize = 5;
pub const MAX_SPREAD_PERCENTAGE: f64 = 0.01;
