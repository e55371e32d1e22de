// src/game.rs

use crate::challenges::ChallengeManager;
use crate::config::{
    CONSECUTIVE_POSITIVE_BONUS, NEGATIVE_PNL_PENALTY, RANDOM_TRADE_PROB, TRADE_BUFFER,
};
use crate::makers::maker_trait::MarketMaker;
use crate::market::Market;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Buy,
    Sell,
}

/// The result of a single trade, consumed immediately for the day's P&L.
#[derive(Debug, Clone, Copy)]
pub struct TradeResult {
    pub side: Side,
    pub price: f64,
    pub quantity: u32,
}

/// The immutable summary of one simulated day. The ordered list of these is
/// the run's sole interface to all downstream reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub day: u32,
    pub bid: f64,
    pub ask: f64,
    pub pnl: f64,
    pub challenge: String,
}

/// This is the main simulation engine. It owns the market, the challenge
/// source and the maker, drives them day by day, and accumulates the
/// append-only day-record log.
///
/// Randomness within one day happens in a fixed order so seeded runs replay
/// bit-for-bit: market gaussian draw, challenge selection, challenge-internal
/// uniforms (Economic News only), the 10% extra-trade coin, the direction
/// coin. Each source lives in its own rng, so the order only matters inside
/// this loop.
pub struct Game {
    market: Market,
    challenges: ChallengeManager,
    maker: Box<dyn MarketMaker>,
    days: u32,
    total_pnl: f64,
    records: Vec<DayRecord>,
    rng: StdRng,
}

impl Game {
    pub fn new(
        market: Market,
        challenges: ChallengeManager,
        maker: Box<dyn MarketMaker>,
        days: u32,
    ) -> Self {
        Self::from_rng(market, challenges, maker, days, StdRng::from_entropy())
    }

    /// Seeded constructor; the seed covers only this loop's own draws (the
    /// extra-trade and direction coins). The market and challenge source
    /// carry their own seeds.
    pub fn with_seed(
        market: Market,
        challenges: ChallengeManager,
        maker: Box<dyn MarketMaker>,
        days: u32,
        seed: u64,
    ) -> Self {
        Self::from_rng(market, challenges, maker, days, StdRng::seed_from_u64(seed))
    }

    fn from_rng(
        market: Market,
        challenges: ChallengeManager,
        maker: Box<dyn MarketMaker>,
        days: u32,
        rng: StdRng,
    ) -> Self {
        Self {
            market,
            challenges,
            maker,
            days,
            total_pnl: 0.0,
            records: Vec::with_capacity(days as usize),
            rng,
        }
    }

    /// Run every configured day and return the final score. The day-record
    /// log and totals stay readable afterwards.
    pub fn run(&mut self) -> f64 {
        info!(days = self.days, "starting game simulation");

        for day in 1..=self.days {
            let daily_pnl = self.simulate_day(day);
            self.total_pnl += daily_pnl;
            info!(
                day,
                daily_pnl = format_args!("{:.2}", daily_pnl),
                total_pnl = format_args!("{:.2}", self.total_pnl),
                "day completed"
            );
        }

        info!(total_pnl = format_args!("{:.2}", self.total_pnl), "game ended");
        self.calculate_score()
    }

    /// One full day: advance the market, perturb it with a challenge, quote
    /// off the post-challenge state, fill trades, book the P&L.
    fn simulate_day(&mut self, day: u32) -> f64 {
        self.market.update();

        // Challenges hand back absolute targets; the market only takes
        // multiplicative deltas, so convert new/old here.
        let before = self.market.state();
        let (new_price, new_volatility, challenge) =
            self.challenges.apply(before.price, before.volatility);
        let challenge_name = challenge.name;
        self.market
            .apply_challenge(new_price / before.price, new_volatility / before.volatility);

        let after = self.market.state();
        let (bid, ask) = self.maker.make_market(after.price, after.volatility);

        let trades = self.simulate_trades(bid, ask);
        let pnl = self.daily_pnl(&trades);

        self.records.push(DayRecord {
            day,
            bid,
            ask,
            pnl,
            challenge: challenge_name.to_string(),
        });
        debug!(
            day,
            bid = format_args!("{:.2}", bid),
            ask = format_args!("{:.2}", ask),
            pnl = format_args!("{:.2}", pnl),
            challenge = challenge_name,
            "day recorded"
        );
        pnl
    }

    /// One deterministic unit trade when the market price crosses a quote
    /// (within the buffer, buy side checked first), plus an independent
    /// small chance of one extra unit trade in a random direction.
    fn simulate_trades(&mut self, bid: f64, ask: f64) -> Vec<TradeResult> {
        let market_price = self.market.state().price;
        let mut trades = Vec::new();

        if market_price <= bid * (1.0 + TRADE_BUFFER) {
            trades.push(TradeResult {
                side: Side::Buy,
                price: bid,
                quantity: 1,
            });
        } else if market_price >= ask * (1.0 - TRADE_BUFFER) {
            trades.push(TradeResult {
                side: Side::Sell,
                price: ask,
                quantity: 1,
            });
        }

        if self.rng.gen_bool(RANDOM_TRADE_PROB) {
            let trade = if self.rng.gen_bool(0.5) {
                TradeResult {
                    side: Side::Buy,
                    price: bid,
                    quantity: 1,
                }
            } else {
                TradeResult {
                    side: Side::Sell,
                    price: ask,
                    quantity: 1,
                }
            };
            trades.push(trade);
        }

        if trades.is_empty() {
            debug!(
                market_price = format_args!("{:.2}", market_price),
                bid = format_args!("{:.2}", bid),
                ask = format_args!("{:.2}", ask),
                "no trade executed"
            );
        } else {
            for trade in &trades {
                debug!(side = ?trade.side, price = format_args!("{:.2}", trade.price), "trade executed");
            }
        }
        trades
    }

    /// A buy earns what the market has over the bid; a sell earns what the
    /// ask has over the market.
    fn daily_pnl(&self, trades: &[TradeResult]) -> f64 {
        let market_price = self.market.state().price;
        trades
            .iter()
            .map(|trade| {
                let per_unit = match trade.side {
                    Side::Buy => market_price - trade.price,
                    Side::Sell => trade.price - market_price,
                };
                per_unit * f64::from(trade.quantity)
            })
            .sum()
    }

    /// Final score: total P&L, a penalty per losing day, a bonus per day of
    /// the longest winning streak, floored at zero.
    pub fn calculate_score(&self) -> f64 {
        let negative_days = self.records.iter().filter(|r| r.pnl < 0.0).count();
        let streak = self.max_consecutive_positive_days();

        let score = self.total_pnl - negative_days as f64 * NEGATIVE_PNL_PENALTY
            + streak as f64 * CONSECUTIVE_POSITIVE_BONUS;

        info!(
            total_pnl = format_args!("{:.2}", self.total_pnl),
            negative_days,
            max_streak = streak,
            "score calculated"
        );
        score.max(0.0)
    }

    /// Longest run of consecutive days with strictly positive P&L. A zero
    /// day breaks the streak just like a losing one.
    fn max_consecutive_positive_days(&self) -> u32 {
        let mut max_streak = 0;
        let mut current = 0;
        for record in &self.records {
            if record.pnl > 0.0 {
                current += 1;
                max_streak = max_streak.max(current);
            } else {
                current = 0;
            }
        }
        max_streak
    }

    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    pub fn total_pnl(&self) -> f64 {
        self.total_pnl
    }
}
