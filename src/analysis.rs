// src/analysis.rs

//! Read-only descriptive statistics over a completed run. Nothing in here
//! feeds back into the simulation; every function takes the finished
//! day-record log (or a derived series) and produces a report.

use crate::config::{RISK_FREE_RATE, TRADING_DAYS_PER_YEAR, VOLATILITY_WINDOW};
use crate::game::DayRecord;
use serde::Serialize;
use statrs::statistics::Statistics;
use std::collections::BTreeMap;

/// Logarithmic returns of a price series.
pub fn calculate_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect()
}

/// Rolling annualized volatility: population std-dev over a trailing window,
/// scaled by the square root of the trading year.
pub fn rolling_volatility(returns: &[f64], window: usize) -> Vec<f64> {
    (1..=returns.len())
        .map(|i| {
            let start = i.saturating_sub(window);
            returns[start..i].iter().population_std_dev() * TRADING_DAYS_PER_YEAR.sqrt()
        })
        .collect()
}

/// Annualized Sharpe ratio of a daily return series against the annual
/// risk-free rate. Degenerate for a constant series, like the quantity
/// itself.
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> f64 {
    let excess: Vec<f64> = returns
        .iter()
        .map(|r| r - risk_free_rate / TRADING_DAYS_PER_YEAR)
        .collect();
    let mean = excess.iter().mean();
    let std = excess.iter().population_std_dev();
    mean / std * TRADING_DAYS_PER_YEAR.sqrt()
}

/// Maximum drawdown of a cumulative P&L curve, as a fraction of the running
/// peak.
pub fn max_drawdown(cumulative_pnl: &[f64]) -> f64 {
    let Some(&first) = cumulative_pnl.first() else {
        return 0.0;
    };
    let mut peak = first;
    let mut max_dd = 0.0;
    for &value in cumulative_pnl {
        if value > peak {
            peak = value;
        }
        if peak != 0.0 {
            let dd = (peak - value) / peak;
            if dd > max_dd {
                max_dd = dd;
            }
        }
    }
    max_dd
}

/// Bid-ask spread as a fraction of the mid price.
pub fn bid_ask_spread(bid: f64, ask: f64) -> f64 {
    let mid = (bid + ask) / 2.0;
    (ask - bid) / mid
}

/// Signed execution slippage of a trade against the prevailing market price.
pub fn market_impact(trade_price: f64, market_price: f64) -> f64 {
    (trade_price - market_price) / market_price
}

/// Aggregate performance summary of one finished run.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    pub total_pnl: f64,
    pub mean_daily_pnl: f64,
    pub pnl_std_dev: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
    pub average_spread: f64,
    /// Annualized volatility realized by the quoted mid-price path, over the
    /// configured trailing window.
    pub realized_volatility: f64,
    pub pnl_by_challenge: BTreeMap<String, f64>,
}

impl PerformanceReport {
    pub fn from_records(records: &[DayRecord]) -> Self {
        if records.is_empty() {
            return Self {
                total_pnl: 0.0,
                mean_daily_pnl: 0.0,
                pnl_std_dev: 0.0,
                sharpe_ratio: 0.0,
                max_drawdown: 0.0,
                average_spread: 0.0,
                realized_volatility: 0.0,
                pnl_by_challenge: BTreeMap::new(),
            };
        }

        let pnls: Vec<f64> = records.iter().map(|r| r.pnl).collect();
        let cumulative: Vec<f64> = pnls
            .iter()
            .scan(0.0, |acc, p| {
                *acc += p;
                Some(*acc)
            })
            .collect();

        let mids: Vec<f64> = records.iter().map(|r| (r.bid + r.ask) / 2.0).collect();
        let mid_returns = calculate_returns(&mids);
        let realized_volatility = rolling_volatility(&mid_returns, VOLATILITY_WINDOW)
            .last()
            .copied()
            .unwrap_or(0.0);

        let mut pnl_by_challenge = BTreeMap::new();
        for record in records {
            *pnl_by_challenge.entry(record.challenge.clone()).or_insert(0.0) += record.pnl;
        }

        Self {
            total_pnl: pnls.iter().sum(),
            mean_daily_pnl: pnls.iter().mean(),
            pnl_std_dev: pnls.iter().population_std_dev(),
            sharpe_ratio: sharpe_ratio(&pnls, RISK_FREE_RATE),
            max_drawdown: max_drawdown(&cumulative),
            average_spread: records
                .iter()
                .map(|r| bid_ask_spread(r.bid, r.ask))
                .mean(),
            realized_volatility,
            pnl_by_challenge,
        }
    }
}
