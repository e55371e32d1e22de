// src/bin/play.rs

use anyhow::Context;
use clap::Parser;
use market_making_game::config::{self, INITIAL_PRICE, INITIAL_VOLATILITY, SIMULATION_DAYS};
use market_making_game::{
    resolve, ChallengeManager, DayRecord, Game, Market, PerformanceReport, DEFAULT_MAKER,
};
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "play", about = "Volatility Market Making Game")]
struct Args {
    /// Market maker to quote with. An unknown name falls back to the default
    /// with a warning instead of failing the run.
    #[arg(long, default_value = DEFAULT_MAKER)]
    market_maker: String,

    /// Number of trading days to simulate.
    #[arg(long, default_value_t = SIMULATION_DAYS)]
    days: u32,

    /// Seed for a reproducible run; omit for a fresh random one.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the full run report (day records + score + performance) as JSON.
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Serialize)]
struct RunReport<'a> {
    days: &'a [DayRecord],
    score: f64,
    performance: &'a PerformanceReport,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_file = File::create(config::LOG_FILE)
        .with_context(|| format!("creating log file {}", config::LOG_FILE))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    // One --seed fans out into fixed per-component seeds so the market walk,
    // the challenge draws and the trade coins each replay independently.
    let market = match args.seed {
        Some(seed) => Market::with_seed(INITIAL_PRICE, INITIAL_VOLATILITY, seed),
        None => Market::new(INITIAL_PRICE, INITIAL_VOLATILITY),
    };
    let challenges = match args.seed {
        Some(seed) => ChallengeManager::with_seed(seed.wrapping_add(1)),
        None => ChallengeManager::new(),
    };
    let maker = resolve(&args.market_maker);
    let mut game = match args.seed {
        Some(seed) => Game::with_seed(market, challenges, maker, args.days, seed.wrapping_add(2)),
        None => Game::new(market, challenges, maker, args.days),
    };

    let start = Instant::now();
    let score = game.run();
    let elapsed = start.elapsed();

    let performance = PerformanceReport::from_records(game.records());

    println!("\nGame completed in {:.2} seconds", elapsed.as_secs_f64());
    println!("Final Score: {:.2}", score);
    println!("Total PnL: ${:.2}", performance.total_pnl);
    println!("Average Daily PnL: ${:.2}", performance.mean_daily_pnl);
    println!("Sharpe Ratio: {:.2}", performance.sharpe_ratio);
    println!("Maximum Drawdown: {:.2}%", performance.max_drawdown * 100.0);
    println!("Average Bid-Ask Spread: {:.2}%", performance.average_spread * 100.0);
    println!(
        "Realized Volatility (annualized): {:.2}%",
        performance.realized_volatility * 100.0
    );
    println!("\nPnL by Challenge Type:");
    for (challenge, pnl) in &performance.pnl_by_challenge {
        println!("  {:<18} {:>10.2}", challenge, pnl);
    }
    println!("\nCheck {} for detailed game logs", config::LOG_FILE);

    if let Some(path) = args.json {
        let report = RunReport {
            days: game.records(),
            score,
            performance: &performance,
        };
        let out = File::create(&path)
            .with_context(|| format!("creating report file {}", path.display()))?;
        serde_json::to_writer_pretty(out, &report).context("serializing run report")?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
