// src/bin/visualizer.rs

use eframe::egui;
use egui::{Color32, FontId, Frame, RichText};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};
use market_making_game::book_sim::{simulate_book, BookLevel};
use market_making_game::config::{
    INITIAL_PRICE, INITIAL_VOLATILITY, MAX_SPREAD_PERCENTAGE, ORDER_BOOK_DEPTH, SIMULATION_DAYS,
};
use market_making_game::{resolve, ChallengeManager, DayRecord, Game, Market, DEFAULT_MAKER};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything one finished run leaves behind for the panels to draw.
struct RunOutcome {
    records: Vec<DayRecord>,
    cumulative_pnl: Vec<f64>,
    score: f64,
    bids: Vec<BookLevel>,
    asks: Vec<BookLevel>,
}

fn run_game(seed: u64) -> RunOutcome {
    let market = Market::with_seed(INITIAL_PRICE, INITIAL_VOLATILITY, seed);
    let challenges = ChallengeManager::with_seed(seed.wrapping_add(1));
    let mut game = Game::with_seed(
        market,
        challenges,
        resolve(DEFAULT_MAKER),
        SIMULATION_DAYS,
        seed.wrapping_add(2),
    );
    let score = game.run();

    let records = game.records().to_vec();
    let cumulative_pnl: Vec<f64> = records
        .iter()
        .scan(0.0, |acc, r| {
            *acc += r.pnl;
            Some(*acc)
        })
        .collect();

    // A cosmetic depth ladder around the last quoted mid.
    let mid = records
        .last()
        .map(|r| (r.bid + r.ask) / 2.0)
        .unwrap_or(INITIAL_PRICE);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(3));
    let (bids, asks) = simulate_book(mid, ORDER_BOOK_DEPTH, MAX_SPREAD_PERCENTAGE, &mut rng);

    RunOutcome {
        records,
        cumulative_pnl,
        score,
        bids,
        asks,
    }
}

struct VisualizerApp {
    outcome: RunOutcome,
    next_seed: u64,
}

impl VisualizerApp {
    fn new(seed: u64) -> Self {
        Self {
            outcome: run_game(seed),
            next_seed: seed + 1,
        }
    }

    fn rerun(&mut self) {
        self.outcome = run_game(self.next_seed);
        self.next_seed += 1;
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Volatility Market Making Game");
                ui.add_space(20.0);
                if ui.button("▶ Run Again").clicked() {
                    self.rerun();
                }
            });

            ui.horizontal(|ui| {
                let big_font = FontId::monospace(18.0);
                ui.label("Final Score:");
                ui.label(
                    RichText::new(format!("{:.2}", self.outcome.score))
                        .font(big_font)
                        .color(Color32::LIGHT_GREEN),
                );
                ui.add_space(20.0);
                ui.label(format!("Days simulated: {}", self.outcome.records.len()));
                if let Some(last) = self.outcome.records.last() {
                    ui.add_space(20.0);
                    ui.label(format!("Last challenge: {}", last.challenge));
                }
            });
            ui.separator();

            let half_height = ui.available_height() / 2.0;

            Frame::dark_canvas(ui.style()).show(ui, |ui| {
                Plot::new("pnl_plot")
                    .height(half_height)
                    .width(ui.available_width())
                    .legend(Legend::default())
                    .show(ui, |plot_ui| {
                        let line = Line::new(PlotPoints::from_ys_f64(&self.outcome.cumulative_pnl))
                            .color(Color32::LIGHT_BLUE)
                            .name("Cumulative PnL");
                        plot_ui.line(line);
                    });
            });
            ui.add_space(4.0);

            Frame::dark_canvas(ui.style()).show(ui, |ui| {
                // Bars spaced one ladder step apart; keep them slightly
                // narrower so the levels stay visually distinct.
                let step = self
                    .outcome
                    .bids
                    .first()
                    .map(|(price, _)| (price * MAX_SPREAD_PERCENTAGE / ORDER_BOOK_DEPTH as f64).abs())
                    .unwrap_or(0.1);
                let bid_bars: Vec<Bar> = self
                    .outcome
                    .bids
                    .iter()
                    .map(|&(price, qty)| Bar::new(price, qty as f64).width(step * 0.8))
                    .collect();
                let ask_bars: Vec<Bar> = self
                    .outcome
                    .asks
                    .iter()
                    .map(|&(price, qty)| Bar::new(price, qty as f64).width(step * 0.8))
                    .collect();

                Plot::new("book_plot")
                    .height(ui.available_height())
                    .width(ui.available_width())
                    .legend(Legend::default())
                    .show(ui, |plot_ui| {
                        plot_ui.bar_chart(
                            BarChart::new(bid_bars)
                                .color(Color32::from_rgb(80, 200, 120))
                                .name("Bids"),
                        );
                        plot_ui.bar_chart(
                            BarChart::new(ask_bars)
                                .color(Color32::from_rgb(220, 90, 90))
                                .name("Asks"),
                        );
                    });
            });
        });
    }
}

fn main() -> Result<(), eframe::Error> {
    let app = VisualizerApp::new(1);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Market Making Game Visualizer"),
        ..Default::default()
    };

    eframe::run_native(
        "Market Making Game Visualizer",
        native_options,
        Box::new(|_cc| Box::new(app)),
    )
}
